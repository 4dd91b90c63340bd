//! Role names embedded in access tokens.

/// Staff role allowed to read and modify every record.
pub const ROLE_ADMIN: &str = "admin";
