//! Shared domain types: identifiers, timestamps and the text-backed enums
//! stored in `TEXT` columns with `CHECK` constraints.
//!
//! Each enum's wire and column representation is its snake_case name, so the
//! same string round-trips through JSON bodies, SQL rows and route params.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// Timestamps are always UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

macro_rules! define_text_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $text:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The column / wire representation.
            pub fn as_str(self) -> &'static str {
                match self {
                    $( $name::$variant => $text ),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $text => Ok($name::$variant), )+
                    other => Err(CoreError::Validation(format!(
                        "Unknown {} '{other}'",
                        stringify!($name)
                    ))),
                }
            }
        }
    };
}

define_text_enum! {
    /// Kind of storage device brought in for recovery.
    DeviceType {
        Hdd = "hdd",
        Ssd = "ssd",
        Raid = "raid",
        Usb = "usb",
        Sd = "sd",
        Other = "other",
    }
}

define_text_enum! {
    /// Customer-declared priority of a service request.
    Urgency {
        Low = "low",
        Medium = "medium",
        High = "high",
        Critical = "critical",
    }
}

define_text_enum! {
    /// Lifecycle status of a service request.
    RequestStatus {
        Pending = "pending",
        InProgress = "in_progress",
        Completed = "completed",
    }
}

define_text_enum! {
    /// Inbox status of a contact message.
    ContactStatus {
        New = "new",
        Read = "read",
        Replied = "replied",
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn as_str_round_trips_through_from_str() {
        for status in RequestStatus::ALL {
            assert_eq!(status.as_str().parse::<RequestStatus>().unwrap(), *status);
        }
        for urgency in Urgency::ALL {
            assert_eq!(urgency.to_string().parse::<Urgency>().unwrap(), *urgency);
        }
    }

    #[test]
    fn unknown_text_is_a_validation_error() {
        let err = "picked_up".parse::<RequestStatus>().unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("picked_up"));
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&RequestStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");

        let device: DeviceType = serde_json::from_str("\"raid\"").unwrap();
        assert_eq!(device, DeviceType::Raid);

        assert!(serde_json::from_str::<Urgency>("\"whenever\"").is_err());
    }
}
