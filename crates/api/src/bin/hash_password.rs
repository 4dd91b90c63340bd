//! Print an Argon2id hash for `ADMIN_PASSWORD_HASH`.
//!
//! Usage: `hash-password <password>`

use datalab_api::auth::password::hash_password;

fn main() {
    let Some(password) = std::env::args().nth(1) else {
        eprintln!("usage: hash-password <password>");
        std::process::exit(2);
    };

    match hash_password(&password) {
        Ok(hash) => println!("{hash}"),
        Err(e) => {
            eprintln!("failed to hash password: {e}");
            std::process::exit(1);
        }
    }
}
