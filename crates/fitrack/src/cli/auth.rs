//! Admin login gate.
//!
//! A placeholder: one fixed credential compiled into the binary. It is not
//! a security boundary.

use fitrackapp::error::{FitrackError, Result};

const ADMIN_ID: &str = "admin";
const ADMIN_PASSWORD: &str = "admin123";

pub fn check_admin(admin_id: &str, password: &str) -> Result<()> {
    if admin_id == ADMIN_ID && password == ADMIN_PASSWORD {
        Ok(())
    } else {
        Err(FitrackError::Api("Invalid credentials".to_string()))
    }
}
