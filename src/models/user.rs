//! User records and the fields the user endpoints read.

use serde_json::Value;

use super::Record;

/// A registered user. Carries `id`, and by convention `email`, `password`
/// (plaintext) and `privateSetting`, plus whatever else was registered.
pub type User = Record;

pub const EMAIL_FIELD: &str = "email";
pub const PASSWORD_FIELD: &str = "password";
pub const PRIVATE_SETTING_FIELD: &str = "privateSetting";

/// Set `privateSetting`; an absent setting removes the field, an explicit `null` is stored.
pub fn set_private_setting(user: &mut User, setting: Option<Value>) {
    match setting {
        Some(value) => {
            user.insert(PRIVATE_SETTING_FIELD.to_string(), value);
        }
        None => {
            user.retain(|key, _| key.as_str() != PRIVATE_SETTING_FIELD);
        }
    }
}
