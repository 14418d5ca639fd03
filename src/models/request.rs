//! Connection requests exchanged between users.

use serde_json::Value;

use super::{is_truthy, Record};

/// A pending or accepted request. Sender/recipient fields are up to the caller.
pub type Request = Record;

pub const ACCEPTED_FIELD: &str = "accepted";

/// A request is pending until `accepted` is truthy.
pub fn is_pending(request: &Request) -> bool {
    !is_truthy(request.get(ACCEPTED_FIELD))
}

pub fn mark_accepted(request: &mut Request) {
    request.insert(ACCEPTED_FIELD.to_string(), Value::Bool(true));
}
