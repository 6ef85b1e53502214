use serde_json::Value;

pub const CODE_INTERNAL: &str = "MIRA-HOST-500";
pub const CODE_NOT_FOUND: &str = "MIRA-HOST-404";

/// Plain-text bodies used by the content responder.
pub const BODY_NOT_FOUND: &str = "File not found";
pub const BODY_READ_FAILED: &str = "File read failed";

pub fn internal_error_json(details: &str) -> Value {
    error_json(CODE_INTERNAL, "Internal error", Some(details))
}

pub fn not_found_json(details: &str) -> Value {
    error_json(CODE_NOT_FOUND, "Not found", Some(details))
}

pub fn error_json(code: &str, safe_message: &str, details: Option<&str>) -> Value {
    let message = if cfg!(debug_assertions) {
        details.unwrap_or(safe_message)
    } else {
        safe_message
    };
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}
