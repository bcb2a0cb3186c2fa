use validator::Validate;

use crate::errors::AppResult;

pub fn validate_payload<T: Validate>(payload: &T) -> AppResult<()> {
    payload.validate()?;
    Ok(())
}

pub fn validate_log_level(level: &str) -> Result<(), validator::ValidationError> {
    match level.to_ascii_lowercase().as_str() {
        "error" | "warn" | "info" | "debug" | "trace" | "off" => Ok(()),
        _ => Err(validator::ValidationError::new("Log level must be one of error, warn, info, debug, trace, off")),
    }
}
