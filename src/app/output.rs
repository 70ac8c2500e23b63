//! Canonical command output helper.

use serde::Serialize;

use crate::domain::AppError;

/// Write `output` to stdout as compact single-line JSON.
pub fn write_json_output<T: Serialize>(output: &T) -> Result<(), AppError> {
    let json = serde_json::to_string(output)
        .map_err(|e| AppError::InternalError(format!("Failed to serialize output: {}", e)))?;

    debug_assert!(!json.contains('\n'), "command output JSON must be single-line");

    println!("{}", json);
    Ok(())
}
