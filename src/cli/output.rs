use serde::Serialize;

use crate::error::{MovieError, Result};

/// Print `value` to stdout as pretty JSON.
pub fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value)?;
    println!("{payload}");
    Ok(())
}

/// Error object printed on stdout in `--json` mode.
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub error: bool,
    pub code: &'a str,
    pub message: String,
}

impl<'a> From<&'a MovieError> for ErrorReport<'a> {
    fn from(err: &'a MovieError) -> Self {
        Self {
            error: true,
            code: err.code(),
            message: err.to_string(),
        }
    }
}
