use media_bridge_core::MethodResult;

use serde::Serialize;
use uuid::Uuid;

/// One response line written to stdout.
#[derive(Debug, Serialize)]
pub struct MethodResponse<'a> {
    /// Correlation ID of the call.
    pub id: Uuid,
    /// Method name as received.
    pub method: &'a str,
    /// Outcome of the call.
    pub result: &'a MethodResult,
}

impl MethodResponse<'_> {
    /// JSON encoding terminated by a newline.
    pub fn to_line(&self) -> serde_json::Result<Vec<u8>> {
        let mut line = serde_json::to_vec(self)?;
        line.push(b'\n');
        Ok(line)
    }
}
