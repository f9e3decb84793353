use media_bridge_core::MethodResult;

use tokio::sync::oneshot;
use uuid::Uuid;

/// One method call forwarded to the dispatch thread.
#[derive(Debug)]
pub struct MethodCall {
    /// Correlation ID for logs and the response line.
    pub id: Uuid,
    /// Wire method name as received.
    pub method: String,
    /// Where the dispatch thread sends the result.
    pub reply: oneshot::Sender<MethodResult>,
}
