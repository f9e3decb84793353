use crate::MethodCall;

/// Commands sent from the async runtime to the main dispatch thread.
///
/// The main thread owns the dispatcher (host session handles are `!Send`),
/// so every call and the shutdown request flow through this enum.
#[derive(Debug)]
pub enum BridgeCommand {
    /// Handle a method call and reply on its channel.
    Call(MethodCall),
    /// Stop the dispatch loop.
    Shutdown,
}
