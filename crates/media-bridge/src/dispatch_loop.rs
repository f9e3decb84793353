use crate::BridgeCommand;

use std::sync::mpsc::Receiver;

use media_bridge_core::MethodResult;
use tracing::{info, warn};

/// Handle calls on the current thread until shutdown or until every sender
/// is gone. Each call runs to completion before the next is received.
pub(crate) fn run_dispatch_loop<F>(bridge_rx: &Receiver<BridgeCommand>, handle: F)
where
    F: Fn(&str) -> MethodResult,
{
    while let Ok(command) = bridge_rx.recv() {
        match command {
            BridgeCommand::Call(call) => {
                let result = handle(&call.method);
                if call.reply.send(result).is_err() {
                    warn!(call_id = %call.id, "Caller went away before the reply");
                }
            }
            BridgeCommand::Shutdown => {
                info!("Dispatch loop stopping");
                break;
            }
        }
    }
}
