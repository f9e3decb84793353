use crate::{BridgeCommand, MethodCall, run_dispatch_loop};

use std::{cell::Cell, sync::mpsc};

use media_bridge_core::MethodResult;
use tokio::sync::oneshot;
use uuid::Uuid;

fn call(method: &str) -> (BridgeCommand, oneshot::Receiver<MethodResult>) {
    let (reply, reply_rx) = oneshot::channel();
    let command = BridgeCommand::Call(MethodCall {
        id: Uuid::new_v4(),
        method: method.to_string(),
        reply,
    });
    (command, reply_rx)
}

/// WHAT: Calls are answered on their reply channel until shutdown
/// WHY: Each caller waits on its own one-shot reply
#[test]
fn given_calls_then_shutdown_when_looping_then_each_answered_and_loop_exits() {
    // Given: Two calls followed by shutdown, plus a call after shutdown
    let (tx, rx) = mpsc::channel();
    let (first, first_rx) = call("playPause");
    let (second, second_rx) = call("unknown");
    let (late, late_rx) = call("nextTrack");
    tx.send(first).unwrap();
    tx.send(second).unwrap();
    tx.send(BridgeCommand::Shutdown).unwrap();
    tx.send(late).unwrap();

    // When
    let handled = Cell::new(0);
    run_dispatch_loop(&rx, |method| {
        handled.set(handled.get() + 1);
        if method == "playPause" {
            MethodResult::success(true)
        } else {
            MethodResult::NotImplemented
        }
    });

    // Then: Calls before shutdown answered, the late one never handled
    assert_eq!(handled.get(), 2);
    assert_eq!(first_rx.blocking_recv().unwrap(), MethodResult::success(true));
    assert_eq!(second_rx.blocking_recv().unwrap(), MethodResult::NotImplemented);
    drop(rx);
    assert!(late_rx.blocking_recv().is_err());
}

/// WHAT: A caller that gave up does not stop the loop
/// WHY: One abandoned call must not take the bridge down
#[test]
fn given_abandoned_reply_when_looping_then_next_call_still_answered() {
    // Given: A call whose reply receiver is dropped, then a live call
    let (tx, rx) = mpsc::channel();
    let (abandoned, abandoned_rx) = call("volumeUp");
    drop(abandoned_rx);
    let (live, live_rx) = call("volumeDown");
    tx.send(abandoned).unwrap();
    tx.send(live).unwrap();
    drop(tx);

    // When: Loop runs until every sender is gone
    run_dispatch_loop(&rx, |_| MethodResult::success(true));

    // Then
    assert_eq!(live_rx.blocking_recv().unwrap(), MethodResult::success(true));
}
