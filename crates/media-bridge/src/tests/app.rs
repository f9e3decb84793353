use crate::{App, AppError, BridgeCommand, run_dispatch_loop};

use std::{cell::RefCell, sync::mpsc};

use media_bridge_core::MethodResult;
use serde_json::Value;
use tokio::{io::BufReader, sync::watch};

fn fake_handle(method: &str) -> MethodResult {
    match method {
        "playPause" => MethodResult::success(true),
        "hasPermission" => MethodResult::success(false),
        _ => MethodResult::NotImplemented,
    }
}

/// WHAT: Each non-blank input line produces exactly one JSON response line
/// WHY: The caller matches responses to calls in order
#[tokio::test]
async fn given_method_lines_when_running_then_one_response_per_call_in_order() {
    // Given: Three calls with a blank line in between, and a dispatch thread
    let input: &[u8] = b"playPause\n\n  seekTo  \nhasPermission\n";
    let mut output = Vec::new();
    let (bridge_tx, bridge_rx) = mpsc::channel();
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    let dispatch = std::thread::spawn(move || {
        let seen = RefCell::new(Vec::new());
        run_dispatch_loop(&bridge_rx, |method| {
            seen.borrow_mut().push(method.to_string());
            fake_handle(method)
        });
        seen.into_inner()
    });

    // When: Running until the input closes
    let app = App {
        reader: BufReader::new(input),
        writer: &mut output,
        bridge_tx,
        shutdown_rx,
    };
    let result = app.run().await;

    // Then: Clean exit, dispatch loop stopped after seeing every call
    assert!(result.is_ok());
    let seen = dispatch.join().unwrap();
    assert_eq!(seen, vec!["playPause", "seekTo", "hasPermission"]);

    // Then: One JSON line per call, in order
    let lines: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["method"], "playPause");
    assert_eq!(
        lines[0]["result"],
        serde_json::json!({"status": "success", "value": true})
    );
    assert_eq!(lines[1]["method"], "seekTo");
    assert_eq!(
        lines[1]["result"],
        serde_json::json!({"status": "not_implemented"})
    );
    assert_eq!(lines[2]["method"], "hasPermission");
    assert_eq!(lines[2]["result"]["value"], false);

    // Then: Every call has its own correlation ID
    assert_ne!(lines[0]["id"], lines[2]["id"]);
}

/// WHAT: A shutdown signal stops the channel while input stays open
/// WHY: Ctrl-C must not wait for the caller to close stdin
#[tokio::test]
async fn given_open_input_when_shutdown_signalled_then_run_returns_and_dispatch_stops() {
    // Given: An input stream whose writer stays open, shutdown already signalled
    let (client, _server) = tokio::io::duplex(64);
    let mut output = Vec::new();
    let (bridge_tx, bridge_rx) = mpsc::channel();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    shutdown_tx.send(true).unwrap();

    // When
    let app = App {
        reader: BufReader::new(client),
        writer: &mut output,
        bridge_tx,
        shutdown_rx,
    };
    let result = app.run().await;

    // Then: Run ends cleanly and the dispatch thread is told to stop
    assert!(result.is_ok());
    assert!(matches!(bridge_rx.recv(), Ok(BridgeCommand::Shutdown)));
    assert!(output.is_empty());
}

/// WHAT: A missing dispatch thread surfaces as a channel error
/// WHY: Calls must not hang when nothing can answer them
#[tokio::test]
async fn given_dispatch_thread_gone_when_calling_then_channel_send_failed() {
    // Given: Receiver dropped
    let input: &[u8] = b"playPause\n";
    let mut output = Vec::new();
    let (bridge_tx, bridge_rx) = mpsc::channel();
    drop(bridge_rx);
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    // When
    let app = App {
        reader: BufReader::new(input),
        writer: &mut output,
        bridge_tx,
        shutdown_rx,
    };
    let result = app.run().await;

    // Then
    assert!(matches!(result, Err(AppError::ChannelSendFailed { .. })));
    assert!(output.is_empty());
}

/// WHAT: A call dropped without a reply surfaces as a receive error
/// WHY: The caller gets a failure instead of waiting forever
#[tokio::test]
async fn given_dispatch_drops_reply_when_calling_then_channel_receive_failed() {
    // Given: A dispatch thread that drops every call unanswered
    let input: &[u8] = b"nextTrack\n";
    let mut output = Vec::new();
    let (bridge_tx, bridge_rx) = mpsc::channel::<BridgeCommand>();
    let (_shutdown_tx, shutdown_rx) = watch::channel(false);

    let dispatch = std::thread::spawn(move || {
        while let Ok(command) = bridge_rx.recv() {
            if let BridgeCommand::Shutdown = command {
                break;
            }
        }
    });

    // When
    let app = App {
        reader: BufReader::new(input),
        writer: &mut output,
        bridge_tx,
        shutdown_rx,
    };
    let result = app.run().await;

    // Then
    assert!(matches!(result, Err(AppError::ChannelReceiveFailed { .. })));
    dispatch.join().unwrap();
}
