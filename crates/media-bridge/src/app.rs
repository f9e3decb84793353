use crate::{AppError, AppResult, BridgeCommand, MethodCall, MethodResponse};

use std::{panic::Location, sync::mpsc::Sender};

use error_location::ErrorLocation;
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::{oneshot, watch},
};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Command channel endpoint.
///
/// Runs on the async runtime thread. Reads one method name per line,
/// forwards each call to the main thread via `bridge_tx` and writes the
/// JSON response before reading the next line, so one call is in flight
/// at a time.
pub struct App<R, W> {
    pub(crate) reader: R,
    pub(crate) writer: W,
    pub(crate) bridge_tx: Sender<BridgeCommand>,
    pub(crate) shutdown_rx: watch::Receiver<bool>,
}

impl<R, W> App<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Run until the input closes or shutdown is signalled.
    ///
    /// The main thread is always told to shut down on exit, including on error.
    #[instrument(skip(self))]
    pub(crate) async fn run(self) -> AppResult<()> {
        info!("Media bridge listening for commands");

        let App {
            reader,
            mut writer,
            bridge_tx,
            mut shutdown_rx,
        } = self;

        let result = Self::serve(reader, &mut writer, &bridge_tx, &mut shutdown_rx).await;

        let _ = bridge_tx.send(BridgeCommand::Shutdown);
        info!("Media bridge stopped accepting commands");

        result
    }

    async fn serve(
        reader: R,
        writer: &mut W,
        bridge_tx: &Sender<BridgeCommand>,
        shutdown_rx: &mut watch::Receiver<bool>,
    ) -> AppResult<()> {
        let mut lines = reader.lines();

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => {
                    info!("Shutdown requested");
                    break;
                }

                line = lines.next_line() => {
                    match line? {
                        Some(line) => {
                            let method = line.trim();
                            if method.is_empty() {
                                continue;
                            }
                            Self::call(method, writer, bridge_tx).await?;
                        }
                        None => {
                            info!("Input closed");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }

    /// Forward one call and write its response line.
    #[instrument(skip(writer, bridge_tx))]
    async fn call(method: &str, writer: &mut W, bridge_tx: &Sender<BridgeCommand>) -> AppResult<()> {
        let id = Uuid::new_v4();
        let (reply_tx, reply_rx) = oneshot::channel();

        bridge_tx
            .send(BridgeCommand::Call(MethodCall {
                id,
                method: method.to_string(),
                reply: reply_tx,
            }))
            .map_err(|e| AppError::ChannelSendFailed {
                message: format!("Failed to send {}: {}", method, e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let result = reply_rx.await.map_err(|e| AppError::ChannelReceiveFailed {
            message: format!("No reply for {}: {}", method, e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let line = MethodResponse {
            id,
            method,
            result: &result,
        }
        .to_line()?;

        writer.write_all(&line).await?;
        writer.flush().await?;

        debug!(call_id = %id, success = result.is_success(), "Response written");

        Ok(())
    }
}
