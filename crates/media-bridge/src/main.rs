//! Media Bridge: control the active media session over a line-oriented channel.

mod app;
mod bridge_command;
mod config;
mod dispatch_loop;
mod error;
mod method_call;
mod method_response;
mod platform;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    bridge_command::BridgeCommand,
    dispatch_loop::run_dispatch_loop,
    error::{AppError, Result as AppResult},
    method_call::MethodCall,
    method_response::MethodResponse,
};

use crate::{
    config::Config,
    platform::{DesktopRegistry, FileAccessSettings, ListenerService, SystemMixer},
};

use std::{sync::mpsc, time::Duration};

use media_bridge_core::{CommandDispatcher, ListenerState, SessionAccessGate};
use tokio::{io::BufReader, sync::watch};
use tracing::{error, info, warn};

/// Desktop dispatcher type.
type DesktopDispatcher = CommandDispatcher<FileAccessSettings, DesktopRegistry, SystemMixer>;

/// Application entry point.
fn main() {
    // stdout carries responses; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter("media_bridge=debug,media_bridge_core=debug")
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let dispatcher = match build_dispatcher(&config) {
        Ok(d) => d,
        Err(e) => {
            error!("Failed to set up media bridge: {:?}", e);
            std::process::exit(1);
        }
    };

    // Dropping the service at the end of main reports listener teardown.
    let listener = ListenerService::start(ListenerState::global());

    let (bridge_tx, bridge_rx) = mpsc::channel::<BridgeCommand>();
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Spawn tokio runtime on separate thread.
    // The dispatcher and host handles stay on the main thread.
    let io_thread = std::thread::spawn(move || {
        let rt = match tokio::runtime::Runtime::new() {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to create tokio runtime: {:?}", e);
                let _ = bridge_tx.send(BridgeCommand::Shutdown);
                return;
            }
        };

        rt.block_on(async {
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    info!("Ctrl-C received");
                    let _ = shutdown_tx.send(true);
                }
            });

            let app = App {
                reader: BufReader::new(tokio::io::stdin()),
                writer: tokio::io::stdout(),
                bridge_tx,
                shutdown_rx,
            };

            if let Err(e) = app.run().await {
                error!(error = ?e, "Command channel error");
            }
        });

        // stdin reads run on a blocking thread that may never return.
        rt.shutdown_timeout(Duration::from_secs(1));
    });

    run_dispatch_loop(&bridge_rx, |method| dispatcher.handle(method));

    drop(listener);

    if io_thread.join().is_err() {
        warn!("Command channel thread panicked");
    }

    info!("Media bridge shut down");
}

fn build_dispatcher(config: &Config) -> AppResult<DesktopDispatcher> {
    let settings = FileAccessSettings::in_config_dir(&Config::config_dir()?);
    settings.ensure_exists()?;

    info!(
        component = %config.listener.component(),
        settings_path = ?settings.path(),
        "Listener access settings ready"
    );

    let gate = SessionAccessGate::new(
        settings,
        config.listener.component(),
        ListenerState::global(),
    );

    Ok(CommandDispatcher::new(
        gate,
        DesktopRegistry::new(config.volume.step_fraction()),
        SystemMixer::new(config.volume.step_percent),
    )
    .with_volume_ui(config.volume.show_ui))
}
