use std::sync::{mpsc, Arc};
use std::thread;

use picker_logging::{picker_debug, picker_error, picker_info};

use crate::fetch::{FetchSettings, Fetcher, SourceFetcher};
use crate::{CatalogSource, EngineEvent, FailureKind, FetchError};

enum EngineCommand {
    Fetch { source: String },
}

/// Background IO worker. Commands go in over a channel, events come back
/// through [`EngineHandle::try_recv`].
///
/// Every accepted fetch produces exactly one event, including when the worker
/// could not start.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_fetcher(Arc::new(SourceFetcher::new(settings)))
    }

    pub fn with_fetcher(fetcher: Arc<dyn Fetcher>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let worker_tx = event_tx.clone();

        thread::spawn(move || {
            let event_tx = worker_tx;
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    picker_error!("Failed to start engine runtime: {}", err);
                    while let Ok(EngineCommand::Fetch { source }) = cmd_rx.recv() {
                        let _ = event_tx.send(unavailable(source));
                    }
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let fetcher = fetcher.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(fetcher.as_ref(), command, event_tx).await;
                });
            }
            picker_debug!("Engine command channel closed");
        });

        Self {
            cmd_tx,
            event_tx,
            event_rx,
        }
    }

    pub fn fetch(&self, source: impl Into<String>) {
        let command = EngineCommand::Fetch {
            source: source.into(),
        };
        if let Err(mpsc::SendError(EngineCommand::Fetch { source })) = self.cmd_tx.send(command) {
            picker_error!("Engine worker is gone; failing fetch of {}", source);
            // The handle owns the receiver, so this send cannot fail.
            let _ = self.event_tx.send(unavailable(source));
        }
    }

    /// Next finished event, if any. Never blocks.
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocking counterpart of [`EngineHandle::try_recv`]: waits up to
    /// `timeout` for the next event.
    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn unavailable(source: String) -> EngineEvent {
    EngineEvent::CatalogFetched {
        source,
        result: Err(FetchError::new(
            FailureKind::EngineUnavailable,
            "background worker is not running",
        )),
    }
}

async fn handle_command(
    fetcher: &dyn Fetcher,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Fetch { source } => {
            let result = match CatalogSource::parse(&source) {
                Ok(parsed) => fetcher.fetch(&parsed).await,
                Err(err) => Err(err),
            };
            if let Ok(output) = &result {
                picker_info!(
                    "Fetched catalog source={} bytes={} encoding={}",
                    output.metadata.source,
                    output.metadata.byte_len,
                    output.metadata.encoding_label
                );
            }
            let _ = event_tx.send(EngineEvent::CatalogFetched { source, result });
        }
    }
}
