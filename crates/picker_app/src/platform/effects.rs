use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use picker_core::{Effect, Msg};
use picker_engine::{EngineEvent, EngineHandle, FetchSettings};
use picker_logging::{picker_debug, picker_error, picker_info, picker_warn};

/// Executes IO and timer effects; everything else is for the renderer.
pub struct EffectRunner {
    engine: EngineHandle,
    exit_animation: Duration,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(settings: FetchSettings, exit_animation: Duration, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            exit_animation,
            msg_tx,
        }
    }

    /// Start IO and timers for `effects`. All effects are handed back so the
    /// presentation layer sees every signal.
    pub fn run(&self, effects: Vec<Effect>) -> Vec<Effect> {
        for effect in &effects {
            match effect {
                Effect::FetchCatalog { source } => {
                    picker_info!("FetchCatalog source={}", source);
                    self.engine.fetch(source.clone());
                }
                Effect::AnimateExit { token, .. } => {
                    let msg_tx = self.msg_tx.clone();
                    let token = *token;
                    let delay = self.exit_animation;
                    thread::spawn(move || {
                        thread::sleep(delay);
                        let _ = msg_tx.send(Msg::ExitAnimationFinished { token });
                    });
                }
                Effect::FetchFailed { message } => {
                    picker_error!("Catalog fetch failed: {}", message);
                }
                Effect::CapacityExceeded { max, .. } => {
                    picker_info!("Selection rejected at capacity {}", max);
                }
                Effect::BindGestures { binding } => {
                    picker_debug!("Bind gestures {:?}", binding);
                }
                Effect::UnbindGestures { binding } => {
                    picker_debug!("Unbind gestures {:?}", binding);
                }
                _ => {}
            }
        }
        effects
    }

    /// Drain finished engine work as messages.
    pub fn poll_engine(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.engine.try_recv() {
            match event {
                EngineEvent::CatalogFetched { source, result } => match result {
                    Ok(output) => {
                        picker_info!(
                            "Catalog ready source={} bytes={}",
                            source,
                            output.metadata.byte_len
                        );
                        msgs.push(Msg::CatalogFetched { text: output.text });
                    }
                    Err(err) => {
                        picker_warn!("Catalog fetch from {} failed: {}", source, err);
                        msgs.push(Msg::CatalogFetchFailed {
                            message: err.to_string(),
                        });
                    }
                },
            }
        }
        msgs
    }
}
