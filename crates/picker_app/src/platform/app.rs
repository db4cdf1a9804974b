use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use picker_core::{update, AppState, Effect, Msg};
use picker_logging::{picker_debug, picker_info, picker_warn, set_dispatch_seq};

use super::cli::Args;
use super::config;
use super::effects::EffectRunner;
use super::logging;
use super::ui::input::{is_quit, parse_command, Command, HELP};
use super::ui::render::{describe_effect, render};

const POLL_INTERVAL: Duration = Duration::from_millis(20);

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let (mut config, config_error) = match config::load(&args.config) {
        Ok(config) => (config, None),
        Err(err) => (config::PickerConfig::default(), Some(err)),
    };
    if let Some(source) = args.source {
        config.catalog_source = source;
    }
    let destination = args.log.unwrap_or(config.log_destination);
    logging::initialize(destination, config.log_level, &config.log_file)?;
    if let Some(err) = config_error {
        picker_warn!("{}; using defaults", err);
    }
    picker_info!("Starting picker with source {}", config.catalog_source);

    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let (line_tx, line_rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
    });

    let runner = EffectRunner::new(config.fetch_settings(), config.exit_animation(), msg_tx);
    let mut driver = Driver::new(AppState::with_source(config.catalog_source.clone()), runner);
    driver.print_frame();
    driver.run(&msg_rx, &line_rx)?;
    picker_info!("Picker exiting");
    Ok(())
}

/// Owns the state and feeds it one message at a time.
///
/// Input lines wait while a fetch or exit animation is in flight, the way a
/// user waits for the card to leave before touching the next one. `quit` is
/// the exception.
struct Driver {
    state: AppState,
    runner: EffectRunner,
    pending_lines: VecDeque<String>,
    in_flight: usize,
    input_closed: bool,
    quit: bool,
    seq: u64,
    out: io::Stdout,
}

impl Driver {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            pending_lines: VecDeque::new(),
            in_flight: 0,
            input_closed: false,
            quit: false,
            seq: 0,
            out: io::stdout(),
        }
    }

    fn run(
        &mut self,
        msg_rx: &mpsc::Receiver<Msg>,
        line_rx: &mpsc::Receiver<String>,
    ) -> io::Result<()> {
        while !self.finished() {
            loop {
                match line_rx.try_recv() {
                    Ok(line) => self.pending_lines.push_back(line),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        self.input_closed = true;
                        break;
                    }
                }
            }

            match msg_rx.recv_timeout(POLL_INTERVAL) {
                Ok(msg) => self.dispatch(msg)?,
                Err(mpsc::RecvTimeoutError::Timeout) => {}
                Err(mpsc::RecvTimeoutError::Disconnected) => self.quit = true,
            }
            for msg in self.runner.poll_engine() {
                self.dispatch(msg)?;
            }

            if self.in_flight > 0 && self.pending_lines.iter().any(|line| is_quit(line)) {
                picker_info!("Quit requested with {} operation(s) in flight", self.in_flight);
                self.quit = true;
            }
            while self.in_flight == 0 && !self.quit {
                let Some(line) = self.pending_lines.pop_front() else {
                    break;
                };
                self.handle_line(&line)?;
            }
        }
        Ok(())
    }

    fn finished(&self) -> bool {
        self.quit || (self.input_closed && self.pending_lines.is_empty() && self.in_flight == 0)
    }

    fn handle_line(&mut self, line: &str) -> io::Result<()> {
        match parse_command(line, &self.state.view()) {
            Ok(Command::Msgs(msgs)) => {
                for msg in msgs {
                    self.dispatch(msg)?;
                }
            }
            Ok(Command::Help) => writeln!(self.out, "{HELP}")?,
            Ok(Command::Quit) => self.quit = true,
            Err(err) => writeln!(self.out, "  ? {err}")?,
        }
        Ok(())
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        self.seq += 1;
        set_dispatch_seq(self.seq);
        picker_debug!("Dispatch {:?}", msg);

        if matches!(
            msg,
            Msg::CatalogFetched { .. }
                | Msg::CatalogFetchFailed { .. }
                | Msg::ExitAnimationFinished { .. }
        ) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        self.in_flight += effects
            .iter()
            .filter(|e| matches!(e, Effect::FetchCatalog { .. } | Effect::AnimateExit { .. }))
            .count();

        for effect in self.runner.run(effects) {
            if let Some(line) = describe_effect(&effect) {
                writeln!(self.out, "{line}")?;
            }
        }

        if self.state.consume_dirty() {
            self.print_frame();
        }
        Ok(())
    }

    fn print_frame(&mut self) {
        let view = self.state.view();
        let mut out = self.out.lock();
        for line in render(&view) {
            let _ = writeln!(out, "{line}");
        }
        let _ = out.flush();
    }
}
