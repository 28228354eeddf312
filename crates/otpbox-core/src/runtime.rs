use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use crossterm::{
    cursor,
    event::{DisableBracketedPaste, EnableBracketedPaste, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// Output target for the terminal UI.
///
/// By default the UI renders to **stdout**. Switch to
/// [`Stderr`](OutputTarget::Stderr) when stdout is piped, e.g. to hand the
/// entered code to another process.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout (default).
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
}

enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

/// Errors that can occur while initializing or running a [`Program`].
#[derive(Debug, thiserror::Error)]
pub enum ProgramError {
    /// An I/O error from terminal setup, rendering, or teardown.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration options for a [`Program`].
///
/// Use struct update syntax to override only what you need:
///
/// ```rust,ignore
/// let opts = ProgramOptions {
///     title: Some("Verify".into()),
///     log_file: Some("otpbox.log".into()),
///     ..ProgramOptions::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ProgramOptions {
    /// Redraw rate cap in frames per second (default: 60, clamped to 1..=120).
    pub fps: u32,
    /// Start in alternate screen (default: true).
    pub alt_screen: bool,
    /// Enable bracketed paste (default: true).
    pub bracketed_paste: bool,
    /// Set terminal title.
    pub title: Option<String>,
    /// Restore the terminal before the default panic hook runs (default: true).
    pub catch_panics: bool,
    /// Quit on Ctrl-C delivered as a signal (default: true).
    pub handle_signals: bool,
    /// Append runtime diagnostics to this file.
    pub log_file: Option<std::path::PathBuf>,
    /// Output target: stdout (default) or stderr.
    pub output: OutputTarget,
}

impl Default for ProgramOptions {
    fn default() -> Self {
        Self {
            fps: 60,
            alt_screen: true,
            bracketed_paste: true,
            title: None,
            catch_panics: true,
            handle_signals: true,
            log_file: None,
            output: OutputTarget::default(),
        }
    }
}

/// The program runtime. Owns the terminal and drives the [`Model`] lifecycle.
///
/// Terminal events are offered to [`Model::handle_event`]; resulting messages
/// and any messages produced by [`Command`]s are processed strictly in
/// arrival order. Rendering is coalesced to at most one frame per tick.
///
/// ```rust,ignore
/// let model = Program::<VerifyApp>::new(flags)?.run().await?;
/// ```
pub struct Program<M: Model> {
    model: M,
    terminal: Terminal<CrosstermBackend<Output>>,
    msg_tx: mpsc::UnboundedSender<M::Message>,
    msg_rx: mpsc::UnboundedReceiver<M::Message>,
    options: ProgramOptions,
    needs_redraw: bool,
    should_quit: bool,
    log_file: Option<std::fs::File>,
}

impl<M: Model> Program<M> {
    /// Create a new program with default options.
    pub fn new(flags: M::Flags) -> Result<Self, ProgramError> {
        Self::with_options(flags, ProgramOptions::default())
    }

    /// Create a new program with custom options.
    ///
    /// Returns an error if the log file cannot be opened or terminal
    /// initialization fails.
    pub fn with_options(flags: M::Flags, options: ProgramOptions) -> Result<Self, ProgramError> {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();

        let log_file = match options.log_file {
            Some(ref path) => Some(log_to_file(path)?),
            None => None,
        };

        let (model, init_cmd) = M::init(flags);
        let terminal = init_terminal(&options)?;

        let mut program = Self {
            model,
            terminal,
            msg_tx,
            msg_rx,
            options,
            needs_redraw: true,
            should_quit: false,
            log_file,
        };

        program.debug_log("program initialized");
        program.execute_command(init_cmd);

        Ok(program)
    }

    /// Run the program until a quit command or signal. Returns the final model.
    pub async fn run(mut self) -> Result<M, ProgramError> {
        let result = self.event_loop().await;

        self.debug_log("shutting down");
        restore_terminal(&self.options)?;
        result?;

        Ok(self.model)
    }

    async fn event_loop(&mut self) -> Result<(), ProgramError> {
        self.render()?;

        let fps = self.options.fps.clamp(1, 120);
        let mut frame_interval = tokio::time::interval(Duration::from_secs_f64(1.0 / fps as f64));
        frame_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let handle_signals = self.options.handle_signals;
        let mut events = EventStream::new();

        while !self.should_quit {
            tokio::select! {
                biased;

                _ = tokio::signal::ctrl_c(), if handle_signals => {
                    self.debug_log("received ctrl+c signal");
                    return Ok(());
                }

                Some(msg) = self.msg_rx.recv() => {
                    self.process_message(msg);
                }

                event = events.next() => match event {
                    Some(Ok(event)) => {
                        if let Some(msg) = self.model.handle_event(TerminalEvent::from(event)) {
                            self.process_message(msg);
                        }
                    }
                    Some(Err(err)) => {
                        self.debug_log(&format!("terminal event error: {err}"));
                    }
                    None => {
                        self.debug_log("terminal event stream closed");
                        return Ok(());
                    }
                },

                _ = frame_interval.tick() => {
                    if self.needs_redraw {
                        self.render()?;
                        self.needs_redraw = false;
                    }
                }
            }
        }

        Ok(())
    }

    fn process_message(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.execute_command(cmd);
        self.needs_redraw = true;
    }

    fn execute_command(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => {
                // The receiver lives in `self`, so the send cannot fail here.
                let _ = self.msg_tx.send(msg);
            }
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.execute_command(cmd);
                }
            }
            CommandInner::SetTitle(title) => {
                let mut writer = Output::new(self.options.output);
                if let Err(err) = execute!(writer, SetTitle(&title)) {
                    self.debug_log(&format!("set title failed: {err}"));
                }
            }
            CommandInner::Quit => {
                self.should_quit = true;
            }
        }
    }

    fn debug_log(&mut self, msg: &str) {
        if let Some(ref mut f) = self.log_file {
            let _ = writeln!(f, "{msg}");
        }
    }

    fn render(&mut self) -> Result<(), ProgramError> {
        self.terminal.draw(|frame| {
            self.model.view(frame);
        })?;
        Ok(())
    }
}

fn init_terminal(
    options: &ProgramOptions,
) -> Result<Terminal<CrosstermBackend<Output>>, ProgramError> {
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        let output_target = options.output;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen, output_target);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = Output::new(options.output);

    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    if let Some(ref title) = options.title {
        execute!(writer, SetTitle(title))?;
    }
    execute!(writer, cursor::Hide)?;

    Ok(Terminal::new(CrosstermBackend::new(writer))?)
}

fn restore_terminal(options: &ProgramOptions) -> Result<(), ProgramError> {
    restore_terminal_minimal(options.alt_screen, options.output)?;
    Ok(())
}

fn restore_terminal_minimal(alt_screen: bool, output_target: OutputTarget) -> io::Result<()> {
    // Best effort: keep restoring even if a step fails.
    let raw = disable_raw_mode();
    let mut writer = Output::new(output_target);
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

/// Open a log file in append mode, creating it if needed.
///
/// Terminal apps own stdout, so diagnostics go to a file instead.
///
/// ```no_run
/// use otpbox_core::runtime::log_to_file;
/// use std::io::Write;
///
/// let mut f = log_to_file("otpbox.log").unwrap();
/// writeln!(f, "debug message").unwrap();
/// ```
pub fn log_to_file(path: impl AsRef<std::path::Path>) -> Result<std::fs::File, std::io::Error> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = ProgramOptions::default();
        assert_eq!(opts.fps, 60);
        assert!(opts.alt_screen);
        assert!(opts.bracketed_paste);
        assert!(opts.log_file.is_none());
        assert_eq!(opts.output, OutputTarget::Stdout);
    }

    #[test]
    fn log_to_file_appends() {
        let path = std::env::temp_dir().join(format!("otpbox-log-{}.log", std::process::id()));
        {
            let mut f = log_to_file(&path).unwrap();
            writeln!(f, "first").unwrap();
        }
        {
            let mut f = log_to_file(&path).unwrap();
            writeln!(f, "second").unwrap();
        }
        let contents = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn program_error_displays_io_source() {
        let err = ProgramError::from(io::Error::other("no tty"));
        assert_eq!(err.to_string(), "IO error: no tty");
    }
}
