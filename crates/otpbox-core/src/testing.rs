use crate::command::{Command, CommandInner};
use crate::event::TerminalEvent;
use crate::model::Model;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

/// A headless test harness that drives a [`Model`] without a real terminal.
///
/// Messages produced by commands are queued and can be flushed with
/// [`drain_messages`](TestProgram::drain_messages); title changes are
/// ignored. A quit request is recorded in
/// [`quit_requested`](TestProgram::quit_requested).
///
/// ```rust,ignore
/// use otpbox_core::testing::TestProgram;
///
/// let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(3));
/// prog.send_event(TerminalEvent::Key(key(KeyCode::Char('1'))));
/// prog.drain_messages();
/// assert!(prog.render_string(40, 5).contains("1"));
/// ```
pub struct TestProgram<M: Model> {
    model: M,
    pending_messages: Vec<M::Message>,
    quit_requested: bool,
}

impl<M: Model> TestProgram<M> {
    /// Create a test program by calling [`Model::init`] with the given flags.
    pub fn new(flags: M::Flags) -> Self {
        let (model, init_cmd) = M::init(flags);
        let mut program = Self {
            model,
            pending_messages: Vec::new(),
            quit_requested: false,
        };
        program.collect_sync_messages(init_cmd);
        program
    }

    /// Send a message, triggering a single update cycle.
    ///
    /// Messages produced by the returned command are queued, not processed.
    pub fn send(&mut self, msg: M::Message) {
        let cmd = self.model.update(msg);
        self.collect_sync_messages(cmd);
    }

    /// Offer a terminal event to [`Model::handle_event`] and send the
    /// resulting message, if any. Returns whether a message was produced.
    pub fn send_event(&mut self, event: TerminalEvent) -> bool {
        match self.model.handle_event(event) {
            Some(msg) => {
                self.send(msg);
                true
            }
            None => false,
        }
    }

    /// Process queued messages until no new ones are generated.
    pub fn drain_messages(&mut self) {
        while !self.pending_messages.is_empty() {
            let messages: Vec<_> = self.pending_messages.drain(..).collect();
            for msg in messages {
                let cmd = self.model.update(msg);
                self.collect_sync_messages(cmd);
            }
        }
    }

    /// Get a shared reference to the model for assertions.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Whether any processed command asked the program to quit.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Render the model to a ratatui [`Buffer`] of the given dimensions.
    pub fn render(&self, width: u16, height: u16) -> Buffer {
        let backend = ratatui::backend::TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                self.model.view(frame);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    /// Render the model and return the visible content as a plain string,
    /// one line per row.
    pub fn render_string(&self, width: u16, height: u16) -> String {
        let buf = self.render(width, height);
        let area = Rect::new(0, 0, width, height);
        let mut output = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                output.push_str(buf[(x, y)].symbol());
            }
            if y < area.bottom() - 1 {
                output.push('\n');
            }
        }
        output
    }

    fn collect_sync_messages(&mut self, cmd: Command<M::Message>) {
        match cmd.inner {
            CommandInner::None => {}
            CommandInner::Message(msg) => self.pending_messages.push(msg),
            CommandInner::Quit => self.quit_requested = true,
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    self.collect_sync_messages(cmd);
                }
            }
            CommandInner::SetTitle(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent};
    use ratatui::widgets::Paragraph;

    // Records digits in order and asks to quit once it has four.
    struct Digits {
        entered: String,
    }

    #[derive(Debug)]
    enum DigitsMsg {
        Digit(char),
        Echo(char),
        Done,
    }

    impl Model for Digits {
        type Message = DigitsMsg;
        type Flags = &'static str;

        fn init(seed: &'static str) -> (Self, Command<DigitsMsg>) {
            (
                Digits {
                    entered: seed.to_string(),
                },
                Command::none(),
            )
        }

        fn update(&mut self, msg: DigitsMsg) -> Command<DigitsMsg> {
            match msg {
                DigitsMsg::Digit(c) => {
                    self.entered.push(c);
                    if self.entered.len() == 4 {
                        Command::batch([Command::message(DigitsMsg::Echo(c)), Command::message(DigitsMsg::Done)])
                    } else {
                        Command::none()
                    }
                }
                DigitsMsg::Echo(c) => {
                    self.entered.push(c);
                    Command::none()
                }
                DigitsMsg::Done => Command::quit(),
            }
        }

        fn view(&self, frame: &mut ratatui::Frame) {
            frame.render_widget(Paragraph::new(format!("Code: {}", self.entered)), frame.area());
        }

        fn handle_event(&self, event: TerminalEvent) -> Option<DigitsMsg> {
            match event {
                TerminalEvent::Key(KeyEvent {
                    code: KeyCode::Char(c),
                    ..
                }) if c.is_ascii_digit() => Some(DigitsMsg::Digit(c)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_program_init_with_flags() {
        let prog = TestProgram::<Digits>::new("12");
        assert_eq!(prog.model().entered, "12");
    }

    #[test]
    fn test_program_send() {
        let mut prog = TestProgram::<Digits>::new("");
        prog.send(DigitsMsg::Digit('7'));
        assert_eq!(prog.model().entered, "7");
    }

    #[test]
    fn send_event_maps_through_handle_event() {
        let mut prog = TestProgram::<Digits>::new("");
        assert!(prog.send_event(TerminalEvent::Key(KeyEvent::from(KeyCode::Char('5')))));
        assert!(!prog.send_event(TerminalEvent::Key(KeyEvent::from(KeyCode::Char('x')))));
        assert!(!prog.send_event(TerminalEvent::FocusLost));
        assert_eq!(prog.model().entered, "5");
    }

    #[test]
    fn batched_messages_drain_in_order() {
        let mut prog = TestProgram::<Digits>::new("123");
        prog.send(DigitsMsg::Digit('4'));
        assert!(!prog.quit_requested());
        prog.drain_messages();
        assert_eq!(prog.model().entered, "12344");
        assert!(prog.quit_requested());
    }

    #[test]
    fn test_program_render() {
        let mut prog = TestProgram::<Digits>::new("");
        prog.send(DigitsMsg::Digit('9'));
        let content = prog.render_string(20, 1);
        assert!(content.contains("Code: 9"));
    }
}
