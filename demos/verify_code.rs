//! # Verify Code Demo
//!
//! A verification-code prompt built from `OtpFields`:
//! - Routing key and paste events to the widget through `handle_event`
//! - Handing each `Changed` sequence back to the widget with `SetOtp`
//! - Reacting to `Completed` once every field is filled
//! - Refocusing the last field with Left or Backspace after the widget blurs
//!
//! Run with: `cargo run --example verify_code -- 6`
//!
//! The optional argument is the number of fields (fractions are rounded).
//! Set `OTPBOX_LOG=otpbox.log` to write runtime and widget diagnostics to a file.

use std::fs::File;
use std::sync::Mutex;

use otpbox::crossterm::event::{KeyCode, KeyModifiers};
use otpbox::ratatui::layout::{Alignment, Constraint, Layout, Rect};
use otpbox::ratatui::style::{Color, Modifier, Style};
use otpbox::ratatui::text::{Line, Span};
use otpbox::ratatui::widgets::{Block, Borders, Paragraph};
use otpbox::ratatui::Frame;
use otpbox::widgets::key::KeyMap;
use otpbox::widgets::otp_fields;
use otpbox::widgets::{FieldCount, OtpFields, OtpSequence};
use otpbox::{Command, Component, Model, ProgramOptions, TerminalEvent};
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_LENGTH: f64 = 6.0;

struct VerifyApp {
    length: FieldCount,
    otp: OtpSequence,
    fields: OtpFields,
    verified: Option<String>,
}

#[derive(Debug)]
enum Msg {
    Otp(otp_fields::Message),
    Reset,
    Quit,
}

fn new_fields(length: FieldCount) -> OtpFields {
    OtpFields::new(OtpSequence::new(), length).with_separator("·")
}

impl Model for VerifyApp {
    type Message = Msg;
    type Flags = FieldCount;

    fn init(length: FieldCount) -> (Self, Command<Msg>) {
        let fields = new_fields(length);
        let completion = fields.completion().map(Msg::Otp);
        (
            VerifyApp {
                length,
                otp: OtpSequence::new(),
                fields,
                verified: None,
            },
            Command::batch([Command::set_title("Verify code"), completion]),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            // The widget computes edits and completion against the sequence we hand back.
            Msg::Otp(otp_fields::Message::Changed { otp, .. }) => {
                self.otp = otp.clone();
                self.verified = None;
                self.fields
                    .update(otp_fields::Message::SetOtp(otp))
                    .map(Msg::Otp)
            }
            Msg::Otp(otp_fields::Message::Completed) => {
                self.verified = Some(self.otp.to_code());
                Command::none()
            }
            Msg::Otp(m) => self.fields.update(m).map(Msg::Otp),
            Msg::Reset => {
                self.otp = OtpSequence::new();
                self.fields = new_fields(self.length);
                self.verified = None;
                Command::none()
            }
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        let area = frame.area();

        let [title_area, fields_area, status_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(self.fields.content_height()),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .areas(area);

        let title = Paragraph::new("Enter the verification code")
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, title_area);

        // Center the fields horizontally.
        let width = self.fields.content_width().min(fields_area.width);
        let x = fields_area.x + (fields_area.width - width) / 2;
        let centered = Rect::new(x, fields_area.y, width, fields_area.height);
        self.fields.view(frame, centered);

        let status = match self.verified {
            Some(ref code) => Paragraph::new(format!("Code entered: {code}"))
                .style(Style::default().fg(Color::Green)),
            None => Paragraph::new(format!(
                "{} of {} entered",
                self.otp.to_code().chars().count(),
                self.fields.field_count()
            ))
            .style(Style::default().fg(Color::DarkGray)),
        };
        frame.render_widget(status.alignment(Alignment::Center), status_area);

        let key_style = Style::default().fg(Color::Cyan);
        let mut spans = Vec::new();
        for binding in self.fields.key_map().short_help() {
            spans.push(Span::styled(binding.key_label(), key_style));
            spans.push(Span::raw(format!(" {}  ", binding.description)));
        }
        spans.push(Span::styled("ctrl+r", key_style));
        spans.push(Span::raw(" reset  "));
        spans.push(Span::styled("esc", key_style));
        spans.push(Span::raw(" quit"));
        let help = Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray)),
            );
        frame.render_widget(help, help_area);
    }

    fn handle_event(&self, event: TerminalEvent) -> Option<Msg> {
        if let TerminalEvent::Paste(text) = event {
            return Some(Msg::Otp(otp_fields::Message::Paste(text)));
        }
        let key = event.key_press()?;
        let blurred = !self.fields.focused();
        let last = self.fields.field_count().checked_sub(1);
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => Some(Msg::Quit),
            (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
            (KeyCode::Char('r'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Reset),
            // Step back into the row once the last field has blurred.
            (KeyCode::Left | KeyCode::Backspace, _) if blurred => {
                last.map(|index| Msg::Otp(otp_fields::Message::Focus(index)))
            }
            _ => Some(Msg::Otp(otp_fields::Message::KeyPress(key))),
        }
    }
}

#[otpbox::tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let length = match std::env::args().nth(1) {
        Some(arg) => FieldCount::from(arg.parse::<f64>()?),
        None => FieldCount::from(DEFAULT_LENGTH),
    };

    let mut options = ProgramOptions {
        title: Some("otpbox".to_string()),
        ..ProgramOptions::default()
    };
    if let Some(path) = std::env::var_os("OTPBOX_LOG") {
        let file = File::options().create(true).append(true).open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_max_level(LevelFilter::DEBUG)
            .init();
        options.log_file = Some(path.into());
    }

    let app = otpbox::run_with::<VerifyApp>(length, options).await?;
    if let Some(code) = app.verified {
        println!("{code}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use otpbox::crossterm::event::KeyEvent;
    use otpbox::testing::TestProgram;

    fn press(prog: &mut TestProgram<VerifyApp>, code: KeyCode, modifiers: KeyModifiers) {
        prog.send_event(TerminalEvent::Key(KeyEvent::new(code, modifiers)));
        prog.drain_messages();
    }

    fn type_code(prog: &mut TestProgram<VerifyApp>, code: &str) {
        for c in code.chars() {
            press(prog, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn full_code_is_shown() {
        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(3));
        type_code(&mut prog, "123");
        assert_eq!(prog.model().verified.as_deref(), Some("123"));
        assert!(prog.render_string(60, 12).contains("Code entered: 123"));
    }

    #[test]
    fn left_after_completion_refocuses_last_field() {
        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(3));
        type_code(&mut prog, "123");
        assert!(!prog.model().fields.focused());

        press(&mut prog, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(prog.model().fields.focused_index(), Some(2));

        type_code(&mut prog, "9");
        assert_eq!(prog.model().verified.as_deref(), Some("129"));
    }

    #[test]
    fn backspace_after_completion_refocuses_without_deleting() {
        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(2));
        type_code(&mut prog, "45");
        press(&mut prog, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(prog.model().fields.focused_index(), Some(1));
        assert_eq!(prog.model().otp.to_code(), "45");

        press(&mut prog, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(prog.model().otp.to_code(), "4");
        assert_eq!(prog.model().verified, None);
    }

    #[test]
    fn paste_fills_the_focused_field() {
        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(2));
        prog.send_event(TerminalEvent::Paste("7x".into()));
        prog.drain_messages();
        assert_eq!(prog.model().otp.to_code(), "7");
        assert_eq!(prog.model().fields.focused_index(), Some(1));
    }

    #[test]
    fn ctrl_r_resets() {
        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(2));
        type_code(&mut prog, "45");
        press(&mut prog, KeyCode::Char('r'), KeyModifiers::CONTROL);
        assert!(prog.model().otp.is_empty());
        assert_eq!(prog.model().verified, None);
        assert_eq!(prog.model().fields.focused_index(), Some(0));
    }

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(2));
        assert!(!prog.quit_requested());
        press(&mut prog, KeyCode::Esc, KeyModifiers::NONE);
        assert!(prog.quit_requested());

        let mut prog = TestProgram::<VerifyApp>::new(FieldCount::from(2));
        press(&mut prog, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(prog.quit_requested());
    }
}
