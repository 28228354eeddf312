//! **otpbox** -- one-time-password input fields for [`ratatui`] terminal apps.
//!
//! This is the umbrella crate that re-exports everything needed to build an
//! OTP prompt from a single dependency:
//!
//! ```toml
//! [dependencies]
//! otpbox = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`otpbox_core`] are available at the crate root
//!   ([`Model`], [`Component`], [`Command`], [`Program`], [`run`],
//!   [`run_with`], etc.).
//! * The [`widgets`] module re-exports everything from [`otpbox_widgets`]
//!   ([`OtpFields`](widgets::OtpFields), [`OtpSequence`](widgets::OtpSequence)
//!   and their configuration).
//! * [`ratatui`], [`crossterm`], and [`tokio`] are re-exported so downstream
//!   crates do not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use otpbox::widgets::{otp_fields, OtpFields, OtpSequence};
//! use otpbox::{Command, Component, Model, TerminalEvent};
//! use ratatui::Frame;
//!
//! struct Prompt {
//!     code: OtpFields,
//! }
//!
//! impl Model for Prompt {
//!     type Message = otp_fields::Message;
//!     type Flags = ();
//!
//!     fn init(_: ()) -> (Self, Command<Self::Message>) {
//!         (Prompt { code: OtpFields::new(OtpSequence::new(), 4) }, Command::none())
//!     }
//!
//!     fn update(&mut self, msg: Self::Message) -> Command<Self::Message> {
//!         match msg {
//!             otp_fields::Message::Changed { otp, .. } => {
//!                 self.code.update(otp_fields::Message::SetOtp(otp))
//!             }
//!             otp_fields::Message::Completed => Command::quit(),
//!             other => self.code.update(other),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) {
//!         let area = frame.area();
//!         self.code.view(frame, area);
//!     }
//!
//!     fn handle_event(&self, event: TerminalEvent) -> Option<Self::Message> {
//!         event.key_press().map(otp_fields::Message::KeyPress)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let prompt = otpbox::run::<Prompt>(()).await.unwrap();
//!     println!("{}", prompt.code.otp());
//! }
//! ```

pub use otpbox_core::*;
pub mod widgets {
    pub use otpbox_widgets::*;
}

// Re-export dependencies for use in demos and downstream crates
pub use crossterm;
pub use ratatui;
pub use tokio;
