//! Widgets for one-time-password entry, built on [`otpbox_core`].
//!
//! [`OtpFields`](otp_fields::OtpFields) implements [`otpbox_core::Component`],
//! so it can be embedded inside any [`otpbox_core::Model`] and placed within a
//! [`ratatui`] layout like any other child.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`otp_fields`] | Row of single-character fields with auto-advance and completion |
//!
//! # Building blocks
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`sequence`] | [`OtpSequence`](sequence::OtpSequence), the caller-owned entered code |
//! | [`field`] | A single one-character input with caret and selection |
//! | [`focus`] | Non-wrapping focus tracking across the fields |
//! | [`key`] | Key bindings and help labels |
//! | [`config`] | Field count, gap, validation policy and styles |
//!
//! # Feature flags
//!
//! * `tracing` emits `debug` events for every change notification and focus
//!   move.

pub mod config;
pub mod field;
pub mod focus;
pub mod key;
pub mod otp_fields;
pub mod sequence;

pub use config::{FieldCount, Gap, GapError, InputPolicy, OtpFieldsStyle};
pub use otp_fields::OtpFields;
pub use sequence::OtpSequence;
