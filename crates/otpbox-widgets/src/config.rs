//! Configuration types for [`OtpFields`](crate::otp_fields::OtpFields).

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};

/// Number of fields to render.
///
/// Fractional counts are rounded to the nearest whole number. Negative,
/// NaN and infinite counts render nothing, and counts are capped at
/// [`FieldCount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldCount(usize);

impl FieldCount {
    /// Largest count; the row is laid out in `u16` terminal columns.
    pub const MAX: usize = u16::MAX as usize;

    /// The coerced count.
    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for FieldCount {
    fn default() -> Self {
        Self(2)
    }
}

impl From<usize> for FieldCount {
    fn from(count: usize) -> Self {
        Self(count.min(Self::MAX))
    }
}

impl From<i32> for FieldCount {
    fn from(count: i32) -> Self {
        usize::try_from(count).map_or(Self(0), Self::from)
    }
}

impl From<f64> for FieldCount {
    fn from(count: f64) -> Self {
        if !count.is_finite() {
            return Self(0);
        }
        // `as` saturates negatives to 0; the clamp keeps it in range.
        Self(count.round().clamp(0.0, Self::MAX as f64) as usize)
    }
}

/// Blank columns between adjacent fields, and around a separator when one is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gap(pub u16);

impl Gap {
    /// Width in terminal cells.
    pub fn cells(self) -> u16 {
        self.0
    }
}

impl Default for Gap {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u16> for Gap {
    fn from(cells: u16) -> Self {
        Self(cells)
    }
}

/// Error returned when parsing a [`Gap`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GapError {
    /// The string had no leading number, e.g. `"wide"`.
    #[error("invalid gap {0:?}: expected a cell count such as \"2\" or \"2ch\"")]
    Invalid(String),
    /// The unit suffix is not a terminal length unit.
    #[error("unsupported gap unit {0:?}: use \"ch\" or \"cells\"")]
    Unit(String),
}

impl FromStr for Gap {
    type Err = GapError;

    /// Parse `"2"`, `"2ch"` or `"2 cells"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        let (digits, unit) = s.split_at(split);
        let cells = digits
            .parse::<u16>()
            .map_err(|_| GapError::Invalid(s.to_string()))?;
        match unit.trim() {
            "" | "ch" | "cell" | "cells" => Ok(Self(cells)),
            other => Err(GapError::Unit(other.to_string())),
        }
    }
}

/// How an entry keystroke turns the field's text into a sequence value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InputPolicy {
    /// Trim the text; blank or whitespace-only input is ignored entirely.
    #[default]
    TrimBlank,
    /// Store the raw text as-is, even when empty, and advance.
    AcceptAny,
}

impl InputPolicy {
    /// The value to store for `raw`, or `None` to ignore the keystroke.
    pub fn accept(self, raw: &str) -> Option<String> {
        match self {
            InputPolicy::TrimBlank => {
                let trimmed = raw.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            }
            InputPolicy::AcceptAny => Some(raw.to_string()),
        }
    }
}

/// Style configuration for the OTP fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpFieldsStyle {
    /// Base style of the area behind all fields.
    pub container: Style,
    /// Style of each field's character.
    pub field: Style,
    /// Border style of unfocused fields.
    pub border: Style,
    /// Border style of the focused field.
    pub focused_border: Style,
    /// Style of selected text in the focused field.
    pub selection: Style,
    /// Style of the caret cell in an empty focused field.
    pub cursor: Style,
    /// Style of the separator text.
    pub separator: Style,
}

impl Default for OtpFieldsStyle {
    fn default() -> Self {
        Self {
            container: Style::default(),
            field: Style::default().add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::DarkGray),
            focused_border: Style::default().fg(Color::Cyan),
            selection: Style::default().add_modifier(Modifier::REVERSED),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            separator: Style::default().fg(Color::DarkGray),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_count_rounds_fractions() {
        assert_eq!(FieldCount::from(3.4).get(), 3);
        assert_eq!(FieldCount::from(3.5).get(), 4);
        assert_eq!(FieldCount::from(5.0).get(), 5);
    }

    #[test]
    fn field_count_degrades_to_zero() {
        assert_eq!(FieldCount::from(-2.0).get(), 0);
        assert_eq!(FieldCount::from(f64::NAN).get(), 0);
        assert_eq!(FieldCount::from(f64::INFINITY).get(), 0);
        assert_eq!(FieldCount::from(f64::NEG_INFINITY).get(), 0);
        assert_eq!(FieldCount::from(-4_i32).get(), 0);
    }

    #[test]
    fn field_count_is_capped() {
        assert_eq!(FieldCount::from(1e12).get(), FieldCount::MAX);
        assert_eq!(FieldCount::from(usize::MAX).get(), FieldCount::MAX);
        assert_eq!(FieldCount::from(i32::MAX).get(), FieldCount::MAX);
        assert_eq!(FieldCount::from(6_usize).get(), 6);
    }

    #[test]
    fn field_count_default_is_two() {
        assert_eq!(FieldCount::default().get(), 2);
    }

    #[test]
    fn gap_parses_numbers_and_units() {
        assert_eq!("3".parse::<Gap>(), Ok(Gap(3)));
        assert_eq!("2ch".parse::<Gap>(), Ok(Gap(2)));
        assert_eq!(" 4 cells ".parse::<Gap>(), Ok(Gap(4)));
    }

    #[test]
    fn gap_rejects_garbage() {
        assert_eq!("wide".parse::<Gap>(), Err(GapError::Invalid("wide".into())));
        assert_eq!("8px".parse::<Gap>(), Err(GapError::Unit("px".into())));
    }

    #[test]
    fn gap_error_messages() {
        let err = "8px".parse::<Gap>().unwrap_err();
        assert_eq!(err.to_string(), "unsupported gap unit \"px\": use \"ch\" or \"cells\"");
    }

    #[test]
    fn trim_blank_policy() {
        assert_eq!(InputPolicy::TrimBlank.accept(" 4"), Some("4".to_string()));
        assert_eq!(InputPolicy::TrimBlank.accept(" "), None);
        assert_eq!(InputPolicy::TrimBlank.accept(""), None);
    }

    #[test]
    fn accept_any_policy() {
        assert_eq!(InputPolicy::AcceptAny.accept(" "), Some(" ".to_string()));
        assert_eq!(InputPolicy::AcceptAny.accept(""), Some(String::new()));
    }
}
