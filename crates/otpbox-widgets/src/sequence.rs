//! Caller-owned sequence of entered characters.

use std::fmt;

/// An immutable snapshot of the characters entered into an OTP widget.
///
/// Slot `i` belongs to field `i`. A slot is either unset (`None`) or holds a
/// string, which may be empty after a field has been cleared. Edits never
/// happen in place: [`with_value`](OtpSequence::with_value) and
/// [`after_backspace`](OtpSequence::after_backspace) return a new sequence and
/// leave `self` untouched, so the host's copy stays the single source of truth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct OtpSequence {
    slots: Vec<Option<String>>,
}

impl OtpSequence {
    /// An empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence from explicit slots, keeping unset entries.
    pub fn from_slots(slots: impl IntoIterator<Item = Option<String>>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// Split a code into one slot per character: `"123"` becomes `["1", "2", "3"]`.
    pub fn from_code(code: &str) -> Self {
        code.chars().map(String::from).collect()
    }

    /// Number of slots, set or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the sequence has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The value at `index`, or `None` when the slot is unset or out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).and_then(|slot| slot.as_deref())
    }

    /// Raw slots, including unset ones.
    pub fn slots(&self) -> &[Option<String>] {
        &self.slots
    }

    /// A copy with `value` stored at `index`.
    ///
    /// Writing past the end pads the gap with unset slots.
    pub fn with_value(&self, index: usize, value: impl Into<String>) -> Self {
        let mut slots = self.slots.clone();
        if index >= slots.len() {
            slots.resize(index + 1, None);
        }
        slots[index] = Some(value.into());
        Self { slots }
    }

    /// The sequence after Backspace on field `index`.
    ///
    /// The last slot is removed outright; any other slot holding a value is
    /// cleared to the empty string. Unset and out-of-range slots are left as
    /// they are.
    pub fn after_backspace(&self, index: usize) -> Self {
        let mut slots = self.slots.clone();
        if index + 1 == slots.len() {
            slots.pop();
        } else if let Some(slot) = slots.get_mut(index).filter(|slot| slot.is_some()) {
            *slot = Some(String::new());
        }
        Self { slots }
    }

    /// Whether the first `field_count` slots all hold non-empty values.
    pub fn is_complete(&self, field_count: usize) -> bool {
        self.slots.len() >= field_count
            && self.slots[..field_count]
                .iter()
                .all(|slot| slot.as_deref().is_some_and(|v| !v.is_empty()))
    }

    /// All set values concatenated in order; unset slots contribute nothing.
    pub fn to_code(&self) -> String {
        self.slots.iter().flatten().map(String::as_str).collect()
    }
}

impl<S: Into<String>> FromIterator<S> for OtpSequence {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(|s| Some(s.into())).collect(),
        }
    }
}

impl fmt::Display for OtpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(values: &[&str]) -> OtpSequence {
        values.iter().copied().collect()
    }

    #[test]
    fn from_code_splits_chars() {
        assert_eq!(OtpSequence::from_code("123"), seq(&["1", "2", "3"]));
        assert!(OtpSequence::from_code("").is_empty());
    }

    #[test]
    fn with_value_leaves_original_untouched() {
        let original = seq(&["1", "2"]);
        let next = original.with_value(2, "3");
        assert_eq!(original, seq(&["1", "2"]));
        assert_eq!(next, seq(&["1", "2", "3"]));
    }

    #[test]
    fn with_value_overwrites() {
        let next = seq(&["1", "2"]).with_value(0, "9");
        assert_eq!(next, seq(&["9", "2"]));
    }

    #[test]
    fn with_value_pads_gap_with_unset() {
        let next = OtpSequence::new().with_value(2, "7");
        assert_eq!(next.slots(), &[None, None, Some("7".to_string())]);
        assert_eq!(next.get(0), None);
        assert_eq!(next.get(2), Some("7"));
    }

    #[test]
    fn backspace_on_last_slot_shrinks() {
        let next = seq(&["1", "2", "3"]).after_backspace(2);
        assert_eq!(next, seq(&["1", "2"]));
    }

    #[test]
    fn backspace_on_inner_slot_clears_in_place() {
        let next = seq(&["1", "2", "3"]).after_backspace(1);
        assert_eq!(next, seq(&["1", "", "3"]));
        assert_eq!(next.len(), 3);
    }

    #[test]
    fn backspace_past_end_is_unchanged() {
        let original = seq(&["1"]);
        assert_eq!(original.after_backspace(3), original);
    }

    #[test]
    fn backspace_keeps_unset_slot_unset() {
        let original = OtpSequence::new().with_value(2, "7");
        let next = original.after_backspace(0);
        assert_eq!(next, original);
    }

    #[test]
    fn backspace_on_empty_sequence() {
        assert!(OtpSequence::new().after_backspace(0).is_empty());
    }

    #[test]
    fn completion_requires_full_length() {
        assert!(!seq(&["1", "2"]).is_complete(3));
        assert!(seq(&["1", "2", "3"]).is_complete(3));
    }

    #[test]
    fn completion_rejects_empty_and_unset_slots() {
        assert!(!seq(&["1", "", "3"]).is_complete(3));
        assert!(!OtpSequence::new().with_value(2, "3").is_complete(3));
    }

    #[test]
    fn to_code_skips_unset() {
        let s = OtpSequence::new().with_value(1, "4").with_value(2, "2");
        assert_eq!(s.to_code(), "42");
        assert_eq!(s.to_string(), "42");
    }
}
