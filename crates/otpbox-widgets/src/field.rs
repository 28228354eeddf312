//! A single one-character input box.

use std::ops::Range;

/// One field of an OTP widget: a text input limited to a single character.
///
/// `Field` owns its live text the way a browser input owns its DOM value.
/// It is seeded once from the caller's sequence and afterwards changes only
/// through native editing (typing, deleting). Focusing a field selects all
/// of its text so the next keystroke overwrites rather than appends.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    value: Option<char>,
    cursor: usize,
    selected: bool,
    focus: bool,
}

impl Field {
    /// Create a field whose initial text is the first character of `seed`.
    pub fn seeded(seed: Option<&str>) -> Self {
        let value = seed.and_then(|s| s.chars().next());
        Self {
            value,
            cursor: usize::from(value.is_some()),
            selected: false,
            focus: false,
        }
    }

    /// The live text of the field.
    pub fn value(&self) -> String {
        self.value.map(String::from).unwrap_or_default()
    }

    /// The live character, if any.
    pub fn char(&self) -> Option<char> {
        self.value
    }

    /// Number of characters in the field (0 or 1).
    pub fn len(&self) -> usize {
        usize::from(self.value.is_some())
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Whether this field has keyboard focus.
    pub fn is_focused(&self) -> bool {
        self.focus
    }

    /// Caret position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The selected character range. Collapsed to the caret when nothing is selected.
    pub fn selection(&self) -> Range<usize> {
        if self.selected {
            0..self.len()
        } else {
            self.cursor..self.cursor
        }
    }

    /// Whether the whole text is selected.
    pub fn has_selection(&self) -> bool {
        self.selected
    }

    /// Give the field focus and select all of its text.
    pub fn focus(&mut self) {
        self.focus = true;
        self.select_all();
    }

    /// Remove focus and drop the selection.
    pub fn blur(&mut self) {
        self.focus = false;
        self.selected = false;
    }

    /// Select the entire text. An empty field has nothing to select.
    pub fn select_all(&mut self) {
        self.selected = self.value.is_some();
        self.cursor = self.len();
    }

    /// Type `c`: replace the selection, or fill an empty field.
    ///
    /// Returns `false` when the field is already full and nothing is selected.
    pub fn insert(&mut self, c: char) -> bool {
        if self.value.is_some() && !self.selected {
            return false;
        }
        self.value = Some(c);
        self.cursor = 1;
        self.selected = false;
        true
    }

    /// Delete the selection, or the character before the caret.
    ///
    /// Returns `false` when there was nothing to delete.
    pub fn delete_backward(&mut self) -> bool {
        if self.value.is_none() || (!self.selected && self.cursor == 0) {
            return false;
        }
        self.value = None;
        self.cursor = 0;
        self.selected = false;
        true
    }

    /// Collapse the selection and move the caret to the start.
    pub fn cursor_start(&mut self) {
        self.selected = false;
        self.cursor = 0;
    }

    /// Collapse the selection and move the caret to the end.
    pub fn cursor_end(&mut self) {
        self.selected = false;
        self.cursor = self.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_takes_first_char() {
        let field = Field::seeded(Some("42"));
        assert_eq!(field.value(), "4");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn seeded_empty_and_unset() {
        assert!(Field::seeded(Some("")).is_empty());
        assert!(Field::seeded(None).is_empty());
    }

    #[test]
    fn focus_selects_existing_text() {
        let mut field = Field::seeded(Some("7"));
        field.focus();
        assert!(field.is_focused());
        assert_eq!(field.selection(), 0..1);
    }

    #[test]
    fn focus_on_empty_field_selects_nothing() {
        let mut field = Field::default();
        field.focus();
        assert_eq!(field.selection(), 0..0);
    }

    #[test]
    fn typing_over_selection_replaces() {
        let mut field = Field::seeded(Some("7"));
        field.focus();
        assert!(field.insert('3'));
        assert_eq!(field.value(), "3");
        assert_eq!(field.selection(), 1..1);
    }

    #[test]
    fn full_field_rejects_second_char() {
        let mut field = Field::default();
        field.focus();
        assert!(field.insert('1'));
        assert!(!field.insert('2'));
        assert_eq!(field.value(), "1");
    }

    #[test]
    fn delete_backward_clears() {
        let mut field = Field::seeded(Some("5"));
        assert!(field.delete_backward());
        assert!(field.is_empty());
        assert!(!field.delete_backward());
    }

    #[test]
    fn delete_backward_at_start_without_selection_is_noop() {
        let mut field = Field::seeded(Some("5"));
        field.cursor_start();
        assert!(!field.delete_backward());
        assert_eq!(field.value(), "5");
    }

    #[test]
    fn blur_drops_selection() {
        let mut field = Field::seeded(Some("5"));
        field.focus();
        field.blur();
        assert!(!field.is_focused());
        assert!(!field.has_selection());
    }

    #[test]
    fn cursor_moves_collapse_selection() {
        let mut field = Field::seeded(Some("5"));
        field.focus();
        field.cursor_start();
        assert_eq!(field.selection(), 0..0);
        field.focus();
        field.cursor_end();
        assert_eq!(field.selection(), 1..1);
    }
}
