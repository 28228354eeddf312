//! Focus tracking over an ordered row of fields.

/// Tracks which of `len` positionally ordered slots has keyboard focus.
///
/// Unlike a tab-cycling group, movement stops at both ends instead of
/// wrapping, and focus can be dropped entirely with [`blur`](FieldFocus::blur).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldFocus {
    len: usize,
    focused: Option<usize>,
}

impl FieldFocus {
    /// Create a focus tracker with the first slot focused, if there is one.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            focused: (len > 0).then_some(0),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no slots.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the focused slot, or `None` when blurred.
    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// Return whether the slot at `index` has focus.
    pub fn is_focused(&self, index: usize) -> bool {
        self.focused == Some(index)
    }

    /// The slot before the focused one, if any.
    pub fn prev(&self) -> Option<usize> {
        self.focused.and_then(|i| i.checked_sub(1))
    }

    /// The slot after the focused one, if any.
    pub fn next(&self) -> Option<usize> {
        self.focused.map(|i| i + 1).filter(|&i| i < self.len)
    }

    /// Focus `index`. Out-of-range indices are ignored; returns whether focus moved there.
    pub fn focus(&mut self, index: usize) -> bool {
        if index < self.len {
            self.focused = Some(index);
            true
        } else {
            false
        }
    }

    /// Drop focus from every slot.
    pub fn blur(&mut self) {
        self.focused = None;
    }
}
