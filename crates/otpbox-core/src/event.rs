use crossterm::event::{KeyEvent, KeyEventKind, MouseEvent};

/// Terminal events produced by the runtime's event loop.
///
/// Every event read from the terminal is offered to
/// [`Model::handle_event`](crate::Model::handle_event). Each variant wraps
/// the corresponding [`crossterm::event::Event`] payload, so key codes and
/// modifiers can be matched with the full crossterm API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// A keyboard event.
    Key(KeyEvent),
    /// A mouse event.
    Mouse(MouseEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// Terminal window gained focus.
    FocusGained,
    /// Terminal window lost focus.
    FocusLost,
    /// Bracketed paste content.
    Paste(String),
}

impl From<crossterm::event::Event> for TerminalEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(k) => TerminalEvent::Key(k),
            crossterm::event::Event::Mouse(m) => TerminalEvent::Mouse(m),
            crossterm::event::Event::Resize(w, h) => TerminalEvent::Resize(w, h),
            crossterm::event::Event::FocusGained => TerminalEvent::FocusGained,
            crossterm::event::Event::FocusLost => TerminalEvent::FocusLost,
            crossterm::event::Event::Paste(s) => TerminalEvent::Paste(s),
        }
    }
}

impl TerminalEvent {
    /// The key event, unless this is not a key event or it reports a release.
    ///
    /// Terminals with keyboard enhancement enabled report both press and
    /// release; widgets act on the press (and its repeats) only.
    pub fn key_press(&self) -> Option<KeyEvent> {
        match self {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => Some(*key),
            _ => None,
        }
    }
}
