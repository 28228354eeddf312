//! One-time-password input: a row of single-character fields with
//! auto-advance, backspace cascading to the previous field, and a completion
//! notification once every field is filled.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use otpbox_core::command::Command;
use otpbox_core::component::Component;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::config::{FieldCount, Gap, InputPolicy, OtpFieldsStyle};
use crate::field::Field;
use crate::focus::FieldFocus;
use crate::key::OtpKeyMap;
use crate::sequence::OtpSequence;

/// Width of one field box, borders included.
pub const FIELD_WIDTH: u16 = 5;
/// Height of one field box, borders included.
pub const FIELD_HEIGHT: u16 = 3;

/// Messages for the OTP fields component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A keyboard event for the focused field.
    KeyPress(KeyEvent),
    /// Pasted text for the focused field.
    Paste(String),
    /// Move focus to the field at this index.
    Focus(usize),
    /// The host's current sequence; same as [`OtpFields::set_otp`].
    SetOtp(OtpSequence),
    /// Emitted on every accepted edit with the proposed sequence and the
    /// index of the field that changed.
    Changed {
        /// The proposed sequence. The host decides what to keep and hands
        /// its copy back via [`Message::SetOtp`].
        otp: OtpSequence,
        /// Index of the edited field.
        index: usize,
    },
    /// Emitted when the host hands back a new sequence that fills every field.
    Completed,
}

/// A one-time-password input made of single-character fields.
///
/// The widget does not own the entered code. The host keeps the
/// authoritative [`OtpSequence`], receives a proposed one in
/// [`Message::Changed`] for every accepted keystroke, and passes whatever it
/// keeps back with [`Message::SetOtp`]. Completion is judged on that
/// returned snapshot, so a host that rejects an edit never sees
/// [`Message::Completed`] for it. Field text is seeded from the sequence
/// given to [`new`](OtpFields::new) and then edited in place.
///
/// Key handling for the focused field `i`:
///
/// | Key | Effect |
/// |-----|--------|
/// | Backspace | Drop slot `i` if it is the last one, otherwise clear it; notify; focus `i - 1` |
/// | Left / Right | Focus the neighbouring field, if any |
/// | anything else | Store the field's text at `i` (blank input is ignored); notify; focus `i + 1` or blur |
///
/// # Example
///
/// ```ignore
/// let mut code = OtpFields::new(OtpSequence::new(), 6)
///     .with_separator("-")
///     .with_gap(Gap(1));
///
/// // In the parent's update:
/// // Msg::Code(otp_fields::Message::Changed { otp, .. }) => {
/// //     self.otp = otp.clone();
/// //     self.code.update(otp_fields::Message::SetOtp(otp)).map(Msg::Code)
/// // }
/// ```
pub struct OtpFields {
    otp: OtpSequence,
    fields: Vec<Field>,
    focus: FieldFocus,
    policy: InputPolicy,
    key_map: OtpKeyMap,
    separator: Option<String>,
    gap: Gap,
    style: OtpFieldsStyle,
    block: Option<Block<'static>>,
}

impl OtpFields {
    /// Create `length` fields seeded from `otp`, with the first field focused.
    ///
    /// `length` may be fractional; it is rounded to the nearest whole number.
    pub fn new(otp: OtpSequence, length: impl Into<FieldCount>) -> Self {
        let count = length.into().get();
        let mut fields: Vec<Field> = (0..count).map(|i| Field::seeded(otp.get(i))).collect();
        let focus = FieldFocus::new(count);
        if let Some(first) = focus.focused() {
            fields[first].focus();
        }
        Self {
            otp,
            fields,
            focus,
            policy: InputPolicy::default(),
            key_map: OtpKeyMap::default(),
            separator: None,
            gap: Gap::default(),
            style: OtpFieldsStyle::default(),
            block: None,
        }
    }

    /// Render `separator` between adjacent fields.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    /// Set the spacing between fields (and around the separator).
    pub fn with_gap(mut self, gap: impl Into<Gap>) -> Self {
        self.gap = gap.into();
        self
    }

    /// Replace the whole style set.
    pub fn with_style(mut self, style: OtpFieldsStyle) -> Self {
        self.style = style;
        self
    }

    /// Merge `style` onto every field's text style.
    pub fn with_field_style(mut self, style: Style) -> Self {
        self.style.field = self.style.field.patch(style);
        self
    }

    /// Merge `style` onto the container background.
    pub fn with_container_style(mut self, style: Style) -> Self {
        self.style.container = self.style.container.patch(style);
        self
    }

    /// Wrap the fields in the given block (border/title).
    pub fn with_block(mut self, block: Block<'static>) -> Self {
        self.block = Some(block);
        self
    }

    /// Choose how entered text is validated.
    pub fn with_policy(mut self, policy: InputPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Rebind the navigation and delete keys.
    pub fn with_key_map(mut self, key_map: OtpKeyMap) -> Self {
        self.key_map = key_map;
        self
    }

    /// The latest sequence supplied by the host.
    pub fn otp(&self) -> &OtpSequence {
        &self.otp
    }

    /// Hand the widget the host's current sequence.
    ///
    /// Edits are computed against this snapshot. Field text is not reseeded.
    /// Returns [`Message::Completed`] when the snapshot differs from the
    /// previous one and fills every field.
    pub fn set_otp(&mut self, otp: OtpSequence) -> Command<Message> {
        if otp == self.otp {
            return Command::none();
        }
        self.otp = otp;
        self.completion()
    }

    /// [`Message::Completed`] if the current snapshot fills every field.
    ///
    /// Hosts call this from `init` to report a sequence that starts out complete.
    pub fn completion(&self) -> Command<Message> {
        if !self.otp.is_complete(self.fields.len()) {
            return Command::none();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "otp.complete", fields = self.fields.len());
        Command::message(Message::Completed)
    }

    /// Number of rendered fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The field at `index`.
    pub fn field(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    /// All fields, in order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Index of the focused field, or `None` when blurred.
    pub fn focused_index(&self) -> Option<usize> {
        self.focus.focused()
    }

    /// The active key bindings.
    pub fn key_map(&self) -> &OtpKeyMap {
        &self.key_map
    }

    /// Move focus to field `index` and select its text.
    ///
    /// Returns `false` (and changes nothing) when `index` is out of range.
    pub fn focus_field(&mut self, index: usize) -> bool {
        let from = self.focus.focused();
        if from == Some(index) {
            return true;
        }
        if !self.focus.focus(index) {
            return false;
        }
        if let Some(from) = from {
            self.fields[from].blur();
        }
        self.fields[index].focus();
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "otp.focus", ?from, to = index);
        true
    }

    /// Remove focus from every field. Keystrokes are ignored until a field is focused again.
    pub fn blur(&mut self) {
        if let Some(index) = self.focus.focused() {
            self.fields[index].blur();
        }
        self.focus.blur();
    }

    /// Columns needed to draw every field, separator, gap and the block.
    pub fn content_width(&self) -> u16 {
        let count = u16::try_from(self.fields.len()).unwrap_or(u16::MAX);
        let (block_width, _) = self.block_overhead();
        if count == 0 {
            return block_width;
        }
        let gap = self.gap.cells();
        let between = match self.separator_width() {
            Some(width) => gap.saturating_mul(2).saturating_add(width),
            None => gap,
        };
        count
            .saturating_mul(FIELD_WIDTH)
            .saturating_add((count - 1).saturating_mul(between))
            .saturating_add(block_width)
    }

    /// Rows needed to draw the fields and the block.
    pub fn content_height(&self) -> u16 {
        let (_, block_height) = self.block_overhead();
        FIELD_HEIGHT + block_height
    }

    fn separator_width(&self) -> Option<u16> {
        self.separator
            .as_deref()
            .map(|sep| u16::try_from(sep.width()).unwrap_or(u16::MAX))
    }

    fn block_overhead(&self) -> (u16, u16) {
        match self.block {
            Some(ref block) => {
                let probe = Rect::new(0, 0, 100, 100);
                let inner = block.inner(probe);
                (probe.width - inner.width, probe.height - inner.height)
            }
            None => (0, 0),
        }
    }

    /// Apply the key to the field's own text, as the input box itself would.
    fn native_edit(&mut self, index: usize, key: &KeyEvent) {
        let field = &mut self.fields[index];
        if self.key_map.delete.matches(key) {
            field.delete_backward();
        } else if self.key_map.prev.matches(key) {
            field.cursor_start();
        } else if self.key_map.next.matches(key) {
            field.cursor_end();
        } else if let KeyCode::Char(c) = key.code {
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
            {
                field.insert(c);
            }
        }
    }

    fn dispatch(&mut self, index: usize, key: &KeyEvent) -> Command<Message> {
        if self.key_map.delete.matches(key) {
            let cmd = self.notify(self.otp.after_backspace(index), index);
            if let Some(prev) = self.focus.prev() {
                self.focus_field(prev);
            }
            cmd
        } else if self.key_map.prev.matches(key) {
            if let Some(prev) = self.focus.prev() {
                self.focus_field(prev);
            }
            Command::none()
        } else if self.key_map.next.matches(key) {
            if let Some(next) = self.focus.next() {
                self.focus_field(next);
            }
            Command::none()
        } else {
            self.commit_entry(index)
        }
    }

    fn commit_entry(&mut self, index: usize) -> Command<Message> {
        let Some(value) = self.policy.accept(&self.fields[index].value()) else {
            return Command::none();
        };
        let cmd = self.notify(self.otp.with_value(index, value), index);
        match self.focus.next() {
            Some(next) => {
                self.focus_field(next);
            }
            None => self.blur(),
        }
        cmd
    }

    fn notify(&self, otp: OtpSequence, index: usize) -> Command<Message> {
        #[cfg(feature = "tracing")]
        tracing::debug!(message = "otp.change", index, len = otp.len());
        Command::message(Message::Changed { otp, index })
    }

    fn render_field(&self, frame: &mut Frame, field: &Field, area: Rect) {
        let border = if field.is_focused() {
            self.style.focused_border
        } else {
            self.style.border
        };
        let block = Block::new().borders(Borders::ALL).border_style(border);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let span = match field.char() {
            Some(c) if field.is_focused() && field.has_selection() => {
                Span::styled(c.to_string(), self.style.field.patch(self.style.selection))
            }
            Some(c) => Span::styled(c.to_string(), self.style.field),
            None if field.is_focused() => Span::styled(" ", self.style.cursor),
            None => Span::raw(" "),
        };
        frame.render_widget(
            Paragraph::new(Line::from(span)).alignment(Alignment::Center),
            inner,
        );
    }
}

impl Component for OtpFields {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => {
                if key.kind == KeyEventKind::Release {
                    return Command::none();
                }
                let Some(index) = self.focus.focused() else {
                    return Command::none();
                };
                self.native_edit(index, &key);
                self.dispatch(index, &key)
            }
            Message::Paste(text) => {
                let Some(index) = self.focus.focused() else {
                    return Command::none();
                };
                // The field holds one character; the rest of the paste is dropped.
                if let Some(c) = text.chars().next() {
                    self.fields[index].insert(c);
                }
                self.commit_entry(index)
            }
            Message::Focus(index) => {
                self.focus_field(index);
                Command::none()
            }
            Message::SetOtp(otp) => self.set_otp(otp),
            Message::Changed { .. } | Message::Completed => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let inner = if let Some(ref block) = self.block {
            let inner = block.inner(area);
            frame.render_widget(block.clone(), area);
            inner
        } else {
            area
        };
        frame.buffer_mut().set_style(inner, self.style.container);

        let gap = self.gap.cells();
        let separator_width = self.separator_width().unwrap_or(0);
        let mut x = inner.x;

        for (i, field) in self.fields.iter().enumerate() {
            if x >= inner.right() {
                break;
            }
            let rect = Rect::new(x, inner.y, FIELD_WIDTH, FIELD_HEIGHT).intersection(inner);
            self.render_field(frame, field, rect);
            x = x.saturating_add(FIELD_WIDTH);

            if i + 1 == self.fields.len() {
                break;
            }
            x = x.saturating_add(gap);
            if let Some(ref separator) = self.separator {
                if x < inner.right() {
                    let rect = Rect::new(x, inner.y + FIELD_HEIGHT / 2, separator_width, 1)
                        .intersection(inner);
                    frame.render_widget(
                        Paragraph::new(Span::styled(separator.as_str(), self.style.separator)),
                        rect,
                    );
                }
                x = x.saturating_add(separator_width).saturating_add(gap);
            }
        }
    }

    fn focused(&self) -> bool {
        self.focus.focused().is_some()
    }
}
