use crate::command::Command;
use ratatui::{layout::Rect, Frame};

/// A reusable sub-model that renders into a given [`Rect`] area.
///
/// `Component` mirrors [`Model`](crate::Model) except that
/// [`view`](Component::view) receives the `area` to draw into, so the parent
/// decides where each child lives in its layout.
///
/// # Composition pattern
///
/// Wrap the component's message type in a variant of the parent message and
/// lift returned commands with [`Command::map`]:
///
/// ```rust,ignore
/// use otpbox_core::{Command, Component, Model};
/// use otpbox_widgets::otp_fields::{self, OtpFields};
///
/// struct App { code: OtpFields }
///
/// enum AppMsg { Code(otp_fields::Message) }
///
/// impl Model for App {
///     // ...
///     fn update(&mut self, msg: AppMsg) -> Command<AppMsg> {
///         match msg {
///             AppMsg::Code(m) => self.code.update(m).map(AppMsg::Code),
///         }
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         let area = frame.area();
///         self.code.view(frame, area);
///     }
/// }
/// ```
pub trait Component: Send + 'static {
    /// The component's internal message type.
    ///
    /// Parent models typically wrap this in one of their own message variants
    /// so that events can be routed to the correct child.
    type Message: Send + 'static;

    /// Process a message, mutate state, and return a [`Command`] for side effects.
    ///
    /// The returned command uses the component's own `Message` type; the
    /// parent should call [`.map()`](Command::map) to lift it.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render into a specific `area` of the [`Frame`].
    ///
    /// Implementations should confine all rendering to the given rectangle.
    fn view(&self, frame: &mut Frame, area: Rect);

    /// Whether this component currently has focus.
    ///
    /// A parent can query `focused()` to decide which child should receive
    /// keyboard events. The default implementation returns `false`.
    fn focused(&self) -> bool {
        false
    }
}
