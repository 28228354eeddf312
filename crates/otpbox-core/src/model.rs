use crate::command::Command;
use crate::event::TerminalEvent;
use ratatui::Frame;

/// The top-level application trait, following the [Elm Architecture].
///
/// The runtime drives an **init -> update -> view** cycle:
///
/// 1. [`init`](Model::init) creates the initial state and may return a
///    [`Command`].
/// 2. [`view`](Model::view) renders the current state to a [`ratatui::Frame`].
/// 3. Terminal events are offered to [`handle_event`](Model::handle_event),
///    which maps the ones the application cares about into messages.
/// 4. [`update`](Model::update) processes each message and optionally returns
///    a [`Command`] for further work.
/// 5. Steps 2--4 repeat until a command asks the program to quit.
///
/// # Example
///
/// ```rust,ignore
/// use otpbox_core::{Command, Model, TerminalEvent};
/// use ratatui::Frame;
/// use ratatui::widgets::Paragraph;
///
/// struct Counter { count: i32 }
///
/// enum Msg { Increment, Quit }
///
/// impl Model for Counter {
///     type Message = Msg;
///     type Flags = ();
///
///     fn init(_flags: ()) -> (Self, Command<Msg>) {
///         (Counter { count: 0 }, Command::none())
///     }
///
///     fn update(&mut self, msg: Msg) -> Command<Msg> {
///         match msg {
///             Msg::Increment => self.count += 1,
///             Msg::Quit => return Command::quit(),
///         }
///         Command::none()
///     }
///
///     fn view(&self, frame: &mut Frame) {
///         frame.render_widget(Paragraph::new(format!("{}", self.count)), frame.area());
///     }
///
///     fn handle_event(&self, event: TerminalEvent) -> Option<Msg> {
///         match event {
///             TerminalEvent::Key(_) => Some(Msg::Increment),
///             _ => None,
///         }
///     }
/// }
/// ```
///
/// [Elm Architecture]: https://guide.elm-lang.org/architecture/
pub trait Model: Sized + Send + 'static {
    /// The application's message type.
    type Message: Send + 'static;

    /// Initialization data passed to [`Model::init`].
    ///
    /// Use `()` when no startup data is needed.
    type Flags: Send + 'static;

    /// Create the initial model state and an optional startup command.
    fn init(flags: Self::Flags) -> (Self, Command<Self::Message>);

    /// Process a message, mutate state, and return a command for side effects.
    fn update(&mut self, msg: Self::Message) -> Command<Self::Message>;

    /// Render the current state to a ratatui [`Frame`].
    ///
    /// This should be a pure function of `&self`. The runtime calls `view`
    /// after updates and on the initial render.
    fn view(&self, frame: &mut Frame);

    /// Map a terminal event into an application message.
    ///
    /// Return `None` to discard the event. The default implementation
    /// discards everything.
    fn handle_event(&self, event: TerminalEvent) -> Option<Self::Message> {
        let _ = event;
        None
    }
}
