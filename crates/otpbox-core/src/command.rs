/// A side effect returned from [`Model::update`](crate::Model::update),
/// [`Model::init`](crate::Model::init) or a [`Component`](crate::Component).
///
/// Widgets report what happened to their host by returning messages wrapped
/// in a command. The runtime feeds those messages back into `update` in the
/// order they were produced.
///
/// ```rust,ignore
/// // Report an edit, then completion:
/// let cmd = Command::batch([
///     Command::message(Msg::Changed(otp)),
///     Command::message(Msg::Completed),
/// ]);
///
/// // Leave the program:
/// let cmd = Command::quit();
/// ```
pub struct Command<Msg: Send + 'static> {
    pub(crate) inner: CommandInner<Msg>,
}

pub(crate) enum CommandInner<Msg: Send + 'static> {
    None,
    Message(Msg),
    Batch(Vec<Command<Msg>>),
    SetTitle(String),
    Quit,
}

impl<Msg: Send + 'static> Command<Msg> {
    /// No-op command.
    pub fn none() -> Self {
        Self::from_inner(CommandInner::None)
    }

    /// Deliver `msg` to `update` on the next turn of the loop.
    pub fn message(msg: Msg) -> Self {
        Self::from_inner(CommandInner::Message(msg))
    }

    /// Stop the program after the current message.
    pub fn quit() -> Self {
        Self::from_inner(CommandInner::Quit)
    }

    /// Set the terminal window title.
    pub fn set_title(title: impl Into<String>) -> Self {
        Self::from_inner(CommandInner::SetTitle(title.into()))
    }

    /// Run several commands; their messages are delivered in iteration order.
    pub fn batch(cmds: impl IntoIterator<Item = Command<Msg>>) -> Self {
        let mut cmds: Vec<_> = cmds.into_iter().filter(|cmd| !cmd.is_none()).collect();
        match cmds.len() {
            0 => Command::none(),
            1 => cmds.pop().unwrap_or_else(Command::none),
            _ => Self::from_inner(CommandInner::Batch(cmds)),
        }
    }

    /// Lift a child's command into the parent's message type.
    pub fn map<NewMsg: Send + 'static>(self, f: impl Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        self.map_with(&f)
    }

    fn map_with<NewMsg: Send + 'static>(self, f: &dyn Fn(Msg) -> NewMsg) -> Command<NewMsg> {
        let inner = match self.inner {
            CommandInner::None => CommandInner::None,
            CommandInner::Message(msg) => CommandInner::Message(f(msg)),
            CommandInner::Batch(cmds) => {
                CommandInner::Batch(cmds.into_iter().map(|cmd| cmd.map_with(f)).collect())
            }
            CommandInner::SetTitle(title) => CommandInner::SetTitle(title),
            CommandInner::Quit => CommandInner::Quit,
        };
        Command::from_inner(inner)
    }

    fn from_inner(inner: CommandInner<Msg>) -> Self {
        Command { inner }
    }

    /// Returns `true` if this is a no-op command.
    pub fn is_none(&self) -> bool {
        matches!(self.inner, CommandInner::None)
    }

    /// Returns `true` if this command, or any command in its batch, asks the program to quit.
    pub fn is_quit(&self) -> bool {
        match self.inner {
            CommandInner::Quit => true,
            CommandInner::Batch(ref cmds) => cmds.iter().any(Command::is_quit),
            _ => false,
        }
    }

    /// The message, if this is a single-message command.
    pub fn into_message(self) -> Option<Msg> {
        match self.inner {
            CommandInner::Message(msg) => Some(msg),
            _ => None,
        }
    }

    /// Every message carried by this command, in delivery order.
    pub fn into_messages(self) -> Vec<Msg> {
        let mut out = Vec::new();
        self.collect_messages(&mut out);
        out
    }

    fn collect_messages(self, out: &mut Vec<Msg>) {
        match self.inner {
            CommandInner::Message(msg) => out.push(msg),
            CommandInner::Batch(cmds) => {
                for cmd in cmds {
                    cmd.collect_messages(out);
                }
            }
            CommandInner::None | CommandInner::SetTitle(_) | CommandInner::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_nothing_is_none() {
        let cmd: Command<i32> = Command::batch([Command::none(), Command::none()]);
        assert!(cmd.is_none());
    }

    #[test]
    fn batch_of_one_unwraps() {
        let cmd: Command<i32> = Command::batch([Command::none(), Command::message(1)]);
        assert_eq!(cmd.into_message(), Some(1));
    }

    #[test]
    fn batch_keeps_order() {
        let cmd: Command<i32> = Command::batch([Command::message(1), Command::message(2)]);
        assert_eq!(cmd.into_messages(), vec![1, 2]);
    }

    #[test]
    fn nested_batches_flatten_in_order() {
        let inner: Command<i32> = Command::batch([Command::message(2), Command::message(3)]);
        let cmd = Command::batch([Command::message(1), inner, Command::set_title("t")]);
        assert_eq!(cmd.into_messages(), vec![1, 2, 3]);
    }

    #[test]
    fn map_converts_messages() {
        let cmd: Command<i32> = Command::batch([Command::message(4), Command::message(2)]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert_eq!(mapped.into_messages(), vec!["4", "2"]);
    }

    #[test]
    fn map_keeps_quit_and_title() {
        let cmd: Command<i32> = Command::batch([Command::set_title("otp"), Command::quit()]);
        let mapped: Command<String> = cmd.map(|n| n.to_string());
        assert!(mapped.is_quit());
        match mapped.inner {
            CommandInner::Batch(ref cmds) => {
                assert!(matches!(cmds[0].inner, CommandInner::SetTitle(ref t) if t == "otp"))
            }
            _ => panic!("expected a batch"),
        }
    }
}
