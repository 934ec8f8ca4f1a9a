//! Command contract and kind definitions

use crate::error::CommandResult;

/// Identifier of a session participant, as assigned by the host's transport
pub type PlayerId = i32;

/// Which alias namespace a command lives in
///
/// The two kinds are structurally identical except for the sender id that
/// public commands receive, but their alias namespaces are disjoint: a name
/// may be registered as both a chat command and a public command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Anonymous command, invoked locally with the `/` prefix
    Chat,
    /// Sender-attributed command, invoked by any participant with the `!` prefix
    Public,
}

impl CommandKind {
    /// The prefix symbol conventionally used to invoke this kind of command
    pub fn prefix(&self) -> char {
        match self {
            Self::Chat => '/',
            Self::Public => '!',
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chat => write!(f, "chat"),
            Self::Public => write!(f, "public"),
        }
    }
}

/// Base trait for all chat commands
///
/// Implementations are registered by a discovery pass and invoked by the
/// router whenever a chat line matches one of their aliases. Registration
/// fails silently for an alias that is already taken.
pub trait Command: Send + Sync {
    /// Names the command can be invoked by
    ///
    /// Must contain at least one entry; index 0 is the canonical display
    /// name. Aliases are matched case-insensitively.
    fn aliases(&self) -> &[&str];

    /// A short description of what the command does
    fn description(&self) -> &str;

    /// Examples of how to use the command, including what arguments are valid
    ///
    /// Default implementation synthesizes a single example from the
    /// canonical alias. Override for commands that take arguments.
    fn usage_examples(&self) -> Vec<String> {
        vec![format!("/{}", self.aliases().first().copied().unwrap_or(""))]
    }

    /// Execute the command
    ///
    /// `arguments` is everything typed after the alias, unparsed. `sender`
    /// is `Some(id)` when dispatched as a public command and `None` when
    /// dispatched as a chat command. Errors (and panics) are caught at the
    /// dispatch boundary and logged; they never reach the host.
    fn execute(&self, arguments: &str, sender: Option<PlayerId>) -> CommandResult<()>;
}
