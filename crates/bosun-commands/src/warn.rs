//! Send a titled warning to one participant

use bosun_core::{Command, CommandError, CommandResult, Messenger, PlayerId};

/// `/warn <player-id> <message>` — deliver a titled warning to one player
///
/// Uses the privileged messaging path: without session authority the
/// messenger refuses with a warning log and nothing is sent.
pub struct WarnCommand {
    messenger: Messenger,
}

impl WarnCommand {
    pub fn new(messenger: Messenger) -> Self {
        Self { messenger }
    }
}

impl Command for WarnCommand {
    fn aliases(&self) -> &[&str] {
        &["warn"]
    }

    fn description(&self) -> &str {
        "Send a titled warning message to a specific player"
    }

    fn usage_examples(&self) -> Vec<String> {
        vec!["/warn <player-id> <message>".to_string()]
    }

    fn execute(&self, arguments: &str, _sender: Option<PlayerId>) -> CommandResult<()> {
        let (id, message) = arguments
            .trim()
            .split_once(char::is_whitespace)
            .ok_or_else(|| CommandError::invalid_arguments("expected <player-id> <message>"))?;
        let target: PlayerId = id
            .parse()
            .map_err(|_| CommandError::invalid_arguments(format!("invalid player id '{id}'")))?;

        self.messenger.kick_message(target, "Warning", message.trim());
        Ok(())
    }
}
