//! Attributed greeting command

use bosun_core::{Command, CommandError, CommandResult, Messenger, PlayerId};

/// `!wave [target]` — broadcast a greeting naming the sending player
pub struct WaveCommand {
    messenger: Messenger,
}

impl WaveCommand {
    pub fn new(messenger: Messenger) -> Self {
        Self { messenger }
    }
}

impl Command for WaveCommand {
    fn aliases(&self) -> &[&str] {
        &["wave", "hello"]
    }

    fn description(&self) -> &str {
        "Wave at the session, or at someone in particular"
    }

    fn usage_examples(&self) -> Vec<String> {
        vec!["!wave".to_string(), "!wave the pilot".to_string()]
    }

    fn execute(&self, arguments: &str, sender: Option<PlayerId>) -> CommandResult<()> {
        let sender =
            sender.ok_or_else(|| CommandError::failed("wave requires an attributed sender"))?;
        let target = arguments.trim();
        let message = if target.is_empty() {
            format!("Player {sender} waves")
        } else {
            format!("Player {sender} waves at {target}")
        };
        self.messenger.echo(&message, false);
        Ok(())
    }
}
