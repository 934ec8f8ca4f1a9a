//! Liveness check against the local chat log

use bosun_core::{Command, CommandResult, Messenger, PlayerId};

/// `/ping` — answer with a local "pong" chat line
pub struct PingCommand {
    messenger: Messenger,
}

impl PingCommand {
    pub fn new(messenger: Messenger) -> Self {
        Self { messenger }
    }
}

impl Command for PingCommand {
    fn aliases(&self) -> &[&str] {
        &["ping"]
    }

    fn description(&self) -> &str {
        "Check that the command system is responding"
    }

    fn execute(&self, _arguments: &str, _sender: Option<PlayerId>) -> CommandResult<()> {
        self.messenger.echo("pong", true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Effect, RecordingTransport};

    #[test]
    fn test_ping_answers_locally() {
        let transport = RecordingTransport::new(false);
        let cmd = PingCommand::new(transport.messenger());

        cmd.execute("", None).unwrap();

        assert_eq!(
            transport.effects(),
            vec![Effect::Local(String::new(), "pong".to_string())]
        );
    }

    #[test]
    fn test_ping_default_usage() {
        let transport = RecordingTransport::new(false);
        let cmd = PingCommand::new(transport.messenger());

        assert_eq!(cmd.usage_examples(), vec!["/ping"]);
    }
}
