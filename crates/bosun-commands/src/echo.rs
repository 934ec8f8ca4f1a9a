//! Broadcast a message to every session participant

use bosun_core::{Command, CommandError, CommandResult, Messenger, PlayerId};

/// `/echo <text>` — broadcast the text to everyone in the session
pub struct EchoCommand {
    messenger: Messenger,
}

impl EchoCommand {
    pub fn new(messenger: Messenger) -> Self {
        Self { messenger }
    }
}

impl Command for EchoCommand {
    fn aliases(&self) -> &[&str] {
        &["echo", "say"]
    }

    fn description(&self) -> &str {
        "Broadcast a message to everyone in the session"
    }

    fn usage_examples(&self) -> Vec<String> {
        vec!["/echo <text>".to_string()]
    }

    fn execute(&self, arguments: &str, _sender: Option<PlayerId>) -> CommandResult<()> {
        let message = arguments.trim();
        if message.is_empty() {
            return Err(CommandError::invalid_arguments("nothing to say"));
        }
        self.messenger.echo(message, false);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Effect, RecordingTransport};

    #[test]
    fn test_echo_broadcasts_trimmed_text() {
        let transport = RecordingTransport::new(false);
        let cmd = EchoCommand::new(transport.messenger());

        cmd.execute("  hello crew  ", None).unwrap();

        assert_eq!(
            transport.effects(),
            vec![Effect::Broadcast("hello crew".to_string())]
        );
    }

    #[test]
    fn test_echo_rejects_empty_arguments() {
        let transport = RecordingTransport::new(false);
        let cmd = EchoCommand::new(transport.messenger());

        assert!(matches!(
            cmd.execute("   ", None),
            Err(CommandError::InvalidArguments(_))
        ));
        assert!(transport.effects().is_empty());
    }

    #[test]
    fn test_echo_usage_is_overridden() {
        let transport = RecordingTransport::new(false);
        let cmd = EchoCommand::new(transport.messenger());

        assert_eq!(cmd.usage_examples(), vec!["/echo <text>"]);
    }
}
