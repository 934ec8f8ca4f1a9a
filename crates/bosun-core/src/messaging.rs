//! Chat messaging collaborator
//!
//! Commands perform their visible effects through a [`Messenger`], which in
//! turn talks to the host through the [`ChatTransport`] seam. The transport
//! is the host's concern: rendering a line into the local chat log,
//! broadcasting over the session's networking layer, and delivering a
//! titled warning to one specific participant.

use std::sync::Arc;

use tracing::{info, warn};

use crate::commands::PlayerId;

/// Host-provided transport for chat effects
pub trait ChatTransport: Send + Sync {
    /// Insert a line into the local chat log, attributed to `source`
    fn append_local(&self, source: &str, message: &str);

    /// Broadcast a text message to every session participant
    fn broadcast(&self, message: &str);

    /// Whether this process currently holds session-authority status
    fn is_session_authority(&self) -> bool;

    /// Deliver a titled message to one specific participant
    ///
    /// Only ever called while this process holds session authority.
    fn send_titled(&self, target: PlayerId, title: &str, body: &str);
}

/// Messaging facade handed to command implementations
#[derive(Clone)]
pub struct Messenger {
    transport: Arc<dyn ChatTransport>,
}

impl Messenger {
    /// Create a messenger over the host's transport
    pub fn new(transport: Arc<dyn ChatTransport>) -> Self {
        Self { transport }
    }

    /// Insert an attributed line into the local chat log
    pub fn notification(&self, source: &str, message: &str) {
        self.transport.append_local(source, message);
    }

    /// Echo a message locally, or broadcast it when `local` is false
    pub fn echo(&self, message: &str, local: bool) {
        if local {
            self.transport.append_local("", message);
        } else {
            self.transport.broadcast(message);
        }
    }

    /// Deliver a titled warning/kick message to one participant
    ///
    /// Privileged: requires session authority. Without it the request is
    /// refused with a warning log and no network effect — fire-and-forget,
    /// the caller gets no error signal.
    pub fn kick_message(&self, target: PlayerId, title: &str, body: &str) {
        if !self.transport.is_session_authority() {
            warn!("cannot send kick message without session authority");
            return;
        }
        info!(target_player = target, title, "sending kick message");
        self.transport.send_titled(target, title, body);
    }
}
