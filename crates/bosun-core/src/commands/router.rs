//! Command router
//!
//! This module provides the dispatch entry point the host calls once per
//! command-prefixed chat line. The router resolves the alias against the
//! registry and invokes the matched command inside a failure-isolating
//! scope: a command that errors or panics is logged and suppressed, never
//! allowed to unwind into the host's message-processing loop.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{error, info};

use super::discovery::{CommandManifest, DiscoveryReport};
use super::registry::CommandRegistry;
use super::types::{Command, CommandKind, PlayerId};

/// What happened to a dispatched chat line
///
/// Dispatch never fails from the caller's perspective; the outcome exists
/// so hosts and tests can observe misses and isolated failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A command was resolved and executed successfully
    Handled,
    /// No command is registered under the alias
    NotFound,
    /// A command was resolved but its execution failed; the failure was
    /// logged and suppressed
    Failed,
}

/// Router owning the alias registry
///
/// Constructed once at host startup and shared with whatever component
/// forwards chat lines. Discovery takes the write lock; dispatch takes the
/// read lock, so hosts that deliver chat lines from multiple threads are
/// safe, and single-threaded hosts pay one uncontended lock per line.
#[derive(Default)]
pub struct CommandRouter {
    registry: RwLock<CommandRegistry>,
}

impl CommandRouter {
    /// Create a router with an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a router around an already-populated registry
    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self {
            registry: RwLock::new(registry),
        }
    }

    /// Run a discovery pass for one extension module
    ///
    /// See [`CommandManifest`] for what modules declare. Runs each factory
    /// exactly once and registers every alias of the resulting instance.
    pub fn discover(&self, manifest: &CommandManifest) -> DiscoveryReport {
        manifest.install(&mut self.registry.write())
    }

    /// Dispatch an anonymous chat command (`/alias arguments`)
    pub fn dispatch_chat(&self, alias: &str, arguments: &str) -> DispatchOutcome {
        self.dispatch(CommandKind::Chat, alias, arguments, None)
    }

    /// Dispatch a sender-attributed public command (`!alias arguments`)
    pub fn dispatch_public(
        &self,
        alias: &str,
        arguments: &str,
        sender: PlayerId,
    ) -> DispatchOutcome {
        self.dispatch(CommandKind::Public, alias, arguments, Some(sender))
    }

    /// Resolve an alias and execute the matched command
    pub fn dispatch(
        &self,
        kind: CommandKind,
        alias: &str,
        arguments: &str,
        sender: Option<PlayerId>,
    ) -> DispatchOutcome {
        let alias = alias.to_lowercase();

        // Clone out of the registry so the lock is not held across execute;
        // a command is free to list the registry for help output.
        let command = self.registry.read().get(kind, &alias);
        let Some(command) = command else {
            info!(
                "'{}{} {}' could not be found",
                kind.prefix(),
                alias,
                arguments
            );
            return DispatchOutcome::NotFound;
        };

        match panic::catch_unwind(AssertUnwindSafe(|| command.execute(arguments, sender))) {
            Ok(Ok(())) => DispatchOutcome::Handled,
            Ok(Err(err)) => {
                error!(
                    detail = ?err,
                    "'{}{} {}' failed: {err}",
                    kind.prefix(),
                    alias,
                    arguments
                );
                DispatchOutcome::Failed
            }
            Err(payload) => {
                error!(
                    "'{}{} {}' panicked: {}",
                    kind.prefix(),
                    alias,
                    arguments,
                    panic_message(&payload)
                );
                DispatchOutcome::Failed
            }
        }
    }

    /// Get a command by alias without executing it
    pub fn get(&self, kind: CommandKind, alias: &str) -> Option<Arc<dyn Command>> {
        self.registry.read().get(kind, alias)
    }

    /// List distinct commands of one kind, sorted by canonical alias
    pub fn list(&self, kind: CommandKind) -> Vec<Arc<dyn Command>> {
        self.registry.read().list(kind)
    }

    /// Number of registered alias keys for one kind
    pub fn count(&self, kind: CommandKind) -> usize {
        self.registry.read().count(kind)
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic payload"
    }
}
