//! Module command discovery
//!
//! Extension modules declare the commands they provide through a
//! [`CommandManifest`]: the module's display name plus one factory per
//! command implementation. A discovery pass runs each factory exactly once
//! and registers every alias of the resulting instance.
//!
//! Declaring a manifest replaces any reflection-style scanning: the
//! compiler checks the factory list, and "forgot to register" becomes a
//! missing entry that is visible in code review instead of a runtime
//! surprise. A factory that panics is a module-author defect and is allowed
//! to propagate at load time; duplicate aliases are skipped silently.

use std::sync::Arc;

use tracing::{info, info_span};

use super::registry::CommandRegistry;
use super::types::{Command, CommandKind};

/// Constructs one command instance; run exactly once per discovery pass
pub type CommandFactory = Box<dyn Fn() -> Arc<dyn Command> + Send + Sync>;

/// Everything one extension module exports for command discovery
pub struct CommandManifest {
    module: String,
    entries: Vec<(CommandKind, CommandFactory)>,
}

impl CommandManifest {
    /// Create an empty manifest for the named module
    ///
    /// The module name is used only for log attribution.
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            entries: Vec::new(),
        }
    }

    /// Declare a chat command
    pub fn chat<F>(self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Command> + Send + Sync + 'static,
    {
        self.entry(CommandKind::Chat, factory)
    }

    /// Declare a public command
    pub fn public<F>(self, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Command> + Send + Sync + 'static,
    {
        self.entry(CommandKind::Public, factory)
    }

    /// Declare a command of either kind
    pub fn entry<F>(mut self, kind: CommandKind, factory: F) -> Self
    where
        F: Fn() -> Arc<dyn Command> + Send + Sync + 'static,
    {
        self.entries.push((kind, Box::new(factory)));
        self
    }

    /// The module name used for log attribution
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Number of declared command entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the manifest declares no commands
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Instantiate every declared command and register its aliases
    ///
    /// Usually reached through `CommandRouter::discover`. Duplicate aliases
    /// are skipped, counted, and do not abort the pass.
    pub(crate) fn install(&self, registry: &mut CommandRegistry) -> DiscoveryReport {
        let span = info_span!("discover", module = %self.module);
        let _guard = span.enter();

        let mut report = DiscoveryReport::new(&self.module);
        for (kind, factory) in &self.entries {
            let command = factory();
            let aliases = command.aliases().len();
            let added = registry.register(*kind, command);
            report.skipped += aliases - added;
            match kind {
                CommandKind::Chat => report.chat_added += added,
                CommandKind::Public => report.public_added += added,
            }
        }

        info!(
            "[{}] added {} chat and {} public command aliases",
            self.module, report.chat_added, report.public_added
        );
        report
    }
}

/// Outcome of one discovery pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryReport {
    /// Module the pass was run for
    pub module: String,
    /// Chat aliases successfully registered
    pub chat_added: usize,
    /// Public aliases successfully registered
    pub public_added: usize,
    /// Aliases skipped because they were already taken
    pub skipped: usize,
}

impl DiscoveryReport {
    fn new(module: &str) -> Self {
        Self {
            module: module.to_string(),
            chat_added: 0,
            public_added: 0,
            skipped: 0,
        }
    }

    /// Total aliases registered across both kinds
    pub fn total_added(&self) -> usize {
        self.chat_added + self.public_added
    }
}
