//! Alias registry for chat and public commands
//!
//! This module provides the registry mapping lower-cased aliases to shared
//! command instances. Chat and public commands live in separate maps with
//! disjoint alias namespaces.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{info, warn};

use super::types::{Command, CommandKind};

/// Registry mapping lowercase aliases to command instances
///
/// A given alias maps to at most one instance per kind; multiple aliases
/// may map to the same instance. Entries are never removed or mutated after
/// insertion — there is no unload support.
#[derive(Default)]
pub struct CommandRegistry {
    /// Chat commands by alias
    chat: HashMap<String, Arc<dyn Command>>,
    /// Public commands by alias
    public: HashMap<String, Arc<dyn Command>>,
}

impl CommandRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self::default()
    }

    fn map(&self, kind: CommandKind) -> &HashMap<String, Arc<dyn Command>> {
        match kind {
            CommandKind::Chat => &self.chat,
            CommandKind::Public => &self.public,
        }
    }

    fn map_mut(&mut self, kind: CommandKind) -> &mut HashMap<String, Arc<dyn Command>> {
        match kind {
            CommandKind::Chat => &mut self.chat,
            CommandKind::Public => &mut self.public,
        }
    }

    /// Register every alias of a command instance
    ///
    /// Aliases are lower-cased before insertion. An alias that is already
    /// taken is skipped with an informational log — duplicates across
    /// independently-authored modules are expected and must not abort a
    /// load. Returns the number of aliases actually inserted.
    pub fn register(&mut self, kind: CommandKind, command: Arc<dyn Command>) -> usize {
        let aliases = command.aliases();
        if aliases.is_empty() {
            warn!(kind = %kind, "command with no aliases ignored");
            return 0;
        }

        let mut added = 0;
        for alias in aliases {
            let key = alias.to_lowercase();
            if self.map(kind).contains_key(&key) {
                info!(kind = %kind, alias = %key, "found duplicate command alias");
                continue;
            }
            self.map_mut(kind).insert(key, Arc::clone(&command));
            added += 1;
        }
        added
    }

    /// Get a command by alias, matching case-insensitively
    pub fn get(&self, kind: CommandKind, alias: &str) -> Option<Arc<dyn Command>> {
        self.map(kind).get(&alias.to_lowercase()).cloned()
    }

    /// Check if an alias is registered
    pub fn contains(&self, kind: CommandKind, alias: &str) -> bool {
        self.map(kind).contains_key(&alias.to_lowercase())
    }

    /// List distinct command instances, sorted by canonical alias
    ///
    /// An instance registered under several aliases appears exactly once.
    pub fn list(&self, kind: CommandKind) -> Vec<Arc<dyn Command>> {
        let mut seen = HashSet::new();
        let mut commands: Vec<Arc<dyn Command>> = self
            .map(kind)
            .values()
            .filter(|cmd| seen.insert(Arc::as_ptr(*cmd) as *const () as usize))
            .cloned()
            .collect();
        commands.sort_by(|a, b| {
            let a = a.aliases().first().copied().unwrap_or("");
            let b = b.aliases().first().copied().unwrap_or("");
            a.cmp(b)
        });
        commands
    }

    /// Number of registered alias keys (not distinct instances)
    pub fn count(&self, kind: CommandKind) -> usize {
        self.map(kind).len()
    }
}
