//! Chat command system
//!
//! This module provides the command system used by the host's chat loop:
//! extension modules declare command implementations, a discovery pass
//! registers every alias each implementation owns, and the router resolves
//! incoming chat lines to the matching command.
//!
//! # Overview
//!
//! Commands come in two kinds:
//! - **Chat** commands (`/name args`) — usable by any invoking context.
//! - **Public** commands (`!name args`) — additionally carry the id of the
//!   player who sent the line.
//!
//! Each kind has its own alias namespace, so a name may be both a chat and
//! a public command at the same time. Aliases are matched
//! case-insensitively, and a duplicate alias registered by a later module
//! is skipped with an informational log rather than rejected — module load
//! robustness wins over strict validation.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use bosun_core::commands::{CommandManifest, CommandRouter};
//! use std::sync::Arc;
//!
//! let router = CommandRouter::new();
//!
//! // At module-load time, once per extension module:
//! let manifest = CommandManifest::new("my-mod")
//!     .chat(|| Arc::new(GreetCommand::default()));
//! router.discover(&manifest);
//!
//! // For every command-prefixed chat line the host receives:
//! router.dispatch_chat("greet", "everyone");
//! router.dispatch_public("wave", "", 42);
//! ```
//!
//! A failing or panicking command never unwinds into the host: the router
//! logs the failure and keeps going.

pub mod discovery;
pub mod registry;
pub mod router;
pub mod types;

pub use discovery::{CommandFactory, CommandManifest, DiscoveryReport};
pub use registry::CommandRegistry;
pub use router::{CommandRouter, DispatchOutcome};
pub use types::{Command, CommandKind, PlayerId};
