//! Bosun Core Library
//!
//! This crate provides the core functionality for the Bosun command system:
//! the command contract, alias registry, dispatch with failure isolation,
//! module command discovery, and the chat messaging collaborator.

pub mod commands;
pub mod error;
pub mod messaging;

// Re-export commonly used types
pub use commands::{
    Command, CommandKind, CommandManifest, CommandRegistry, CommandRouter, DiscoveryReport,
    DispatchOutcome, PlayerId,
};
pub use error::{CommandError, CommandResult};
pub use messaging::{ChatTransport, Messenger};
