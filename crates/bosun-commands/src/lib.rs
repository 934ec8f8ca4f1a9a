//! Built-in commands for the Bosun command system
//!
//! This crate is an ordinary extension module from the router's point of
//! view: it defines command implementations and exposes [`manifest`], the
//! discovery entry point the host runs once at load time.

pub mod echo;
pub mod ping;
pub mod warn;
pub mod wave;

pub use echo::EchoCommand;
pub use ping::PingCommand;
pub use warn::WarnCommand;
pub use wave::WaveCommand;

use std::sync::Arc;

use bosun_core::{CommandManifest, Messenger};

/// Discovery manifest for this module's commands
///
/// The factories capture the messenger so every command shares the host's
/// chat transport.
pub fn manifest(messenger: &Messenger) -> CommandManifest {
    let echo = messenger.clone();
    let ping = messenger.clone();
    let warn = messenger.clone();
    let wave = messenger.clone();
    CommandManifest::new("bosun-commands")
        .chat(move || Arc::new(EchoCommand::new(echo.clone())))
        .chat(move || Arc::new(PingCommand::new(ping.clone())))
        .chat(move || Arc::new(WarnCommand::new(warn.clone())))
        .public(move || Arc::new(WaveCommand::new(wave.clone())))
}
