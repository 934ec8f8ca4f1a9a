//! The built-in module wired through discovery and dispatch.

use std::sync::{Arc, Mutex};

use bosun_core::{ChatTransport, CommandKind, CommandRouter, DispatchOutcome, Messenger, PlayerId};

#[derive(Default)]
struct FakeTransport {
    authority: bool,
    local: Mutex<Vec<String>>,
    broadcasts: Mutex<Vec<String>>,
    titled: Mutex<Vec<(PlayerId, String, String)>>,
}

impl ChatTransport for FakeTransport {
    fn append_local(&self, _source: &str, message: &str) {
        self.local.lock().unwrap().push(message.to_string());
    }

    fn broadcast(&self, message: &str) {
        self.broadcasts.lock().unwrap().push(message.to_string());
    }

    fn is_session_authority(&self) -> bool {
        self.authority
    }

    fn send_titled(&self, target: PlayerId, title: &str, body: &str) {
        self.titled
            .lock()
            .unwrap()
            .push((target, title.to_string(), body.to_string()));
    }
}

fn wired_router(authority: bool) -> (Arc<FakeTransport>, CommandRouter) {
    let transport = Arc::new(FakeTransport {
        authority,
        ..FakeTransport::default()
    });
    let messenger = Messenger::new(transport.clone() as Arc<dyn ChatTransport>);
    let router = CommandRouter::new();
    router.discover(&bosun_commands::manifest(&messenger));
    (transport, router)
}

#[test]
fn manifest_registers_every_alias() {
    let (_, router) = wired_router(false);

    // echo/say + ping + warn chat aliases; wave/hello public aliases.
    assert_eq!(router.count(CommandKind::Chat), 4);
    assert_eq!(router.count(CommandKind::Public), 2);

    let chat = router.list(CommandKind::Chat);
    let names: Vec<&str> = chat.iter().map(|cmd| cmd.aliases()[0]).collect();
    assert_eq!(names, vec!["echo", "ping", "warn"]);
}

#[test]
fn echo_round_trip() {
    let (transport, router) = wired_router(false);

    assert_eq!(
        router.dispatch_chat("Echo", "all hands on deck"),
        DispatchOutcome::Handled
    );
    assert_eq!(
        transport.broadcasts.lock().unwrap().clone(),
        vec!["all hands on deck"]
    );
}

#[test]
fn echo_with_no_text_is_isolated() {
    let (transport, router) = wired_router(false);

    // The command errors; the dispatch call still returns normally.
    assert_eq!(router.dispatch_chat("echo", ""), DispatchOutcome::Failed);
    assert!(transport.broadcasts.lock().unwrap().is_empty());
}

#[test]
fn wave_is_attributed() {
    let (transport, router) = wired_router(false);

    assert_eq!(router.dispatch_public("hello", "", 42), DispatchOutcome::Handled);
    assert_eq!(
        transport.broadcasts.lock().unwrap().clone(),
        vec!["Player 42 waves"]
    );
}

#[test]
fn wave_is_not_a_chat_command() {
    let (_, router) = wired_router(false);
    assert_eq!(router.dispatch_chat("wave", ""), DispatchOutcome::NotFound);
}

#[test]
fn warn_respects_session_authority() {
    let (transport, router) = wired_router(false);
    assert_eq!(
        router.dispatch_chat("warn", "9 easy there"),
        DispatchOutcome::Handled
    );
    assert!(transport.titled.lock().unwrap().is_empty());

    let (transport, router) = wired_router(true);
    assert_eq!(
        router.dispatch_chat("warn", "9 easy there"),
        DispatchOutcome::Handled
    );
    assert_eq!(
        transport.titled.lock().unwrap().clone(),
        vec![(9, "Warning".to_string(), "easy there".to_string())]
    );
}
