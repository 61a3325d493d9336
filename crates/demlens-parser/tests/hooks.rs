//! Hook registry ordering and error propagation.

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use demlens_core::proto::demo::CDemoSyncTick;
use demlens_core::proto::DemoMessage;
use demlens_core::protocol::kinds::{DemoKind, UserKind};
use demlens_core::protocol::writer::DemoWriter;
use demlens_core::{DemError, ErrorCode, Result};
use demlens_parser::{Hook, HookRegistry, Message, MessageKind, Parser, ParserConfig, Tier};

type Log = Rc<RefCell<Vec<&'static str>>>;

fn recorder(log: &Log, tag: &'static str) -> impl FnMut(&Message) -> Result<()> + 'static {
    let log = Rc::clone(log);
    move |_: &Message| {
        log.borrow_mut().push(tag);
        Ok(())
    }
}

fn sync_tick() -> Message {
    Message::Demo(DemoMessage::SyncTick(CDemoSyncTick {}))
}

const SYNC: MessageKind = MessageKind::Demo(DemoKind::SyncTick);

#[test]
fn internal_tier_runs_before_external() {
    let log: Log = Rc::default();
    let mut hooks = HookRegistry::new();
    hooks.register_hook(Tier::External, SYNC, recorder(&log, "external"));
    hooks.register_hook(Tier::Internal, SYNC, recorder(&log, "internal"));

    hooks.dispatch(&sync_tick()).unwrap();
    assert_eq!(*log.borrow(), vec!["internal", "external"]);
}

#[test]
fn registration_order_is_kept_and_kind_hooks_precede_catch_all() {
    let log: Log = Rc::default();
    let mut hooks = HookRegistry::new();
    hooks.register_any(recorder(&log, "any"));
    hooks.register(SYNC, recorder(&log, "first"));
    hooks.register(SYNC, recorder(&log, "second"));
    hooks.register(MessageKind::GameEvent, recorder(&log, "other"));

    hooks.dispatch(&sync_tick()).unwrap();
    assert_eq!(*log.borrow(), vec!["first", "second", "any"]);
    assert_eq!(hooks.len(Tier::External), 4);
    assert_eq!(hooks.len(Tier::Internal), 0);
    assert_eq!(hooks.registered_kinds(), vec![SYNC, MessageKind::GameEvent]);
}

#[test]
fn dispatch_without_hooks_is_noop() {
    let mut hooks = HookRegistry::new();
    hooks.dispatch(&sync_tick()).unwrap();
    assert!(hooks.registered_kinds().is_empty());
}

#[test]
fn failing_hook_stops_later_hooks() {
    let log: Log = Rc::default();
    let mut hooks = HookRegistry::new();
    hooks.register(SYNC, |_: &Message| Err(DemError::Hook("refused".into())));
    hooks.register(SYNC, recorder(&log, "after"));

    let err = hooks.dispatch(&sync_tick()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Hook);
    assert!(log.borrow().is_empty());
}

struct Counter {
    seen: Rc<RefCell<u32>>,
}

impl Hook for Counter {
    fn on_message(&mut self, msg: &Message) -> Result<()> {
        if msg.kind() == MessageKind::User(UserKind::SayText2) {
            return Err(DemError::Hook("unexpected chat".into()));
        }
        *self.seen.borrow_mut() += 1;
        Ok(())
    }
}

#[test]
fn struct_hooks_are_accepted() {
    let seen = Rc::new(RefCell::new(0));
    let mut hooks = HookRegistry::new();
    hooks.register_any_hook(
        Tier::External,
        Counter {
            seen: Rc::clone(&seen),
        },
    );
    hooks.dispatch(&sync_tick()).unwrap();
    hooks.dispatch(&sync_tick()).unwrap();
    assert_eq!(*seen.borrow(), 2);
}

#[test]
fn hook_error_aborts_parse() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::SyncTick, 0, &[]);
    w.frame(DemoKind::SyncTick, 1, &[]);
    w.frame(DemoKind::SyncTick, 2, &[]);

    let calls = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&calls);
    let mut parser = Parser::new(ParserConfig::default());
    parser.register(SYNC, move |_: &Message| {
        *sink.borrow_mut() += 1;
        if *sink.borrow() == 2 {
            return Err(DemError::Hook("stop".into()));
        }
        Ok(())
    });

    let err = parser.parse(w.finish()).unwrap_err();
    assert!(matches!(err, DemError::Hook(ref m) if m == "stop"));
    assert_eq!(*calls.borrow(), 2);
    // stats hook is internal, so it saw the failing frame too
    assert_eq!(parser.stats().count(SYNC), 2);
}

#[test]
fn parser_registers_stats_hook_internally() {
    let mut parser = Parser::new(ParserConfig::default());
    assert_eq!(parser.hooks_mut().len(Tier::Internal), 1);
    assert_eq!(parser.hooks_mut().len(Tier::External), 0);
}
