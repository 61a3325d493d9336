//! Engine behavior over synthetic replays.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;

use prost::Message as _;

use demlens_core::proto::demo::CDemoSyncTick;
use demlens_core::proto::user::CUserMsgSayText2;
use demlens_core::proto::{NetMessage, UserMessage};
use demlens_core::protocol::kinds::{DemoKind, NetKind, UserKind};
use demlens_core::protocol::writer::{DemoWriter, PacketWriter};
use demlens_core::{DemError, ErrorCode};
use demlens_parser::{EventValue, GameEvent, Message, MessageKind, Parser, ParserConfig};

mod fixtures;
use fixtures::*;

fn collect_events(parser: &mut Parser) -> Rc<RefCell<Vec<GameEvent>>> {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    parser.register(MessageKind::GameEvent, move |msg: &Message| {
        if let Message::GameEvent(ev) = msg {
            sink.borrow_mut().push(ev.clone());
        }
        Ok(())
    });
    seen
}

#[test]
fn end_to_end_single_user_message() {
    let say = CUserMsgSayText2 {
        client: 3,
        text: "gg".into(),
        ..Default::default()
    };
    let mut inner = PacketWriter::new();
    inner.message(NetKind::UserMessage, &user_message(UserKind::SayText2, &say));

    let mut w = DemoWriter::with_offset(0);
    w.frame(DemoKind::Packet, 0, &packet(inner.finish()));

    let mut parser = Parser::new(ParserConfig::default());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    parser.register(MessageKind::User(UserKind::SayText2), move |msg: &Message| {
        sink.borrow_mut().push(msg.clone());
        Ok(())
    });

    let summary = parser.parse(w.finish()).unwrap();

    assert_eq!(summary.frames, 1);
    assert!(summary.skipped.is_empty());
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0], Message::User(UserMessage::SayText2(say)));

    assert_eq!(summary.stats.frames, 1);
    assert_eq!(summary.stats.count(MessageKind::Demo(DemoKind::Packet)), 1);
    assert_eq!(summary.stats.count(MessageKind::Net(NetKind::UserMessage)), 1);
    assert_eq!(summary.stats.count(MessageKind::User(UserKind::SayText2)), 1);
}

#[test]
fn events_before_their_schema_are_skipped_not_fatal() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 10, &packet(event(7, vec![string_key("early")])));
    w.frame(
        DemoKind::Packet,
        20,
        &packet(event_list(vec![descriptor(
            7,
            "dota_chase_hero",
            &[("target", 1), ("priority", 4), ("forced", 6)],
        )])),
    );
    w.frame(
        DemoKind::Packet,
        30,
        &packet(event(7, vec![string_key("npc_dota_hero_axe"), short_key(-3), bool_key(true)])),
    );

    let mut parser = Parser::new(ParserConfig::default());
    let seen = collect_events(&mut parser);
    let summary = parser.parse(w.finish()).unwrap();

    assert_eq!(summary.frames, 3);
    assert_eq!(summary.skipped.len(), 1);
    assert!(matches!(summary.skipped[0], DemError::UnknownEventSchema(7)));
    assert!(summary.skipped[0].is_recoverable());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let ev = &seen[0];
    assert_eq!(ev.tick, 30);
    assert_eq!(ev.event_id, 7);
    assert_eq!(ev.name, "dota_chase_hero");
    assert_eq!(ev.get("target"), Some(&EventValue::String("npc_dota_hero_axe".into())));
    assert_eq!(ev.get("priority"), Some(&EventValue::Short(-3)));
    assert_eq!(ev.get("forced"), Some(&EventValue::Bool(true)));

    assert_eq!(summary.stats.events_resolved, 1);
    assert_eq!(summary.stats.events_skipped, 1);
    assert_eq!(summary.stats.schema_installs, 1);
}

#[test]
fn later_event_list_replaces_schema() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 1, &packet(event_list(vec![descriptor(7, "a", &[("x", 1)])])));
    w.frame(DemoKind::Packet, 2, &packet(event_list(vec![descriptor(8, "b", &[("y", 6)])])));
    w.frame(DemoKind::Packet, 3, &packet(event(7, vec![string_key("gone")])));
    w.frame(DemoKind::Packet, 4, &packet(event(8, vec![bool_key(false)])));

    let mut parser = Parser::new(ParserConfig::default());
    let seen = collect_events(&mut parser);
    let summary = parser.parse(w.finish()).unwrap();

    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].code(), ErrorCode::UnknownEventSchema);
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(seen.borrow()[0].name, "b");
    assert!(parser.schemas().get(7).is_none());
    assert_eq!(parser.schemas().len(), 1);
}

#[test]
fn too_many_keys_is_field_mismatch() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 1, &packet(event_list(vec![descriptor(1, "one", &[("a", 1)])])));
    w.frame(DemoKind::Packet, 2, &packet(event(1, vec![string_key("x"), string_key("y")])));
    // fewer keys than fields is fine
    w.frame(DemoKind::Packet, 3, &packet(event(1, vec![])));

    let mut parser = Parser::new(ParserConfig::default());
    let seen = collect_events(&mut parser);
    let summary = parser.parse(w.finish()).unwrap();

    assert_eq!(summary.skipped.len(), 1);
    match &summary.skipped[0] {
        DemError::EventFieldMismatch { event_id, .. } => assert_eq!(*event_id, 1),
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(seen.borrow().len(), 1);
    assert!(seen.borrow()[0].fields.is_empty());
}

#[test]
fn out_of_range_short_is_field_mismatch() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 1, &packet(event_list(vec![descriptor(2, "s", &[("v", 4)])])));
    w.frame(DemoKind::Packet, 2, &packet(event(2, vec![short_key(70_000)])));

    let summary = Parser::new(ParserConfig::default()).parse(w.finish()).unwrap();
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].code(), ErrorCode::EventFieldMismatch);
}

#[test]
fn descriptor_with_unknown_type_tag_is_not_installed() {
    let mut w = DemoWriter::new();
    w.frame(
        DemoKind::Packet,
        1,
        &packet(event_list(vec![
            descriptor(3, "bad", &[("v", 9)]),
            descriptor(4, "good", &[("v", 6)]),
        ])),
    );
    w.frame(DemoKind::Packet, 2, &packet(event(3, vec![bool_key(true)])));
    w.frame(DemoKind::Packet, 3, &packet(event(4, vec![bool_key(true)])));

    let mut parser = Parser::new(ParserConfig::default());
    let summary = parser.parse(w.finish()).unwrap();

    assert_eq!(parser.schemas().len(), 1);
    assert_eq!(summary.skipped.len(), 1);
    assert!(matches!(summary.skipped[0], DemError::UnknownEventSchema(3)));
    assert_eq!(summary.stats.events_resolved, 1);
}

#[test]
fn frame_cap_yields_exactly_that_many_frames() {
    let mut w = DemoWriter::new();
    let sync = CDemoSyncTick {}.encode_to_vec();
    for tick in 0..100 {
        w.frame(DemoKind::SyncTick, tick, &sync);
    }

    let cfg = ParserConfig {
        max_frames: Some(10),
        ..Default::default()
    };
    let mut parser = Parser::new(cfg);
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    parser.register(MessageKind::Demo(DemoKind::SyncTick), move |_: &Message| {
        *sink.borrow_mut() += 1;
        Ok(())
    });

    let summary = parser.parse(w.finish()).unwrap();
    assert_eq!(summary.frames, 10);
    assert_eq!(summary.last_tick, 9);
    assert_eq!(*count.borrow(), 10);
}

#[test]
fn compressed_frame_dispatches_on_masked_kind() {
    let say = CUserMsgSayText2 {
        text: "packed".into(),
        ..Default::default()
    };
    let mut inner = PacketWriter::new();
    inner.message(NetKind::UserMessage, &user_message(UserKind::SayText2, &say));

    let mut w = DemoWriter::new();
    w.compressed_frame(DemoKind::Packet, 5, &packet(inner.finish())).unwrap();

    let mut parser = Parser::new(ParserConfig::default());
    let kinds = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&kinds);
    parser.hooks_mut().register_any(move |msg: &Message| {
        sink.borrow_mut().push(msg.kind());
        Ok(())
    });

    let summary = parser.parse(w.finish()).unwrap();
    assert_eq!(summary.stats.compressed_frames, 1);
    assert_eq!(
        *kinds.borrow(),
        vec![
            MessageKind::User(UserKind::SayText2),
            MessageKind::Net(NetKind::UserMessage),
            MessageKind::Demo(DemoKind::Packet),
        ]
    );
}

#[test]
fn full_packet_inner_stream_is_dispatched() {
    let mut w = DemoWriter::new();
    w.frame(
        DemoKind::FullPacket,
        1,
        &full_packet(event_list(vec![descriptor(5, "e", &[("v", 6)])])),
    );
    w.frame(DemoKind::SignonPacket, 2, &packet(event(5, vec![bool_key(true)])));

    let mut parser = Parser::new(ParserConfig::default());
    let seen = collect_events(&mut parser);
    let summary = parser.parse(w.finish()).unwrap();

    assert!(summary.skipped.is_empty());
    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(summary.stats.count(MessageKind::Demo(DemoKind::FullPacket)), 1);
    assert_eq!(summary.stats.count(MessageKind::Demo(DemoKind::SignonPacket)), 1);
}

#[test]
fn unknown_user_message_kind_is_fatal() {
    let mut inner = PacketWriter::new();
    inner.message(
        NetKind::UserMessage,
        &demlens_core::proto::net::CsvcMsgUserMessage {
            msg_type: 63,
            msg_data: Default::default(),
        },
    );
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 0, &packet(inner.finish()));
    w.frame(DemoKind::SyncTick, 1, &[]);

    let err = Parser::new(ParserConfig::default()).parse(w.finish()).unwrap_err();
    assert!(matches!(err, DemError::UnknownUserMessageKind(63)));
    assert!(!err.is_recoverable());
}

#[test]
fn unknown_sub_message_kind_aborts_run() {
    let mut inner = PacketWriter::new();
    inner.raw_record(250, &[]);
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 0, &packet(inner.finish()));

    let err = Parser::new(ParserConfig::default()).parse(w.finish()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::UnknownSubMessageKind);
}

#[test]
fn invalid_magic_fails_before_any_frame() {
    let mut bytes = DemoWriter::new();
    bytes.frame(DemoKind::SyncTick, 0, &[]);
    let mut raw = bytes.finish().to_vec();
    raw[0] = b'X';

    let mut parser = Parser::new(ParserConfig::default());
    let fired = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&fired);
    parser.hooks_mut().register_any(move |_: &Message| {
        *sink.borrow_mut() += 1;
        Ok(())
    });

    let err = parser.parse(raw.into()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidFormat);
    assert_eq!(*fired.borrow(), 0);
}

#[test]
fn collect_events_keeps_them_in_summary() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 1, &packet(event_list(vec![descriptor(1, "one", &[("a", 1)])])));
    w.frame(DemoKind::Packet, 2, &packet(event(1, vec![string_key("x")])));
    w.frame(DemoKind::Packet, 3, &packet(event(1, vec![string_key("y")])));

    let cfg = ParserConfig {
        collect_events: true,
        ..Default::default()
    };
    let summary = Parser::new(cfg).parse(w.finish()).unwrap();
    let ticks: Vec<u64> = summary.events.iter().map(|e| e.tick).collect();
    assert_eq!(ticks, vec![2, 3]);
}

#[test]
fn each_run_starts_with_empty_schemas() {
    let mut first = DemoWriter::new();
    first.frame(DemoKind::Packet, 1, &packet(event_list(vec![descriptor(1, "one", &[("a", 1)])])));
    let mut second = DemoWriter::new();
    second.frame(DemoKind::Packet, 1, &packet(event(1, vec![string_key("x")])));

    let mut parser = Parser::new(ParserConfig::default());
    parser.parse(first.finish()).unwrap();
    assert_eq!(parser.schemas().len(), 1);

    let summary = parser.parse(second.finish()).unwrap();
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.stats.frames, 1);
}

#[test]
fn game_event_serializes_fields_as_object() {
    let mut w = DemoWriter::new();
    w.frame(
        DemoKind::Packet,
        1,
        &packet(event_list(vec![descriptor(1, "kill", &[("who", 1), ("first", 6)])])),
    );
    w.frame(DemoKind::Packet, 9, &packet(event(1, vec![string_key("axe"), bool_key(true)])));

    let mut parser = Parser::new(ParserConfig::default());
    let seen = collect_events(&mut parser);
    parser.parse(w.finish()).unwrap();

    let json = serde_json::to_value(&seen.borrow()[0]).unwrap();
    assert_eq!(json["tick"], 9);
    assert_eq!(json["name"], "kill");
    assert_eq!(json["fields"]["who"], "axe");
    assert_eq!(json["fields"]["first"], true);
}

#[test]
fn net_messages_reach_external_hooks() {
    let mut w = DemoWriter::new();
    w.frame(DemoKind::Packet, 1, &packet(event_list(vec![descriptor(1, "one", &[])])));

    let mut parser = Parser::new(ParserConfig::default());
    let lists = Rc::new(RefCell::new(0usize));
    let sink = Rc::clone(&lists);
    parser.register(MessageKind::Net(NetKind::GameEventList), move |msg: &Message| {
        if let Message::Net(NetMessage::GameEventList(l)) = msg {
            *sink.borrow_mut() += l.descriptors.len();
        }
        Ok(())
    });
    parser.parse(w.finish()).unwrap();
    assert_eq!(*lists.borrow(), 1);
}

#[test]
fn full_packet_without_inner_stream_is_announced() {
    let body = demlens_core::proto::demo::CDemoFullPacket {
        string_table: None,
        packet: None,
    }
    .encode_to_vec();
    let mut w = DemoWriter::new();
    w.frame(DemoKind::FullPacket, 4, &body);

    let summary = Parser::new(ParserConfig::default()).parse(w.finish()).unwrap();
    assert_eq!(summary.frames, 1);
    assert_eq!(summary.stats.count(MessageKind::Demo(DemoKind::FullPacket)), 1);
    assert_eq!(summary.stats.count(MessageKind::Net(NetKind::UserMessage)), 0);
}
