//! Integration Tests für die Pattern-Engine
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockActuator

mod common;

use common::{ActuatorCall, MockActuator};
use embassy_sync::blocking_mutex::raw::NoopRawMutex;
use exalt_core::{
    CommandChannel, IDLE_HOLD_MS, PatternCommand, PatternEngine, PatternKind, SOS_SEQUENCE,
    TransportAdapter,
};

type TestChannel = CommandChannel<NoopRawMutex>;

// ============================================================================
// Tests: Zustandswechsel
// ============================================================================

#[test]
fn test_engine_starts_in_slow_blink() {
    let engine = PatternEngine::new(MockActuator::new());
    assert_eq!(engine.state().active_pattern, PatternKind::SlowBlink);
    assert_eq!(engine.state().period_ms, 1000);
}

#[test]
fn test_latest_command_wins_within_tick() {
    let channel = TestChannel::new();
    let mut engine = PatternEngine::new(MockActuator::new());

    channel
        .try_send(PatternCommand::SetFastBlink {
            period_ms: Some(300),
        })
        .unwrap();
    channel.try_send(PatternCommand::SetSolid).unwrap();

    let hold = engine.tick(channel.receiver());

    assert_eq!(engine.state().active_pattern, PatternKind::Solid);
    assert_eq!(hold, IDLE_HOLD_MS);
    assert!(channel.is_empty());
}

#[test]
fn test_latest_blink_period_wins_within_tick() {
    let channel = TestChannel::new();
    let mut engine = PatternEngine::new(MockActuator::new());

    channel
        .try_send(PatternCommand::SetFastBlink {
            period_ms: Some(300),
        })
        .unwrap();
    channel
        .try_send(PatternCommand::SetSlowBlink {
            period_ms: Some(1500),
        })
        .unwrap();

    assert_eq!(engine.tick(channel.receiver()), 1500);
    assert_eq!(engine.state().active_pattern, PatternKind::SlowBlink);
    assert_eq!(engine.state().period_ms, 1500);
}

#[test]
fn test_default_periods() {
    let mut engine = PatternEngine::new(MockActuator::new());

    engine.apply(PatternCommand::SetFastBlink { period_ms: None });
    assert_eq!(engine.state().period_ms, 200);

    engine.apply(PatternCommand::SetSlowBlink { period_ms: None });
    assert_eq!(engine.state().period_ms, 1000);
}

#[test]
fn test_zero_period_never_reaches_state() {
    let mut engine = PatternEngine::new(MockActuator::new());
    engine.apply(PatternCommand::SetFastBlink { period_ms: Some(0) });
    assert_eq!(engine.state().period_ms, 200);
    assert_eq!(engine.step(), 200);
}

#[test]
fn test_sos_phase_resets_after_switch_away() {
    let mut engine = PatternEngine::new(MockActuator::new());

    engine.apply(PatternCommand::SetSos);
    for _ in 0..9 {
        engine.step();
    }
    assert_eq!(engine.state().phase, 9);

    engine.apply(PatternCommand::Off);
    engine.step();
    engine.apply(PatternCommand::SetSos);
    assert_eq!(engine.state().phase, 0);

    // Erster Abschnitt ist wieder der kurze Puls
    assert_eq!(engine.step(), SOS_SEQUENCE[0].hold_ms);
    assert!(engine.actuator().level);
}

#[test]
fn test_sos_levels_follow_sequence() {
    let mut engine = PatternEngine::new(MockActuator::new());
    engine.apply(PatternCommand::SetSos);

    for segment in SOS_SEQUENCE.iter() {
        assert_eq!(engine.step(), segment.hold_ms);
        assert_eq!(engine.actuator().level, segment.level);
    }
    assert_eq!(engine.state().phase, 0);
}

// ============================================================================
// Tests: End-to-End Szenarien
// ============================================================================

#[test]
fn test_connect_switches_to_fast_blink() {
    let channel = TestChannel::new();
    let adapter = TransportAdapter::new(channel.sender());
    let mut engine = PatternEngine::new(MockActuator::new());

    // Ein Tick im Startzustand
    assert_eq!(engine.tick(channel.receiver()), 1000);

    adapter.on_connect().unwrap();

    let holds: Vec<u32> = (0..4).map(|_| engine.tick(channel.receiver())).collect();
    assert_eq!(engine.state().active_pattern, PatternKind::FastBlink);
    assert_eq!(engine.state().period_ms, 200);
    assert_eq!(holds, vec![200, 200, 200, 200]);
    assert_eq!(engine.actuator().toggle_count(), 5);
}

#[test]
fn test_disconnect_returns_to_slow_blink() {
    let channel = TestChannel::new();
    let adapter = TransportAdapter::new(channel.sender());
    let mut engine = PatternEngine::new(MockActuator::new());

    adapter.on_connect().unwrap();
    engine.tick(channel.receiver());
    adapter.on_disconnect().unwrap();

    assert_eq!(engine.tick(channel.receiver()), 1000);
    assert_eq!(engine.state().active_pattern, PatternKind::SlowBlink);
}

#[test]
fn test_written_slow_blink_period_applies_next_tick() {
    let channel = TestChannel::new();
    let adapter = TransportAdapter::new(channel.sender());
    let mut engine = PatternEngine::new(MockActuator::new());

    adapter.on_command_write(0, &[1, 0x07, 0xD0]).unwrap();
    assert_eq!(engine.state().period_ms, 1000);

    assert_eq!(engine.tick(channel.receiver()), 2000);
    assert_eq!(engine.state().active_pattern, PatternKind::SlowBlink);
    assert_eq!(engine.state().period_ms, 2000);
}

#[test]
fn test_unknown_byte_leaves_engine_untouched() {
    let channel = TestChannel::new();
    let adapter = TransportAdapter::new(channel.sender());
    let mut engine = PatternEngine::new(MockActuator::new());
    let before = *engine.state();

    assert!(adapter.on_command_write(0, &[5]).is_err());
    assert!(channel.is_empty());

    assert_eq!(engine.drain(channel.receiver()), 0);
    assert_eq!(*engine.state(), before);
}

#[test]
fn test_off_during_long_pulse_waits_for_segment() {
    let channel = TestChannel::new();
    let mut engine = PatternEngine::new(MockActuator::new());

    channel.try_send(PatternCommand::SetSos).unwrap();

    // S (7 Abschnitte) + erster langer Puls + Lücke → zweiter langer Puls
    let mut holds = Vec::new();
    for _ in 0..10 {
        holds.push(engine.tick(channel.receiver()));
    }
    assert_eq!(holds.last(), Some(&600));
    assert!(engine.actuator().level);

    // Off kommt während des 600 ms Segments an
    channel.try_send(PatternCommand::Off).unwrap();
    assert_eq!(engine.state().active_pattern, PatternKind::Sos);

    // Nächster Tick: Off greift, LED aus
    assert_eq!(engine.tick(channel.receiver()), IDLE_HOLD_MS);
    assert_eq!(engine.state().active_pattern, PatternKind::Off);
    assert!(!engine.actuator().level);
    assert_eq!(
        engine.actuator().calls.last(),
        Some(&ActuatorCall::Set(false))
    );
}

#[test]
fn test_solid_reasserted_every_tick() {
    let channel = TestChannel::new();
    let mut engine = PatternEngine::new(MockActuator::new());
    channel.try_send(PatternCommand::SetSolid).unwrap();

    for _ in 0..3 {
        assert_eq!(engine.tick(channel.receiver()), IDLE_HOLD_MS);
    }
    assert_eq!(
        engine.actuator().calls,
        vec![ActuatorCall::Set(true); 3]
    );
}
