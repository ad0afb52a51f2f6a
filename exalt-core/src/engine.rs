//! Pattern Engine
//!
//! Einzige Instanz, die `EngineState` verändert. Ein Tick besteht aus:
//! 1. Command-Channel non-blocking leeren (Kommandos in FIFO-Reihenfolge anwenden)
//! 2. Genau einen Schritt des aktiven Patterns ausführen
//!
//! Der Schritt liefert die Haltezeit zurück, die der Aufrufer vor dem
//! nächsten Tick abwarten muss. Ein Pattern-Wechsel greift damit
//! spätestens nach einer Haltezeit.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channel::CommandReceiver;
use crate::logic::sos_segment;
use crate::traits::Actuator;
use crate::types::{EngineState, IDLE_HOLD_MS, PatternCommand, PatternKind};

/// Pattern Engine - besitzt den Aktor und den Pattern-Zustand
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `A: Actuator` ermöglicht:
/// - Real Hardware (SmartLedActuator) im Production-Code
/// - Mock Implementation (MockActuator) in Tests
pub struct PatternEngine<A: Actuator> {
    actuator: A,
    state: EngineState,
}

impl<A: Actuator> PatternEngine<A> {
    /// Erstellt die Engine im Startzustand (SlowBlink / 1000 ms)
    pub fn new(actuator: A) -> Self {
        Self {
            actuator,
            state: EngineState::default(),
        }
    }

    /// Aktueller Pattern-Zustand (nur lesend)
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Zugriff auf den Aktor, z.B. für Mock-Auswertung in Tests
    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Wendet ein Kommando auf den Zustand an
    ///
    /// Ein Kommando mit identischem Ziel (gleiches Pattern, gleiche Periode)
    /// ist ein No-Op, die laufende Phase bleibt erhalten. Jeder echte
    /// Wechsel setzt `phase` auf 0 zurück.
    ///
    /// Gibt `true` zurück wenn sich der Zustand geändert hat.
    pub fn apply(&mut self, cmd: PatternCommand) -> bool {
        let (pattern, period_ms) = cmd.target();

        let unchanged = pattern == self.state.active_pattern
            && period_ms.is_none_or(|ms| ms == self.state.period_ms);
        if unchanged {
            #[cfg(feature = "defmt")]
            defmt::debug!("Pattern unchanged: {}", cmd);
            return false;
        }

        self.state = EngineState {
            active_pattern: pattern,
            period_ms: period_ms.unwrap_or(self.state.period_ms),
            phase: 0,
        };

        #[cfg(feature = "defmt")]
        match pattern {
            PatternKind::SlowBlink | PatternKind::FastBlink => defmt::info!(
                "Changing to {} pattern ({} ms)",
                pattern,
                self.state.period_ms
            ),
            PatternKind::Off => defmt::info!("Turning LED off"),
            _ => defmt::info!("Changing to {} pattern", pattern),
        }

        true
    }

    /// Leert den Channel non-blocking und wendet alle Kommandos an
    ///
    /// Gibt die Anzahl empfangener Kommandos zurück.
    pub fn drain<M: RawMutex, const N: usize>(
        &mut self,
        receiver: CommandReceiver<'_, M, N>,
    ) -> usize {
        let mut received = 0;
        while let Some(cmd) = receiver.try_receive() {
            self.apply(cmd);
            received += 1;
        }
        received
    }

    /// Führt genau einen Schritt des aktiven Patterns aus
    ///
    /// Gibt die Haltezeit in ms bis zum nächsten Tick zurück.
    pub fn step(&mut self) -> u32 {
        match self.state.active_pattern {
            PatternKind::SlowBlink | PatternKind::FastBlink => {
                self.actuator.toggle();
                self.state.period_ms
            }
            PatternKind::Solid => {
                self.actuator.set(true);
                IDLE_HOLD_MS
            }
            PatternKind::Off => {
                self.actuator.set(false);
                IDLE_HOLD_MS
            }
            PatternKind::Sos => {
                let (segment, next) = sos_segment(self.state.phase);
                self.actuator.set(segment.level);
                self.state.phase = next;
                segment.hold_ms
            }
        }
    }

    /// Ein kompletter Tick: Kommandos anwenden, dann einen Schritt ausführen
    pub fn tick<M: RawMutex, const N: usize>(&mut self, receiver: CommandReceiver<'_, M, N>) -> u32 {
        self.drain(receiver);
        self.step()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct LevelActuator {
        level: bool,
    }

    impl Actuator for LevelActuator {
        fn set(&mut self, level: bool) {
            self.level = level;
        }

        fn toggle(&mut self) {
            self.level = !self.level;
        }
    }

    #[test]
    fn test_blink_toggles_and_holds_period() {
        let mut engine = PatternEngine::new(LevelActuator::default());
        assert_eq!(engine.step(), 1000);
        assert!(engine.actuator().level);
        assert_eq!(engine.step(), 1000);
        assert!(!engine.actuator().level);
    }

    #[test]
    fn test_solid_and_off_hold_idle_interval() {
        let mut engine = PatternEngine::new(LevelActuator::default());
        engine.apply(PatternCommand::SetSolid);
        assert_eq!(engine.step(), IDLE_HOLD_MS);
        assert!(engine.actuator().level);

        engine.apply(PatternCommand::Off);
        assert_eq!(engine.step(), IDLE_HOLD_MS);
        assert!(!engine.actuator().level);
    }

    #[test]
    fn test_identical_command_is_noop() {
        let mut engine = PatternEngine::new(LevelActuator::default());
        assert!(!engine.apply(PatternCommand::SetSlowBlink { period_ms: None }));
        assert!(!engine.apply(PatternCommand::SetSlowBlink {
            period_ms: Some(1000)
        }));
        assert!(engine.apply(PatternCommand::SetSlowBlink {
            period_ms: Some(500)
        }));
        assert_eq!(engine.state().period_ms, 500);
    }

    #[test]
    fn test_repeated_sos_keeps_phase() {
        let mut engine = PatternEngine::new(LevelActuator::default());
        engine.apply(PatternCommand::SetSos);
        engine.step();
        engine.step();
        assert_eq!(engine.state().phase, 2);

        assert!(!engine.apply(PatternCommand::SetSos));
        assert_eq!(engine.state().phase, 2);
    }

    #[test]
    fn test_sos_wraps_after_full_sequence() {
        let mut engine = PatternEngine::new(LevelActuator::default());
        engine.apply(PatternCommand::SetSos);
        let total: u32 = (0..21).map(|_| engine.step()).sum();
        assert_eq!(total, 6600);
        assert_eq!(engine.state().phase, 0);
    }
}
