//! Gemeinsame Test-Infrastruktur für die Integration Tests

#![allow(dead_code)] // Nicht jede Test-Datei nutzt alle Helfer

use exalt_core::Actuator;

// ============================================================================
// Mock Actuator
// ============================================================================

/// Ein aufgezeichneter Aktor-Aufruf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActuatorCall {
    Set(bool),
    Toggle,
}

/// In-memory Aktor: merkt sich Pegel und alle Aufrufe
#[derive(Default)]
pub struct MockActuator {
    pub level: bool,
    pub calls: Vec<ActuatorCall>,
}

impl MockActuator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| **c == ActuatorCall::Toggle)
            .count()
    }
}

impl Actuator for MockActuator {
    fn set(&mut self, level: bool) {
        self.level = level;
        self.calls.push(ActuatorCall::Set(level));
    }

    fn toggle(&mut self) {
        self.level = !self.level;
        self.calls.push(ActuatorCall::Toggle);
    }
}
