//! Core Types für die Pattern-Steuerung
//!
//! Datenstrukturen ohne Hardware-Dependencies

/// Default-Periode für langsames Blinken (ms)
pub const DEFAULT_SLOW_BLINK_MS: u32 = 1000;

/// Default-Periode für schnelles Blinken (ms)
pub const DEFAULT_FAST_BLINK_MS: u32 = 200;

/// Haltezeit für Solid/Off pro Tick (ms)
///
/// Der Pegel wird jeden Tick neu gesetzt, damit neue Kommandos
/// spätestens nach dieser Zeit beobachtet werden.
pub const IDLE_HOLD_MS: u32 = 100;

/// Pattern Command für den Command-Channel
///
/// Wird vom Transport-Adapter (BLE) an die Pattern-Engine gesendet.
/// Jedes Kommando beschreibt einen absoluten Ziel-Zustand, kein Delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternCommand {
    /// Langsames Blinken, optional mit eigener Periode
    SetSlowBlink { period_ms: Option<u32> },
    /// Schnelles Blinken, optional mit eigener Periode
    SetFastBlink { period_ms: Option<u32> },
    /// LED dauerhaft an
    SetSolid,
    /// SOS Morse-Sequenz
    SetSos,
    /// LED aus
    Off,
}

impl PatternCommand {
    /// Löst das Kommando in Pattern + effektive Periode auf
    ///
    /// Fehlende Perioden (und `0`) fallen auf den Default des Patterns
    /// zurück. Für Nicht-Blink-Patterns ist die Periode `None`.
    pub fn target(self) -> (PatternKind, Option<u32>) {
        match self {
            Self::SetSlowBlink { period_ms } => (
                PatternKind::SlowBlink,
                Some(or_default(period_ms, DEFAULT_SLOW_BLINK_MS)),
            ),
            Self::SetFastBlink { period_ms } => (
                PatternKind::FastBlink,
                Some(or_default(period_ms, DEFAULT_FAST_BLINK_MS)),
            ),
            Self::SetSolid => (PatternKind::Solid, None),
            Self::SetSos => (PatternKind::Sos, None),
            Self::Off => (PatternKind::Off, None),
        }
    }
}

fn or_default(period_ms: Option<u32>, default: u32) -> u32 {
    match period_ms {
        Some(0) | None => default,
        Some(ms) => ms,
    }
}

/// Alle Patterns, die die Engine abspielen kann (geschlossene Menge)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    SlowBlink,
    FastBlink,
    Solid,
    Sos,
    Off,
}

impl PatternKind {
    /// Kurzer Name für Logs
    pub fn as_str(self) -> &'static str {
        match self {
            PatternKind::SlowBlink => "slow blink",
            PatternKind::FastBlink => "fast blink",
            PatternKind::Solid => "solid",
            PatternKind::Sos => "SOS",
            PatternKind::Off => "off",
        }
    }
}

/// Zustand der Pattern-Engine
///
/// Gehört exklusiv dem Engine-Task; andere Tasks ändern ihn nur
/// indirekt über den Command-Channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineState {
    pub active_pattern: PatternKind,
    /// Nur für Blink-Patterns relevant, immer > 0
    pub period_ms: u32,
    /// Position innerhalb der SOS-Sequenz (0 bei allen anderen Patterns)
    pub phase: usize,
}

impl Default for EngineState {
    fn default() -> Self {
        Self {
            active_pattern: PatternKind::SlowBlink,
            period_ms: DEFAULT_SLOW_BLINK_MS,
            phase: 0,
        }
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for PatternCommand {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            PatternCommand::SetSlowBlink { period_ms } => {
                defmt::write!(fmt, "SetSlowBlink {{ period_ms: {} }}", period_ms)
            }
            PatternCommand::SetFastBlink { period_ms } => {
                defmt::write!(fmt, "SetFastBlink {{ period_ms: {} }}", period_ms)
            }
            PatternCommand::SetSolid => defmt::write!(fmt, "SetSolid"),
            PatternCommand::SetSos => defmt::write!(fmt, "SetSos"),
            PatternCommand::Off => defmt::write!(fmt, "Off"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PatternKind {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EngineState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "EngineState {{ pattern: {}, period_ms: {}, phase: {} }}",
            self.active_pattern,
            self.period_ms,
            self.phase
        )
    }
}
