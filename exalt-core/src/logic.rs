//! Pure Pattern Logic
//!
//! Zeitliche Definition der Patterns (ohne Hardware-Dependencies, testbar!)

/// Ein zeitlich begrenzter Abschnitt einer Sequenz
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Pegel während des Abschnitts
    pub level: bool,
    /// Dauer des Abschnitts in ms
    pub hold_ms: u32,
}

impl Segment {
    const fn on(hold_ms: u32) -> Self {
        Self {
            level: true,
            hold_ms,
        }
    }

    const fn off(hold_ms: u32) -> Self {
        Self {
            level: false,
            hold_ms,
        }
    }
}

const SHORT_ON_MS: u32 = 200;
const LONG_ON_MS: u32 = 600;
const GAP_MS: u32 = 200;
const LETTER_PAUSE_MS: u32 = 300;
const WORD_PAUSE_MS: u32 = 1000;

/// SOS: ··· — — — ··· gefolgt von einer langen Pause
///
/// Neun Pulse, jeweils an/aus, mit Buchstaben-Pausen dazwischen.
pub const SOS_SEQUENCE: [Segment; 21] = [
    // S
    Segment::on(SHORT_ON_MS),
    Segment::off(GAP_MS),
    Segment::on(SHORT_ON_MS),
    Segment::off(GAP_MS),
    Segment::on(SHORT_ON_MS),
    Segment::off(GAP_MS),
    Segment::off(LETTER_PAUSE_MS),
    // O
    Segment::on(LONG_ON_MS),
    Segment::off(GAP_MS),
    Segment::on(LONG_ON_MS),
    Segment::off(GAP_MS),
    Segment::on(LONG_ON_MS),
    Segment::off(GAP_MS),
    Segment::off(LETTER_PAUSE_MS),
    // S
    Segment::on(SHORT_ON_MS),
    Segment::off(GAP_MS),
    Segment::on(SHORT_ON_MS),
    Segment::off(GAP_MS),
    Segment::on(SHORT_ON_MS),
    Segment::off(GAP_MS),
    Segment::off(WORD_PAUSE_MS),
];

/// Liefert den SOS-Abschnitt für `phase` und die nachfolgende Phase
///
/// Nach dem letzten Abschnitt beginnt die Sequenz wieder bei 0.
pub fn sos_segment(phase: usize) -> (Segment, usize) {
    let index = phase % SOS_SEQUENCE.len();
    (SOS_SEQUENCE[index], (index + 1) % SOS_SEQUENCE.len())
}
