//! Steuer-Protokoll der LED-Characteristic
//!
//! Ein Write-Payload besteht aus einem Pattern-Byte und optional
//! zwei Bytes Periode (Big Endian) für die Blink-Patterns:
//!
//! | Byte 0 | Pattern    | Zusatz-Bytes                    |
//! |--------|------------|---------------------------------|
//! | 0      | Off        | -                               |
//! | 1      | SlowBlink  | optional `period_ms` (Bytes 1-2) |
//! | 2      | FastBlink  | optional `period_ms` (Bytes 1-2) |
//! | 3      | Solid      | -                               |
//! | 4      | SOS        | -                               |

use crate::types::PatternCommand;

pub const CMD_OFF: u8 = 0;
pub const CMD_SLOW_BLINK: u8 = 1;
pub const CMD_FAST_BLINK: u8 = 2;
pub const CMD_SOLID: u8 = 3;
pub const CMD_SOS: u8 = 4;

/// Maximale Länge eines ATT-Attributwerts
///
/// Der Speicher der Characteristic muss jeden dekodierbaren Write
/// aufnehmen können, auch mit ignorierten Zusatz-Bytes.
pub const MAX_WRITE_LEN: usize = 512;

/// Fehler beim Dekodieren eines Write-Payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Write mit Offset != 0 oder leerer Payload
    InvalidOffset,
    /// Erstes Byte liegt außerhalb von 0..=4
    UnrecognizedCommandByte(u8),
}

impl TryFrom<&[u8]> for PatternCommand {
    type Error = DecodeError;

    fn try_from(payload: &[u8]) -> Result<Self, Self::Error> {
        let (&code, rest) = payload.split_first().ok_or(DecodeError::InvalidOffset)?;

        match code {
            CMD_OFF => Ok(Self::Off),
            CMD_SLOW_BLINK => Ok(Self::SetSlowBlink {
                period_ms: period_from(rest),
            }),
            CMD_FAST_BLINK => Ok(Self::SetFastBlink {
                period_ms: period_from(rest),
            }),
            CMD_SOLID => Ok(Self::SetSolid),
            CMD_SOS => Ok(Self::SetSos),
            other => Err(DecodeError::UnrecognizedCommandByte(other)),
        }
    }
}

/// Dekodiert einen Characteristic-Write inklusive ATT-Offset
pub fn decode_write(offset: u16, payload: &[u8]) -> Result<PatternCommand, DecodeError> {
    if offset != 0 {
        return Err(DecodeError::InvalidOffset);
    }
    PatternCommand::try_from(payload)
}

// Periode nur wenn beide Bytes vorhanden sind, weitere Bytes werden ignoriert
fn period_from(rest: &[u8]) -> Option<u32> {
    match rest {
        [hi, lo, ..] => Some(u32::from(u16::from_be_bytes([*hi, *lo]))),
        _ => None,
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for DecodeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            DecodeError::InvalidOffset => defmt::write!(fmt, "InvalidOffset"),
            DecodeError::UnrecognizedCommandByte(code) => {
                defmt::write!(fmt, "UnrecognizedCommandByte({})", code)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_off() {
        assert_eq!(PatternCommand::try_from(&[0u8][..]), Ok(PatternCommand::Off));
    }

    #[test]
    fn test_decode_slow_blink_with_period() {
        let cmd = PatternCommand::try_from(&[1u8, 0x07, 0xD0][..]);
        assert_eq!(
            cmd,
            Ok(PatternCommand::SetSlowBlink {
                period_ms: Some(2000)
            })
        );
    }

    #[test]
    fn test_decode_fast_blink_single_period_byte_is_ignored() {
        let cmd = PatternCommand::try_from(&[2u8, 0x01][..]);
        assert_eq!(cmd, Ok(PatternCommand::SetFastBlink { period_ms: None }));
    }

    #[test]
    fn test_decode_trailing_bytes_ignored() {
        let cmd = PatternCommand::try_from(&[2u8, 0x00, 0x64, 0xFF][..]);
        assert_eq!(
            cmd,
            Ok(PatternCommand::SetFastBlink {
                period_ms: Some(100)
            })
        );
    }

    #[test]
    fn test_decode_max_period() {
        let cmd = PatternCommand::try_from(&[1u8, 0xFF, 0xFF][..]);
        assert_eq!(
            cmd,
            Ok(PatternCommand::SetSlowBlink {
                period_ms: Some(65535)
            })
        );
    }

    #[test]
    fn test_decode_solid_and_sos() {
        assert_eq!(
            PatternCommand::try_from(&[3u8][..]),
            Ok(PatternCommand::SetSolid)
        );
        assert_eq!(PatternCommand::try_from(&[4u8][..]), Ok(PatternCommand::SetSos));
    }

    #[test]
    fn test_decode_unknown_byte() {
        assert_eq!(
            PatternCommand::try_from(&[5u8][..]),
            Err(DecodeError::UnrecognizedCommandByte(5))
        );
    }

    #[test]
    fn test_decode_empty_payload() {
        assert_eq!(
            PatternCommand::try_from(&[0u8; 0][..]),
            Err(DecodeError::InvalidOffset)
        );
    }

    #[test]
    fn test_decode_write_rejects_offset() {
        assert_eq!(decode_write(1, &[3]), Err(DecodeError::InvalidOffset));
        assert_eq!(decode_write(0, &[3]), Ok(PatternCommand::SetSolid));
    }
}
