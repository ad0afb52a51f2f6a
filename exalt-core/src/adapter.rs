//! Transport Adapter
//!
//! Übersetzt Verbindungs-Events und Characteristic-Writes in
//! Pattern-Kommandos. Der Adapter sendet nur (non-blocking) in den
//! Command-Channel und verändert nie direkt den Engine-Zustand.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::channel::{ChannelFull, CommandSender};
use crate::protocol::{DecodeError, decode_write};
use crate::types::{DEFAULT_FAST_BLINK_MS, DEFAULT_SLOW_BLINK_MS, PatternCommand};

/// Fehler an der Adapter-Grenze
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterError {
    /// Payload ungültig, nichts wurde eingereiht
    Decode(DecodeError),
    /// Kommando gültig, aber die Queue war voll
    ChannelFull,
}

impl From<DecodeError> for AdapterError {
    fn from(err: DecodeError) -> Self {
        AdapterError::Decode(err)
    }
}

impl From<ChannelFull> for AdapterError {
    fn from(_: ChannelFull) -> Self {
        AdapterError::ChannelFull
    }
}

/// Adapter zwischen Transport (BLE) und Command-Channel
pub struct TransportAdapter<'a, M: RawMutex, const N: usize> {
    sender: CommandSender<'a, M, N>,
}

impl<'a, M: RawMutex, const N: usize> TransportAdapter<'a, M, N> {
    pub fn new(sender: CommandSender<'a, M, N>) -> Self {
        Self { sender }
    }

    /// Central verbunden → schnelles Blinken
    pub fn on_connect(&self) -> Result<(), ChannelFull> {
        self.sender.try_send(PatternCommand::SetFastBlink {
            period_ms: Some(DEFAULT_FAST_BLINK_MS),
        })
    }

    /// Verbindung getrennt → langsames Blinken
    pub fn on_disconnect(&self) -> Result<(), ChannelFull> {
        self.sender.try_send(PatternCommand::SetSlowBlink {
            period_ms: Some(DEFAULT_SLOW_BLINK_MS),
        })
    }

    /// Dekodiert einen Write auf die Steuer-Characteristic und reiht ihn ein
    ///
    /// Bei `AdapterError::Decode` bleibt der Channel unberührt.
    pub fn on_command_write(
        &self,
        offset: u16,
        payload: &[u8],
    ) -> Result<PatternCommand, AdapterError> {
        let cmd = decode_write(offset, payload).inspect_err(|_err| {
            #[cfg(feature = "defmt")]
            defmt::warn!("Rejected LED control write: {}", _err);
        })?;

        #[cfg(feature = "defmt")]
        defmt::info!("Received LED control command: {}", cmd);

        self.sender.try_send(cmd)?;
        Ok(cmd)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AdapterError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AdapterError::Decode(err) => defmt::write!(fmt, "Decode({})", err),
            AdapterError::ChannelFull => defmt::write!(fmt, "ChannelFull"),
        }
    }
}
