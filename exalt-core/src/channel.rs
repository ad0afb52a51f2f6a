//! Command Channel (Trigger-Kontexte → Pattern-Engine)
//!
//! Begrenzte FIFO-Queue auf Basis von `embassy_sync::channel::Channel`.
//! Senden blockiert nie: ist die Queue voll, wird das Kommando verworfen.

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::channel::{Channel, TrySendError};

use crate::types::PatternCommand;

/// Default-Kapazität der Command-Queue
pub const COMMAND_QUEUE_CAPACITY: usize = 10;

/// Queue ist voll, das Kommando wurde verworfen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelFull;

/// Bounded Multi-Producer/Single-Consumer Channel für Pattern-Kommandos
///
/// - `M`: Mutex-Disziplin (`CriticalSectionRawMutex` für mehrere Kontexte)
/// - `N`: Kapazität (Default: 10)
pub struct CommandChannel<M: RawMutex, const N: usize = COMMAND_QUEUE_CAPACITY> {
    inner: Channel<M, PatternCommand, N>,
}

impl<M: RawMutex, const N: usize> CommandChannel<M, N> {
    /// Erstellt einen leeren Channel (`const`, kann in einem `static` liegen)
    pub const fn new() -> Self {
        Self {
            inner: Channel::new(),
        }
    }

    /// Non-blocking Enqueue
    ///
    /// Gibt `ChannelFull` zurück wenn die Kapazität erreicht ist.
    pub fn try_send(&self, cmd: PatternCommand) -> Result<(), ChannelFull> {
        match self.inner.try_send(cmd) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(_)) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("Command queue full, dropping {}", cmd);
                Err(ChannelFull)
            }
        }
    }

    /// Non-blocking Dequeue (nur vom Engine-Task aufrufen)
    pub fn try_receive(&self) -> Option<PatternCommand> {
        self.inner.try_receive().ok()
    }

    /// Anzahl wartender Kommandos
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// `true` wenn kein Kommando wartet
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// `true` wenn weitere Sends verworfen werden
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    /// Kapazität der Queue (`N`)
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Sender-Handle für Trigger-Kontexte
    pub fn sender(&self) -> CommandSender<'_, M, N> {
        CommandSender { channel: self }
    }

    /// Receiver-Handle für die Pattern-Engine
    pub fn receiver(&self) -> CommandReceiver<'_, M, N> {
        CommandReceiver { channel: self }
    }
}

impl<M: RawMutex, const N: usize> Default for CommandChannel<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Sende-Seite des Command-Channels (kopierbar, beliebig viele)
pub struct CommandSender<'a, M: RawMutex, const N: usize> {
    channel: &'a CommandChannel<M, N>,
}

impl<M: RawMutex, const N: usize> Clone for CommandSender<'_, M, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, const N: usize> Copy for CommandSender<'_, M, N> {}

impl<M: RawMutex, const N: usize> CommandSender<'_, M, N> {
    /// Siehe [`CommandChannel::try_send`]
    pub fn try_send(&self, cmd: PatternCommand) -> Result<(), ChannelFull> {
        self.channel.try_send(cmd)
    }
}

/// Empfangs-Seite des Command-Channels
pub struct CommandReceiver<'a, M: RawMutex, const N: usize> {
    channel: &'a CommandChannel<M, N>,
}

impl<M: RawMutex, const N: usize> Clone for CommandReceiver<'_, M, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, const N: usize> Copy for CommandReceiver<'_, M, N> {}

impl<M: RawMutex, const N: usize> CommandReceiver<'_, M, N> {
    /// Siehe [`CommandChannel::try_receive`]
    pub fn try_receive(&self) -> Option<PatternCommand> {
        self.channel.try_receive()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ChannelFull {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "ChannelFull")
    }
}
