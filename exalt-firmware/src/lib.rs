// Library-Root: Wiederverwendbare Logik und Module
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von exalt-core
pub use exalt_core::{
    Actuator, AdapterError, ChannelFull, DecodeError, EngineState, PatternCommand, PatternEngine,
    PatternKind, TransportAdapter,
};

// Embassy Mutex-Typ
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;

use exalt_core::{COMMAND_QUEUE_CAPACITY, CommandChannel, CommandReceiver};

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  CommandReceiver<'static, CriticalSectionRawMutex, 10>
// Nutze:  PatternCommandReceiver
//
// CriticalSectionRawMutex statt NoopRawMutex: Sender dürfen aus beliebigen
// Kontexten (auch Interrupts/anderen Executors) senden.

/// Channel für Pattern-Kommandos (BLE → Pattern Engine)
/// - 10: Nachrichten-Kapazität, volle Queue verwirft neue Kommandos
pub type PatternCommandChannel = CommandChannel<CriticalSectionRawMutex, COMMAND_QUEUE_CAPACITY>;

/// Receiver für Pattern-Kommandos (Pattern Engine Task empfängt)
/// Empfängt Commands vom Transport-Adapter
pub type PatternCommandReceiver =
    CommandReceiver<'static, CriticalSectionRawMutex, COMMAND_QUEUE_CAPACITY>;

/// Transport-Adapter des BLE-Tasks
pub type PatternTransportAdapter =
    TransportAdapter<'static, CriticalSectionRawMutex, COMMAND_QUEUE_CAPACITY>;
