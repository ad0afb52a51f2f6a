//! Exalt Core - Platform-agnostic Pattern Engine
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, den Command-Channel, die Pattern-Engine
//! und das Decoding der Steuer-Kommandos.

#![no_std]

pub mod adapter;
pub mod channel;
pub mod engine;
pub mod logic;
pub mod protocol;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use adapter::{AdapterError, TransportAdapter};
pub use channel::{
    COMMAND_QUEUE_CAPACITY, ChannelFull, CommandChannel, CommandReceiver, CommandSender,
};
pub use engine::PatternEngine;
pub use logic::{SOS_SEQUENCE, Segment, sos_segment};
pub use protocol::{DecodeError, MAX_WRITE_LEN, decode_write};
pub use traits::Actuator;
pub use types::{
    DEFAULT_FAST_BLINK_MS, DEFAULT_SLOW_BLINK_MS, EngineState, IDLE_HOLD_MS, PatternCommand,
    PatternKind,
};
