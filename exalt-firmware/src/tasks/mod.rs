// Task-Modul: Enthält alle Embassy Tasks
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren nur über den Command-Channel (BLE → Pattern Engine).

pub mod ble;
pub mod pattern;

// Re-export Tasks für einfachen Import
pub use ble::{BleController, ble_task};
pub use pattern::{pattern_engine_logic, pattern_engine_task};
