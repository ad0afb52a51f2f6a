// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul implementiert den Actuator-Trait aus exalt-core
// für die Hardware des ESP32-C6 DevKits.

pub mod led_actuator;

pub use led_actuator::{ActuatorInitError, LedBuffer, SmartLedActuator};
