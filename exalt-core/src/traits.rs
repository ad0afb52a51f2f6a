//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

/// Trait für den LED-Aktor
///
/// Abstrahiert den physikalischen Ausgang (GPIO oder SmartLED).
/// Beide Operationen gelten als unfehlbar: Hardware-Fehler zur Laufzeit
/// behandelt die Implementierung selbst (z.B. per Log).
///
/// # Implementierungen
/// - **Production:** SmartLedActuator (ESP32 RMT Peripheral)
/// - **Testing:** MockActuator (in-memory Mock)
pub trait Actuator: Send {
    /// Setzt den Ausgang auf den gegebenen Pegel
    fn set(&mut self, level: bool);

    /// Invertiert den aktuellen Pegel
    fn toggle(&mut self);
}
