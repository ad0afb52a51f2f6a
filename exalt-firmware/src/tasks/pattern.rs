// Pattern Engine Task - Spielt LED-Patterns über RMT Peripheral ab
use defmt::info;
use embassy_time::{Duration, Timer};
use exalt_core::{Actuator, PatternEngine};

use crate::PatternCommandReceiver;
use crate::hal::SmartLedActuator;

/// Pattern Engine Loop - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Jeder Durchlauf ist ein Tick:
/// - Empfängt alle wartenden Kommandos vom BLE-Task (non-blocking)
/// - Führt genau einen Schritt des aktiven Patterns aus
/// - Wartet die vom Pattern bestimmte Haltezeit ab
///
/// Ein neues Kommando greift damit spätestens nach einer Haltezeit.
///
/// # Parameter
/// - `actuator`: LED Aktor (Hardware oder Mock)
/// - `command_receiver`: Channel Receiver für Pattern-Kommandos
pub async fn pattern_engine_logic<A: Actuator>(
    actuator: A,
    command_receiver: PatternCommandReceiver,
) -> ! {
    let mut engine = PatternEngine::new(actuator);
    info!("Pattern engine started: {}", engine.state());

    loop {
        let hold_ms = engine.tick(command_receiver);

        // Async Delay: gibt CPU an andere Tasks zurück
        Timer::after(Duration::from_millis(u64::from(hold_ms))).await;
    }
}

/// Pattern Engine Task - Embassy Task für parallele Ausführung
///
/// Die LED wird in main() initialisiert, bevor irgendein Task startet.
/// Ist sie nicht bereit, bricht der Startup dort ab.
///
/// # Parameter
/// - `led`: Initialisierter SmartLED Aktor
/// - `command_receiver`: Channel Receiver für Pattern-Kommandos
#[embassy_executor::task]
pub async fn pattern_engine_task(
    led: SmartLedActuator<'static>,
    command_receiver: PatternCommandReceiver,
) {
    pattern_engine_logic(led, command_receiver).await
}
