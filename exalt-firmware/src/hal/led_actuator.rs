// SmartLED Aktor
//
// Bildet den binären Pegel der Pattern-Engine auf die RGB LED
// (WS2812/Neopixel) des DevKits ab: an = LED_ON_COLOR, aus = schwarz.

use defmt::error;
use esp_hal::Blocking;
use esp_hal::rmt::Rmt;
use esp_hal::time::Rate;
use esp_hal_smartled::SmartLedsAdapter;
use exalt_core::Actuator;
use rgb::RGB8;
use smart_leds_trait::SmartLedsWrite;

/// Buffer-Größe für 1 LED (3 Farben * 8 Bits + 1 Reset)
pub const LED_BUFFER_SIZE: usize = 25;

/// RMT Buffer für eine LED (erstellt mit smart_led_buffer!(1) Macro)
pub type LedBuffer = [esp_hal::rmt::PulseCode; LED_BUFFER_SIZE];

/// Fehler beim Initialisieren des Aktors (Startup bricht ab)
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ActuatorInitError {
    /// RMT Peripheral konnte nicht konfiguriert werden
    RmtNotReady,
}

// Farbe für einen Pegel
fn level_color(level: bool, on_color: RGB8) -> RGB8 {
    if level { on_color } else { RGB8::default() }
}

/// Real Hardware LED Aktor
///
/// Nutzt ESP32 RMT Peripheral um die WS2812 LED anzusteuern.
///
/// Hinweis: Der Buffer muss 'static sein, daher wird er in main() per
/// StaticCell erstellt und als Parameter übergeben statt im Constructor allokiert.
pub struct SmartLedActuator<'a> {
    led: SmartLedsAdapter<'a, LED_BUFFER_SIZE>,
    on_color: RGB8,
    level: bool,
}

impl<'a> SmartLedActuator<'a> {
    /// Erstellt einen neuen SmartLedActuator
    ///
    /// Die LED startet eingeschaltet (aktiver Ausgang).
    ///
    /// # Parameter
    /// - `gpio8`: GPIO8 Peripheral für LED-Datenleitung
    /// - `rmt_peripheral`: RMT Peripheral
    /// - `rmt_clock_mhz`: RMT Clock Frequenz in MHz (z.B. 80)
    /// - `buffer`: Buffer für LED-Daten (erstellt mit smart_led_buffer!(1) Macro)
    /// - `on_color`: Farbe für den Pegel "an"
    pub fn new(
        gpio8: esp_hal::peripherals::GPIO8<'a>,
        rmt_peripheral: esp_hal::peripherals::RMT<'a>,
        rmt_clock_mhz: u32,
        buffer: &'a mut LedBuffer,
        on_color: RGB8,
    ) -> Result<Self, ActuatorInitError> {
        // RMT initialisieren
        let rmt: Rmt<'a, Blocking> = Rmt::new(rmt_peripheral, Rate::from_mhz(rmt_clock_mhz))
            .map_err(|_| ActuatorInitError::RmtNotReady)?;

        // SmartLED Adapter erstellen
        let led = SmartLedsAdapter::new(rmt.channel0, gpio8, buffer);

        let mut actuator = Self {
            led,
            on_color,
            level: true,
        };
        actuator.write_level();
        Ok(actuator)
    }

    // Schreibfehler werden nur geloggt: der Aktor gilt als unfehlbar
    fn write_level(&mut self) {
        let color = level_color(self.level, self.on_color);
        if self.led.write([color].into_iter()).is_err() {
            error!("Failed to write to LED");
        }
    }
}

impl Actuator for SmartLedActuator<'_> {
    fn set(&mut self, level: bool) {
        self.level = level;
        self.write_level();
    }

    fn toggle(&mut self) {
        self.set(!self.level);
    }
}
