// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen

use rgb::RGB8;

// ============================================================================
// LED Konfiguration
// ============================================================================

/// Helligkeits-Level für die LED (0-255)
/// Wert ist gedimmt für Augenschonung
pub const LED_BRIGHTNESS: u8 = 10;

/// Farbe für den Pegel "an" (gedimmtes Weiß)
pub const LED_ON_COLOR: RGB8 = RGB8 {
    r: LED_BRIGHTNESS,
    g: LED_BRIGHTNESS,
    b: LED_BRIGHTNESS,
};

/// RMT Taktfrequenz in MHz
/// 80 MHz ist optimal für WS2812 LED-Timing
pub const RMT_CLOCK_MHZ: u32 = 80;

// ============================================================================
// Bluetooth LE Konfiguration
// ============================================================================

/// Geräte-Name im Advertising und im GAP-Service
/// Wird zur Build-Zeit aus der Environment Variable BLE_DEVICE_NAME geladen
/// (optional, siehe .env.example)
pub const BLE_DEVICE_NAME: &str = match option_env!("BLE_DEVICE_NAME") {
    Some(name) => name,
    None => "Exalt",
};

/// Statische Random-Adresse (die zwei höchsten Bits müssen gesetzt sein)
pub const BLE_ADDRESS: [u8; 6] = [0xf1, 0xde, 0xbc, 0x9a, 0x78, 0xc6];

/// LED-Service UUID: 12345678-1234-5678-1234-56789abcdef1
/// Little-Endian für das Advertising (AD Type 0x07)
pub const LED_SERVICE_UUID_LE: [u8; 16] = [
    0xf1, 0xde, 0xbc, 0x9a, 0x78, 0x56, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12, 0x78, 0x56, 0x34, 0x12,
];

/// Maximale Anzahl gleichzeitiger Verbindungen
pub const CONNECTIONS_MAX: usize = 1;

/// Maximale Anzahl L2CAP Kanäle (Signal + ATT)
pub const L2CAP_CHANNELS_MAX: usize = 2;

/// Anzahl HCI-Slots für den ExternalController
pub const HCI_SLOTS: usize = 20;

/// Wartezeit nach Advertising-Fehler vor erneutem Versuch
pub const BLE_RETRY_DELAY_SECS: u64 = 5;

/// Heap-Größe für den BLE-Controller (Bytes)
pub const BLE_HEAP_SIZE: usize = 65536; // 64 KB
