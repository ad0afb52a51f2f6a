// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Heap Allocator (BLE-Controller benötigt dynamischen Speicher)
extern crate alloc;

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module und Konfiguration
use bt_hci::controller::ExternalController;
use defmt::{error, info};
use esp_hal_smartled::smart_led_buffer;
use esp_radio::ble::controller::BleConnector;
use exalt::config::{BLE_HEAP_SIZE, LED_ON_COLOR, RMT_CLOCK_MHZ};
use exalt::hal::{LedBuffer, SmartLedActuator};
use exalt::tasks::{ble_task, pattern_engine_task};
use exalt::{PatternCommandChannel, TransportAdapter};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, BLE, startet Embassy Runtime und spawnt Tasks.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    info!("Hello Exalted!");

    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Heap Allocator initialisieren (BLE-Controller braucht dynamischen Speicher!)
    esp_alloc::heap_allocator!(
        #[esp_hal::ram(reclaimed)]
        size: BLE_HEAP_SIZE
    );

    // LED zuerst: ohne bereiten Aktor startet weder Pattern Engine noch BLE
    // Buffer für SmartLED Daten (1 LED), muss 'static sein
    static RMT_BUFFER: static_cell::StaticCell<LedBuffer> = static_cell::StaticCell::new();
    let rmt_buffer = RMT_BUFFER.init(smart_led_buffer!(1));
    let led = match SmartLedActuator::new(
        peripherals.GPIO8,
        peripherals.RMT,
        RMT_CLOCK_MHZ,
        rmt_buffer,
        LED_ON_COLOR,
    ) {
        Ok(led) => led,
        Err(e) => {
            error!("LED device not ready: {}", e);
            panic!("Startup aborted: LED device not ready");
        }
    };
    info!("Blink service initialized");

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // Radio Hardware initialisieren
    static RADIO_INIT: static_cell::StaticCell<esp_radio::Controller> =
        static_cell::StaticCell::new();
    let radio_init =
        RADIO_INIT.init(esp_radio::init().expect("Failed to initialize Wi-Fi/BLE controller"));

    // BLE HCI Connector → trouble-host Controller
    let connector = BleConnector::new(radio_init, peripherals.BT, Default::default())
        .expect("Failed to initialize BLE connector");
    let controller = ExternalController::new(connector);

    // Pattern Command-Channel erstellen (für BLE → Pattern Engine Kommunikation)
    // Bounded Queue: volle Queue verwirft neue Kommandos statt zu blockieren
    static COMMAND_CHANNEL: static_cell::StaticCell<PatternCommandChannel> =
        static_cell::StaticCell::new();
    let command_channel = &*COMMAND_CHANNEL.init(PatternCommandChannel::new());
    let command_sender = command_channel.sender();
    let command_receiver = command_channel.receiver();

    // Spawn Pattern Engine Task (einziger Besitzer von LED und Pattern-Zustand)
    spawner
        .spawn(pattern_engine_task(led, command_receiver))
        .unwrap();

    // Spawn BLE Task (sendet nur in den Command-Channel)
    spawner
        .spawn(ble_task(controller, TransportAdapter::new(command_sender)))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
