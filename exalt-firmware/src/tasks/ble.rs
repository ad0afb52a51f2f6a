// BLE Task - Advertising, GATT LED-Service und Verbindungs-Events
use bt_hci::controller::ExternalController;
use defmt::{Debug2Format, error, info, warn};
use embassy_futures::join::join;
use embassy_time::{Duration, Timer};
use esp_radio::ble::controller::BleConnector;
use exalt_core::{AdapterError, DecodeError, MAX_WRITE_LEN};
use trouble_host::prelude::*;

use crate::PatternTransportAdapter;
use crate::config::{
    BLE_ADDRESS, BLE_DEVICE_NAME, BLE_RETRY_DELAY_SECS, CONNECTIONS_MAX, HCI_SLOTS,
    L2CAP_CHANNELS_MAX, LED_SERVICE_UUID_LE,
};

/// HCI Controller über den BLE-Connector von esp-radio
pub type BleController = ExternalController<BleConnector<'static>, HCI_SLOTS>;

/// GATT Server mit dem LED-Service
#[gatt_server]
struct LedServer {
    led_service: LedService,
}

/// LED-Service: eine schreibbare Steuer-Characteristic
#[gatt_service(uuid = "12345678-1234-5678-1234-56789abcdef1")]
struct LedService {
    /// Pattern-Byte + optional 2 Bytes Periode (Big Endian)
    ///
    /// Speicher für den vollen ATT-Wert: Zusatz-Bytes werden beim
    /// Dekodieren ignoriert und dürfen den Write nicht scheitern lassen.
    #[characteristic(uuid = "87654321-1234-5678-1234-56789abcdef1", write, write_without_response)]
    control: heapless::Vec<u8, MAX_WRITE_LEN>,
}

/// BLE Task - läuft parallel zum Pattern Engine Task
///
/// Dieser Task übernimmt den kompletten BLE-Lifecycle:
/// - Startet den Host-Stack (trouble-host) auf dem esp-radio Controller
/// - Advertised den LED-Service (connectable)
/// - Meldet Connect/Disconnect an den Transport-Adapter
/// - Dekodiert Writes auf die Steuer-Characteristic
///
/// # Parameter
/// - `controller`: HCI Controller (esp-radio BleConnector)
/// - `adapter`: Transport-Adapter zum Command-Channel
#[embassy_executor::task]
pub async fn ble_task(controller: BleController, adapter: PatternTransportAdapter) {
    info!("BLE: Starting host stack");

    let address = Address::random(BLE_ADDRESS);
    let mut resources: HostResources<DefaultPacketPool, CONNECTIONS_MAX, L2CAP_CHANNELS_MAX> =
        HostResources::new();
    let stack = trouble_host::new(controller, &mut resources).set_random_address(address);
    let Host {
        mut peripheral,
        mut runner,
        ..
    } = stack.build();

    let server = match LedServer::new_with_config(GapConfig::Peripheral(PeripheralConfig {
        name: BLE_DEVICE_NAME,
        appearance: &appearance::light_source::GENERIC_LIGHT_SOURCE,
    })) {
        Ok(server) => server,
        Err(e) => {
            error!("BLE: Failed to create GATT server: {}", Debug2Format(&e));
            return;
        }
    };

    let host = async {
        loop {
            if let Err(e) = runner.run().await {
                error!("BLE: Host runner error: {}", Debug2Format(&e));
                // Pause vor dem Neustart, sonst verhungert der Pattern Engine Task
                Timer::after(Duration::from_secs(BLE_RETRY_DELAY_SECS)).await;
            }
        }
    };

    let app = async {
        loop {
            match advertise(&mut peripheral, &server).await {
                Ok(conn) => {
                    info!("BLE: Connected");
                    if adapter.on_connect().is_err() {
                        warn!("BLE: Pattern queue full, connect event dropped");
                    }

                    serve_connection(&server, &conn, &adapter).await;

                    if adapter.on_disconnect().is_err() {
                        warn!("BLE: Pattern queue full, disconnect event dropped");
                    }
                }
                Err(e) => {
                    error!("BLE: Advertising failed: {}", Debug2Format(&e));
                    Timer::after(Duration::from_secs(BLE_RETRY_DELAY_SECS)).await;
                }
            }
        }
    };

    join(host, app).await;
}

/// Startet connectable Advertising und wartet auf einen Central
async fn advertise<'values, 'server, C: Controller>(
    peripheral: &mut Peripheral<'values, C, DefaultPacketPool>,
    server: &'server LedServer<'values>,
) -> Result<GattConnection<'values, 'server, DefaultPacketPool>, BleHostError<C::Error>> {
    let mut adv_data = [0u8; 31];
    let len = AdStructure::encode_slice(
        &[
            AdStructure::Flags(LE_GENERAL_DISCOVERABLE | BR_EDR_NOT_SUPPORTED),
            AdStructure::ServiceUuids128(&[LED_SERVICE_UUID_LE]),
        ],
        &mut adv_data[..],
    )?;

    // Name im Scan Response (31 Bytes reichen nicht für UUID + Name)
    let mut scan_data = [0u8; 31];
    let scan_len = AdStructure::encode_slice(
        &[AdStructure::CompleteLocalName(BLE_DEVICE_NAME.as_bytes())],
        &mut scan_data[..],
    )?;

    let advertiser = peripheral
        .advertise(
            &Default::default(),
            Advertisement::ConnectableScannableUndirected {
                adv_data: &adv_data[..len],
                scan_data: &scan_data[..scan_len],
            },
        )
        .await?;
    info!("BLE: Advertising successfully started!");

    let conn = advertiser.accept().await?.with_attribute_server(server)?;
    Ok(conn)
}

/// Verarbeitet GATT-Events bis zum Disconnect
async fn serve_connection<P: PacketPool>(
    server: &LedServer<'_>,
    conn: &GattConnection<'_, '_, P>,
    adapter: &PatternTransportAdapter,
) {
    let control = &server.led_service.control;

    loop {
        match conn.next().await {
            GattConnectionEvent::Disconnected { reason } => {
                info!("BLE: Disconnected (reason {})", Debug2Format(&reason));
                break;
            }
            GattConnectionEvent::Gatt { event } => {
                let rejection = match &event {
                    // ATT Write Request/Command tragen keinen Offset
                    GattEvent::Write(write) if write.handle() == control.handle => adapter
                        .on_command_write(0, write.data())
                        .err()
                        .and_then(att_rejection),
                    _ => None,
                };

                let reply = match rejection {
                    Some(code) => event.reject(code),
                    None => event.accept(),
                };
                match reply {
                    Ok(reply) => reply.send().await,
                    Err(e) => warn!("BLE: Failed to send GATT response: {}", Debug2Format(&e)),
                }
            }
            _ => {}
        }
    }
}

/// Bildet Adapter-Fehler auf ATT-Fehlercodes ab
///
/// Eine volle Queue wird nicht abgelehnt: der Write gilt als angenommen,
/// das Kommando ist verworfen.
fn att_rejection(err: AdapterError) -> Option<AttErrorCode> {
    match err {
        AdapterError::Decode(DecodeError::InvalidOffset) => Some(AttErrorCode::INVALID_OFFSET),
        AdapterError::Decode(DecodeError::UnrecognizedCommandByte(code)) => {
            warn!("BLE: Unknown LED pattern: {}", code);
            Some(AttErrorCode::VALUE_NOT_ALLOWED)
        }
        AdapterError::ChannelFull => {
            warn!("BLE: Pattern queue full, command dropped");
            None
        }
    }
}
