//! BLE link task
//!
//! Runs the trouble-host stack as a single-connection peripheral exposing the
//! telemetry characteristic. Every host outcome is fed to [`LinkSession`] as a
//! [`LinkEvent`]; advertising restarts whenever the session asks for it, with
//! no retry limit.

use defmt::*;
use embassy_futures::join::join;
use embassy_futures::yield_now;
use embassy_time::{Duration, Timer};
use trouble_host::prelude::*;

use joylink_core::config::DeviceConfig;
use joylink_core::link::{
    supervise, AddressKind, HostRunner, LinkCommand, LinkEvent, LinkSession, HCI_SUCCESS,
};
use joylink_protocol::{advertising_data, DEVICE_INFO_SERVICE_UUID16, TELEMETRY_CHAR_UUID16};

use crate::board::BleController;
use crate::channels::TELEMETRY;

/// One central at a time
const CONNECTIONS_MAX: usize = 1;

/// Signalling plus ATT
const L2CAP_CHANNELS_MAX: usize = 2;

/// Advertised TX power level
const TX_POWER_DBM: i8 = 0;

/// Static random identity address, little endian (two top bits set)
const STATIC_ADDRESS: [u8; 6] = [0x4a, 0x59, 0x4c, 0x4e, 0x4b, 0xc3];

/// HCI "Unspecified Error", reported when the host refuses to advertise
const HCI_UNSPECIFIED_ERROR: u8 = 0x1F;

/// HCI "Connection Failed to be Established"
const HCI_CONNECTION_FAILED: u8 = 0x3E;

/// Pause before restarting a failed host runner
const HOST_RESTART_DELAY: Duration = Duration::from_millis(100);

/// Device Information service; the characteristic carries `x1,y1,x2,y2,sw`
/// and is refreshed from the slot on every read
#[gatt_service(uuid = service::DEVICE_INFORMATION)]
struct TelemetryService {
    #[characteristic(uuid = characteristic::MANUFACTURER_NAME_STRING, read)]
    telemetry: joylink_protocol::TelemetryText,
}

#[gatt_server]
struct Server {
    telemetry_service: TelemetryService,
}

#[embassy_executor::task]
pub async fn link_task(controller: BleController, config: &'static DeviceConfig) {
    info!("Link task started");

    let mut resources: HostResources<DefaultPacketPool, CONNECTIONS_MAX, L2CAP_CHANNELS_MAX> =
        HostResources::new();
    let stack = trouble_host::new(controller, &mut resources)
        .set_random_address(Address::random(STATIC_ADDRESS));
    let Host {
        mut peripheral,
        runner,
        ..
    } = stack.build();

    let name = config.device.name.as_str();
    let server = unwrap!(Server::new_with_config(GapConfig::Peripheral(PeripheralConfig {
        name,
        appearance: &appearance::human_interface_device::JOYSTICK,
    })));
    info!(
        "GATT service {=u16:#06x}, characteristic {=u16:#06x}",
        DEVICE_INFO_SERVICE_UUID16, TELEMETRY_CHAR_UUID16
    );

    let adv_data = advertising_data(name, TX_POWER_DBM);
    let mut host = BleHost(runner);
    let host_loop = supervise(&mut host, |()| Timer::after(HOST_RESTART_DELAY));
    join(host_loop, serve(&mut peripheral, &server, &adv_data)).await;
}

/// trouble-host runner, logging its own failures
struct BleHost<'a>(Runner<'a, BleController, DefaultPacketPool>);

impl HostRunner for BleHost<'_> {
    type Error = ();

    async fn run(&mut self) -> Result<(), ()> {
        self.0.run().await.map_err(|e| {
            error!("BLE host stopped: {}", Debug2Format(&e));
        })
    }
}

/// Advertise, accept, serve, repeat
async fn serve(
    peripheral: &mut Peripheral<'_, BleController, DefaultPacketPool>,
    server: &Server<'_>,
    adv_data: &[u8],
) {
    let mut session = LinkSession::new();
    session.handle(LinkEvent::HostSynced(AddressKind::RandomStatic));

    loop {
        let event = advertise_and_serve(peripheral, server, adv_data, &mut session).await;
        let commands = session.handle(event);
        if !commands.contains(&LinkCommand::StartAdvertising) {
            warn!("No restart requested after {} in {}, advertising anyway", event, session.state());
        }

        match session.last_failure() {
            Some(failure) => warn!(
                "Link fell back to advertising: {} (starts={}, connections={})",
                failure,
                session.advertise_starts(),
                session.connections()
            ),
            None => debug!("Advertising restart requested"),
        }
    }
}

/// Run one advertising cycle through to its terminal event
///
/// Returns the event that ends the cycle: a failed start, an advertising set
/// that ended, a failed connection, or a disconnect.
async fn advertise_and_serve(
    peripheral: &mut Peripheral<'_, BleController, DefaultPacketPool>,
    server: &Server<'_>,
    adv_data: &[u8],
    session: &mut LinkSession,
) -> LinkEvent {
    let params = AdvertisementParameters::default();
    let advertisement = Advertisement::ConnectableScannableUndirected {
        adv_data,
        scan_data: &[],
    };

    let advertiser = match peripheral.advertise(&params, advertisement).await {
        Ok(advertiser) => advertiser,
        Err(e) => {
            error!("Advertising start failed: {}", Debug2Format(&e));
            // Let the sampler run before the session retries.
            yield_now().await;
            return LinkEvent::AdvertiseStartFailed {
                code: HCI_UNSPECIFIED_ERROR,
            };
        }
    };
    info!("Advertising");

    let conn = match advertiser.accept().await {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Advertising ended: {}", Debug2Format(&e));
            return LinkEvent::AdvertiseComplete;
        }
    };

    let conn = match conn.with_attribute_server(server) {
        Ok(conn) => conn,
        Err(e) => {
            warn!("Connection setup failed: {}", Debug2Format(&e));
            return LinkEvent::Connect {
                status: HCI_CONNECTION_FAILED,
            };
        }
    };

    session.handle(LinkEvent::Connect {
        status: HCI_SUCCESS,
    });
    info!("Central connected (#{})", session.connections());

    let reason = serve_connection(server, &conn, session).await;
    warn!("Central disconnected, reason {=u8:#04x}", reason);
    LinkEvent::Disconnect { reason }
}

/// Answer GATT requests until the central goes away, returning the HCI reason
async fn serve_connection(
    server: &Server<'_>,
    conn: &GattConnection<'_, '_, DefaultPacketPool>,
    session: &mut LinkSession,
) -> u8 {
    let telemetry = &server.telemetry_service.telemetry;

    loop {
        match conn.next().await {
            GattConnectionEvent::Disconnected { reason } => return reason.into_inner(),
            GattConnectionEvent::Gatt { event } => {
                if let GattEvent::Read(read) = &event {
                    if read.handle() == telemetry.handle {
                        let commands = session.handle(LinkEvent::ReadRequest);
                        if commands.contains(&LinkCommand::ServeTelemetry) {
                            let text = TELEMETRY.read();
                            if let Err(e) = server.set(telemetry, &text) {
                                warn!("Telemetry update failed: {}", Debug2Format(&e));
                            }
                            info!("GATT read: {=[u8]:a}", text.as_slice());
                        }
                    }
                }

                match event.accept() {
                    Ok(reply) => reply.send().await,
                    Err(e) => warn!("GATT reply failed: {}", Debug2Format(&e)),
                }
            }
            _ => {}
        }
    }
}
