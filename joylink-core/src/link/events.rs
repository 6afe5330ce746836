//! Events delivered by the BLE host

/// HCI status code for success
pub const HCI_SUCCESS: u8 = 0x00;

/// Kind of identity address the host advertises with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AddressKind {
    Public,
    RandomStatic,
}

/// Events that drive the link state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkEvent {
    /// Host and controller are in sync; the address is known
    HostSynced(AddressKind),
    /// Connection attempt finished with an HCI status
    Connect { status: u8 },
    /// Established connection dropped
    Disconnect { reason: u8 },
    /// Advertising set ended without a connection (timeout or cancel)
    AdvertiseComplete,
    /// The host refused to start advertising
    AdvertiseStartFailed { code: u8 },
    /// Central read the telemetry attribute
    ReadRequest,
}
