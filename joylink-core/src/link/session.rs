//! Link session bookkeeping
//!
//! Wraps the pure state machine with the diagnostics the link task logs.

use super::events::{AddressKind, LinkEvent};
use super::machine::{Commands, LinkCommand, LinkState};

/// Why the link last fell back to advertising
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkFailure {
    /// Connection attempt rejected with this HCI status
    ConnectFailed(u8),
    /// Connection dropped with this HCI reason
    Disconnected(u8),
    /// Advertising set ended without a connection
    AdvertisingEnded,
    /// Host refused to start advertising
    AdvertiseStartFailed(u8),
}

/// Connection state plus counters, process lifetime
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkSession {
    state: LinkState,
    address: Option<AddressKind>,
    last_disconnect_reason: Option<u8>,
    last_failure: Option<LinkFailure>,
    /// Reads served on the current connection
    reads: u32,
    advertise_starts: u32,
    connections: u32,
}

impl LinkSession {
    pub const fn new() -> Self {
        Self {
            state: LinkState::Idle,
            address: None,
            last_disconnect_reason: None,
            last_failure: None,
            reads: 0,
            advertise_starts: 0,
            connections: 0,
        }
    }

    /// Feed one host event, returning the commands to execute
    pub fn handle(&mut self, event: LinkEvent) -> Commands {
        let (next, commands) = self.state.transition(event);

        match event {
            LinkEvent::HostSynced(kind) => self.address = Some(kind),
            LinkEvent::Connect { .. } if next.is_connected() && !self.state.is_connected() => {
                self.connections = self.connections.wrapping_add(1);
                self.reads = 0;
            }
            LinkEvent::Connect { status }
                if self.state == LinkState::Advertising && !next.is_connected() =>
            {
                self.last_failure = Some(LinkFailure::ConnectFailed(status));
            }
            LinkEvent::Disconnect { reason } if self.state.is_connected() => {
                self.last_disconnect_reason = Some(reason);
                self.last_failure = Some(LinkFailure::Disconnected(reason));
                self.reads = 0;
            }
            LinkEvent::AdvertiseComplete if self.state == LinkState::Advertising => {
                self.last_failure = Some(LinkFailure::AdvertisingEnded);
                self.reads = 0;
            }
            LinkEvent::AdvertiseStartFailed { code } => {
                self.last_failure = Some(LinkFailure::AdvertiseStartFailed(code));
            }
            LinkEvent::ReadRequest => self.reads = self.reads.wrapping_add(1),
            _ => {}
        }

        if commands.contains(&LinkCommand::StartAdvertising) {
            self.advertise_starts = self.advertise_starts.wrapping_add(1);
        }
        self.state = next;
        commands
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn address(&self) -> Option<AddressKind> {
        self.address
    }

    pub fn last_disconnect_reason(&self) -> Option<u8> {
        self.last_disconnect_reason
    }

    pub fn last_failure(&self) -> Option<LinkFailure> {
        self.last_failure
    }

    /// Reads served since the current connection was established
    pub fn reads(&self) -> u32 {
        self.reads
    }

    /// Advertising starts requested so far
    pub fn advertise_starts(&self) -> u32 {
        self.advertise_starts
    }

    /// Connections accepted so far
    pub fn connections(&self) -> u32 {
        self.connections
    }
}
