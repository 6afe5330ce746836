//! Link state machine definition

use heapless::Vec;

use super::events::{LinkEvent, HCI_SUCCESS};

/// Link states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkState {
    /// Host not yet synchronised
    #[default]
    Idle,
    /// Connectable undirected advertising is running
    Advertising,
    /// One central is connected
    Connected,
}

/// Side effects requested by a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkCommand {
    /// Start connectable, general-discoverable advertising with no timeout
    StartAdvertising,
    /// Answer the pending read with the current telemetry text
    ServeTelemetry,
}

/// Commands produced by one transition
pub type Commands = Vec<LinkCommand, 2>;

impl LinkState {
    /// Check if a central is attached
    pub fn is_connected(&self) -> bool {
        matches!(self, LinkState::Connected)
    }

    /// Compute the next state and the commands to run
    ///
    /// Recovery is unconditional: there is no retry limit and no backoff.
    pub fn transition(self, event: LinkEvent) -> (LinkState, Commands) {
        use LinkCommand::*;
        use LinkEvent::*;
        use LinkState::*;

        let mut commands = Commands::new();
        let next = match (self, event) {
            // Reads are answered whatever the state; the host expects a reply
            (state, ReadRequest) => {
                let _ = commands.push(ServeTelemetry);
                state
            }

            // Host (re)sync always restarts advertising
            (_, HostSynced(_)) => {
                let _ = commands.push(StartAdvertising);
                Advertising
            }

            (Advertising, Connect { status }) if status == HCI_SUCCESS => Connected,
            (Advertising, Connect { .. }) => {
                let _ = commands.push(StartAdvertising);
                Advertising
            }
            (Advertising, AdvertiseComplete) | (Advertising, AdvertiseStartFailed { .. }) => {
                let _ = commands.push(StartAdvertising);
                Advertising
            }

            (Connected, Disconnect { .. }) => {
                let _ = commands.push(StartAdvertising);
                Advertising
            }

            // Stale or out-of-order events: stay put
            (state, _) => state,
        };

        (next, commands)
    }
}
