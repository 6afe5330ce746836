//! BLE link lifecycle
//!
//! The link never gives up: every disconnect, failed connection or ended
//! advertising set leads straight back to advertising. The transition
//! function is pure; the firmware's link task executes the commands it
//! returns against the BLE host.

pub mod events;
pub mod host;
pub mod machine;
pub mod session;

pub use events::{AddressKind, LinkEvent, HCI_SUCCESS};
pub use host::{supervise, HostRunner};
pub use machine::{Commands, LinkCommand, LinkState};
pub use session::{LinkFailure, LinkSession};
