//! GATT identifiers and advertising payload
//!
//! The telemetry text is exposed as the Manufacturer Name String inside the
//! Device Information service, so generic BLE explorers can read it without
//! a custom profile.

use heapless::Vec;

/// Device Information service
pub const DEVICE_INFO_SERVICE_UUID16: u16 = 0x180A;

/// Manufacturer Name String characteristic (read only)
pub const TELEMETRY_CHAR_UUID16: u16 = 0x2A29;

/// Default complete local name used in advertisements
pub const DEFAULT_DEVICE_NAME: &str = "JoyLink";

/// Longest local name that fits next to flags and TX power in a 31 byte
/// legacy advertising payload
pub const MAX_DEVICE_NAME_LEN: usize = 23;

/// Legacy advertising payload limit
pub const MAX_ADV_DATA_LEN: usize = 31;

/// Raw advertising payload
pub type AdvertisingData = Vec<u8, MAX_ADV_DATA_LEN>;

// AD types
const AD_FLAGS: u8 = 0x01;
const AD_SHORTENED_LOCAL_NAME: u8 = 0x08;
const AD_COMPLETE_LOCAL_NAME: u8 = 0x09;
const AD_TX_POWER_LEVEL: u8 = 0x0A;

/// LE General Discoverable
pub const FLAG_LE_GENERAL_DISCOVERABLE: u8 = 0x02;
/// BR/EDR not supported
pub const FLAG_BR_EDR_NOT_SUPPORTED: u8 = 0x04;

/// Build flags, TX power level and local name into one payload
///
/// A name longer than [`MAX_DEVICE_NAME_LEN`] is cut and sent as a
/// shortened local name instead of a complete one.
pub fn advertising_data(name: &str, tx_power_dbm: i8) -> AdvertisingData {
    let mut data = AdvertisingData::new();
    let flags = FLAG_LE_GENERAL_DISCOVERABLE | FLAG_BR_EDR_NOT_SUPPORTED;

    let name = name.as_bytes();
    let (name_type, name) = if name.len() > MAX_DEVICE_NAME_LEN {
        (AD_SHORTENED_LOCAL_NAME, &name[..MAX_DEVICE_NAME_LEN])
    } else {
        (AD_COMPLETE_LOCAL_NAME, name)
    };

    // 3 + 3 + 2 + at most 23 bytes, always within 31
    let _ = data.extend_from_slice(&[2, AD_FLAGS, flags]);
    let _ = data.extend_from_slice(&[2, AD_TX_POWER_LEVEL, tx_power_dbm as u8]);
    let _ = data.extend_from_slice(&[name.len() as u8 + 1, name_type]);
    let _ = data.extend_from_slice(name);
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_payload() {
        let data = advertising_data("JoyLink", 0);
        assert_eq!(
            data.as_slice(),
            &[
                0x02, 0x01, 0x06, // flags
                0x02, 0x0A, 0x00, // tx power
                0x08, 0x09, b'J', b'o', b'y', b'L', b'i', b'n', b'k',
            ]
        );
    }

    #[test]
    fn test_negative_tx_power() {
        let data = advertising_data("J", -12);
        assert_eq!(data[5], (-12i8) as u8);
    }

    #[test]
    fn test_longest_name_fills_payload() {
        let name = "ABCDEFGHIJKLMNOPQRSTUVW";
        assert_eq!(name.len(), MAX_DEVICE_NAME_LEN);
        let data = advertising_data(name, 0);
        assert_eq!(data.len(), MAX_ADV_DATA_LEN);
        assert_eq!(data[7], 0x09);
    }

    #[test]
    fn test_long_name_shortened() {
        let data = advertising_data("ABCDEFGHIJKLMNOPQRSTUVWXYZ", 0);
        assert_eq!(data.len(), MAX_ADV_DATA_LEN);
        assert_eq!(data[6], 24);
        assert_eq!(data[7], 0x08);
        assert_eq!(data.last(), Some(&b'W'));
    }

    #[test]
    fn test_default_name_fits() {
        assert!(DEFAULT_DEVICE_NAME.len() <= MAX_DEVICE_NAME_LEN);
    }
}
