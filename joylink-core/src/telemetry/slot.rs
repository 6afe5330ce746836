//! Shared latest-sample slot

use core::cell::Cell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;
use joylink_protocol::{encode, RawSample, TelemetryText};

/// Most recent sample, readable from another task at any time
///
/// The lock is held only for the copy in or out, never across I/O. With a
/// `CriticalSectionRawMutex` the slot can be a `static` shared between the
/// sampling task and the link task.
pub struct TelemetrySlot<M: RawMutex> {
    latest: Mutex<M, Cell<RawSample>>,
}

impl<M: RawMutex> TelemetrySlot<M> {
    /// Slot holding an all-zero sample until the first tick lands
    pub const fn new() -> Self {
        Self {
            latest: Mutex::new(Cell::new(RawSample::new(0, 0, 0, 0, 0))),
        }
    }

    /// Overwrite the slot
    pub fn set(&self, sample: RawSample) {
        self.latest.lock(|cell| cell.set(sample));
    }

    /// Copy of the current sample
    pub fn snapshot(&self) -> RawSample {
        self.latest.lock(|cell| cell.get())
    }

    /// Current sample as attribute text, capped at the attribute limit
    pub fn read(&self) -> TelemetryText {
        encode(&self.snapshot())
    }
}

impl<M: RawMutex> Default for TelemetrySlot<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    #[test]
    fn test_initial_read() {
        let slot: TelemetrySlot<NoopRawMutex> = TelemetrySlot::new();
        assert_eq!(slot.read().as_slice(), b"0,0,0,0,0");
    }

    #[test]
    fn test_set_then_read() {
        let slot: TelemetrySlot<NoopRawMutex> = TelemetrySlot::new();
        slot.set(RawSample::new(100, 200, 300, 400, 1));
        assert_eq!(slot.read().as_slice(), b"100,200,300,400,1");
        slot.set(RawSample::new(2048, 2048, 2048, 2048, 0));
        assert_eq!(slot.read().as_slice(), b"2048,2048,2048,2048,0");
    }

    #[test]
    fn test_last_write_wins() {
        let slot: TelemetrySlot<NoopRawMutex> = TelemetrySlot::default();
        for v in 0..10 {
            slot.set(RawSample::new(v, v, v, v, 1));
        }
        assert_eq!(slot.snapshot(), RawSample::new(9, 9, 9, 9, 1));
    }

    static SHARED: TelemetrySlot<CriticalSectionRawMutex> = TelemetrySlot::new();

    #[test]
    fn test_reader_never_sees_torn_sample() {
        let done = AtomicBool::new(false);
        thread::scope(|s| {
            s.spawn(|| {
                for v in 0..=4095u16 {
                    SHARED.set(RawSample::new(v, v, v, v, (v % 2) as u8));
                }
                done.store(true, Ordering::Release);
            });
            s.spawn(|| {
                while !done.load(Ordering::Acquire) {
                    let sample = SHARED.snapshot();
                    let v = sample.x1();
                    assert_eq!(sample, RawSample::new(v, v, v, v, (v % 2) as u8));
                }
            });
        });
        assert_eq!(SHARED.snapshot().x1(), 4095);
    }
}
