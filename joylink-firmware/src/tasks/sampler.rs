//! Sampling and render loop
//!
//! Every tick: read the sticks, publish the sample, bring the panel in line.
//! Display errors are logged and retried on the next tick; the dashboard
//! keeps the stale text of any field whose redraw failed.

use defmt::*;
use embassy_time::{Duration, Instant, Ticker};

use joylink_core::config::DeviceConfig;
use joylink_core::render::{Canvas, Dashboard};
use joylink_core::traits::InputSampler;

use crate::board::{Panel, Sampler};
use crate::channels::TELEMETRY;

#[embassy_executor::task]
pub async fn sampler_task(mut sampler: Sampler, panel: Panel, config: &'static DeviceConfig) {
    info!("Sampler task started ({}ms tick)", config.device.tick_ms);

    let mut canvas = Canvas::new(panel);
    let mut dashboard = Dashboard::new(config);
    let mut chrome_drawn = false;

    let period = Duration::from_millis(u64::from(config.device.tick_ms));
    let mut ticker = Ticker::every(period);

    loop {
        let started = Instant::now();

        if !chrome_drawn {
            match dashboard.draw_static(&mut canvas) {
                Ok(()) => chrome_drawn = true,
                Err(e) => warn!("Static chrome failed: {}", e),
            }
        }

        match sampler.read_raw() {
            Ok(sample) => {
                TELEMETRY.set(sample);

                match dashboard.render(&mut canvas, &sample) {
                    Ok(stats) if !stats.is_idle() => {
                        trace!("Redrew {} texts, {} markers", stats.texts, stats.markers)
                    }
                    Ok(_) => {}
                    Err(e) => warn!("Render failed: {}", e),
                }
            }
            Err(e) => warn!("Sample failed: {}", e),
        }

        let elapsed = started.elapsed();
        if elapsed > period {
            debug!("Slow tick: {}ms", elapsed.as_millis());
        }

        ticker.next().await;
    }
}
