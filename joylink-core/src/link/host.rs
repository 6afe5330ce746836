//! BLE host runner supervision
//!
//! The host runner owns the HCI transport. When it fails it is restarted
//! forever, but only after an await that lets the rest of the executor run:
//! a transport that fails on every first poll must not starve the sampler.

use core::future::Future;

/// Long-running host event loop
#[allow(async_fn_in_trait)]
pub trait HostRunner {
    type Error;

    /// Run until the host stops with an error
    async fn run(&mut self) -> Result<(), Self::Error>;
}

/// Keep `runner` alive, awaiting `pause` after every failure
///
/// A clean return from the runner restarts it immediately.
pub async fn supervise<R, P, F>(runner: &mut R, mut pause: P)
where
    R: HostRunner,
    P: FnMut(R::Error) -> F,
    F: Future<Output = ()>,
{
    loop {
        if let Err(e) = runner.run().await {
            pause(e).await;
        }
    }
}
