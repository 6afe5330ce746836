//! Embassy async tasks
//!
//! The sampler publishes into the shared telemetry slot; the link task reads
//! from it. Neither waits on the other.

pub mod link;
pub mod sampler;

pub use link::link_task;
pub use sampler::sampler_task;
