pub mod battery;
pub mod disk;
pub mod memory;
pub mod network;
pub mod provider;
pub mod sampler;

pub use provider::{MetricsProvider, SysinfoProvider};
pub use sampler::{Sampler, CPU_WINDOW};

use pulse_core::{Histories, HostInfo, PulseError, Result, Sample};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Shared view of a running sampler, handed to the UI.
#[derive(Debug, Clone)]
pub struct SamplerHandle {
    /// Rolling cpu / mem / net histories the sampler writes into.
    pub histories: Arc<Histories>,
    /// Host facts read once at startup.
    pub host: HostInfo,
    collecting: Arc<AtomicBool>,
}

impl SamplerHandle {
    /// A handle in the collecting state around existing histories.
    pub fn new(histories: Arc<Histories>, host: HostInfo) -> Self {
        Self {
            histories,
            host,
            collecting: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Ask the sampler to exit after its current cycle.
    pub fn stop(&self) {
        self.collecting.store(false, Ordering::Relaxed);
    }

    pub fn is_collecting(&self) -> bool {
        self.collecting.load(Ordering::Relaxed)
    }
}

/// Spawn a dedicated sampler thread around `provider` and forward each
/// [`Sample`] through the returned channel.
///
/// The thread stops when [`SamplerHandle::stop`] is called or the receiver
/// is dropped.
pub fn spawn_sampler<P>(provider: P) -> Result<(SamplerHandle, mpsc::Receiver<Sample>)>
where
    P: MetricsProvider + 'static,
{
    let (tx, rx) = mpsc::channel(4);
    let handle = SamplerHandle::new(Arc::new(Histories::default()), provider.host_info());

    let sampler = Sampler::new(
        provider,
        Arc::clone(&handle.histories),
        Arc::clone(&handle.collecting),
        tx,
    );
    std::thread::Builder::new()
        .name("pulse-sampler".into())
        .spawn(move || sampler.run_forever())
        .map_err(|e| PulseError::Sampler(format!("cannot spawn sampler thread: {e}")))?;

    Ok((handle, rx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampler::tests::FakeProvider;

    #[test]
    fn spawned_sampler_reports_host_and_samples() {
        let (handle, mut rx) = spawn_sampler(FakeProvider::default()).unwrap();
        assert_eq!(handle.host.os_name, "Linux");
        assert!(handle.is_collecting());

        let sample = rx.blocking_recv().expect("sample");
        assert_eq!(sample.cpu_percent, 42.0);
        assert_eq!(handle.histories.cpu.latest(), 42.0);

        handle.stop();
        assert!(!handle.is_collecting());
    }
}
