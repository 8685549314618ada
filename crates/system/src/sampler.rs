use crate::{disk, network::NetCounter, provider::MetricsProvider};
use chrono::Local;
use pulse_core::{clamp_percent, Battery, Histories, Sample};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::{debug, info};

/// CPU measurement window, which is also the loop's 1 Hz pacing.
pub const CPU_WINDOW: Duration = Duration::from_secs(1);

/// Background polling loop: one [`Sample`] per measurement window.
///
/// Runs on its own thread.  It writes the rolling histories and sends each
/// sample down a channel, but never touches UI state.
pub struct Sampler<P> {
    provider:   P,
    histories:  Arc<Histories>,
    collecting: Arc<AtomicBool>,
    net:        NetCounter,
    window:     Duration,
    tx:         mpsc::Sender<Sample>,
}

impl<P: MetricsProvider> Sampler<P> {
    pub fn new(
        mut provider: P,
        histories: Arc<Histories>,
        collecting: Arc<AtomicBool>,
        tx: mpsc::Sender<Sample>,
    ) -> Self {
        let initial = provider
            .net_total_bytes()
            .inspect_err(|e| debug!("initial network counters unavailable: {e}"))
            .ok();

        Self {
            provider,
            histories,
            collecting,
            net: NetCounter::new(initial),
            window: CPU_WINDOW,
            tx,
        }
    }

    /// Override the CPU measurement window.
    #[must_use]
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Sample until `collecting` is cleared or the receiver goes away.
    ///
    /// The flag is checked once per cycle; an in-flight measurement always
    /// completes first.
    pub fn run_forever(mut self) {
        info!("sampler started ({:?} window)", self.window);

        while self.collecting.load(Ordering::Relaxed) {
            let sample = self.sample_once();

            match self.tx.try_send(sample) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => debug!("UI behind; dropped one sample"),
                Err(TrySendError::Closed(_)) => {
                    info!("sample receiver dropped");
                    break;
                }
            }
        }

        info!("sampler stopped");
    }

    /// Take one sample and push cpu / mem / net into the histories.
    ///
    /// Individual read failures fall back to 0 (or no battery); this never fails.
    /// Percentages are clamped into `[0, 100]` whatever the provider reports.
    pub fn sample_once(&mut self) -> Sample {
        let cpu_percent = self
            .provider
            .cpu_percent(self.window)
            .map(clamp_percent)
            .unwrap_or_else(|e| fallback(e, 0.0));

        let mem_percent = self
            .provider
            .memory_percent()
            .map(clamp_percent)
            .unwrap_or_else(|e| fallback(e, 0.0));

        let partitions = self
            .provider
            .partitions()
            .unwrap_or_else(|e| fallback(e, Vec::new()));
        let disk_percent = disk::mean_usage(&partitions);

        let net_kbps = match self.provider.net_total_bytes() {
            Ok(total) => self.net.update(total),
            Err(e) => {
                self.net.reset();
                fallback(e, 0.0)
            }
        };

        let battery = self
            .provider
            .battery()
            .unwrap_or_else(|e| fallback(e, None))
            .map(|b| Battery { percent: clamp_percent(b.percent), ..b });

        self.histories.cpu.push(cpu_percent);
        self.histories.mem.push(mem_percent);
        self.histories.net.push(net_kbps);

        Sample {
            cpu_percent,
            mem_percent,
            disk_percent,
            net_kbps,
            battery,
            partition_count: partitions.len(),
            timestamp: Local::now(),
        }
    }
}

fn fallback<T>(err: pulse_core::PulseError, default: T) -> T {
    debug!("{err}; using default");
    default
}
