//! Desktop window for `system-pulse`.
//!
//! Owns the Iced application loop and wires together all background work:
//! - Sampler thread (one `Sample` per second, marshalled in as messages)
//! - Config file watcher (live theme reload)
//! - 1-second timer (chart refresh, independent of sample arrival)

use chrono::Local;
use futures::{channel::mpsc::Sender, SinkExt};
use iced::{
    widget::{column, container, row, text, Column},
    Element, Length, Size, Subscription, Task,
};
use pulse_config::{default_path, load as load_config, ConfigWatcher, PulseConfig};
use pulse_core::{HostInfo, Sample};
use pulse_system::{spawn_sampler, SamplerHandle, SysinfoProvider};
use pulse_theme::Theme;
use pulse_widgets::{info_line, Charts, Gauges};
use std::time::Duration;
use tracing::{error, info, warn};

/// Chart refresh period.
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

// ── Entry point ───────────────────────────────────────────────────────────────

/// Open the monitor window.  Returns when the window is closed.
pub fn run() -> iced::Result {
    let window = startup_config().window;

    iced::application(Pulse::new, Pulse::update, Pulse::view)
        .title("System Pulse")
        .subscription(Pulse::subscription)
        .style(Pulse::style)
        .window_size(Size::new(window.width, window.height))
        .resizable(window.resizable)
        .run()
}

fn startup_config() -> PulseConfig {
    load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using defaults");
        PulseConfig::default()
    })
}

// ── Message ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub enum Message {
    /// The sampler thread is up; carries its histories and host facts.
    SamplerStarted(SamplerHandle),
    /// A fresh sample from the sampler thread.
    Sample(Sample),
    /// One-second timer tick; re-plots the charts.
    Tick,
    /// Config file changed on disk; re-applies the theme.
    ConfigReloaded,
}

// ── State ─────────────────────────────────────────────────────────────────────

/// Presenter: a pure function of the latest sample and history snapshots.
struct Pulse {
    config:  PulseConfig,
    theme:   Theme,
    sampler: Option<SamplerHandle>,
    gauges:  Gauges,
    charts:  Charts,
    info:    String,
}

impl Pulse {
    fn new() -> (Self, Task<Message>) {
        (Self::with_config(startup_config()), Task::none())
    }

    fn with_config(config: PulseConfig) -> Self {
        let theme = Theme::from_config(&config.theme);
        Self {
            gauges: Gauges::new(&theme),
            charts: Charts::new(&theme),
            info:   String::new(),
            sampler: None,
            config,
            theme,
        }
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SamplerStarted(handle) => {
                info!(
                    "sampling {} {} ({} s history)",
                    handle.host.os_name,
                    handle.host.os_release,
                    handle.histories.cpu.capacity()
                );
                self.sampler = Some(handle);
                self.refresh_charts();
            }
            Message::Sample(sample) => self.on_sample(&sample),
            Message::Tick => self.refresh_charts(),
            Message::ConfigReloaded => self.reload_config(),
        }
        Task::none()
    }

    /// Reflect `sample` in the gauges and the info line.
    fn on_sample(&mut self, sample: &Sample) {
        self.gauges.apply(sample, &self.theme);

        let fallback = HostInfo::default();
        let host = self.sampler.as_ref().map_or(&fallback, |s| &s.host);
        self.info = info_line(host, sample, Local::now());
    }

    /// Re-plot the three charts from the current history snapshots.
    fn refresh_charts(&mut self) {
        if let Some(sampler) = &self.sampler {
            self.charts.refresh(&sampler.histories);
        }
    }

    fn reload_config(&mut self) {
        match load_config(default_path()) {
            Ok(cfg) => {
                info!("Config reloaded");
                if cfg.window.width != self.config.window.width
                    || cfg.window.height != self.config.window.height
                {
                    info!("window size changes apply on next start");
                }
                self.theme = Theme::from_config(&cfg.theme);
                self.gauges.recolor(&self.theme);
                self.charts.restyle(&self.theme);
                self.config = cfg;
            }
            Err(e) => warn!("Config reload failed: {e}"),
        }
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let theme = &self.theme;

        let title = text("System Pulse")
            .size(theme.font_size * 2.0)
            .color(theme.accent.to_iced());

        let gauges = Column::with_children(self.gauges.iter().map(|g| g.view(theme)))
            .spacing(12)
            .padding([12, 0]);

        let charts = column![self.charts.cpu.view(), self.charts.mem.view(), self.charts.net.view()]
            .spacing(4)
            .width(Length::Fill)
            .height(Length::Fill);

        let info = text(&self.info)
            .size(theme.font_size)
            .color(theme.info.to_iced());

        let body = column![
            container(title).center_x(Length::Fill),
            row![gauges, charts].spacing(12).height(Length::Fill),
            container(info).center_x(Length::Fill),
        ]
        .spacing(8)
        .padding(12);

        container(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        let tick = iced::time::every(REFRESH_INTERVAL).map(|_| Message::Tick);

        Subscription::batch([
            tick,
            Subscription::run(sampler_stream),
            Subscription::run(config_stream),
        ])
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.label.to_iced(),
        }
    }
}

impl Drop for Pulse {
    fn drop(&mut self) {
        if let Some(sampler) = &self.sampler {
            sampler.stop();
        }
    }
}

// ── Subscription streams ──────────────────────────────────────────────────────
//
// Each free function acts as both the stream builder AND the unique identity
// key for `Subscription::run(fn_ptr)`.

/// Starts the sampler thread, announces it, then forwards every sample into
/// the UI loop.  Samples reach widgets only through `update`.
fn sampler_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(4, |mut sender: Sender<Message>| async move {
        match spawn_sampler(SysinfoProvider::new()) {
            Ok((handle, mut rx)) => {
                if sender.send(Message::SamplerStarted(handle.clone())).await.is_ok() {
                    while let Some(sample) = rx.recv().await {
                        match sender.try_send(Message::Sample(sample)) {
                            Ok(()) => {}
                            Err(e) if e.is_disconnected() => break,
                            Err(_) => tracing::debug!("UI busy; sample dropped"),
                        }
                    }
                }
                handle.stop();
                warn!("sampler stream ended");
            }
            Err(e) => error!("Cannot start sampler: {e}"),
        }

        // Nothing left to forward; stall rather than restart.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}

/// Watches the config file for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (watcher, mut rx) = ConfigWatcher::spawn(default_path());
        tracing::debug!("config watcher for {}", watcher.path().display());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
