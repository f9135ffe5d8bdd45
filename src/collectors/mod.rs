//! Field collectors: each one runs a tool and extracts its value

pub mod audio;
pub mod backlight;
pub mod battery;
pub mod clock;

use crate::config::Config;
use crate::data::StatusLine;
use crate::error::{Result, StatusError};
use crate::utils::command::CommandRunner;
use clock::Clock;
use tracing::warn;

/// Gathers every field of the status line from injected tools and clock
pub struct Collector<R, C> {
    config: Config,
    runner: R,
    clock: C,
}

impl<R: CommandRunner, C: Clock> Collector<R, C> {
    pub fn new(config: Config, runner: R, clock: C) -> Self {
        Self {
            config,
            runner,
            clock,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    #[cfg(test)]
    pub(crate) fn runner(&self) -> &R {
        &self.runner
    }

    /// Query all sources in order. Failures stay inside the returned line.
    pub async fn collect(&self) -> StatusLine {
        let timestamp = clock::format_timestamp(self.clock.now());
        let battery = battery::collect_battery(&self.runner, &self.config.battery).await;
        let volume = audio::collect_volume(&self.runner, &self.config.volume).await;
        let brightness = backlight::collect_brightness(
            &self.runner,
            &self.config.brightness,
            self.config.style,
        )
        .await;

        log_failure("battery percentage", &battery.percentage);
        if !matches!(battery.state, Err(StatusError::QueryFailed(_))) {
            log_failure("battery state", &battery.state);
        }
        log_failure("volume", &volume);
        log_failure("brightness", &brightness);

        StatusLine {
            timestamp,
            battery,
            volume,
            brightness,
        }
    }
}

fn log_failure(field: &str, value: &Result<String>) {
    if let Err(err) = value {
        warn!(field, error = %err, "field query failed");
    }
}
