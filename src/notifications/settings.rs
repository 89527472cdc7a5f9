// SPDX-License-Identifier: MPL-2.0
//! Validated runtime settings for a [`Manager`](super::Manager).

use super::notification::Kind;
use crate::config::{Config, DurationsConfig, MAX_NOTIFICATION_AGE_MS, SWEEP_INTERVAL_MS};
use crate::domain::notifications::{DisplayDuration, MaxVisible, TickInterval};
use std::time::Duration;

/// Default display duration for each kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDurations {
    success: DisplayDuration,
    error: DisplayDuration,
    warning: DisplayDuration,
    info: DisplayDuration,
    love: DisplayDuration,
    celebration: DisplayDuration,
    magic: DisplayDuration,
}

impl KindDurations {
    /// Returns the configured duration for `kind`.
    #[must_use]
    pub fn get(&self, kind: Kind) -> DisplayDuration {
        match kind {
            Kind::Success => self.success,
            Kind::Error => self.error,
            Kind::Warning => self.warning,
            Kind::Info => self.info,
            Kind::Love => self.love,
            Kind::Celebration => self.celebration,
            Kind::Magic => self.magic,
        }
    }

    /// Overrides the duration for `kind`.
    pub fn set(&mut self, kind: Kind, duration: DisplayDuration) {
        let slot = match kind {
            Kind::Success => &mut self.success,
            Kind::Error => &mut self.error,
            Kind::Warning => &mut self.warning,
            Kind::Info => &mut self.info,
            Kind::Love => &mut self.love,
            Kind::Celebration => &mut self.celebration,
            Kind::Magic => &mut self.magic,
        };
        *slot = duration;
    }
}

impl Default for KindDurations {
    fn default() -> Self {
        Self {
            success: Kind::Success.default_duration(),
            error: Kind::Error.default_duration(),
            warning: Kind::Warning.default_duration(),
            info: Kind::Info.default_duration(),
            love: Kind::Love.default_duration(),
            celebration: Kind::Celebration.default_duration(),
            magic: Kind::Magic.default_duration(),
        }
    }
}

impl From<&DurationsConfig> for KindDurations {
    fn from(config: &DurationsConfig) -> Self {
        let mut durations = Self::default();
        let overrides = [
            (Kind::Success, config.success_ms),
            (Kind::Error, config.error_ms),
            (Kind::Warning, config.warning_ms),
            (Kind::Info, config.info_ms),
            (Kind::Love, config.love_ms),
            (Kind::Celebration, config.celebration_ms),
            (Kind::Magic, config.magic_ms),
        ];
        for (kind, millis) in overrides {
            if let Some(millis) = millis {
                durations.set(kind, DisplayDuration::from_millis(millis));
            }
        }
        durations
    }
}

/// Settings a manager runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub max_visible: MaxVisible,
    pub tick_interval: TickInterval,
    pub durations: KindDurations,
    /// Timed notifications older than this are force-removed by the sweep.
    pub max_age: Duration,
    /// Minimum time between two sweeps run from `tick`.
    pub sweep_interval: Duration,
}

impl Settings {
    /// Returns default settings with a different capacity.
    #[must_use]
    pub fn with_max_visible(max_visible: usize) -> Self {
        Self {
            max_visible: MaxVisible::new(max_visible),
            ..Self::default()
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_visible: MaxVisible::default(),
            tick_interval: TickInterval::default(),
            durations: KindDurations::default(),
            max_age: Duration::from_millis(MAX_NOTIFICATION_AGE_MS),
            sweep_interval: Duration::from_millis(SWEEP_INTERVAL_MS),
        }
    }
}

impl From<&Config> for Settings {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            max_visible: config
                .queue
                .max_visible
                .map_or(defaults.max_visible, MaxVisible::new),
            tick_interval: config
                .timing
                .tick_interval_ms
                .map_or(defaults.tick_interval, TickInterval::new),
            durations: KindDurations::from(&config.durations),
            ..defaults
        }
    }
}
