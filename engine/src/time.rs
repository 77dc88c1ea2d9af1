//! Time Scale, Frame Clock and Time-Scale Pulse
//!
//! [`TimeScale`] is a shared multiplier on simulated time. [`Clock`] turns
//! real frame deltas into scaled and unscaled time. [`TimeScalePulse`] slows
//! time down for a stretch of real time and then puts the scale back to 1.
//!
//! A pulse always restores the scale: when it runs out, when it is cancelled,
//! and when it is dropped unfinished. Overlapping pulses on the same scale
//! race; whichever restores last leaves the scale at 1.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use log::debug;

use crate::config::EngineExtConfig;

/// Shared time multiplier. Clones refer to the same value.
#[derive(Debug, Clone)]
pub struct TimeScale(Arc<AtomicU32>);

impl TimeScale {
    /// A new, independent scale at 1.0.
    pub fn new() -> Self {
        Self::with_value(1.0)
    }

    pub fn with_value(value: f32) -> Self {
        Self(Arc::new(AtomicU32::new(value.to_bits())))
    }

    pub fn get(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn set(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Release);
    }

    pub fn reset(&self) {
        self.set(1.0);
    }

    /// Whether both handles share one value.
    pub fn same_as(&self, other: &TimeScale) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-frame time source with scaled and unscaled deltas.
#[derive(Debug, Clone)]
pub struct Clock {
    time_scale: TimeScale,
    delta: f32,
    unscaled_delta: f32,
    elapsed: f64,
    unscaled_elapsed: f64,
    frame: u64,
}

impl Clock {
    pub fn new(time_scale: TimeScale) -> Self {
        Self {
            time_scale,
            delta: 0.0,
            unscaled_delta: 0.0,
            elapsed: 0.0,
            unscaled_elapsed: 0.0,
            frame: 0,
        }
    }

    /// Clock driven by the global time scale.
    pub fn global() -> Self {
        Self::new(crate::runtime::time_scale())
    }

    /// Advance one frame by `real_dt` seconds of wall time.
    pub fn advance(&mut self, real_dt: f32) {
        let real_dt = real_dt.max(0.0);
        self.unscaled_delta = real_dt;
        self.delta = real_dt * self.time_scale.get();
        self.unscaled_elapsed += real_dt as f64;
        self.elapsed += self.delta as f64;
        self.frame += 1;
    }

    /// Scaled seconds since the previous frame.
    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Real seconds since the previous frame.
    pub fn unscaled_delta(&self) -> f32 {
        self.unscaled_delta
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn unscaled_elapsed(&self) -> f64 {
        self.unscaled_elapsed
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn time_scale(&self) -> &TimeScale {
        &self.time_scale
    }

    /// Start a pulse on this clock's time scale.
    pub fn pulse(&self, strength: f32, duration: f32) -> TimeScalePulse {
        TimeScalePulse::start(&self.time_scale, strength, duration)
    }
}

/// Progress of a [`TimeScalePulse`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PulseState {
    /// Still holding the scale; `remaining` real seconds to go.
    Running { remaining: f32 },
    /// Scale restored to 1.
    Finished,
}

/// Holds a time scale at `strength` for `duration` real seconds.
#[derive(Debug)]
#[must_use = "dropping a pulse restores the time scale immediately"]
pub struct TimeScalePulse {
    time_scale: TimeScale,
    remaining: f32,
    active: bool,
}

impl TimeScalePulse {
    /// Set the scale to `strength` now and start counting real time.
    ///
    /// `strength` is not validated. A zero or negative `duration` still
    /// lasts until the first [`tick`](Self::tick).
    pub fn start(time_scale: &TimeScale, strength: f32, duration: f32) -> Self {
        time_scale.set(strength);
        debug!("[TimeScalePulse] Scale {} for {}s", strength, duration);
        Self {
            time_scale: time_scale.clone(),
            remaining: duration,
            active: true,
        }
    }

    /// Pulse using the strength and duration from `config`.
    pub fn from_config(time_scale: &TimeScale, config: &EngineExtConfig) -> Self {
        Self::start(time_scale, config.pulse_strength, config.pulse_duration)
    }

    /// Count `unscaled_dt` real seconds; restores the scale once time is up.
    pub fn tick(&mut self, unscaled_dt: f32) -> PulseState {
        if !self.active {
            return PulseState::Finished;
        }
        self.remaining -= unscaled_dt.max(0.0);
        if self.remaining <= 0.0 {
            self.restore();
            return PulseState::Finished;
        }
        PulseState::Running {
            remaining: self.remaining,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Real seconds left, never negative.
    pub fn remaining(&self) -> f32 {
        if self.active {
            self.remaining.max(0.0)
        } else {
            0.0
        }
    }

    /// Stop early and restore the scale.
    pub fn cancel(mut self) {
        if self.active {
            debug!("[TimeScalePulse] Cancelled with {}s left", self.remaining.max(0.0));
        }
        self.restore();
    }

    fn restore(&mut self) {
        if self.active {
            self.active = false;
            self.time_scale.reset();
            debug!("[TimeScalePulse] Scale restored to 1");
        }
    }
}

impl Drop for TimeScalePulse {
    fn drop(&mut self) {
        self.restore();
    }
}
