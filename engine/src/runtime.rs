//! Process-Wide Runtime State
//!
//! The two pieces of host state the helpers read globally: whether the engine
//! is actively running (as opposed to being edited or paused before start),
//! and the global time scale.
//!
//! Both start out as "not running" and scale 1.0. The host calls [`start`]
//! when its loop begins and [`stop`] when it ends.

use std::sync::LazyLock;
use std::sync::atomic::{AtomicBool, Ordering};

use log::trace;

use crate::time::TimeScale;

static RUNNING: AtomicBool = AtomicBool::new(false);

static GLOBAL_TIME_SCALE: LazyLock<TimeScale> = LazyLock::new(TimeScale::new);

/// Mark the engine as running and reset the global time scale to 1.
pub fn start() {
    GLOBAL_TIME_SCALE.reset();
    RUNNING.store(true, Ordering::Release);
    trace!("[Runtime] Started");
}

/// Mark the engine as stopped.
pub fn stop() {
    RUNNING.store(false, Ordering::Release);
    trace!("[Runtime] Stopped");
}

pub fn is_running() -> bool {
    RUNNING.load(Ordering::Acquire)
}

/// Handle to the global time scale. Clones share the same value.
pub fn time_scale() -> TimeScale {
    GLOBAL_TIME_SCALE.clone()
}
