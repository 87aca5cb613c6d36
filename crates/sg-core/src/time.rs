//! Simulation time model.
//!
//! # Design
//!
//! Time is an integer nanosecond counter, `SimTime`.  Update intervals are
//! given in `f64` seconds by callers but converted once to a `SimTime` period
//! when periodic updates start, so every later reschedule is
//!
//!   next_fire = fire_time + period
//!
//! in exact integer arithmetic.  No floating-point drift accumulates no matter
//! how many times an update chain fires.

use std::fmt;

use crate::{SgError, SgResult};

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

// ── SimTime ───────────────────────────────────────────────────────────────────

/// An absolute simulation timestamp (or a duration) in nanoseconds.
///
/// `u64` nanoseconds cover ~584 years of simulated time.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);
    pub const MAX: SimTime = SimTime(u64::MAX);

    #[inline]
    pub const fn from_nanos(nanos: u64) -> SimTime {
        SimTime(nanos)
    }

    /// Convert `secs` to the nearest nanosecond.
    ///
    /// Negative and NaN inputs map to `ZERO`; values beyond the
    /// representable range saturate at `MAX`.  Callers that need to reject
    /// such inputs validate before converting.
    pub fn from_secs_f64(secs: f64) -> SimTime {
        let nanos = (secs * NANOS_PER_SEC).round();
        if nanos.is_nan() || nanos <= 0.0 {
            SimTime::ZERO
        } else if nanos >= u64::MAX as f64 {
            SimTime::MAX
        } else {
            SimTime(nanos as u64)
        }
    }

    /// Like [`from_secs_f64`](Self::from_secs_f64) but `None` for NaN,
    /// negative, and out-of-range inputs instead of clamping.
    pub fn try_from_secs_f64(secs: f64) -> Option<SimTime> {
        let nanos = (secs * NANOS_PER_SEC).round();
        if nanos.is_nan() || nanos < 0.0 || nanos >= u64::MAX as f64 {
            None
        } else {
            Some(SimTime(nanos as u64))
        }
    }

    #[inline]
    pub fn as_nanos(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / NANOS_PER_SEC
    }

    /// `self + rhs`, saturating at `MAX`.
    #[inline]
    pub fn saturating_add(self, rhs: SimTime) -> SimTime {
        SimTime(self.0.saturating_add(rhs.0))
    }

    /// `self + rhs`, or `None` on overflow.
    #[inline]
    pub fn checked_add(self, rhs: SimTime) -> Option<SimTime> {
        self.0.checked_add(rhs.0).map(SimTime)
    }

    /// Time elapsed from `earlier` to `self`, or `ZERO` if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> SimTime {
        SimTime(self.0.saturating_sub(earlier.0))
    }
}

impl std::ops::Add for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: SimTime) -> SimTime {
        self.saturating_add(rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}s", self.as_secs_f64())
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically built by the application crate (or deserialized with the
/// `serde` feature) and handed to the simulation builder and scenario loader.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Simulated seconds after which `Sim::run` stops firing updates.
    pub stop_time_secs: f64,

    /// Interval used by the scenario loader for rows whose `interval`
    /// column is `default`.  Default: 1.0 s.
    pub default_update_interval_secs: f64,

    /// Orbital radius used for space entities whose radius is left blank.
    /// Default: 1.0.
    pub default_orbit_radius: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            stop_time_secs:               60.0,
            default_update_interval_secs: 1.0,
            default_orbit_radius:         1.0,
        }
    }
}

impl SimConfig {
    /// `stop_time_secs` as a `SimTime`.
    #[inline]
    pub fn stop_time(&self) -> SimTime {
        SimTime::from_secs_f64(self.stop_time_secs)
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> SgResult<()> {
        if !self.stop_time_secs.is_finite() || self.stop_time_secs < 0.0 {
            return Err(SgError::Config(format!(
                "stop_time_secs must be finite and >= 0, got {}",
                self.stop_time_secs
            )));
        }
        if SimTime::try_from_secs_f64(self.stop_time_secs).is_none() {
            return Err(SgError::Config(format!(
                "stop_time_secs {} exceeds the representable range of {} s",
                self.stop_time_secs,
                SimTime::MAX.as_secs_f64()
            )));
        }
        if !self.default_update_interval_secs.is_finite() || self.default_update_interval_secs <= 0.0 {
            return Err(SgError::Config(format!(
                "default_update_interval_secs must be finite and > 0, got {}",
                self.default_update_interval_secs
            )));
        }
        if !self.default_orbit_radius.is_finite() || self.default_orbit_radius <= 0.0 {
            return Err(SgError::Config(format!(
                "default_orbit_radius must be finite and > 0, got {}",
                self.default_orbit_radius
            )));
        }
        Ok(())
    }
}
