//! Transition timing contract.

use cubeworld_config::GravityConfig;

use crate::error::TimingError;

/// Upper bound on `settle_ms`, the latest offset a transition schedules.
pub const MAX_SETTLE_MS: u64 = 60_000;

/// Millisecond offsets that shape a face transition.
///
/// All offsets except `startup_grace_ms` are measured from the moment the
/// transition begins. A valid timing fires rotation lock, gravity swap, and
/// completion in strictly that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Detection is suppressed for this long after the session starts.
    pub startup_grace_ms: u64,
    /// The body's rotation lock is reinstated at this offset.
    pub rotation_lock_ms: u64,
    /// Applied gravity switches to the new face at this offset.
    pub gravity_swap_ms: u64,
    /// Length of the eased body/camera reorientation.
    pub rotation_duration_ms: u64,
    /// The transition completes and detection resumes at this offset.
    pub settle_ms: u64,
}

impl TransitionTiming {
    /// Check the ordering constraints between offsets, and that the whole
    /// transition fits under [`MAX_SETTLE_MS`].
    pub fn validate(&self) -> Result<(), TimingError> {
        if self.rotation_lock_ms >= self.gravity_swap_ms {
            return Err(TimingError::LockNotBeforeSwap {
                lock_ms: self.rotation_lock_ms,
                swap_ms: self.gravity_swap_ms,
            });
        }
        if self.gravity_swap_ms > self.rotation_duration_ms {
            return Err(TimingError::SwapAfterRotation {
                swap_ms: self.gravity_swap_ms,
                duration_ms: self.rotation_duration_ms,
            });
        }
        if self.settle_ms < self.rotation_duration_ms {
            return Err(TimingError::SettleBeforeRotationEnds {
                settle_ms: self.settle_ms,
                duration_ms: self.rotation_duration_ms,
            });
        }
        if self.settle_ms > MAX_SETTLE_MS {
            return Err(TimingError::SettleTooLong {
                settle_ms: self.settle_ms,
                max_ms: MAX_SETTLE_MS,
            });
        }
        Ok(())
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            startup_grace_ms: 500,
            rotation_lock_ms: 100,
            gravity_swap_ms: 200,
            rotation_duration_ms: 1000,
            settle_ms: 1500,
        }
    }
}

impl TryFrom<&GravityConfig> for TransitionTiming {
    type Error = TimingError;

    fn try_from(config: &GravityConfig) -> Result<Self, Self::Error> {
        let timing = Self {
            startup_grace_ms: config.startup_grace_ms,
            rotation_lock_ms: config.rotation_lock_ms,
            gravity_swap_ms: config.gravity_swap_ms,
            rotation_duration_ms: config.rotation_duration_ms,
            settle_ms: config.settle_ms,
        };
        timing.validate()?;
        Ok(timing)
    }
}
