/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Keepalive scheduling handle.
//!
//! The session owns one [`KeepaliveTimer`] when an enquire_link interval is
//! configured. The host drives ticks on that cadence; the timer itself is the
//! explicit, cancellable handle that replaces an anonymous recurring task.
//! Once cancelled it never fires again, so a closed session cannot write to a
//! dead connection.

use std::time::Duration;

/// Cancellable keepalive handle for one session.
#[derive(Debug)]
pub struct KeepaliveTimer {
    /// Interval between enquire_link probes.
    interval: Duration,
    /// Set once, on the transition into `Closed`.
    cancelled: bool,
    /// Number of probes sent so far.
    probes_sent: u64,
}

impl KeepaliveTimer {
    /// Creates a new timer with the specified interval.
    ///
    /// # Arguments
    /// * `interval` - The enquire_link interval
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            cancelled: false,
            probes_sent: 0,
        }
    }

    /// Returns the configured interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancels the timer. Idempotent; a cancelled timer never ticks again.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Queries whether the timer has been cancelled.
    #[inline]
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Records that an enquire_link probe was sent.
    pub fn record_probe(&mut self) {
        self.probes_sent += 1;
    }

    /// Returns the number of probes sent over the timer's lifetime.
    #[must_use]
    pub const fn probes_sent(&self) -> u64 {
        self.probes_sent
    }
}
