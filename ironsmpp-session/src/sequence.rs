/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Outgoing sequence number allocation.
//!
//! Every locally originated request PDU carries a freshly allocated sequence
//! number; responses echo the request's number and never allocate. Values
//! start at 1 and wrap within the SMPP range `1..=0x7FFF_FFFF`.

use ironsmpp_core::types::{SEQ_NUM_MAX, SeqNum};
use std::sync::atomic::{AtomicU32, Ordering};

/// Allocates outgoing sequence numbers for one session.
#[derive(Debug)]
pub struct SequenceCounter {
    /// Next sequence number to hand out.
    next: AtomicU32,
}

impl SequenceCounter {
    /// Creates a counter starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }

    /// Creates a counter starting at the given value.
    ///
    /// # Arguments
    /// * `start` - Initial sequence number (clamped into the valid range)
    #[must_use]
    pub fn with_initial(start: u32) -> Self {
        let start = if start == 0 || start > SEQ_NUM_MAX { 1 } else { start };
        Self {
            next: AtomicU32::new(start),
        }
    }

    /// Returns the next sequence number without allocating it.
    #[inline]
    #[must_use]
    pub fn peek(&self) -> SeqNum {
        SeqNum::new(self.next.load(Ordering::SeqCst))
    }

    /// Allocates and returns the next sequence number.
    ///
    /// Wraps back to 1 after [`SEQ_NUM_MAX`].
    #[inline]
    pub fn allocate(&self) -> SeqNum {
        let result = self.next.fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| {
            Some(if n >= SEQ_NUM_MAX { 1 } else { n + 1 })
        });
        match result {
            Ok(prev) | Err(prev) => SeqNum::new(prev),
        }
    }

    /// Resets the counter to 1.
    #[inline]
    pub fn reset(&self) {
        self.next.store(1, Ordering::SeqCst);
    }
}

impl Default for SequenceCounter {
    fn default() -> Self {
        Self::new()
    }
}
