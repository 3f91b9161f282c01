/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Transport adapter trait definition.
//!
//! This module defines the abstract interface to the underlying byte-stream
//! transport. Stream establishment, TLS, buffering, and socket-level
//! backpressure all live behind this seam; the session layer only writes
//! bytes, closes the connection, and observes the error flag.

/// Abstract interface to the connection transport.
///
/// The adapter is driven from the single control thread that owns the
/// session, so implementations need no internal synchronization for these
/// calls. `send` may be invoked twice within one dispatch or tick (reply plus
/// heartbeat) and must tolerate that reentrancy.
pub trait Transport {
    /// Queues bytes for sending on the connection.
    ///
    /// Fire-and-forget: write failures are not reported here. They flip the
    /// adapter into its error state, which the session's keepalive tick
    /// observes via [`is_in_error_state`](Self::is_in_error_state).
    fn send(&mut self, bytes: &[u8]);

    /// Closes the connection. Must be idempotent.
    fn close(&mut self);

    /// Reports whether the connection has failed.
    fn is_in_error_state(&self) -> bool;
}
