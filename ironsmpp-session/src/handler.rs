/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Host callback interface.
//!
//! The session notifies its host through this trait: bind completion,
//! handshake traffic the session does not interpret itself, and the single
//! termination event. Callbacks run synchronously on the control thread that
//! drives the session, so they must not block.

use crate::state::CloseReason;
use ironsmpp_core::pdu::ControlMessage;

/// Callback interface for session events.
///
/// Termination is per-session: `on_closed` fires exactly once for one
/// connection, and the host decides whether to stop that connection alone or
/// shut down more broadly.
pub trait SessionHandler {
    /// Called when the session transitions from `Initial` to `Bound`.
    fn on_bound(&mut self) {}

    /// Called with handshake PDUs (bind request/response) the session
    /// forwards rather than interprets; the host drives the handshake and
    /// reports completion via
    /// [`Session::bind_completed`](crate::session::Session::bind_completed).
    ///
    /// # Arguments
    /// * `message` - The forwarded PDU
    fn on_message(&mut self, message: &ControlMessage) {
        let _ = message;
    }

    /// Called exactly once when the session reaches `Closed`.
    ///
    /// # Arguments
    /// * `reason` - Why the session terminated
    fn on_closed(&mut self, reason: &CloseReason);
}

/// Default no-op handler implementation.
#[derive(Debug, Default)]
pub struct NoOpHandler;

impl SessionHandler for NoOpHandler {
    fn on_closed(&mut self, _reason: &CloseReason) {}
}
