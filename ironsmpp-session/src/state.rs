/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Session state machine definitions.
//!
//! The state is a runtime enum rather than a typestate because the session
//! has a fatal `* → Closed` edge reachable from every state and the keepalive
//! tick queries the current state dynamically.

use ironsmpp_core::types::CommandStatus;
use std::fmt;

/// The lifecycle state of an SMPP session.
///
/// States only move forward: `Initial → Bound → Unbound → Closed`, with a
/// direct edge into `Closed` from any state on fatal conditions. `Closed` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionState {
    /// Connected, bind handshake not yet completed.
    Initial,
    /// Bind handshake completed; normal traffic flows.
    Bound,
    /// Unbind handshake in progress; session is draining.
    Unbound,
    /// Terminal: transport closed, keepalive cancelled.
    Closed,
}

impl SessionState {
    /// Checks whether a transition from this state to `next` is defined.
    ///
    /// `Unbound` is reachable from `Initial` because a peer may unbind before
    /// the local side observes bind completion.
    #[must_use]
    pub const fn permits(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Initial, Self::Bound)
                | (Self::Initial, Self::Unbound)
                | (Self::Bound, Self::Unbound)
                | (Self::Initial, Self::Closed)
                | (Self::Bound, Self::Closed)
                | (Self::Unbound, Self::Closed)
        )
    }

    /// Queries whether the session is bound.
    #[inline]
    #[must_use]
    pub const fn is_bound(self) -> bool {
        matches!(self, Self::Bound)
    }

    /// Queries whether the session is unbound (teardown in progress).
    #[inline]
    #[must_use]
    pub const fn is_unbound(self) -> bool {
        matches!(self, Self::Unbound)
    }

    /// Queries whether the session is closed.
    #[inline]
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }

    /// Returns the state name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Bound => "Bound",
            Self::Unbound => "Unbound",
            Self::Closed => "Closed",
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a session reached [`SessionState::Closed`].
///
/// Delivered exactly once to the host via
/// [`SessionHandler::on_closed`](crate::handler::SessionHandler::on_closed);
/// the host decides whether to stop one connection or shut down more broadly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseReason {
    /// The peer acknowledged our unbind; teardown completed normally.
    UnbindComplete,
    /// The peer sent a generic_nack.
    PeerNack {
        /// Peer-reported error code.
        error_code: CommandStatus,
    },
    /// An unrecognized or out-of-sequence control PDU was received.
    ProtocolViolation,
    /// The codec could not parse an inbound chunk.
    DecodeFailure,
    /// The underlying transport reported an error.
    TransportFailure,
}

impl fmt::Display for CloseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnbindComplete => f.write_str("unbind complete"),
            Self::PeerNack { error_code } => write!(f, "peer nack (error={error_code})"),
            Self::ProtocolViolation => f.write_str("protocol violation"),
            Self::DecodeFailure => f.write_str("decode failure"),
            Self::TransportFailure => f.write_str("transport failure"),
        }
    }
}
