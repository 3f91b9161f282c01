/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Session-control PDU definitions.
//!
//! This module provides [`ControlMessage`], the closed variant set of SMPP
//! session-control PDUs handled by the session layer. The wire format itself
//! is owned by the external codec; the session layer only ever sees these
//! typed values.
//!
//! Every variant carries its sequence number: the 32-bit correlation id that
//! a response must echo from the request it answers.

use crate::types::{CommandStatus, SeqNum, SystemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// SMPP command identifiers for the session-control PDUs.
///
/// Referenced here for codec implementors; the session layer never inspects
/// raw command ids except when reporting an [`ControlMessage::Unrecognized`]
/// PDU.
pub mod command_id {
    /// Response bit: set on every response command id.
    pub const RESPONSE_BIT: u32 = 0x8000_0000;
    /// generic_nack.
    pub const GENERIC_NACK: u32 = 0x8000_0000;
    /// bind_transceiver.
    pub const BIND_TRANSCEIVER: u32 = 0x0000_0009;
    /// bind_transceiver_resp.
    pub const BIND_TRANSCEIVER_RESP: u32 = 0x8000_0009;
    /// unbind.
    pub const UNBIND: u32 = 0x0000_0006;
    /// unbind_resp.
    pub const UNBIND_RESP: u32 = 0x8000_0006;
    /// enquire_link.
    pub const ENQUIRE_LINK: u32 = 0x0000_0015;
    /// enquire_link_resp.
    pub const ENQUIRE_LINK_RESP: u32 = 0x8000_0015;
}

/// Body fields of a bind request.
///
/// Only the fields the session layer needs to originate a bind are modeled;
/// the remaining wire fields (interface version, TON/NPI, address range) are
/// codec concerns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindFields {
    /// Identifies the ESME to the peer.
    pub system_id: SystemId,
    /// Password used to authenticate the bind.
    pub password: String,
    /// Optional ESME system type.
    pub system_type: Option<String>,
}

impl BindFields {
    /// Creates bind fields from a system id and password.
    #[must_use]
    pub fn new(system_id: SystemId, password: impl Into<String>) -> Self {
        Self {
            system_id,
            password: password.into(),
            system_type: None,
        }
    }

    /// Sets the system type.
    #[must_use]
    pub fn with_system_type(mut self, system_type: impl Into<String>) -> Self {
        self.system_type = Some(system_type.into());
        self
    }
}

/// A decoded session-control PDU.
///
/// This is a closed set: the codec maps every inbound PDU either to one of
/// the known variants or to [`ControlMessage::Unrecognized`], which preserves
/// the raw command id for diagnostics. The dispatcher matches exhaustively,
/// so a new variant cannot be added without every call site being revisited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ControlMessage {
    /// Bind request establishing an authenticated session.
    BindRequest {
        /// Correlation id of the request.
        seq: SeqNum,
        /// Bind body fields.
        bind: BindFields,
    },
    /// Response to a bind request.
    BindResponse {
        /// Correlation id echoed from the request.
        seq: SeqNum,
        /// Outcome of the bind.
        status: CommandStatus,
        /// System id of the responding peer, when the bind succeeded.
        system_id: Option<SystemId>,
    },
    /// Graceful teardown request.
    Unbind {
        /// Correlation id of the request.
        seq: SeqNum,
    },
    /// Response to an unbind request.
    UnbindResponse {
        /// Correlation id echoed from the request.
        seq: SeqNum,
        /// Outcome of the unbind.
        status: CommandStatus,
    },
    /// Heartbeat request verifying peer liveness.
    EnquireLink {
        /// Correlation id of the request.
        seq: SeqNum,
    },
    /// Response to a heartbeat request.
    EnquireLinkResponse {
        /// Correlation id echoed from the request.
        seq: SeqNum,
    },
    /// Generic negative acknowledgement from the peer.
    GenericNack {
        /// Correlation id of the PDU being rejected.
        seq: SeqNum,
        /// Peer-reported error code.
        error_code: CommandStatus,
    },
    /// A PDU the codec could parse but this layer does not handle.
    Unrecognized {
        /// Correlation id of the PDU.
        seq: SeqNum,
        /// Raw command id from the wire header.
        command_id: u32,
    },
}

impl ControlMessage {
    /// Returns the sequence number carried by this PDU.
    #[must_use]
    pub const fn sequence_number(&self) -> SeqNum {
        match self {
            Self::BindRequest { seq, .. }
            | Self::BindResponse { seq, .. }
            | Self::Unbind { seq }
            | Self::UnbindResponse { seq, .. }
            | Self::EnquireLink { seq }
            | Self::EnquireLinkResponse { seq }
            | Self::GenericNack { seq, .. }
            | Self::Unrecognized { seq, .. } => *seq,
        }
    }

    /// Returns the wire command id for this PDU.
    #[must_use]
    pub const fn command_id(&self) -> u32 {
        match self {
            Self::BindRequest { .. } => command_id::BIND_TRANSCEIVER,
            Self::BindResponse { .. } => command_id::BIND_TRANSCEIVER_RESP,
            Self::Unbind { .. } => command_id::UNBIND,
            Self::UnbindResponse { .. } => command_id::UNBIND_RESP,
            Self::EnquireLink { .. } => command_id::ENQUIRE_LINK,
            Self::EnquireLinkResponse { .. } => command_id::ENQUIRE_LINK_RESP,
            Self::GenericNack { .. } => command_id::GENERIC_NACK,
            Self::Unrecognized { command_id, .. } => *command_id,
        }
    }

    /// Checks whether this PDU is a response.
    #[must_use]
    pub const fn is_response(&self) -> bool {
        self.command_id() & command_id::RESPONSE_BIT != 0
    }

    /// Returns the PDU name as it appears in the SMPP specification.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BindRequest { .. } => "bind_transceiver",
            Self::BindResponse { .. } => "bind_transceiver_resp",
            Self::Unbind { .. } => "unbind",
            Self::UnbindResponse { .. } => "unbind_resp",
            Self::EnquireLink { .. } => "enquire_link",
            Self::EnquireLinkResponse { .. } => "enquire_link_resp",
            Self::GenericNack { .. } => "generic_nack",
            Self::Unrecognized { .. } => "unrecognized",
        }
    }
}

impl fmt::Display for ControlMessage {
    /// Human-readable debug form, used in the session log lines.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BindRequest { seq, bind } => {
                write!(f, "bind_transceiver (seq={seq}, system_id={})", bind.system_id)
            }
            Self::BindResponse { seq, status, .. } => {
                write!(f, "bind_transceiver_resp (seq={seq}, status={status})")
            }
            Self::UnbindResponse { seq, status } => {
                write!(f, "unbind_resp (seq={seq}, status={status})")
            }
            Self::GenericNack { seq, error_code } => {
                write!(f, "generic_nack (seq={seq}, error={error_code})")
            }
            Self::Unrecognized { seq, command_id } => {
                write!(f, "unrecognized (seq={seq}, command_id={command_id:#010x})")
            }
            other => write!(f, "{} (seq={})", other.name(), other.sequence_number()),
        }
    }
}
