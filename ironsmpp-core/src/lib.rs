/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronSmpp Core
//!
//! Core types, trait seams, and error definitions for the IronSmpp SMPP
//! session engine.
//!
//! This crate provides:
//! - **Control messages**: Closed variant set for the SMPP session-control PDUs
//! - **Core types**: Sequence numbers, command statuses, system identifiers
//! - **Errors**: Unified error hierarchy for decode, encode, and session layers
//! - **Trait seams**: [`PduCodec`] and [`Transport`] interfaces consumed by the
//!   session layer and implemented by the host

pub mod codec;
pub mod error;
pub mod pdu;
pub mod transport;
pub mod types;

pub use codec::PduCodec;
pub use error::{DecodeError, EncodeError, Result, SessionError, SmppError};
pub use pdu::{BindFields, ControlMessage};
pub use transport::Transport;
pub use types::{CommandStatus, SeqNum, SystemId};
