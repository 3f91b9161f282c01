/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! PDU codec trait definition.
//!
//! This module defines the abstract interface to the wire-format codec. The
//! session layer consumes this seam; the host supplies the implementation
//! that knows the bit-exact SMPP framing (command_length, command_id,
//! command_status, sequence_number, body fields).

use crate::error::{DecodeError, EncodeError};
use crate::pdu::ControlMessage;
use bytes::Bytes;

/// Abstract interface to the SMPP wire codec.
///
/// Implementations translate between framed byte chunks and typed
/// [`ControlMessage`] values. A chunk the codec can frame but cannot map to a
/// known variant must decode to [`ControlMessage::Unrecognized`]; only
/// genuinely malformed input is a [`DecodeError`].
pub trait PduCodec {
    /// Decodes one framed PDU from a byte chunk.
    ///
    /// # Arguments
    /// * `src` - A complete framed PDU as delivered by the transport
    ///
    /// # Errors
    /// Returns `DecodeError` if the chunk is malformed. The session layer
    /// treats this as fatal for the connection.
    fn decode(&self, src: &[u8]) -> Result<ControlMessage, DecodeError>;

    /// Encodes a PDU into its wire representation.
    ///
    /// # Errors
    /// Returns `EncodeError` if a field cannot be represented on the wire.
    fn encode(&self, message: &ControlMessage) -> Result<Bytes, EncodeError>;
}
