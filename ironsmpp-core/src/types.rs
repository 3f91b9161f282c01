/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Core types for SMPP session operations.
//!
//! This module provides fundamental types used throughout the IronSmpp engine:
//! - [`SeqNum`]: PDU sequence number used to correlate requests with responses
//! - [`CommandStatus`]: PDU command status / error code (0 means success)
//! - [`SystemId`]: Bounded system identifier exchanged during bind

use arrayvec::ArrayString;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length for system_id strings in bytes (SMPP 3.4, excluding NUL).
pub const SYSTEM_ID_MAX_LEN: usize = 15;

/// Highest sequence number before wrapping back to 1 (SMPP 3.4 §3.2).
pub const SEQ_NUM_MAX: u32 = 0x7FFF_FFFF;

/// SMPP PDU sequence number.
///
/// A 32-bit correlation id: every response echoes the sequence number of the
/// request it answers. Valid values start at 1 and wrap within
/// `1..=`[`SEQ_NUM_MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SeqNum(u32);

impl SeqNum {
    /// Creates a new sequence number.
    ///
    /// # Arguments
    /// * `value` - The sequence number value (should be >= 1 for valid PDUs)
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw sequence number value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns the next sequence number, wrapping after [`SEQ_NUM_MAX`].
    #[inline]
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 >= SEQ_NUM_MAX {
            Self(1)
        } else {
            Self(self.0 + 1)
        }
    }

    /// Checks if this sequence number is valid (within `1..=`[`SEQ_NUM_MAX`]).
    #[inline]
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 1 && self.0 <= SEQ_NUM_MAX
    }
}

impl Default for SeqNum {
    fn default() -> Self {
        Self(1)
    }
}

impl From<u32> for SeqNum {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<SeqNum> for u32 {
    fn from(seq: SeqNum) -> Self {
        seq.0
    }
}

impl fmt::Display for SeqNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// SMPP command status / error code.
///
/// Carried by every response PDU and by `generic_nack`. Zero means success;
/// any other value is a protocol-defined error code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct CommandStatus(u32);

impl CommandStatus {
    /// ESME_ROK: no error.
    pub const OK: Self = Self(0x0000_0000);
    /// ESME_RINVMSGLEN: invalid message length.
    pub const INVALID_MSG_LENGTH: Self = Self(0x0000_0001);
    /// ESME_RINVCMDID: invalid command id.
    pub const INVALID_COMMAND_ID: Self = Self(0x0000_0003);
    /// ESME_RINVBNDSTS: incorrect bind status for the given command.
    pub const INVALID_BIND_STATUS: Self = Self(0x0000_0004);
    /// ESME_RALYBND: ESME already in bound state.
    pub const ALREADY_BOUND: Self = Self(0x0000_0005);
    /// ESME_RSYSERR: system error.
    pub const SYSTEM_ERROR: Self = Self(0x0000_0008);

    /// Creates a command status from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw status value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Checks whether this status signals success.
    #[inline]
    #[must_use]
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }
}

impl Default for CommandStatus {
    fn default() -> Self {
        Self::OK
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

/// System identifier for SMPP sessions.
///
/// Identifies an ESME or SMSC during the bind handshake. Maximum length is
/// 15 bytes as per the SMPP 3.4 specification (16 including the wire NUL).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(transparent)]
pub struct SystemId(ArrayString<SYSTEM_ID_MAX_LEN>);

impl SystemId {
    /// Creates a new SystemId from a string slice.
    ///
    /// # Arguments
    /// * `s` - The system identifier string
    ///
    /// # Returns
    /// `Some(SystemId)` if the string fits within the maximum length, `None` otherwise.
    #[must_use]
    pub fn new(s: &str) -> Option<Self> {
        ArrayString::from(s).ok().map(Self)
    }

    /// Returns the SystemId as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the length of the SystemId in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the SystemId is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SystemId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SystemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SystemId {
    type Err = arrayvec::CapacityError<()>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArrayString::try_from(s)
            .map(Self)
            .map_err(|_| arrayvec::CapacityError::new(()))
    }
}
