/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronSmpp
//!
//! An SMPP session-lifecycle and keepalive engine for Rust.
//!
//! IronSmpp governs one connected peer's lifecycle on an SMPP-style binary
//! protocol link: establishing a session, periodically verifying liveness
//! with enquire_link, interpreting session-control PDUs, and driving the
//! session to a controlled or forced shutdown on protocol violations.
//!
//! ## Features
//!
//! - **Forward-only state machine**: `Initial → Bound → Unbound → Closed`,
//!   with a fatal edge into `Closed` from any state
//! - **Keepalive**: tick-driven enquire_link probes with an explicit,
//!   idempotently cancellable timer handle
//! - **Per-session termination**: exactly one close notification per
//!   connection; the host composes any broader shutdown
//! - **Pluggable collaborators**: wire codec and transport adapter are trait
//!   seams supplied by the host
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use ironsmpp::prelude::*;
//!
//! let config = SessionConfig::initiator(BindFields::new(
//!     SystemId::new("esme").unwrap(),
//!     "secret",
//! ))
//! .with_enquire_link_interval(std::time::Duration::from_secs(30));
//!
//! let mut session = Session::new("smsc-1", config, transport, codec, handler)?;
//! session.send_bind_request()?;
//! // ...host event loop feeds session.ingest(chunk) and, on the configured
//! // cadence, session.keepalive_tick()
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`]: Fundamental types, control-message variants, errors, and the
//!   codec/transport trait seams
//! - [`session`]: Session state machine, control dispatcher, and keepalive

pub mod core {
    //! Core types, trait seams, and error definitions.
    pub use ironsmpp_core::*;
}

pub mod session {
    //! Session lifecycle and keepalive layer.
    pub use ironsmpp_session::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    // Core types
    pub use ironsmpp_core::{
        BindFields, CommandStatus, ControlMessage, DecodeError, EncodeError, PduCodec, Result,
        SeqNum, SessionError, SmppError, SystemId, Transport,
    };

    // Session
    pub use ironsmpp_session::{
        CloseReason, KeepaliveTimer, NoOpHandler, SequenceCounter, Session, SessionConfig,
        SessionHandler, SessionRole, SessionState,
    };
}
