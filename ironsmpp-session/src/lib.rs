/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! # IronSmpp Session
//!
//! SMPP session lifecycle and keepalive layer for the IronSmpp engine.
//!
//! This crate provides:
//! - **State machine**: Session FSM (`Initial → Bound → Unbound → Closed`)
//!   with forward-only transitions and a fatal edge into `Closed`
//! - **Control dispatcher**: Exhaustive handling of session-control PDUs
//! - **Keepalive**: Tick-driven enquire_link scheduling with explicit,
//!   idempotent cancellation
//! - **Sequence allocation**: Outgoing correlation ids within the SMPP range
//! - **Configuration**: Session role, heartbeat interval, liveness hook
//!
//! The session runs entirely on the host's control thread: every operation is
//! a synchronous, run-to-completion step, so no internal locking is needed.

pub mod config;
pub mod handler;
pub mod keepalive;
pub mod sequence;
pub mod session;
pub mod state;

pub use config::{SessionConfig, SessionRole};
pub use handler::{NoOpHandler, SessionHandler};
pub use keepalive::KeepaliveTimer;
pub use sequence::SequenceCounter;
pub use session::Session;
pub use state::{CloseReason, SessionState};
