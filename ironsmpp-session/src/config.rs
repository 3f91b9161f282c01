/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! Session configuration.
//!
//! This module provides configuration options for SMPP sessions. A config is
//! validated once at session construction; after that it is immutable.

use ironsmpp_core::error::SessionError;
use ironsmpp_core::pdu::BindFields;
use std::fmt;
use std::time::Duration;

/// Which side of the connection this session plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionRole {
    /// Sends the first bind request.
    Initiator,
    /// Waits for the peer's bind request.
    Responder,
}

impl fmt::Display for SessionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Initiator => f.write_str("initiator"),
            Self::Responder => f.write_str("responder"),
        }
    }
}

/// Liveness hook run before each keepalive probe.
///
/// Returning `false` skips the enquire_link for that tick without stopping
/// the scheduler. The hook runs on the control thread that drives the
/// session, so it must not block.
pub type LivenessHook = Box<dyn FnMut() -> bool>;

/// Configuration for an SMPP session.
pub struct SessionConfig {
    /// Role of this endpoint.
    pub role: SessionRole,
    /// Interval between enquire_link probes. `None` disables keepalive.
    pub enquire_link_interval: Option<Duration>,
    /// Bind credentials; required for [`SessionRole::Initiator`].
    pub bind: Option<BindFields>,
    /// Optional liveness hook consulted before each probe.
    pub liveness_hook: Option<LivenessHook>,
}

impl SessionConfig {
    /// Creates a configuration for the given role with keepalive disabled.
    #[must_use]
    pub fn new(role: SessionRole) -> Self {
        Self {
            role,
            enquire_link_interval: None,
            bind: None,
            liveness_hook: None,
        }
    }

    /// Creates an initiator configuration with the given bind credentials.
    #[must_use]
    pub fn initiator(bind: BindFields) -> Self {
        Self::new(SessionRole::Initiator).with_bind(bind)
    }

    /// Creates a responder configuration.
    #[must_use]
    pub fn responder() -> Self {
        Self::new(SessionRole::Responder)
    }

    /// Sets the enquire_link interval.
    #[must_use]
    pub fn with_enquire_link_interval(mut self, interval: Duration) -> Self {
        self.enquire_link_interval = Some(interval);
        self
    }

    /// Sets the bind credentials.
    #[must_use]
    pub fn with_bind(mut self, bind: BindFields) -> Self {
        self.bind = Some(bind);
        self
    }

    /// Sets the liveness hook.
    #[must_use]
    pub fn with_liveness_hook<F>(mut self, hook: F) -> Self
    where
        F: FnMut() -> bool + 'static,
    {
        self.liveness_hook = Some(Box::new(hook));
        self
    }

    /// Returns the enquire_link interval in whole seconds, if configured.
    #[must_use]
    pub fn enquire_link_interval_secs(&self) -> Option<u64> {
        self.enquire_link_interval.map(|i| i.as_secs())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` if an initiator has no bind
    /// credentials to originate the handshake, or if the enquire_link
    /// interval is zero.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.role == SessionRole::Initiator && self.bind.is_none() {
            return Err(SessionError::Configuration(
                "initiator session requires bind fields to send its first request".to_string(),
            ));
        }
        if self.enquire_link_interval == Some(Duration::ZERO) {
            return Err(SessionError::Configuration(
                "enquire_link interval must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for SessionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionConfig")
            .field("role", &self.role)
            .field("enquire_link_interval", &self.enquire_link_interval)
            .field("bind", &self.bind)
            .field("liveness_hook", &self.liveness_hook.as_ref().map(|_| "<hook>"))
            .finish()
    }
}
