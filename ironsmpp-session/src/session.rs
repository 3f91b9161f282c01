/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 27/1/26
******************************************************************************/

//! The SMPP session: authoritative state holder and control dispatcher.
//!
//! One [`Session`] governs one connected peer. It owns the session state, the
//! keepalive timer, and the outgoing sequence counter; it borrows the wire
//! codec and the transport adapter through their trait seams. All operations
//! are synchronous, run-to-completion steps invoked by the host's control
//! thread: inbound chunks via [`Session::ingest`], keepalive cadence via
//! [`Session::keepalive_tick`], handshake completion via
//! [`Session::bind_completed`].
//!
//! Every path into `Closed` cancels the keepalive timer, closes the transport
//! and raises exactly one [`SessionHandler::on_closed`] notification.

use ironsmpp_core::codec::PduCodec;
use ironsmpp_core::error::{Result, SessionError, SmppError};
use ironsmpp_core::pdu::ControlMessage;
use ironsmpp_core::transport::Transport;
use ironsmpp_core::types::{CommandStatus, SeqNum};
use std::time::Duration;
use tracing::{Span, debug, error, info, info_span, warn};

use crate::config::{SessionConfig, SessionRole};
use crate::handler::SessionHandler;
use crate::keepalive::KeepaliveTimer;
use crate::sequence::SequenceCounter;
use crate::state::{CloseReason, SessionState};

/// One peer's session lifecycle.
///
/// Generic over the transport adapter `T`, the wire codec `C`, and the host
/// handler `H`; all three are supplied at construction and fixed for the
/// session's lifetime.
pub struct Session<T, C, H> {
    id: String,
    config: SessionConfig,
    state: SessionState,
    sequence: SequenceCounter,
    keepalive: Option<KeepaliveTimer>,
    /// Sequence number of our outstanding local unbind, if any.
    pending_unbind: Option<SeqNum>,
    transport: T,
    codec: C,
    handler: H,
    span: Span,
}

impl<T, C, H> Session<T, C, H>
where
    T: Transport,
    C: PduCodec,
    H: SessionHandler,
{
    /// Creates a session in the `Initial` state.
    ///
    /// # Arguments
    /// * `id` - Stable identifier used in log lines
    /// * `config` - Validated here; see [`SessionConfig::validate`]
    /// * `transport` - Connection adapter
    /// * `codec` - Wire codec
    /// * `handler` - Host callback interface
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` if the config is invalid.
    pub fn new(
        id: impl Into<String>,
        config: SessionConfig,
        transport: T,
        codec: C,
        handler: H,
    ) -> Result<Self> {
        config.validate()?;
        let id = id.into();
        let span = info_span!("session", id = %id);
        let keepalive = config.enquire_link_interval.map(|interval| {
            let _guard = span.enter();
            info!(interval_secs = interval.as_secs(), "starting enquire_link timer");
            KeepaliveTimer::new(interval)
        });
        Ok(Self {
            id,
            config,
            state: SessionState::Initial,
            sequence: SequenceCounter::new(),
            keepalive,
            pending_unbind: None,
            transport,
            codec,
            handler,
            span,
        })
    }

    /// Returns the session identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Returns this endpoint's role.
    #[must_use]
    pub const fn role(&self) -> SessionRole {
        self.config.role
    }

    /// Queries whether the session is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.state.is_bound()
    }

    /// Queries whether the session is closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        self.state.is_closed()
    }

    /// Returns the configured keepalive interval, if any.
    ///
    /// The host drives [`Session::keepalive_tick`] on this cadence.
    #[must_use]
    pub fn keepalive_interval(&self) -> Option<Duration> {
        self.keepalive.as_ref().map(KeepaliveTimer::interval)
    }

    /// Queries whether the keepalive timer exists and has not been cancelled.
    #[must_use]
    pub fn keepalive_active(&self) -> bool {
        self.keepalive.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Sends the initiator's opening bind request.
    ///
    /// Valid only for an [`SessionRole::Initiator`] in `Initial`. The
    /// handshake itself remains the host's concern: the peer's response
    /// arrives via [`Session::ingest`] and is forwarded to the handler, and
    /// the host then reports completion via [`Session::bind_completed`].
    ///
    /// # Errors
    /// Returns `SessionError::Configuration` for a responder, or
    /// `SessionError::InvalidState` outside `Initial`.
    pub fn send_bind_request(&mut self) -> Result<()> {
        let span = self.span.clone();
        let _guard = span.enter();

        if self.config.role != SessionRole::Initiator {
            return Err(SessionError::Configuration(
                "responder session never originates a bind request".to_string(),
            )
            .into());
        }
        if self.state != SessionState::Initial {
            return Err(self.invalid_state("Initial"));
        }
        let bind = self.config.bind.clone().ok_or_else(|| {
            SessionError::Configuration(
                "initiator session requires bind fields to send its first request".to_string(),
            )
        })?;

        let seq = self.sequence.allocate();
        self.send(&ControlMessage::BindRequest { seq, bind })
    }

    /// Reports that the bind handshake completed: `Initial → Bound`.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` outside `Initial`.
    pub fn bind_completed(&mut self) -> Result<()> {
        let span = self.span.clone();
        let _guard = span.enter();

        if !self.state.permits(SessionState::Bound) {
            return Err(self.invalid_state("Initial"));
        }
        self.transition(SessionState::Bound);
        info!("session bound");
        self.handler.on_bound();
        Ok(())
    }

    /// Requests a local unbind: sends `Unbind` and transitions to `Unbound`
    /// immediately, without waiting for the peer's acknowledgement. The
    /// session closes when the matching `UnbindResponse` arrives.
    ///
    /// # Errors
    /// Returns `SessionError::InvalidState` outside `Bound`; this also
    /// enforces at most one outstanding local unbind.
    pub fn send_unbind(&mut self) -> Result<()> {
        let span = self.span.clone();
        let _guard = span.enter();

        if self.state != SessionState::Bound {
            return Err(self.invalid_state("Bound"));
        }
        let seq = self.sequence.allocate();
        self.send(&ControlMessage::Unbind { seq })?;
        self.pending_unbind = Some(seq);
        self.transition(SessionState::Unbound);
        Ok(())
    }

    /// Feeds one framed inbound chunk through the codec and the dispatcher.
    ///
    /// Chunks arriving after `Closed` are ignored.
    ///
    /// # Errors
    /// A decode failure is fatal: the session closes with
    /// [`CloseReason::DecodeFailure`] and the error is returned to the host.
    /// An encode failure while producing a reply is also returned.
    pub fn ingest(&mut self, chunk: &[u8]) -> Result<()> {
        let span = self.span.clone();
        let _guard = span.enter();

        if self.state.is_closed() {
            debug!("chunk received after close, ignoring");
            return Ok(());
        }
        match self.codec.decode(chunk) {
            Ok(message) => {
                debug!("-> {message}");
                self.dispatch(message)
            }
            Err(e) => {
                error!(error = %e, "failed to decode inbound PDU");
                self.close(CloseReason::DecodeFailure);
                Err(e.into())
            }
        }
    }

    /// Runs one keepalive tick. The host calls this on the configured
    /// interval; it is a no-op when keepalive is unconfigured or cancelled.
    ///
    /// Tick order: a failed transport stops the timer permanently and closes
    /// the session; an `Unbound` session skips the probe but keeps the timer
    /// alive; otherwise the liveness hook (if any) gates an `EnquireLink`
    /// with a freshly allocated sequence number.
    pub fn keepalive_tick(&mut self) {
        let span = self.span.clone();
        let _guard = span.enter();

        match &self.keepalive {
            None => return,
            Some(timer) if timer.is_cancelled() => return,
            Some(_) => {}
        }

        if self.transport.is_in_error_state() {
            warn!("link timer: connection is in error state, terminating");
            self.close(CloseReason::TransportFailure);
            return;
        }

        if self.state.is_unbound() {
            warn!("link is unbound, waiting until next interval before probing again");
            return;
        }

        let probe = match self.config.liveness_hook.as_mut() {
            Some(hook) => hook(),
            None => true,
        };
        if !probe {
            debug!("liveness hook declined, skipping enquire_link this tick");
            return;
        }

        let seq = self.sequence.allocate();
        if let Err(e) = self.send(&ControlMessage::EnquireLink { seq }) {
            error!(error = %e, "failed to send enquire_link");
            return;
        }
        if let Some(timer) = self.keepalive.as_mut() {
            timer.record_probe();
        }
    }

    /// Reports a transport failure surfaced directly by the host, closing the
    /// session without waiting for the next keepalive tick.
    pub fn on_transport_error(&mut self) {
        let span = self.span.clone();
        let _guard = span.enter();

        if self.state.is_closed() {
            return;
        }
        warn!("transport reported failure");
        self.close(CloseReason::TransportFailure);
    }

    /// Interprets one decoded PDU against the current state.
    ///
    /// Replies always echo the sequence number of the triggering request;
    /// this method never allocates a sequence number.
    fn dispatch(&mut self, message: ControlMessage) -> Result<()> {
        match message {
            ControlMessage::EnquireLinkResponse { .. } => {
                // heartbeat acknowledged
                Ok(())
            }
            ControlMessage::EnquireLink { seq } => {
                self.send(&ControlMessage::EnquireLinkResponse { seq })
            }
            ControlMessage::Unbind { seq } => {
                if self.state.permits(SessionState::Unbound) {
                    // answer synchronously so the peer cannot race further
                    // requests against a half-open session
                    self.transition(SessionState::Unbound);
                    self.send(&ControlMessage::UnbindResponse {
                        seq,
                        status: CommandStatus::OK,
                    })
                } else {
                    warn!(state = %self.state, "unbind received out of sequence");
                    self.close(CloseReason::ProtocolViolation);
                    Ok(())
                }
            }
            ControlMessage::UnbindResponse { seq, status } => {
                if self.state.is_unbound() {
                    if let Some(pending) = self.pending_unbind
                        && pending != seq
                    {
                        warn!(expected = %pending, received = %seq, "unbind_resp sequence mismatch");
                    }
                    info!(status = %status, "unbound ok, closing connection");
                    self.close(CloseReason::UnbindComplete);
                } else {
                    warn!(state = %self.state, "unbind_resp received out of sequence");
                    self.close(CloseReason::ProtocolViolation);
                }
                Ok(())
            }
            ControlMessage::GenericNack { error_code, .. } => {
                warn!(error_code = %error_code, "received generic_nack from peer");
                self.close(CloseReason::PeerNack { error_code });
                Ok(())
            }
            ControlMessage::Unrecognized { command_id, .. } => {
                warn!(command_id, "received unrecognized PDU");
                self.close(CloseReason::ProtocolViolation);
                Ok(())
            }
            message @ (ControlMessage::BindRequest { .. } | ControlMessage::BindResponse { .. }) => {
                // handshake traffic: the host drives bind mechanics
                self.handler.on_message(&message);
                Ok(())
            }
        }
    }

    /// Forces the session into `Closed`. Idempotent: the first call cancels
    /// the keepalive timer, closes the transport, and notifies the handler;
    /// any later call is a no-op.
    fn close(&mut self, reason: CloseReason) {
        if self.state.is_closed() {
            return;
        }
        if let Some(timer) = self.keepalive.as_mut()
            && !timer.is_cancelled()
        {
            timer.cancel();
            debug!("keepalive timer cancelled");
        }
        self.transport.close();
        self.transition(SessionState::Closed);
        info!(reason = %reason, "session closed");
        self.handler.on_closed(&reason);
    }

    fn transition(&mut self, next: SessionState) {
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }

    /// Encodes and writes one PDU through the transport.
    fn send(&mut self, message: &ControlMessage) -> Result<()> {
        let bytes = self.codec.encode(message)?;
        debug!("<- {message}");
        self.transport.send(&bytes);
        Ok(())
    }

    fn invalid_state(&self, expected: &str) -> SmppError {
        SessionError::InvalidState {
            expected: expected.to_string(),
            current: self.state.to_string(),
        }
        .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use ironsmpp_core::error::{DecodeError, EncodeError, SmppError};
    use ironsmpp_core::pdu::BindFields;
    use ironsmpp_core::types::{SeqNum, SystemId};
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Textual stand-in for the wire codec: `"name seq [extra]"`.
    struct LineCodec;

    impl PduCodec for LineCodec {
        fn decode(&self, src: &[u8]) -> std::result::Result<ControlMessage, DecodeError> {
            let text = std::str::from_utf8(src).map_err(DecodeError::from)?;
            let mut parts = text.split(' ');
            let name = parts.next().ok_or(DecodeError::Incomplete)?;
            if name == "garbage" {
                return Err(DecodeError::InvalidCommandLength { length: 3 });
            }
            let seq = SeqNum::new(
                parts
                    .next()
                    .and_then(|s| s.parse().ok())
                    .ok_or(DecodeError::Incomplete)?,
            );
            Ok(match name {
                "enquire_link" => ControlMessage::EnquireLink { seq },
                "enquire_link_resp" => ControlMessage::EnquireLinkResponse { seq },
                "unbind" => ControlMessage::Unbind { seq },
                "unbind_resp" => ControlMessage::UnbindResponse {
                    seq,
                    status: CommandStatus::OK,
                },
                "generic_nack" => ControlMessage::GenericNack {
                    seq,
                    error_code: CommandStatus::new(
                        parts.next().and_then(|s| s.parse().ok()).unwrap_or(0),
                    ),
                },
                "bind_transceiver_resp" => ControlMessage::BindResponse {
                    seq,
                    status: CommandStatus::OK,
                    system_id: None,
                },
                _ => ControlMessage::Unrecognized {
                    seq,
                    command_id: 0x0000_0103,
                },
            })
        }

        fn encode(&self, message: &ControlMessage) -> std::result::Result<Bytes, EncodeError> {
            Ok(Bytes::from(format!(
                "{} {}",
                message.name(),
                message.sequence_number()
            )))
        }
    }

    #[derive(Clone, Default)]
    struct FakeTransport {
        sent: Rc<RefCell<Vec<String>>>,
        close_calls: Rc<Cell<usize>>,
        error_state: Rc<Cell<bool>>,
    }

    impl Transport for FakeTransport {
        fn send(&mut self, bytes: &[u8]) {
            self.sent
                .borrow_mut()
                .push(String::from_utf8_lossy(bytes).into_owned());
        }

        fn close(&mut self) {
            self.close_calls.set(self.close_calls.get() + 1);
        }

        fn is_in_error_state(&self) -> bool {
            self.error_state.get()
        }
    }

    #[derive(Clone, Default)]
    struct RecordingHandler {
        bound: Rc<Cell<usize>>,
        closed: Rc<RefCell<Vec<CloseReason>>>,
        forwarded: Rc<RefCell<Vec<ControlMessage>>>,
    }

    impl SessionHandler for RecordingHandler {
        fn on_bound(&mut self) {
            self.bound.set(self.bound.get() + 1);
        }

        fn on_message(&mut self, message: &ControlMessage) {
            self.forwarded.borrow_mut().push(message.clone());
        }

        fn on_closed(&mut self, reason: &CloseReason) {
            self.closed.borrow_mut().push(reason.clone());
        }
    }

    type TestSession = Session<FakeTransport, LineCodec, RecordingHandler>;

    fn bind_fields() -> BindFields {
        BindFields::new(SystemId::new("esme").unwrap(), "secret")
    }

    fn new_session(config: SessionConfig) -> (TestSession, FakeTransport, RecordingHandler) {
        let transport = FakeTransport::default();
        let handler = RecordingHandler::default();
        let session = Session::new("test", config, transport.clone(), LineCodec, handler.clone())
            .expect("valid config");
        (session, transport, handler)
    }

    fn bound_session() -> (TestSession, FakeTransport, RecordingHandler) {
        let config = SessionConfig::initiator(bind_fields())
            .with_enquire_link_interval(Duration::from_secs(30));
        let (mut session, transport, handler) = new_session(config);
        session.bind_completed().unwrap();
        (session, transport, handler)
    }

    #[test]
    fn test_bind_completion_transitions_to_bound() {
        // scenario A: initiator, interval=30s, host signals bind completion
        let config = SessionConfig::initiator(bind_fields())
            .with_enquire_link_interval(Duration::from_secs(30));
        let (mut session, _transport, handler) = new_session(config);

        assert_eq!(session.state(), SessionState::Initial);
        assert_eq!(session.keepalive_interval(), Some(Duration::from_secs(30)));

        session.bind_completed().unwrap();
        assert_eq!(session.state(), SessionState::Bound);
        assert_eq!(handler.bound.get(), 1);

        // a second completion is out of sequence
        assert!(session.bind_completed().is_err());
    }

    #[test]
    fn test_initiator_without_bind_rejected_at_construction() {
        let transport = FakeTransport::default();
        let result: Result<TestSession> = Session::new(
            "test",
            SessionConfig::new(SessionRole::Initiator),
            transport,
            LineCodec,
            RecordingHandler::default(),
        );
        assert!(matches!(
            result,
            Err(SmppError::Session(SessionError::Configuration(_)))
        ));
    }

    #[test]
    fn test_send_bind_request_allocates_first_seq() {
        let config = SessionConfig::initiator(bind_fields());
        let (mut session, transport, _handler) = new_session(config);

        session.send_bind_request().unwrap();
        assert_eq!(*transport.sent.borrow(), ["bind_transceiver 1"]);
        assert_eq!(session.state(), SessionState::Initial);

        // responders never originate a bind
        let (mut responder, _, _) = new_session(SessionConfig::responder());
        assert!(responder.send_bind_request().is_err());
    }

    #[test]
    fn test_enquire_link_answered_with_same_seq() {
        // scenario B
        let (mut session, transport, _handler) = bound_session();

        session.ingest(b"enquire_link 7").unwrap();
        assert_eq!(*transport.sent.borrow(), ["enquire_link_resp 7"]);
        assert_eq!(session.state(), SessionState::Bound);
    }

    #[test]
    fn test_enquire_link_answered_in_initial_state() {
        let (mut session, transport, _handler) = new_session(SessionConfig::responder());

        session.ingest(b"enquire_link 3").unwrap();
        assert_eq!(*transport.sent.borrow(), ["enquire_link_resp 3"]);
        assert_eq!(session.state(), SessionState::Initial);
    }

    #[test]
    fn test_enquire_link_resp_is_a_nop() {
        let (mut session, transport, _handler) = bound_session();

        session.ingest(b"enquire_link_resp 4").unwrap();
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(session.state(), SessionState::Bound);
    }

    #[test]
    fn test_local_unbind_roundtrip() {
        // scenario C: unbind -> Unbound, unbind_resp -> Closed
        let (mut session, transport, handler) = bound_session();

        session.send_unbind().unwrap();
        assert_eq!(*transport.sent.borrow(), ["unbind 1"]);
        assert_eq!(session.state(), SessionState::Unbound);

        // only one outstanding local unbind
        assert!(session.send_unbind().is_err());

        session.ingest(b"unbind_resp 1").unwrap();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(transport.close_calls.get(), 1);
        assert!(!session.keepalive_active());
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::UnbindComplete]
        );

        // a second unbind_resp after Closed has no effect
        session.ingest(b"unbind_resp 1").unwrap();
        assert_eq!(transport.close_calls.get(), 1);
        assert_eq!(handler.closed.borrow().len(), 1);
    }

    #[test]
    fn test_peer_unbind_answered_synchronously() {
        let (mut session, transport, _handler) = bound_session();

        session.ingest(b"unbind 5").unwrap();
        assert_eq!(*transport.sent.borrow(), ["unbind_resp 5"]);
        assert_eq!(session.state(), SessionState::Unbound);
    }

    #[test]
    fn test_unbind_out_of_sequence_is_fatal() {
        let (mut session, _transport, handler) = bound_session();

        session.send_unbind().unwrap();
        session.ingest(b"unbind 9").unwrap();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::ProtocolViolation]
        );
    }

    #[test]
    fn test_generic_nack_closes_once() {
        // scenario D
        let (mut session, transport, handler) = bound_session();

        session.ingest(b"generic_nack 2 11").unwrap();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(!session.keepalive_active());
        assert_eq!(transport.close_calls.get(), 1);
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::PeerNack {
                error_code: CommandStatus::new(11)
            }]
        );

        // idempotent on repetition
        session.ingest(b"generic_nack 3 11").unwrap();
        assert_eq!(transport.close_calls.get(), 1);
        assert_eq!(handler.closed.borrow().len(), 1);
    }

    #[test]
    fn test_unrecognized_pdu_closes_without_reply() {
        // scenario E
        let (mut session, transport, handler) = bound_session();

        session.ingest(b"alert_notification 6").unwrap();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(!session.keepalive_active());
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::ProtocolViolation]
        );
    }

    #[test]
    fn test_decode_failure_is_fatal_and_propagated() {
        let (mut session, transport, handler) = bound_session();

        let result = session.ingest(b"garbage");
        assert!(matches!(result, Err(SmppError::Decode(_))));
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(transport.close_calls.get(), 1);
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::DecodeFailure]
        );
    }

    #[test]
    fn test_bind_traffic_forwarded_to_handler() {
        let config = SessionConfig::initiator(bind_fields());
        let (mut session, transport, handler) = new_session(config);

        session.ingest(b"bind_transceiver_resp 1").unwrap();
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(session.state(), SessionState::Initial);
        assert_eq!(handler.forwarded.borrow().len(), 1);
        assert_eq!(
            handler.forwarded.borrow()[0].sequence_number(),
            SeqNum::new(1)
        );
    }

    #[test]
    fn test_tick_sends_probe_with_fresh_seq() {
        let (mut session, transport, _handler) = bound_session();

        session.keepalive_tick();
        session.keepalive_tick();
        assert_eq!(
            *transport.sent.borrow(),
            ["enquire_link 1", "enquire_link 2"]
        );
        assert_eq!(session.state(), SessionState::Bound);
    }

    #[test]
    fn test_tick_skips_while_unbound() {
        let (mut session, transport, _handler) = bound_session();

        session.send_unbind().unwrap();
        transport.sent.borrow_mut().clear();

        session.keepalive_tick();
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(session.state(), SessionState::Unbound);
        // scheduler stays alive for the next tick
        assert!(session.keepalive_active());
    }

    #[test]
    fn test_tick_stops_on_transport_error() {
        let (mut session, transport, handler) = bound_session();

        transport.error_state.set(true);
        session.keepalive_tick();
        assert_eq!(session.state(), SessionState::Closed);
        assert!(!session.keepalive_active());
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::TransportFailure]
        );

        // no further ticks do anything
        session.keepalive_tick();
        assert!(transport.sent.borrow().is_empty());
        assert_eq!(handler.closed.borrow().len(), 1);
    }

    #[test]
    fn test_tick_without_keepalive_configured() {
        let (mut session, transport, _handler) = new_session(SessionConfig::responder());

        session.keepalive_tick();
        assert!(transport.sent.borrow().is_empty());
        assert!(!session.keepalive_active());
    }

    #[test]
    fn test_liveness_hook_gates_probe() {
        let alive = Rc::new(Cell::new(false));
        let hook_alive = Rc::clone(&alive);
        let config = SessionConfig::initiator(bind_fields())
            .with_enquire_link_interval(Duration::from_secs(30))
            .with_liveness_hook(move || hook_alive.get());
        let (mut session, transport, _handler) = new_session(config);
        session.bind_completed().unwrap();

        session.keepalive_tick();
        assert!(transport.sent.borrow().is_empty());
        assert!(session.keepalive_active());

        alive.set(true);
        session.keepalive_tick();
        assert_eq!(*transport.sent.borrow(), ["enquire_link 1"]);
    }

    #[test]
    fn test_host_surfaced_transport_error() {
        let (mut session, transport, handler) = bound_session();

        session.on_transport_error();
        assert_eq!(session.state(), SessionState::Closed);
        assert_eq!(transport.close_calls.get(), 1);
        assert_eq!(
            *handler.closed.borrow(),
            [CloseReason::TransportFailure]
        );

        session.on_transport_error();
        assert_eq!(handler.closed.borrow().len(), 1);
    }
}
