use foundation::geo::GeoPosition;
use runtime::event_bus::{EventBus, KIND_FEED, KIND_STREAM};
use runtime::frame::Frame;

use crate::events::{FeedMessage, parse_position};

/// Connectivity snapshot. The transport owns the real connection; the
/// consumer only mirrors transitions, it keeps no history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectionState {
    pub connected: bool,
    pub last_error: Option<String>,
}

/// The single logical consumer of the position feed.
///
/// Events are handled strictly in arrival order with no buffering or
/// deduplication; if several updates land between redraws, last write wins
/// on the shared marker position downstream. Malformed or error-bearing
/// payloads are discarded here and surfaced on the event bus, leaving the
/// last known position untouched.
#[derive(Debug, Default)]
pub struct FeedConsumer {
    state: ConnectionState,
    last_position: Option<GeoPosition>,
}

impl FeedConsumer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handles one feed event, returning the accepted position if the event
    /// carried a valid one.
    pub fn on_message(
        &mut self,
        frame: Frame,
        bus: &mut EventBus,
        message: FeedMessage,
    ) -> Option<GeoPosition> {
        match message {
            FeedMessage::PositionUpdate(payload) => match parse_position(&payload) {
                Ok(pos) => {
                    self.last_position = Some(pos.clone());
                    Some(pos)
                }
                Err(err) => {
                    bus.emit(frame, KIND_STREAM, format!("discarded update: {err}"));
                    None
                }
            },
            FeedMessage::Connected => {
                self.state.connected = true;
                self.state.last_error = None;
                bus.emit(frame, KIND_FEED, "connected");
                None
            }
            FeedMessage::ConnectionError { message } => {
                self.state.last_error = Some(message.clone());
                bus.emit(frame, KIND_STREAM, format!("connection error: {message}"));
                None
            }
            FeedMessage::Disconnected => {
                self.state.connected = false;
                bus.emit(frame, KIND_FEED, "disconnected");
                None
            }
        }
    }

    /// Last accepted position, for presentational state (coordinate readout).
    pub fn last_position(&self) -> Option<&GeoPosition> {
        self.last_position.as_ref()
    }

    pub fn connection(&self) -> &ConnectionState {
        &self.state
    }
}
