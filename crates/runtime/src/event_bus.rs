use crate::frame::Frame;

/// Event kind for asset loading failures.
pub const KIND_ASSET: &str = "asset";
/// Event kind for feed payload and connection errors.
pub const KIND_STREAM: &str = "stream";
/// Event kind for connectivity transitions.
pub const KIND_FEED: &str = "feed";
/// Event kind for scene lifecycle transitions.
pub const KIND_SCENE: &str = "scene";

/// A structured observability event.
///
/// Degraded states (lost dataset, discarded updates, connection drops) are
/// reported here rather than through return values; nothing in the scene
/// treats them as fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub frame_index: u64,
    pub kind: &'static str,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct EventBus {
    events: Vec<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn emit(&mut self, frame: Frame, kind: &'static str, message: impl Into<String>) {
        self.events.push(Event {
            frame_index: frame.index,
            kind,
            message: message.into(),
        });
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Takes all accumulated events, leaving the bus empty.
    ///
    /// The host drains once per redraw and forwards to its logger.
    pub fn drain(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }
}
