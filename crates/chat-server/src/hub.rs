//! Fan-out of server frames to every connected client.

use orchestrator::{async_trait, TracingObserver, TurnEvent, TurnObserver};
use tokio::sync::broadcast;
use tracing::debug;

use crate::frames::{ServerFrame, TOOL_STATUS_TEXT};

/// Frames buffered per subscriber before it starts lagging.
const HUB_CAPACITY: usize = 64;

/// Broadcast channel shared by all WebSocket connections.
#[derive(Clone)]
pub struct ChatHub {
    sender: broadcast::Sender<ServerFrame>,
}

impl ChatHub {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Send a frame to every connected client.
    pub fn broadcast(&self, frame: ServerFrame) {
        // No subscribers is fine: nobody is connected.
        let delivered = self.sender.send(frame).unwrap_or(0);
        debug!("Broadcast frame to {} clients", delivered);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerFrame> {
        self.sender.subscribe()
    }

    pub fn client_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for ChatHub {
    fn default() -> Self {
        Self::new(HUB_CAPACITY)
    }
}

/// Turn observer that logs every event and tells clients when a weather
/// lookup starts.
pub struct BroadcastObserver {
    hub: ChatHub,
    logger: TracingObserver,
}

impl BroadcastObserver {
    pub fn new(hub: ChatHub) -> Self {
        Self {
            hub,
            logger: TracingObserver,
        }
    }
}

#[async_trait]
impl TurnObserver for BroadcastObserver {
    async fn on_event(&self, event: &TurnEvent) {
        self.logger.on_event(event).await;

        if let TurnEvent::ToolDispatched { .. } = event {
            self.hub.broadcast(ServerFrame::status(TOOL_STATUS_TEXT));
        }
    }
}
