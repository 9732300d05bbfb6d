use std::time::Duration;

use futures_util::StreamExt;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{info, warn};

use streaming::events::FeedMessage;

const RECONNECT_DELAY: Duration = Duration::from_secs(5);

/// Reads the position feed and forwards decoded events in arrival order.
///
/// Reconnects with a fixed delay until the receiving side is dropped.
/// Connectivity transitions are forwarded as feed events so the consumer
/// mirrors them; undecodable frames are logged and skipped here.
pub async fn run_feed(url: String, tx: mpsc::Sender<FeedMessage>) {
    loop {
        match connect_async(url.as_str()).await {
            Ok((stream, _)) => {
                info!("feed connected: {url}");
                if tx.send(FeedMessage::Connected).await.is_err() {
                    return;
                }

                let (_, mut frames) = stream.split();
                while let Some(frame) = frames.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            match serde_json::from_str::<FeedMessage>(&text) {
                                Ok(msg) => {
                                    if tx.send(msg).await.is_err() {
                                        return;
                                    }
                                }
                                Err(err) => warn!("undecodable feed frame: {err}"),
                            }
                        }
                        Ok(Message::Close(_)) => break,
                        Ok(_) => {}
                        Err(err) => {
                            warn!("feed read failed: {err}");
                            break;
                        }
                    }
                }

                if tx.send(FeedMessage::Disconnected).await.is_err() {
                    return;
                }
            }
            Err(err) => {
                let msg = FeedMessage::ConnectionError {
                    message: err.to_string(),
                };
                if tx.send(msg).await.is_err() {
                    return;
                }
            }
        }

        tokio::time::sleep(RECONNECT_DELAY).await;
    }
}
