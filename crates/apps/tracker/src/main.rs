use std::env;
use std::time::Duration;

use foundation::geo::GeoPosition;
use runtime::event_bus::{KIND_FEED, KIND_SCENE};
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use view::{GlobeView, ViewConfig};

mod feed;
mod fetch;

/// Redraw cadence of the headless render loop.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let feed_url =
        env::var("TRACKER_FEED_URL").unwrap_or_else(|_| "ws://127.0.0.1:5000/stream".to_string());
    let boundary_url = env::var("TRACKER_BOUNDARY_URL").unwrap_or_else(|_| {
        "https://raw.githubusercontent.com/vasturiano/three-globe/master/example/country-polygons/ne_110m_admin_0_countries.geojson"
            .to_string()
    });

    let config = load_config();
    let mut globe_view = GlobeView::mount(&config);
    info!("view mounted (auto-rotate: {})", config.auto_rotate);

    let http = reqwest::Client::new();
    let mut dataset_task = tokio::spawn({
        let http = http.clone();
        let url = boundary_url.clone();
        async move { fetch::fetch_boundary(&http, &url).await }
    });
    let mut dataset_done = false;

    let (feed_tx, mut feed_rx) = mpsc::channel(64);
    tokio::spawn(feed::run_feed(feed_url, feed_tx));

    let mut frame_tick = tokio::time::interval(FRAME_INTERVAL);
    let mut last_readout: Option<GeoPosition> = None;

    loop {
        tokio::select! {
            _ = frame_tick.tick() => {
                let _ = globe_view.redraw();
                for event in globe_view.drain_events() {
                    match event.kind {
                        KIND_SCENE | KIND_FEED => {
                            info!(kind = event.kind, frame = event.frame_index, "{}", event.message);
                        }
                        _ => warn!(kind = event.kind, frame = event.frame_index, "{}", event.message),
                    }
                }
            }
            result = &mut dataset_task, if !dataset_done => {
                dataset_done = true;
                match result {
                    Ok(Ok(dataset)) => {
                        info!("boundary dataset loaded: {} features", dataset.features.len());
                        globe_view.on_dataset(&dataset);
                    }
                    Ok(Err(err)) => globe_view.on_dataset_error(&err.to_string()),
                    Err(err) => globe_view.on_dataset_error(&format!("fetch task failed: {err}")),
                }
            }
            msg = feed_rx.recv() => {
                let Some(msg) = msg else {
                    error!("feed channel closed");
                    break;
                };
                globe_view.on_feed_message(msg);
                if globe_view.last_position() != last_readout.as_ref() {
                    last_readout = globe_view.last_position().cloned();
                    if let Some(pos) = &last_readout {
                        info!(
                            latitude = pos.latitude,
                            longitude = pos.longitude,
                            region = %pos.region,
                            "position update"
                        );
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("shutting down");
                break;
            }
        }
    }

    globe_view.unmount();
}

fn load_config() -> ViewConfig {
    let Ok(path) = env::var("TRACKER_CONFIG") else {
        return ViewConfig::default();
    };
    let text = match std::fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            warn!("unreadable config {path}: {err}");
            return ViewConfig::default();
        }
    };
    match serde_json::from_str(&text) {
        Ok(config) => config,
        Err(err) => {
            warn!("invalid config {path}: {err}");
            ViewConfig::default()
        }
    }
}
