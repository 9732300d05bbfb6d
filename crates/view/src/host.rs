use formats::boundary::BoundaryDataset;
use formats::overlay::build_globe_from_dataset;
use foundation::geo::GeoPosition;
use foundation::math::ProjectionOffsets;
use runtime::event_bus::{Event, EventBus, KIND_ASSET, KIND_SCENE};
use runtime::frame::Frame;
use scene::World;
use scene::components::GlobeStyle;
use scene::entity::EntityId;
use scene::globe::{GlobeBuilder, GlobeHandle};
use scene::marker::MarkerController;
use streaming::consumer::{ConnectionState, FeedConsumer};
use streaming::events::FeedMessage;

use crate::camera::OrbitControls;
use crate::config::ViewConfig;
use crate::render::{RenderFrame, Renderer};

/// Fixed redraw timestep (seconds).
pub const FRAME_DT_S: f64 = 1.0 / 60.0;

/// The render loop host.
///
/// Owns the camera, the orbit controls and the continuous redraw cycle, and
/// composes the scene initializer, the marker controller and the feed
/// consumer. Lifecycle is Unmounted → Mounted → Unmounted with no
/// intermediate states: `mount` initializes synchronously, `unmount` tears
/// everything down, and late asynchronous results arriving after unmount are
/// ignored through the mount-liveness guard on every entry point.
///
/// The redraw cycle never waits on data: it runs at its own cadence whether
/// or not the dataset has loaded or the feed is alive.
#[derive(Debug)]
pub struct GlobeView {
    mounted: bool,
    frame: Frame,
    world: World,
    globe: GlobeBuilder,
    marker: MarkerController,
    consumer: FeedConsumer,
    controls: OrbitControls,
    bus: EventBus,
    style: GlobeStyle,
}

impl GlobeView {
    pub fn mount(config: &ViewConfig) -> Self {
        Self {
            mounted: true,
            frame: Frame::new(0, FRAME_DT_S),
            world: World::new(),
            globe: GlobeBuilder::new(),
            marker: MarkerController::new(ProjectionOffsets::CALIBRATED),
            consumer: FeedConsumer::new(),
            controls: OrbitControls::new(config.auto_rotate, config.auto_rotate_speed),
            bus: EventBus::new(),
            style: config.style(),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// The boundary dataset finished loading.
    ///
    /// Builds the globe (idempotent) and applies any position that arrived
    /// while the globe was missing. Safe to call more than once; a result
    /// resolving after unmount is ignored.
    pub fn on_dataset(&mut self, dataset: &BoundaryDataset) {
        if !self.mounted {
            return;
        }
        let handle = build_globe_from_dataset(&mut self.globe, &mut self.world, dataset, &self.style);
        self.marker.flush_pending(&mut self.world, handle);
        self.bus.emit(self.frame, KIND_SCENE, "globe built");
    }

    /// The boundary dataset failed to load.
    ///
    /// The globe stays absent and the view keeps running degraded; nothing
    /// is retried here.
    pub fn on_dataset_error(&mut self, message: &str) {
        if !self.mounted {
            return;
        }
        self.bus
            .emit(self.frame, KIND_ASSET, format!("boundary dataset lost: {message}"));
    }

    /// One event from the feed transport, in arrival order.
    pub fn on_feed_message(&mut self, message: FeedMessage) {
        if !self.mounted {
            return;
        }
        if let Some(pos) = self.consumer.on_message(self.frame, &mut self.bus, message) {
            self.marker
                .on_position(&mut self.world, self.globe.handle(), pos);
        }
    }

    /// Advances one redraw cycle and collects the frame to draw.
    ///
    /// Runs regardless of data arrival so user-driven rotation stays smooth.
    pub fn redraw(&mut self) -> RenderFrame {
        if self.mounted {
            self.frame = self.frame.next();
            self.controls.update(self.frame.dt_s);
        }
        Renderer::collect(&self.world, self.controls.camera())
    }

    /// User-driven orbit/zoom input.
    pub fn controls_mut(&mut self) -> &mut OrbitControls {
        &mut self.controls
    }

    /// Presentational state: last accepted position and connectivity.
    pub fn last_position(&self) -> Option<&GeoPosition> {
        self.consumer.last_position()
    }

    pub fn connection(&self) -> &ConnectionState {
        self.consumer.connection()
    }

    pub fn globe_handle(&self) -> Option<GlobeHandle> {
        self.globe.handle()
    }

    pub fn marker_entity(&self) -> Option<EntityId> {
        self.marker.entity()
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Observability events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<Event> {
        self.bus.drain()
    }

    /// Full teardown: render objects released, consumer dropped. Entry
    /// points become no-ops afterwards.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.marker.release(&mut self.world);
        self.globe.release(&mut self.world);
        self.consumer = FeedConsumer::new();
        self.mounted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::GlobeView;
    use crate::config::ViewConfig;
    use formats::boundary::BoundaryDataset;
    use foundation::math::{ProjectionOffsets, project};
    use runtime::event_bus::KIND_ASSET;
    use scene::globe::GLOBE_RADIUS;
    use streaming::events::FeedMessage;
    use serde_json::json;

    fn dataset() -> BoundaryDataset {
        BoundaryDataset::from_geojson_str(
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {},
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [5.0, 10.0], [0.0, 0.0]]]
                    }
                }]
            }"#,
        )
        .expect("dataset")
    }

    fn update(lat: f64, lon: f64) -> FeedMessage {
        FeedMessage::PositionUpdate(json!({ "latitude": lat, "longitude": lon }))
    }

    #[test]
    fn live_feed_moves_one_persistent_marker() {
        let mut view = GlobeView::mount(&ViewConfig::default());

        // A position arriving before the dataset is deferred, not lost.
        view.on_feed_message(update(51.5, 0.0));
        assert!(view.marker_entity().is_none());

        view.on_dataset(&dataset());
        let entity = view.marker_entity().expect("marker after globe build");
        let expected = project(51.5, 0.0, GLOBE_RADIUS, ProjectionOffsets::CALIBRATED);
        assert_eq!(view.world().transform(entity).unwrap().position, expected);

        // A later update moves the same object to the new projected point.
        view.on_feed_message(update(-33.9, 151.2));
        assert_eq!(view.marker_entity().unwrap(), entity);
        let moved = project(-33.9, 151.2, GLOBE_RADIUS, ProjectionOffsets::CALIBRATED);
        assert_eq!(view.world().transform(entity).unwrap().position, moved);

        // Globe + marker, nothing else.
        assert_eq!(view.world().drawables_3d().len(), 2);
    }

    #[test]
    fn two_updates_before_a_redraw_land_on_the_latest() {
        let mut view = GlobeView::mount(&ViewConfig::default());
        view.on_dataset(&dataset());

        view.on_feed_message(update(10.0, 10.0));
        view.on_feed_message(update(20.0, 20.0));
        view.redraw();

        let entity = view.marker_entity().unwrap();
        let expected = project(20.0, 20.0, GLOBE_RADIUS, ProjectionOffsets::CALIBRATED);
        assert_eq!(view.world().transform(entity).unwrap().position, expected);
    }

    #[test]
    fn error_payloads_leave_the_marker_alone() {
        let mut view = GlobeView::mount(&ViewConfig::default());
        view.on_dataset(&dataset());
        view.on_feed_message(update(10.0, 10.0));
        let entity = view.marker_entity().unwrap();
        let before = view.world().transform(entity);

        view.on_feed_message(FeedMessage::PositionUpdate(json!({ "error": "no data" })));

        assert_eq!(view.world().transform(entity), before);
        assert_eq!(view.last_position().unwrap().latitude, 10.0);
    }

    #[test]
    fn repeated_dataset_notifications_build_one_globe() {
        let mut view = GlobeView::mount(&ViewConfig::default());
        view.on_dataset(&dataset());
        view.on_dataset(&dataset());
        assert_eq!(view.world().drawables_3d().len(), 1);
    }

    #[test]
    fn load_failure_degrades_without_a_globe() {
        let mut view = GlobeView::mount(&ViewConfig::default());
        view.on_dataset_error("404 Not Found");

        assert!(view.globe_handle().is_none());
        let events = view.drain_events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, KIND_ASSET);

        // The redraw cycle keeps running.
        let frame = view.redraw();
        assert!(frame.commands.is_empty());
    }

    #[test]
    fn redraw_rotates_only_when_auto_rotate_is_on() {
        let mut spinning = GlobeView::mount(&ViewConfig::default());
        let before = spinning.redraw().camera.position;
        let after = spinning.redraw().camera.position;
        assert_ne!(before, after);

        let mut still = GlobeView::mount(&ViewConfig {
            auto_rotate: false,
            ..ViewConfig::default()
        });
        let before = still.redraw().camera.position;
        let after = still.redraw().camera.position;
        assert_eq!(before, after);
    }

    #[test]
    fn unmount_tears_down_and_guards_late_results() {
        let mut view = GlobeView::mount(&ViewConfig::default());
        view.on_dataset(&dataset());
        view.on_feed_message(update(10.0, 10.0));
        view.unmount();

        assert!(!view.is_mounted());
        assert!(view.world().drawables_3d().is_empty());
        assert!(view.last_position().is_none());

        // A fetch resolving after teardown must not rebuild the scene.
        view.on_dataset(&dataset());
        view.on_feed_message(update(20.0, 20.0));
        assert!(view.globe_handle().is_none());
        assert!(view.world().drawables_3d().is_empty());
    }
}
