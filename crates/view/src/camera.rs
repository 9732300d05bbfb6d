use foundation::math::Vec3;

/// Vertical field of view (degrees).
pub const CAMERA_FOV_DEG: f64 = 50.0;
/// Camera distance from globe center at mount.
pub const INITIAL_DISTANCE: f64 = 600.0;
/// Closest the user may zoom in.
pub const MIN_DISTANCE: f64 = 500.0;
/// Farthest the user may zoom out.
pub const MAX_DISTANCE: f64 = 800.0;

/// Keeps the orbit from flipping over the poles.
const MAX_PITCH_RAD: f64 = std::f64::consts::FRAC_PI_2 - 1e-3;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera3D {
    pub position: Vec3,
    pub target: Vec3,
    pub fov_y_rad: f64,
    pub near: f64,
    pub far: f64,
}

impl Camera3D {
    pub fn look_at(position: Vec3, target: Vec3, fov_y_rad: f64, near: f64, far: f64) -> Self {
        Self {
            position,
            target,
            fov_y_rad,
            near,
            far,
        }
    }
}

/// User-driven orbit and zoom around the globe center.
///
/// Auto-rotation follows the usual orbit-controls convention: speed 2.0 is
/// one revolution per 30 seconds, so the yaw rate is `2π·speed/60` rad/s.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitControls {
    yaw_rad: f64,
    pitch_rad: f64,
    distance: f64,
    min_distance: f64,
    max_distance: f64,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

impl OrbitControls {
    pub fn new(auto_rotate: bool, auto_rotate_speed: f64) -> Self {
        Self {
            yaw_rad: 0.0,
            pitch_rad: 0.0,
            distance: INITIAL_DISTANCE,
            min_distance: MIN_DISTANCE,
            max_distance: MAX_DISTANCE,
            auto_rotate,
            auto_rotate_speed,
        }
    }

    pub fn yaw_rad(&self) -> f64 {
        self.yaw_rad
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Applies a user drag.
    pub fn rotate(&mut self, d_yaw_rad: f64, d_pitch_rad: f64) {
        self.yaw_rad += d_yaw_rad;
        self.pitch_rad = (self.pitch_rad + d_pitch_rad).clamp(-MAX_PITCH_RAD, MAX_PITCH_RAD);
    }

    /// Scales the camera distance, clamped to the configured bounds.
    pub fn zoom_by(&mut self, factor: f64) {
        self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
    }

    /// Advances auto-rotation; called once per redraw.
    pub fn update(&mut self, dt_s: f64) {
        if self.auto_rotate {
            self.yaw_rad += std::f64::consts::TAU * self.auto_rotate_speed / 60.0 * dt_s;
        }
    }

    pub fn camera_position(&self) -> Vec3 {
        let cp = self.pitch_rad.cos();
        Vec3::new(
            self.distance * self.yaw_rad.sin() * cp,
            self.distance * self.pitch_rad.sin(),
            self.distance * self.yaw_rad.cos() * cp,
        )
    }

    pub fn camera(&self) -> Camera3D {
        Camera3D::look_at(
            self.camera_position(),
            Vec3::ZERO,
            CAMERA_FOV_DEG.to_radians(),
            1.0,
            2000.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{INITIAL_DISTANCE, MAX_DISTANCE, MIN_DISTANCE, OrbitControls};

    #[test]
    fn starts_in_front_of_the_globe() {
        let controls = OrbitControls::new(false, 1.0);
        let pos = controls.camera_position();
        assert_eq!(pos.z, INITIAL_DISTANCE);
        assert_eq!(pos.x, 0.0);
        assert_eq!(pos.y, 0.0);
    }

    #[test]
    fn zoom_is_clamped_to_bounds() {
        let mut controls = OrbitControls::new(false, 1.0);
        controls.zoom_by(0.1);
        assert_eq!(controls.distance(), MIN_DISTANCE);
        controls.zoom_by(100.0);
        assert_eq!(controls.distance(), MAX_DISTANCE);
    }

    #[test]
    fn auto_rotate_advances_yaw_at_the_expected_rate() {
        let mut controls = OrbitControls::new(true, 2.0);
        // Speed 2.0 is one revolution per 30 seconds.
        controls.update(30.0);
        assert!((controls.yaw_rad() - std::f64::consts::TAU).abs() < 1e-9);
    }

    #[test]
    fn disabled_auto_rotate_holds_still() {
        let mut controls = OrbitControls::new(false, 1.0);
        controls.update(5.0);
        assert_eq!(controls.yaw_rad(), 0.0);
    }

    #[test]
    fn pitch_never_crosses_the_poles() {
        let mut controls = OrbitControls::new(false, 1.0);
        controls.rotate(0.0, 10.0);
        let pos = controls.camera_position();
        assert!(pos.y < controls.distance());
    }

    #[test]
    fn camera_distance_matches_controls() {
        let mut controls = OrbitControls::new(false, 1.0);
        controls.rotate(0.7, -0.3);
        let pos = controls.camera_position();
        assert!((pos.length() - controls.distance()).abs() < 1e-9);
    }
}
