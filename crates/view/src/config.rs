use scene::components::GlobeStyle;
use serde::{Deserialize, Serialize};

/// The recognized configuration surface for the globe view.
///
/// Material fields are read once when the globe is built; control fields are
/// applied at mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewConfig {
    #[serde(default = "default_auto_rotate")]
    pub auto_rotate: bool,

    #[serde(default = "default_auto_rotate_speed")]
    pub auto_rotate_speed: f64,

    #[serde(default)]
    pub globe_color: Option<String>,

    #[serde(default)]
    pub emissive: Option<String>,

    #[serde(default)]
    pub emissive_intensity: Option<f64>,

    #[serde(default)]
    pub shininess: Option<f64>,
}

fn default_auto_rotate() -> bool {
    true
}

fn default_auto_rotate_speed() -> f64 {
    1.0
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            auto_rotate: default_auto_rotate(),
            auto_rotate_speed: default_auto_rotate_speed(),
            globe_color: None,
            emissive: None,
            emissive_intensity: None,
            shininess: None,
        }
    }
}

impl ViewConfig {
    pub fn style(&self) -> GlobeStyle {
        GlobeStyle {
            color: self.globe_color.clone(),
            emissive: self.emissive.clone(),
            emissive_intensity: self.emissive_intensity,
            shininess: self.shininess,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ViewConfig;

    #[test]
    fn defaults_enable_auto_rotate() {
        let config = ViewConfig::default();
        assert!(config.auto_rotate);
        assert_eq!(config.auto_rotate_speed, 1.0);
        assert!(config.globe_color.is_none());
    }

    #[test]
    fn deserializes_partial_json() {
        let config: ViewConfig =
            serde_json::from_str(r##"{ "autoRotateSpeed": 2.5, "emissive": "#062056" }"##)
                .expect("parse config");
        assert!(config.auto_rotate);
        assert_eq!(config.auto_rotate_speed, 2.5);
        assert_eq!(config.style().emissive.as_deref(), Some("#062056"));
        assert!(config.style().shininess.is_none());
    }
}
