/// Surface appearance applied once at build time.
///
/// Defaults mirror a stock Phong material: white base, no emissive glow,
/// shininess 30.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub color: String,
    pub emissive: String,
    pub emissive_intensity: f64,
    pub shininess: f64,
    /// Unlit materials ignore lighting entirely (used for the marker).
    pub unlit: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            emissive: "#000000".to_string(),
            emissive_intensity: 1.0,
            shininess: 30.0,
            unlit: false,
        }
    }
}

impl Material {
    /// Flat, unlit material of a single color.
    pub fn basic(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            unlit: true,
            ..Self::default()
        }
    }

    /// Resolves an optional-field style against the defaults.
    pub fn from_style(style: &GlobeStyle) -> Self {
        let mut material = Self::default();
        if let Some(color) = &style.color {
            material.color = color.clone();
        }
        if let Some(emissive) = &style.emissive {
            material.emissive = emissive.clone();
        }
        if let Some(intensity) = style.emissive_intensity {
            material.emissive_intensity = intensity;
        }
        if let Some(shininess) = style.shininess {
            material.shininess = shininess;
        }
        material
    }
}

/// Material configuration for the globe, all fields optional.
///
/// Read once when the globe is built; later changes have no effect unless the
/// scene is rebuilt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GlobeStyle {
    pub color: Option<String>,
    pub emissive: Option<String>,
    pub emissive_intensity: Option<f64>,
    pub shininess: Option<f64>,
}
