//! Editor configuration: hit tolerance, connection and snapping settings.

use crate::error::HitResult;
use crate::shapes::ShapeStyle;
use crate::snap::{GridSnapMode, LineSnapMode, LineSnapTarget};
use serde::{Deserialize, Serialize};

/// Default pointer tolerance in screen pixels.
pub const DEFAULT_HIT_RADIUS: f64 = 6.0;

/// Default grid cell size on both axes.
pub const DEFAULT_GRID_SIZE: f64 = 15.0;

/// Default line-snap distance threshold.
pub const DEFAULT_SNAP_THRESHOLD: f64 = 10.0;

/// Grid snapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSnapSettings {
    pub enabled: bool,
    /// Axes that snap.
    pub mode: GridSnapMode,
    /// Cell width.
    pub size_x: f64,
    /// Cell height.
    pub size_y: f64,
    /// Draw guides through the snapped point.
    pub enable_guides: bool,
    pub guide_style: ShapeStyle,
}

impl Default for GridSnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: GridSnapMode::all(),
            size_x: DEFAULT_GRID_SIZE,
            size_y: DEFAULT_GRID_SIZE,
            enable_guides: true,
            guide_style: ShapeStyle::guide(),
        }
    }
}

/// Line snapping configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSnapSettings {
    pub enabled: bool,
    /// Snap modes to try, in priority order.
    pub mode: LineSnapMode,
    /// Which lines are snapped to.
    pub target: LineSnapTarget,
    pub threshold: f64,
    pub enable_guides: bool,
    pub guide_style: ShapeStyle,
}

impl Default for LineSnapSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            mode: LineSnapMode::all(),
            target: LineSnapTarget::all(),
            threshold: DEFAULT_SNAP_THRESHOLD,
            enable_guides: true,
            guide_style: ShapeStyle::guide(),
        }
    }
}

/// All editor settings the hit-test front door consults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Pointer tolerance in screen pixels; divided by the zoom before use.
    pub hit_radius: f64,
    /// Reuse existing points when drawing instead of creating coincident ones.
    pub connect_points: bool,
    pub grid: GridSnapSettings,
    pub line: LineSnapSettings,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            hit_radius: DEFAULT_HIT_RADIUS,
            connect_points: true,
            grid: GridSnapSettings::default(),
            line: LineSnapSettings::default(),
        }
    }
}

impl EditorSettings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> HitResult<Self> {
        let settings = serde_json::from_str(json)?;
        log::debug!("Loaded editor settings: {settings:?}");
        Ok(settings)
    }

    /// Serialize settings to pretty-printed JSON.
    pub fn to_json(&self) -> HitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HitTestError;

    #[test]
    fn test_defaults() {
        let settings = EditorSettings::default();
        assert!((settings.hit_radius - DEFAULT_HIT_RADIUS).abs() < f64::EPSILON);
        assert!(settings.connect_points);
        assert_eq!(settings.grid.mode, GridSnapMode::HORIZONTAL | GridSnapMode::VERTICAL);
        assert!((settings.grid.size_x - 15.0).abs() < f64::EPSILON);
        assert!(settings.line.mode.contains(LineSnapMode::POINT | LineSnapMode::NEAREST));
        assert_eq!(settings.line.target, LineSnapTarget::GUIDES | LineSnapTarget::SHAPES);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = EditorSettings::from_json(r#"{ "hit_radius": 4.0, "grid": { "size_x": 20.0 } }"#).unwrap();
        assert!((settings.hit_radius - 4.0).abs() < f64::EPSILON);
        assert!((settings.grid.size_x - 20.0).abs() < f64::EPSILON);
        assert!((settings.grid.size_y - DEFAULT_GRID_SIZE).abs() < f64::EPSILON);
        assert!(settings.line.enabled);
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = EditorSettings::default();
        settings.line.mode = LineSnapMode::POINT | LineSnapMode::MIDDLE;
        settings.grid.enabled = false;
        let json = settings.to_json().unwrap();
        assert_eq!(EditorSettings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = EditorSettings::from_json("{ hit_radius: ");
        assert!(matches!(result, Err(HitTestError::Settings(_))));
    }
}
