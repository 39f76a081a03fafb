//! Element dimensions, palette and placement grid.
//!
//! Every field has a default, so a YAML document only needs to name what it
//! overrides.

use gp_core::{Point, Real, Rgb};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NetworkConfig {
    pub gas_source: GasSourceStyle,
    pub switch: SwitchStyle,
    pub connector: ConnectorStyle,
    pub pipeline: PipelineStyle,
    pub grid: GridLayout,
}

/// Gas sources are boxes anchored at their top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GasSourceStyle {
    pub width: Real,
    pub height: Real,
    pub color: Rgb,
    pub spacing: Real,
    pub origin: Point,
}

impl Default for GasSourceStyle {
    fn default() -> Self {
        Self {
            width: 40.0,
            height: 40.0,
            color: Rgb::from_hex(0x3498db),
            spacing: 60.0,
            origin: Point::new(100.0, 100.0),
        }
    }
}

/// Switches are circles centred on their position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwitchStyle {
    pub radius: Real,
    pub color_off: Rgb,
    pub color_on: Rgb,
    pub spacing: Real,
    pub origin: Point,
}

impl Default for SwitchStyle {
    fn default() -> Self {
        Self {
            radius: 20.0,
            color_off: Rgb::from_hex(0x2c3e50),
            color_on: Rgb::from_hex(0x27ae60),
            spacing: 60.0,
            origin: Point::new(200.0, 100.0),
        }
    }
}

/// Connectors are diamonds centred on their position; `size` is the diagonal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectorStyle {
    pub size: Real,
    pub color: Rgb,
    pub color_active: Rgb,
    pub spacing: Real,
    pub origin: Point,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            size: 30.0,
            color: Rgb::from_hex(0x95a5a6),
            color_active: Rgb::from_hex(0x27ae60),
            spacing: 60.0,
            origin: Point::new(300.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineStyle {
    pub color: Rgb,
    pub active_color: Rgb,
    /// Maximum pointer distance from the pipe's centre line that still hits it.
    pub hit_distance: Real,
}

impl Default for PipelineStyle {
    fn default() -> Self {
        Self {
            color: Rgb::from_hex(0x34495e),
            active_color: Rgb::from_hex(0x2ecc71),
            hit_distance: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLayout {
    pub elements_per_row: u32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            elements_per_row: 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_yaml_keeps_defaults() {
        let yaml = "pipeline:\n  active_color: '#ff0000'\ngrid:\n  elements_per_row: 3\n";
        let cfg: NetworkConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.pipeline.active_color, Rgb(0xff, 0, 0));
        assert_eq!(cfg.pipeline.color, PipelineStyle::default().color);
        assert_eq!(cfg.grid.elements_per_row, 3);
        assert_eq!(cfg.switch, SwitchStyle::default());
    }

    #[test]
    fn bad_color_is_rejected() {
        let yaml = "switch:\n  color_on: green\n";
        assert!(serde_yaml::from_str::<NetworkConfig>(yaml).is_err());
    }
}
