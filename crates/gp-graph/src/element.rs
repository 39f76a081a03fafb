//! Network elements: gas sources, switches and connectors.
//!
//! All per-variant behaviour (geometry, hit testing, blocking) is a `match`
//! on [`ElementKind`] in this file, so the propagation rule in the
//! simulation reads a single predicate, [`Element::blocks_flow`].

use gp_core::{Point, Rgb};
use serde::{Deserialize, Serialize};

use crate::config::NetworkConfig;

/// Variant tag of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Origin of gas; always gas-present.
    GasSource,
    /// Valve that blocks propagation while off.
    Switch,
    /// Passive junction.
    Connector,
}

impl ElementKind {
    pub const ALL: [ElementKind; 3] = [
        ElementKind::GasSource,
        ElementKind::Switch,
        ElementKind::Connector,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ElementKind::GasSource => "gas_source",
            ElementKind::Switch => "switch",
            ElementKind::Connector => "connector",
        }
    }
}

/// A vertex of the pipeline network.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    kind: ElementKind,
    position: Point,
    has_gas: bool,
    /// Only meaningful for switches; always `false` otherwise.
    is_on: bool,
    color: Rgb,
}

impl Element {
    /// Create an element in its initial state: switches start off, only
    /// sources carry gas.
    pub fn new(kind: ElementKind, position: Point, config: &NetworkConfig) -> Self {
        let color = match kind {
            ElementKind::GasSource => config.gas_source.color,
            ElementKind::Switch => config.switch.color_off,
            ElementKind::Connector => config.connector.color,
        };
        Self {
            kind,
            position,
            has_gas: kind == ElementKind::GasSource,
            is_on: false,
            color,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn is_source(&self) -> bool {
        self.kind == ElementKind::GasSource
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn has_gas(&self) -> bool {
        self.has_gas
    }

    /// Set the derived gas flag. Sources ignore this and stay gas-present.
    pub fn set_has_gas(&mut self, has_gas: bool) {
        if !self.is_source() {
            self.has_gas = has_gas;
        }
    }

    /// Switch state; `None` for non-switch elements.
    pub fn is_on(&self) -> Option<bool> {
        (self.kind == ElementKind::Switch).then_some(self.is_on)
    }

    /// True if gas reaching this element must not continue through it.
    pub fn blocks_flow(&self) -> bool {
        match self.kind {
            ElementKind::Switch => !self.is_on,
            ElementKind::GasSource | ElementKind::Connector => false,
        }
    }

    /// Flip a switch and repaint it. Returns the new state, or `None` if this
    /// element is not a switch. Connections are left alone until the next
    /// simulation pass.
    pub fn toggle(&mut self, config: &NetworkConfig) -> Option<bool> {
        if self.kind != ElementKind::Switch {
            return None;
        }
        self.is_on = !self.is_on;
        self.color = if self.is_on {
            config.switch.color_on
        } else {
            config.switch.color_off
        };
        Some(self.is_on)
    }

    /// Stored display color (switches track their on/off color here).
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Color a renderer should fill with; connectors light up while they
    /// carry gas.
    pub fn fill_color(&self, config: &NetworkConfig) -> Rgb {
        match self.kind {
            ElementKind::Connector if self.has_gas => config.connector.color_active,
            _ => self.color,
        }
    }

    /// Point pipelines attach to.
    pub fn center(&self, config: &NetworkConfig) -> Point {
        match self.kind {
            ElementKind::GasSource => self.position.offset(
                config.gas_source.width / 2.0,
                config.gas_source.height / 2.0,
            ),
            ElementKind::Switch | ElementKind::Connector => self.position,
        }
    }

    /// Hit test against the element's drawn footprint.
    pub fn contains(&self, point: Point, config: &NetworkConfig) -> bool {
        let Point { x, y } = self.position;
        match self.kind {
            ElementKind::GasSource => {
                let style = &config.gas_source;
                (x..=x + style.width).contains(&point.x) && (y..=y + style.height).contains(&point.y)
            }
            ElementKind::Switch => {
                let r = config.switch.radius;
                let (dx, dy) = (point.x - x, point.y - y);
                dx * dx + dy * dy <= r * r
            }
            ElementKind::Connector => {
                let half = config.connector.size / 2.0;
                (point.x - x).abs() <= half && (point.y - y).abs() <= half
            }
        }
    }
}
