//! Default grid placement for newly created elements.

use gp_core::Point;

use crate::config::NetworkConfig;
use crate::element::ElementKind;

/// Per-kind creation counters laying new elements out in rows.
///
/// Counters only ever grow: deleting an element does not free its grid cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    created: [u32; 3],
}

impl Placement {
    /// Position for the next element of `kind`, advancing its counter.
    pub fn next(&mut self, kind: ElementKind, config: &NetworkConfig) -> Point {
        let counter = &mut self.created[Self::slot(kind)];
        let n = *counter;
        *counter += 1;

        let (origin, spacing) = match kind {
            ElementKind::GasSource => (config.gas_source.origin, config.gas_source.spacing),
            ElementKind::Switch => (config.switch.origin, config.switch.spacing),
            ElementKind::Connector => (config.connector.origin, config.connector.spacing),
        };
        let per_row = config.grid.elements_per_row.max(1);
        let col = f64::from(n % per_row);
        let row = f64::from(n / per_row);
        origin.offset(col * spacing, row * spacing)
    }

    pub fn created(&self, kind: ElementKind) -> u32 {
        self.created[Self::slot(kind)]
    }

    fn slot(kind: ElementKind) -> usize {
        match kind {
            ElementKind::GasSource => 0,
            ElementKind::Switch => 1,
            ElementKind::Connector => 2,
        }
    }
}
