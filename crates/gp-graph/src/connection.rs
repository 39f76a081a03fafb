//! Pipelines between elements.

use gp_core::{ElementId, Rgb};

/// An undirected pipeline joining two distinct elements.
///
/// Endpoints are fixed at construction; only the gas annotation and display
/// color change afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    start: ElementId,
    end: ElementId,
    has_gas: bool,
    color: Rgb,
}

impl Connection {
    pub(crate) fn new(start: ElementId, end: ElementId, color: Rgb) -> Self {
        debug_assert_ne!(start, end);
        Self {
            start,
            end,
            has_gas: false,
            color,
        }
    }

    pub fn start(&self) -> ElementId {
        self.start
    }

    pub fn end(&self) -> ElementId {
        self.end
    }

    pub fn endpoints(&self) -> [ElementId; 2] {
        [self.start, self.end]
    }

    pub fn is_connected_to(&self, element: ElementId) -> bool {
        self.start == element || self.end == element
    }

    /// The endpoint across from `element`, or `None` if `element` is not an endpoint.
    pub fn opposite(&self, element: ElementId) -> Option<ElementId> {
        if element == self.start {
            Some(self.end)
        } else if element == self.end {
            Some(self.start)
        } else {
            None
        }
    }

    pub fn has_gas(&self) -> bool {
        self.has_gas
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Set the gas annotation together with the matching display color.
    pub fn mark(&mut self, has_gas: bool, color: Rgb) {
        self.has_gas = has_gas;
        self.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gp_core::Id;

    fn eid(slot: u32) -> ElementId {
        ElementId::from_raw(Id::from_slot(slot))
    }

    #[test]
    fn endpoints_are_unordered() {
        let c = Connection::new(eid(0), eid(1), Rgb(0, 0, 0));
        assert!(c.is_connected_to(eid(0)));
        assert!(c.is_connected_to(eid(1)));
        assert!(!c.is_connected_to(eid(2)));
        assert_eq!(c.opposite(eid(0)), Some(eid(1)));
        assert_eq!(c.opposite(eid(1)), Some(eid(0)));
        assert_eq!(c.opposite(eid(2)), None);
    }

    #[test]
    fn mark_sets_flag_and_color() {
        let mut c = Connection::new(eid(0), eid(1), Rgb(0, 0, 0));
        assert!(!c.has_gas());
        c.mark(true, Rgb(0, 255, 0));
        assert!(c.has_gas());
        assert_eq!(c.color(), Rgb(0, 255, 0));
    }
}
