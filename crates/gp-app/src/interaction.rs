//! Pointer interaction: dragging, switch clicks, drawing and deleting pipes.
//!
//! Input events are translated into [`Command`]s applied through the
//! session, so the interaction layer never mutates the network directly.

use gp_core::{ElementId, Point};
use gp_graph::ElementKind;

use crate::command::{Command, Outcome};
use crate::session::Session;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    element: ElementId,
    /// Pointer position relative to the element's anchor at grab time.
    grab: (f64, f64),
}

/// A pipeline being drawn: from the start element's centre to the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionPreview {
    pub start: ElementId,
    pub from: Point,
    pub to: Option<Point>,
}

#[derive(Debug, Clone, Default)]
pub struct Interaction {
    connecting: bool,
    drag: Option<Drag>,
    connection_start: Option<ElementId>,
    pointer: Option<Point>,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    pub fn set_connection_mode(&mut self, connecting: bool) {
        self.connecting = connecting;
        if !connecting {
            self.connection_start = None;
        }
    }

    /// Flip connection mode; returns the new mode.
    pub fn toggle_connection_mode(&mut self) -> bool {
        self.set_connection_mode(!self.connecting);
        self.connecting
    }

    /// Element currently being dragged.
    pub fn dragging(&self) -> Option<ElementId> {
        self.drag.map(|d| d.element)
    }

    /// Primary button pressed.
    ///
    /// In connection mode this records the element under the pointer as the
    /// pipe's start. Otherwise it grabs that element for dragging, and a
    /// pressed switch is toggled.
    pub fn pointer_down(&mut self, session: &mut Session, at: Point) -> Option<Outcome> {
        self.pointer = Some(at);
        let hit = session.network().element_at(at)?;

        if self.connecting {
            self.connection_start = Some(hit);
            return None;
        }

        let element = session.network().element(hit)?;
        let anchor = element.position();
        let is_switch = element.kind() == ElementKind::Switch;
        self.drag = Some(Drag {
            element: hit,
            grab: (at.x - anchor.x, at.y - anchor.y),
        });

        is_switch.then(|| session.apply(Command::Toggle(hit)))
    }

    /// Pointer moved; drags the grabbed element, if any.
    pub fn pointer_move(&mut self, session: &mut Session, at: Point) -> Option<Outcome> {
        self.pointer = Some(at);
        let drag = self.drag?;
        let to = Point::new(at.x - drag.grab.0, at.y - drag.grab.1);
        Some(session.apply(Command::Move {
            element: drag.element,
            to,
        }))
    }

    /// Primary button released; completes a pipe when released over a
    /// different element than the one it started on.
    pub fn pointer_up(&mut self, session: &mut Session, at: Point) -> Option<Outcome> {
        self.pointer = Some(at);
        self.drag = None;

        if !self.connecting {
            return None;
        }
        let start = self.connection_start.take()?;
        let end = session.network().element_at(at)?;
        if end == start {
            return None;
        }
        Some(session.apply(Command::Connect { a: start, b: end }))
    }

    /// Secondary click: delete the element under the pointer, or failing
    /// that the pipe under it.
    pub fn secondary_click(&mut self, session: &mut Session, at: Point) -> Option<Outcome> {
        self.pointer = Some(at);
        let network = session.network();
        let command = if let Some(element) = network.element_at(at) {
            if self.connection_start == Some(element) {
                self.connection_start = None;
            }
            if self.dragging() == Some(element) {
                self.drag = None;
            }
            Command::DeleteElement(element)
        } else {
            Command::DeleteConnection(network.connection_at(at)?)
        };
        Some(session.apply(command))
    }

    /// The in-progress pipe for a renderer to draw, if one is being drawn.
    pub fn preview(&self, session: &Session) -> Option<ConnectionPreview> {
        if !self.connecting {
            return None;
        }
        let start = self.connection_start?;
        Some(ConnectionPreview {
            start,
            from: session.network().element_center(start)?,
            to: self.pointer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn add(session: &mut Session, kind: ElementKind, at: Point) -> ElementId {
        match session.apply(Command::AddElement { kind, at: Some(at) }) {
            Outcome::ElementAdded(id) => id,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn drag_keeps_grab_offset() {
        let mut session = Session::default();
        let c = add(&mut session, ElementKind::Connector, Point::new(300.0, 100.0));
        let mut ui = Interaction::new();

        assert_eq!(ui.pointer_down(&mut session, Point::new(305.0, 98.0)), None);
        assert_eq!(ui.dragging(), Some(c));
        assert_eq!(
            ui.pointer_move(&mut session, Point::new(405.0, 148.0)),
            Some(Outcome::Moved)
        );
        assert_eq!(
            session.network().element(c).unwrap().position(),
            Point::new(400.0, 150.0)
        );

        ui.pointer_up(&mut session, Point::new(405.0, 148.0));
        assert_eq!(ui.dragging(), None);
        assert_eq!(ui.pointer_move(&mut session, Point::new(0.0, 0.0)), None);
    }

    #[test]
    fn pressing_a_switch_toggles_it() {
        let mut session = Session::default();
        let v = add(&mut session, ElementKind::Switch, Point::new(200.0, 100.0));
        let mut ui = Interaction::new();
        assert_eq!(
            ui.pointer_down(&mut session, Point::new(200.0, 100.0)),
            Some(Outcome::Toggled { is_on: true })
        );
        assert_eq!(session.network().element(v).unwrap().is_on(), Some(true));
    }

    #[test]
    fn connection_mode_draws_pipes() {
        let mut session = Session::default();
        let s = add(&mut session, ElementKind::GasSource, Point::new(100.0, 100.0));
        let c = add(&mut session, ElementKind::Connector, Point::new(300.0, 100.0));
        let mut ui = Interaction::new();
        assert!(ui.toggle_connection_mode());

        ui.pointer_down(&mut session, Point::new(110.0, 110.0));
        ui.pointer_move(&mut session, Point::new(200.0, 100.0));
        let preview = ui.preview(&session).unwrap();
        assert_eq!(preview.start, s);
        assert_eq!(preview.from, Point::new(120.0, 120.0));
        assert_eq!(preview.to, Some(Point::new(200.0, 100.0)));

        let outcome = ui.pointer_up(&mut session, Point::new(300.0, 100.0));
        assert!(matches!(outcome, Some(Outcome::Connected(_))));
        assert!(ui.preview(&session).is_none());
        let conn = session.network().connections().next().unwrap().1;
        assert_eq!(conn.endpoints(), [s, c]);
    }

    #[test]
    fn releasing_on_start_element_adds_nothing() {
        let mut session = Session::default();
        add(&mut session, ElementKind::GasSource, Point::new(100.0, 100.0));
        let mut ui = Interaction::new();
        ui.set_connection_mode(true);
        ui.pointer_down(&mut session, Point::new(110.0, 110.0));
        assert_eq!(ui.pointer_up(&mut session, Point::new(120.0, 120.0)), None);
        assert_eq!(session.network().connection_count(), 0);
    }

    #[test]
    fn secondary_click_prefers_elements_over_pipes() {
        let mut session = Session::default();
        let s = add(&mut session, ElementKind::GasSource, Point::new(0.0, 0.0));
        let c = add(&mut session, ElementKind::Connector, Point::new(220.0, 20.0));
        session.apply(Command::Connect { a: s, b: c });
        let mut ui = Interaction::new();

        assert_eq!(
            ui.secondary_click(&mut session, Point::new(120.0, 22.0)),
            Some(Outcome::ConnectionDeleted)
        );
        assert_eq!(session.network().element_count(), 2);

        session.apply(Command::Connect { a: s, b: c });
        assert_eq!(
            ui.secondary_click(&mut session, Point::new(220.0, 20.0)),
            Some(Outcome::ElementDeleted { cascaded: 1 })
        );
        assert_eq!(session.network().connection_count(), 0);
        assert_eq!(ui.secondary_click(&mut session, Point::new(900.0, 900.0)), None);
    }
}
