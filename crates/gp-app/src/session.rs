//! Single-writer ownership of the network.

use std::sync::mpsc::{Receiver, Sender, channel};

use gp_graph::{Network, Placement};
use gp_sim::{FlowReport, FlowSimulation};
use tracing::{debug, warn};

use crate::command::{Command, Outcome};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};

/// Owns the network and applies commands one at a time.
///
/// Other threads (a redraw loop, an input thread) never touch the network;
/// they push commands through a [`SessionHandle`] and the owner applies them
/// with [`Session::drain`]. A simulation pass therefore can never interleave
/// with a deletion.
pub struct Session {
    network: Network,
    placement: Placement,
    simulation: FlowSimulation,
    last_report: Option<FlowReport>,
    tx: Sender<Command>,
    rx: Receiver<Command>,
}

/// Cloneable, thread-safe producer of commands for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionHandle {
    tx: Sender<Command>,
}

impl SessionHandle {
    /// Queue a command; it runs on the session's next `drain`.
    pub fn submit(&self, command: Command) -> AppResult<()> {
        self.tx.send(command).map_err(|_| AppError::SessionClosed)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl Session {
    pub fn new(config: AppConfig) -> Self {
        let (tx, rx) = channel();
        Self {
            network: Network::new(config.network),
            placement: Placement::default(),
            simulation: FlowSimulation::new(),
            last_report: None,
            tx,
            rx,
        }
    }

    /// Read access for renderers and reports.
    pub fn network(&self) -> &Network {
        &self.network
    }

    /// Report of the most recent simulation pass.
    pub fn last_report(&self) -> Option<FlowReport> {
        self.last_report
    }

    pub fn handle(&self) -> SessionHandle {
        SessionHandle {
            tx: self.tx.clone(),
        }
    }

    /// Apply every queued command in arrival order.
    pub fn drain(&mut self) -> Vec<Outcome> {
        let pending: Vec<Command> = self.rx.try_iter().collect();
        if !pending.is_empty() {
            debug!(count = pending.len(), "draining queued commands");
        }
        pending.into_iter().map(|cmd| self.apply(cmd)).collect()
    }

    /// Apply one command immediately.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::AddElement { kind, at } => match at {
                Some(p) => match p.ensure_finite("element position") {
                    Ok(position) => {
                        Outcome::ElementAdded(self.network.add_element(kind, position))
                    }
                    Err(err) => {
                        warn!(kind = kind.label(), error = %err, "ignoring add");
                        Outcome::Ignored
                    }
                },
                None => {
                    let position = self.placement.next(kind, self.network.config());
                    Outcome::ElementAdded(self.network.add_element(kind, position))
                }
            },
            Command::Connect { a, b } => match self.network.connect(a, b) {
                Some(id) => Outcome::Connected(id),
                None => Outcome::Ignored,
            },
            Command::DeleteElement(id) => {
                let cascaded = self.network.connections_of(id).count();
                match self.network.remove_element(id) {
                    Some(_) => Outcome::ElementDeleted { cascaded },
                    None => Outcome::Ignored,
                }
            }
            Command::DeleteConnection(id) => match self.network.remove_connection(id) {
                Some(_) => Outcome::ConnectionDeleted,
                None => Outcome::Ignored,
            },
            Command::Toggle(id) => match self.network.toggle(id) {
                Some(is_on) => Outcome::Toggled { is_on },
                None => Outcome::Ignored,
            },
            Command::Move { element, to } => {
                if let Err(err) = to.ensure_finite("move target") {
                    warn!(element = %element, error = %err, "ignoring move");
                    Outcome::Ignored
                } else if self.network.move_element(element, to) {
                    Outcome::Moved
                } else {
                    Outcome::Ignored
                }
            }
            Command::Simulate => {
                let report = self.simulation.run(&mut self.network);
                self.last_report = Some(report);
                Outcome::Simulated(report)
            }
        };

        if outcome.is_ignored() {
            debug!("command had no effect");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gp_core::Point;
    use gp_graph::ElementKind;

    fn added(outcome: Outcome) -> gp_core::ElementId {
        match outcome {
            Outcome::ElementAdded(id) => id,
            other => panic!("expected ElementAdded, got {other:?}"),
        }
    }

    #[test]
    fn auto_placement_uses_grid() {
        let mut session = Session::default();
        let a = added(session.apply(Command::AddElement {
            kind: ElementKind::Switch,
            at: None,
        }));
        let b = added(session.apply(Command::AddElement {
            kind: ElementKind::Switch,
            at: None,
        }));
        let net = session.network();
        assert_eq!(net.element(a).unwrap().position(), Point::new(200.0, 100.0));
        assert_eq!(net.element(b).unwrap().position(), Point::new(260.0, 100.0));
    }

    #[test]
    fn delete_reports_cascade() {
        let mut session = Session::default();
        let s = added(session.apply(Command::AddElement {
            kind: ElementKind::GasSource,
            at: None,
        }));
        let c = added(session.apply(Command::AddElement {
            kind: ElementKind::Connector,
            at: None,
        }));
        session.apply(Command::Connect { a: s, b: c });
        session.apply(Command::Connect { a: c, b: s });

        assert_eq!(
            session.apply(Command::DeleteElement(c)),
            Outcome::ElementDeleted { cascaded: 2 }
        );
        assert_eq!(session.apply(Command::DeleteElement(c)), Outcome::Ignored);
    }

    #[test]
    fn no_ops_are_ignored() {
        let mut session = Session::default();
        let s = added(session.apply(Command::AddElement {
            kind: ElementKind::GasSource,
            at: None,
        }));
        assert!(session.apply(Command::Connect { a: s, b: s }).is_ignored());
        assert!(session.apply(Command::Toggle(s)).is_ignored());
        assert!(
            session
                .apply(Command::Move {
                    element: s,
                    to: Point::new(f64::NAN, 0.0),
                })
                .is_ignored()
        );
    }

    #[test]
    fn non_finite_add_is_ignored() {
        let mut session = Session::default();
        let outcome = session.apply(Command::AddElement {
            kind: ElementKind::Connector,
            at: Some(Point::new(0.0, f64::INFINITY)),
        });
        assert!(outcome.is_ignored());
        assert!(session.network().is_empty());
    }

    #[test]
    fn simulate_records_last_report() {
        let mut session = Session::default();
        assert!(session.last_report().is_none());
        session.apply(Command::AddElement {
            kind: ElementKind::GasSource,
            at: None,
        });
        let Outcome::Simulated(report) = session.apply(Command::Simulate) else {
            panic!("expected Simulated");
        };
        assert_eq!(session.last_report(), Some(report));
        assert_eq!(report.sources, 1);
    }
}
