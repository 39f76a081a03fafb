//! Scripted scenarios.
//!
//! A script is a YAML document with an optional `config` section and an
//! ordered list of `steps`. Elements and connections are referred to by
//! labels chosen in the script. Pointer steps drive the same
//! [`Interaction`] state machine an interactive front end uses.
//!
//! ```yaml
//! steps:
//!   - add: { kind: gas_source, label: src }
//!   - add: { kind: switch, label: valve, at: { x: 200, y: 120 } }
//!   - connect: { from: src, to: valve, label: feed }
//!   - toggle: valve
//!   - simulate
//! ```

use std::path::Path;

use gp_core::Point;
use gp_graph::ElementKind;
use serde::Deserialize;
use tracing::{debug, info};

use crate::command::{Command, Outcome};
use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::interaction::Interaction;
use crate::labels::{Labels, Target};
use crate::report::NetworkReport;
use crate::session::Session;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: AppConfig,
    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Add {
        kind: ElementKind,
        label: String,
        #[serde(default)]
        at: Option<Point>,
    },
    Connect {
        from: String,
        to: String,
        #[serde(default)]
        label: Option<String>,
    },
    /// Delete an element (cascading to its pipes) or a single pipe.
    Delete(String),
    Toggle(String),
    Move {
        label: String,
        to: Point,
    },
    Simulate,
    /// Turn pipe-drawing mode on or off.
    ConnectMode(bool),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    SecondaryClick(Point),
}

/// Result of running a script.
pub struct ScriptRun {
    pub session: Session,
    pub labels: Labels,
    /// Outcome of each step, in order (`None` for pointer steps with no effect).
    pub outcomes: Vec<Option<Outcome>>,
}

impl ScriptRun {
    pub fn report(&self) -> NetworkReport {
        NetworkReport::capture(
            self.session.network(),
            &self.labels,
            self.session.last_report(),
        )
    }
}

pub fn parse_script(content: &str) -> AppResult<Script> {
    serde_yaml::from_str(content)
        .map_err(|e| AppError::Script(format!("Failed to parse script YAML: {}", e)))
}

/// Load a script from a YAML file.
pub fn load_script(path: &Path) -> AppResult<Script> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_script(&content)
}

/// Run every step of `script` against a fresh session.
pub fn run_script(script: &Script) -> AppResult<ScriptRun> {
    let mut session = Session::new(script.config.clone());
    let mut labels = Labels::default();
    let mut ui = Interaction::new();
    let mut outcomes = Vec::with_capacity(script.steps.len());

    for (i, step) in script.steps.iter().enumerate() {
        debug!(step = i, ?step, "applying script step");
        let outcome = apply_step(&mut session, &mut labels, &mut ui, step)?;
        outcomes.push(outcome);
    }

    info!(
        steps = script.steps.len(),
        elements = session.network().element_count(),
        connections = session.network().connection_count(),
        "script finished"
    );
    Ok(ScriptRun {
        session,
        labels,
        outcomes,
    })
}

fn apply_step(
    session: &mut Session,
    labels: &mut Labels,
    ui: &mut Interaction,
    step: &Step,
) -> AppResult<Option<Outcome>> {
    let outcome = match step {
        Step::Add { kind, label, at } => {
            if labels.resolve(label).is_ok() {
                return Err(AppError::DuplicateLabel(label.clone()));
            }
            let outcome = session.apply(Command::AddElement {
                kind: *kind,
                at: *at,
            });
            if let Outcome::ElementAdded(id) = outcome {
                labels.insert(label.clone(), Target::Element(id))?;
            }
            Some(outcome)
        }
        Step::Connect { from, to, label } => {
            if let Some(label) = label {
                if labels.resolve(label).is_ok() {
                    return Err(AppError::DuplicateLabel(label.clone()));
                }
            }
            let a = labels.element(from)?;
            let b = labels.element(to)?;
            let outcome = session.apply(Command::Connect { a, b });
            if let (Outcome::Connected(id), Some(label)) = (&outcome, label) {
                labels.insert(label.clone(), Target::Connection(*id))?;
            }
            Some(outcome)
        }
        Step::Delete(label) => Some(match labels.resolve(label)? {
            Target::Element(id) => session.apply(Command::DeleteElement(id)),
            Target::Connection(id) => session.apply(Command::DeleteConnection(id)),
        }),
        Step::Toggle(label) => Some(session.apply(Command::Toggle(labels.element(label)?))),
        Step::Move { label, to } => Some(session.apply(Command::Move {
            element: labels.element(label)?,
            to: *to,
        })),
        Step::Simulate => Some(session.apply(Command::Simulate)),
        Step::ConnectMode(on) => {
            ui.set_connection_mode(*on);
            None
        }
        Step::PointerDown(at) => ui.pointer_down(session, *at),
        Step::PointerMove(at) => ui.pointer_move(session, *at),
        Step::PointerUp(at) => ui.pointer_up(session, *at),
        Step::SecondaryClick(at) => ui.secondary_click(session, *at),
    };
    Ok(outcome)
}
