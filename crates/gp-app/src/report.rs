//! Serializable snapshots of network annotations.

use std::fmt::Write as _;

use gp_core::{Point, Rgb};
use gp_graph::{ElementKind, Network};
use gp_sim::FlowReport;
use serde::Serialize;

use crate::labels::Labels;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    pub label: String,
    pub kind: ElementKind,
    pub position: Point,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_on: Option<bool>,
    pub has_gas: bool,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionReport {
    pub label: String,
    pub start: String,
    pub end: String,
    pub has_gas: bool,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkReport {
    pub elements: Vec<ElementReport>,
    pub connections: Vec<ConnectionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<FlowReport>,
}

impl NetworkReport {
    pub fn capture(network: &Network, labels: &Labels, flow: Option<FlowReport>) -> Self {
        let config = network.config();
        let elements = network
            .elements()
            .map(|(id, e)| ElementReport {
                label: labels.element_name(id),
                kind: e.kind(),
                position: e.position(),
                is_on: e.is_on(),
                has_gas: e.has_gas(),
                color: e.fill_color(config),
            })
            .collect();
        let connections = network
            .connections()
            .map(|(id, c)| ConnectionReport {
                label: labels.connection_name(id),
                start: labels.element_name(c.start()),
                end: labels.element_name(c.end()),
                has_gas: c.has_gas(),
                color: c.color(),
            })
            .collect();

        Self {
            elements,
            connections,
            flow,
        }
    }

    pub fn element(&self, label: &str) -> Option<&ElementReport> {
        self.elements.iter().find(|e| e.label == label)
    }

    pub fn connection(&self, label: &str) -> Option<&ConnectionReport> {
        self.connections.iter().find(|c| c.label == label)
    }

    /// Plain-text table for terminals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let gas = |on: bool| if on { "gas" } else { "-" };

        let _ = writeln!(out, "Elements ({}):", self.elements.len());
        for e in &self.elements {
            let state = match e.is_on {
                Some(true) => " [on]",
                Some(false) => " [off]",
                None => "",
            };
            let _ = writeln!(
                out,
                "  {:<12} {:<10}{:<6} ({:>7.1}, {:>7.1})  {}",
                e.label,
                e.kind.label(),
                state,
                e.position.x,
                e.position.y,
                gas(e.has_gas)
            );
        }

        let _ = writeln!(out, "Connections ({}):", self.connections.len());
        for c in &self.connections {
            let _ = writeln!(
                out,
                "  {:<12} {} <-> {}  {}",
                c.label,
                c.start,
                c.end,
                gas(c.has_gas)
            );
        }

        if let Some(flow) = &self.flow {
            let _ = writeln!(
                out,
                "Flow: {} source(s), {} element(s) and {} connection(s) carrying gas",
                flow.sources, flow.energized_elements, flow.energized_connections
            );
        }
        out
    }
}
