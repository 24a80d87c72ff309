// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Render port and table formatting for terminal output.

use comfy_table::Table;
use navpoint_core::{
    Connector, ConnectorStyle, MapSnapshot, Point, Primitive, RenderPort, StreetNames,
};

/// Holds the most recent batch for printing.
#[derive(Debug, Default)]
pub struct BatchRenderPort {
    batch: Vec<Primitive>,
}

impl BatchRenderPort {
    /// Last batch received.
    pub fn primitives(&self) -> &[Primitive] {
        &self.batch
    }
}

impl RenderPort for BatchRenderPort {
    fn replace_primitives(&mut self, batch: &[Primitive]) {
        self.batch = batch.to_vec();
    }
}

fn fmt_point(p: Point) -> String {
    format!("{:.2}, {:.2}", p.x, p.y)
}

fn style_label(style: ConnectorStyle) -> &'static str {
    match style {
        ConnectorStyle::Normal => "normal",
        ConnectorStyle::MissingStreet => "missing street",
        ConnectorStyle::ResidentialCircle => "residential",
    }
}

/// One row per connector: place, style, anchor segment and its street.
pub fn connector_table(plan: &[Connector], map: &MapSnapshot) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["place", "style", "segment", "street", "stop", "entry/exit"]);
    for c in plan {
        let segment = c
            .segment_id
            .and_then(|id| map.segments.iter().find(|s| s.id == id));
        let street = segment
            .and_then(|s| s.primary_street_id)
            .and_then(|id| map.street_name(id))
            .unwrap_or("-");
        table.add_row(vec![
            c.place_id.to_string(),
            style_label(c.style).to_owned(),
            c.segment_id.map_or_else(|| "-".to_owned(), |id| id.to_string()),
            street.to_owned(),
            c.stop.map_or_else(|| "-".to_owned(), fmt_point),
            c.entry_exit.map_or_else(|| "-".to_owned(), fmt_point),
        ]);
    }
    table
}
