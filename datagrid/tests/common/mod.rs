//! Shared helpers for integration tests.

#![allow(dead_code)]

use datagrid::prelude::*;
use simplelog::{Config, LevelFilter, TestLogger};

/// Route `log` output through the test harness. Safe to call from every test.
pub fn init_logging() {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
}

pub fn people_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable().filterable().editable(),
        Column::new("age", "Age").sortable().filterable(),
        Column::new("team", "Team").tooltip("Assigned team"),
    ]
}

pub fn people() -> Vec<Row> {
    vec![
        Row::new().set("name", "carol").set("age", 41).set("team", "red"),
        Row::new().set("name", "  Alice").set("age", 29).set("team", "blue"),
        Row::new().set("name", "Bob").set("age", 35).set("team", "red"),
        Row::new().set("name", "dave").set("age", 52).set("team", "green"),
    ]
}

pub fn names(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .map(|r| r.get("name").map(ToString::to_string).unwrap_or_default())
        .collect()
}

/// Host that records every callback.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub deletable: Vec<String>,
    pub actions: Vec<RowAction>,
    pub added: Vec<Row>,
    pub updates: Vec<RowUpdate>,
    pub deleted: Vec<Row>,
    pub invoked: Vec<(String, Row)>,
}

impl GridHost for RecordingHost {
    fn can_delete_row(&self, row: &Row) -> bool {
        row.get("name")
            .is_some_and(|name| self.deletable.contains(&name.to_string()))
    }

    fn row_actions(&self, _row: &Row) -> Vec<RowAction> {
        self.actions.clone()
    }

    fn on_row_add(&mut self, row: Row) {
        self.added.push(row);
    }

    fn on_row_update(&mut self, update: RowUpdate) {
        self.updates.push(update);
    }

    fn on_row_delete(&mut self, row: &Row) {
        self.deleted.push(row.clone());
    }

    fn on_row_action(&mut self, action_id: &str, row: &Row) {
        self.invoked.push((action_id.to_string(), row.clone()));
    }
}

#[derive(Debug, Default)]
pub struct RecordingViewport {
    pub offset: ScrollOffset,
    pub refreshes: usize,
    pub rescrolls: Vec<ScrollOffset>,
}

impl ViewportController for RecordingViewport {
    fn refresh_metrics(&mut self) {
        self.refreshes += 1;
    }

    fn scroll_offset(&self) -> ScrollOffset {
        self.offset
    }

    fn rescroll_to(&mut self, offset: ScrollOffset) {
        self.rescrolls.push(offset);
    }
}
