//! Renders a small people table to stdout, cycling through sort, filter,
//! loading, and density changes.

use std::fs::File;

use datagrid::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const PEOPLE: &str = r#"[
    { "name": "carol", "age": 41, "team": "red" },
    { "name": "  Alice", "age": 29, "team": "blue" },
    { "name": "Bob", "age": 35, "team": "red" },
    { "name": "dave", "age": 52, "team": "green" }
]"#;

#[derive(Default)]
struct People {
    rows: Vec<Row>,
}

impl GridHost for People {
    fn can_delete_row(&self, row: &Row) -> bool {
        row.get("team") != Some(&Value::from("green"))
    }

    fn on_row_add(&mut self, row: Row) {
        self.rows.push(row);
    }

    fn on_row_update(&mut self, update: RowUpdate) {
        if let Some(row) = self.rows.get_mut(update.row_index) {
            row.insert(update.column_key, update.updated_value);
        }
    }

    fn on_row_delete(&mut self, row: &Row) {
        self.rows.retain(|r| r != row);
    }
}

struct StdoutViewport;

impl ViewportController for StdoutViewport {
    fn refresh_metrics(&mut self) {
        println!("(viewport metrics refreshed)");
    }

    fn scroll_offset(&self) -> ScrollOffset {
        ScrollOffset::default()
    }

    fn rescroll_to(&mut self, offset: ScrollOffset) {
        println!("(rescrolled to {:?})", offset);
    }
}

fn print_view(title: &str, view: &GridView) {
    println!("== {} (row height {})", title, view.row_height);
    let header: Vec<String> = view
        .columns
        .iter()
        .map(|c| match c.header.tooltip() {
            Some(_) => format!("{:>12}?", c.header.label()),
            None => format!("{:>12} ", c.header.label()),
        })
        .collect();
    println!("{}", header.join("|"));

    if let Some(label) = &view.empty_label {
        println!("{}", label);
    }
    for i in 0..view.row_count() {
        let cells: Vec<String> = (0..view.columns.len())
            .map(|j| match view.cell(i, j) {
                Some(CellContent::Text(s)) => format!("{:>12} ", s),
                Some(other) => format!("{:>12} ", other.width_css().unwrap_or_default()),
                None => format!("{:>12} ", ""),
            })
            .collect();
        println!("{} [{}]", cells.join("|"), GridView::row_class(i));
    }
}

fn main() {
    let log_file = File::create("people.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let rows: Vec<serde_json::Value> =
        serde_json::from_str(PEOPLE).expect("Invalid sample data");
    let mut host = People {
        rows: rows.iter().map(|r| SerdeTransform.transform(r)).collect(),
    };

    let columns = vec![
        Column::new("name", "Name").sortable().filterable().editable(),
        Column::new("age", "Age").sortable().filterable(),
        Column::new("team", "Team").tooltip("Assigned team"),
    ];
    let config = GridConfig::default()
        .add_row_button()
        .dialog_title("New person");
    let mut grid = match DataGrid::with_config(columns, config) {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    print_view("loading", &grid.render(&host.rows, &Identity, RenderInput::loading()));
    print_view("loaded", &grid.render(&host.rows, &Identity, RenderInput::ready()));

    grid.on_grid_sort(0, SortDirection::Asc);
    print_view("by name", &grid.render(&host.rows, &Identity, RenderInput::ready()));

    grid.on_add_filter(ColumnFilter::numeric("age", ">30"));
    print_view("over 30", &grid.render(&host.rows, &Identity, RenderInput::ready()));

    grid.on_clear_filters();
    grid.open_add_row();
    let erin = Row::new().set("name", "erin").set("age", 23).set("team", "blue");
    grid.confirm_add_row(erin, &mut host);

    let view = grid.render(&host.rows, &Identity, RenderInput::ready());
    if let Some(first) = view.rows.first() {
        let name = first.get("name").map(ToString::to_string).unwrap_or_default();
        for action in grid.cell_actions(2, first, &host) {
            println!("action on {}: {}", name, action.label());
        }
    }

    grid.set_view_mode(ViewMode::Compact);
    print_view("compact", &grid.render(&host.rows, &Identity, RenderInput::ready()));
    grid.render_committed(Some(&mut StdoutViewport));
}
