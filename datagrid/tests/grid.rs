mod common;

use common::{RecordingHost, RecordingViewport, init_logging, names, people, people_columns};
use datagrid::prelude::*;

// ============================================================================
// Row pipeline through the engine
// ============================================================================

#[test]
fn test_unsorted_keeps_source_order() {
    init_logging();
    let mut grid = DataGrid::new(people_columns());
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(names(&view.rows), names(&people()));
    assert_eq!(view.row_count(), 4);
}

#[test]
fn test_sort_then_filter() {
    init_logging();
    let mut grid = DataGrid::new(people_columns());
    grid.on_grid_sort(0, SortDirection::Asc);
    grid.on_add_filter(ColumnFilter::text("team", "red"));

    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(names(&view.rows), vec!["Bob", "carol"]);

    grid.on_grid_sort(1, SortDirection::Desc);
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(names(&view.rows), vec!["carol", "Bob"]);

    grid.on_clear_filters();
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(names(&view.rows), vec!["dave", "carol", "Bob", "  Alice"]);
}

#[test]
fn test_empty_filter_term_removes_filter() {
    let mut grid = DataGrid::new(people_columns());
    grid.on_add_filter(ColumnFilter::text("name", "zzz"));
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert!(view.rows.is_empty());
    assert_eq!(view.empty_label.as_deref(), Some("No items to display"));

    grid.on_add_filter(ColumnFilter::text("name", ""));
    assert!(grid.filters().is_empty());
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(view.row_count(), 4);
    assert_eq!(view.empty_label, None);
}

#[test]
fn test_transform_applied_to_raw_rows() {
    #[derive(serde::Serialize)]
    struct Person {
        name: String,
        age: u32,
    }

    let raw = vec![
        Person { name: "zed".into(), age: 20 },
        Person { name: "amy".into(), age: 30 },
    ];
    let mut grid = DataGrid::new(people_columns());
    grid.on_grid_sort(0, SortDirection::Asc);

    let view = grid.render(&raw, &SerdeTransform, RenderInput::ready());
    assert_eq!(names(&view.rows), vec!["amy", "zed"]);

    let shout = |p: &Person| Row::new().set("name", p.name.to_uppercase()).set("age", p.age as i64);
    let view = grid.render(&raw, &shout, RenderInput::ready());
    assert_eq!(names(&view.rows), vec!["AMY", "ZED"]);
}

// ============================================================================
// Loading state
// ============================================================================

#[test]
fn test_loading_shows_stable_placeholders() {
    init_logging();
    let config = GridConfig::default().loading_row_count(3);
    let mut grid = DataGrid::with_config(people_columns(), config).unwrap();
    grid.on_add_filter(ColumnFilter::text("name", "nobody"));

    let first = grid.render(&people(), &Identity, RenderInput::loading());
    let second = grid.render(&Vec::<Row>::new(), &Identity, RenderInput::loading());

    assert_eq!(first.row_count(), 3);
    assert_eq!(first.rows, second.rows);
    assert_eq!(first.empty_label, None);
    assert_eq!(first.rows[1].get("age"), Some(&Value::Int(5)));

    let cell = first.cell(1, 1).unwrap();
    assert_eq!(cell, second.cell(1, 1).unwrap());
    assert!(matches!(cell, CellContent::Placeholder { height: 20, .. }));

    assert!(first.columns.iter().all(|c| !c.editable && !c.sortable && !c.filterable));
}

#[test]
fn test_filter_toggle_follows_last_render() {
    let mut grid = DataGrid::new(people_columns());
    grid.render(&people(), &Identity, RenderInput::loading());
    assert!(!grid.toggle_filters());

    grid.render(&people(), &Identity, RenderInput::ready());
    assert!(grid.toggle_filters());
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert!(view.filters_visible);
}

// ============================================================================
// Column resolution
// ============================================================================

#[test]
fn test_breakpoint_widths() {
    let columns = vec![Column::new("a", "A").width(150), Column::new("b", "B").width(70)];
    let widths = ColumnWidths::new(vec![Some(100), None]).breakpoint("md", vec![Some(80), None]);
    let mut grid = DataGrid::new(columns).with_column_widths(widths);

    let view = grid.render(&Vec::<Row>::new(), &Identity, RenderInput::ready().breakpoint("md"));
    assert_eq!(view.columns[0].width, Some(80));
    assert_eq!(view.columns[1].width, Some(70));

    let view = grid.render(&Vec::<Row>::new(), &Identity, RenderInput::ready());
    assert_eq!(view.columns[0].width, Some(100));

    let view = grid.render(&Vec::<Row>::new(), &Identity, RenderInput::ready().breakpoint("xl"));
    assert_eq!(view.columns[0].width, Some(100));
}

#[test]
fn test_base_meta_and_help_headers() {
    let mut grid = DataGrid::new(people_columns()).with_base_meta(ColumnMeta::new().editable(true));
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert!(view.columns.iter().all(|c| c.editable));
    assert_eq!(view.columns[2].header.tooltip(), Some("Assigned team"));
    assert_eq!(view.columns[2].header.label(), "Team");
    assert_eq!(view.columns[0].header, HeaderContent::Text("Name".into()));

    let again = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(view.columns[2].header, again.columns[2].header);
}

#[test]
fn test_missing_cell_formats_empty() {
    let mut grid = DataGrid::new(people_columns());
    let rows = vec![Row::new().set("name", "solo")];
    let view = grid.render(&rows, &Identity, RenderInput::ready());
    assert_eq!(view.cell(0, 0), Some(CellContent::Text("solo".into())));
    assert_eq!(view.cell(0, 1), Some(CellContent::Text(String::new())));
    assert_eq!(view.cell(5, 0), None);
}

// ============================================================================
// Editing and actions
// ============================================================================

#[test]
fn test_editor_reopens_after_update() {
    init_logging();
    let mut grid = DataGrid::new(people_columns());
    let mut host = RecordingHost::default();
    grid.render(&people(), &Identity, RenderInput::ready());

    grid.on_cell_selected(EditorPosition::new(1, 0));
    let event = RowsUpdated {
        action: UpdateAction::CellUpdate,
        from_row: people()[1].clone(),
        updated: Row::new().set("name", "Alicia"),
        cell_key: "name".into(),
        to_row: 1,
    };
    assert!(grid.on_grid_rows_updated(event, &mut host));
    grid.on_editor_closed();

    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(view.editor, None);
    assert_eq!(grid.on_row_click(1, Some(0)), Some(EditorPosition::new(1, 0)));
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(view.editor, Some(EditorPosition::new(1, 0)));

    assert_eq!(host.updates.len(), 1);
    assert_eq!(host.updates[0].updated_value, Value::from("Alicia"));
    assert_eq!(host.updates[0].column_key, "name");
}

#[test]
fn test_no_op_update_not_forwarded() {
    let mut grid = DataGrid::new(people_columns());
    let mut host = RecordingHost::default();
    let event = RowsUpdated {
        action: UpdateAction::CellUpdate,
        from_row: people()[0].clone(),
        updated: Row::new().set("name", "carol"),
        cell_key: "name".into(),
        to_row: 0,
    };
    assert!(!grid.on_grid_rows_updated(event, &mut host));
    assert!(host.updates.is_empty());

    let event = RowsUpdated {
        action: UpdateAction::CellUpdate,
        from_row: people()[0].clone(),
        updated: Row::new().set("age", 41.0),
        cell_key: "age".into(),
        to_row: 0,
    };
    assert!(!grid.on_grid_rows_updated(event, &mut host));
    assert!(host.updates.is_empty());
}

#[test]
fn test_half_typed_numeric_filter_keeps_rows() {
    init_logging();
    let mut grid = DataGrid::new(people_columns());
    grid.on_add_filter(ColumnFilter::numeric("age", "35,>"));
    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(names(&view.rows), vec!["Bob"]);
    assert_eq!(view.empty_label, None);
}

#[test]
fn test_actions_only_on_last_column() {
    let grid = DataGrid::new(people_columns());
    let host = RecordingHost {
        deletable: vec!["Bob".into()],
        actions: vec![RowAction::new("archive", "Archive").icon("box")],
        ..Default::default()
    };
    let bob = &people()[2];
    let carol = &people()[0];

    assert!(grid.cell_actions(0, bob, &host).is_empty());
    assert!(grid.cell_actions(1, bob, &host).is_empty());

    let actions = grid.cell_actions(2, bob, &host);
    assert_eq!(actions.len(), 2);
    assert_eq!(actions[0], CellAction::DeleteRow);
    assert_eq!(actions[1].label(), "Archive");

    let actions = grid.cell_actions(2, carol, &host);
    assert_eq!(actions.len(), 1);
    assert_eq!(actions[0].icon(), Some("box"));
}

#[test]
fn test_invoke_actions_reach_host() {
    let mut grid = DataGrid::new(people_columns());
    let mut host = RecordingHost {
        deletable: vec!["Bob".into()],
        actions: vec![RowAction::new("archive", "Archive")],
        ..Default::default()
    };
    let bob = people()[2].clone();

    let actions = grid.cell_actions(2, &bob, &host);
    for action in &actions {
        grid.invoke_cell_action(action, &bob, &mut host);
    }
    assert_eq!(host.deleted, vec![bob.clone()]);
    assert_eq!(host.invoked, vec![("archive".to_string(), bob)]);
}

#[test]
fn test_add_row_flow() {
    let config = GridConfig::default().add_row_button().dialog_title("New person");
    let mut grid = DataGrid::with_config(people_columns(), config).unwrap();
    let mut host = RecordingHost::default();
    grid.on_add_filter(ColumnFilter::text("team", "red"));
    grid.render(&people(), &Identity, RenderInput::ready());

    assert!(!grid.add_row_visible());
    grid.open_add_row();
    assert!(grid.add_row_visible());

    let context = grid.add_row_context().unwrap();
    assert_eq!(context.title, Some("New person"));
    assert_eq!(context.rows.len(), 2);
    assert_eq!(context.columns.len(), 3);
    assert!(context.is_duplicate("name", &Value::from("Bob")));
    assert!(!context.is_duplicate("name", &Value::from("dave")));

    grid.cancel_add_row();
    assert!(!grid.add_row_visible());
    assert!(host.added.is_empty());

    grid.open_add_row();
    let payload = Row::new().set("name", "erin").set("team", "red");
    grid.confirm_add_row(payload.clone(), &mut host);
    assert!(!grid.add_row_visible());
    assert_eq!(host.added, vec![payload]);
}

#[test]
fn test_no_add_row_context_without_button() {
    let grid = DataGrid::new(people_columns());
    assert!(grid.add_row_context().is_none());
}

// ============================================================================
// Density
// ============================================================================

#[test]
fn test_density_change_refreshes_once_after_commit() {
    init_logging();
    let mut grid = DataGrid::new(people_columns());
    let mut viewport = RecordingViewport {
        offset: ScrollOffset { top: 270, left: 12 },
        ..Default::default()
    };

    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(view.row_height, 45);

    grid.set_view_mode(ViewMode::Sparse);
    grid.set_view_mode(ViewMode::Compact);
    assert_eq!(viewport.refreshes, 0);

    let view = grid.render(&people(), &Identity, RenderInput::ready());
    assert_eq!(view.row_height, 35);
    assert_eq!(view.view_mode, ViewMode::Compact);

    assert!(grid.render_committed(Some(&mut viewport)));
    assert!(!grid.render_committed(Some(&mut viewport)));
    assert_eq!(viewport.refreshes, 1);
    assert_eq!(viewport.rescrolls, vec![ScrollOffset { top: 270, left: 12 }]);
}

#[test]
fn test_row_striping() {
    assert_eq!(GridView::row_class(0), "row-odd");
    assert_eq!(GridView::row_class(1), "row-even");
    assert_eq!(GridView::row_class(2), "row-odd");
}

#[test]
fn test_invalid_config_rejected() {
    let config = GridConfig {
        placeholder: PlaceholderConfig {
            modulus: 0,
            ..Default::default()
        },
        ..Default::default()
    };
    let err = DataGrid::with_config(people_columns(), config).unwrap_err();
    assert!(err.to_string().contains("placeholder.modulus"));
}

#[test]
fn test_overflowing_placeholder_config_rejected() {
    let err = GridConfig::from_json(r#"{ "placeholder": { "floor": 18446744073709551615 } }"#)
        .unwrap_err();
    assert!(err.to_string().contains("placeholder.floor"));

    let config = GridConfig {
        placeholder: PlaceholderConfig {
            floor: u64::MAX,
            ..Default::default()
        },
        ..Default::default()
    };
    assert!(DataGrid::with_config(people_columns(), config).is_err());
}

#[test]
fn test_loading_cells_format_with_large_floor() {
    let config = GridConfig {
        placeholder: PlaceholderConfig {
            floor: u64::MAX - 11,
            ..Default::default()
        },
        ..Default::default()
    };
    let mut grid = DataGrid::with_config(people_columns(), config).unwrap();
    let view = grid.render(&people(), &Identity, RenderInput::loading());
    match view.cell(1, 0) {
        Some(CellContent::Placeholder { width_percent, .. }) => {
            assert!(width_percent.is_finite());
            assert!(width_percent <= 100.0);
        }
        other => panic!("expected a placeholder, got {:?}", other),
    }
}
