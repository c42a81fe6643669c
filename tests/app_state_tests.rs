//! Application state tests
//!
//! Tests for the path from fetched functions to table state: aggregation,
//! cursor bounds and the visible window.

use qernal::api::{Deployment, Function, FunctionSize, FunctionType, Location};
use qernal::rows::build_rows;
use qernal::ui::keys::{Action, Motion};
use qernal::ui::App;

fn deployment(provider: &str, country: &str) -> Deployment {
    Deployment {
        provider: provider.to_string(),
        location: Location {
            provider_id: Some(provider.to_string()),
            continent: None,
            country: country.to_string(),
            city: None,
        },
    }
}

fn function(name: &str, kind: FunctionType, deployments: Vec<Deployment>) -> Function {
    Function {
        id: format!("{name}-id"),
        name: name.to_string(),
        kind,
        size: FunctionSize {
            cpu: 512,
            memory: 1024,
        },
        deployments,
    }
}

#[test]
fn test_rows_feed_table_in_fetch_order() {
    let functions = vec![
        function(
            "checkout-api",
            FunctionType::Http,
            vec![deployment("aws", "US"), deployment("aws", "DE")],
        ),
        function("reports", FunctionType::Job, vec![]),
    ];

    let app = App::new(build_rows(&functions), 7);

    assert_eq!(app.rows.len(), 2);
    let first = app.selected_row().unwrap();
    assert_eq!(first.name, "checkout-api");
    assert_eq!(first.kind, "http");
    assert_eq!(first.providers, "aws");
    assert_eq!(first.regions, "US, DE");
    assert_eq!(first.cpu, "512");
    assert_eq!(first.memory, "1024");

    assert_eq!(app.rows[1].kind, "job");
    assert_eq!(app.rows[1].providers, "");
    assert_eq!(app.rows[1].regions, "");
}

#[test]
fn test_cursor_stays_within_bounds() {
    let functions: Vec<Function> = (0..12)
        .map(|i| function(&format!("fn-{i}"), FunctionType::Http, vec![]))
        .collect();
    let mut app = App::new(build_rows(&functions), 5);

    let motions = [
        Motion::Down,
        Motion::PageDown,
        Motion::PageDown,
        Motion::PageDown,
        Motion::HalfPageDown,
        Motion::Up,
        Motion::PageUp,
        Motion::PageUp,
        Motion::PageUp,
        Motion::HalfPageUp,
        Motion::Bottom,
        Motion::Top,
    ];

    for motion in motions {
        app.apply(Action::Navigate(motion));
        assert!(app.selected_index < app.rows.len());
        let visible: Vec<usize> = app.visible_rows().map(|(i, _)| i).collect();
        assert!(visible.contains(&app.selected_index));
        assert!(visible.len() <= app.height);
    }
}

#[test]
fn test_empty_table() {
    let mut app = App::new(build_rows(&[]), 7);

    assert!(app.selected_row().is_none());
    assert_eq!(app.apply(Action::Navigate(Motion::Down)), None);
    assert_eq!(app.apply(Action::Select), None);
    assert_eq!(app.selected_index, 0);
    assert_eq!(app.visible_rows().count(), 0);
}

#[test]
fn test_focus_toggle() {
    let mut app = App::new(vec![], 7);
    let initial_focus = app.focus;

    app.toggle_focus();
    assert_ne!(initial_focus, app.focus);
    assert!(!app.is_focused());

    app.toggle_focus();
    assert_eq!(initial_focus, app.focus);
}
