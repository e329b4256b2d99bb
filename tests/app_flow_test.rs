//! Drive the app with key events and check store, route and sidebar stay in sync

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use waypoint::app::{App, Focus, InputMode};
use waypoint::config::Config;
use waypoint::domain::{Category, CategoryFilter, Location, LocationId};
use waypoint::nav::NavId;
use waypoint::store::LocationStore;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, codes: &[KeyCode]) {
    for code in codes {
        app.handle_key(key(*code));
    }
}

fn type_command(app: &mut App, command: &str) {
    app.handle_key(key(KeyCode::Char(':')));
    for c in command.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
    app.handle_key(key(KeyCode::Enter));
}

fn app() -> App {
    let store = LocationStore::new(
        vec![
            Category::new("food", "Food", "utensils", "#f97316"),
            Category::new("park", "Parks", "trees", "#22c55e"),
        ],
        vec![
            Location::new("1", "Noodle Bar", "food").favorite(true),
            Location::new("2", "Taco Stand", "food"),
            Location::new("3", "Riverside", "park").favorite(true),
        ],
    )
    .unwrap();
    App::new(store, &Config::default())
}

fn active(app: &App) -> Vec<NavId> {
    app.ctx
        .sidebar
        .primary
        .iter()
        .filter(|entry| entry.is_active)
        .map(|entry| entry.id)
        .collect()
}

fn visible(app: &App) -> Vec<&str> {
    app.ctx.visible.iter().map(|id| id.as_str()).collect()
}

#[test]
fn test_starts_on_all_locations() {
    let app = app();
    assert_eq!(app.route(), "/");
    assert_eq!(active(&app), vec![NavId::All]);
    assert_eq!(app.ctx.sidebar.selected_category_index(), Some(0));
    assert_eq!(visible(&app), vec!["1", "2", "3"]);
}

#[test]
fn test_sidebar_enter_navigates_to_favorites() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
    assert_eq!(app.route(), "/favorites");
    assert_eq!(active(&app), vec![NavId::Favorites]);
    assert_eq!(visible(&app), vec!["1", "3"]);

    press(&mut app, &[KeyCode::Esc]);
    assert_eq!(app.route(), "/");
}

#[test]
fn test_category_selection_filters_list() {
    let mut app = app();
    // All Locations, Favorites, Recents, then All, Food, Parks
    press(&mut app, &[KeyCode::Char('j'); 5]);
    press(&mut app, &[KeyCode::Enter]);

    assert_eq!(*app.store.selected_category(), CategoryFilter::category("park"));
    assert_eq!(app.ctx.sidebar.selected_category_index(), Some(2));
    assert_eq!(visible(&app), vec!["3"]);

    press(&mut app, &[KeyCode::Char('a')]);
    assert_eq!(*app.store.selected_category(), CategoryFilter::All);
    assert_eq!(visible(&app).len(), 3);
}

#[test]
fn test_list_open_and_favorite_update_badges() {
    let mut app = app();
    press(&mut app, &[KeyCode::Tab]);
    assert_eq!(app.focus, Focus::List);

    press(&mut app, &[KeyCode::Char('j'), KeyCode::Enter]);
    let recents = &app.ctx.sidebar.primary[2];
    assert_eq!(recents.count, 1);
    assert_eq!(recents.badge(), Some(1));

    press(&mut app, &[KeyCode::Char('f')]);
    assert_eq!(app.ctx.sidebar.primary[1].count, 3);
    assert_eq!(
        app.selected_location().map(|l| l.id.clone()),
        Some(LocationId::new("2"))
    );
    assert!(app.status_text().unwrap().0.contains("Taco Stand"));
}

#[test]
fn test_commands() {
    let mut app = app();
    type_command(&mut app, "recents");
    assert_eq!(app.route(), "/recents");
    assert!(app.ctx.visible.is_empty());

    type_command(&mut app, "open 3");
    assert_eq!(visible(&app), vec!["3"]);

    type_command(&mut app, "cat food");
    assert!(app.ctx.visible.is_empty());

    type_command(&mut app, "go /nowhere");
    assert!(active(&app).is_empty());
    assert!(app.ctx.visible.is_empty());
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_unknown_category_command_keeps_selection() {
    let mut app = app();
    type_command(&mut app, "cat park");
    type_command(&mut app, "cat nonexistent-id");
    assert_eq!(*app.store.selected_category(), CategoryFilter::category("park"));
    let (text, _) = app.status_text().unwrap();
    assert!(text.contains("nonexistent-id"));
}

#[test]
fn test_unknown_location_reports_error() {
    let mut app = app();
    let revision = app.store.revision();
    type_command(&mut app, "fav 42");
    assert_eq!(app.store.revision(), revision);
    assert!(app.status_text().unwrap().0.contains("42"));
}

#[test]
fn test_user_menu_log_out_quits() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('u'), KeyCode::Char('j'), KeyCode::Enter]);
    assert!(app.user_menu.is_none());
    assert!(app.should_quit);
}

#[test]
fn test_user_menu_settings() {
    let mut app = app();
    press(&mut app, &[KeyCode::Char('u'), KeyCode::Enter]);
    assert!(app.settings_open);
    assert!(!app.should_quit);
    press(&mut app, &[KeyCode::Esc]);
    assert!(!app.settings_open);
}
