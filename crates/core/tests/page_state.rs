//! Integration test: drive the menu, navigation coordinator, and content
//! store together the way the view does, and verify the combined behavior.

use petalfolio_core::nav::NavCoordinator;
use petalfolio_core::{ContentStore, MenuController, Section};

fn nav_with_page_anchors() -> NavCoordinator {
    let mut nav = NavCoordinator::new();
    for section in Section::ALL {
        nav.register_anchor(section);
    }
    nav
}

#[test]
fn menu_selection_closes_menu_and_navigates() {
    let mut nav = nav_with_page_anchors();
    let mut menu = MenuController::new();

    menu.toggle();
    assert!(menu.is_open());

    // One user action: click a menu entry.
    let selected = nav.select(Section::Experience);
    menu.close();

    assert!(selected);
    assert!(!menu.is_open());
    assert_eq!(nav.active(), Section::Experience);
    assert_eq!(nav.take_scroll_request(), Some(Section::Experience));
    assert_eq!(nav.take_scroll_request(), None, "request is one-shot");
}

#[test]
fn escape_only_observed_while_menu_open() {
    let mut menu = MenuController::new();
    assert!(!menu.on_escape());

    menu.toggle();
    assert!(menu.on_escape());
    assert!(!menu.is_open());
}

#[test]
fn unknown_deep_link_leaves_default_state() {
    let mut nav = nav_with_page_anchors();
    if let Some(section) = Section::from_fragment("#guestbook") {
        nav.select(section);
    }
    assert_eq!(nav.active(), Section::Home);
    assert_eq!(nav.take_scroll_request(), None);
}

#[test]
fn known_deep_link_selects_section() {
    let mut nav = nav_with_page_anchors();
    if let Some(section) = Section::from_fragment("#projects") {
        nav.select(section);
    }
    assert_eq!(nav.active(), Section::Projects);
    assert_eq!(nav.take_scroll_request(), Some(Section::Projects));
}

#[test]
fn default_content_renders_every_declared_item_in_order() {
    let store = ContentStore::default();

    assert_eq!(store.projects().len(), 3);
    assert_eq!(store.experience().len(), 2);

    let titles: Vec<&str> = store.projects().iter().map(|p| p.title).collect();
    assert_eq!(titles, ["Simply Cinema", "FinChat", "Geography Quiz"]);

    let first = &store.projects()[0];
    assert_eq!(
        first.highlights,
        [
            "Real-time seat selection",
            "Admin dashboards",
            "Secure payments"
        ]
    );
    assert_eq!(
        first.tech,
        ["React.js", "Node.js", "Python", "Java", "Figma"]
    );

    let intern = &store.experience()[0];
    assert_eq!(intern.company, "Altheros Capital");
    assert_eq!(
        intern.achievements,
        [
            "Built user-centric features for patients with anxiety and PTSD",
            "Ensured scalability and cross-device optimization",
            "Implemented secure, HIPAA-compliant solutions"
        ]
    );
}
