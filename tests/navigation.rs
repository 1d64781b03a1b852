//! Router navigation across history modes.

use std::cell::RefCell;
use std::rc::Rc;

use view_router::history::HistoryMode;
use view_router::navigation::RouterError;
use view_router::{Router, RouterConfig};

mod common;

#[test]
fn test_default_config_router() {
    let router = Router::from_config(&RouterConfig::default()).unwrap();
    let state = router.current();
    assert_eq!(router.history().mode(), HistoryMode::Web);
    assert_eq!(state.route.unwrap().view.as_str(), "Greet");
    assert_eq!(state.href, "/");
}

#[test]
fn test_web_history_navigation() {
    let mut router = common::router(common::site_routes(), HistoryMode::Web, "/app/");

    let state = router.push("/about?ref=nav");
    assert_eq!(state.route.as_ref().map(|r| r.name.as_str()), Some("About"));
    assert_eq!(state.href, "/app/about?ref=nav");

    router.push("/settings");
    let state = router.back();
    assert_eq!(state.location, "/about?ref=nav");

    let state = router.forward();
    assert_eq!(state.route.unwrap().name, "Settings");
    assert!(!router.history().can_go_forward());
}

#[test]
fn test_hash_history_hrefs() {
    let mut router = common::router(common::site_routes(), HistoryMode::Hash, "/app");
    assert_eq!(router.current().href, "/app/#/");
    let state = router.push("/about");
    assert_eq!(state.href, "/app/#/about");
}

#[test]
fn test_unmatched_location_is_not_found() {
    let mut router = common::router(common::home_routes(), HistoryMode::Memory, "/");
    let state = router.push("/anything");
    assert!(state.is_not_found());
    assert_eq!(state.location, "/anything");

    let state = router.back();
    assert_eq!(state.route.unwrap().name, "Home");
}

#[test]
fn test_named_navigation() {
    let mut router = common::router(common::site_routes(), HistoryMode::Memory, "/");
    let state = router.push_named("Settings").unwrap();
    assert_eq!(state.path, "/settings");
    assert!(matches!(
        router.push_named("Profile"),
        Err(RouterError::UnknownRouteName { .. })
    ));
}

#[test]
fn test_sync_external_replaces_entry() {
    let mut router = common::router(common::site_routes(), HistoryMode::Web, "/app");
    router.push("/about");

    let state = router
        .sync_external("https://example.com/app/settings#top")
        .unwrap();
    assert_eq!(state.route.unwrap().name, "Settings");
    assert_eq!(state.hash.as_deref(), Some("top"));

    assert!(router.sync_external("https://example.com/elsewhere").is_none());

    let state = router.back();
    assert_eq!(state.location, "/");
}

#[test]
fn test_listeners_see_navigations_in_order() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let mut router = common::router(common::site_routes(), HistoryMode::Memory, "/");
    let sink = seen.clone();
    router.subscribe(move |state| {
        let name = state.route.as_ref().map(|r| r.name.clone());
        sink.borrow_mut().push(name);
    });

    router.push("/about");
    router.push("//evil.example");
    router.replace("/nowhere");
    router.push_named("Home").unwrap();

    assert_eq!(
        *seen.borrow(),
        vec![Some("About".to_string()), None, Some("Home".to_string())]
    );
}

#[test]
fn test_href_round_trip_keeps_route() {
    let routes = vec![
        view_router::Route::new("Cafe", "/café", "CafePage"),
        view_router::Route::new("Spaced", "/a b", "SpacedPage"),
    ];
    for mode in [HistoryMode::Web, HistoryMode::Hash] {
        let mut router = common::router(routes.clone(), mode, "/app");
        for (location, name) in [("/café", "Cafe"), ("/a b", "Spaced")] {
            let pushed = router.push(location);
            assert_eq!(pushed.route.as_ref().map(|r| r.name.as_str()), Some(name));

            let synced = router
                .sync_external(&format!("https://example.com{}", pushed.href))
                .unwrap();
            assert_eq!(synced.location, location, "{mode:?}");
            assert_eq!(synced.route, pushed.route, "{mode:?}");
        }
    }
}
