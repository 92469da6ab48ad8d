use navigation::{ActionId, MemoryHistory, NavigationController, Router};
use shared::{Location, NavigationError};

#[test]
fn walks_the_full_screen_cycle_through_history() {
    let mut controller = NavigationController::new(MemoryHistory::default());

    let steps = [
        (ActionId::NextScreen, Location::ScreenB),
        (ActionId::NextScreen, Location::ScreenA),
        (ActionId::NextScreen, Location::ScreenB),
        (ActionId::Home, Location::Root),
        (ActionId::NextScreen, Location::ScreenB),
        (ActionId::NextScreen, Location::ScreenA),
        (ActionId::Home, Location::Root),
    ];

    for (action, expected) in steps {
        let target = controller
            .render_and_trigger(action)
            .unwrap_or_else(|err| panic!("{} failed: {err}", action.as_str()));
        assert_eq!(target, expected);
        assert_eq!(controller.router().current_location(), Ok(expected));
    }

    let history = controller.into_router();
    assert_eq!(
        history.entries(),
        ["/", "/2", "/1", "/2", "/", "/2", "/1", "/"]
    );
}

#[test]
fn screen_a_is_only_reachable_from_screen_b() {
    for start in Location::ALL {
        let mut controller = NavigationController::new(MemoryHistory::at(start));
        let target = controller
            .render_and_trigger(ActionId::NextScreen)
            .expect("primary is always rendered");
        assert_eq!(target == Location::ScreenA, start == Location::ScreenB);
    }
}

#[test]
fn typed_unknown_path_blocks_rendering_until_back() {
    let mut history = MemoryHistory::at(Location::ScreenA);
    history.push("/3");

    let mut controller = NavigationController::new(history);
    assert_eq!(
        controller.render().expect_err("no screen for /3"),
        NavigationError::unknown_path("/3")
    );

    let mut history = controller.into_router();
    assert!(history.back());

    let mut controller = NavigationController::new(history);
    let view = controller.render().expect("back on screen a");
    assert_eq!(view.location, Location::ScreenA);
    controller
        .trigger(&view, ActionId::Home)
        .expect("home is rendered on screen a");
    assert_eq!(controller.router().current_path(), "/");
}
