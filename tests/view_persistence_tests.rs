use omaps_overlay_editor::{
    AppController, AppIntent, AppState, JsonFileStore, LatLng, MapView,
};
use std::path::PathBuf;

fn temp_state_path(tag: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "omaps_view_persistence_{}_{}.json",
        tag,
        std::process::id()
    ))
}

#[test]
fn test_view_state_survives_restart() {
    let _ = env_logger::builder().is_test(true).try_init();
    let path = temp_state_path("restart");

    // Erste Session: Ausschnitt bewegen
    {
        let mut controller = AppController::new();
        let mut state = AppState::with_store(Box::new(JsonFileStore::new(&path)));
        controller
            .handle_intent(
                &mut state,
                AppIntent::ViewMoved {
                    center: LatLng::new(60.0, 31.0),
                    zoom: 12.0,
                },
            )
            .expect("Pan-Ende sollte funktionieren");
    }

    // Zweite Session: exakt derselbe Stand kommt zurueck
    {
        let mut controller = AppController::new();
        let mut state = AppState::with_store(Box::new(JsonFileStore::new(&path)));
        controller
            .handle_intent(&mut state, AppIntent::ViewRestoreRequested)
            .expect("Wiederherstellung sollte funktionieren");

        assert_eq!(state.view.map_view.center, LatLng::new(60.0, 31.0));
        assert_eq!(state.view.map_view.zoom, 12.0);
    }

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_restore_without_saved_state_uses_defaults() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.view.map_view.move_to(LatLng::new(1.0, 2.0), 9.0, 8.0, 18.0);

    controller
        .handle_intent(&mut state, AppIntent::ViewRestoreRequested)
        .expect("Wiederherstellung sollte robust sein");

    assert_eq!(state.view.map_view.center, MapView::DEFAULT_CENTER);
    assert_eq!(state.view.map_view.zoom, MapView::DEFAULT_ZOOM);
}

#[test]
fn test_every_view_move_overwrites_previous_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewMoved {
                center: LatLng::new(59.9, 30.3),
                zoom: 11.0,
            },
        )
        .expect("Pan-Ende sollte funktionieren");
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewMoved {
                center: LatLng::new(60.0, 31.0),
                zoom: 13.0,
            },
        )
        .expect("Zoom-Ende sollte funktionieren");

    let saved = state.view_store.load().expect("Stand gespeichert");
    assert_eq!(saved.lat, 60.0);
    assert_eq!(saved.lng, 31.0);
    assert_eq!(saved.zoom, 13.0);
}

#[test]
fn test_view_move_clamps_zoom_to_bounds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewMoved {
                center: LatLng::new(60.0, 31.0),
                zoom: 3.0,
            },
        )
        .expect("Zoom-Ende sollte funktionieren");

    assert_eq!(state.view.map_view.zoom, MapView::ZOOM_MIN);
}
