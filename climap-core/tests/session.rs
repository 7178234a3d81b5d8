use chrono::NaiveDate;
use climap_core::{
    CategoryFilter, ConflictEvent, EventCategory, GeoPoint, Instrument, InstrumentCatalog,
    LayerCandidate, MapConfig, MapSession, OverlayCommand, TimeUnit, visible_events,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("ngày hợp lệ")
}

fn event(id: u32, ymd: (i32, u32, u32), category: EventCategory) -> ConflictEvent {
    ConflictEvent {
        id,
        name: format!("Sự kiện {id}"),
        date: date(ymd.0, ymd.1, ymd.2),
        category,
        country: "Ukraine".to_string(),
        location: GeoPoint { lat: 48.0, lon: 31.0 },
        description: String::new(),
        source: String::new(),
    }
}

fn fixture() -> Vec<ConflictEvent> {
    vec![
        event(1, (2021, 3, 10), EventCategory::Mixed),
        event(2, (2022, 7, 1), EventCategory::Warm),
        event(3, (2021, 12, 31), EventCategory::Cold),
        event(4, (2024, 10, 15), EventCategory::Mixed),
    ]
}

fn catalog() -> InstrumentCatalog {
    let mut catalog = InstrumentCatalog::new();
    catalog.insert(
        Instrument::Modis,
        vec![LayerCandidate {
            layer: "MODIS_Terra_CorrectedReflectance_TrueColor".to_string(),
            matrix_set: "GoogleMapsCompatible_Level9".to_string(),
            max_zoom: 9,
            ext: "jpg".to_string(),
        }],
    );
    catalog
}

#[test]
fn visible_set_is_monotonic_in_the_cutoff_date() {
    let events = fixture();
    let earlier = visible_events(&events, date(2022, 6, 30), CategoryFilter::All);
    let later = visible_events(&events, date(2024, 12, 31), CategoryFilter::All);

    for kept in &earlier {
        assert!(later.iter().any(|event| event.id == kept.id));
    }
    assert_eq!(earlier.len(), 2);
    assert_eq!(later.len(), 4);
}

#[test]
fn visible_set_keeps_declaration_order() {
    let events = fixture();
    let ids: Vec<u32> = visible_events(&events, date(2024, 12, 31), CategoryFilter::All)
        .iter()
        .map(|event| event.id)
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn category_filter_narrows_without_reordering() {
    let events = fixture();
    let ids: Vec<u32> = visible_events(
        &events,
        date(2024, 12, 31),
        CategoryFilter::Only(EventCategory::Mixed),
    )
    .iter()
    .map(|event| event.id)
    .collect();
    assert_eq!(ids, vec![1, 4]);

    let empty = visible_events(
        &events,
        date(2021, 1, 31),
        CategoryFilter::Only(EventCategory::Warm),
    );
    assert!(empty.is_empty());
}

#[test]
fn unknown_selector_keys_fall_back_to_safe_defaults() {
    assert_eq!(CategoryFilter::from_key("all"), CategoryFilter::All);
    assert_eq!(CategoryFilter::from_key("???"), CategoryFilter::All);
    assert_eq!(
        CategoryFilter::from_key("cold"),
        CategoryFilter::Only(EventCategory::Cold)
    );
    assert!(Instrument::from_key("none").is_none());
    assert!(Instrument::from_key("laser").is_none());
}

#[test]
fn every_action_reports_label_and_slider_bounds() {
    let config = MapConfig::default();
    let catalog = catalog();
    let mut session = MapSession::new(&config);

    let update = session.start(&catalog);
    assert_eq!(update.label, "2021-01");
    assert_eq!(update.position, 0);
    assert_eq!(update.max_position, 59);
    assert!(update.overlay.is_empty());

    let update = session.set_unit(TimeUnit::Year, &catalog);
    assert_eq!(update.max_position, 4);
}

#[test]
fn position_changes_restart_the_overlay_but_category_changes_do_not() {
    let config = MapConfig::default();
    let catalog = catalog();
    let mut session = MapSession::new(&config);
    session.start(&catalog);

    let update = session.set_instrument(Some(Instrument::Modis), &catalog);
    assert!(matches!(
        update.overlay.as_slice(),
        [OverlayCommand::Attach { .. }]
    ));

    let update = session.set_category(
        CategoryFilter::Only(EventCategory::Cold),
        &catalog,
    );
    assert!(update.overlay.is_empty(), "đổi danh mục không đụng lớp phủ");

    let update = session.set_position(3, &catalog);
    assert!(matches!(
        update.overlay.as_slice(),
        [
            OverlayCommand::Detach { .. },
            OverlayCommand::Attach { .. }
        ]
    ));
}

#[test]
fn play_tick_at_the_last_position_before_the_end_auto_stops() {
    let config = MapConfig::default();
    let catalog = catalog();
    let mut session = MapSession::new(&config);
    session.start(&catalog);

    let max = session.timeline().max_position();
    session.set_position(i64::from(max) - 1, &catalog);
    assert!(session.toggle_play());

    let update = session.tick(&catalog);
    assert_eq!(update.position, max);
    assert!(update.stopped);
    assert!(!session.is_playing());
}

#[test]
fn play_tick_at_the_end_stops_without_moving() {
    let config = MapConfig::default();
    let catalog = catalog();
    let mut session = MapSession::new(&config);
    session.start(&catalog);

    let max = session.timeline().max_position();
    session.set_position(i64::from(max), &catalog);
    session.toggle_play();

    let update = session.tick(&catalog);
    assert_eq!(update.position, max);
    assert!(update.stopped);
    assert!(!session.is_playing());
}

#[test]
fn step_at_the_bounds_changes_nothing() {
    let config = MapConfig::default();
    let catalog = catalog();
    let mut session = MapSession::new(&config);
    session.start(&catalog);

    let update = session.step(-1, &catalog);
    assert_eq!(update.position, 0);

    let max = session.timeline().max_position();
    session.set_position(i64::from(max), &catalog);
    let update = session.step(1, &catalog);
    assert_eq!(update.position, max);
    assert!(update.overlay.is_empty(), "không đổi ngày thì không đổi lớp phủ");
}

#[test]
fn session_visible_uses_current_date_and_category() {
    let config = MapConfig::default();
    let catalog = catalog();
    let events = fixture();
    let mut session = MapSession::new(&config);
    session.start(&catalog);

    assert!(session.visible(&events).is_empty());

    session.set_position(14, &catalog);
    let ids: Vec<u32> = session.visible(&events).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3]);

    session.set_category(CategoryFilter::Only(EventCategory::Cold), &catalog);
    let ids: Vec<u32> = session.visible(&events).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3]);
}
