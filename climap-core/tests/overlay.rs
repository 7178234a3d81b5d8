use chrono::NaiveDate;
use climap_core::{
    Instrument, InstrumentCatalog, LayerCandidate, LayerHandle, MapConfig, OverlayCommand,
    OverlayResolver,
};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("ngày hợp lệ")
}

fn candidate(layer: &str, ext: &str) -> LayerCandidate {
    LayerCandidate {
        layer: layer.to_string(),
        matrix_set: "GoogleMapsCompatible_Level6".to_string(),
        max_zoom: 6,
        ext: ext.to_string(),
    }
}

fn catalog() -> InstrumentCatalog {
    let mut catalog = InstrumentCatalog::new();
    catalog.insert(
        Instrument::Precip,
        vec![
            candidate("IMERG_Precipitation_Rate_30min", "png"),
            candidate("IMERG_Precipitation_Rate", "png"),
            candidate("IMERG_Precipitation_Rate_Day", "png"),
        ],
    );
    catalog.insert(
        Instrument::Snow,
        vec![candidate("MODIS_Terra_NDSI_Snow_Cover", "png")],
    );
    catalog
}

fn attach_handle(commands: &[OverlayCommand]) -> LayerHandle {
    commands
        .iter()
        .find_map(|command| match command {
            OverlayCommand::Attach { handle, .. } => Some(*handle),
            _ => None,
        })
        .expect("phải có lệnh Attach")
}

/// Mô phỏng phía engine bản đồ: phát lại luồng lệnh và canh bất biến
/// "không bao giờ quá một lớp gắn cùng lúc".
#[derive(Default)]
struct EngineMock {
    attached: Vec<LayerHandle>,
}

impl EngineMock {
    fn run(&mut self, commands: &[OverlayCommand]) {
        for command in commands {
            match command {
                OverlayCommand::Detach { handle } => {
                    let index = self
                        .attached
                        .iter()
                        .position(|current| current == handle)
                        .expect("gỡ một lớp không hề gắn");
                    self.attached.remove(index);
                }
                OverlayCommand::Attach { handle, .. } => {
                    self.attached.push(*handle);
                    assert!(self.attached.len() <= 1, "gắn quá một lớp cùng lúc");
                }
            }
        }
    }
}

#[test]
fn first_candidate_is_attached_with_templated_url() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2021, 1, 31), &catalog());

    assert_eq!(commands.len(), 1);
    let OverlayCommand::Attach {
        url_template,
        max_zoom,
        ..
    } = &commands[0]
    else {
        panic!("lệnh đầu phải là Attach");
    };
    assert_eq!(
        url_template,
        "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/IMERG_Precipitation_Rate_30min/default/2021-01-01/GoogleMapsCompatible_Level6/{z}/{y}/{x}.png"
    );
    assert_eq!(*max_zoom, 6);
}

#[test]
fn none_and_unknown_instruments_stay_idle() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    assert!(resolver
        .resolve(None, date(2021, 1, 31), &catalog())
        .is_empty());
    assert!(resolver.attached().is_none());

    // Thiết bị không có ứng viên nào trong danh mục.
    let commands = resolver.resolve(Some(Instrument::Cloud), date(2021, 1, 31), &catalog());
    assert!(commands.is_empty());
    assert!(resolver.attached().is_none());
    assert!(!resolver.is_exhausted());
}

#[test]
fn errors_over_threshold_fall_back_to_next_candidate() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2022, 6, 30), &catalog());
    let first = attach_handle(&commands);

    // Năm lỗi đầu chưa vượt ngưỡng.
    for _ in 0..5 {
        assert!(resolver.on_tile_error(first).is_empty());
    }

    let commands = resolver.on_tile_error(first);
    assert_eq!(
        commands
            .iter()
            .filter(|command| matches!(command, OverlayCommand::Detach { .. }))
            .count(),
        1
    );
    let second = attach_handle(&commands);
    assert_ne!(first, second);
    assert_eq!(second.candidate(), 1);
    assert_eq!(second.generation(), first.generation());
}

#[test]
fn exhausting_the_last_candidate_leaves_no_overlay() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Snow), date(2023, 2, 28), &catalog());
    let only = attach_handle(&commands);

    for _ in 0..5 {
        assert!(resolver.on_tile_error(only).is_empty());
    }
    let commands = resolver.on_tile_error(only);
    assert_eq!(commands, vec![OverlayCommand::Detach { handle: only }]);
    assert!(resolver.is_exhausted());
    assert!(resolver.attached().is_none());
    assert!(resolver.active().is_none());
}

#[test]
fn load_signal_makes_the_attempt_active_and_stops_error_counting() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2024, 9, 30), &catalog());
    let handle = attach_handle(&commands);

    resolver.on_layer_loaded(handle);
    assert_eq!(resolver.active(), Some(handle));

    // Lỗi tile về sau không đẩy lớp Active đi đâu nữa.
    for _ in 0..20 {
        assert!(resolver.on_tile_error(handle).is_empty());
    }
    assert_eq!(resolver.active(), Some(handle));
}

#[test]
fn stale_generation_signals_are_discarded() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2021, 3, 31), &catalog());
    let stale = attach_handle(&commands);

    let commands = resolver.resolve(Some(Instrument::Precip), date(2021, 4, 30), &catalog());
    let fresh = attach_handle(&commands);
    assert_ne!(stale.generation(), fresh.generation());

    // Tín hiệu trễ của thế hệ cũ: không lệnh, không đổi trạng thái.
    resolver.on_layer_loaded(stale);
    assert!(resolver.active().is_none());
    for _ in 0..10 {
        assert!(resolver.on_tile_error(stale).is_empty());
    }
    assert!(resolver.on_attempt_timeout(stale).is_empty());
    assert_eq!(resolver.attached(), Some(fresh));

    resolver.on_layer_loaded(fresh);
    assert_eq!(resolver.active(), Some(fresh));
}

#[test]
fn repeating_the_same_request_is_a_no_op() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2021, 5, 31), &catalog());
    let handle = attach_handle(&commands);

    assert!(resolver
        .resolve(Some(Instrument::Precip), date(2021, 5, 31), &catalog())
        .is_empty());
    assert_eq!(resolver.attached(), Some(handle));
}

#[test]
fn switching_to_none_releases_the_overlay() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Snow), date(2021, 7, 31), &catalog());
    let handle = attach_handle(&commands);
    resolver.on_layer_loaded(handle);

    let commands = resolver.resolve(None, date(2021, 7, 31), &catalog());
    assert_eq!(commands, vec![OverlayCommand::Detach { handle }]);
    assert!(resolver.attached().is_none());
    assert!(resolver.active().is_none());
}

#[test]
fn silent_candidate_times_out_into_the_next_one() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2025, 1, 31), &catalog());
    let first = attach_handle(&commands);

    let commands = resolver.on_attempt_timeout(first);
    let second = attach_handle(&commands);
    assert_eq!(second.candidate(), 1);

    // Hết ứng viên qua đường timeout cũng phải về Exhausted.
    let commands = resolver.on_attempt_timeout(second);
    let third = attach_handle(&commands);
    assert!(resolver.on_attempt_timeout(third).len() == 1);
    assert!(resolver.is_exhausted());
}

#[test]
fn rapid_successive_requests_keep_at_most_one_layer_attached() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let mut engine = EngineMock::default();
    let day = date(2023, 8, 31);

    let first = resolver.resolve(Some(Instrument::Precip), day, &catalog());
    engine.run(&first);
    let stale_a = attach_handle(&first);

    let second = resolver.resolve(Some(Instrument::Snow), day, &catalog());
    engine.run(&second);
    let stale_b = attach_handle(&second);

    let third = resolver.resolve(Some(Instrument::Precip), date(2023, 9, 30), &catalog());
    engine.run(&third);
    let last = attach_handle(&third);

    // Tín hiệu muộn của hai đợt trước trộn lẫn theo thứ tự bất kỳ.
    resolver.on_layer_loaded(stale_b);
    engine.run(&resolver.on_tile_error(stale_a));
    resolver.on_layer_loaded(stale_a);
    assert!(resolver.active().is_none());

    resolver.on_layer_loaded(last);
    assert_eq!(resolver.active(), Some(last));
    assert_eq!(engine.attached, vec![last]);
}

#[test]
fn handle_tokens_round_trip_through_the_js_boundary() {
    let mut resolver = OverlayResolver::new(&MapConfig::default());
    let commands = resolver.resolve(Some(Instrument::Precip), date(2021, 2, 28), &catalog());
    let handle = attach_handle(&commands);
    assert_eq!(LayerHandle::from_token(handle.token()), handle);
}
