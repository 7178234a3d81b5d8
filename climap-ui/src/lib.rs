//! Bảng điều khiển dòng thời gian và cầu nối tới engine bản đồ, cho WebAssembly.

#[cfg(target_arch = "wasm32")]
mod styles;

#[cfg(target_arch = "wasm32")]
mod wasm_ui {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::{Rc, Weak};

    use serde::{Deserialize, Serialize};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::{console, Document, Element, HtmlInputElement, HtmlSelectElement, Window};
    use yew::events::InputEvent;
    use yew::prelude::*;
    use yew::TargetCast;

    use climap_core::{
        CategoryFilter, ConflictEvent, EventCategory, Instrument, InstrumentCatalog, LayerHandle,
        MapConfig, MapSession, OverlayCommand, SessionUpdate, TimeUnit,
    };
    use climap_gibs::{builtin_events, DatasetLocale, instrument_catalog};

    use crate::styles;

    const INSTRUMENTS: [Instrument; 9] = [
        Instrument::Modis,
        Instrument::Ceres,
        Instrument::Mopitt,
        Instrument::Misr,
        Instrument::Aster,
        Instrument::Precip,
        Instrument::Temperature,
        Instrument::Snow,
        Instrument::Cloud,
    ];

    #[wasm_bindgen]
    extern "C" {
        /// Engine bản đồ bên ngoài: vẽ tile nền, lớp phủ, marker và popup.
        /// Lớp phủ được gọi theo token số; engine báo ngược tileerror/load
        /// qua `onLayerEvent` và thao tác chuột trên marker qua
        /// `onMarkerEvent`.
        pub type MapBridge;

        #[wasm_bindgen(method, js_name = addOverlay)]
        pub fn add_overlay(this: &MapBridge, token: f64, url_template: &str, max_zoom: u32);
        #[wasm_bindgen(method, js_name = removeOverlay)]
        pub fn remove_overlay(this: &MapBridge, token: f64);
        #[wasm_bindgen(method, js_name = setMarkers)]
        pub fn set_markers(this: &MapBridge, markers: JsValue);
        #[wasm_bindgen(method, js_name = panTo)]
        pub fn pan_to(this: &MapBridge, lat: f64, lon: f64);
        #[wasm_bindgen(method, js_name = showHighlight)]
        pub fn show_highlight(this: &MapBridge, south: f64, west: f64, north: f64, east: f64);
        #[wasm_bindgen(method, js_name = clearHighlight)]
        pub fn clear_highlight(this: &MapBridge);
        #[wasm_bindgen(method, js_name = openPopup)]
        pub fn open_popup(this: &MapBridge, id: u32);
        #[wasm_bindgen(method, js_name = closePopup)]
        pub fn close_popup(this: &MapBridge, id: u32);
        #[wasm_bindgen(method, js_name = onLayerEvent)]
        pub fn on_layer_event(this: &MapBridge, callback: &js_sys::Function);
        #[wasm_bindgen(method, js_name = onMarkerEvent)]
        pub fn on_marker_event(this: &MapBridge, callback: &js_sys::Function);
    }

    /// Tay cầm chia sẻ tới engine bản đồ, so sánh theo danh tính.
    #[derive(Clone)]
    pub struct BridgeHandle(Rc<MapBridge>);

    impl BridgeHandle {
        pub fn new(bridge: MapBridge) -> Self {
            Self(Rc::new(bridge))
        }

        fn get(&self) -> &MapBridge {
            &self.0
        }
    }

    impl PartialEq for BridgeHandle {
        fn eq(&self, other: &Self) -> bool {
            Rc::ptr_eq(&self.0, &other.0)
        }
    }

    /// Dữ liệu một marker chuyển cho engine bản đồ.
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct MarkerSpec {
        id: u32,
        lat: f64,
        lon: f64,
        title: String,
        popup_html: String,
    }

    /// Bảng chuỗi giao diện; engine chạy y hệt với mọi bảng.
    #[derive(Clone, PartialEq)]
    pub struct UiStrings {
        pub heading: &'static str,
        pub unit_label: &'static str,
        pub unit_month: &'static str,
        pub unit_season: &'static str,
        pub unit_year: &'static str,
        pub category_label: &'static str,
        pub category_all: &'static str,
        pub category_mixed: &'static str,
        pub category_warm: &'static str,
        pub category_cold: &'static str,
        pub instrument_label: &'static str,
        pub instrument_none: &'static str,
        pub instruments: [(Instrument, &'static str); 9],
        pub events_heading: &'static str,
        pub events_empty: &'static str,
        pub source_label: &'static str,
        pub play_glyph: &'static str,
        pub pause_glyph: &'static str,
        pub step_back_glyph: &'static str,
        pub step_forward_glyph: &'static str,
    }

    impl UiStrings {
        pub fn for_locale(key: &str) -> Self {
            match DatasetLocale::from_key(key) {
                DatasetLocale::Ukrainian => Self::ukrainian(),
                DatasetLocale::English => Self::english(),
            }
        }

        pub fn english() -> Self {
            Self {
                heading: "Climate anomalies and warfare",
                unit_label: "Time unit",
                unit_month: "Month",
                unit_season: "Season",
                unit_year: "Year",
                category_label: "Category",
                category_all: "All events",
                category_mixed: "Mixed",
                category_warm: "Warm",
                category_cold: "Cold",
                instrument_label: "Satellite layer",
                instrument_none: "No overlay",
                instruments: [
                    (Instrument::Modis, "MODIS true color"),
                    (Instrument::Ceres, "CERES net flux"),
                    (Instrument::Mopitt, "MOPITT carbon monoxide"),
                    (Instrument::Misr, "MISR aerosols"),
                    (Instrument::Aster, "ASTER relief"),
                    (Instrument::Precip, "Precipitation"),
                    (Instrument::Temperature, "Surface temperature"),
                    (Instrument::Snow, "Snow cover"),
                    (Instrument::Cloud, "Cloud thickness"),
                ],
                events_heading: "Events",
                events_empty: "No events for the selected period.",
                source_label: "source",
                play_glyph: "▶",
                pause_glyph: "⏸",
                step_back_glyph: "«",
                step_forward_glyph: "»",
            }
        }

        pub fn ukrainian() -> Self {
            Self {
                heading: "Кліматичні аномалії та війни",
                unit_label: "Одиниця часу",
                unit_month: "Місяць",
                unit_season: "Сезон",
                unit_year: "Рік",
                category_label: "Категорія",
                category_all: "Усі події",
                category_mixed: "Змішані",
                category_warm: "Теплові",
                category_cold: "Холодові",
                instrument_label: "Супутниковий шар",
                instrument_none: "Без шару",
                instruments: [
                    (Instrument::Modis, "MODIS справжній колір"),
                    (Instrument::Ceres, "CERES радіаційний баланс"),
                    (Instrument::Mopitt, "MOPITT чадний газ"),
                    (Instrument::Misr, "MISR аерозолі"),
                    (Instrument::Aster, "ASTER рельєф"),
                    (Instrument::Precip, "Опади"),
                    (Instrument::Temperature, "Температура поверхні"),
                    (Instrument::Snow, "Сніговий покрив"),
                    (Instrument::Cloud, "Хмарність"),
                ],
                events_heading: "Події",
                events_empty: "Немає подій за вибраний період.",
                source_label: "джерело",
                play_glyph: "▶",
                pause_glyph: "⏸",
                step_back_glyph: "«",
                step_forward_glyph: "»",
            }
        }

        fn instrument_name(&self, instrument: Instrument) -> &'static str {
            self.instruments
                .iter()
                .find(|(key, _)| *key == instrument)
                .map(|(_, name)| *name)
                .unwrap_or("")
        }
    }

    struct IntervalHandle {
        id: i32,
        _closure: Closure<dyn FnMut()>,
    }

    impl Drop for IntervalHandle {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(self.id);
            }
        }
    }

    fn set_interval(period_ms: i32, callback: impl FnMut() + 'static) -> Option<IntervalHandle> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                period_ms,
            )
            .ok()?;
        Some(IntervalHandle {
            id,
            _closure: closure,
        })
    }

    struct TimeoutHandle {
        id: i32,
        _closure: Closure<dyn FnMut()>,
    }

    impl Drop for TimeoutHandle {
        fn drop(&mut self) {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(self.id);
            }
        }
    }

    fn set_timeout(delay_ms: i32, callback: impl FnMut() + 'static) -> Option<TimeoutHandle> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut()>);
        let id = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(TimeoutHandle {
            id,
            _closure: closure,
        })
    }

    enum AppAction {
        Start,
        SetPosition(i64),
        SetUnit(TimeUnit),
        SetCategory(CategoryFilter),
        SetInstrument(Option<Instrument>),
        Step(i32),
        TogglePlay,
        Tick,
        LayerError(f64),
        LayerLoaded(f64),
        AttemptTimeout(f64),
        MarkerClick(u32),
        MarkerEnter(u32),
        MarkerLeave(u32),
        FocusEvent(u32),
    }

    /// Ảnh chụp trạng thái cho phần DOM do yew vẽ.
    #[derive(Clone, PartialEq)]
    struct ViewModel {
        label: String,
        position: u32,
        max_position: u32,
        playing: bool,
        unit: TimeUnit,
        category: CategoryFilter,
        instrument: Option<Instrument>,
        rows: Vec<VisibleRow>,
    }

    #[derive(Clone, PartialEq)]
    struct VisibleRow {
        id: u32,
        title: String,
    }

    /// Toàn bộ trạng thái khả biến của trang, gom về một chỗ: phiên lõi,
    /// bảng ghim popup và các timer đang chạy.
    struct AppCore {
        bridge: BridgeHandle,
        config: MapConfig,
        strings: UiStrings,
        catalog: InstrumentCatalog,
        events: Vec<ConflictEvent>,
        session: MapSession,
        pinned: HashMap<u32, bool>,
        play_timer: Option<IntervalHandle>,
        attempt_timers: HashMap<u64, TimeoutHandle>,
        notifier: Option<Callback<AppAction>>,
        listeners: Vec<Closure<dyn FnMut(JsValue, f64)>>,
    }

    impl AppCore {
        fn new(props: &ClimateMapProps) -> Self {
            Self {
                bridge: props.bridge.clone(),
                config: props.config.clone(),
                strings: props.strings.clone(),
                catalog: instrument_catalog(),
                events: props.events.clone(),
                session: MapSession::new(&props.config),
                pinned: HashMap::new(),
                play_timer: None,
                attempt_timers: HashMap::new(),
                notifier: None,
                listeners: Vec::new(),
            }
        }

        fn handle(&mut self, action: AppAction) {
            match action {
                AppAction::Start => {
                    let update = self.session.start(&self.catalog);
                    self.apply(update);
                }
                AppAction::SetPosition(raw) => {
                    let update = self.session.set_position(raw, &self.catalog);
                    self.apply(update);
                }
                AppAction::SetUnit(unit) => {
                    let update = self.session.set_unit(unit, &self.catalog);
                    self.apply(update);
                }
                AppAction::SetCategory(filter) => {
                    let update = self.session.set_category(filter, &self.catalog);
                    self.apply(update);
                }
                AppAction::SetInstrument(instrument) => {
                    let update = self.session.set_instrument(instrument, &self.catalog);
                    self.apply(update);
                }
                AppAction::Step(delta) => {
                    let update = self.session.step(delta, &self.catalog);
                    self.apply(update);
                }
                AppAction::TogglePlay => self.toggle_play(),
                AppAction::Tick => {
                    let update = self.session.tick(&self.catalog);
                    self.apply(update);
                }
                AppAction::LayerError(token) => {
                    let commands = self.session.on_tile_error(LayerHandle::from_token(token));
                    self.run_overlay_commands(&commands);
                }
                AppAction::LayerLoaded(token) => {
                    let handle = LayerHandle::from_token(token);
                    self.session.on_layer_loaded(handle);
                    self.cancel_attempt_timer(handle);
                }
                AppAction::AttemptTimeout(token) => {
                    let handle = LayerHandle::from_token(token);
                    self.attempt_timers.remove(&(token as u64));
                    let commands = self.session.on_attempt_timeout(handle);
                    self.run_overlay_commands(&commands);
                }
                AppAction::MarkerClick(id) => self.marker_click(id),
                AppAction::MarkerEnter(id) => {
                    if !self.is_pinned(id) {
                        self.bridge.get().open_popup(id);
                    }
                }
                AppAction::MarkerLeave(id) => {
                    if !self.is_pinned(id) {
                        self.bridge.get().close_popup(id);
                    }
                }
                AppAction::FocusEvent(id) => {
                    self.pinned.insert(id, true);
                    self.bridge.get().open_popup(id);
                    self.pan_and_highlight(id);
                }
            }
        }

        fn apply(&mut self, update: SessionUpdate) {
            self.run_overlay_commands(&update.overlay);
            if update.stopped {
                self.play_timer = None;
            }
            self.sync_markers();
        }

        fn run_overlay_commands(&mut self, commands: &[OverlayCommand]) {
            for command in commands {
                match command {
                    OverlayCommand::Detach { handle } => {
                        self.cancel_attempt_timer(*handle);
                        self.bridge.get().remove_overlay(handle.token());
                    }
                    OverlayCommand::Attach {
                        handle,
                        url_template,
                        max_zoom,
                    } => {
                        self.bridge
                            .get()
                            .add_overlay(handle.token(), url_template, u32::from(*max_zoom));
                        self.schedule_attempt_timer(*handle);
                    }
                }
            }
        }

        fn schedule_attempt_timer(&mut self, handle: LayerHandle) {
            let Some(delay_ms) = self.config.candidate_timeout_ms else {
                return;
            };
            let Some(notifier) = self.notifier.clone() else {
                return;
            };
            let token = handle.token();
            let timer = set_timeout(delay_ms as i32, move || {
                notifier.emit(AppAction::AttemptTimeout(token));
            });
            if let Some(timer) = timer {
                self.attempt_timers.insert(token as u64, timer);
            }
        }

        fn cancel_attempt_timer(&mut self, handle: LayerHandle) {
            self.attempt_timers.remove(&(handle.token() as u64));
        }

        fn toggle_play(&mut self) {
            if self.session.is_playing() {
                self.session.toggle_play();
                self.play_timer = None;
                return;
            }
            self.session.toggle_play();
            let Some(notifier) = self.notifier.clone() else {
                return;
            };
            self.play_timer = set_interval(self.config.play_interval_ms as i32, move || {
                notifier.emit(AppAction::Tick);
            });
        }

        fn marker_click(&mut self, id: u32) {
            let pinned = self.pinned.entry(id).or_insert(false);
            if *pinned {
                *pinned = false;
                self.bridge.get().close_popup(id);
            } else {
                *pinned = true;
                self.bridge.get().open_popup(id);
            }
            self.pan_and_highlight(id);
        }

        fn is_pinned(&self, id: u32) -> bool {
            self.pinned.get(&id).copied().unwrap_or(false)
        }

        fn pan_and_highlight(&self, id: u32) {
            let Some(event) = self.events.iter().find(|event| event.id == id) else {
                return;
            };
            let bridge = self.bridge.get();
            bridge.pan_to(event.location.lat, event.location.lon);
            bridge.show_highlight(
                event.location.lat - 1.0,
                event.location.lon - 1.5,
                event.location.lat + 1.0,
                event.location.lon + 1.5,
            );
        }

        fn sync_markers(&mut self) {
            let visible = self.session.visible(&self.events);
            self.pinned
                .retain(|id, _| visible.iter().any(|event| event.id == *id));
            self.bridge.get().clear_highlight();

            let markers: Vec<MarkerSpec> = visible
                .iter()
                .map(|event| MarkerSpec {
                    id: event.id,
                    lat: event.location.lat,
                    lon: event.location.lon,
                    title: event.name.clone(),
                    popup_html: popup_html(event, &self.strings),
                })
                .collect();

            match serde_wasm_bindgen::to_value(&markers) {
                Ok(value) => self.bridge.get().set_markers(value),
                Err(err) => console::error_1(&JsValue::from_str(&format!(
                    "Không serialize được danh sách marker: {err}"
                ))),
            }
        }

        fn view_model(&self) -> ViewModel {
            let rows = self
                .session
                .visible(&self.events)
                .iter()
                .map(|event| VisibleRow {
                    id: event.id,
                    title: format!("{} ({})", event.name, event.date.format("%Y-%m-%d")),
                })
                .collect();
            ViewModel {
                label: self.session.timeline().label(),
                position: self.session.timeline().position(),
                max_position: self.session.timeline().max_position(),
                playing: self.session.is_playing(),
                unit: self.session.timeline().unit(),
                category: self.session.category(),
                instrument: self.session.instrument(),
                rows,
            }
        }
    }

    fn popup_html(event: &ConflictEvent, strings: &UiStrings) -> String {
        format!(
            "<strong>{}</strong><br>{}<br>{}<br><a href=\"{}\" target=\"_blank\">{}</a>",
            event.name,
            event.date.format("%Y-%m-%d"),
            event.description,
            event.source,
            strings.source_label
        )
    }

    type Shared = Rc<RefCell<AppCore>>;

    fn dispatch(core: &Shared, view: &UseStateHandle<ViewModel>, action: AppAction) {
        let view_model = {
            let mut core = core.borrow_mut();
            core.handle(action);
            core.view_model()
        };
        view.set(view_model);
    }

    fn install_bridge_listeners(core: &Shared, notifier: &Callback<AppAction>) {
        let layer_listener = {
            let notifier = notifier.clone();
            Closure::wrap(Box::new(move |kind: JsValue, token: f64| {
                let kind = kind.as_string().unwrap_or_default();
                let action = match kind.as_str() {
                    "tileerror" => AppAction::LayerError(token),
                    "load" => AppAction::LayerLoaded(token),
                    _ => return,
                };
                notifier.emit(action);
            }) as Box<dyn FnMut(JsValue, f64)>)
        };

        let marker_listener = {
            let notifier = notifier.clone();
            Closure::wrap(Box::new(move |kind: JsValue, id: f64| {
                let kind = kind.as_string().unwrap_or_default();
                let id = id as u32;
                let action = match kind.as_str() {
                    "click" => AppAction::MarkerClick(id),
                    "enter" => AppAction::MarkerEnter(id),
                    "leave" => AppAction::MarkerLeave(id),
                    _ => return,
                };
                notifier.emit(action);
            }) as Box<dyn FnMut(JsValue, f64)>)
        };

        let mut core = core.borrow_mut();
        core.bridge
            .get()
            .on_layer_event(layer_listener.as_ref().unchecked_ref());
        core.bridge
            .get()
            .on_marker_event(marker_listener.as_ref().unchecked_ref());
        core.listeners.push(layer_listener);
        core.listeners.push(marker_listener);
    }

    #[derive(Properties, PartialEq)]
    pub struct ClimateMapProps {
        pub events: Vec<ConflictEvent>,
        pub strings: UiStrings,
        pub config: MapConfig,
        pub bridge: BridgeHandle,
    }

    #[function_component(ClimateMapView)]
    fn climate_map_view(props: &ClimateMapProps) -> Html {
        let core = use_mut_ref(|| AppCore::new(props));
        let view = use_state({
            let core = core.clone();
            move || core.borrow().view_model()
        });

        {
            let core = core.clone();
            let view = view.clone();
            use_effect_with((), move |_| {
                if let Some(window) = web_sys::window() {
                    if let Some(document) = window.document() {
                        if let Err(err) = styles::ensure_styles(&document) {
                            console::error_1(&err);
                        }
                    }
                }

                let notifier = {
                    let core: Weak<RefCell<AppCore>> = Rc::downgrade(&core);
                    let view = view.clone();
                    Callback::from(move |action: AppAction| {
                        if let Some(core) = core.upgrade() {
                            dispatch(&core, &view, action);
                        }
                    })
                };
                core.borrow_mut().notifier = Some(notifier.clone());
                install_bridge_listeners(&core, &notifier);

                dispatch(&core, &view, AppAction::Start);
                || ()
            });
        }

        let strings = &props.strings;
        let vm = (*view).clone();

        let on_slider = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                let raw = input.value().parse::<i64>().unwrap_or(0);
                dispatch(&core, &view, AppAction::SetPosition(raw));
            })
        };

        let on_unit = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                dispatch(
                    &core,
                    &view,
                    AppAction::SetUnit(TimeUnit::from_key(&select.value())),
                );
            })
        };

        let on_category = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                dispatch(
                    &core,
                    &view,
                    AppAction::SetCategory(CategoryFilter::from_key(&select.value())),
                );
            })
        };

        let on_instrument = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |event: Event| {
                let select: HtmlSelectElement = event.target_unchecked_into();
                dispatch(
                    &core,
                    &view,
                    AppAction::SetInstrument(Instrument::from_key(&select.value())),
                );
            })
        };

        let on_play = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |_| dispatch(&core, &view, AppAction::TogglePlay))
        };

        let on_step_back = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |_| dispatch(&core, &view, AppAction::Step(-1)))
        };

        let on_step_forward = {
            let core = core.clone();
            let view = view.clone();
            Callback::from(move |_| dispatch(&core, &view, AppAction::Step(1)))
        };

        let event_rows = if vm.rows.is_empty() {
            html! { <div class="climap-empty">{ strings.events_empty }</div> }
        } else {
            html! {
                for vm.rows.iter().map(|row| {
                    let core = core.clone();
                    let view = view.clone();
                    let id = row.id;
                    let onclick =
                        Callback::from(move |_| dispatch(&core, &view, AppAction::FocusEvent(id)));
                    html! {
                        <div class="climap-event-item" {onclick}>{ row.title.clone() }</div>
                    }
                })
            }
        };

        html! {
            <div class="climap-root">
                <header class="climap-header">
                    <h2>{ strings.heading }</h2>
                </header>
                <div class="climap-toolbar">
                    <label class="climap-field">
                        <span>{ strings.unit_label }</span>
                        <select onchange={on_unit}>
                            <option value="month" selected={vm.unit == TimeUnit::Month}>
                                { strings.unit_month }
                            </option>
                            <option value="season" selected={vm.unit == TimeUnit::Season}>
                                { strings.unit_season }
                            </option>
                            <option value="year" selected={vm.unit == TimeUnit::Year}>
                                { strings.unit_year }
                            </option>
                        </select>
                    </label>
                    <label class="climap-field">
                        <span>{ strings.category_label }</span>
                        <select onchange={on_category}>
                            <option value="all" selected={vm.category == CategoryFilter::All}>
                                { strings.category_all }
                            </option>
                            <option
                                value="mixed"
                                selected={vm.category == CategoryFilter::Only(EventCategory::Mixed)}
                            >
                                { strings.category_mixed }
                            </option>
                            <option
                                value="warm"
                                selected={vm.category == CategoryFilter::Only(EventCategory::Warm)}
                            >
                                { strings.category_warm }
                            </option>
                            <option
                                value="cold"
                                selected={vm.category == CategoryFilter::Only(EventCategory::Cold)}
                            >
                                { strings.category_cold }
                            </option>
                        </select>
                    </label>
                    <label class="climap-field">
                        <span>{ strings.instrument_label }</span>
                        <select onchange={on_instrument}>
                            <option value="none" selected={vm.instrument.is_none()}>
                                { strings.instrument_none }
                            </option>
                            {
                                for INSTRUMENTS.into_iter().map(|instrument| html! {
                                    <option
                                        value={instrument.key()}
                                        selected={vm.instrument == Some(instrument)}
                                    >
                                        { strings.instrument_name(instrument) }
                                    </option>
                                })
                            }
                        </select>
                    </label>
                </div>
                <div class="climap-transport">
                    <button type="button" onclick={on_step_back}>
                        { strings.step_back_glyph }
                    </button>
                    <button type="button" class="climap-play" onclick={on_play}>
                        { if vm.playing { strings.pause_glyph } else { strings.play_glyph } }
                    </button>
                    <button type="button" onclick={on_step_forward}>
                        { strings.step_forward_glyph }
                    </button>
                    <input
                        type="range"
                        min="0"
                        max={vm.max_position.to_string()}
                        value={vm.position.to_string()}
                        oninput={on_slider}
                    />
                    <span class="climap-time-label">{ vm.label.clone() }</span>
                </div>
                <section class="climap-events">
                    <h3>{ strings.events_heading }</h3>
                    { event_rows }
                </section>
            </div>
        }
    }

    /// Tùy chọn khi mount; mọi trường đều có thể bỏ trống.
    #[derive(Deserialize, Default)]
    struct MountOptions {
        #[serde(default)]
        locale: Option<String>,
        #[serde(default)]
        events: Option<Vec<ConflictEvent>>,
        #[serde(default)]
        config: Option<ConfigOverrides>,
    }

    #[derive(Deserialize, Default)]
    struct ConfigOverrides {
        #[serde(default)]
        wmts_endpoint: Option<String>,
        #[serde(default)]
        tile_error_threshold: Option<u32>,
        #[serde(default)]
        candidate_timeout_ms: Option<u32>,
        #[serde(default)]
        play_interval_ms: Option<u32>,
    }

    impl From<ConfigOverrides> for MapConfig {
        fn from(overrides: ConfigOverrides) -> Self {
            let mut base = MapConfig::default();
            if let Some(endpoint) = overrides.wmts_endpoint {
                base.wmts_endpoint = endpoint;
            }
            if let Some(threshold) = overrides.tile_error_threshold {
                base.tile_error_threshold = threshold;
            }
            if let Some(timeout) = overrides.candidate_timeout_ms {
                base.candidate_timeout_ms = Some(timeout);
            }
            if let Some(period) = overrides.play_interval_ms {
                base.play_interval_ms = period;
            }
            base
        }
    }

    /// Gắn bảng điều khiển vào `selector` và nối với engine bản đồ `bridge`.
    #[wasm_bindgen]
    pub fn mount_climate_map(
        selector: &str,
        bridge: JsValue,
        options: JsValue,
    ) -> Result<(), JsValue> {
        let window: Window =
            web_sys::window().ok_or_else(|| JsValue::from_str("Không có window"))?;
        let document: Document = window
            .document()
            .ok_or_else(|| JsValue::from_str("Không truy cập được document"))?;

        let target: Element = document
            .query_selector(selector)
            .map_err(|err| JsValue::from_str(&format!("Selector lỗi: {err:?}")))?
            .ok_or_else(|| JsValue::from_str("Không tìm thấy element theo selector"))?;

        let options: MountOptions = if options.is_undefined() || options.is_null() {
            MountOptions::default()
        } else {
            serde_wasm_bindgen::from_value(options)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được options: {err}")))?
        };

        let locale_key = options.locale.unwrap_or_default();
        let strings = UiStrings::for_locale(&locale_key);
        let config = options.config.map(MapConfig::from).unwrap_or_default();
        let events = match options.events {
            Some(events) => events,
            None => builtin_events(DatasetLocale::from_key(&locale_key))
                .map_err(|err| JsValue::from_str(&format!("Không nạp được bảng sự kiện: {err}")))?,
        };

        let bridge = BridgeHandle::new(bridge.unchecked_into::<MapBridge>());

        yew::Renderer::<ClimateMapView>::with_root_and_props(
            target,
            ClimateMapProps {
                events,
                strings,
                config,
                bridge,
            },
        )
        .render();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm_ui::mount_climate_map;

#[cfg(not(target_arch = "wasm32"))]
pub fn mount_climate_map(
    _: &str,
    _: wasm_bindgen::JsValue,
    _: wasm_bindgen::JsValue,
) -> Result<(), wasm_bindgen::JsValue> {
    Err(wasm_bindgen::JsValue::from_str(
        "climap-ui chỉ hỗ trợ biên dịch target wasm32",
    ))
}
