//! Cầu nối WASM <-> JavaScript trung lập framework cho engine bản đồ.

use serde::Deserialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use climap_core::{
    CategoryFilter, ConflictEvent, Instrument, MapConfig, MapError, TimeUnit, visible_events,
    wmts_tile_template,
};
use climap_gibs::{builtin_events, DatasetLocale, instrument_catalog, load_events};

#[derive(Deserialize)]
struct JsMapConfig {
    #[serde(default)]
    wmts_endpoint: Option<String>,
    #[serde(default)]
    tile_error_threshold: Option<u32>,
    #[serde(default)]
    candidate_timeout_ms: Option<u32>,
    #[serde(default)]
    play_interval_ms: Option<u32>,
}

impl From<JsMapConfig> for MapConfig {
    fn from(cfg: JsMapConfig) -> Self {
        let mut base = MapConfig::default();
        if let Some(endpoint) = cfg.wmts_endpoint {
            base.wmts_endpoint = endpoint;
        }
        if let Some(threshold) = cfg.tile_error_threshold {
            base.tile_error_threshold = threshold;
        }
        if let Some(timeout) = cfg.candidate_timeout_ms {
            base.candidate_timeout_ms = Some(timeout);
        }
        if let Some(period) = cfg.play_interval_ms {
            base.play_interval_ms = period;
        }
        base
    }
}

fn parse_config(config: Option<JsValue>) -> Result<MapConfig, JsValue> {
    match config {
        Some(js_cfg) if !js_cfg.is_undefined() && !js_cfg.is_null() => {
            let cfg: JsMapConfig = from_value(js_cfg)
                .map_err(|err| JsValue::from_str(&format!("Không đọc được config: {err}")))?;
            Ok(MapConfig::from(cfg))
        }
        _ => Ok(MapConfig::default()),
    }
}

/// Bảng sự kiện dựng sẵn theo locale ("en" hoặc "uk").
#[wasm_bindgen]
pub fn builtin_dataset(locale: Option<String>) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let locale = DatasetLocale::from_key(locale.as_deref().unwrap_or("en"));
    let events =
        builtin_events(locale).map_err(|err| JsValue::from_str(&format_map_error(err)))?;
    to_value(&events).map_err(|err| JsValue::from_str(&format!("Không serialize dataset: {err}")))
}

/// Đọc một bảng sự kiện tùy biến từ chuỗi JSON.
#[wasm_bindgen]
pub fn load_dataset(json: &str) -> Result<JsValue, JsValue> {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let events = load_events(json).map_err(|err| JsValue::from_str(&format_map_error(err)))?;
    to_value(&events).map_err(|err| JsValue::from_str(&format!("Không serialize dataset: {err}")))
}

/// Nhãn `YYYY-MM` cho một vị trí thanh trượt.
#[wasm_bindgen]
pub fn timeline_label(
    position: u32,
    unit: &str,
    config: Option<JsValue>,
) -> Result<String, JsValue> {
    let config = parse_config(config)?;
    let date = config.range.resolve_date(position, TimeUnit::from_key(unit));
    Ok(date.format("%Y-%m").to_string())
}

/// Tập sự kiện hiển thị cho (vị trí, đơn vị, danh mục) trên một dataset.
#[wasm_bindgen]
pub fn visible_for(
    dataset: JsValue,
    position: u32,
    unit: &str,
    category: &str,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let events: Vec<ConflictEvent> = from_value(dataset)
        .map_err(|err| JsValue::from_str(&format!("Không đọc được dataset: {err}")))?;
    let config = parse_config(config)?;

    let date = config.range.resolve_date(position, TimeUnit::from_key(unit));
    let filter = CategoryFilter::from_key(category);
    let visible = visible_events(&events, date, filter);

    to_value(&visible)
        .map_err(|err| JsValue::from_str(&format!("Không serialize kết quả lọc: {err}")))
}

/// Danh sách địa chỉ tile sẽ lần lượt được thử cho một thiết bị.
#[wasm_bindgen]
pub fn overlay_plan(
    instrument: &str,
    position: u32,
    unit: &str,
    config: Option<JsValue>,
) -> Result<JsValue, JsValue> {
    let config = parse_config(config)?;
    let date = config.range.resolve_date(position, TimeUnit::from_key(unit));

    let plan: Vec<String> = match Instrument::from_key(instrument) {
        Some(instrument) => {
            let catalog = instrument_catalog();
            catalog
                .candidates(instrument)
                .iter()
                .map(|candidate| wmts_tile_template(&config.wmts_endpoint, candidate, date))
                .collect()
        }
        None => Vec::new(),
    };

    to_value(&plan).map_err(|err| JsValue::from_str(&format!("Không serialize kế hoạch: {err}")))
}

fn format_map_error(err: MapError) -> String {
    format!("Map error: {err}")
}
