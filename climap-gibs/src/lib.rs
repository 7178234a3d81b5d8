//! NASA GIBS instrument catalog and the curated conflict-event dataset.

use climap_core::{ConflictEvent, Instrument, InstrumentCatalog, LayerCandidate, MapError};

/// Base address of the NASA GIBS WMTS service (Web Mercator, best-quality tree).
pub const GIBS_WMTS_ENDPOINT: &str = "https://gibs.earthdata.nasa.gov";

/// Tile template of the OpenStreetMap base layer rendered beneath the overlays.
pub const OSM_TILE_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution lines required by the two tile providers.
pub const GIBS_ATTRIBUTION: &str = "NASA GIBS";
pub const OSM_ATTRIBUTION: &str = "© OpenStreetMap contributors";

const EVENTS_EN: &str = include_str!("../data/events_en.json");
const EVENTS_UK: &str = include_str!("../data/events_uk.json");

/// Locale of the builtin dataset. The engine itself is locale-free; only the
/// string content of the table differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetLocale {
    #[default]
    English,
    Ukrainian,
}

impl DatasetLocale {
    /// Parse a locale key; unknown keys fall back to English.
    pub fn from_key(key: &str) -> Self {
        match key {
            "uk" | "ua" => DatasetLocale::Ukrainian,
            _ => DatasetLocale::English,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            DatasetLocale::English => "en",
            DatasetLocale::Ukrainian => "uk",
        }
    }
}

/// Load a conflict-event table from JSON. Dates are ISO 8601 day-precision
/// strings and are parsed exactly once, here.
pub fn load_events(json: &str) -> Result<Vec<ConflictEvent>, MapError> {
    serde_json::from_str(json).map_err(|err| MapError::Parse(err.to_string()))
}

/// The curated dataset shipped with the page, in the requested locale.
pub fn builtin_events(locale: DatasetLocale) -> Result<Vec<ConflictEvent>, MapError> {
    match locale {
        DatasetLocale::English => load_events(EVENTS_EN),
        DatasetLocale::Ukrainian => load_events(EVENTS_UK),
    }
}

/// Candidate table for every selectable instrument, in priority order.
/// Layer identifiers, matrix sets and extensions must match the published
/// GIBS products exactly; a wrong extension produces nothing but tile errors.
pub fn instrument_catalog() -> InstrumentCatalog {
    let mut catalog = InstrumentCatalog::new();

    catalog.insert(
        Instrument::Modis,
        vec![
            candidate(
                "MODIS_Terra_CorrectedReflectance_TrueColor",
                "GoogleMapsCompatible_Level9",
                9,
                "jpg",
            ),
            candidate(
                "MODIS_Aqua_CorrectedReflectance_TrueColor",
                "GoogleMapsCompatible_Level9",
                9,
                "jpg",
            ),
        ],
    );

    catalog.insert(
        Instrument::Ceres,
        vec![
            candidate("CERES_NETFLUX_Monthly", "GoogleMapsCompatible_Level6", 6, "png"),
            candidate(
                "CERES_Combined_Surface_Shortwave_Flux_Direct_All_Sky_Monthly",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
        ],
    );

    catalog.insert(
        Instrument::Mopitt,
        vec![
            candidate(
                "MOPITT_CO_Daily_Total_Column_Day",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
            candidate("MOP_CO_Monthly", "GoogleMapsCompatible_Level6", 6, "png"),
        ],
    );

    catalog.insert(
        Instrument::Misr,
        vec![
            candidate(
                "MISR_Combined_Aerosol_Dark_Target_Optical_Depth_Monthly",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
            candidate(
                "MISR_Aerosol_Optical_Depth_Avg_Green_Monthly",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
        ],
    );

    catalog.insert(
        Instrument::Aster,
        vec![
            candidate(
                "ASTER_GDEM_Greyscale_Shaded_Relief",
                "GoogleMapsCompatible_Level12",
                12,
                "jpg",
            ),
            candidate(
                "ASTER_GDEM_Color_Index",
                "GoogleMapsCompatible_Level12",
                12,
                "png",
            ),
        ],
    );

    catalog.insert(
        Instrument::Precip,
        vec![
            candidate(
                "IMERG_Precipitation_Rate_30min",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
            candidate(
                "IMERG_Precipitation_Rate",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
            candidate(
                "IMERG_Precipitation_Rate_Day",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
        ],
    );

    catalog.insert(
        Instrument::Temperature,
        vec![
            candidate(
                "MODIS_Terra_Land_Surface_Temp_Day",
                "GoogleMapsCompatible_Level7",
                7,
                "png",
            ),
            candidate(
                "MODIS_Aqua_Land_Surface_Temp_Day",
                "GoogleMapsCompatible_Level7",
                7,
                "png",
            ),
            candidate("MOD_LSTD_Day_1km", "GoogleMapsCompatible_Level9", 9, "jpg"),
        ],
    );

    catalog.insert(
        Instrument::Snow,
        vec![
            candidate(
                "MODIS_Terra_NDSI_Snow_Cover",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
            candidate(
                "MODIS_Aqua_NDSI_Snow_Cover",
                "GoogleMapsCompatible_Level6",
                6,
                "png",
            ),
        ],
    );

    catalog.insert(
        Instrument::Cloud,
        vec![
            candidate(
                "MODIS_Terra_Cloud_Optical_Thickness",
                "GoogleMapsCompatible_Level7",
                7,
                "png",
            ),
            candidate(
                "MODIS_Aqua_Cloud_Optical_Thickness",
                "GoogleMapsCompatible_Level7",
                7,
                "png",
            ),
        ],
    );

    catalog
}

fn candidate(layer: &str, matrix_set: &str, max_zoom: u8, ext: &str) -> LayerCandidate {
    LayerCandidate {
        layer: layer.to_string(),
        matrix_set: matrix_set.to_string(),
        max_zoom,
        ext: ext.to_string(),
    }
}
