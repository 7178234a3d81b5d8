//! Logic lõi cho dòng thời gian, bộ lọc sự kiện và lớp phủ vệ tinh.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Cấu hình engine bản đồ; có thể ghi đè từng trường từ phía nhúng.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapConfig {
    /// Địa chỉ gốc của dịch vụ WMTS cung cấp ảnh vệ tinh.
    pub wmts_endpoint: String,
    /// Số lỗi tile cho phép trước khi chuyển sang ứng viên kế tiếp.
    pub tile_error_threshold: u32,
    /// Thời gian chờ (ms) cho một ứng viên im lặng; `None` tắt cơ chế chờ.
    pub candidate_timeout_ms: Option<u32>,
    /// Chu kỳ (ms) của chế độ phát tự động.
    pub play_interval_ms: u32,
    /// Khoảng ngày mà dòng thời gian bao phủ.
    pub range: TimelineRange,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            wmts_endpoint: "https://gibs.earthdata.nasa.gov".to_string(),
            tile_error_threshold: 5,
            candidate_timeout_ms: Some(15_000),
            play_interval_ms: 1_000,
            range: TimelineRange::default(),
        }
    }
}

/// Đơn vị thời gian của thanh trượt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    Month,
    Season,
    Year,
}

impl TimeUnit {
    /// Số tháng tương ứng với một bước trượt.
    pub fn months(self) -> u32 {
        match self {
            TimeUnit::Month => 1,
            TimeUnit::Season => 3,
            TimeUnit::Year => 12,
        }
    }

    /// Đọc giá trị selector; chuỗi lạ rơi về `Month`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "season" => TimeUnit::Season,
            "year" => TimeUnit::Year,
            _ => TimeUnit::Month,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            TimeUnit::Month => "month",
            TimeUnit::Season => "season",
            TimeUnit::Year => "year",
        }
    }
}

/// Khoảng ngày cố định của dòng thời gian.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimelineRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Default for TimelineRange {
    fn default() -> Self {
        Self {
            start: NaiveDate::from_ymd_opt(2021, 1, 1).unwrap_or(NaiveDate::MIN),
            end: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX),
        }
    }
}

impl TimelineRange {
    /// Tổng số tháng giữa tháng đầu và tháng cuối của khoảng.
    pub fn total_months(&self) -> u32 {
        let months = (self.end.year() - self.start.year()) * 12
            + (self.end.month() as i32 - self.start.month() as i32);
        months.max(0) as u32
    }

    /// Vị trí lớn nhất của thanh trượt với một đơn vị thời gian.
    pub fn max_position(&self, unit: TimeUnit) -> u32 {
        self.total_months() / unit.months()
    }

    /// Ngày ứng với một vị trí trượt: ngày cuối của tháng đích, để mọi sự
    /// kiện trong tháng đều thỏa `event.date <= resolved`.
    pub fn resolve_date(&self, position: u32, unit: TimeUnit) -> NaiveDate {
        let clamped = position.min(self.max_position(unit));
        let anchor = first_of_month(self.start) + Months::new(clamped * unit.months());
        last_day_of_month(anchor)
    }
}

/// Trạng thái thanh trượt; vị trí luôn nằm trong `[0, max_position]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimelineState {
    range: TimelineRange,
    unit: TimeUnit,
    position: u32,
}

impl TimelineState {
    pub fn new(range: TimelineRange) -> Self {
        Self {
            range,
            unit: TimeUnit::Month,
            position: 0,
        }
    }

    pub fn range(&self) -> TimelineRange {
        self.range
    }

    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn max_position(&self) -> u32 {
        self.range.max_position(self.unit)
    }

    /// Gán vị trí thô; giá trị âm đưa về 0, vượt biên kẹp về biên.
    pub fn set_position(&mut self, raw: i64) {
        let max = i64::from(self.max_position());
        self.position = raw.clamp(0, max) as u32;
    }

    /// Đổi đơn vị và quy đổi vị trí để giữ tháng đang hiển thị sát nhất
    /// trong mức chia nguyên cho phép.
    pub fn set_unit(&mut self, unit: TimeUnit) {
        let months = self.position * self.unit.months();
        self.unit = unit;
        self.position = (months / unit.months()).min(self.max_position());
    }

    /// Dịch một bước; đứng yên tại biên. Trả về `true` nếu vị trí đổi.
    pub fn step(&mut self, delta: i32) -> bool {
        let next = i64::from(self.position) + i64::from(delta);
        let clamped = next.clamp(0, i64::from(self.max_position())) as u32;
        if clamped == self.position {
            return false;
        }
        self.position = clamped;
        true
    }

    /// Ngày đã phân giải cho vị trí hiện tại.
    pub fn current_date(&self) -> NaiveDate {
        self.range.resolve_date(self.position, self.unit)
    }

    /// Nhãn `YYYY-MM` hiển thị cạnh thanh trượt.
    pub fn label(&self) -> String {
        self.current_date().format("%Y-%m").to_string()
    }
}

/// Nhóm hiện tượng khí hậu của một sự kiện.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Mixed,
    Warm,
    Cold,
}

impl EventCategory {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "mixed" => Some(EventCategory::Mixed),
            "warm" => Some(EventCategory::Warm),
            "cold" => Some(EventCategory::Cold),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            EventCategory::Mixed => "mixed",
            EventCategory::Warm => "warm",
            EventCategory::Cold => "cold",
        }
    }
}

/// Bộ lọc danh mục; `All` cho qua mọi sự kiện.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(EventCategory),
}

impl CategoryFilter {
    /// Đọc giá trị selector; `all` hoặc chuỗi lạ rơi về `All`.
    pub fn from_key(key: &str) -> Self {
        match EventCategory::from_key(key) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }

    pub fn matches(self, category: EventCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

/// Tọa độ địa lý của sự kiện.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Một sự kiện xung đột gắn với dị thường khí hậu; bất biến sau khi nạp,
/// ngày ở độ chính xác theo ngày.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConflictEvent {
    pub id: u32,
    pub name: String,
    pub date: NaiveDate,
    pub category: EventCategory,
    pub country: String,
    pub location: GeoPoint,
    pub description: String,
    pub source: String,
}

/// Lọc sự kiện theo ngày giới hạn và danh mục, giữ nguyên thứ tự khai báo.
pub fn visible_events<'a>(
    events: &'a [ConflictEvent],
    cutoff: NaiveDate,
    filter: CategoryFilter,
) -> Vec<&'a ConflictEvent> {
    events
        .iter()
        .filter(|event| event.date <= cutoff && filter.matches(event.category))
        .collect()
}

/// Một sản phẩm ảnh cụ thể được thử cho một thiết bị, theo thứ tự ưu tiên.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LayerCandidate {
    pub layer: String,
    pub matrix_set: String,
    pub max_zoom: u8,
    pub ext: String,
}

/// Thiết bị vệ tinh có thể chọn làm lớp phủ.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    Modis,
    Ceres,
    Mopitt,
    Misr,
    Aster,
    Precip,
    Temperature,
    Snow,
    Cloud,
}

impl Instrument {
    /// Đọc giá trị selector; `none` hoặc chuỗi lạ nghĩa là không có lớp phủ.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "modis" => Some(Instrument::Modis),
            "ceres" => Some(Instrument::Ceres),
            "mopitt" => Some(Instrument::Mopitt),
            "misr" => Some(Instrument::Misr),
            "aster" => Some(Instrument::Aster),
            "precip" => Some(Instrument::Precip),
            "temperature" => Some(Instrument::Temperature),
            "snow" => Some(Instrument::Snow),
            "cloud" => Some(Instrument::Cloud),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Instrument::Modis => "modis",
            Instrument::Ceres => "ceres",
            Instrument::Mopitt => "mopitt",
            Instrument::Misr => "misr",
            Instrument::Aster => "aster",
            Instrument::Precip => "precip",
            Instrument::Temperature => "temperature",
            Instrument::Snow => "snow",
            Instrument::Cloud => "cloud",
        }
    }
}

/// Danh mục ứng viên lớp phủ theo thiết bị; dựng một lần lúc khởi động.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstrumentCatalog {
    entries: HashMap<Instrument, Vec<LayerCandidate>>,
}

impl InstrumentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Đăng ký danh sách ứng viên cho một thiết bị, theo thứ tự ưu tiên.
    pub fn insert(&mut self, instrument: Instrument, candidates: Vec<LayerCandidate>) {
        self.entries.insert(instrument, candidates);
    }

    pub fn candidates(&self, instrument: Instrument) -> &[LayerCandidate] {
        self.entries
            .get(&instrument)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

// Mỗi thế hệ dùng tối đa 64 ứng viên khi mã hóa token.
const CANDIDATE_SLOTS: u64 = 64;

/// Thẻ nhận dạng một lần gắn lớp. Thế hệ tăng dần sau mỗi yêu cầu mới nên
/// tín hiệu trễ của thế hệ cũ luôn bị nhận ra và bỏ qua.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct LayerHandle {
    generation: u64,
    candidate: u32,
}

impl LayerHandle {
    pub fn generation(self) -> u64 {
        self.generation
    }

    pub fn candidate(self) -> u32 {
        self.candidate
    }

    /// Mã số gọn để trao đổi qua biên JS.
    pub fn token(self) -> f64 {
        (self.generation * CANDIDATE_SLOTS + u64::from(self.candidate)) as f64
    }

    /// Dựng lại thẻ từ token; token hỏng chỉ tạo ra một thẻ không khớp
    /// thế hệ nào đang chạy.
    pub fn from_token(token: f64) -> Self {
        let raw = token as u64;
        Self {
            generation: raw / CANDIDATE_SLOTS,
            candidate: (raw % CANDIDATE_SLOTS) as u32,
        }
    }
}

/// Lệnh resolver phát cho engine bản đồ bên ngoài.
#[derive(Debug, Clone, PartialEq)]
pub enum OverlayCommand {
    /// Gỡ lớp đang gắn trên bản đồ.
    Detach { handle: LayerHandle },
    /// Gắn một lớp mới; tile tải dần theo mẫu địa chỉ.
    Attach {
        handle: LayerHandle,
        url_template: String,
        max_zoom: u8,
    },
}

#[derive(Debug, Clone, PartialEq)]
enum OverlayPhase {
    Idle,
    Trying {
        candidates: Vec<LayerCandidate>,
        index: usize,
        errors: u32,
    },
    Active,
    Exhausted,
}

/// Máy trạng thái chọn lớp phủ: thử lần lượt từng ứng viên của thiết bị,
/// tụt về ứng viên kế tiếp khi quá ngưỡng lỗi, và không bao giờ giữ quá
/// một lớp gắn trên bản đồ.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayResolver {
    wmts_endpoint: String,
    tile_error_threshold: u32,
    generation: u64,
    phase: OverlayPhase,
    attached: Option<LayerHandle>,
    request: Option<(Instrument, NaiveDate)>,
}

impl OverlayResolver {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            wmts_endpoint: config.wmts_endpoint.clone(),
            tile_error_threshold: config.tile_error_threshold,
            generation: 0,
            phase: OverlayPhase::Idle,
            attached: None,
            request: None,
        }
    }

    /// Lớp đang gắn (đang thử hoặc đã ổn định), nếu có.
    pub fn attached(&self) -> Option<LayerHandle> {
        self.attached
    }

    /// Lớp đã nhận tín hiệu tải xong.
    pub fn active(&self) -> Option<LayerHandle> {
        match self.phase {
            OverlayPhase::Active => self.attached,
            _ => None,
        }
    }

    /// Đã thử hết ứng viên mà không lớp nào sống.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.phase, OverlayPhase::Exhausted)
    }

    /// Yêu cầu lớp phủ cho (thiết bị, ngày). Lặp lại đúng yêu cầu đang chạy
    /// là no-op; yêu cầu khác luôn gỡ lớp cũ trước rồi bắt đầu lại từ ứng
    /// viên đầu tiên với thế hệ mới.
    pub fn resolve(
        &mut self,
        instrument: Option<Instrument>,
        date: NaiveDate,
        catalog: &InstrumentCatalog,
    ) -> Vec<OverlayCommand> {
        let request = instrument.map(|instrument| (instrument, date));
        if request == self.request {
            return Vec::new();
        }
        self.request = request;

        let mut commands = Vec::new();
        self.release(&mut commands);
        self.generation += 1;

        let Some((instrument, _)) = request else {
            self.phase = OverlayPhase::Idle;
            return commands;
        };

        let candidates = catalog.candidates(instrument).to_vec();
        if candidates.is_empty() {
            self.phase = OverlayPhase::Idle;
            return commands;
        }

        self.phase = OverlayPhase::Trying {
            candidates,
            index: 0,
            errors: 0,
        };
        self.attach_current(&mut commands);
        commands
    }

    /// Một tile của lớp `handle` tải lỗi. Tín hiệu của thế hệ cũ bị bỏ qua.
    pub fn on_tile_error(&mut self, handle: LayerHandle) -> Vec<OverlayCommand> {
        let mut commands = Vec::new();
        if !self.is_current(handle) {
            return commands;
        }
        let threshold = self.tile_error_threshold;
        let mut over_threshold = false;
        if let OverlayPhase::Trying { errors, .. } = &mut self.phase {
            *errors += 1;
            over_threshold = *errors > threshold;
        }
        if over_threshold {
            self.advance(&mut commands);
        }
        commands
    }

    /// Lớp `handle` báo đã tải đủ tile. Tín hiệu của thế hệ cũ bị bỏ qua.
    pub fn on_layer_loaded(&mut self, handle: LayerHandle) {
        if !self.is_current(handle) {
            return;
        }
        if matches!(self.phase, OverlayPhase::Trying { .. }) {
            self.phase = OverlayPhase::Active;
        }
    }

    /// Ứng viên `handle` im lặng quá thời gian chờ: coi như thất bại và
    /// chuyển sang ứng viên kế tiếp.
    pub fn on_attempt_timeout(&mut self, handle: LayerHandle) -> Vec<OverlayCommand> {
        let mut commands = Vec::new();
        if !self.is_current(handle) {
            return commands;
        }
        if matches!(self.phase, OverlayPhase::Trying { .. }) {
            self.advance(&mut commands);
        }
        commands
    }

    fn is_current(&self, handle: LayerHandle) -> bool {
        self.attached == Some(handle) && handle.generation == self.generation
    }

    fn release(&mut self, commands: &mut Vec<OverlayCommand>) {
        if let Some(handle) = self.attached.take() {
            commands.push(OverlayCommand::Detach { handle });
        }
    }

    fn attach_current(&mut self, commands: &mut Vec<OverlayCommand>) {
        let Some((_, date)) = self.request else {
            return;
        };
        let OverlayPhase::Trying {
            candidates, index, ..
        } = &self.phase
        else {
            return;
        };
        let Some(candidate) = candidates.get(*index) else {
            return;
        };
        let handle = LayerHandle {
            generation: self.generation,
            candidate: *index as u32,
        };
        commands.push(OverlayCommand::Attach {
            handle,
            url_template: wmts_tile_template(&self.wmts_endpoint, candidate, date),
            max_zoom: candidate.max_zoom,
        });
        self.attached = Some(handle);
    }

    fn advance(&mut self, commands: &mut Vec<OverlayCommand>) {
        self.release(commands);
        let exhausted = {
            let OverlayPhase::Trying {
                candidates,
                index,
                errors,
            } = &mut self.phase
            else {
                return;
            };
            *index += 1;
            *errors = 0;
            *index >= candidates.len()
        };
        if exhausted {
            self.phase = OverlayPhase::Exhausted;
            return;
        }
        self.attach_current(commands);
    }
}

/// Kết quả của một hành động trên phiên; giao diện vẽ lại theo đây.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionUpdate {
    /// Ngày đã phân giải cho trạng thái mới.
    pub date: NaiveDate,
    /// Nhãn `YYYY-MM` cạnh thanh trượt.
    pub label: String,
    /// Vị trí hiện tại của thanh trượt.
    pub position: u32,
    /// Giới hạn trên của thanh trượt (đổi theo đơn vị thời gian).
    pub max_position: u32,
    /// Lệnh gắn/gỡ lớp phủ cần chuyển cho engine bản đồ.
    pub overlay: Vec<OverlayCommand>,
    /// Chế độ phát đã tự dừng trong hành động này.
    pub stopped: bool,
}

/// Bộ điều khiển phiên: giữ toàn bộ trạng thái khả biến và gọi calendar
/// mapper, overlay resolver, event filter theo đúng thứ tự sau mỗi hành
/// động. Các truy vấn thuần nhận tham chiếu, không giữ kết quả.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSession {
    timeline: TimelineState,
    category: CategoryFilter,
    instrument: Option<Instrument>,
    resolver: OverlayResolver,
    playing: bool,
}

impl MapSession {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            timeline: TimelineState::new(config.range),
            category: CategoryFilter::All,
            instrument: None,
            resolver: OverlayResolver::new(config),
            playing: false,
        }
    }

    pub fn timeline(&self) -> &TimelineState {
        &self.timeline
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn instrument(&self) -> Option<Instrument> {
        self.instrument
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn resolver(&self) -> &OverlayResolver {
        &self.resolver
    }

    /// Phân giải trạng thái ban đầu khi phiên mở.
    pub fn start(&mut self, catalog: &InstrumentCatalog) -> SessionUpdate {
        self.refresh(catalog, false)
    }

    /// Kéo thanh trượt tới vị trí thô (đã kẹp biên, âm đưa về 0).
    pub fn set_position(&mut self, raw: i64, catalog: &InstrumentCatalog) -> SessionUpdate {
        self.timeline.set_position(raw);
        self.refresh(catalog, false)
    }

    /// Đổi đơn vị thời gian, giữ tháng đang hiển thị sát nhất có thể.
    pub fn set_unit(&mut self, unit: TimeUnit, catalog: &InstrumentCatalog) -> SessionUpdate {
        self.timeline.set_unit(unit);
        self.refresh(catalog, false)
    }

    /// Đổi bộ lọc danh mục.
    pub fn set_category(
        &mut self,
        filter: CategoryFilter,
        catalog: &InstrumentCatalog,
    ) -> SessionUpdate {
        self.category = filter;
        self.refresh(catalog, false)
    }

    /// Đổi thiết bị lớp phủ; `None` tắt lớp phủ.
    pub fn set_instrument(
        &mut self,
        instrument: Option<Instrument>,
        catalog: &InstrumentCatalog,
    ) -> SessionUpdate {
        self.instrument = instrument;
        self.refresh(catalog, false)
    }

    /// Bước lùi/tiến; đứng yên tại biên, không vòng lại.
    pub fn step(&mut self, delta: i32, catalog: &InstrumentCatalog) -> SessionUpdate {
        self.timeline.step(delta);
        self.refresh(catalog, false)
    }

    /// Bật/tắt chế độ phát; trả về trạng thái mới.
    pub fn toggle_play(&mut self) -> bool {
        self.playing = !self.playing;
        self.playing
    }

    /// Một nhịp phát: tiến một vị trí. Chạm biên phải thì tự dừng và báo
    /// cho giao diện trả nút phát về trạng thái nghỉ.
    pub fn tick(&mut self, catalog: &InstrumentCatalog) -> SessionUpdate {
        let moved = self.timeline.step(1);
        let stopped = !moved || self.timeline.position() == self.timeline.max_position();
        if stopped {
            self.playing = false;
        }
        self.refresh(catalog, stopped)
    }

    /// Tập sự kiện đang hiển thị; truy vấn thuần trên bảng sự kiện.
    pub fn visible<'a>(&self, events: &'a [ConflictEvent]) -> Vec<&'a ConflictEvent> {
        visible_events(events, self.timeline.current_date(), self.category)
    }

    pub fn on_tile_error(&mut self, handle: LayerHandle) -> Vec<OverlayCommand> {
        self.resolver.on_tile_error(handle)
    }

    pub fn on_layer_loaded(&mut self, handle: LayerHandle) {
        self.resolver.on_layer_loaded(handle)
    }

    pub fn on_attempt_timeout(&mut self, handle: LayerHandle) -> Vec<OverlayCommand> {
        self.resolver.on_attempt_timeout(handle)
    }

    fn refresh(&mut self, catalog: &InstrumentCatalog, stopped: bool) -> SessionUpdate {
        let date = self.timeline.current_date();
        let overlay = self.resolver.resolve(self.instrument, date, catalog);
        SessionUpdate {
            date,
            label: self.timeline.label(),
            position: self.timeline.position(),
            max_position: self.timeline.max_position(),
            overlay,
            stopped,
        }
    }
}

/// Lỗi chung của engine bản đồ.
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Dữ liệu đầu vào thiếu thông tin tối thiểu")]
    MissingData,
    #[error("Không đọc được dữ liệu: {0}")]
    Parse(String),
    #[error("Lỗi khác: {0}")]
    Other(String),
}

/// Mẫu địa chỉ tile WMTS; giữ nguyên `{z}/{y}/{x}` cho engine bản đồ điền.
pub fn wmts_tile_template(endpoint: &str, candidate: &LayerCandidate, date: NaiveDate) -> String {
    format!(
        "{endpoint}/wmts/epsg3857/best/{layer}/default/{time}/{matrix_set}/{{z}}/{{y}}/{{x}}.{ext}",
        layer = candidate.layer,
        time = overlay_time_param(date),
        matrix_set = candidate.matrix_set,
        ext = candidate.ext,
    )
}

/// Tham số thời gian của lớp phủ: ngày đầu tháng dạng `YYYY-MM-01`.
pub fn overlay_time_param(date: NaiveDate) -> String {
    format!("{:04}-{:02}-01", date.year(), date.month())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date) + Months::new(1) - Days::new(1)
}
