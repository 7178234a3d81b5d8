use anyhow::Context;
use clap::Parser;

use climap_core::{
    CategoryFilter, Instrument, MapConfig, TimeUnit, visible_events, wmts_tile_template,
};
use climap_gibs::{builtin_events, DatasetLocale, instrument_catalog};

#[derive(Parser, Debug)]
#[command(
    name = "climap-cli",
    about = "Tra cứu sự kiện hiển thị và kế hoạch lớp phủ cho một trạng thái thanh trượt."
)]
struct Args {
    /// Vị trí thanh trượt.
    #[arg(short, long, default_value_t = 0)]
    position: u32,

    /// Đơn vị thời gian: month, season hoặc year.
    #[arg(short, long, default_value = "month")]
    unit: String,

    /// Bộ lọc danh mục: all, mixed, warm hoặc cold.
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Thiết bị lớp phủ (modis, precip, ...); bỏ trống để tắt lớp phủ.
    #[arg(short, long)]
    instrument: Option<String>,

    /// Locale của bảng sự kiện: en hoặc uk.
    #[arg(short, long, default_value = "en")]
    locale: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = MapConfig::default();
    let unit = TimeUnit::from_key(&args.unit);
    let date = config.range.resolve_date(args.position, unit);

    let events = builtin_events(DatasetLocale::from_key(&args.locale))
        .with_context(|| format!("Không nạp được bảng sự kiện locale {}", args.locale))?;

    let filter = CategoryFilter::from_key(&args.category);
    let visible = visible_events(&events, date, filter);

    println!("Date: {} (cutoff {})", date.format("%Y-%m"), date);
    println!("Visible events: {}", visible.len());
    for event in &visible {
        println!(
            "  [{}] {} ({}) - {}",
            event.id, event.name, event.date, event.country
        );
    }

    if let Some(key) = args.instrument.as_deref() {
        match Instrument::from_key(key) {
            Some(instrument) => {
                let catalog = instrument_catalog();
                println!("Overlay plan for {key}:");
                for candidate in catalog.candidates(instrument) {
                    println!("  {}", wmts_tile_template(&config.wmts_endpoint, candidate, date));
                }
            }
            None => println!("Overlay: none (unknown instrument '{key}')"),
        }
    }

    Ok(())
}
