use chrono::{Datelike, NaiveDate};
use climap_core::{TimeUnit, TimelineRange, TimelineState};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("ngày hợp lệ")
}

fn is_last_day_of_month(value: NaiveDate) -> bool {
    match value.succ_opt() {
        Some(next) => next.month() != value.month(),
        None => true,
    }
}

#[test]
fn position_zero_resolves_to_end_of_first_month() {
    let range = TimelineRange::default();
    assert_eq!(range.resolve_date(0, TimeUnit::Month), date(2021, 1, 31));
    assert_eq!(range.resolve_date(0, TimeUnit::Season), date(2021, 1, 31));
    assert_eq!(range.resolve_date(0, TimeUnit::Year), date(2021, 1, 31));
}

#[test]
fn every_position_lands_inside_range_on_a_month_end() {
    let range = TimelineRange::default();
    for unit in [TimeUnit::Month, TimeUnit::Season, TimeUnit::Year] {
        for position in 0..=range.max_position(unit) {
            let resolved = range.resolve_date(position, unit);
            assert!(resolved >= range.start, "{unit:?} @{position} trước mốc đầu");
            assert!(resolved <= range.end, "{unit:?} @{position} sau mốc cuối");
            assert!(is_last_day_of_month(resolved));
        }
    }
}

#[test]
fn max_position_follows_unit_multiplier() {
    let range = TimelineRange::default();
    assert_eq!(range.total_months(), 59);
    assert_eq!(range.max_position(TimeUnit::Month), 59);
    assert_eq!(range.max_position(TimeUnit::Season), 19);
    assert_eq!(range.max_position(TimeUnit::Year), 4);
}

#[test]
fn out_of_range_position_is_clamped_when_resolving() {
    let range = TimelineRange::default();
    assert_eq!(
        range.resolve_date(1000, TimeUnit::Month),
        range.resolve_date(range.max_position(TimeUnit::Month), TimeUnit::Month)
    );
}

#[test]
fn unit_switch_round_trip_stays_within_one_unit_width() {
    let range = TimelineRange::default();
    for position in 0..=range.max_position(TimeUnit::Month) {
        let mut state = TimelineState::new(range);
        state.set_position(i64::from(position));
        let before = state.current_date();

        state.set_unit(TimeUnit::Year);
        state.set_unit(TimeUnit::Month);
        let after = state.current_date();

        let drift = (before.year() * 12 + before.month() as i32)
            - (after.year() * 12 + after.month() as i32);
        assert!(
            drift.abs() < 12,
            "vị trí {position} lệch {drift} tháng sau vòng month->year->month"
        );
    }
}

#[test]
fn unit_switch_rescales_position_to_same_month() {
    let range = TimelineRange::default();
    let mut state = TimelineState::new(range);
    state.set_position(13);
    assert_eq!(state.label(), "2022-02");

    state.set_unit(TimeUnit::Season);
    assert_eq!(state.position(), 4);
    assert_eq!(state.label(), "2022-01");

    state.set_unit(TimeUnit::Month);
    assert_eq!(state.position(), 12);
}

#[test]
fn raw_positions_are_coerced_into_bounds() {
    let mut state = TimelineState::new(TimelineRange::default());
    state.set_position(-5);
    assert_eq!(state.position(), 0);
    state.set_position(10_000);
    assert_eq!(state.position(), state.max_position());
}

#[test]
fn step_is_a_no_op_at_both_bounds() {
    let mut state = TimelineState::new(TimelineRange::default());
    assert!(!state.step(-1));
    assert_eq!(state.position(), 0);

    state.set_position(i64::from(state.max_position()));
    assert!(!state.step(1));
    assert_eq!(state.position(), state.max_position());

    assert!(state.step(-1));
    assert_eq!(state.position(), state.max_position() - 1);
}

#[test]
fn label_is_year_dash_month() {
    let mut state = TimelineState::new(TimelineRange::default());
    assert_eq!(state.label(), "2021-01");
    state.set_unit(TimeUnit::Year);
    state.set_position(4);
    assert_eq!(state.label(), "2025-01");
}
