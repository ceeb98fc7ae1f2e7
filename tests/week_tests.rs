mod common;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use common::d;
use rtimesheet::core::week::{current_week_monday, generate, generate_from_str, monday_of};
use rtimesheet::errors::AppError;
use rtimesheet::models::Hours;

#[test]
fn test_generate_seven_consecutive_days_from_any_start() {
    let mut start = d(2023, 12, 20);
    for _ in 0..60 {
        let grid = generate(start).expect("grid");

        assert_eq!(grid.len(), 7);
        assert_eq!(grid[0].date, start);
        for pair in grid.windows(2) {
            assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
        }

        start = start + Days::new(1);
    }
}

#[test]
fn test_generate_starts_blank() {
    let grid = generate(d(2024, 1, 3)).expect("grid");

    assert!(grid.iter().all(|e| e.hours == Hours::ZERO));
    assert!(grid.iter().all(|e| e.description.is_empty()));
    // a Wednesday start is kept as is
    assert_eq!(grid[0].date.weekday(), Weekday::Wed);
}

#[test]
fn test_generate_is_idempotent() {
    assert_eq!(
        generate(d(2024, 2, 26)).unwrap(),
        generate(d(2024, 2, 26)).unwrap()
    );
}

#[test]
fn test_display_date_follows_date() {
    let grid = generate(d(2024, 1, 1)).unwrap();

    assert_eq!(grid[0].display_date(), "Monday, 01 Jan 2024");
    assert_eq!(grid[5].display_date(), "Saturday, 06 Jan 2024");
    assert_eq!(grid[6].display_date(), "Sunday, 07 Jan 2024");

    let weekend: Vec<bool> = grid.iter().map(|e| e.is_weekend()).collect();
    assert_eq!(weekend, vec![false, false, false, false, false, true, true]);
}

#[test]
fn test_generate_from_str_rejects_garbage() {
    assert!(matches!(
        generate_from_str("2024-13-01"),
        Err(AppError::InvalidDate(s)) if s == "2024-13-01"
    ));
    assert!(matches!(
        generate_from_str("next monday"),
        Err(AppError::InvalidDate(_))
    ));
    assert_eq!(
        generate_from_str("2024-01-01").unwrap()[0].date,
        d(2024, 1, 1)
    );
}

#[test]
fn test_monday_of_sunday_goes_back_six_days() {
    // 2024-01-07 and 2024-03-03 are Sundays
    assert_eq!(monday_of(d(2024, 1, 7)).unwrap(), d(2024, 1, 1));
    assert_eq!(monday_of(d(2024, 3, 3)).unwrap(), d(2024, 2, 26));
}

#[test]
fn test_monday_of_other_weekdays() {
    // Monday 2024-01-08 .. Saturday 2024-01-13
    for day in 8..=13 {
        assert_eq!(monday_of(d(2024, 1, day)).unwrap(), d(2024, 1, 8), "day {day}");
    }
}

#[test]
fn test_current_week_monday_is_a_monday_not_in_the_future() {
    let monday = current_week_monday().expect("today has a Monday");
    let today = chrono::Local::now().date_naive();

    assert_eq!(monday.weekday(), Weekday::Mon);
    assert!(monday <= today);
    assert!((today - monday).num_days() <= 6);
}

#[test]
fn test_monday_of_near_calendar_start_never_returns_another_weekday() {
    let mut day = NaiveDate::MIN;
    for _ in 0..7 {
        let back = u64::from(day.weekday().num_days_from_monday());
        match monday_of(day) {
            Ok(monday) => {
                assert_eq!(monday.weekday(), Weekday::Mon);
                assert_eq!(day.checked_sub_days(Days::new(back)), Some(monday));
            }
            Err(e) => {
                assert!(matches!(e, AppError::InvalidDate(_)));
                assert_eq!(day.checked_sub_days(Days::new(back)), None);
            }
        }
        day = day + Days::new(1);
    }
}
