use chorecast::config::Config;
use chorecast::schedule::{DateWindow, ScheduleConfig};
use chrono::{Duration, NaiveDate};

fn fall_2025() -> ScheduleConfig {
    Config::default().schedule().unwrap()
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_window_boundaries_yield_sentinel() {
    let cfg = fall_2025();

    assert!(cfg.assignments_for(d(2025, 8, 25)).is_none());
    assert!(cfg.assignments_for(d(2025, 12, 6)).is_none());
    assert!(cfg.assignments_for(d(2024, 1, 1)).is_none());

    // Both endpoints are inclusive.
    assert!(cfg.assignments_for(d(2025, 8, 26)).is_some());
    assert!(cfg.assignments_for(d(2025, 12, 5)).is_some());
}

#[test]
fn test_day_zero_anchor_assignment() {
    let cfg = fall_2025();
    let a = cfg.assignments_for(d(2025, 8, 26)).unwrap();

    assert_eq!(a.trash, "Hall");
    assert_eq!(a.vacuum, "Andrew");
    assert_eq!(a.bathroom_group1, "Leo");
    assert_eq!(a.bathroom_group2, "Eli");
    assert_eq!(a.living_room.as_deref(), Some("Leo"));
}

#[test]
fn test_weekly_rotation_sequence() {
    let cfg = fall_2025();
    let start = d(2025, 8, 26);

    let expected_trash = ["Hall", "Leo", "Phil", "Karti", "Andrew"];
    // Week 4 vacuum lands on Leo, who already has bathroom duty that week,
    // so it advances to Phil.
    let expected_vacuum = ["Andrew", "Eli", "Mitchell", "Hall", "Phil"];

    for week in 0..5 {
        let a = cfg
            .assignments_for(start + Duration::days(7 * week as i64))
            .unwrap();
        assert_eq!(a.trash, expected_trash[week], "trash week {}", week);
        assert_eq!(a.vacuum, expected_vacuum[week], "vacuum week {}", week);
    }
}

#[test]
fn test_trash_advances_past_bathroom_collision() {
    let cfg = fall_2025();
    // Week 8: the base trash slot is Leo, who holds group 1 bathroom duty
    // that week, so trash moves on to Phil.
    let a = cfg.assignments_for(d(2025, 10, 21)).unwrap();

    assert_eq!(a.bathroom_group1, "Leo");
    assert_eq!(a.bathroom_group2, "Hall");
    assert_eq!(a.trash, "Phil");
    assert_eq!(a.vacuum, "Eli");
}

#[test]
fn test_assignments_stable_within_a_week() {
    let cfg = fall_2025();
    let start = d(2025, 8, 26);

    for week in 0..14 {
        let base = cfg
            .assignments_for(start + Duration::days(7 * week))
            .unwrap();
        for day in 1..7 {
            let date = start + Duration::days(7 * week + day);
            let Some(a) = cfg.assignments_for(date) else {
                continue; // past window end
            };
            assert_eq!(a.trash, base.trash);
            assert_eq!(a.vacuum, base.vacuum);
            assert_eq!(a.bathroom_group1, base.bathroom_group1);
            assert_eq!(a.bathroom_group2, base.bathroom_group2);
        }
    }
}

#[test]
fn test_whole_window_is_total_and_distinct() {
    let cfg = fall_2025();
    let mut date = cfg.window.start;

    while date <= cfg.window.end {
        let a = cfg
            .assignments_for(date)
            .unwrap_or_else(|| panic!("no assignment for {}", date));

        for who in [&a.trash, &a.vacuum, &a.bathroom_group1, &a.bathroom_group2] {
            assert!(cfg.roster.contains(who), "{} not in roster", who);
        }

        // With 7 members the bounded retries always reach full distinctness.
        let weekly = [&a.trash, &a.vacuum, &a.bathroom_group1, &a.bathroom_group2];
        for i in 0..weekly.len() {
            for j in (i + 1)..weekly.len() {
                assert_ne!(weekly[i], weekly[j], "collision on {}", date);
            }
        }

        date += Duration::days(1);
    }
}

#[test]
fn test_living_room_every_other_day() {
    let cfg = fall_2025();
    let start = cfg.window.start;

    for offset in 0..=101u64 {
        let a = cfg
            .assignments_for(start + Duration::days(offset as i64))
            .unwrap();
        if offset % 2 == 0 {
            let expected = &cfg.roster[((offset / 2) as usize) % cfg.roster.len()];
            assert_eq!(a.living_room.as_ref(), Some(expected), "day {}", offset);
        } else {
            assert!(a.living_room.is_none(), "day {}", offset);
        }
    }
}

#[test]
fn test_week_zero_shifts_colliding_group_not_anchor() {
    // Reduced roster where the anchor also heads group 1 on week 0.
    let cfg = ScheduleConfig {
        roster: vec!["A".into(), "B".into(), "C".into()],
        group1: vec![0, 1],
        group2: vec![2],
        window: DateWindow {
            start: d(2025, 1, 1),
            end: d(2025, 1, 31),
        },
        trash_anchor: 0,
        vacuum_stagger: 1,
    };

    let a = cfg.assignments_for(d(2025, 1, 1)).unwrap();
    assert_eq!(a.trash, "A", "anchor must keep trash on week 0");
    assert_eq!(a.bathroom_group1, "B", "group 1 shifts off the anchor");
    assert_eq!(a.bathroom_group2, "C");
    // Three members cannot fill four distinct roles; the bounded retry
    // gives up and accepts the collision instead of looping forever.
    assert_eq!(a.vacuum, "C");
}

#[test]
fn test_window_clamp_and_offsets() {
    let window = DateWindow {
        start: d(2025, 8, 26),
        end: d(2025, 12, 5),
    };

    assert_eq!(window.clamp(d(2025, 8, 1)), window.start);
    assert_eq!(window.clamp(d(2026, 1, 1)), window.end);
    assert_eq!(window.clamp(d(2025, 10, 10)), d(2025, 10, 10));

    assert_eq!(window.day_offset(d(2025, 8, 26)), Some(0));
    assert_eq!(window.day_offset(d(2025, 9, 2)), Some(7));
    assert_eq!(window.day_offset(d(2025, 8, 25)), None);
    assert_eq!(window.week_index(d(2025, 8, 26)), Some(0));
    assert_eq!(window.week_index(d(2025, 9, 1)), Some(0));
    assert_eq!(window.week_index(d(2025, 9, 2)), Some(1));
    assert_eq!(window.day_offset(d(2025, 12, 5)), Some(101));
}

#[test]
fn test_config_validation_rejects_bad_groups() {
    let mut cfg = Config::default();
    cfg.group2 = vec!["Eli".into(), "Mitchell".into(), "Leo".into()];
    assert!(cfg.schedule().is_err(), "overlapping groups must fail");

    let mut cfg = Config::default();
    cfg.trash_anchor = "Nobody".into();
    assert!(cfg.schedule().is_err(), "unknown anchor must fail");

    let mut cfg = Config::default();
    cfg.group2 = vec!["Eli".into(), "Mitchell".into()];
    assert!(cfg.schedule().is_err(), "groups must cover the roster");

    assert!(Config::default().schedule().is_ok());
}
