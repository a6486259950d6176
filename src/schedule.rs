// File: ./src/schedule.rs
// The date -> assignment calculator. Pure, no I/O.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How many cyclic advances a collision-avoidance loop may take before the
/// remaining collision is accepted as-is.
const ROTATE_GUARD: usize = 10;

/// Inclusive date range over which assignments are defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn clamp(&self, date: NaiveDate) -> NaiveDate {
        if date < self.start {
            self.start
        } else if date > self.end {
            self.end
        } else {
            date
        }
    }

    /// Zero-based days since window start. None outside the window.
    pub fn day_offset(&self, date: NaiveDate) -> Option<u64> {
        if !self.contains(date) {
            return None;
        }
        Some((date - self.start).num_days() as u64)
    }

    /// Zero-based count of 7-day periods since window start.
    pub fn week_index(&self, date: NaiveDate) -> Option<u64> {
        self.day_offset(date).map(|d| d / 7)
    }
}

/// Everything the calculator needs. Groups are roster indices; the two
/// groups are disjoint and together cover the roster.
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    pub roster: Vec<String>,
    pub group1: Vec<usize>,
    pub group2: Vec<usize>,
    pub window: DateWindow,
    /// Roster index holding trash duty on week 0.
    pub trash_anchor: usize,
    /// Fixed offset of the vacuum rotation from the week index.
    pub vacuum_stagger: usize,
}

/// Assignments for one date. `living_room` is None on odd day offsets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignments {
    pub trash: String,
    pub vacuum: String,
    pub bathroom_group1: String,
    pub bathroom_group2: String,
    pub living_room: Option<String>,
}

impl ScheduleConfig {
    /// Compute the assignments for `date`, or None outside the window.
    ///
    /// Collision policy: week 0 keeps the anchor on trash and shifts a
    /// colliding bathroom group instead; later weeks advance trash past the
    /// bathroom assignees, then vacuum past all three. Advancing is bounded,
    /// so a roster too small to be fully distinct still terminates.
    pub fn assignments_for(&self, date: NaiveDate) -> Option<Assignments> {
        let day = self.window.day_offset(date)?;
        let week = (day / 7) as usize;

        let mut trash_idx = (week + self.trash_anchor) % self.roster.len();
        let mut bath1 = self.group1[week % self.group1.len()];
        let mut bath2 = self.group2[week % self.group2.len()];

        if week == 0 {
            // Week 0 anchor is fixed; resolve collisions inside the groups.
            if trash_idx == bath1 {
                bath1 = advance_past(&self.group1, week + 1, trash_idx);
            }
            if trash_idx == bath2 {
                bath2 = advance_past(&self.group2, week + 1, trash_idx);
            }
        } else {
            let mut guard = 0;
            while (trash_idx == bath1 || trash_idx == bath2) && guard < ROTATE_GUARD {
                trash_idx = (trash_idx + 1) % self.roster.len();
                guard += 1;
            }
        }

        let mut vacuum_idx = (week + self.vacuum_stagger) % self.roster.len();
        let mut guard = 0;
        while (vacuum_idx == trash_idx || vacuum_idx == bath1 || vacuum_idx == bath2)
            && guard < ROTATE_GUARD
        {
            vacuum_idx = (vacuum_idx + 1) % self.roster.len();
            guard += 1;
        }

        // Living room rotates through the whole roster once every two days,
        // independent of the weekly roles.
        let living_room = if day % 2 == 0 {
            let turn = (day / 2) as usize;
            Some(self.roster[turn % self.roster.len()].clone())
        } else {
            None
        };

        Some(Assignments {
            trash: self.roster[trash_idx].clone(),
            vacuum: self.roster[vacuum_idx].clone(),
            bathroom_group1: self.roster[bath1].clone(),
            bathroom_group2: self.roster[bath2].clone(),
            living_room,
        })
    }
}

/// Walk `group` cyclically from `start` until the slot differs from `avoid`.
fn advance_past(group: &[usize], start: usize, avoid: usize) -> usize {
    let mut i = start % group.len();
    let mut guard = 0;
    while group[i] == avoid && guard < ROTATE_GUARD {
        i = (i + 1) % group.len();
        guard += 1;
    }
    group[i]
}
