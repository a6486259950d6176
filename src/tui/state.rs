use crate::schedule::{Assignments, ScheduleConfig};
use crate::slideshow::Slideshow;
use chrono::{Duration, Local, NaiveDate};
use std::path::PathBuf;

pub struct AppState {
    pub schedule: ScheduleConfig,
    pub selected: NaiveDate,
    pub slideshow: Slideshow,
    pub upload_url: String,
    pub qr_path: Option<PathBuf>,
    pub message: String,
    pub loading: bool,
}

impl AppState {
    pub fn new(schedule: ScheduleConfig, upload_url: String) -> Self {
        let today = Local::now().date_naive();
        let selected = schedule.window.clamp(today);
        Self {
            schedule,
            selected,
            slideshow: Slideshow::default(),
            upload_url,
            qr_path: None,
            message: "h/l: Day | t: Today | g/G: Start/End | r: Refresh | q: Quit".to_string(),
            loading: true,
        }
    }

    pub fn assignments(&self) -> Option<Assignments> {
        self.schedule.assignments_for(self.selected)
    }

    pub fn next_day(&mut self) {
        self.selected = self.schedule.window.clamp(self.selected + Duration::days(1));
    }

    pub fn prev_day(&mut self) {
        self.selected = self.schedule.window.clamp(self.selected - Duration::days(1));
    }

    pub fn jump_today(&mut self) {
        self.selected = self.schedule.window.clamp(Local::now().date_naive());
    }

    pub fn jump_start(&mut self) {
        self.selected = self.schedule.window.start;
    }

    pub fn jump_end(&mut self) {
        self.selected = self.schedule.window.end;
    }

    pub fn can_prev(&self) -> bool {
        self.selected > self.schedule.window.start
    }

    pub fn can_next(&self) -> bool {
        self.selected < self.schedule.window.end
    }
}
