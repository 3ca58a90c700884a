use chrono::{Datelike, Local, NaiveDate};

use slash_menu::HandlerTable;

/// Handlers for catalog commands that compute their text at commit time.
pub struct HostHandlers;

impl HandlerTable for HostHandlers {
    fn insert_text(&self, id: &str) -> Option<String> {
        match id {
            "date.today" => Some(format!(
                "[[{}]]",
                format_daily_title(Local::now().date_naive())
            )),
            _ => None,
        }
    }
}

/// Daily note title such as "March 1st, 2026".
pub(crate) fn format_daily_title(date: NaiveDate) -> String {
    let month = match date.month() {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    };
    let day = date.day();
    let suffix = match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    };
    format!("{} {}{}, {}", month, day, suffix, date.year())
}
