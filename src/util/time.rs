use std::fmt::Display;

use chrono::{DateTime, Local, TimeZone};

/// Second-resolution stamp used in saved file names, e.g. `20240131_154502`
pub fn format_file_timestamp<Tz>(time: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    time.format("%Y%m%d_%H%M%S").to_string()
}

/// The current local time as a file-name stamp
pub fn file_timestamp() -> String {
    format_file_timestamp(&Local::now())
}
