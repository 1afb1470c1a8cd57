use chrono::{DateTime, Datelike, Utc};
use web_sys::{HtmlElement, MouseEvent};

use crate::types::Point;

/// Pointer position relative to the canvas surface's own top-left corner
/// (not the viewport).
pub fn client_to_canvas_coords(event: &MouseEvent, canvas: &HtmlElement) -> Point {
    let rect = canvas.get_bounding_client_rect();

    let x = f64::from(event.client_x()) - rect.left();
    let y = f64::from(event.client_y()) - rect.top();

    Point::new(x, y)
}

/// Avatar fallback: first letter of each whitespace-separated name part.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

/// Absolute timestamp for headers and list entries, e.g. "Jan 15, 10:30 AM".
pub fn format_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %-I:%M %p").to_string()
}

/// Coarse relative time for project cards.
pub fn format_relative(ts: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let hours = now.signed_duration_since(*ts).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < 24 {
        format!("{hours}h ago")
    } else if hours < 168 {
        format!("{}d ago", hours / 24)
    } else {
        format!("{}/{}/{}", ts.month(), ts.day(), ts.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn initials_take_first_letter_of_each_part() {
        assert_eq!(initials("Alex Chen"), "AC");
        assert_eq!(initials("Emily Rodriguez"), "ER");
        assert_eq!(initials("Prince"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn format_date_is_short_month_and_twelve_hour() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&ts), "Jan 15, 10:30 AM");

        let evening = Utc.with_ymd_and_hms(2024, 1, 15, 17, 0, 0).unwrap();
        assert_eq!(format_date(&evening), "Jan 15, 5:00 PM");
    }

    #[test]
    fn relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();

        let minutes_ago = Utc.with_ymd_and_hms(2024, 1, 15, 11, 40, 0).unwrap();
        assert_eq!(format_relative(&minutes_ago, &now), "Just now");

        let hours_ago = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
        assert_eq!(format_relative(&hours_ago, &now), "3h ago");

        let days_ago = Utc.with_ymd_and_hms(2024, 1, 13, 12, 0, 0).unwrap();
        assert_eq!(format_relative(&days_ago, &now), "2d ago");

        let weeks_ago = Utc.with_ymd_and_hms(2023, 12, 20, 12, 0, 0).unwrap();
        assert_eq!(format_relative(&weeks_ago, &now), "12/20/2023");
    }
}
