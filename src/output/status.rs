use chrono::NaiveDate;

use crate::consts::DATE_FORMAT;

pub(crate) fn status_message(count: i64) -> String {
    format!("🍅 Pomodoros completed today: {count}")
}

pub(crate) fn reset_message() -> &'static str {
    "🍅 Today's pomodoro count has been reset to 0."
}

pub(crate) fn output_status_json(date: NaiveDate, count: i64) -> serde_json::Result<String> {
    let output = serde_json::json!({
        "date": date.format(DATE_FORMAT).to_string(),
        "pomodoros": count,
    });
    serde_json::to_string(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_json_has_date_and_count() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        let json = output_status_json(date, 6).unwrap();
        assert_eq!(json, r#"{"date":"2025-01-02","pomodoros":6}"#);
    }

    #[test]
    fn status_message_format() {
        assert_eq!(status_message(0), "🍅 Pomodoros completed today: 0");
    }
}
