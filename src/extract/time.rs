use chrono::NaiveTime;
use regex::{Captures, Regex};
use std::sync::LazyLock;

static HOUR_MINUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b([0-9]{1,2}):([0-9]{2})(?:\s*(am|pm)\b)?").unwrap()
});

static HOUR_MERIDIEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b([0-9]{1,2})\s*(am|pm)\b").unwrap());

fn to_time(caps: &Captures<'_>, minute_group: Option<usize>, meridiem_group: usize) -> Option<NaiveTime> {
    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match minute_group {
        Some(group) => caps.get(group)?.as_str().parse().ok()?,
        None => 0,
    };

    let marker = caps
        .get(meridiem_group)
        .map(|m| m.as_str().to_ascii_lowercase());
    match marker.as_deref() {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    // 超出 0-23 / 0-59 時 from_hms_opt 會回傳 None
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// 擷取時間並轉成 24 小時制
pub fn extract_time(text: &str) -> Option<NaiveTime> {
    HOUR_MINUTE_RE
        .captures(text)
        .and_then(|caps| to_time(&caps, Some(2), 3))
        .or_else(|| {
            HOUR_MERIDIEM_RE
                .captures(text)
                .and_then(|caps| to_time(&caps, None, 2))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hms(text: &str) -> Option<String> {
        extract_time(text).map(|t| t.format("%H:%M:%S").to_string())
    }

    #[test]
    fn test_hour_minute_without_marker() {
        assert_eq!(hms("Clase a las 9:30"), Some("09:30:00".to_string()));
        assert_eq!(hms("Empieza 18:45 en punto"), Some("18:45:00".to_string()));
    }

    #[test]
    fn test_hour_minute_with_marker() {
        assert_eq!(hms("Starts 7:15 PM sharp"), Some("19:15:00".to_string()));
        assert_eq!(hms("Desayuno 12:30am"), Some("00:30:00".to_string()));
        assert_eq!(hms("Lunch 12:30 pm"), Some("12:30:00".to_string()));
    }

    #[test]
    fn test_bare_hour_with_marker() {
        assert_eq!(hms("Party at 2pm"), Some("14:00:00".to_string()));
        assert_eq!(hms("Sunrise yoga 6 am"), Some("06:00:00".to_string()));
        assert_eq!(hms("Cierra a las 12am"), Some("00:00:00".to_string()));
        assert_eq!(hms("Open 12pm"), Some("12:00:00".to_string()));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert_eq!(hms("score 25:10"), None);
        assert_eq!(hms("ratio 10:75"), None);
        assert_eq!(hms("at 99pm"), None);
    }

    #[test]
    fn test_invalid_first_shape_falls_through() {
        assert_eq!(hms("marcador 30:00, cena 8pm"), Some("20:00:00".to_string()));
    }

    #[test]
    fn test_marker_must_be_a_word() {
        assert_eq!(hms("somos 5 amigos"), None);
    }

    #[test]
    fn test_serializes_with_seconds() {
        let time = extract_time("2pm").unwrap();
        assert_eq!(serde_json::to_string(&time).unwrap(), "\"14:00:00\"");
    }
}
