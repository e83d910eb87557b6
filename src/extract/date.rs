use crate::domain::ports::Clock;
use chrono::{Days, NaiveDate};
use regex::{Captures, Regex};
use std::sync::LazyLock;

static DAY_FIRST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{1,2})[/-]([0-9]{1,2})[/-]([0-9]{4})").unwrap());

static YEAR_FIRST_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]{4})[/-]([0-9]{1,2})[/-]([0-9]{1,2})").unwrap());

static MONTH_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})\s+(?:de\s+)?([A-Za-z]+)\s+(?:de\s+)?([0-9]{4})").unwrap()
});

static TODAY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\b(?:hoy|today)\b").unwrap());

static TOMORROW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:mañana|tomorrow)\b").unwrap());

const SPANISH_MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

pub fn spanish_month(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    SPANISH_MONTHS
        .iter()
        .position(|m| *m == lower)
        .map(|idx| idx as u32 + 1)
}

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

/// DD/MM/YYYY，一律當作日在前
fn day_first(text: &str) -> Option<NaiveDate> {
    let caps = DAY_FIRST_RE.captures(text)?;
    NaiveDate::from_ymd_opt(number(&caps, 3)?, number(&caps, 2)?, number(&caps, 1)?)
}

fn year_first(text: &str) -> Option<NaiveDate> {
    let caps = YEAR_FIRST_RE.captures(text)?;
    NaiveDate::from_ymd_opt(number(&caps, 1)?, number(&caps, 2)?, number(&caps, 3)?)
}

fn month_name(text: &str) -> Option<NaiveDate> {
    let caps = MONTH_NAME_RE.captures(text)?;
    let month = spanish_month(&caps[2])?;
    NaiveDate::from_ymd_opt(number(&caps, 3)?, month, number(&caps, 1)?)
}

fn relative(text: &str, clock: &dyn Clock) -> Option<NaiveDate> {
    if TODAY_RE.is_match(text) {
        return Some(clock.today());
    }
    if TOMORROW_RE.is_match(text) {
        return clock.today().checked_add_days(Days::new(1));
    }
    None
}

/// 擷取日期。數字格式依序嘗試，最後才看「今天/明天」。
pub fn extract_date(text: &str, clock: &dyn Clock) -> Option<NaiveDate> {
    day_first(text)
        .or_else(|| year_first(text))
        .or_else(|| month_name(text))
        .or_else(|| relative(text, clock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::clock::FixedClock;
    use chrono::Datelike;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2025, 10, 26).unwrap())
    }

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_day_first_numeric() {
        assert_eq!(extract_date("Fiesta el 15/11/2025 en la playa", &clock()), ymd(2025, 11, 15));
        assert_eq!(extract_date("Fiesta el 3-1-2026", &clock()), ymd(2026, 1, 3));
    }

    #[test]
    fn test_ambiguous_numeric_is_day_first() {
        assert_eq!(extract_date("05/04/2026", &clock()), ymd(2026, 4, 5));
    }

    #[test]
    fn test_day_first_out_of_range_falls_through() {
        // 13 月不合法，接著看年份在前的格式，再看相對日期
        assert_eq!(extract_date("12/13/2025 hoy", &clock()), ymd(2025, 10, 26));
        assert_eq!(extract_date("32/01/2025", &clock()), None);
    }

    #[test]
    fn test_year_first() {
        assert_eq!(extract_date("Evento 2025-12-31 a medianoche", &clock()), ymd(2025, 12, 31));
        assert_eq!(extract_date("Evento 2025/02/30", &clock()), None);
    }

    #[test]
    fn test_spanish_month_name() {
        assert_eq!(
            extract_date("Nos vemos el 5 de noviembre de 2025", &clock()),
            ymd(2025, 11, 5)
        );
        assert_eq!(extract_date("el 24 DICIEMBRE 2025", &clock()), ymd(2025, 12, 24));
    }

    #[test]
    fn test_unknown_month_name_yields_none() {
        assert_eq!(extract_date("el 5 de brumario de 2025", &clock()), None);
        assert_eq!(extract_date("on 5 november 2025", &clock()), None);
    }

    #[test]
    fn test_relative_dates_use_clock() {
        assert_eq!(extract_date("Clase hoy a las 5", &clock()), ymd(2025, 10, 26));
        assert_eq!(extract_date("Free meditation circle tomorrow", &clock()), ymd(2025, 10, 27));
        assert_eq!(extract_date("Nos vemos MAÑANA", &clock()), ymd(2025, 10, 27));
    }

    #[test]
    fn test_tomorrow_rolls_over_month_end() {
        let clock = FixedClock(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        let date = extract_date("party tomorrow night", &clock).unwrap();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 1, 1));
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date("Vendo tabla de surf", &clock()), None);
    }
}
