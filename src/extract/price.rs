use crate::domain::model::{Currency, Price};
use regex::Regex;
use std::sync::LazyLock;

static FREE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:free|gratis|gratuito)\b").unwrap());

struct PriceShape {
    regex: Regex,
    amount_group: usize,
    currency_group: usize,
}

impl PriceShape {
    fn new(pattern: &str, amount_group: usize, currency_group: usize) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            amount_group,
            currency_group,
        }
    }
}

static PRICE_SHAPES: LazyLock<Vec<PriceShape>> = LazyLock::new(|| {
    vec![
        // $200, $1,500.00 MXN
        PriceShape::new(
            r"(?i)(\$\s?[0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?)\s*(?:(MXN|USD|pesos?)\b)?",
            1,
            2,
        ),
        // 200 pesos, 35 USD
        PriceShape::new(
            r"(?i)\b([0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?)\s*(MXN|USD|pesos?)\b",
            1,
            2,
        ),
        // MXN 200, USD $35
        PriceShape::new(
            r"(?i)\b(MXN|USD)\s*(\$?\s?[0-9]+(?:,[0-9]{3})*(?:\.[0-9]{2})?)",
            2,
            1,
        ),
    ]
});

pub const FREE_DISPLAY: &str = "Free";

/// 擷取價格；找不到時回傳 None
pub fn extract_price(text: &str) -> Option<Price> {
    if FREE_RE.is_match(text) {
        return Some(Price {
            display: FREE_DISPLAY.to_string(),
            amount: 0.0,
            currency: None,
        });
    }

    PRICE_SHAPES.iter().find_map(|shape| {
        let caps = shape.regex.captures(text)?;
        let amount = parse_amount(caps.get(shape.amount_group)?.as_str())?;
        let currency = caps
            .get(shape.currency_group)
            .and_then(|m| parse_currency(m.as_str()))
            .unwrap_or(Currency::Mxn);

        Some(Price {
            display: caps[0].trim().to_string(),
            amount,
            currency: Some(currency),
        })
    })
}

fn parse_amount(raw: &str) -> Option<f64> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse::<f64>().ok()
}

fn parse_currency(token: &str) -> Option<Currency> {
    let upper = token.to_uppercase();
    if upper.contains("PESO") || upper == "MXN" {
        Some(Currency::Mxn)
    } else if upper == "USD" {
        Some(Currency::Usd)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_short_circuits() {
        let price = extract_price("Entrada gratis, $100 la cena").unwrap();
        assert_eq!(price.display, "Free");
        assert_eq!(price.amount, 0.0);
        assert_eq!(price.currency, None);
    }

    #[test]
    fn test_symbol_with_currency_suffix() {
        let price = extract_price("Yoga workshop, $200 MXN, contact @yogamaz").unwrap();
        assert_eq!(price.display, "$200 MXN");
        assert_eq!(price.amount, 200.0);
        assert_eq!(price.currency, Some(Currency::Mxn));
    }

    #[test]
    fn test_symbol_without_currency_defaults_to_mxn() {
        let price = extract_price("Clase de surf $350 por persona").unwrap();
        assert_eq!(price.display, "$350");
        assert_eq!(price.amount, 350.0);
        assert_eq!(price.currency, Some(Currency::Mxn));
    }

    #[test]
    fn test_thousands_and_cents() {
        let price = extract_price("Retiro completo $1,500.50 usd").unwrap();
        assert_eq!(price.amount, 1500.5);
        assert_eq!(price.currency, Some(Currency::Usd));
    }

    #[test]
    fn test_bare_amount_with_pesos() {
        let price = extract_price("Masaje de 60 min a 500 pesos").unwrap();
        assert_eq!(price.display, "500 pesos");
        assert_eq!(price.amount, 500.0);
        assert_eq!(price.currency, Some(Currency::Mxn));
    }

    #[test]
    fn test_currency_prefix() {
        let price = extract_price("Cost: USD 40 per night").unwrap();
        assert_eq!(price.display, "USD 40");
        assert_eq!(price.amount, 40.0);
        assert_eq!(price.currency, Some(Currency::Usd));
    }

    #[test]
    fn test_no_price() {
        assert_eq!(extract_price("Ceremonia de cacao el domingo"), None);
        assert_eq!(extract_price("Clase a las 9:30 con 12 personas"), None);
    }

    #[test]
    fn test_display_string_round_trips() {
        let texts = [
            "Workshop $200 MXN",
            "Clase $350 por persona",
            "Masaje 500 pesos",
            "Noche USD 40",
            "Retiro $1,500.50 usd",
            "Free meditation circle tomorrow",
        ];
        for text in texts {
            let first = extract_price(text).unwrap();
            let second = extract_price(&first.display).unwrap();
            assert_eq!(first.amount, second.amount, "amount for {}", text);
            assert_eq!(first.currency, second.currency, "currency for {}", text);
        }
    }
}
