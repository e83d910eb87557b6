use regex::Regex;
use std::sync::LazyLock;

static LOCATION_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:\b(?:en|at)|@)\s+(\p{Lu}[\p{L} ]{2,30})",
        r"(?i:\b(?:ubicación|ubicacion|location|lugar|place))[\s:]+([\p{L} ]{3,30})",
        r"(?i:\b(?:venue|espacio))[\s:]+([\p{L} ]{3,30})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static ORGANIZER_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:organizado\s+por|organiza|organized\s+by|hosted\s+by|host)[\s:]+(\p{L}[\p{L} ]{2,30})",
        r"\b(?i:con|with|by)\s+(\p{Lu}[\p{L} ]{2,30})",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

fn first_named(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let name = caps[1].trim();
        (name.chars().count() > 2).then(|| name.to_string())
    })
}

pub fn extract_location(text: &str) -> Option<String> {
    first_named(&LOCATION_PATTERNS, text)
}

pub fn extract_organizer(text: &str) -> Option<String> {
    first_named(&ORGANIZER_PATTERNS, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_after_preposition() {
        assert_eq!(
            extract_location("Yoga workshop this Friday at Casa Verde, $200 MXN"),
            Some("Casa Verde".to_string())
        );
        assert_eq!(
            extract_location("Cena en Café Luna!"),
            Some("Café Luna".to_string())
        );
    }

    #[test]
    fn test_location_preposition_needs_word_boundary() {
        // "then" 不能當成 "en"
        assert_eq!(extract_location("and then Nothing happened"), None);
    }

    #[test]
    fn test_location_labelled() {
        assert_eq!(
            extract_location("Ubicación: playa rinconcito"),
            Some("playa rinconcito".to_string())
        );
        assert_eq!(
            extract_location("nuevo espacio: la terraza"),
            Some("la terraza".to_string())
        );
    }

    #[test]
    fn test_location_too_short_is_skipped() {
        assert_eq!(extract_location("lugar: ab"), None);
    }

    #[test]
    fn test_organizer_labelled() {
        assert_eq!(
            extract_organizer("Círculo de mujeres, organized by Luna Roja."),
            Some("Luna Roja".to_string())
        );
        assert_eq!(
            extract_organizer("Organiza: Colectivo Mar"),
            Some("Colectivo Mar".to_string())
        );
        assert_eq!(
            extract_organizer("Hosted by Ana Sol"),
            Some("Ana Sol".to_string())
        );
    }

    #[test]
    fn test_organizer_labelled_lowercase_name() {
        assert_eq!(
            extract_organizer("Taller este sábado, organiza: colectivo mar"),
            Some("colectivo mar".to_string())
        );
        assert_eq!(
            extract_organizer("Círculo de mujeres, organized by luna roja"),
            Some("luna roja".to_string())
        );
        assert_eq!(
            extract_organizer("Retreat hosted by ana sol"),
            Some("ana sol".to_string())
        );
    }

    #[test]
    fn test_organizer_preposition() {
        assert_eq!(
            extract_organizer("Clase de salsa con Pedro"),
            Some("Pedro".to_string())
        );
    }

    #[test]
    fn test_organizer_requires_capitalized_name() {
        assert_eq!(extract_organizer("come with friends and family"), None);
    }
}
