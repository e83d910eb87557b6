use crate::domain::model::ContactBundle;
use regex::Regex;
use std::sync::LazyLock;

// 依優先順序：+52 開頭、十位數、國際格式
static PHONE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"\b(\+?52\s?1?\s?[0-9]{10})\b",
        r"\b([0-9]{10})\b",
        r"\b(\+?[0-9]{1,3}[\s-]?[0-9]{3,4}[\s-]?[0-9]{3,4}[\s-]?[0-9]{3,4})\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static WHATSAPP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:whatsapp|what's app|wa)\b[\s:]*(\+?[0-9][0-9\s-]+)").unwrap()
});

static INSTAGRAM_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\b(?:instagram\.com/|instagram|insta|ig)\b[\s:@]*([A-Za-z0-9_][A-Za-z0-9._]*)",
        // 排除 email 裡的 @
        r"(?:^|[^A-Za-z0-9._%+-])@([A-Za-z0-9_][A-Za-z0-9._]*)",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,})\b").unwrap()
});

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?[A-Za-z0-9-]+\.[A-Za-z]{2,}(?:/[^\s]*)?").unwrap()
});

/// WhatsApp 群組 id 的尾巴（例如 12345@g.us）
const GROUP_ID_LITERAL: &str = "g.us";

pub fn extract_contact_info(text: &str) -> ContactBundle {
    ContactBundle {
        contact_phone: extract_phone(text),
        contact_whatsapp: extract_whatsapp(text),
        contact_instagram: extract_instagram(text),
        contact_email: extract_email(text),
        website_url: extract_website(text),
    }
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|re| re.captures(text))
        .map(|caps| caps[1].trim().to_string())
}

pub fn extract_whatsapp(text: &str) -> Option<String> {
    WHATSAPP_RE
        .captures(text)
        .map(|caps| caps[1].trim().to_string())
        .filter(|number| !number.is_empty())
}

pub fn extract_instagram(text: &str) -> Option<String> {
    INSTAGRAM_PATTERNS.iter().find_map(|re| {
        let caps = re.captures(text)?;
        let handle = caps[1].trim().trim_end_matches('.');
        if handle.chars().count() > 2 && !handle.starts_with(GROUP_ID_LITERAL) {
            Some(handle.to_string())
        } else {
            None
        }
    })
}

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL_RE.captures(text).map(|caps| caps[1].to_string())
}

pub fn extract_website(text: &str) -> Option<String> {
    // email 裡的任何片段都不算網站
    let emails: Vec<(usize, usize)> = EMAIL_RE
        .find_iter(text)
        .map(|m| (m.start(), m.end()))
        .collect();
    WEBSITE_RE
        .find_iter(text)
        .find(|m| {
            !emails
                .iter()
                .any(|&(start, end)| m.start() < end && start < m.end())
        })
        .map(|m| {
            m.as_str()
                .trim_end_matches(|c: char| matches!(c, '.' | ',' | ';' | ':' | '!' | '?' | ')'))
                .to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_prefers_country_code() {
        assert_eq!(
            extract_phone("Llama al +52 9581234567 o al 9587654321"),
            Some("52 9581234567".to_string())
        );
    }

    #[test]
    fn test_phone_bare_ten_digits() {
        assert_eq!(
            extract_phone("Info: 9581234567"),
            Some("9581234567".to_string())
        );
    }

    #[test]
    fn test_phone_international_shape() {
        assert_eq!(
            extract_phone("call 1 555 123 4567 today"),
            Some("1 555 123 4567".to_string())
        );
    }

    #[test]
    fn test_no_phone_in_plain_text() {
        assert_eq!(extract_phone("no numbers here, only $200"), None);
    }

    #[test]
    fn test_whatsapp_label() {
        assert_eq!(
            extract_whatsapp("Reservas por WhatsApp: +52 958 123 4567\nGracias"),
            Some("+52 958 123 4567".to_string())
        );
        assert_eq!(extract_whatsapp("wa 958-123-4567"), Some("958-123-4567".to_string()));
        assert_eq!(extract_whatsapp("Tiwanaku 123"), None);
    }

    #[test]
    fn test_instagram_label_beats_generic_handle() {
        assert_eq!(
            extract_instagram("Follow @someone or IG: casaverde.mzt"),
            Some("casaverde.mzt".to_string())
        );
    }

    #[test]
    fn test_instagram_generic_handle() {
        assert_eq!(
            extract_instagram("contact @yogamaz for details"),
            Some("yogamaz".to_string())
        );
    }

    #[test]
    fn test_instagram_from_profile_url() {
        assert_eq!(
            extract_instagram("see instagram.com/casaverde."),
            Some("casaverde".to_string())
        );
    }

    #[test]
    fn test_instagram_rejects_short_and_group_ids() {
        assert_eq!(extract_instagram("hola @ab que tal"), None);
        assert_eq!(extract_instagram("12036302@g.us sent a message"), None);
    }

    #[test]
    fn test_instagram_ignores_email_addresses() {
        assert_eq!(extract_instagram("write to hola@casaverde.mx"), None);
    }

    #[test]
    fn test_email() {
        assert_eq!(
            extract_email("Escribe a reservas@casa-verde.mx por favor"),
            Some("reservas@casa-verde.mx".to_string())
        );
    }

    #[test]
    fn test_website_with_scheme_and_path() {
        assert_eq!(
            extract_website("Menu: https://www.cafeluna.com/menu, see you"),
            Some("https://www.cafeluna.com/menu".to_string())
        );
    }

    #[test]
    fn test_website_skips_email_domain() {
        assert_eq!(extract_website("write to hola@casaverde.mx"), None);
        assert_eq!(
            extract_website("hola@casaverde.mx or casaverde.mx/yoga"),
            Some("casaverde.mx/yoga".to_string())
        );
    }

    #[test]
    fn test_website_skips_dotted_email_local_part() {
        let bundle = extract_contact_info("Escribe a ana.lopez@gmail.com para reservar");
        assert_eq!(bundle.contact_email.as_deref(), Some("ana.lopez@gmail.com"));
        assert!(bundle.website_url.is_none());
    }

    #[test]
    fn test_bundle_leaves_missing_fields_unset() {
        let bundle = extract_contact_info("Yoga workshop this Friday, contact @yogamaz");
        assert_eq!(bundle.contact_instagram.as_deref(), Some("yogamaz"));
        assert!(bundle.contact_phone.is_none());
        assert!(bundle.contact_whatsapp.is_none());
        assert!(bundle.contact_email.is_none());
        assert!(bundle.website_url.is_none());
    }
}
