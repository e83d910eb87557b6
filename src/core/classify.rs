use crate::core::keywords::keyword_regex;
use regex::Regex;
use std::sync::LazyLock;

const EVENT_KEYWORDS: &[&str] = &[
    "evento",
    "workshop",
    "taller",
    "clase",
    "class",
    "fiesta",
    "party",
    "concert",
    "concierto",
    "performance",
    "gathering",
    "reunión",
    "ceremony",
    "ceremonia",
    "festival",
    "retiro",
    "retreat",
    "circle",
    "círculo",
    "session",
    "sesión",
    r"invit(?:ación|amos|an)",
    "next",
    "próximo",
    r"this\s+(?:week|friday|saturday|sunday)",
    r"este\s+(?:viernes|sábado|domingo|fin de semana)",
];

const PLACE_KEYWORDS: &[&str] = &[
    "restaurant",
    "cafe",
    "café",
    "bar",
    "hotel",
    "hostel",
    "cabañas?",
    "beach",
    "playa",
    "studio",
    "venue",
    "espacio",
    "tienda",
    "shop",
    "location",
    "ubicación",
    "address",
    "dirección",
    "abre",
    "open",
    "horario",
    "hours",
];

const SERVICE_KEYWORDS: &[&str] = &[
    r"ofrez(?:co|ca)",
    "offer",
    "servicio",
    "service",
    "yoga",
    "masaje",
    "massage",
    "therapy",
    "terapia",
    "teaching",
    "enseñanza",
    "clases?",
    "lessons?",
    "transport",
    "transporte",
    "driver",
    "chofer",
    "cleaning",
    "limpieza",
    "repair",
    "reparación",
    "cooking",
    "cocina",
    "haircut",
    "corte de pelo",
    "vendo",
    "selling",
    "for sale",
    "se vende",
];

static EVENT_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(EVENT_KEYWORDS));
static PLACE_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(PLACE_KEYWORDS));
static SERVICE_RE: LazyLock<Regex> = LazyLock::new(|| keyword_regex(SERVICE_KEYWORDS));

/// 訊息是否在宣傳活動
pub fn is_event(text: &str) -> bool {
    EVENT_RE.is_match(text)
}

/// 訊息是否提到地點或場地
pub fn is_place(text: &str) -> bool {
    PLACE_RE.is_match(text)
}

/// 訊息是否在提供服務或販售
pub fn is_service(text: &str) -> bool {
    SERVICE_RE.is_match(text)
}
