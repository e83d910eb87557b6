use crate::core::keywords::KeywordGroups;
use crate::domain::model::{EventCategory, PlaceType, ServiceCategory};
use std::sync::LazyLock;

// 順序即優先順序，不可任意調整
const EVENT_CATEGORIES: &[(EventCategory, &[&str])] = &[
    (EventCategory::Party, &["fiesta", "party", "dance", "baile", "dj"]),
    (
        EventCategory::Workshop,
        &["workshop", "taller", "training", "entrenamiento"],
    ),
    (
        EventCategory::Wellness,
        &[
            "yoga",
            "meditation",
            "meditación",
            "wellness",
            "bienestar",
            "healing",
            "sanación",
        ],
    ),
    (
        EventCategory::Music,
        &[
            "music",
            "música",
            "concert",
            "concierto",
            "band",
            "banda",
            r"live\s+music",
        ],
    ),
    (
        EventCategory::Art,
        &[
            "art",
            "arte",
            "painting",
            "pintura",
            "exhibition",
            "exposición",
            "craft",
        ],
    ),
    (
        EventCategory::Spirituality,
        &[
            "spiritual",
            "ceremony",
            "ceremonia",
            "circle",
            "círculo",
            "rituel",
            "ritual",
        ],
    ),
    (
        EventCategory::Food,
        &["food", "comida", "dinner", "cena", "lunch", "cocina", "cooking"],
    ),
    (
        EventCategory::Sports,
        &["sport", "deporte", "surf", "hiking", "caminata", "fitness"],
    ),
];

const PLACE_TYPES: &[(PlaceType, &[&str])] = &[
    (
        PlaceType::Restaurant,
        &["restaurant", "cafe", "café", "bar", "food", "comida"],
    ),
    (
        PlaceType::Accommodation,
        &["hotel", "hostel", "cabaña", "cabin", "stay", "alojamiento"],
    ),
    (
        PlaceType::Venue,
        &["venue", "espacio", "sala", "hall", "center", "centro"],
    ),
    (
        PlaceType::Activity,
        &["beach", "playa", "surf", "tour", "actividad", "activity"],
    ),
    (
        PlaceType::Shop,
        &["tienda", "shop", "store", "mercado", "market"],
    ),
    (
        PlaceType::Studio,
        &["studio", "espacio", "gallery", "galería"],
    ),
];

const SERVICE_CATEGORIES: &[(ServiceCategory, &[&str])] = &[
    (
        ServiceCategory::Wellness,
        &[
            "yoga", "masaje", "massage", "therapy", "terapia", "healing", "reiki",
        ],
    ),
    (
        ServiceCategory::Art,
        &["art", "arte", "painting", "music", "música", "craft"],
    ),
    (
        ServiceCategory::Education,
        &["teaching", "clase", "lesson", "tutoría", "curso", "course"],
    ),
    (
        ServiceCategory::Food,
        &["food", "comida", "cooking", "catering", "chef"],
    ),
    (
        ServiceCategory::Accommodation,
        &["room", "habitación", "rent", "alquiler", "stay"],
    ),
    (
        ServiceCategory::Transportation,
        &["transport", "taxi", "driver", "chofer", "car", "coche"],
    ),
    (
        ServiceCategory::Repair,
        &["repair", "reparación", "fix", "arreglo"],
    ),
    (
        ServiceCategory::Beauty,
        &["hair", "pelo", "nails", "uñas", "beauty", "belleza"],
    ),
];

static EVENT_GROUPS: LazyLock<KeywordGroups<EventCategory>> =
    LazyLock::new(|| KeywordGroups::new(EVENT_CATEGORIES));
static PLACE_GROUPS: LazyLock<KeywordGroups<PlaceType>> =
    LazyLock::new(|| KeywordGroups::new(PLACE_TYPES));
static SERVICE_GROUPS: LazyLock<KeywordGroups<ServiceCategory>> =
    LazyLock::new(|| KeywordGroups::new(SERVICE_CATEGORIES));

pub const DEFAULT_PLACE_LABEL: &str = "General";

/// 地點類型對應的人類可讀分類
pub fn place_group_label(place_type: PlaceType) -> &'static str {
    match place_type {
        PlaceType::Restaurant => "Food & Drink",
        PlaceType::Accommodation => "Lodging",
        PlaceType::Venue => "Event Space",
        PlaceType::Activity => "Activities",
        PlaceType::Shop => "Shopping",
        PlaceType::Studio => "Creative Space",
    }
}

pub fn categorize_event(text: &str) -> EventCategory {
    EVENT_GROUPS
        .first_match(text)
        .unwrap_or(EventCategory::Other)
}

/// 回傳 (類型, 分類標籤)；都沒命中時為 (venue, "General")
pub fn categorize_place(text: &str) -> (PlaceType, &'static str) {
    match PLACE_GROUPS.first_match(text) {
        Some(place_type) => (place_type, place_group_label(place_type)),
        None => (PlaceType::Venue, DEFAULT_PLACE_LABEL),
    }
}

pub fn categorize_service(text: &str) -> ServiceCategory {
    SERVICE_GROUPS
        .first_match(text)
        .unwrap_or(ServiceCategory::Other)
}
