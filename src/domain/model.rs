use chrono::{NaiveDate, NaiveTime};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 一則聊天訊息，只讀
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    #[serde(default, alias = "text", alias = "body")]
    pub message_body: Option<String>,
}

impl Message {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message_body: Some(text.into()),
        }
    }

    pub fn text(&self) -> &str {
        self.message_body.as_deref().unwrap_or("")
    }
}

fn id_as_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "message id must be a string or a number, got {}",
            other
        ))),
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactBundle {
    pub contact_phone: Option<String>,
    pub contact_whatsapp: Option<String>,
    pub contact_instagram: Option<String>,
    pub contact_email: Option<String>,
    pub website_url: Option<String>,
}

impl ContactBundle {
    pub fn is_empty(&self) -> bool {
        self.contact_phone.is_none()
            && self.contact_whatsapp.is_none()
            && self.contact_instagram.is_none()
            && self.contact_email.is_none()
            && self.website_url.is_none()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Currency {
    #[serde(rename = "MXN")]
    Mxn,
    #[serde(rename = "USD")]
    Usd,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Mxn => "MXN",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 價格擷取結果：(顯示字串, 金額, 幣別)
#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub display: String,
    pub amount: f64,
    pub currency: Option<Currency>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Party,
    Workshop,
    Wellness,
    Music,
    Art,
    Spirituality,
    Food,
    Sports,
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Party => "party",
            EventCategory::Workshop => "workshop",
            EventCategory::Wellness => "wellness",
            EventCategory::Music => "music",
            EventCategory::Art => "art",
            EventCategory::Spirituality => "spirituality",
            EventCategory::Food => "food",
            EventCategory::Sports => "sports",
            EventCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Restaurant,
    Accommodation,
    Venue,
    Activity,
    Shop,
    Studio,
}

impl PlaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceType::Restaurant => "restaurant",
            PlaceType::Accommodation => "accommodation",
            PlaceType::Venue => "venue",
            PlaceType::Activity => "activity",
            PlaceType::Shop => "shop",
            PlaceType::Studio => "studio",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Wellness,
    Art,
    Education,
    Food,
    Accommodation,
    Transportation,
    Repair,
    Beauty,
    Other,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Wellness => "wellness",
            ServiceCategory::Art => "art",
            ServiceCategory::Education => "education",
            ServiceCategory::Food => "food",
            ServiceCategory::Accommodation => "accommodation",
            ServiceCategory::Transportation => "transportation",
            ServiceCategory::Repair => "repair",
            ServiceCategory::Beauty => "beauty",
            ServiceCategory::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PriceType {
    Fixed,
    Negotiable,
}

impl PriceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceType::Fixed => "fixed",
            PriceType::Negotiable => "negotiable",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventRecord {
    pub id: Uuid,
    pub city_id: String,
    pub message_id: String,
    pub title: String,
    pub description: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub location_name: Option<String>,
    pub category: EventCategory,
    pub price: Option<String>,
    pub organizer_name: Option<String>,
    #[serde(flatten)]
    pub contact: ContactBundle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceRecord {
    pub id: Uuid,
    pub city_id: String,
    pub message_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub category: String,
    pub description: String,
    pub location_name: Option<String>,
    pub hours: Option<String>,
    #[serde(flatten)]
    pub contact: ContactBundle,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServiceRecord {
    pub id: Uuid,
    pub city_id: String,
    pub message_id: String,
    pub title: String,
    pub description: String,
    pub category: ServiceCategory,
    pub price_type: PriceType,
    pub price_amount: Option<f64>,
    pub price_currency: Option<Currency>,
    pub price_notes: Option<String>,
    #[serde(flatten)]
    pub contact: ContactBundle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Event,
    Place,
    Service,
}

impl RecordKind {
    pub fn default_stem(&self) -> &'static str {
        match self {
            RecordKind::Event => "events",
            RecordKind::Place => "places",
            RecordKind::Service => "services",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractionStats {
    pub messages_seen: usize,
    pub messages_skipped: usize,
    pub messages_unclassified: usize,
}

/// 一次擷取的全部輸出
#[derive(Debug, Clone, Default)]
pub struct ExtractionOutput {
    pub events: Vec<EventRecord>,
    pub places: Vec<PlaceRecord>,
    pub services: Vec<ServiceRecord>,
    pub stats: ExtractionStats,
}

impl ExtractionOutput {
    pub fn total_records(&self) -> usize {
        self.events.len() + self.places.len() + self.services.len()
    }
}

/// Places API 彙整出的一個地點
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceListing {
    pub name: String,
    pub category: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub google_maps_url: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<u64>,
    pub price_level: Option<String>,
    pub hours: Option<String>,
    pub open_now: Option<bool>,
    pub types: String,
    pub place_id: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlacesSummary {
    pub total: usize,
    /// 依數量遞減排序
    pub by_category: Vec<(String, usize)>,
    pub average_rating: Option<f64>,
    pub with_website: usize,
    pub with_phone: usize,
    pub open_now: usize,
}

#[derive(Debug, Clone, Default)]
pub struct PlacesOutput {
    pub listings: Vec<PlaceListing>,
    pub summary: PlacesSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_accepts_numeric_id_and_text_alias() {
        let msg: Message = serde_json::from_str(r#"{"id": 42, "text": "hola a todos"}"#).unwrap();
        assert_eq!(msg.id, "42");
        assert_eq!(msg.text(), "hola a todos");
    }

    #[test]
    fn test_message_missing_body_is_empty_text() {
        let msg: Message =
            serde_json::from_str(r#"{"id": "abc", "message_body": null, "sender": "x"}"#).unwrap();
        assert_eq!(msg.text(), "");
    }

    #[test]
    fn test_message_rejects_object_id() {
        let result = serde_json::from_str::<Message>(r#"{"id": {"a": 1}, "message_body": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_serializes_flat_contact_fields() {
        let record = PlaceRecord {
            id: Uuid::nil(),
            city_id: "mazunte".to_string(),
            message_id: "m1".to_string(),
            name: "Café Luna".to_string(),
            place_type: PlaceType::Restaurant,
            category: "Food & Drink".to_string(),
            description: "Café Luna abre a las 8".to_string(),
            location_name: None,
            hours: None,
            contact: ContactBundle {
                contact_instagram: Some("cafeluna".to_string()),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "restaurant");
        assert_eq!(value["contact_instagram"], "cafeluna");
        assert!(value["contact_phone"].is_null());
        assert!(value["hours"].is_null());
        assert!(value.get("contact").is_none());
    }

    #[test]
    fn test_currency_serializes_as_code() {
        assert_eq!(serde_json::to_string(&Currency::Mxn).unwrap(), "\"MXN\"");
        assert_eq!(Currency::Usd.to_string(), "USD");
    }
}
