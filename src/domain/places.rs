use serde::{Deserialize, Serialize};

/// 一組 nearby search 的條件（keyword 或 type 二擇一）
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaceSearch {
    pub name: String,
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

impl PlaceSearch {
    pub fn keyword(keyword: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            keyword: Some(keyword.to_string()),
            place_type: None,
        }
    }

    pub fn of_type(place_type: &str, name: &str) -> Self {
        Self {
            name: name.to_string(),
            keyword: None,
            place_type: Some(place_type.to_string()),
        }
    }
}

/// 預設搜尋清單，順序即為執行順序
pub fn default_searches() -> Vec<PlaceSearch> {
    vec![
        // Food & Drink
        PlaceSearch::of_type("restaurant", "Restaurants"),
        PlaceSearch::keyword("cafe", "Cafes"),
        PlaceSearch::keyword("juice bar", "Juice Bars"),
        PlaceSearch::keyword("bar", "Bars"),
        PlaceSearch::keyword("bakery", "Bakeries"),
        // Wellness & Yoga
        PlaceSearch::keyword("yoga", "Yoga Studios"),
        PlaceSearch::keyword("massage", "Massage & Spa"),
        PlaceSearch::keyword("wellness", "Wellness Centers"),
        PlaceSearch::keyword("healing", "Healing Centers"),
        // Accommodations
        PlaceSearch::of_type("lodging", "Hotels & Hostels"),
        PlaceSearch::keyword("hotel", "Hotels"),
        PlaceSearch::keyword("hostel", "Hostels"),
        PlaceSearch::keyword("cabin", "Cabins"),
        // Attractions
        PlaceSearch::of_type("tourist_attraction", "Tourist Attractions"),
        PlaceSearch::of_type("museum", "Museums"),
        PlaceSearch::keyword("beach", "Beaches"),
        PlaceSearch::keyword("viewpoint", "Viewpoints"),
        // Shopping
        PlaceSearch::keyword("shop", "Shops"),
        PlaceSearch::keyword("market", "Markets"),
        PlaceSearch::keyword("organic", "Organic Shops"),
        PlaceSearch::keyword("artisan", "Artisan Shops"),
        PlaceSearch::of_type("store", "Stores"),
        // Services
        PlaceSearch::keyword("coworking", "Coworking Spaces"),
        PlaceSearch::keyword("laundry", "Laundry"),
        PlaceSearch::keyword("surf", "Surf Shops"),
    ]
}

pub const DEFAULT_CENTER: (f64, f64) = (15.6649, -96.5539);
pub const DEFAULT_RADIUS_M: u32 = 3000;

/// 以同一個中心點與半徑依序執行的搜尋清單
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPlan {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: u32,
    pub searches: Vec<PlaceSearch>,
}

impl Default for SearchPlan {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_CENTER.0,
            longitude: DEFAULT_CENTER.1,
            radius_m: DEFAULT_RADIUS_M,
            searches: default_searches(),
        }
    }
}

impl SearchPlan {
    pub fn query_for(&self, search: &PlaceSearch) -> NearbyQuery {
        NearbyQuery {
            latitude: self.latitude,
            longitude: self.longitude,
            radius_m: self.radius_m,
            keyword: search.keyword.clone(),
            place_type: search.place_type.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_m: u32,
    pub keyword: Option<String>,
    pub place_type: Option<String>,
}

/// nearby search 的單筆結果
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceHit {
    pub place_id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaceDetails {
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub formatted_phone_number: Option<String>,
    pub international_phone_number: Option<String>,
    pub website: Option<String>,
    pub url: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u64>,
    pub price_level: Option<u8>,
    pub weekday_text: Vec<String>,
    pub open_now: Option<bool>,
    pub types: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plan_covers_every_group() {
        let plan = SearchPlan::default();
        assert_eq!(plan.searches.len(), 25);
        assert_eq!(plan.radius_m, 3000);
        assert_eq!(plan.searches[0].place_type.as_deref(), Some("restaurant"));
        assert_eq!(plan.searches[24].name, "Surf Shops");
        assert!(plan
            .searches
            .iter()
            .all(|s| s.keyword.is_some() != s.place_type.is_some()));
    }

    #[test]
    fn test_query_for_copies_center_and_filter() {
        let plan = SearchPlan::default();
        let query = plan.query_for(&PlaceSearch::keyword("yoga", "Yoga Studios"));
        assert_eq!(query.latitude, 15.6649);
        assert_eq!(query.longitude, -96.5539);
        assert_eq!(query.keyword.as_deref(), Some("yoga"));
        assert_eq!(query.place_type, None);
    }

    #[test]
    fn test_search_deserializes_type_field() {
        let search: PlaceSearch =
            toml::from_str("name = \"Museums\"\ntype = \"museum\"").unwrap();
        assert_eq!(search.place_type.as_deref(), Some("museum"));
        assert_eq!(search.keyword, None);
    }
}
