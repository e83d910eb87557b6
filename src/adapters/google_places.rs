use crate::domain::places::{NearbyQuery, PlaceDetails, PlaceHit};
use crate::domain::ports::PlacesClient;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

const DETAIL_FIELDS: &str = "name,formatted_address,geometry,formatted_phone_number,\
international_phone_number,website,rating,user_ratings_total,opening_hours,price_level,types,url";

/// Google Places Web Service (legacy JSON endpoints)
pub struct GooglePlacesClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct NearbyResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<NearbyResult>,
}

#[derive(Debug, Deserialize)]
struct NearbyResult {
    place_id: String,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<DetailsResult>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct DetailsResult {
    name: Option<String>,
    formatted_address: Option<String>,
    geometry: Option<Geometry>,
    formatted_phone_number: Option<String>,
    international_phone_number: Option<String>,
    website: Option<String>,
    url: Option<String>,
    rating: Option<f64>,
    user_ratings_total: Option<u64>,
    price_level: Option<u8>,
    opening_hours: Option<OpeningHours>,
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Debug, Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct OpeningHours {
    open_now: Option<bool>,
    weekday_text: Vec<String>,
}

impl From<DetailsResult> for PlaceDetails {
    fn from(r: DetailsResult) -> Self {
        let (latitude, longitude) = match r.geometry {
            Some(g) => (Some(g.location.lat), Some(g.location.lng)),
            None => (None, None),
        };
        let (open_now, weekday_text) = match r.opening_hours {
            Some(h) => (h.open_now, h.weekday_text),
            None => (None, Vec::new()),
        };

        PlaceDetails {
            name: r.name,
            formatted_address: r.formatted_address,
            latitude,
            longitude,
            formatted_phone_number: r.formatted_phone_number,
            international_phone_number: r.international_phone_number,
            website: r.website,
            url: r.url,
            rating: r.rating,
            user_ratings_total: r.user_ratings_total,
            price_level: r.price_level,
            weekday_text,
            open_now,
            types: r.types,
        }
    }
}

fn api_error(status: String, message: Option<String>) -> EtlError {
    EtlError::PlacesApiError {
        status,
        message: message.unwrap_or_default(),
    }
}

impl GooglePlacesClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn with_options(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl PlacesClient for GooglePlacesClient {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Vec<PlaceHit>> {
        let location = format!("{},{}", query.latitude, query.longitude);
        let mut params = vec![
            ("location", location),
            ("radius", query.radius_m.to_string()),
            ("key", self.api_key.clone()),
        ];
        if let Some(keyword) = &query.keyword {
            params.push(("keyword", keyword.clone()));
        }
        if let Some(place_type) = &query.place_type {
            params.push(("type", place_type.clone()));
        }

        tracing::debug!(
            "Nearby search keyword={:?} type={:?}",
            query.keyword,
            query.place_type
        );
        let response: NearbyResponse = self
            .client
            .get(self.endpoint("nearbysearch/json"))
            .query(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response.status.as_str() {
            "OK" => Ok(response
                .results
                .into_iter()
                .map(|r| PlaceHit {
                    place_id: r.place_id,
                    name: r.name,
                })
                .collect()),
            "ZERO_RESULTS" => Ok(Vec::new()),
            _ => Err(api_error(response.status, response.error_message)),
        }
    }

    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails> {
        let response: DetailsResponse = self
            .client
            .get(self.endpoint("details/json"))
            .query(&[
                ("place_id", place_id),
                ("fields", DETAIL_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if response.status != "OK" {
            return Err(api_error(response.status, response.error_message));
        }
        Ok(response.result.unwrap_or_default().into())
    }
}
