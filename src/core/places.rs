use crate::core::export::{rows_to_csv, to_pretty_json};
use crate::core::{Pipeline, Storage};
use crate::domain::model::{PlaceListing, PlacesOutput, PlacesSummary};
use crate::domain::places::{PlaceDetails, PlaceHit, PlaceSearch, SearchPlan};
use crate::domain::ports::PlacesClient;
use crate::utils::error::Result;
use std::collections::{HashMap, HashSet};

pub const PLACES_JSON: &str = "places.json";
pub const PLACES_CSV: &str = "places.csv";
const SAMPLE_SIZE: usize = 10;

/// 把 price_level (0-4) 轉成 `$` 符號
pub fn format_price_level(level: Option<u8>) -> Option<String> {
    level.map(|n| "$".repeat(n as usize))
}

pub fn format_hours(weekday_text: &[String]) -> Option<String> {
    if weekday_text.is_empty() {
        None
    } else {
        Some(weekday_text.join(" | "))
    }
}

pub fn build_listing(search: &PlaceSearch, hit: &PlaceHit, details: PlaceDetails) -> PlaceListing {
    let name = details
        .name
        .or_else(|| hit.name.clone())
        .unwrap_or_else(|| hit.place_id.clone());

    PlaceListing {
        name,
        category: search.name.clone(),
        latitude: details.latitude,
        longitude: details.longitude,
        address: details.formatted_address,
        phone: details
            .formatted_phone_number
            .or(details.international_phone_number),
        website: details.website,
        google_maps_url: details.url,
        rating: details.rating,
        review_count: details.user_ratings_total,
        price_level: format_price_level(details.price_level),
        hours: format_hours(&details.weekday_text),
        open_now: details.open_now,
        types: details.types.join(", "),
        place_id: hit.place_id.clone(),
    }
}

pub fn summarize(listings: &[PlaceListing]) -> PlacesSummary {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for listing in listings {
        *counts.entry(listing.category.as_str()).or_default() += 1;
    }

    let mut by_category: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    // 數量相同時依名稱排序，讓輸出穩定
    by_category.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let ratings: Vec<f64> = listings.iter().filter_map(|l| l.rating).collect();
    let average_rating = if ratings.is_empty() {
        None
    } else {
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    };

    PlacesSummary {
        total: listings.len(),
        by_category,
        average_rating,
        with_website: listings.iter().filter(|l| l.website.is_some()).count(),
        with_phone: listings.iter().filter(|l| l.phone.is_some()).count(),
        open_now: listings.iter().filter(|l| l.open_now == Some(true)).count(),
    }
}

/// 用 Places API 彙整附近地點
pub struct PlacesPipeline<S: Storage, P: PlacesClient> {
    storage: S,
    client: P,
    plan: SearchPlan,
    output_path: String,
}

impl<S: Storage, P: PlacesClient> PlacesPipeline<S, P> {
    pub fn new(storage: S, client: P, plan: SearchPlan, output_path: impl Into<String>) -> Self {
        Self {
            storage,
            client,
            plan,
            output_path: output_path.into(),
        }
    }

    pub fn plan(&self) -> &SearchPlan {
        &self.plan
    }

    fn log_summary(&self, output: &PlacesOutput) {
        let summary = &output.summary;
        tracing::info!("📊 Total unique places found: {}", summary.total);
        for (category, count) in &summary.by_category {
            tracing::info!("  • {}: {}", category, count);
        }
        if let Some(avg) = summary.average_rating {
            tracing::info!("⭐ Average rating: {:.2}/5.0", avg);
        }
        tracing::info!(
            "Places with websites: {}/{}, with phone numbers: {}/{}, currently open: {}/{}",
            summary.with_website,
            summary.total,
            summary.with_phone,
            summary.total,
            summary.open_now,
            summary.total
        );

        for listing in output.listings.iter().take(SAMPLE_SIZE) {
            tracing::debug!(
                "📍 {} [{}] {:?}, {:?} rating={:?}",
                listing.name,
                listing.category,
                listing.latitude,
                listing.longitude,
                listing.rating
            );
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, P: PlacesClient> Pipeline for PlacesPipeline<S, P> {
    type Raw = PlaceListing;
    type Output = PlacesOutput;

    async fn extract(&self) -> Result<Vec<PlaceListing>> {
        let total = self.plan.searches.len();
        tracing::info!(
            "🔍 Searching {} categories around ({}, {}) within {}m",
            total,
            self.plan.latitude,
            self.plan.longitude,
            self.plan.radius_m
        );

        let mut listings = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for (index, search) in self.plan.searches.iter().enumerate() {
            let query = self.plan.query_for(search);
            let hits = match self.client.nearby_search(&query).await {
                Ok(hits) => hits,
                Err(e) => {
                    tracing::warn!("❌ [{}/{}] {} failed: {}", index + 1, total, search.name, e);
                    continue;
                }
            };

            let found = hits.len();
            let mut new_places = 0;

            for hit in hits {
                // 先標記為已看過，details 失敗也不會重抓
                if !seen.insert(hit.place_id.clone()) {
                    continue;
                }
                new_places += 1;

                match self.client.place_details(&hit.place_id).await {
                    Ok(details) => listings.push(build_listing(search, &hit, details)),
                    Err(e) => tracing::warn!(
                        "⚠️ Error getting details for {}: {}",
                        hit.name.as_deref().unwrap_or(&hit.place_id),
                        e
                    ),
                }
            }

            tracing::info!(
                "[{}/{}] {}: found {} ({} new)",
                index + 1,
                total,
                search.name,
                found,
                new_places
            );
        }

        Ok(listings)
    }

    async fn transform(&self, data: Vec<PlaceListing>) -> Result<PlacesOutput> {
        let summary = summarize(&data);
        Ok(PlacesOutput {
            listings: data,
            summary,
        })
    }

    async fn load(&self, result: PlacesOutput) -> Result<String> {
        if result.listings.is_empty() {
            tracing::warn!("📝 No places found, nothing to save");
            return Ok(self.output_path.clone());
        }

        self.log_summary(&result);

        self.storage
            .write_file(PLACES_CSV, &rows_to_csv(&result.listings)?)
            .await?;
        self.storage
            .write_file(PLACES_JSON, &to_pretty_json(&result.listings)?)
            .await?;

        tracing::info!(
            "✅ Saved {} places to {}/{{{}, {}}}",
            result.listings.len(),
            self.output_path,
            PLACES_CSV,
            PLACES_JSON
        );
        Ok(self.output_path.clone())
    }
}
