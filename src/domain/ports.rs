use crate::domain::model::RecordKind;
use crate::domain::places::{NearbyQuery, PlaceDetails, PlaceHit};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_file(&self) -> &str;
    fn output_path(&self) -> &str;
    fn region(&self) -> &str;
    fn min_message_length(&self) -> usize;
    fn output_formats(&self) -> &[String];
    /// 啟用壓縮時的 ZIP 檔名
    fn zip_filename(&self) -> Option<&str>;

    fn file_stem(&self, kind: RecordKind) -> String {
        kind.default_stem().to_string()
    }

    fn wants_format(&self, format: &str) -> bool {
        self.output_formats()
            .iter()
            .any(|f| f.eq_ignore_ascii_case(format))
    }
}

/// 相對日期（今天、明天）的時間來源
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

impl<T: Clock + ?Sized> Clock for &T {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    type Raw: Send + 'static;
    type Output: Send + 'static;

    async fn extract(&self) -> Result<Vec<Self::Raw>>;
    async fn transform(&self, data: Vec<Self::Raw>) -> Result<Self::Output>;
    async fn load(&self, result: Self::Output) -> Result<String>;
}

#[async_trait]
pub trait PlacesClient: Send + Sync {
    async fn nearby_search(&self, query: &NearbyQuery) -> Result<Vec<PlaceHit>>;
    async fn place_details(&self, place_id: &str) -> Result<PlaceDetails>;
}
