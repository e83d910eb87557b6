use crate::adapters::google_places::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::assembler::{DEFAULT_MIN_MESSAGE_LENGTH, DEFAULT_REGION};
use crate::core::ConfigProvider;
use crate::domain::model::RecordKind;
use crate::domain::places::{default_searches, PlaceSearch, SearchPlan, DEFAULT_CENTER, DEFAULT_RADIUS_M};
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const SUPPORTED_FORMATS: [&str; 2] = ["json", "csv"];

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub extraction: ExtractionConfig,
    pub load: LoadConfig,
    pub places: Option<PlacesConfig>,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    pub messages_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            input_dir: default_input_dir(),
            messages_file: "messages.json".to_string(),
        }
    }
}

fn default_input_dir() -> String {
    ".".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    pub region: String,
    pub min_message_length: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            min_message_length: DEFAULT_MIN_MESSAGE_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: String,
}

/// 輸出檔名（不含副檔名）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub events: Option<String>,
    pub places: Option<String>,
    pub services: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesConfig {
    pub api_key: String,
    pub base_url: Option<String>,
    pub center_lat: Option<f64>,
    pub center_lng: Option<f64>,
    pub radius_m: Option<u32>,
    pub timeout_seconds: Option<u64>,
    pub searches: Option<Vec<PlaceSearch>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
    pub log_level: Option<String>,
}

impl PlacesConfig {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn search_plan(&self) -> SearchPlan {
        SearchPlan {
            latitude: self.center_lat.unwrap_or(DEFAULT_CENTER.0),
            longitude: self.center_lng.unwrap_or(DEFAULT_CENTER.1),
            radius_m: self.radius_m.unwrap_or(DEFAULT_RADIUS_M),
            searches: self.searches.clone().unwrap_or_else(default_searches),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GOOGLE_MAPS_API_KEY})，未設定的保留原字串
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證訊息擷取相關設定
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_file_extension(
            "source.messages_file",
            &self.source.messages_file,
            &["json"],
        )?;
        validation::validate_non_empty_string("extraction.region", &self.extraction.region)?;
        validation::validate_positive_number(
            "extraction.min_message_length",
            self.extraction.min_message_length,
            1,
        )?;
        validation::validate_allowed_values(
            "load.output_formats",
            &self.load.output_formats,
            &SUPPORTED_FORMATS,
        )?;

        if let Some(compression) = &self.load.compression {
            if compression.enabled {
                validation::validate_file_extension(
                    "load.compression.filename",
                    &compression.filename,
                    &["zip"],
                )?;
            }
        }

        Ok(())
    }

    /// 驗證 [places] 區段；places-scrape 需要
    pub fn validate_places(&self) -> Result<&PlacesConfig> {
        let places = validation::validate_required_field("places", &self.places)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;

        if places.api_key.trim().is_empty() || ENV_VAR_RE.is_match(&places.api_key) {
            return Err(EtlError::MissingConfigError {
                field: "places.api_key (set GOOGLE_MAPS_API_KEY)".to_string(),
            });
        }
        validation::validate_url("places.base_url", places.base_url())?;
        validation::validate_range("places.center_lat", places.search_plan().latitude, -90.0, 90.0)?;
        validation::validate_range(
            "places.center_lng",
            places.search_plan().longitude,
            -180.0,
            180.0,
        )?;
        validation::validate_range("places.radius_m", places.search_plan().radius_m, 1, 50_000)?;
        validation::validate_positive_number(
            "places.timeout_seconds",
            places.timeout_seconds() as usize,
            1,
        )?;

        if let Some(searches) = &places.searches {
            for search in searches {
                if search.keyword.is_none() == search.place_type.is_none() {
                    return Err(EtlError::ConfigValidationError {
                        field: "places.searches".to_string(),
                        message: format!(
                            "search '{}' must set exactly one of keyword or type",
                            search.name
                        ),
                    });
                }
            }
        }

        Ok(places)
    }

    pub fn input_dir(&self) -> &str {
        &self.source.input_dir
    }

    /// 取得監控設定
    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_file(&self) -> &str {
        &self.source.messages_file
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn region(&self) -> &str {
        &self.extraction.region
    }

    fn min_message_length(&self) -> usize {
        self.extraction.min_message_length
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn zip_filename(&self) -> Option<&str> {
        self.load
            .compression
            .as_ref()
            .filter(|c| c.enabled)
            .map(|c| c.filename.as_str())
    }

    fn file_stem(&self, kind: RecordKind) -> String {
        let custom = self.load.filenames.as_ref().and_then(|f| match kind {
            RecordKind::Event => f.events.clone(),
            RecordKind::Place => f.places.clone(),
            RecordKind::Service => f.services.clone(),
        });
        custom.unwrap_or_else(|| kind.default_stem().to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
