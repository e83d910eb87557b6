use crate::config::toml_config::SUPPORTED_FORMATS;
use crate::core::assembler::{DEFAULT_MIN_MESSAGE_LENGTH, DEFAULT_REGION};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ZIP_FILENAME: &str = "extraction_output.zip";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "mazunte-etl")]
#[command(about = "Extract events, places and services from community chat messages")]
pub struct CliConfig {
    /// Messages file (JSON array), relative to --input-dir
    #[arg(long, default_value = "messages.json")]
    pub input: String,

    #[arg(long, default_value = ".")]
    pub input_dir: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Region tag written as city_id on every record
    #[arg(long, default_value = DEFAULT_REGION)]
    pub region: String,

    #[arg(long, default_value_t = DEFAULT_MIN_MESSAGE_LENGTH)]
    pub min_length: usize,

    #[arg(long, value_delimiter = ',', default_value = "json")]
    pub formats: Vec<String>,

    #[arg(long, help = "Bundle all outputs into extraction_output.zip")]
    pub zip: bool,

    #[arg(long, help = "Load settings from a TOML file instead of flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-phase timings")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn input_file(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn region(&self) -> &str {
        &self.region
    }

    fn min_message_length(&self) -> usize {
        self.min_length
    }

    fn output_formats(&self) -> &[String] {
        &self.formats
    }

    fn zip_filename(&self) -> Option<&str> {
        self.zip.then_some(DEFAULT_ZIP_FILENAME)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_dir", &self.input_dir)?;
        validation::validate_file_extension("input", &self.input, &["json"])?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("region", &self.region)?;
        validation::validate_positive_number("min_length", self.min_length, 1)?;
        validation::validate_allowed_values(
            "formats",
            &self.formats,
            &SUPPORTED_FORMATS,
        )?;
        Ok(())
    }
}
