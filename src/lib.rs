pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod extract;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use adapters::GooglePlacesClient;
pub use core::{EtlEngine, MessagePipeline, PlacesPipeline, RecordAssembler};
pub use domain::model::{EventRecord, ExtractionOutput, Message, PlaceListing, PlaceRecord, ServiceRecord};
pub use utils::clock::{FixedClock, SystemClock};
pub use utils::error::{EtlError, Result};
