pub mod assembler;
pub mod categorize;
pub mod classify;
pub mod etl;
pub mod export;
pub mod keywords;
pub mod pipeline;
pub mod places;

pub use crate::domain::ports::{ConfigProvider, Pipeline, PlacesClient, Storage};
pub use crate::utils::error::Result;
pub use assembler::{MessageOutcome, RecordAssembler};
pub use etl::EtlEngine;
pub use pipeline::MessagePipeline;
pub use places::PlacesPipeline;
