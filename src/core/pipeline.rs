use crate::core::assembler::RecordAssembler;
use crate::core::export::{bundle_zip, records_to_csv, to_pretty_json};
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{ExtractionOutput, Message, RecordKind};
use crate::domain::ports::Clock;
use crate::utils::clock::SystemClock;
use crate::utils::error::Result;

/// 讀取聊天訊息，產生活動、地點與服務三種紀錄
pub struct MessagePipeline<S: Storage, C: ConfigProvider, K: Clock = SystemClock> {
    source: S,
    sink: S,
    config: C,
    clock: K,
}

impl<S: Storage, C: ConfigProvider> MessagePipeline<S, C, SystemClock> {
    /// `source` 讀取訊息檔，`sink` 寫入輸出
    pub fn new(source: S, sink: S, config: C) -> Self {
        Self {
            source,
            sink,
            config,
            clock: SystemClock,
        }
    }
}

impl<S: Storage, C: ConfigProvider, K: Clock> MessagePipeline<S, C, K> {
    pub fn with_clock<K2: Clock>(self, clock: K2) -> MessagePipeline<S, C, K2> {
        MessagePipeline {
            source: self.source,
            sink: self.sink,
            config: self.config,
            clock,
        }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    fn file_name(&self, kind: RecordKind, ext: &str) -> String {
        format!("{}.{}", self.config.file_stem(kind), ext)
    }

    fn render(&self, output: &ExtractionOutput) -> Result<Vec<(String, Vec<u8>)>> {
        let mut files = vec![
            (
                self.file_name(RecordKind::Event, "json"),
                to_pretty_json(&output.events)?,
            ),
            (
                self.file_name(RecordKind::Place, "json"),
                to_pretty_json(&output.places)?,
            ),
            (
                self.file_name(RecordKind::Service, "json"),
                to_pretty_json(&output.services)?,
            ),
        ];

        if self.config.wants_format("csv") {
            files.push((
                self.file_name(RecordKind::Event, "csv"),
                records_to_csv(&output.events)?,
            ));
            files.push((
                self.file_name(RecordKind::Place, "csv"),
                records_to_csv(&output.places)?,
            ));
            files.push((
                self.file_name(RecordKind::Service, "csv"),
                records_to_csv(&output.services)?,
            ));
        }

        Ok(files)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, K: Clock> Pipeline for MessagePipeline<S, C, K> {
    type Raw = Message;
    type Output = ExtractionOutput;

    async fn extract(&self) -> Result<Vec<Message>> {
        let input = self.config.input_file();
        tracing::info!("🚀 Reading messages from: {}", input);

        let bytes = self.source.read_file(input).await?;
        let messages: Vec<Message> = serde_json::from_slice(&bytes)?;

        tracing::info!("📊 Loaded {} messages", messages.len());
        Ok(messages)
    }

    async fn transform(&self, data: Vec<Message>) -> Result<ExtractionOutput> {
        tracing::info!(
            "🔧 Extracting records for region '{}' from {} messages",
            self.config.region(),
            data.len()
        );

        let assembler = RecordAssembler::new(self.config.region(), &self.clock)
            .with_min_message_length(self.config.min_message_length());
        let output = assembler.assemble_all(&data);

        tracing::debug!(
            "Skipped {} short messages, {} unclassified",
            output.stats.messages_skipped,
            output.stats.messages_unclassified
        );
        tracing::info!(
            "✅ Extracted {} events, {} places, {} services",
            output.events.len(),
            output.places.len(),
            output.services.len()
        );
        Ok(output)
    }

    async fn load(&self, result: ExtractionOutput) -> Result<String> {
        tracing::info!("💾 Writing {} records", result.total_records());
        let files = self.render(&result)?;

        for (name, data) in &files {
            self.sink.write_file(name, data).await?;
            tracing::debug!("Wrote {} ({} bytes)", name, data.len());
        }

        let output_path = self.config.output_path();
        match self.config.zip_filename() {
            Some(zip_name) => {
                let zip_data = bundle_zip(&files)?;
                self.sink.write_file(zip_name, &zip_data).await?;
                let zip_path = format!("{}/{}", output_path, zip_name);
                tracing::info!("📦 Bundled {} files into: {}", files.len(), zip_path);
                Ok(zip_path)
            }
            None => {
                tracing::info!("📁 Output saved to: {}", output_path);
                Ok(output_path.to_string())
            }
        }
    }
}
