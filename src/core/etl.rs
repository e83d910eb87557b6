use crate::core::Pipeline;
use crate::utils::error::Result;
use crate::utils::monitor::RunMonitor;
use tokio::sync::Mutex;

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor: Mutex<RunMonitor>,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: Mutex::new(RunMonitor::new(monitor_enabled)),
        }
    }

    pub fn pipeline(&self) -> &P {
        &self.pipeline
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("🚀 Starting ETL process...");
        let mut monitor = self.monitor.lock().await;
        monitor.start();

        // Extract
        monitor.start_phase();
        let raw_data = self.pipeline.extract().await?;
        tracing::info!("📥 Extracted {} items", raw_data.len());
        monitor.finish_phase("Extract");

        // Transform
        monitor.start_phase();
        let transformed = self.pipeline.transform(raw_data).await?;
        tracing::info!("🔄 Transform complete");
        monitor.finish_phase("Transform");

        // Load
        monitor.start_phase();
        let output_path = self.pipeline.load(transformed).await?;
        monitor.finish_phase("Load");

        monitor.log_final_stats();
        tracing::info!("✅ Output saved to: {}", output_path);
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::EtlError;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPipeline {
        loads: AtomicUsize,
        fail_transform: bool,
    }

    #[async_trait]
    impl Pipeline for CountingPipeline {
        type Raw = u32;
        type Output = u32;

        async fn extract(&self) -> Result<Vec<u32>> {
            Ok(vec![1, 2, 3])
        }

        async fn transform(&self, data: Vec<u32>) -> Result<u32> {
            if self.fail_transform {
                return Err(EtlError::ProcessingError {
                    message: "boom".to_string(),
                });
            }
            Ok(data.iter().sum())
        }

        async fn load(&self, result: u32) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Ok(format!("sum={}", result))
        }
    }

    #[tokio::test]
    async fn test_run_chains_phases() {
        let engine = EtlEngine::new_with_monitoring(
            CountingPipeline {
                loads: AtomicUsize::new(0),
                fail_transform: false,
            },
            true,
        );
        assert_eq!(engine.run().await.unwrap(), "sum=6");
        assert_eq!(engine.pipeline().loads.load(Ordering::SeqCst), 1);
        assert_eq!(engine.monitor.lock().await.phases().len(), 3);
    }

    #[tokio::test]
    async fn test_failed_phase_stops_the_run() {
        let engine = EtlEngine::new(CountingPipeline {
            loads: AtomicUsize::new(0),
            fail_transform: true,
        });
        assert!(engine.run().await.is_err());
        assert_eq!(engine.pipeline().loads.load(Ordering::SeqCst), 0);
    }
}
