use clap::Parser;
use mazunte_etl::core::ConfigProvider;
use mazunte_etl::utils::error::EtlError;
use mazunte_etl::utils::{logger, validation::Validate};
use mazunte_etl::{CliConfig, EtlEngine, LocalStorage, MessagePipeline, TomlConfig};

async fn run<C: ConfigProvider>(
    input_dir: String,
    config: C,
    monitor_enabled: bool,
) -> mazunte_etl::Result<String> {
    let source = LocalStorage::new(input_dir);
    let sink = LocalStorage::new(config.output_path().to_string());
    let pipeline = MessagePipeline::new(source, sink, config);

    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);
    engine.run().await
}

fn fail(e: &EtlError) -> ! {
    tracing::error!(
        "❌ ETL process failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(cli.verbose, cli.json_logs);

    tracing::info!("Starting mazunte-etl");
    tracing::debug!("CLI config: {:?}", cli);

    let result = match cli.config.clone() {
        Some(path) => {
            tracing::info!("📄 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(path).unwrap_or_else(|e| fail(&e));
            if let Err(e) = config.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                fail(&e);
            }
            let monitor_enabled = cli.monitor || config.monitoring_enabled();
            let input_dir = config.input_dir().to_string();
            run(input_dir, config, monitor_enabled).await
        }
        None => {
            // 驗證配置
            if let Err(e) = cli.validate() {
                tracing::error!("❌ Configuration validation failed: {}", e);
                fail(&e);
            }
            let monitor_enabled = cli.monitor;
            let input_dir = cli.input_dir.clone();
            run(input_dir, cli, monitor_enabled).await
        }
    };

    match result {
        Ok(output_path) => {
            tracing::info!("✅ ETL process completed successfully!");
            println!("✅ ETL process completed successfully!");
            println!("📁 Output saved to: {}", output_path);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}
