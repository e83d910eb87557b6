use clap::Parser;
use mazunte_etl::config::toml_config::TomlConfig;
use mazunte_etl::domain::places::SearchPlan;
use mazunte_etl::utils::error::EtlError;
use mazunte_etl::utils::logger;
use mazunte_etl::{EtlEngine, GooglePlacesClient, LocalStorage, PlacesPipeline};

#[derive(Parser)]
#[command(name = "places-scrape")]
#[command(about = "Collect landmarks around a town from the Google Places API")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "places-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: bool,

    /// Print the search plan without calling the API
    #[arg(long)]
    dry_run: bool,
}

fn fail(e: &EtlError) -> ! {
    tracing::error!(
        "❌ Places scrape failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code())
}

fn display_plan(plan: &SearchPlan, output_path: &str) {
    println!("📋 Search Plan:");
    println!("  📍 Center: ({}, {})", plan.latitude, plan.longitude);
    println!("  📏 Radius: {}m", plan.radius_m);
    println!("  💾 Output: {}", output_path);
    println!();
    for (i, search) in plan.searches.iter().enumerate() {
        let filter = match (&search.keyword, &search.place_type) {
            (Some(keyword), _) => format!("keyword={}", keyword),
            (None, Some(place_type)) => format!("type={}", place_type),
            (None, None) => "-".to_string(),
        };
        println!("  [{}/{}] {} ({})", i + 1, plan.searches.len(), search.name, filter);
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    tracing::info!("🌴 Starting places scrape");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No API calls will be made");
        let plan = config
            .places
            .as_ref()
            .map(|p| p.search_plan())
            .unwrap_or_default();
        display_plan(&plan, &config.load.output_path);
        return Ok(());
    }

    // 驗證配置
    let places = config.validate_places().unwrap_or_else(|e| {
        tracing::error!("❌ Configuration validation failed: {}", e);
        fail(&e)
    });
    tracing::info!("✅ Configuration loaded and validated successfully");

    let client = GooglePlacesClient::with_options(
        places.api_key.clone(),
        places.base_url(),
        places.timeout_seconds(),
    )
    .unwrap_or_else(|e| fail(&e));

    let monitor_enabled = args.monitor || config.monitoring_enabled();
    if monitor_enabled {
        tracing::info!("🔍 Run monitoring enabled");
    }

    let output_path = config.load.output_path.clone();
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = PlacesPipeline::new(storage, client, places.search_plan(), output_path);
    let engine = EtlEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            println!("✨ Done! Files saved to: {}", output_path);
            Ok(())
        }
        Err(e) => fail(&e),
    }
}
