use anyhow::Context;
use clap::Parser;
use streets_etl::config::toml_config::TomlConfig;
use streets_etl::core::ConfigProvider;
use streets_etl::utils::{logger, validation::Validate};
use streets_etl::{EtlEngine, LocalStorage, StreetPipeline};

#[derive(Parser)]
#[command(name = "toml-etl")]
#[command(about = "Street extraction ETL with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "streets-config.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dry run - show what would be processed without executing
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based streets ETL");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");
    display_config_summary(&config);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual processing will occur");
        perform_dry_run(&config);
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = StreetPipeline::new(storage, config);

    let engine = EtlEngine::new(pipeline);

    match engine.run() {
        Ok(output_path) => {
            tracing::info!("✅ ETL process completed successfully!");
            println!("✅ ETL process completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!("❌ ETL process failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Pipeline: {}", config.pipeline.name);
    if let Some(description) = &config.pipeline.description {
        tracing::info!("📋 Description: {}", description);
    }
    tracing::info!("📋 Input directories: {}", config.input_dirs().join(", "));
    tracing::info!("📋 Output path: {}", config.output_path());
    tracing::info!("📋 Per-city JSON: {}", config.per_city_json());
}

fn perform_dry_run(config: &TomlConfig) {
    for dir in config.input_dirs() {
        match std::fs::read_dir(dir) {
            Ok(entries) => {
                let count = entries
                    .filter_map(|e| e.ok())
                    .filter(|e| {
                        e.path().is_file()
                            && e.path().extension().is_some_and(|ext| ext == "html")
                    })
                    .count();
                tracing::info!("🔍 {}: {} HTML files would be processed", dir, count);
            }
            Err(e) => {
                tracing::warn!("🔍 {}: cannot list directory ({})", dir, e);
            }
        }
    }
}
