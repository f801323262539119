use clap::Parser;
use order_reverse::core::pipeline::STDOUT_DESTINATION;
use order_reverse::utils::{logger, validation::Validate};
use order_reverse::{CliConfig, EtlEngine, LocalStorage, OrderError, ReversePipeline, TomlConfig};

fn run(config: CliConfig) -> Result<String, OrderError> {
    let storage = LocalStorage::current_dir();

    // 有 TOML 配置檔時以檔案為準
    if let Some(path) = config.config.clone() {
        let toml_config = TomlConfig::from_file(&path)?;
        toml_config.validate()?;
        tracing::info!("📋 Pipeline: {} ({})", toml_config.pipeline.name, path);

        let monitor = config.monitor || toml_config.monitoring_enabled();
        let pipeline = ReversePipeline::new(storage, toml_config);
        return EtlEngine::new_with_monitoring(pipeline, monitor).run();
    }

    config.validate()?;
    let monitor = config.monitor;
    let pipeline = ReversePipeline::new(storage, config);
    EtlEngine::new_with_monitoring(pipeline, monitor).run()
}

fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    match run(config) {
        Ok(destination) => {
            if destination != STDOUT_DESTINATION {
                println!("✅ Reversed orders saved to: {}", destination);
            }
        }
        Err(e) => {
            tracing::error!(
                "❌ Order reversal failed: {} (Kind: {:?}, Severity: {:?})",
                e,
                e.kind(),
                e.severity()
            );
            eprintln!("❌ {}", e);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
