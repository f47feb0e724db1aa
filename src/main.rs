use clap::Parser;
use swapi_planets::utils::error::{ErrorSeverity, PlanetError};
use swapi_planets::utils::{logger, validation::Validate};
use swapi_planets::{CliConfig, ConfigProvider, HttpFetcher, PlanetService, TomlConfig};

fn load_provider(cli: &CliConfig) -> Result<(Box<dyn ConfigProvider>, bool), PlanetError> {
    match &cli.config {
        Some(path) => {
            tracing::info!("📄 Loading configuration from {}", path.display());
            let toml = TomlConfig::from_file(path)?;
            toml.validate()?;
            let pretty = cli.pretty || toml.pretty();
            let provider: Box<dyn ConfigProvider> = Box::new(toml);
            Ok((provider, pretty))
        }
        None => {
            cli.validate()?;
            let provider: Box<dyn ConfigProvider> = Box::new(cli.clone());
            Ok((provider, cli.pretty))
        }
    }
}

async fn run(cli: &CliConfig) -> Result<String, PlanetError> {
    let (provider, pretty) = load_provider(cli)?;

    let fetcher = HttpFetcher::from_config(provider.as_ref())?;
    let service = PlanetService::new(fetcher);
    let planet = service.get_planet(provider.api_endpoint()).await?;

    let output = if pretty {
        serde_json::to_string_pretty(&planet)?
    } else {
        serde_json::to_string(&planet)?
    };
    Ok(output)
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting swapi-planets CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            tracing::error!(
                "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            // 根據錯誤嚴重程度決定退出碼
            let exit_code = match e.severity() {
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }
}
