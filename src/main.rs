use clap::Parser;
use sondeo::utils::{logger, validation::Validate};
use sondeo::{
    CliConfig, ConfigProvider, ErrorSeverity, HttpTransport, Profile, QueryClient, TomlConfig,
};

#[derive(Parser)]
#[command(name = "sondeo")]
#[command(about = "Query client for a simulated-respondent inference service")]
struct Args {
    /// Question to send to the simulated respondent
    question: String,

    /// Respondent profile id (e.g. cdmx_c-d+_18-25)
    #[arg(short, long)]
    profile: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    #[command(flatten)]
    overrides: CliConfig,

    /// Print the full generation transcript before the extracted answer
    #[arg(long)]
    show_raw: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("🚀 Starting sondeo");

    if let Err(e) = run(&args).await {
        tracing::error!(
            "❌ Query failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Sugerencia: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn run(args: &Args) -> sondeo::Result<()> {
    let profile: Profile = args.profile.parse()?;

    if let Some(path) = &args.config {
        tracing::info!("📁 Loading configuration from: {}", path);
        let mut config = TomlConfig::from_file(path)?;

        // Flags and SONDEO_ENDPOINT win over the file.
        if let Some(endpoint) = &args.overrides.endpoint {
            config.service.endpoint = endpoint.clone();
        }
        if let Some(timeout) = args.overrides.timeout_seconds {
            config.service.timeout_seconds = Some(timeout);
        }

        ask(args, profile, config).await
    } else {
        ask(args, profile, args.overrides.clone()).await
    }
}

async fn ask<C: ConfigProvider + Validate>(
    args: &Args,
    profile: Profile,
    config: C,
) -> sondeo::Result<()> {
    config.validate()?;
    tracing::info!("📡 Endpoint: {}", config.inference_endpoint());

    let transport = HttpTransport::from_config(&config)?;
    let client = QueryClient::new(transport, config);

    let result = client.submit(&args.question, Some(profile)).await?;
    tracing::info!("✅ Query completed");

    if args.show_raw {
        println!("{}", result.raw_text);
        println!();
    }
    println!("{}", result.extracted_answer);

    Ok(())
}
