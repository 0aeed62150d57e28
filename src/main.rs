use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use swatch_engine::{generate, Color, HarmonyMode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use swatchbook::api::ColorInfo;
use swatchbook::models::AppConfig;
use swatchbook::server::{self, ApiDoc};
use swatchbook::services::{ImageLoader, ImageSource};

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Swatchbook - color palette generation, extraction and editing")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Generate a color harmony
    Generate {
        /// Base color as #RRGGBB (random when omitted)
        #[arg(short, long)]
        base: Option<String>,

        /// Harmony mode: random, analogous, monochromatic, triadic, complementary
        #[arg(short, long, default_value = "random")]
        mode: String,

        /// Number of colors including the base
        #[arg(short, long, default_value_t = 5)]
        count: usize,
    },
    /// Extract dominant colors from an image file or URL
    Extract {
        /// Image file path, or an http(s) URL
        source: String,
    },
    /// Show details for a color
    Inspect {
        /// Hex color, e.g. "#3A7BD5"
        hex: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Generate { base, mode, count }) => {
            init_cli_logging();
            run_generate_command(base.as_deref(), &mode, count)
        }
        Some(Commands::Extract { source }) => {
            init_cli_logging();
            run_extract_command(&source).await
        }
        Some(Commands::Inspect { hex }) => run_inspect_command(&hex),
        Some(Commands::Serve) => run_server().await,
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

/// Print a harmony, one color per line
fn run_generate_command(base: Option<&str>, mode: &str, count: usize) -> anyhow::Result<()> {
    let mode: HarmonyMode = mode.parse()?;
    if count == 0 {
        anyhow::bail!("count must be at least 1");
    }

    let mut rng = rand::thread_rng();
    let base: Color = match base {
        Some(hex) => hex
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid base color {hex:?}: {e}"))?,
        None => Color::random(&mut rng),
    };

    for color in generate(base, mode, count, &mut rng) {
        println!("{color}  {}", swatch_engine::name_for(color));
    }
    Ok(())
}

/// Print the dominant colors of an image
async fn run_extract_command(source: &str) -> anyhow::Result<()> {
    let config = AppConfig::load_from_env();
    let loader = ImageLoader::new(&config)?;

    let source = if source.starts_with("http://") || source.starts_with("https://") {
        ImageSource::Url(source.to_string())
    } else {
        ImageSource::Path(PathBuf::from(source))
    };

    let colors = loader.extract(&source).await?;
    if colors.is_empty() {
        println!("No opaque pixels found.");
    }
    for color in colors {
        println!("{color}  {}", swatch_engine::name_for(color));
    }
    Ok(())
}

/// Print everything known about one color as JSON
fn run_inspect_command(hex: &str) -> anyhow::Result<()> {
    let color: Color = hex
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid color {hex:?}: {e}"))?;
    println!(
        "{}",
        serde_json::to_string_pretty(&ColorInfo::describe(color))?
    );
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Swatchbook v{VERSION}");
    println!("Color palette generation, extraction and editing\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config = match config_file.as_deref() {
        Some(path) if Path::new(path).exists() => AppConfig::load_from_file(Path::new(path)),
        _ => AppConfig::default(),
    };
    println!("\nPalette Settings:");
    println!(
        "  size        = {} (allowed {}-{})",
        config.default_size, config.min_size, config.max_size
    );
    println!("  history     = {} snapshots", config.history_limit);
    println!("  sessions    = {} max in memory", config.max_sessions);
    println!("  headroom    = {} extra harmony colors", config.harmony_headroom);
    println!(
        "  images      = {} bytes max, {}s fetch timeout",
        config.max_image_bytes, config.fetch_timeout_secs
    );

    println!("\nCommands:");
    println!("  swatchbook serve      Start the HTTP server");
    println!("  swatchbook generate   Generate a color harmony");
    println!("  swatchbook extract    Extract dominant colors from an image");
    println!("  swatchbook inspect    Show details for a color");
    println!("\nRun 'swatchbook --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatchbook=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let config = AppConfig::load_from_env();

    tracing::info!(
        default_size = config.default_size,
        min_size = config.min_size,
        max_size = config.max_size,
        history_limit = config.history_limit,
        "Palette settings"
    );

    // Create application state using shared server module
    let state = server::create_app_state(config)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Swatchbook server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
