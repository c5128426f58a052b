//! Entry point for the portfolio window.

use std::path::PathBuf;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

use folio_logging::{FileConfig, FolioSubscriberBuilder, LogConfig, RotationStrategy};
use folio_site::components::App;
use folio_site::{settings, STYLES_CSS};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Personal portfolio page")]
struct Args {
    /// Path to a TOML config file (falls back to $FOLIO_CONFIG)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Default log level (RUST_LOG takes precedence)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Also write JSONL logs to this directory
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Emit console logs as JSONL
    #[arg(long)]
    json: bool,

    /// Verbose pretty logging; ignores the other log flags
    #[arg(long)]
    dev: bool,
}

fn main() {
    let args = Args::parse();

    let logging = if args.dev {
        folio_logging::init_development()
    } else {
        let mut builder = FolioSubscriberBuilder::new()
            .with_config(LogConfig::default())
            .with_level(&args.log_level);
        if args.json {
            builder = builder.with_json_console();
        }
        if let Some(dir) = &args.log_dir {
            builder = builder.with_file_output(FileConfig {
                directory: dir.clone(),
                prefix: "folio".to_string(),
                rotation: RotationStrategy::Never,
                max_files: None,
            });
        }
        builder.init()
    };
    let _log_guard = match logging {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Warning: failed to initialize logging: {}", e);
            None
        }
    };

    let config = match settings::load_from_env(args.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid config, using defaults");
            Default::default()
        }
    };
    let window = config.window.clone();
    settings::install(config);

    tracing::info!("Starting Folio");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(&window.title)
                        .with_inner_size(LogicalSize::new(window.width, window.height))
                        .with_maximized(window.maximized),
                )
                .with_custom_head(format!(
                    r#"
                    <link rel="preconnect" href="https://fonts.googleapis.com">
                    <link rel="preconnect" href="https://fonts.gstatic.com" crossorigin>
                    <link href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;600;700;800&display=swap" rel="stylesheet">
                    <style>{}</style>
                    "#,
                    STYLES_CSS
                )),
        )
        .launch(App);
}
