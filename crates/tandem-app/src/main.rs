mod app_state;
mod cli;

use std::path::PathBuf;

use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use tandem_config::TandemConfig;

use app_state::LaunchOptions;

const DEFAULT_LOG_DIRECTIVE: &str = "tandem=info";

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let path = tandem_platform::crash_report::write_crash_report(info);

        eprintln!("\n--- Tandem crashed ---");
        if let Some(p) = &path {
            eprintln!("Crash report written to: {}", p.display());
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

fn load_config(args: &cli::Args) -> (TandemConfig, Option<String>) {
    let loaded = match args.config.as_deref() {
        Some(path) => tandem_config::toml_loader::load_from_path(std::path::Path::new(path)),
        None => tandem_config::load_config(),
    };
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (TandemConfig::default(), Some(e.to_string())),
    }
}

fn init_logging(directive: &str) {
    let directive: Result<Directive, _> = directive
        .parse()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse());
    let filter = match directive {
        Ok(d) => EnvFilter::from_default_env().add_directive(d),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    install_panic_hook();

    let args = cli::parse();

    // Config comes first so its log level can seed the filter; load
    // problems are reported once logging is up.
    let (config, config_error) = load_config(&args);

    let directive = args
        .log_level
        .as_deref()
        .map(|level| {
            if level.contains('=') {
                level.to_string()
            } else {
                format!("tandem={level}")
            }
        })
        .unwrap_or_else(|| config.logging.level.directive().to_string());
    init_logging(&directive);

    tracing::info!("Tandem v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    if let Some(e) = config_error {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::info!(
        "Config loaded (url: {}, sidebar: {}px)",
        config.session.url,
        config.sidebar.width
    );
    tracing::debug!("Effective config: {}", tandem_config::config_to_json(&config));

    if let Err(e) = tandem_platform::paths::ensure_dirs() {
        tracing::warn!("Failed to create directories: {e}");
    }

    let state_file = match args.state_file.as_deref() {
        Some(path) => PathBuf::from(path),
        None => match tandem_platform::paths::state_file() {
            Ok(path) => path,
            Err(e) => {
                tracing::error!("Cannot locate session state file: {e}");
                std::process::exit(1);
            }
        },
    };
    let partitions_dir = match tandem_platform::paths::partitions_dir() {
        Ok(path) => path,
        Err(e) => {
            tracing::error!("Cannot locate session partitions directory: {e}");
            std::process::exit(1);
        }
    };

    let options = LaunchOptions {
        restore: config.session.restore_on_startup && !args.no_restore,
        state_file,
        partitions_dir,
    };
    tracing::info!(
        "Session state: {} (restore: {})",
        options.state_file.display(),
        options.restore
    );

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::TandemApp::new(config, options);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
