use gauss_sum::cli::Cli;
use gauss_sum::{Settings, logging};

fn main() {
    let (cli, usage_error) = match Cli::parse_lenient(std::env::args_os()) {
        Ok(parsed) => parsed,
        // --help and --version
        Err(e) => e.exit(),
    };

    let loaded = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let (mut settings, config_error) = match loaded {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };

    if cli.verbose {
        settings.logging.default = "debug".to_string();
    }
    logging::init_with_config(&settings.logging);

    if let Some(e) = usage_error {
        tracing::warn!("Ignoring command-line arguments: {:?}", e.kind());
    }
    if let Some(e) = config_error {
        tracing::warn!("Configuration error: {e}. Using defaults.");
    }
    match settings.to_toml() {
        Ok(toml_str) => tracing::debug!("Effective settings:\n{toml_str}"),
        Err(e) => tracing::debug!("Cannot render settings: {e}"),
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    // Exit status is 0 even when stdout is gone.
    if let Err(e) = gauss_sum::run(stdin.lock(), stdout.lock()) {
        tracing::debug!("failed to write result: {e}");
    }
}
