use binance_futures_cli::application::services::Services;
use binance_futures_cli::cli;
use binance_futures_cli::config::Config;
use binance_futures_cli::session;
use binance_futures_cli::utils::logger::setup_logger;
use std::io;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::new();

    if let Err(e) = setup_logger(&config.log_file) {
        eprintln!("Could not open log file {}: {e}", config.log_file);
        return ExitCode::FAILURE;
    }
    let log_file = config.log_file.clone();

    let client = match session::connect(config).await {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Could not connect to the Binance Futures Testnet: {e}");
            eprintln!("Set BINANCE_API_KEY and BINANCE_API_SECRET (testnet keys) and try again.");
            return ExitCode::FAILURE;
        }
    };

    let services = Services::new(client);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    println!("Logging to {log_file}");

    match cli::run(&services, &mut input, &mut out).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Console terminated: {e}");
            ExitCode::FAILURE
        }
    }
}
