use expense_tracker::{cli::run_cli, config::ConfigManager, init};

fn main() {
    // A broken config file is reported by the shell itself; here it only
    // means the default log filter.
    let log_filter = ConfigManager::new()
        .and_then(|manager| manager.load())
        .ok()
        .and_then(|config| config.log_filter);
    init(log_filter.as_deref());

    if let Err(err) = run_cli() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
