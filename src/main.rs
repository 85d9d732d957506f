use clap::Parser;
use git_spruce::cli::{execute_command, Cli};

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still wins over --verbose
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Err(e) = execute_command(cli) {
        log::debug!("{:?}", e);
        eprintln!("git-spruce: {}", e);
        std::process::exit(1);
    }
}
