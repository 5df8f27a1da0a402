use std::process::ExitCode;

use clap::Parser;

use babykit_cli::{Cli, Config, commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = Config::load(cli.data_dir.clone())?;
    babykit_observability::init(config.log_format, "warn");
    tracing::debug!(data_dir = %config.data_dir.display(), "resolved configuration");

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = commands::execute(cli, &config, &mut stdout.lock(), &mut stderr.lock())?;
    Ok(outcome.into())
}
