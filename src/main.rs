use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use speciesrep_classes::cli;

fn main() -> anyhow::Result<()> {
    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors exit with 1 rather than clap's default of 2
            let _ = e.print();
            std::process::exit(1);
        }
    };

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("speciesrep_classes=debug,info")
    } else {
        EnvFilter::new("speciesrep_classes=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();

    cli::extract::run(&cli.args, cli.format)?;

    Ok(())
}
