use clap::Parser;
use overlong::{cli::Cli, overlong};
use tracing::error;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let results = overlong(&cli, std::io::stdin().lock(), std::io::stdout().lock());
    if let Err(error) = &results {
        error!("{error}");
    }
    results.map_err(Into::into)
}
