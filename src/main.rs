use clap::Parser;
use log::*;

use forkauthors::{
    Collector, Result,
    cli::Args,
    config::load_tracked_repositories,
    forge::github::Github,
    report,
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("forkauthors")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // loaded before parsing so the token fallback can see it
    let dotenv = dotenvy::dotenv();

    let cli_args = Args::parse();

    initialize_logger(cli_args.debug)?;

    if dotenv.is_err() {
        debug!("no .env file found");
    }

    let tracked = load_tracked_repositories(&cli_args.repos_file);

    let github = Github::new(cli_args.remote_config())?;
    let collector =
        Collector::new(Box::new(github), cli_args.collector_options());

    let authors = collector.run(&tracked).await?;

    print!("{}", report::render(&authors));

    Ok(())
}
