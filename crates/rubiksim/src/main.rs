//! Headless 3x3x3 Rubik's Cube simulator.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    // Initialize logging.
    env_logger::builder().init();
    color_eyre::install()?;

    let args = cli::Args::parse();
    cli::exec(args)
}
