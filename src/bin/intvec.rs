use anyhow::Result;
use int_vector_lab::cli::{Cli, LOG_ENV};
use std::io::{self, Write};

fn main() -> Result<()> {
    let cli = Cli::parse_args();

    env_logger::Builder::default()
        .filter_level(cli.log_filter())
        .parse_env(env_logger::Env::default().filter(LOG_ENV))
        .init();

    let mut out = io::stdout().lock();
    cli.command.run(&mut out)?;
    out.flush()?;
    Ok(())
}
