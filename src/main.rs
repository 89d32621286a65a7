use anyhow::Result;
use tracing_subscriber::EnvFilter;

use hanoi_puzzle::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut session = Session::stdio(SessionConfig::detect());
    session.run()?;
    Ok(())
}
