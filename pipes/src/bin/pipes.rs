use std::io;

use miette::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pipes::harness::{Session, SessionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = SessionConfig::from_args(std::env::args().skip(1))?;

    let rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), rng, config);
    session.run().into_diagnostic()?;
    Ok(())
}
