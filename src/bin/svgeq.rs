use svgeq::Result;

use svgeq::cli::{get_config, run};

fn main() -> Result<()> {
    run(get_config()?)?;

    Ok(())
}
