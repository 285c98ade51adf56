//! seashell-dev: initialize Seashell development environments

use anyhow::Result;

fn main() -> Result<()> {
    seashell_dev::cli::run()
}
