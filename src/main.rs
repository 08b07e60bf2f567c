use std::io::{self, Write};

use anyhow::Context;
use cim10_claml::{ConverterConfig, convert_file, to_json_string};

fn main() -> anyhow::Result<()> {
    // Setup logging; stdout only carries the JSON document
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ConverterConfig::default();

    let catalog = convert_file(&config)
        .with_context(|| format!("Failed to convert {}", config.input_path.display()))?;
    let json = to_json_string(&catalog, config.indent).context("Failed to encode definitions")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(json.as_bytes())
        .context("Failed to write definitions")?;
    stdout.flush()?;

    Ok(())
}
