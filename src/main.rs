//! Cube storage format radar
//! Writes a radar chart comparing octree cube storage costs to radar.html

use anyhow::Context;
use cube_format_radar::RadarConfig;

fn main() -> anyhow::Result<()> {
    let config = RadarConfig::discover().context("Failed to load radar.toml")?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter.as_str()))
        .format_timestamp_millis()
        .init();

    log::info!("Writing chart to {}", config.output.display());
    cube_format_radar::run(&config)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;

    println!("Chart written to {}", config.output.display());
    Ok(())
}
