use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::Context;
use ristiseiska::GameConfig;

/// How many players can sit at an interactive table.
pub const TABLE_SIZE: RangeInclusive<usize> = 2..=8;

/// Reads a [`GameConfig`] from a JSON file. Fields that are left out keep their defaults.
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let file = File::open(path)
        .with_context(|| format!("Could not open config file '{}'", path.display()))?;
    let config = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;
    Ok(config)
}

pub fn check_table_size(config: &GameConfig) -> anyhow::Result<()> {
    let total = config.total_players();
    anyhow::ensure!(
        TABLE_SIZE.contains(&total),
        "A table seats {} to {} players, but {} were requested",
        TABLE_SIZE.start(),
        TABLE_SIZE.end(),
        total
    );
    Ok(())
}
