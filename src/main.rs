//=========================================================================
// Pitch Demo: Binary
//
// Usage: pitch_demo [config.toml]
//
//=========================================================================

use anyhow::Context;
use log::info;

use pitch_demo::game::GameScene;
use pitch_demo::{logger, EngineBuilder, EngineConfig};

const DEFAULT_CONFIG: &str = "pitch_demo.toml";

fn main() -> anyhow::Result<()> {
    logger::init();

    let path = std::env::args().nth(1).unwrap_or_else(|| DEFAULT_CONFIG.to_owned());
    let config = EngineConfig::load_or_default(&path)
        .with_context(|| format!("loading configuration from {}", path))?;
    info!("Configuration: {:?}", config);

    EngineBuilder::new()
        .with_config(config)
        .build()
        .run(GameScene::new)?;

    Ok(())
}
