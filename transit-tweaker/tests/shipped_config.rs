use std::path::Path;

use transit_tweaker::{ConfigLoader, FileConfigLoader, TweakerConfig};

#[test]
fn shipped_config_parses_to_defaults() {
    let config =
        TweakerConfig::from_json5(include_str!("../config/config.json5")).expect("valid config");
    assert_eq!(config, TweakerConfig::default());
}

#[test]
fn file_loader_reads_config_beside_mod() {
    let mod_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let loader = FileConfigLoader::beside(mod_dir);
    let config = loader.load_config().expect("load shipped config");
    assert!(!config.debug);
    assert_eq!(config.transit_grid_size.x, 3);
    assert_eq!(config.transit_grid_size.y, 3);
}
