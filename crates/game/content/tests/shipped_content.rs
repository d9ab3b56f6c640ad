//! The data directory shipped with the crate must always load.

use std::path::PathBuf;

use fight_content::ContentFactory;
use fight_core::{ActionId, AnimationOracle, FightConfig};

fn factory() -> ContentFactory {
    ContentFactory::new(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"))
}

#[test]
fn shipped_config_matches_defaults() {
    assert_eq!(factory().load_config().unwrap(), FightConfig::default());
}

#[test]
fn every_shipped_character_loads() {
    let factory = factory();
    let names = factory.character_names().unwrap();
    assert_eq!(names, vec!["kfm", "suave"]);

    for name in names {
        let character = factory.load_character(&name).unwrap();
        let frames = &character.assets.frames;
        for id in [ActionId::IDLE, ActionId(130), ActionId(200)] {
            assert!(frames.action(id).is_some(), "{name} lacks action {id}");
        }
    }
}

#[test]
fn character_overrides_health() {
    let factory = factory();
    assert_eq!(factory.load_character("kfm").unwrap().max_health, None);
    assert_eq!(factory.load_character("suave").unwrap().max_health, Some(120));
}
