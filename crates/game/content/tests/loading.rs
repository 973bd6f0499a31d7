use std::fs;

use heist_content::{ConfigLoader, ContentFactory, LevelLoader};
use heist_core::{GameStatus, TurnScheduler};

const LEVEL: &str = r#######"(
    name: "Closet",
    difficulty: 2,
    rows: ["#####", "#.D.#", "#..E#", "#####"],
    player_start: (1, 1),
    exit: (3, 2),
)"#######;

#[test]
fn factory_reads_config_and_levels_from_disk() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::create_dir(dir.path().join("levels")).expect("levels dir");
    fs::write(dir.path().join("levels/closet.ron"), LEVEL).expect("write level");
    fs::write(dir.path().join("levels/notes.txt"), "ignored").expect("write notes");
    fs::write(dir.path().join("config.toml"), "alert_decay = 7\n").expect("write config");

    let factory = ContentFactory::new(dir.path());
    assert_eq!(factory.level_names().expect("list"), vec!["closet".to_string()]);

    let config = factory.load_config().expect("config");
    assert_eq!(config.alert_decay, 7);

    let descriptor = factory.load_level("closet").expect("level");
    assert_eq!(descriptor.difficulty, 2);
    assert_eq!(descriptor.keycard_doors.len(), 1);

    let scheduler = TurnScheduler::new(config);
    let state = scheduler.start_level(descriptor).expect("valid level");
    assert_eq!(state.status, GameStatus::Playing);
    assert!(!state.player.has_keycard);
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let factory = ContentFactory::new(dir.path());

    assert_eq!(factory.load_config().expect("defaults"), heist_core::GameConfig::default());
    assert!(factory.load_level("nowhere").is_err());
}

#[test]
fn load_errors_mention_the_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("broken.ron");
    fs::write(&path, "(name: \"Broken\"").expect("write");

    let error = LevelLoader::load(&path).expect_err("truncated RON");
    assert!(format!("{error:#}").contains("broken.ron"));

    let missing = ConfigLoader::load(&dir.path().join("absent.toml")).expect_err("no file");
    assert!(missing.to_string().contains("absent.toml"));
}

#[test]
fn bundled_factory_lists_shipped_levels() {
    let factory = ContentFactory::bundled();
    let names = factory.level_names().expect("bundled levels");

    for name in ["gallery", "tutorial", "vault"] {
        assert!(names.iter().any(|level| level == name), "missing {name}");
    }
    assert_eq!(factory.load_config().expect("bundled config"), ConfigLoader::bundled().expect("parses"));
}
