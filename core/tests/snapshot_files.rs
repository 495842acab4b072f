// core/tests/snapshot_files.rs
//
// Dictionaries built from snapshot files on disk.
//
// Tests cover:
// - JSON and bincode snapshots produce the same parses
// - construction errors surface from bad snapshot data
// - parser configuration loaded from TOML

use libmorph_core::{
    Config, Dictionary, DictionaryError, EndingRecord, EndingType, MorphParser, Snapshot,
};
use std::env::temp_dir;
use std::sync::Arc;

fn fixture() -> Snapshot {
    let mut snapshot = Snapshot::with_words(["hope", "kind", "city"]);
    snapshot
        .add_unsplittable("sing")
        .add_ending(EndingRecord::decomposable("ness", "4"))
        .add_ending(EndingRecord::new("ness", EndingType::StrongSuffix))
        .add_ending(EndingRecord::new("ties", EndingType::ConsonantY))
        .add_derivatives("kind", "kindness, kindly");
    snapshot
}

#[test]
fn json_and_bincode_snapshots_parse_alike() {
    let snapshot = fixture();
    let json = temp_dir().join("libmorph_snapshot_files.json");
    let bin = temp_dir().join("libmorph_snapshot_files.bin");
    snapshot.save(&json).unwrap();
    snapshot.save(&bin).unwrap();

    let from_json = Arc::new(Dictionary::build(&Snapshot::load(&json).unwrap()).unwrap());
    let from_bin = Arc::new(Dictionary::build(&Snapshot::load(&bin).unwrap()).unwrap());
    let _ = std::fs::remove_file(&json);
    let _ = std::fs::remove_file(&bin);

    let mut a = MorphParser::new(from_json);
    let mut b = MorphParser::new(from_bin);
    for word in ["hoping", "kindness", "cities", "sing"] {
        assert_eq!(a.parse(word), b.parse(word), "{word}");
    }
    assert_eq!(a.parse("kindness").roots(), vec!["kind"]);
}

#[test]
fn malformed_cut_rule_stops_the_build() {
    let snapshot = Snapshot::from_json_str(
        r#"{ "endings": [ { "name": "ness", "ending_type": 2, "cut_ways": "4, y" } ] }"#,
    )
    .unwrap();
    match Dictionary::build(&snapshot) {
        Err(DictionaryError::MalformedCutRule { ending, rule, .. }) => {
            assert_eq!(ending, "ness");
            assert_eq!(rule, "y");
        }
        other => panic!("expected a malformed rule error, got {other:?}"),
    }
}

#[test]
fn unreadable_snapshots_are_errors() {
    let missing = temp_dir().join("libmorph_no_such_snapshot.json");
    assert!(matches!(Snapshot::load(&missing), Err(DictionaryError::Io(_))));
    assert!(matches!(
        Snapshot::from_json_str("{ not json"),
        Err(DictionaryError::Json(_))
    ));
}

#[test]
fn config_limits_change_parses() {
    let path = temp_dir().join("libmorph_snapshot_files.toml");
    std::fs::write(&path, "min_suffix_word_len = 20\n").unwrap();
    let config = Config::load_toml(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(config.max_cache_size, Config::default().max_cache_size);

    let dictionary = Arc::new(Dictionary::build(&fixture()).unwrap());
    let mut strict = MorphParser::with_config(dictionary.clone(), config);
    let mut default = MorphParser::new(dictionary);
    assert!(strict.parse("kindness").is_leaf());
    assert!(!default.parse("kindness").is_leaf());
}
