// End-to-end checks for training, suggesting and persisting the n-gram model.

use libviet_core::{fold_lower, Config, Error, NGramModel};
use std::io::Write;
use std::path::PathBuf;

const CORPUS: &[&str] = &[
    "Tôi đi học mỗi ngày.",
    "Tôi đi làm ở Hà Nội.",
    "hôm nay trời đẹp quá",
    "hôm nay trời mưa to",
    "trường học ở gần nhà",
    "chào bạn, bạn khỏe không?",
    "tôi thích đi chơi với bạn",
    "mẹ tôi nấu cơm rất ngon",
];

fn temp_path(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!(
        "libviet_test_{}_{}",
        name,
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    p
}

fn trained() -> NGramModel {
    let mut m = NGramModel::new(3, 0.75, 200).unwrap();
    m.fit_lines(CORPUS.iter().copied());
    m
}

#[test]
fn scenario_next_word_after_toi_di() {
    let m = trained();
    let out = m.suggest("tôi đi", None, 5);
    assert!(out.contains(&"học".to_string()), "got {:?}", out);
    assert!(out.contains(&"làm".to_string()), "got {:?}", out);
}

#[test]
fn observed_continuation_outranks_bucket_extras() {
    let m = trained();
    // "ho" pulls "hôm" from the prefix bucket; it never follows "tôi đi".
    let scored = m.suggest_scored("tôi đi", Some("ho"), 10);
    assert_eq!(scored[0].0, "học", "got {:?}", scored);
    let hom = scored
        .iter()
        .find(|(w, _)| w == "hôm")
        .expect("bucket extra present");
    assert!(hom.1 < scored[0].1);
}

#[test]
fn suggestions_are_bounded_distinct_and_known() {
    let m = trained();
    let contexts = ["", "tôi", "hôm nay", "không có trong dữ liệu", "bạn"];
    let prefixes = [None, Some("t"), Some("tr"), Some("tro"), Some("b")];
    for ctx in contexts {
        for prefix in prefixes {
            for k in [1usize, 3, 10] {
                let out = m.suggest(ctx, prefix, k);
                assert!(out.len() <= k);
                let mut dedup = out.clone();
                dedup.sort();
                dedup.dedup();
                assert_eq!(dedup.len(), out.len(), "duplicates in {:?}", out);
                for w in &out {
                    assert!(m.contains(w), "{w} not in vocabulary");
                    assert!(w != "<s>" && w != "</s>");
                }
            }
        }
    }
}

#[test]
fn prefix_constrains_every_result() {
    let m = trained();
    for prefix in ["tr", "troi", "ho", "ba", "đi", "di"] {
        let folded = fold_lower(prefix);
        for w in m.suggest("hôm nay", Some(prefix), 10) {
            assert!(
                w.starts_with(prefix) || fold_lower(&w).starts_with(&folded),
                "{w} does not match prefix {prefix}"
            );
            assert!(w.chars().count() >= 2);
        }
    }
}

#[test]
fn toneless_prefix_finds_accented_word() {
    let m = trained();
    let out = m.suggest("hôm nay", Some("troi"), 3);
    assert_eq!(out.first().map(String::as_str), Some("trời"));
}

#[test]
fn empty_context_still_suggests() {
    let m = trained();
    let out = m.suggest("", None, 5);
    assert!(!out.is_empty());
    // Punctuation never surfaces as a suggestion.
    assert!(out.iter().all(|w| w.chars().any(char::is_alphanumeric)));
}

#[test]
fn suggest_is_deterministic() {
    let m = trained();
    let a = m.suggest("tôi", Some("đ"), 10);
    let b = m.suggest("tôi", Some("đ"), 10);
    assert_eq!(a, b);
}

#[test]
fn save_and_load_preserves_behaviour() {
    let m = trained();
    let path = temp_path("model.bin");
    m.save(&path).expect("save");

    let loaded = NGramModel::load(&path).expect("load");
    assert_eq!(loaded, m);
    for (ctx, prefix) in [("tôi đi", None), ("hôm nay", Some("tr")), ("", None)] {
        assert_eq!(loaded.suggest(ctx, prefix, 5), m.suggest(ctx, prefix, 5));
    }
    let _ = std::fs::remove_file(path);
}

#[test]
fn corrupt_artifact_is_model_load_error() {
    let path = temp_path("corrupt.bin");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(b"VNLM\x01\x00\x00\x00garbage")
        .unwrap();
    let err = NGramModel::load(&path).unwrap_err();
    assert!(matches!(err, Error::ModelLoad { .. }), "got {err:?}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn oversized_length_field_is_model_load_error() {
    let path = temp_path("forged.bin");
    let mut bytes = b"VNLM".to_vec();
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&3u64.to_le_bytes()); // order
    bytes.extend_from_slice(&0.75f64.to_le_bytes()); // discount
    bytes.extend_from_slice(&200u64.to_le_bytes()); // pool
    bytes.extend_from_slice(&1.12f64.to_le_bytes());
    bytes.extend_from_slice(&0.90f64.to_le_bytes());
    bytes.extend_from_slice(&3u64.to_le_bytes()); // count tables
    bytes.extend_from_slice(&1u64.to_le_bytes()); // entries in the first
    bytes.extend_from_slice(&1u64.to_le_bytes()); // tokens in the key
    bytes.extend_from_slice(&(1u64 << 62).to_le_bytes()); // token length
    std::fs::write(&path, &bytes).unwrap();

    let err = NGramModel::load(&path).unwrap_err();
    assert!(matches!(err, Error::ModelLoad { .. }), "got {err:?}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn wrong_magic_or_version_is_rejected() {
    let path = temp_path("badmagic.bin");
    std::fs::write(&path, b"NOPE\x01\x00\x00\x00").unwrap();
    assert!(matches!(
        NGramModel::load(&path),
        Err(Error::ModelLoad { .. })
    ));

    std::fs::write(&path, b"VNLM\x63\x00\x00\x00").unwrap();
    let err = NGramModel::load(&path).unwrap_err();
    assert!(err.to_string().contains("version"), "got {err}");
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_artifact_is_model_load_error() {
    let err = NGramModel::load(temp_path("absent.bin")).unwrap_err();
    assert!(matches!(err, Error::ModelLoad { .. }));
}

#[test]
fn missing_corpus_is_reported() {
    let mut m = NGramModel::new(3, 0.75, 200).unwrap();
    let err = m.fit(temp_path("no_corpus.txt")).unwrap_err();
    assert!(matches!(err, Error::CorpusNotFound(_)));
}

#[test]
fn fit_from_file_matches_fit_lines() {
    let path = temp_path("corpus.txt");
    std::fs::write(&path, CORPUS.join("\n")).unwrap();

    let mut from_file = NGramModel::new(3, 0.75, 200).unwrap();
    from_file.fit(&path).unwrap();
    assert_eq!(from_file, trained());
    let _ = std::fs::remove_file(path);
}

#[test]
fn config_drives_model_shape() {
    let cfg = Config::from_toml_str("order = 2\nextra_pool = 5\n").unwrap();
    let mut m = NGramModel::from_config(&cfg).unwrap();
    m.fit_lines(CORPUS.iter().copied());
    let stats = m.stats();
    assert_eq!(stats.order, 2);
    assert_eq!(stats.ngram_types.len(), 2);
    assert_eq!(m.extra_pool(), 5);
    // Unseen history falls back to the popularity pool, capped at extra_pool.
    let out = m.suggest("không thấy", None, 50);
    assert_eq!(out.len(), 5);
}
