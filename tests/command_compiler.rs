//! Integration tests for compiling options and attack modes into argv.

use std::fs;
use std::path::{Path, PathBuf};

use crackctl::args::{
    compile_job, compile_options, resolve_hash_code, AttackMode, EQUALS_REQUIRED, SHORT_SWITCHES,
};
use crackctl::options::{
    is_internal, DefaultValue, OptionDef, OptionKind, OptionStore, OptionValue, INTERNAL_OPTIONS,
    OPTIONS,
};

fn argv(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

fn store_with_hashes() -> OptionStore {
    let mut store = OptionStore::new();
    store.set("hash_file", PathBuf::from("hashes.txt")).unwrap();
    store
}

fn install_dir() -> &'static Path {
    Path::new("/nonexistent/engine")
}

// =============================================================================
// CHANGED-SET COMPILATION
// =============================================================================

#[test]
fn each_switch_form_is_rendered() {
    let mut store = OptionStore::new();
    store.set("outfile", PathBuf::from("cracked.txt")).unwrap();
    store.set("gpu_temp_abort", 70).unwrap();
    store.set("potfile_disable", true).unwrap();

    assert_eq!(
        compile_options(&store),
        argv(&["-o", "cracked.txt", "--gpu-temp-abort=70", "--potfile-disable"])
    );
}

/// A value of `def`'s kind that differs from its default.
fn non_default(def: &OptionDef) -> OptionValue {
    match (def.kind, def.default) {
        (OptionKind::Flag, DefaultValue::Flag(b)) => OptionValue::Flag(!b),
        (OptionKind::Flag, _) => OptionValue::Flag(true),
        (OptionKind::Int, DefaultValue::Int(n)) => OptionValue::Int(n + 1),
        (OptionKind::Int, _) => OptionValue::Int(7),
        (OptionKind::Text, _) => OptionValue::Text("changed-value".to_string()),
        (OptionKind::Path, _) => OptionValue::Path(PathBuf::from("changed.path")),
        (OptionKind::PathList, _) => {
            OptionValue::PathList(vec![PathBuf::from("changed.list")])
        }
    }
}

#[test]
fn every_switch_option_compiles_to_its_dashed_form() {
    let mut checked = 0;
    for def in OPTIONS.iter().filter(|d| !is_internal(d.name)) {
        let value = non_default(def);
        let mut store = OptionStore::new();
        store.set(def.name, value.clone()).unwrap();

        let dashed = def.name.replace('_', "-");
        let text = value.to_string();
        let short = SHORT_SWITCHES.iter().find(|(name, _)| *name == dashed);
        let expected = match short {
            Some((_, letter)) => vec![format!("-{}", letter), text],
            None if EQUALS_REQUIRED.contains(&dashed.as_str()) => {
                vec![format!("--{}={}", dashed, text)]
            }
            None => vec![format!("--{}", dashed)],
        };
        assert_eq!(compile_options(&store), expected, "{}", def.name);
        checked += 1;
    }
    assert_eq!(checked, OPTIONS.len() - INTERNAL_OPTIONS.len());
}

#[test]
fn switches_follow_assignment_order() {
    let mut store = OptionStore::new();
    store.set("session", "nightly").unwrap();
    store.set("quiet", true).unwrap();
    store.set("custom_charset1", "?l?d").unwrap();

    assert_eq!(
        compile_options(&store),
        argv(&["--session=nightly", "--quiet", "-1", "?l?d"])
    );
}

#[test]
fn duplicate_changes_emit_duplicate_tokens() {
    let mut store = OptionStore::new();
    store.set("status_timer", 5).unwrap();
    store.set("status_timer", 7).unwrap();
    assert_eq!(
        compile_options(&store),
        argv(&["--status-timer=7", "--status-timer=7"])
    );
}

#[test]
fn reset_leaves_only_positional_tokens() {
    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    store.set("quiet", true).unwrap();
    store.set("outfile", PathBuf::from("out.txt")).unwrap();

    store.reset();
    store.set("hash_file", PathBuf::from("hashes.txt")).unwrap();
    store.add_dictionary("words.txt");

    let job = compile_job(&store, AttackMode::Straight, install_dir()).unwrap();
    assert_eq!(job.args, argv(&["-m", "0", "-a", "0", "hashes.txt", "words.txt"]));
}

// =============================================================================
// ATTACK MODES
// =============================================================================

#[test]
fn straight_attack_layout() {
    let mut store = store_with_hashes();
    store.set("hash_type", "NTLM").unwrap();
    store.add_dictionary("rockyou.txt");
    store.add_dictionary("ignored.txt");
    store.set("quiet", true).unwrap();

    let job = compile_job(&store, AttackMode::Straight, install_dir()).unwrap();
    assert_eq!(job.hash_code, "1000");
    assert_eq!(job.inputs, argv(&["rockyou.txt"]));
    assert_eq!(
        job.args,
        argv(&["-m", "1000", "-a", "0", "hashes.txt", "rockyou.txt", "--quiet"])
    );
}

#[test]
fn straight_attack_without_dictionary_yields_no_job() {
    let store = store_with_hashes();
    assert!(compile_job(&store, AttackMode::Straight, install_dir()).is_none());
}

#[test]
fn missing_hash_file_yields_no_job() {
    let mut store = OptionStore::new();
    store.add_dictionary("words.txt");
    assert!(compile_job(&store, AttackMode::Straight, install_dir()).is_none());
}

#[test]
fn straight_attack_keeps_only_existing_rules() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("best64.rule"), ":\n").unwrap();
    let absolute = dir.path().join("absolute.rule");
    fs::write(&absolute, "l\n").unwrap();

    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    store.add_rules_file("best64.rule");
    store.add_rules_file("missing.rule");
    store.add_rules_file(absolute.clone());

    let job = compile_job(&store, AttackMode::Straight, dir.path()).unwrap();
    let relative = dir.path().join("best64.rule").display().to_string();
    let absolute = absolute.display().to_string();
    assert_eq!(
        job.args,
        argv(&[
            "-m",
            "0",
            "-a",
            "0",
            "hashes.txt",
            "words.txt",
            "-r",
            relative.as_str(),
            "-r",
            absolute.as_str()
        ])
    );
}

#[test]
fn rules_are_ignored_outside_straight_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("best64.rule"), ":\n").unwrap();

    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    store.add_rules_file("best64.rule");

    let job = compile_job(&store, AttackMode::BruteForce, dir.path()).unwrap();
    assert!(!job.args.contains(&"-r".to_string()));
}

#[test]
fn combinator_needs_two_dictionaries() {
    let mut store = store_with_hashes();
    store.add_dictionary("left.txt");
    assert!(compile_job(&store, AttackMode::Combinator, install_dir()).is_none());

    store.add_dictionary("right.txt");
    let job = compile_job(&store, AttackMode::Combinator, install_dir()).unwrap();
    assert_eq!(
        job.args,
        argv(&["-m", "0", "-a", "1", "hashes.txt", "left.txt", "right.txt"])
    );
}

#[test]
fn brute_force_uses_first_dictionary() {
    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    let job = compile_job(&store, AttackMode::BruteForce, install_dir()).unwrap();
    assert_eq!(job.args, argv(&["-m", "0", "-a", "3", "hashes.txt", "words.txt"]));
}

#[test]
fn hybrid_modes_need_a_mask() {
    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    assert!(compile_job(&store, AttackMode::HybridDictMask, install_dir()).is_none());
    assert!(compile_job(&store, AttackMode::HybridMaskDict, install_dir()).is_none());
}

#[test]
fn hybrid_dict_mask_puts_dictionary_first() {
    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    store.set("mask", "?d?d?d").unwrap();

    let job = compile_job(&store, AttackMode::HybridDictMask, install_dir()).unwrap();
    assert_eq!(
        job.args,
        argv(&["-m", "0", "-a", "6", "hashes.txt", "words.txt", "?d?d?d"])
    );
}

#[test]
fn hybrid_mask_dict_prefers_mask_file() {
    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    store.set("mask", "?d?d?d").unwrap();
    store.set("masks_file", PathBuf::from("masks.hcmask")).unwrap();

    let job = compile_job(&store, AttackMode::HybridMaskDict, install_dir()).unwrap();
    assert_eq!(
        job.args,
        argv(&["-m", "0", "-a", "7", "hashes.txt", "masks.hcmask", "words.txt"])
    );
}

#[test]
fn unknown_hash_type_falls_back_to_md5() {
    let mut store = store_with_hashes();
    store.set("hash_type", "totally-unknown-xyz").unwrap();
    assert_eq!(resolve_hash_code(&store), "0");
}

#[test]
fn command_line_is_program_then_args() {
    let mut store = store_with_hashes();
    store.add_dictionary("words.txt");
    let job = compile_job(&store, AttackMode::Straight, install_dir()).unwrap();
    assert_eq!(
        job.command_line(Path::new("./cudaHashcat64.bin")),
        "./cudaHashcat64.bin -m 0 -a 0 hashes.txt words.txt"
    );
}

#[test]
fn attack_modes_parse_from_names_and_numbers() {
    assert_eq!("straight".parse::<AttackMode>(), Ok(AttackMode::Straight));
    assert_eq!("hybrid_mask_dict".parse::<AttackMode>(), Ok(AttackMode::HybridMaskDict));
    assert_eq!("3".parse::<AttackMode>(), Ok(AttackMode::BruteForce));
    assert!("2".parse::<AttackMode>().is_err());
}
