//! Resolution pipeline scenarios

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use seashell_dev::config::{
    merge_all, EnvSource, FailedStage, Field, FileSource, FlagSource, LogLevel, PartialConfig,
    ResolveError, ResolvedConfig, Resolver, Rule, SourceError, SourceKind,
};
use similar_asserts::assert_eq;
use tempfile::TempDir;

fn env(pairs: &[(&str, &str)]) -> EnvSource {
    let vars: HashMap<String, String> =
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    EnvSource::new(Vec::<PathBuf>::new()).with_lookup(move |key| vars.get(key).cloned())
}

#[test]
fn defaults_fill_log_level_when_only_project_flag_is_given() {
    let resolved = Resolver::new()
        .env(env(&[]))
        .flags(FlagSource::raw(["--project-id=abc123"]))
        .resolve()
        .expect("resolved");

    assert_eq!(
        resolved,
        ResolvedConfig { project_id: "abc123".to_string(), log_level: LogLevel::Info }
    );
}

#[test]
fn project_id_never_set_is_required() {
    let err = Resolver::new().env(env(&[])).resolve().unwrap_err();

    let validation = err.validation().expect("validation failure");
    assert_eq!(validation.field, Field::ProjectId);
    assert_eq!(validation.rule.name(), "required");
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid configuration: missing required field ProjectID"
    );
}

#[test]
fn log_level_outside_allow_list_is_rejected() {
    let err = Resolver::new()
        .env(env(&[]))
        .flags(FlagSource::raw(["--project-id=abc123", "--log-level=TRACE"]))
        .resolve()
        .unwrap_err();

    let validation = err.validation().expect("validation failure");
    assert_eq!(validation.field, Field::LogLevel);
    assert_eq!(validation.rule, Rule::AllowedValues { value: "TRACE".to_string() });
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid configuration: LogLevel 'TRACE' is not one of INFO, WARN, DEBUG, ERROR, FATAL"
    );
}

#[test]
fn unreadable_config_file_is_a_file_stage_failure() {
    let tmp = TempDir::new().expect("tmp");
    let err = Resolver::new()
        .file(FileSource::new([tmp.path().join("nope.toml")]))
        .env(env(&[("SEASHELL_PROJECT_ID", "abc")]))
        .resolve()
        .unwrap_err();

    assert_eq!(err.stage(), FailedStage::Load(SourceKind::File));
    match &err {
        ResolveError::Adapter { stage, source: SourceError::Io { path, .. } } => {
            assert_eq!(*stage, SourceKind::File);
            assert!(path.ends_with("nope.toml"));
        }
        other => panic!("expected file io failure, got {other:?}"),
    }
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn empty_flag_keeps_env_value() {
    let resolved = Resolver::new()
        .env(env(&[("SEASHELL_PROJECT_ID", "foo")]))
        .flags(FlagSource::raw(["--project-id="]))
        .resolve()
        .expect("resolved");

    assert_eq!(resolved.project_id, "foo");
}

#[test]
fn bad_flag_syntax_is_a_flags_stage_failure() {
    let err = Resolver::new()
        .env(env(&[("SEASHELL_PROJECT_ID", "abc")]))
        .flags(FlagSource::raw(["--project-id"]))
        .resolve()
        .unwrap_err();

    assert_eq!(err.stage(), FailedStage::Load(SourceKind::Flags));
}

#[test]
fn env_files_feed_the_env_stage() {
    let tmp = TempDir::new().expect("tmp");
    let env_file = tmp.path().join(".env");
    fs::write(&env_file, "SEASHELL_PROJECT_ID=from-env-file\nSEASHELL_LOG_LEVEL=debug\n")
        .expect("write");

    let resolved = Resolver::new()
        .env(EnvSource::new([&env_file]).with_lookup(|_| None))
        .resolve()
        .expect("resolved");

    assert_eq!(
        resolved,
        ResolvedConfig { project_id: "from-env-file".to_string(), log_level: LogLevel::Debug }
    );
}

/// Every combination of sources setting `ProjectID`: the highest one wins,
/// and a source that leaves it empty never erases a lower one.
#[test]
fn highest_non_empty_source_wins_for_every_combination() {
    let kinds = SourceKind::PRECEDENCE;

    for mask in 0u8..16 {
        for empty_above in [false, true] {
            let partials: Vec<PartialConfig> = kinds
                .iter()
                .enumerate()
                .map(|(i, kind)| {
                    if mask & (1 << i) != 0 {
                        PartialConfig::default().with(Field::ProjectId, kind.as_str())
                    } else if empty_above {
                        PartialConfig::default().with(Field::ProjectId, "")
                    } else {
                        PartialConfig::default()
                    }
                })
                .collect();

            let expected = kinds
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, kind)| kind.as_str())
                .last();

            let merged = merge_all(&partials);
            assert_eq!(merged.project_id(), expected, "mask {mask:04b}, empty {empty_above}");
            assert_eq!(merge_all(&partials), merged);
        }
    }
}
