//! Merge engine
//!
//! Folds partial configurations into one `Config`, lowest precedence first.
//! Only non-empty values override: a source that leaves a field unset or
//! empty never erases what an earlier source set. An explicitly empty value
//! therefore cannot clear a field.

use super::types::{Config, Field, PartialConfig};

impl Config {
    /// Apply `overlay` on top of `self`.
    pub fn merge(mut self, overlay: &PartialConfig) -> Config {
        for field in overlay.set_fields() {
            let value = overlay.get(field).map(str::to_string);
            match field {
                Field::ProjectId => self.project_id = value,
                Field::LogLevel => self.log_level = value,
            }
        }
        self
    }
}

/// Merge `sources` in order, starting from an all-unset `Config`.
pub fn merge_all<'a, I>(sources: I) -> Config
where
    I: IntoIterator<Item = &'a PartialConfig>,
{
    sources.into_iter().fold(Config::default(), Config::merge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partial(project_id: Option<&str>, log_level: Option<&str>) -> PartialConfig {
        PartialConfig {
            project_id: project_id.map(str::to_string),
            log_level: log_level.map(str::to_string),
        }
    }

    #[test]
    fn merge_all_of_nothing_is_unset() {
        let merged = merge_all(&Vec::<PartialConfig>::new());
        assert_eq!(merged, Config::default());
        assert!(merged.project_id().is_none());
    }

    #[test]
    fn highest_precedence_non_empty_value_wins() {
        let sources = [
            partial(Some("defaults"), Some("INFO")),
            partial(Some("file"), None),
            partial(Some("env"), Some("WARN")),
            partial(Some("flags"), None),
        ];
        let merged = merge_all(&sources);
        assert_eq!(merged.project_id(), Some("flags"));
        assert_eq!(merged.log_level(), Some("WARN"));
    }

    #[test]
    fn empty_value_does_not_erase_earlier_value() {
        let sources = [
            partial(None, Some("DEBUG")),
            partial(Some("foo"), None),
            partial(Some(""), Some("")),
        ];
        let merged = merge_all(&sources);
        assert_eq!(merged.project_id(), Some("foo"));
        assert_eq!(merged.log_level(), Some("DEBUG"));
    }

    #[test]
    fn merge_is_deterministic() {
        let sources = vec![
            partial(Some("a"), None),
            partial(None, Some("ERROR")),
            partial(Some("b"), Some("")),
        ];
        assert_eq!(merge_all(&sources), merge_all(&sources));
    }

    #[test]
    fn single_merge_step_matches_merge_all() {
        let base = Config::default().merge(&partial(Some("a"), Some("INFO")));
        let stepped = base.merge(&partial(Some("b"), None));
        let folded = merge_all(&[partial(Some("a"), Some("INFO")), partial(Some("b"), None)]);
        assert_eq!(stepped, folded);
    }
}
