//! Identifier mapping and the substitution automaton built from it.
//!
//! The mapping is an ordered table of old package/organization identifiers
//! to their replacements. For application it is compiled into a single
//! Aho-Corasick automaton with leftmost-longest match semantics, so when
//! entries overlap (`@proj-yoko` vs `@proj-yoko/transformers-embed`) the
//! most specific one wins regardless of table order.

use aho_corasick::{AhoCorasick, MatchKind};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::errors::{DevtoolsError, Result};

/// Ordered table of old identifier -> new identifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct IdentifierMapping {
    entries: IndexMap<String, String>,
}

impl IdentifierMapping {
    /// Create a mapping from an ordered table
    pub fn new(entries: IndexMap<String, String>) -> Self {
        Self { entries }
    }

    /// The Moeru migration table: `@yoko`-era identifiers to their current
    /// `@moeru`, `@xsai`, and `@proj-airi` names.
    pub fn moeru_migration() -> Self {
        let pairs = [
            ("@yoko/std", "@moeru/std"),
            ("@proj-yoko", "@proj-airi"),
            ("@yoko-ext", "@xsai-ext"),
            ("@yoko/embed", "@xsai/embed"),
            ("@yoko/generate-speech", "@xsai/generate-speech"),
            ("@yoko/generate-text", "@xsai/generate-text"),
            ("@yoko/generate-transcription", "@xsai/generate-transcription"),
            ("@yoko/model", "@xsai/model"),
            ("@yoko/shared", "@xsai/shared"),
            ("@yoko/shared-chat", "@xsai/shared-chat"),
            ("@yoko/stream-text", "@xsai/stream-text"),
            ("@yoko/tool", "@xsai/tool"),
            ("@yoko/utils-chat", "@xsai/utils-chat"),
            ("yokoschema", "xsschema"),
            // Transformers packages moved to their own organization
            ("@proj-yoko/transformers-embed", "@xsai-transformers/embed"),
            ("@proj-yoko/transformers-shared", "@xsai-transformers/shared"),
        ];

        Self {
            entries: pairs
                .into_iter()
                .map(|(old, new)| (old.to_string(), new.to_string()))
                .collect(),
        }
    }

    /// Number of entries in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the replacement for an old identifier
    pub fn get(&self, old: &str) -> Option<&str> {
        self.entries.get(old).map(String::as_str)
    }

    /// Iterate over (old, new) pairs in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(old, new)| (old.as_str(), new.as_str()))
    }

    /// Validate the table: non-empty, no empty identifiers, no identity pairs
    pub fn validate(&self) -> Result<()> {
        if self.entries.is_empty() {
            return Err(DevtoolsError::validation_field(
                "replacement table must not be empty",
                "rename.replacements",
            ));
        }
        for (old, new) in &self.entries {
            if old.is_empty() || new.is_empty() {
                return Err(DevtoolsError::validation_field(
                    "replacement entries must not be empty",
                    "rename.replacements",
                ));
            }
            if old == new {
                return Err(DevtoolsError::validation_field(
                    format!("replacement '{old}' maps to itself"),
                    "rename.replacements",
                ));
            }
        }
        Ok(())
    }

    /// Compile the table into a substitution over plain occurrences
    pub fn substitution(&self) -> Result<Substitution> {
        Substitution::build(self.iter().map(|(old, new)| (old.to_string(), new.to_string())))
    }

    /// Compile the table into a substitution that also matches quoted
    /// occurrences (`'old'`, `"old"`) as their own patterns, keeping the
    /// quotes in the replacement. Used for the workspace manifest, where
    /// catalog entries are quoted.
    pub fn quoted_substitution(&self) -> Result<Substitution> {
        let pairs = self.iter().flat_map(|(old, new)| {
            [
                (format!("'{old}'"), format!("'{new}'")),
                (format!("\"{old}\""), format!("\"{new}\"")),
                (old.to_string(), new.to_string()),
            ]
        });
        Substitution::build(pairs)
    }
}

/// Compiled multi-pattern replacer
pub struct Substitution {
    automaton: AhoCorasick,
    replacements: Vec<String>,
}

impl Substitution {
    fn build(pairs: impl Iterator<Item = (String, String)>) -> Result<Self> {
        let (patterns, replacements): (Vec<String>, Vec<String>) = pairs.unzip();
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                DevtoolsError::config(format!("failed to compile replacement automaton: {e}"))
            })?;
        Ok(Self {
            automaton,
            replacements,
        })
    }

    /// Replace every occurrence of every pattern in `input`
    pub fn apply(&self, input: &str) -> String {
        self.automaton.replace_all(input, &self.replacements)
    }

    /// Whether `input` contains at least one occurrence of any pattern
    pub fn would_change(&self, input: &str) -> bool {
        self.automaton.is_match(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migration_table_rewrites_plain_occurrences() {
        let sub = IdentifierMapping::moeru_migration().substitution().unwrap();
        assert_eq!(sub.apply("@yoko/std"), "@moeru/std");
        assert_eq!(sub.apply("yokoschema@^1.0.0"), "xsschema@^1.0.0");
        assert_eq!(sub.apply("untouched text"), "untouched text");
    }

    #[test]
    fn most_specific_entry_wins_on_overlap() {
        let sub = IdentifierMapping::moeru_migration().substitution().unwrap();
        // `@proj-yoko` alone maps to `@proj-airi`, but the transformers
        // packages have their own destination organization.
        assert_eq!(
            sub.apply("@proj-yoko/transformers-embed"),
            "@xsai-transformers/embed"
        );
        assert_eq!(
            sub.apply("@proj-yoko/transformers-shared"),
            "@xsai-transformers/shared"
        );
        assert_eq!(sub.apply("@proj-yoko/stage-ui"), "@proj-airi/stage-ui");
    }

    #[test]
    fn shared_prefix_entries_do_not_shadow_each_other() {
        let sub = IdentifierMapping::moeru_migration().substitution().unwrap();
        assert_eq!(sub.apply("@yoko/shared"), "@xsai/shared");
        assert_eq!(sub.apply("@yoko/shared-chat"), "@xsai/shared-chat");
        assert_eq!(sub.apply("@yoko/stream-text"), "@xsai/stream-text");
    }

    #[test]
    fn quoted_substitution_keeps_quotes() {
        let sub = IdentifierMapping::moeru_migration()
            .quoted_substitution()
            .unwrap();
        assert_eq!(sub.apply("  - '@yoko/std'"), "  - '@moeru/std'");
        assert_eq!(sub.apply("\"@yoko/tool\": ^0.1"), "\"@xsai/tool\": ^0.1");
        // Unquoted occurrences are still rewritten.
        assert_eq!(sub.apply("catalog: @yoko-ext"), "catalog: @xsai-ext");
    }

    #[test]
    fn validate_rejects_degenerate_tables() {
        assert!(IdentifierMapping::new(IndexMap::new()).validate().is_err());

        let mut identity = IndexMap::new();
        identity.insert("@same".to_string(), "@same".to_string());
        assert!(IdentifierMapping::new(identity).validate().is_err());

        let mut empty_old = IndexMap::new();
        empty_old.insert(String::new(), "@new".to_string());
        assert!(IdentifierMapping::new(empty_old).validate().is_err());

        assert!(IdentifierMapping::moeru_migration().validate().is_ok());
    }

    #[test]
    fn would_change_detects_occurrences() {
        let sub = IdentifierMapping::moeru_migration().substitution().unwrap();
        assert!(sub.would_change(r#"{"name":"@yoko/model"}"#));
        assert!(!sub.would_change(r#"{"name":"@moeru/std"}"#));
    }
}
