//! Lexicon and rule configuration.
//!
//! Both can be overridden from a TOML file:
//!
//! ```toml
//! [[concepts]]
//! key = "schools"
//! synonyms = ["school", "education", "academy"]
//!
//! [[concepts]]
//! key = "parks"
//! synonyms = ["park", "garden", "recreation"]
//!
//! [[rules]]
//! name = "within"
//! pattern = 'within (\d+) (\w+)'
//! ```
//!
//! An omitted `concepts` or `rules` array keeps the built-in defaults; an
//! explicitly empty array (`concepts = []`) configures none.
//!
//! Standard locations, first hit wins:
//! - Project-specific (`{project}/.implore/query.toml`)
//! - User-defined (`{config_dir}/implore/query.toml`)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::lexicon::Lexicon;
use crate::rules::{PatternRule, RuleSet};

const CONFIG_DIR: &str = "implore";
const PROJECT_CONFIG_DIR: &str = ".implore";
const CONFIG_FILE: &str = "query.toml";

/// Everything a [`QueryInterpreter`](crate::QueryInterpreter) is built from.
#[derive(Debug, Clone)]
pub struct InterpreterConfig {
    pub lexicon: Lexicon,
    pub rules: RuleSet,
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            lexicon: Lexicon::builtin(),
            rules: RuleSet::builtin(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    concepts: Option<Vec<TomlConcept>>,
    rules: Option<Vec<TomlRule>>,
}

#[derive(Debug, Deserialize)]
struct TomlConcept {
    key: String,
    #[serde(default)]
    synonyms: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct TomlRule {
    name: String,
    pattern: String,
}

impl InterpreterConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let toml: TomlConfig = toml::from_str(content)?;

        let lexicon = match toml.concepts {
            Some(concepts) => parse_concepts(concepts)?,
            None => Lexicon::builtin(),
        };
        let rules = match toml.rules {
            Some(rules) => parse_rules(rules)?,
            None => RuleSet::builtin(),
        };

        Ok(Self { lexicon, rules })
    }

    /// Load a configuration file.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded query config from {:?}: {} concepts, {} rules",
            path,
            config.lexicon.len(),
            config.rules.len()
        );
        Ok(config)
    }

    /// Candidate config files in priority order.
    pub fn standard_paths(project_root: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(root) = project_root {
            paths.push(root.join(PROJECT_CONFIG_DIR).join(CONFIG_FILE));
        }
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIR).join(CONFIG_FILE));
        }
        paths
    }

    /// Load from the first existing standard location.
    ///
    /// Falls back to the built-in configuration when no file exists or the
    /// first existing file fails to load.
    pub fn load_standard(project_root: Option<&Path>) -> Self {
        Self::load_first(&Self::standard_paths(project_root))
    }

    fn load_first(paths: &[PathBuf]) -> Self {
        let Some(path) = paths.iter().find(|p| p.is_file()) else {
            return Self::default();
        };

        Self::load_from_path(path).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load query config {:?}: {}, using builtins",
                path,
                e
            );
            Self::default()
        })
    }
}

fn parse_concepts(concepts: Vec<TomlConcept>) -> Result<Lexicon, ConfigError> {
    let mut lexicon = Lexicon::new();
    for concept in concepts {
        if lexicon.contains_key(&concept.key) {
            return Err(ConfigError::DuplicateConcept(concept.key));
        }
        lexicon.insert(concept.key, concept.synonyms);
    }
    Ok(lexicon)
}

fn parse_rules(rules: Vec<TomlRule>) -> Result<RuleSet, ConfigError> {
    let mut set = RuleSet::new();
    for rule in rules {
        let name = rule.name.clone();
        if set.insert(PatternRule::new(rule.name, &rule.pattern)?).is_some() {
            return Err(ConfigError::DuplicateRule(name));
        }
    }
    Ok(set)
}
