//! Named pattern rules for quantity extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::ConfigError;

/// Name of the rule consulted for distance thresholds.
pub const WITHIN_RULE: &str = "within";

/// Built-in pattern for the [`WITHIN_RULE`]: a digit magnitude, then a unit word.
pub const WITHIN_PATTERN: &str = r"within (\d+) (\w+)";

lazy_static! {
    static ref BUILTIN_WITHIN: Regex = Regex::new(WITHIN_PATTERN).unwrap();
}

/// A named regular expression with exactly two capture groups
/// (quantity, unit).
#[derive(Debug, Clone)]
pub struct PatternRule {
    name: String,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule from pattern source.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, ConfigError> {
        let name = name.into();
        let regex = Regex::new(pattern).map_err(|e| ConfigError::InvalidPattern {
            name: name.clone(),
            reason: e.to_string(),
        })?;
        Self::from_regex(name, regex)
    }

    /// Wrap an already compiled regex.
    pub fn from_regex(name: impl Into<String>, regex: Regex) -> Result<Self, ConfigError> {
        let name = name.into();
        // Group 0 is the whole match.
        let found = regex.captures_len() - 1;
        if found != 2 {
            return Err(ConfigError::CaptureGroups { name, found });
        }
        Ok(Self { name, regex })
    }

    /// The built-in `within (\d+) (\w+)` rule.
    pub fn within() -> Self {
        Self {
            name: WITHIN_RULE.to_string(),
            regex: BUILTIN_WITHIN.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pattern source text.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Search `text` and return the first match's (quantity, unit) groups.
    ///
    /// Returns `None` when the pattern does not match or either group did not
    /// participate in the match.
    pub fn capture<'t>(&self, text: &'t str) -> Option<(&'t str, &'t str)> {
        let caps = self.regex.captures(text)?;
        Some((caps.get(1)?.as_str(), caps.get(2)?.as_str()))
    }
}

/// Ordered set of pattern rules keyed by name.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<PatternRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rule set holding only the built-in `within` rule.
    pub fn builtin() -> Self {
        let mut rules = Self::new();
        rules.insert(PatternRule::within());
        rules
    }

    /// Add a rule, replacing (and returning) any rule with the same name.
    pub fn insert(&mut self, rule: PatternRule) -> Option<PatternRule> {
        match self.rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => Some(std::mem::replace(existing, rule)),
            None => {
                self.rules.push(rule);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&PatternRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Rule names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatternRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
