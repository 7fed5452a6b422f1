//! Rule-based query interpreter.
//!
//! Two independent passes over the raw query text:
//!
//! 1. **Concept matching**: every lexicon concept whose key or synonym occurs
//!    in the query contributes its key to `layers`, once, in lexicon order.
//! 2. **Distance extraction**: gated on the literal substring `within`; the
//!    rule named [`WITHIN_RULE`] then supplies the magnitude and unit.
//!
//! Neither pass can fail. Anything unrecognized is simply absent from the
//! result.

use crate::config::InterpreterConfig;
use crate::digits::parse_decimal;
use crate::interpretation::{DistanceFilter, Interpretation};
use crate::lexicon::Lexicon;
use crate::rules::{RuleSet, WITHIN_RULE};

/// Substring that must be present before the distance rule is searched.
const DISTANCE_GATE: &str = "within";

/// Converts free-text queries into [`Interpretation`]s.
///
/// Holds only immutable configuration, so one instance can serve any number
/// of threads.
#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    lexicon: Lexicon,
    rules: RuleSet,
}

impl QueryInterpreter {
    pub fn new(lexicon: Lexicon, rules: RuleSet) -> Self {
        Self { lexicon, rules }
    }

    pub fn from_config(config: InterpreterConfig) -> Self {
        Self::new(config.lexicon, config.rules)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Interpret a query.
    ///
    /// # Examples
    /// ```
    /// use implore_query::QueryInterpreter;
    ///
    /// let interpreter = QueryInterpreter::default();
    /// let result = interpreter.interpret("within 500 meters of schools");
    /// assert_eq!(result.layers, vec!["schools"]);
    /// assert_eq!(result.distance(), Some(500));
    /// assert_eq!(result.unit(), Some("meters"));
    /// ```
    pub fn interpret(&self, query: &str) -> Interpretation {
        let layers: Vec<String> = self.lexicon.matching(query).map(str::to_string).collect();
        let filter = self.extract_distance(query);

        tracing::debug!(
            "Interpreted query: layers={:?}, filter={:?}",
            layers,
            filter
        );

        Interpretation { layers, filter }
    }

    fn extract_distance(&self, query: &str) -> Option<DistanceFilter> {
        if !query.contains(DISTANCE_GATE) {
            return None;
        }

        let rule = self.rules.get(WITHIN_RULE)?;
        let (magnitude, unit) = rule.capture(query)?;

        // Only a magnitude past u64::MAX is dropped.
        match parse_decimal(magnitude) {
            Some(value) => Some(DistanceFilter {
                value,
                unit: unit.to_string(),
            }),
            None => {
                tracing::trace!("Ignoring distance magnitude '{}': out of range", magnitude);
                None
            }
        }
    }
}

impl Default for QueryInterpreter {
    fn default() -> Self {
        Self::new(Lexicon::builtin(), RuleSet::builtin())
    }
}
