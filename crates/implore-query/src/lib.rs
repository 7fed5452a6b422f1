//! implore-query - Natural-language spatial query interpreter
//!
//! Turns a free-text request such as `"within 500 meters of schools"` into a
//! structured filter: the data layers it mentions plus an optional distance
//! threshold and unit. The result drives a downstream spatial selection; this
//! crate does no geometry itself.
//!
//! The interpreter is a small deterministic rule engine:
//!
//! - **Lexicon**: concept keys (layer categories) with synonym sets, matched
//!   as case-sensitive substrings of the query
//! - **Pattern rules**: named regexes; the `within` rule extracts
//!   `(\d+) (\w+)` as magnitude and unit, only when the query contains `within`
//!
//! # Examples
//!
//! ```
//! use implore_query::QueryInterpreter;
//!
//! let interpreter = QueryInterpreter::default();
//! let result = interpreter.interpret("show me academy buildings within 10 feet of gardens");
//! assert_eq!(result.layers, vec!["schools", "parks"]);
//! assert_eq!(result.distance(), Some(10));
//! assert_eq!(result.unit(), Some("feet"));
//! ```

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod config;
pub mod digits;
pub mod error;
pub mod host;
pub mod interpretation;
pub mod interpreter;
pub mod lexicon;
pub mod rules;

pub use config::*;
pub use error::*;
pub use host::*;
pub use interpretation::*;
pub use interpreter::*;
pub use lexicon::*;
pub use rules::*;
