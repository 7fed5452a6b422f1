//! Structured result of interpreting one query.

use serde::{Deserialize, Serialize};

use crate::error::QueryError;

/// A distance threshold and the unit token it was written with.
///
/// The unit is the raw matched text (`"meters"`, `"km"`, ...); it is not
/// normalized or checked against a unit table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct DistanceFilter {
    pub value: u64,
    pub unit: String,
}

/// Layers and optional distance threshold extracted from a query.
///
/// Serializes flat as `{"layers": [...], "distance": n | null, "unit": s | null}`.
/// Distance and unit travel together, so a record carrying only one of them
/// is rejected on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "InterpretationRecord", try_from = "InterpretationRecord")]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Interpretation {
    /// Matched concept keys in lexicon order
    pub layers: Vec<String>,
    pub filter: Option<DistanceFilter>,
}

impl Interpretation {
    pub fn distance(&self) -> Option<u64> {
        self.filter.as_ref().map(|f| f.value)
    }

    pub fn unit(&self) -> Option<&str> {
        self.filter.as_ref().map(|f| f.unit.as_str())
    }

    /// True when nothing in the query was recognized.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty() && self.filter.is_none()
    }
}

#[derive(Serialize, Deserialize)]
struct InterpretationRecord {
    layers: Vec<String>,
    distance: Option<u64>,
    unit: Option<String>,
}

impl From<Interpretation> for InterpretationRecord {
    fn from(value: Interpretation) -> Self {
        let (distance, unit) = match value.filter {
            Some(f) => (Some(f.value), Some(f.unit)),
            None => (None, None),
        };
        Self {
            layers: value.layers,
            distance,
            unit,
        }
    }
}

impl TryFrom<InterpretationRecord> for Interpretation {
    type Error = QueryError;

    fn try_from(record: InterpretationRecord) -> Result<Self, Self::Error> {
        let filter = match (record.distance, record.unit) {
            (Some(value), Some(unit)) => Some(DistanceFilter { value, unit }),
            (None, None) => None,
            (distance, unit) => {
                return Err(QueryError::InvalidArgument(format!(
                    "distance and unit must be set together (distance: {:?}, unit: {:?})",
                    distance, unit
                )))
            }
        };
        Ok(Self {
            layers: record.layers,
            filter,
        })
    }
}
