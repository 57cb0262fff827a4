// src/api/wire.rs

//! Normalization of backend dasha responses.
//!
//! The backend has served two shapes over time:
//!
//! ```json
//! { "MahaDasha": { "planet": "Sun", "start": "1-1-2020  0:0", "end": "..." }, ... }
//! { "dasha_period": { "MahaDasha": [ { "planet": "Sun", ... }, ... ], ... } }
//! ```
//!
//! Both are mapped onto [`Hierarchy`] here and nowhere else. Either shape may
//! carry a single object or a list per level; `null` levels count as absent.

use serde::de::{Error as _, Unexpected};
use serde_json::{Map, Value};

use crate::core::hierarchy::Hierarchy;
use crate::error::{DashaError, Result};
use crate::types::{DashaLevel, PeriodRecord};

/// Key wrapping the level map in legacy responses.
pub const LEGACY_WRAPPER_KEY: &str = "dasha_period";

/// Which backend shape a response used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WireShape {
    /// Level map at the top level.
    Current,
    /// Level map under `dasha_period`.
    Legacy,
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

fn unusable(value: &Value, expected: &str) -> DashaError {
    serde_json::Error::invalid_type(unexpected(value), &expected).into()
}

fn expect_object(value: Value, expected: &str) -> Result<Map<String, Value>> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(unusable(&other, expected)),
    }
}

/// Converts one list element or single level object.
///
/// An element that cannot be read as a record becomes an empty record, which
/// fails locally when the resolver parses it.
fn record_from_value(level: DashaLevel, item: Value) -> PeriodRecord {
    match serde_json::from_value::<PeriodRecord>(item) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("Unreadable {} period record: {}", level, e);
            PeriodRecord::default()
        }
    }
}

/// Records for one level; `None` when the level is `null`.
fn level_records(level: DashaLevel, value: Value) -> Result<Option<Vec<PeriodRecord>>> {
    match value {
        Value::Null => Ok(None),
        Value::Array(items) => Ok(Some(
            items
                .into_iter()
                .map(|item| record_from_value(level, item))
                .collect(),
        )),
        single @ Value::Object(_) => Ok(Some(vec![record_from_value(level, single)])),
        other => Err(unusable(&other, "a period object or a list of periods")),
    }
}

/// Shape of a decoded response body.
pub fn detect_shape(value: &Value) -> WireShape {
    match value.get(LEGACY_WRAPPER_KEY) {
        Some(_) => WireShape::Legacy,
        None => WireShape::Current,
    }
}

impl Hierarchy {
    /// Normalizes a decoded response body of either shape.
    ///
    /// # Errors
    ///
    /// Returns `DashaError::SerdeJson` if the body (or the legacy wrapper) is
    /// not an object, or a level holds something other than a period object
    /// or list. Bad records inside a level are kept and fail later, one by one.
    pub fn from_value(value: Value) -> Result<Self> {
        let shape = detect_shape(&value);
        let mut body = expect_object(value, "a dasha response object")?;
        let mut levels = match shape {
            WireShape::Legacy => match body.remove(LEGACY_WRAPPER_KEY).unwrap_or(Value::Null) {
                Value::Null => Map::new(),
                inner => expect_object(inner, "a dasha level map")?,
            },
            WireShape::Current => body,
        };

        let hierarchy = DashaLevel::ordered().try_fold(Hierarchy::new(), |hierarchy, level| {
            let records = match levels.remove(level.wire_name()) {
                Some(value) => level_records(level, value)?,
                None => None,
            };
            Ok::<_, DashaError>(match records {
                Some(records) => hierarchy.with_level(level, records),
                None => hierarchy,
            })
        })?;
        log::debug!(
            "Normalized {:?} dasha response: {} levels, {} periods",
            shape,
            hierarchy.level_count(),
            hierarchy.period_count()
        );
        Ok(hierarchy)
    }
}

/// Decodes and normalizes a raw response body.
///
/// # Errors
///
/// Returns `DashaError::SerdeJson` if the body is not JSON or does not match
/// either known shape.
pub fn normalize_response(body: &str) -> Result<Hierarchy> {
    let value: Value = serde_json::from_str(body)?;
    Hierarchy::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashaError;
    use serde_json::json;

    #[test]
    fn current_shape_single_objects() {
        let h = Hierarchy::from_value(json!({
            "MahaDasha": {"planet": "Sun", "start": "1-1-2020  0:0", "end": "31-12-2020  23:59"},
            "AntarDasha": null,
            "status": "ok"
        }))
        .unwrap();
        assert_eq!(h.level_count(), 1);
        assert_eq!(h.periods(DashaLevel::Major)[0].planet, "Sun");
    }

    #[test]
    fn legacy_shape_lists() {
        let h = Hierarchy::from_value(json!({
            "dasha_period": {
                "MahaDasha": [
                    {"planet": "Sun", "start": "1-1-2010  0:0", "end": "1-1-2016  0:0"},
                    {"planet": "Moon", "start": "1-1-2016  0:0", "end": "1-1-2026  0:0"}
                ],
                "PranDasha": []
            }
        }))
        .unwrap();
        assert_eq!(h.periods(DashaLevel::Major).len(), 2);
        assert!(h.periods(DashaLevel::SubSubSubMinor).is_empty());
    }

    #[test]
    fn empty_bodies() {
        assert!(normalize_response("{}").unwrap().is_empty());
        assert!(normalize_response(r#"{"dasha_period": null}"#).unwrap().is_empty());
    }

    #[test]
    fn unusable_bodies_are_errors() {
        assert!(matches!(normalize_response("not json"), Err(DashaError::SerdeJson(_))));
        assert!(matches!(normalize_response("[]"), Err(DashaError::SerdeJson(_))));
        assert!(matches!(
            normalize_response(r#"[{"planet": "Sun", "start": "1-1-2020  0:0", "end": "1-1-2021  0:0"}]"#),
            Err(DashaError::SerdeJson(_))
        ));
        assert!(matches!(normalize_response("\"MahaDasha\""), Err(DashaError::SerdeJson(_))));
        assert!(matches!(
            normalize_response(r#"{"dasha_period": []}"#),
            Err(DashaError::SerdeJson(_))
        ));
        assert!(matches!(
            normalize_response(r#"{"MahaDasha": 42}"#),
            Err(DashaError::SerdeJson(_))
        ));
    }

    #[test]
    fn shape_detection() {
        assert_eq!(detect_shape(&json!({"dasha_period": {}})), WireShape::Legacy);
        assert_eq!(detect_shape(&json!({"MahaDasha": {}})), WireShape::Current);
    }

    #[test]
    fn null_field_in_one_record_keeps_other_levels() {
        let h = Hierarchy::from_value(json!({
            "dasha_period": {
                "MahaDasha": [
                    {"planet": null, "start": "1-1-2010  0:0", "end": "1-1-2016  0:0"},
                    {"planet": "Sun", "start": "1-1-2016  0:0", "end": "1-1-2026  0:0"}
                ],
                "AntarDasha": [
                    {"planet": "Moon", "start": "1-1-2020  0:0", "end": "1-1-2021  0:0"}
                ]
            }
        }))
        .unwrap();
        assert_eq!(h.periods(DashaLevel::Major).len(), 2);
        assert_eq!(h.periods(DashaLevel::Major)[0].planet, "");
        assert_eq!(h.periods(DashaLevel::Minor)[0].planet, "Moon");

        let current = Hierarchy::from_value(json!({
            "MahaDasha": {"planet": "Sun", "start": null, "end": "1-1-2026  0:0"},
            "AntarDasha": {"planet": "Moon", "start": "1-1-2020  0:0", "end": "1-1-2021  0:0"}
        }))
        .unwrap();
        assert_eq!(current.periods(DashaLevel::Major)[0].start, "");
        assert_eq!(current.level_count(), 2);
    }

    #[test]
    fn non_object_list_elements_become_empty_records() {
        let h = Hierarchy::from_value(json!({
            "MahaDasha": [
                42,
                "Sun",
                {"planet": "Venus", "start": "1-1-2000  0:0", "end": "1-1-2020  0:0"}
            ]
        }))
        .unwrap();
        let periods = h.periods(DashaLevel::Major);
        assert_eq!(periods.len(), 3);
        assert_eq!(periods[0], PeriodRecord::default());
        assert_eq!(periods[1], PeriodRecord::default());
        assert_eq!(periods[2].planet, "Venus");
    }
}
