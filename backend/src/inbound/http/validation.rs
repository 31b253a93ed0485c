//! Field presence and type checking for the legacy request shapes.
//!
//! Request bodies deserialise into `Option<serde_json::Value>` fields so that
//! absent and malformed values reach these helpers instead of failing inside
//! the framework extractor; the legacy contract reports both as a 500, not
//! actix's default 400. Each helper normalises one field shape and reports
//! either `MissingField` or `InvalidType` with structured details.

use chrono::NaiveDate;
use serde_json::{Value, json};

use crate::domain::Error;
use crate::domain::item::ItemId;
use crate::domain::user::Uid;

/// Newtype for request field names so call sites cannot mix them up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    Error::missing_field(format!("required field '{}' is absent", field.as_str()))
        .with_details(json!({ "field": field.as_str() }))
}

fn invalid_type_error(field: FieldName, expected: &str) -> Error {
    Error::invalid_type(format!("field '{}' must be {expected}", field.as_str()))
        .with_details(json!({ "field": field.as_str(), "expected": expected }))
}

fn invalid_element_error(field: FieldName, expected: &str, index: usize) -> Error {
    Error::invalid_type(format!(
        "element {index} of '{}' must be {expected}",
        field.as_str()
    ))
    .with_details(json!({ "field": field.as_str(), "index": index, "expected": expected }))
}

/// Unwrap a field that must be present. JSON `null` counts as absent.
pub(crate) fn require_field(value: Option<&Value>, field: FieldName) -> Result<&Value, Error> {
    match value {
        None | Some(Value::Null) => Err(missing_field_error(field)),
        Some(value) => Ok(value),
    }
}

fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Coerce a user identifier from a JSON integer or an integer-valued string.
pub(crate) fn uid_field(value: &Value, field: FieldName) -> Result<Uid, Error> {
    parse_i64(value)
        .map(Uid::new)
        .ok_or_else(|| invalid_type_error(field, "an integer user id"))
}

/// Unwrap a required query parameter. Empty and whitespace-only values count
/// as absent, matching how the legacy server treated blank query strings.
pub(crate) fn required_param<'a>(
    value: Option<&'a str>,
    field: FieldName,
) -> Result<&'a str, Error> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| missing_field_error(field))
}

/// Coerce a user identifier from a query parameter.
pub(crate) fn uid_param(value: Option<&str>, field: FieldName) -> Result<Uid, Error> {
    required_param(value, field)?
        .parse()
        .map(Uid::new)
        .map_err(|_| invalid_type_error(field, "an integer user id"))
}

/// Lenient user-id coercion for the delete endpoints.
///
/// A syntactically non-integer identifier matches no rows by definition, so
/// delete handlers answer with their no-rows body instead of rejecting.
pub(crate) fn lenient_uid(value: &Value) -> Option<Uid> {
    parse_i64(value).map(Uid::new)
}

/// Coerce a plain string field.
pub(crate) fn string_field(value: &Value, field: FieldName) -> Result<String, Error> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| invalid_type_error(field, "a string"))
}

/// View a field as a raw JSON array.
///
/// Handlers use this to measure column lengths for the reconciler before any
/// element coercion runs, so an arity mismatch wins over a bad element.
pub(crate) fn raw_array_field<'a>(value: &'a Value, field: FieldName) -> Result<&'a [Value], Error> {
    value
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| invalid_type_error(field, "an array"))
}

/// Coerce an array of strings.
pub(crate) fn string_array_field(value: &Value, field: FieldName) -> Result<Vec<String>, Error> {
    raw_array_field(value, field)?
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_str()
                .map(str::to_owned)
                .ok_or_else(|| invalid_element_error(field, "a string", index))
        })
        .collect()
}

/// Coerce an array of `YYYY-MM-DD` date strings.
pub(crate) fn date_array_field(value: &Value, field: FieldName) -> Result<Vec<NaiveDate>, Error> {
    raw_array_field(value, field)?
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_str()
                .and_then(|s| s.parse().ok())
                .ok_or_else(|| invalid_element_error(field, "a YYYY-MM-DD date", index))
        })
        .collect()
}

/// Coerce an array of item counts.
pub(crate) fn count_array_field(value: &Value, field: FieldName) -> Result<Vec<i32>, Error> {
    raw_array_field(value, field)?
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_i64()
                .and_then(|n| i32::try_from(n).ok())
                .ok_or_else(|| invalid_element_error(field, "an integer count", index))
        })
        .collect()
}

/// Coerce an array of item identifiers.
pub(crate) fn id_array_field(value: &Value, field: FieldName) -> Result<Vec<ItemId>, Error> {
    raw_array_field(value, field)?
        .iter()
        .enumerate()
        .map(|(index, element)| {
            element
                .as_i64()
                .map(ItemId::new)
                .ok_or_else(|| invalid_element_error(field, "an integer item id", index))
        })
        .collect()
}

fn upc_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        // Scanners and the manual sentinel both arrive as bare numbers.
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Coerce a single UPC, accepting a string or a bare number.
pub(crate) fn upc_field(value: &Value, field: FieldName) -> Result<String, Error> {
    upc_from_value(value).ok_or_else(|| invalid_type_error(field, "a string or number"))
}

/// Coerce an array of UPCs, accepting string or number elements.
pub(crate) fn upc_array_field(value: &Value, field: FieldName) -> Result<Vec<String>, Error> {
    raw_array_field(value, field)?
        .iter()
        .enumerate()
        .map(|(index, element)| {
            upc_from_value(element)
                .ok_or_else(|| invalid_element_error(field, "a string or number", index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    const UID: FieldName = FieldName::new("uid");

    #[rstest]
    #[case(None)]
    #[case(Some(Value::Null))]
    fn absent_and_null_fields_are_missing(#[case] value: Option<Value>) {
        let err = require_field(value.as_ref(), UID).expect_err("field is absent");
        assert_eq!(err.code(), ErrorCode::MissingField);
    }

    #[rstest]
    #[case(json!(7), 7)]
    #[case(json!("7"), 7)]
    #[case(json!(" 42 "), 42)]
    fn uid_accepts_integers_and_integer_strings(#[case] value: Value, #[case] expected: i64) {
        assert_eq!(uid_field(&value, UID).expect("coerces"), Uid::new(expected));
    }

    #[rstest]
    #[case(json!("invalid"))]
    #[case(json!(1.5))]
    #[case(json!([7]))]
    fn uid_rejects_non_integer_shapes(#[case] value: Value) {
        let err = uid_field(&value, UID).expect_err("shape rejected");
        assert_eq!(err.code(), ErrorCode::InvalidType);
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("   "))]
    fn blank_query_params_count_as_missing(#[case] value: Option<&str>) {
        let err = required_param(value, UID).expect_err("param is absent");
        assert_eq!(err.code(), ErrorCode::MissingField);
    }

    #[rstest]
    fn uid_param_parses_and_rejects() {
        assert_eq!(uid_param(Some("12"), UID).expect("parses"), Uid::new(12));
        let err = uid_param(Some("invalid"), UID).expect_err("rejected");
        assert_eq!(err.code(), ErrorCode::InvalidType);
    }

    #[rstest]
    fn lenient_uid_turns_garbage_into_none() {
        assert_eq!(lenient_uid(&json!("invalid")), None);
        assert_eq!(lenient_uid(&json!(9)), Some(Uid::new(9)));
    }

    #[rstest]
    fn string_array_reports_the_offending_index() {
        let err = string_array_field(&json!(["ok", 3]), FieldName::new("upcs"))
            .expect_err("non-string element");
        assert_eq!(err.code(), ErrorCode::InvalidType);
        let details = err.details().expect("details attached");
        assert_eq!(details.get("index").and_then(Value::as_u64), Some(1));
    }

    #[rstest]
    fn date_array_parses_iso_dates() {
        let dates = date_array_field(&json!(["2023-12-31", "2024-01-15"]), FieldName::new("dates"))
            .expect("dates parse");
        assert_eq!(dates.len(), 2);
        assert_eq!(dates[0].to_string(), "2023-12-31");
    }

    #[rstest]
    #[case(json!(["2023-13-01"]))]
    #[case(json!(["tomorrow"]))]
    #[case(json!([20231231]))]
    fn date_array_rejects_malformed_elements(#[case] value: Value) {
        let err = date_array_field(&value, FieldName::new("dates")).expect_err("malformed date");
        assert_eq!(err.code(), ErrorCode::InvalidType);
    }

    #[rstest]
    fn count_array_rejects_the_legacy_invalid_literal() {
        let err = count_array_field(&json!([2, "invalid"]), FieldName::new("counts"))
            .expect_err("non-numeric count");
        assert_eq!(err.code(), ErrorCode::InvalidType);
    }

    #[rstest]
    fn upc_helpers_accept_numbers_and_strings() {
        let upcs = upc_array_field(&json!([123456, "789012"]), FieldName::new("upcs"))
            .expect("both shapes coerce");
        assert_eq!(upcs, vec!["123456".to_owned(), "789012".to_owned()]);

        let sentinel = upc_field(&json!(-1), FieldName::new("upc")).expect("number coerces");
        assert_eq!(sentinel, "-1");
    }
}
