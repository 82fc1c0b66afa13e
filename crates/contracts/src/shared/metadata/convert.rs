//! Typed reads of optional field values, used by entity field setters
//!
//! Each helper names the field in its error so binder failures are traceable.

use super::field_value::FieldValue;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

fn unexpected(name: &str, expected: &str, value: &FieldValue) -> String {
    format!("field '{}' expects {}, got {:?}", name, expected, value)
}

pub fn text(name: &str, value: Option<FieldValue>) -> Result<Option<String>, String> {
    match value {
        None => Ok(None),
        Some(FieldValue::Text(s)) => Ok(Some(s)),
        Some(other) => Err(unexpected(name, "text", &other)),
    }
}

pub fn integer(name: &str, value: Option<FieldValue>) -> Result<Option<i64>, String> {
    match value {
        None => Ok(None),
        Some(v) => v
            .as_i64()
            .map(Some)
            .ok_or_else(|| unexpected(name, "an integer", &v)),
    }
}

/// Integer narrowed to the field's storage width
pub fn narrow<T: TryFrom<i64>>(name: &str, value: Option<FieldValue>) -> Result<Option<T>, String> {
    integer(name, value)?
        .map(|v| {
            T::try_from(v).map_err(|_| {
                format!(
                    "field '{}': {} is out of range for {}",
                    name,
                    v,
                    std::any::type_name::<T>()
                )
            })
        })
        .transpose()
}

pub fn number(name: &str, value: Option<FieldValue>) -> Result<Option<f64>, String> {
    match value {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| unexpected(name, "a number", &v)),
    }
}

/// Flags are never empty: a cleared flag is `false`
pub fn flag(name: &str, value: Option<FieldValue>) -> Result<bool, String> {
    match value {
        None => Ok(false),
        Some(FieldValue::Flag(v)) => Ok(v),
        Some(other) => Err(unexpected(name, "a flag", &other)),
    }
}

pub fn date(name: &str, value: Option<FieldValue>) -> Result<Option<NaiveDate>, String> {
    match value {
        None => Ok(None),
        Some(FieldValue::Date(v)) => Ok(Some(v)),
        Some(other) => Err(unexpected(name, "a date", &other)),
    }
}

pub fn time(name: &str, value: Option<FieldValue>) -> Result<Option<NaiveTime>, String> {
    match value {
        None => Ok(None),
        Some(FieldValue::Time(v)) => Ok(Some(v)),
        Some(other) => Err(unexpected(name, "a time", &other)),
    }
}

pub fn date_time(name: &str, value: Option<FieldValue>) -> Result<Option<NaiveDateTime>, String> {
    match value {
        None => Ok(None),
        Some(FieldValue::DateTime(v)) => Ok(Some(v)),
        Some(other) => Err(unexpected(name, "a date-time", &other)),
    }
}

/// List of texts; a single text is accepted as a one-item list
pub fn texts(name: &str, value: Option<FieldValue>) -> Result<Vec<String>, String> {
    match value {
        None => Ok(Vec::new()),
        Some(FieldValue::Text(s)) => Ok(vec![s]),
        Some(FieldValue::List(items)) => items
            .into_iter()
            .map(|item| match item {
                FieldValue::Text(s) => Ok(s),
                other => Err(unexpected(name, "text items", &other)),
            })
            .collect(),
        Some(other) => Err(unexpected(name, "a list", &other)),
    }
}

/// Value of an optional text field; blank reads as empty
pub fn from_text(value: &Option<String>) -> Option<FieldValue> {
    value
        .as_ref()
        .filter(|s| !s.is_empty())
        .map(|s| FieldValue::Text(s.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrowing_rejects_out_of_range_values() {
        assert_eq!(narrow::<i8>("rating", Some(FieldValue::Integer(100))), Ok(Some(100)));
        assert!(narrow::<i8>("rating", Some(FieldValue::Integer(300))).is_err());
        assert_eq!(narrow::<i8>("rating", Some(FieldValue::Number(12.0))), Ok(Some(12)));
    }

    #[test]
    fn wrong_variant_names_the_field() {
        let err = text("code", Some(FieldValue::Flag(true))).unwrap_err();
        assert!(err.contains("'code'"));
        assert_eq!(flag("vip", None), Ok(false));
    }

    #[test]
    fn texts_accept_lists_and_single_items() {
        assert_eq!(
            texts("tags", Some(FieldValue::texts(["a", "b"]))),
            Ok(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(texts("tags", Some("a".into())), Ok(vec!["a".to_string()]));
    }
}
