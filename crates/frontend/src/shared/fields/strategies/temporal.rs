use super::super::support::{base_widget, require_descriptor};
use super::super::widget::{Constraints, Widget};
use super::super::{CreationContext, WidgetConfigurationError, WidgetCreationStrategy};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, ParseResult};
use contracts::shared::metadata::{
    DescriptorKind, EntityField, FieldDescriptor, FieldValue, TemporalConfig,
};
use std::marker::PhantomData;

/// Date, time or date-time value a picker edits
pub trait TemporalValue: Copy + Into<FieldValue> + Send + Sync + 'static {
    const KIND: DescriptorKind;
    const TYPE_NAME: &'static str;
    /// Accepted literal formats, tried in order
    const FORMATS: &'static [&'static str];

    fn parse_with(literal: &str, format: &str) -> ParseResult<Self>;

    fn constraints(min: Option<Self>, max: Option<Self>, time_placeholder: Option<String>) -> Constraints;

    fn parse(literal: &str) -> Option<Self> {
        Self::FORMATS
            .iter()
            .find_map(|format| Self::parse_with(literal, format).ok())
    }
}

impl TemporalValue for NaiveDate {
    const KIND: DescriptorKind = DescriptorKind::DatePicker;
    const TYPE_NAME: &'static str = "date";
    const FORMATS: &'static [&'static str] = &["%Y-%m-%d", "%d.%m.%Y"];

    fn parse_with(literal: &str, format: &str) -> ParseResult<Self> {
        NaiveDate::parse_from_str(literal, format)
    }

    fn constraints(min: Option<Self>, max: Option<Self>, _: Option<String>) -> Constraints {
        Constraints::Date { min, max }
    }
}

impl TemporalValue for NaiveTime {
    const KIND: DescriptorKind = DescriptorKind::TimePicker;
    const TYPE_NAME: &'static str = "time";
    const FORMATS: &'static [&'static str] = &["%H:%M", "%H:%M:%S"];

    fn parse_with(literal: &str, format: &str) -> ParseResult<Self> {
        NaiveTime::parse_from_str(literal, format)
    }

    fn constraints(min: Option<Self>, max: Option<Self>, _: Option<String>) -> Constraints {
        Constraints::Time { min, max }
    }
}

impl TemporalValue for NaiveDateTime {
    const KIND: DescriptorKind = DescriptorKind::DateTimePicker;
    const TYPE_NAME: &'static str = "date-time";
    const FORMATS: &'static [&'static str] = &[
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%d.%m.%Y %H:%M",
    ];

    fn parse_with(literal: &str, format: &str) -> ParseResult<Self> {
        NaiveDateTime::parse_from_str(literal, format)
    }

    fn constraints(
        min: Option<Self>,
        max: Option<Self>,
        time_placeholder: Option<String>,
    ) -> Constraints {
        Constraints::DateTime {
            min,
            max,
            time_placeholder,
        }
    }
}

/// Date, time and date-time pickers
///
/// Literals (default, min, max) go through the text resolver first and are
/// parsed afterwards; a blank literal means "no value".
pub struct TemporalStrategy<T> {
    _value: PhantomData<fn() -> T>,
}

impl<T: TemporalValue> TemporalStrategy<T> {
    pub fn new() -> Self {
        Self {
            _value: PhantomData,
        }
    }

    fn literal(
        field: &EntityField,
        raw: &str,
        ctx: &CreationContext<'_>,
    ) -> Result<Option<T>, WidgetConfigurationError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let literal = ctx.text(raw);
        let literal = literal.trim();
        T::parse(literal)
            .map(Some)
            .ok_or_else(|| WidgetConfigurationError::InvalidLiteral {
                field: field.name.to_string(),
                literal: literal.to_string(),
                expected: T::TYPE_NAME,
            })
    }

    fn config(field: &EntityField) -> Result<&TemporalConfig, WidgetConfigurationError> {
        match require_descriptor(field, T::KIND)? {
            FieldDescriptor::DatePicker(c)
            | FieldDescriptor::TimePicker(c)
            | FieldDescriptor::DateTimePicker(c) => Ok(c),
            _ => Err(WidgetConfigurationError::DescriptorMismatch {
                field: field.name.to_string(),
                expected: T::KIND,
            }),
        }
    }
}

impl<T: TemporalValue> Default for TemporalStrategy<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TemporalValue> WidgetCreationStrategy for TemporalStrategy<T> {
    fn supported_descriptor(&self) -> DescriptorKind {
        T::KIND
    }

    fn create_widget(
        &self,
        field: &EntityField,
        ctx: &CreationContext<'_>,
    ) -> Result<Widget, WidgetConfigurationError> {
        let config = Self::config(field)?;
        let value = Self::literal(field, &config.default_value, ctx)?;
        let min = Self::literal(field, &config.min, ctx)?;
        let max = Self::literal(field, &config.max, ctx)?;
        let constraints = T::constraints(min, max, ctx.resolve(&config.time_placeholder));

        Ok(base_widget(
            T::KIND,
            field,
            &config.options,
            ctx,
            constraints,
            value.map(Into::into),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals_parse_in_any_accepted_format() {
        assert_eq!(NaiveDate::parse("23.01.1991"), NaiveDate::from_ymd_opt(1991, 1, 23));
        assert_eq!(NaiveTime::parse("12:23"), NaiveTime::from_hms_opt(12, 23, 0));
        assert_eq!(
            NaiveDateTime::parse("1991-01-23 12:23:05"),
            NaiveDate::from_ymd_opt(1991, 1, 23).and_then(|d| d.and_hms_opt(12, 23, 5))
        );
        assert_eq!(NaiveDate::parse("yesterday"), None);
    }
}
