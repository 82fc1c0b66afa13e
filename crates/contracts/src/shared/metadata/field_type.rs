//! Value type enumeration for entity fields

/// Numeric storage width of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericWidth {
    I8,
    I16,
    I32,
    I64,
    F32,
    F64,
}

impl NumericWidth {
    pub fn is_integer(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }
}

/// Declared value type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldValueType {
    #[default]
    Text,
    Number(NumericWidth),
    Flag,
    Date,
    Time,
    DateTime,
    /// Set of textual items (multi-select widgets)
    TextSet,
}

impl FieldValueType {
    pub fn numeric_width(&self) -> Option<NumericWidth> {
        match self {
            Self::Number(width) => Some(*width),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Number(width) => width.as_str(),
            Self::Flag => "flag",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "date_time",
            Self::TextSet => "text_set",
        }
    }
}
