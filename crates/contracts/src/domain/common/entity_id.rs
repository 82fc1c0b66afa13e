use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Ошибка преобразования строки в идентификатор
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// Тип идентификатора не умеет разбирать строки
    #[error("identifier type {id_type} has no string conversion")]
    NoParser { id_type: &'static str },

    #[error("invalid {id_type} identifier '{value}': {reason}")]
    Invalid {
        id_type: &'static str,
        value: String,
        reason: String,
    },
}

impl ConversionError {
    pub fn invalid(id_type: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            id_type,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Трейт для типов идентификаторов сущностей
pub trait EntityId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + Debug + Send + Sync + 'static
{
    /// Преобразовать ID в строку
    fn as_string(&self) -> String;

    /// Создать ID из строки (каноническое преобразование типа).
    ///
    /// Типы без собственного разбора строки сообщают `ConversionError::NoParser`.
    fn from_string(_s: &str) -> Result<Self, ConversionError> {
        Err(ConversionError::NoParser {
            id_type: std::any::type_name::<Self>(),
        })
    }

    /// Сгенерировать ID для новой записи хранилища.
    ///
    /// `sequence`: монотонный счётчик хранилища, начиная с 1.
    fn generate(_sequence: u64) -> Option<Self> {
        None
    }
}

macro_rules! integer_id {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl EntityId for $ty {
                fn as_string(&self) -> String {
                    ToString::to_string(self)
                }

                fn from_string(s: &str) -> Result<Self, ConversionError> {
                    s.trim()
                        .parse::<$ty>()
                        .map_err(|e| ConversionError::invalid(stringify!($ty), s, e))
                }

                fn generate(sequence: u64) -> Option<Self> {
                    <$ty>::try_from(sequence).ok()
                }
            }
        )+
    };
}

integer_id!(i16, i32, i64, u32, u64);

impl EntityId for uuid::Uuid {
    fn as_string(&self) -> String {
        ToString::to_string(self)
    }

    fn from_string(s: &str) -> Result<Self, ConversionError> {
        uuid::Uuid::parse_str(s.trim()).map_err(|e| ConversionError::invalid("uuid", s, e))
    }

    fn generate(_sequence: u64) -> Option<Self> {
        Some(uuid::Uuid::new_v4())
    }
}

impl EntityId for String {
    fn as_string(&self) -> String {
        self.clone()
    }

    fn from_string(s: &str) -> Result<Self, ConversionError> {
        Ok(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    struct OpaqueKey(u8);

    impl EntityId for OpaqueKey {
        fn as_string(&self) -> String {
            format!("opaque-{}", self.0)
        }
    }

    #[test]
    fn i64_round_trips_through_string() {
        let id: i64 = 9_007_199_254_740_993;
        assert_eq!(i64::from_string(&id.as_string()), Ok(id));
    }

    #[test]
    fn uuid_round_trips_through_string() {
        let id = uuid::Uuid::new_v4();
        assert_eq!(uuid::Uuid::from_string(&id.as_string()), Ok(id));
    }

    #[test]
    fn malformed_input_is_reported_with_type_and_value() {
        let err = i32::from_string("12a").unwrap_err();
        match err {
            ConversionError::Invalid { id_type, value, .. } => {
                assert_eq!(id_type, "i32");
                assert_eq!(value, "12a");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn type_without_parser_reports_no_parser() {
        let err = OpaqueKey::from_string("opaque-1").unwrap_err();
        assert!(matches!(err, ConversionError::NoParser { .. }));
        assert!(OpaqueKey::generate(1).is_none());
    }

    #[test]
    fn integer_generation_follows_sequence() {
        assert_eq!(i64::generate(42), Some(42));
        assert_eq!(i16::generate(u64::MAX), None);
    }
}
