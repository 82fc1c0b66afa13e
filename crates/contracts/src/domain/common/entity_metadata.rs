use serde::{Deserialize, Serialize};

/// Метаданные экземпляра сущности (lifecycle tracking)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Дата последней записи
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Пометка на удаление (мягкое удаление)
    #[serde(default)]
    pub deletion_mark: bool,
    /// Черновик
    #[serde(default)]
    pub draft_mark: bool,
    /// Номер записи, растёт при каждом сохранении
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            deletion_mark: false,
            draft_mark: false,
            version: 0,
        }
    }

    /// Обновить timestamp
    pub fn touch(&mut self) {
        self.updated_at = chrono::Utc::now();
    }

    pub fn increment_version(&mut self) {
        self.version += 1;
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
