use super::{EntityId, EntityMetadata};
use crate::shared::metadata::{EntityField, FieldValue};

/// Базовый контракт сущности: всё, что умеет хранить и отображать обобщённый слой
pub trait Entity: Clone + Send + Sync + 'static {
    /// Тип идентификатора сущности
    type Id: EntityId;

    /// ID сущности; `None` для ещё не сохранённой
    fn id(&self) -> Option<&Self::Id>;

    fn set_id(&mut self, id: Option<Self::Id>);

    fn is_new(&self) -> bool {
        self.id().is_none()
    }

    /// Индекс сущности, например "a001"
    fn entity_index() -> &'static str;

    /// Имя коллекции, например "client"
    fn collection_name() -> &'static str;

    /// Полное имя: индекс + коллекция, например "a001_client"
    fn full_name() -> String {
        format!("{}_{}", Self::entity_index(), Self::collection_name())
    }

    /// Представление одного элемента, например "Клиент"
    fn element_name() -> &'static str;

    /// Представление списка, например "Клиенты"
    fn list_name() -> &'static str;

    /// Описание полей сущности
    fn fields() -> &'static [EntityField] {
        &[]
    }

    /// Текущее значение поля по имени; `None` для пустого или неизвестного поля
    fn field_value(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    /// Записать значение в поле по имени; `None` очищает поле
    fn set_field_value(&mut self, name: &str, _value: Option<FieldValue>) -> Result<(), String> {
        Err(format!("field '{}' is not writable", name))
    }

    /// Проверка перед записью
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }

    /// Хук перед записью (обновление метаданных)
    fn before_write(&mut self) {}
}

/// Сущность с пометками удаления и черновика
pub trait DataEntity: Entity {
    fn metadata(&self) -> &EntityMetadata;

    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    fn is_deletion_mark(&self) -> bool {
        self.metadata().deletion_mark
    }

    fn set_deletion_mark(&mut self, value: bool) {
        self.metadata_mut().deletion_mark = value;
    }

    fn mark_deletion(&mut self) {
        self.set_deletion_mark(true);
    }

    fn unmark_deletion(&mut self) {
        self.set_deletion_mark(false);
    }

    fn toggle_deletion_mark(&mut self) {
        let current = self.is_deletion_mark();
        self.set_deletion_mark(!current);
    }

    fn is_draft_mark(&self) -> bool {
        self.metadata().draft_mark
    }

    fn set_draft_mark(&mut self, value: bool) {
        self.metadata_mut().draft_mark = value;
    }

    fn mark_draft(&mut self) {
        self.set_draft_mark(true);
    }

    fn unmark_draft(&mut self) {
        self.set_draft_mark(false);
    }

    fn toggle_draft_mark(&mut self) {
        let current = self.is_draft_mark();
        self.set_draft_mark(!current);
    }
}

/// Справочник: код, наименование, комментарий
pub trait CatalogEntity: DataEntity {
    fn code(&self) -> &str;

    fn title(&self) -> &str;

    fn comment(&self) -> Option<&str>;
}
