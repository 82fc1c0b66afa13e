use super::{priority, DataMetaElementBase, MetaElementBase, Section};
use super::{ENTITY_ARG, ID_ARG, ITEM_VIEW_ARG, LIST_VIEW_ARG};
use crate::shared::service::CatalogService;
use contracts::domain::common::DataEntity;
use contracts::shared::type_witness::{TypeResolutionError, TypeResolver, TypeToken};
use std::any::Any;
use std::marker::PhantomData;
use std::sync::Arc;

/// Описание мета-элемента: заголовок, порядок и раздел
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaComponent {
    pub title: String,
    pub description: String,
    pub tooltip: String,
    pub order: Option<i32>,
    /// Раздел, к которому отнесён элемент
    pub section: TypeToken,
}

impl MetaComponent {
    pub fn new<S: Section>(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            tooltip: String::new(),
            order: None,
            section: TypeToken::of::<S>(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    pub fn order(mut self, order: i32) -> Self {
        self.order = Some(order);
        self
    }
}

/// Типы, связанные с мета-элементом данных
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataTypes {
    pub item_view: TypeToken,
    pub list_view: TypeToken,
    pub entity: TypeToken,
    pub id: TypeToken,
}

/// Пункт навигации внутри раздела
pub trait MetaElement: Send + Sync + 'static {
    fn component(&self) -> &MetaComponent;

    /// Ключ элемента и маршрут его представления
    fn key(&self) -> String;

    /// Тип представления, открываемого из навигации
    fn view_type(&self) -> TypeToken;

    fn data_types(&self) -> Option<&DataTypes> {
        None
    }

    fn as_any(&self) -> &dyn Any;

    fn title(&self) -> &str {
        &self.component().title
    }

    fn description(&self) -> Option<&str> {
        let description = self.component().description.as_str();
        (!description.trim().is_empty()).then_some(description)
    }

    fn tooltip(&self) -> Option<&str> {
        let tooltip = self.component().tooltip.as_str();
        if tooltip.trim().is_empty() {
            self.description()
        } else {
            Some(tooltip)
        }
    }

    fn order(&self) -> Option<i32> {
        self.component().order
    }

    fn section(&self) -> TypeToken {
        self.component().section
    }

    fn priority(&self) -> i32 {
        priority(self.order())
    }
}

/// Мета-элемент данных: сервис сущности `E` и её представления
pub struct DataMetaElement<E: DataEntity, S: ?Sized> {
    component: MetaComponent,
    types: DataTypes,
    service: Arc<S>,
    _entity: PhantomData<fn() -> E>,
}

/// Мета-элемент справочника
pub type CatalogMetaElement<E> = DataMetaElement<E, dyn CatalogService<E>>;

impl<E, S> DataMetaElement<E, S>
where
    E: DataEntity,
    S: ?Sized + Send + Sync + 'static,
{
    /// Связать типы через объявления резолвера и сверить их с `E`
    pub fn new(
        component: MetaComponent,
        service: Arc<S>,
        resolver: &TypeResolver,
    ) -> Result<Self, TypeResolutionError> {
        let concrete = TypeToken::of::<Self>();
        let base = TypeToken::of::<DataMetaElementBase>();
        let types = DataTypes {
            item_view: resolver.resolve(concrete, base, ITEM_VIEW_ARG)?,
            list_view: resolver.resolve(concrete, base, LIST_VIEW_ARG)?,
            entity: resolver.resolve(concrete, base, ENTITY_ARG)?,
            id: resolver.resolve(concrete, base, ID_ARG)?,
        };

        let name = concrete.short_name();
        TypeResolutionError::ensure(
            format!("entity of {}", name),
            TypeToken::of::<E>(),
            types.entity,
        )?;
        TypeResolutionError::ensure(
            format!("id of {}", name),
            TypeToken::of::<E::Id>(),
            types.id,
        )?;
        let view = resolver.resolve(concrete, TypeToken::of::<MetaElementBase>(), 0)?;
        TypeResolutionError::ensure(format!("view of {}", name), types.list_view, view)?;

        tracing::debug!(
            "Bound {}: item view {}, list view {}",
            name,
            types.item_view.short_name(),
            types.list_view.short_name()
        );

        Ok(Self {
            component,
            types,
            service,
            _entity: PhantomData,
        })
    }

    pub fn service(&self) -> &Arc<S> {
        &self.service
    }

    pub fn types(&self) -> &DataTypes {
        &self.types
    }
}

impl<E, S> MetaElement for DataMetaElement<E, S>
where
    E: DataEntity,
    S: ?Sized + Send + Sync + 'static,
{
    fn component(&self) -> &MetaComponent {
        &self.component
    }

    fn key(&self) -> String {
        E::full_name()
    }

    fn view_type(&self) -> TypeToken {
        self.types.list_view
    }

    fn data_types(&self) -> Option<&DataTypes> {
        Some(&self.types)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
