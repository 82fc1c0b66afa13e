//! Разделы навигации приложения

use crate::shared::meta::{Section, SectionComponent};

/// Справочники
pub struct CatalogsSection;

const CATALOGS: SectionComponent = SectionComponent::new("${section.title.catalogs}")
    .description("${section.description.catalogs}")
    .order(10);

impl Section for CatalogsSection {
    fn component(&self) -> &SectionComponent {
        &CATALOGS
    }
}

/// Документы
pub struct DocumentsSection;

const DOCUMENTS: SectionComponent = SectionComponent::new("${section.title.documents}").order(20);

impl Section for DocumentsSection {
    fn component(&self) -> &SectionComponent {
        &DOCUMENTS
    }
}

/// Администрирование; скрыт из навигации
pub struct AdminSection;

const ADMIN: SectionComponent = SectionComponent::new("${section.title.admin}")
    .hidden()
    .order(30);

impl Section for AdminSection {
    fn component(&self) -> &SectionComponent {
        &ADMIN
    }
}
