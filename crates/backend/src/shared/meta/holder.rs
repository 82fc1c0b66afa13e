use super::{MetaElement, Section};
use contracts::shared::navigation::{NavigationItem, NavigationSection, NavigationTree};
use contracts::shared::type_witness::TypeToken;
use std::sync::Arc;

/// Реестр разделов и мета-элементов
///
/// Разделы хранятся отсортированными по приоритету; при равном приоритете
/// сохраняется порядок регистрации.
pub struct SectionsHolder {
    sections: Vec<Arc<dyn Section>>,
    elements: Vec<Arc<dyn MetaElement>>,
}

#[derive(Default)]
pub struct SectionsHolderBuilder {
    sections: Vec<Arc<dyn Section>>,
    elements: Vec<Arc<dyn MetaElement>>,
}

impl SectionsHolderBuilder {
    pub fn section<S: Section>(mut self, section: S) -> Self {
        self.sections.push(Arc::new(section));
        self
    }

    pub fn element<M: MetaElement>(mut self, element: M) -> Self {
        self.elements.push(Arc::new(element));
        self
    }

    pub fn build(self) -> SectionsHolder {
        let mut sections: Vec<Arc<dyn Section>> = Vec::with_capacity(self.sections.len());
        for section in self.sections {
            if sections.iter().any(|s| s.key() == section.key()) {
                tracing::warn!(
                    "Section {} registered twice, keeping the first",
                    section.key().short_name()
                );
                continue;
            }
            sections.push(section);
        }
        sections.sort_by_key(|s| s.priority());

        for element in &self.elements {
            if !sections.iter().any(|s| s.key() == element.section()) {
                tracing::warn!(
                    "Meta element {} refers to unregistered section {}",
                    element.key(),
                    element.section().short_name()
                );
            }
        }

        tracing::info!(
            "Meta registry: {} sections, {} meta elements",
            sections.len(),
            self.elements.len()
        );

        SectionsHolder {
            sections,
            elements: self.elements,
        }
    }
}

impl SectionsHolder {
    pub fn builder() -> SectionsHolderBuilder {
        SectionsHolderBuilder::default()
    }

    /// Все разделы по приоритету
    pub fn sections(&self) -> &[Arc<dyn Section>] {
        &self.sections
    }

    pub fn visible_sections(&self) -> impl Iterator<Item = &Arc<dyn Section>> + '_ {
        self.sections.iter().filter(|s| s.is_visible())
    }

    pub fn section(&self, key: TypeToken) -> Option<&Arc<dyn Section>> {
        self.sections.iter().find(|s| s.key() == key)
    }

    pub fn elements(&self) -> &[Arc<dyn MetaElement>] {
        &self.elements
    }

    /// Элементы раздела по приоритету
    pub fn content(&self, section: &dyn Section) -> Vec<Arc<dyn MetaElement>> {
        self.content_of(section.key())
    }

    pub fn content_of(&self, section: TypeToken) -> Vec<Arc<dyn MetaElement>> {
        let mut content: Vec<Arc<dyn MetaElement>> = self
            .elements
            .iter()
            .filter(|e| e.section() == section)
            .cloned()
            .collect();
        content.sort_by_key(|e| e.priority());
        content
    }

    /// Мета-элемент конкретного типа
    pub fn element<T: MetaElement>(&self) -> Option<&T> {
        self.elements
            .iter()
            .find_map(|e| e.as_any().downcast_ref::<T>())
    }

    pub fn element_by_key(&self, key: &str) -> Option<&Arc<dyn MetaElement>> {
        self.elements.iter().find(|e| e.key() == key)
    }

    /// Дерево навигации: видимые разделы с их элементами; тексты проходят через `text`
    pub fn navigation_tree(&self, text: &dyn Fn(&str) -> String) -> NavigationTree {
        let resolve = |raw: Option<&str>| raw.map(text);
        let sections = self
            .visible_sections()
            .map(|section| NavigationSection {
                key: section.key().short_name(),
                title: text(section.title()),
                description: resolve(section.description()),
                tooltip: resolve(section.tooltip()),
                items: self
                    .content(section.as_ref())
                    .iter()
                    .map(|element| NavigationItem {
                        key: element.key(),
                        title: text(element.title()),
                        tooltip: resolve(element.tooltip()),
                        route: element.key(),
                        view: element.view_type().short_name(),
                        entity: element.data_types().map(|t| t.entity.short_name()),
                        id_type: element.data_types().map(|t| t.id.short_name()),
                    })
                    .collect(),
            })
            .collect();
        NavigationTree { sections }
    }
}
