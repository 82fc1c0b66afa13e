use super::priority;
use contracts::shared::type_witness::TypeToken;

/// Описание раздела навигации
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionComponent {
    /// Заголовок (строка или ключ `${...}`)
    pub title: &'static str,
    pub description: &'static str,
    /// Пустая подсказка означает "использовать описание"
    pub tooltip: &'static str,
    pub visible: bool,
    pub order: Option<i32>,
}

impl SectionComponent {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            description: "",
            tooltip: "",
            visible: true,
            order: None,
        }
    }

    pub const fn description(self, description: &'static str) -> Self {
        Self {
            description,
            ..self
        }
    }

    pub const fn tooltip(self, tooltip: &'static str) -> Self {
        Self { tooltip, ..self }
    }

    pub const fn hidden(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub const fn order(self, order: i32) -> Self {
        Self {
            order: Some(order),
            ..self
        }
    }
}

fn non_blank(text: &str) -> Option<&str> {
    (!text.trim().is_empty()).then_some(text)
}

/// Раздел навигации; ключом служит тип раздела
pub trait Section: Send + Sync + 'static {
    fn component(&self) -> &SectionComponent;

    fn key(&self) -> TypeToken {
        TypeToken::of::<Self>()
    }

    fn title(&self) -> &str {
        self.component().title
    }

    fn description(&self) -> Option<&str> {
        non_blank(self.component().description)
    }

    fn tooltip(&self) -> Option<&str> {
        non_blank(self.component().tooltip).or_else(|| self.description())
    }

    fn is_visible(&self) -> bool {
        self.component().visible
    }

    fn order(&self) -> Option<i32> {
        self.component().order
    }

    fn priority(&self) -> i32 {
        priority(self.order())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Reports;

    const REPORTS: SectionComponent = SectionComponent::new("Reports")
        .description("Monthly figures")
        .order(40);

    impl Section for Reports {
        fn component(&self) -> &SectionComponent {
            &REPORTS
        }
    }

    #[test]
    fn tooltip_falls_back_to_description() {
        assert_eq!(Reports.tooltip(), Some("Monthly figures"));
        assert_eq!(Reports.priority(), 40);
        assert!(Reports.is_visible());
        assert_eq!(Reports.key(), TypeToken::of::<Reports>());
    }
}
