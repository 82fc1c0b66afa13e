//! Widget creation strategies, one per descriptor kind

mod checkbox;
mod choice;
mod number;
mod temporal;
mod text;

pub use checkbox::CheckboxStrategy;
pub use choice::ChoiceStrategy;
pub use number::NumberStrategy;
pub use temporal::{TemporalStrategy, TemporalValue};
pub use text::TextStrategy;

use super::WidgetCreationStrategy;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use contracts::shared::metadata::DescriptorKind;

/// Registration list; the first strategy supporting a field wins
pub fn all() -> Vec<Box<dyn WidgetCreationStrategy>> {
    DescriptorKind::ALL.iter().map(|kind| strategy(*kind)).collect()
}

fn strategy(kind: DescriptorKind) -> Box<dyn WidgetCreationStrategy> {
    match kind {
        DescriptorKind::TextField | DescriptorKind::TextArea | DescriptorKind::PasswordField => {
            Box::new(TextStrategy::new(kind))
        }
        DescriptorKind::NumberField => Box::new(NumberStrategy),
        DescriptorKind::Checkbox => Box::new(CheckboxStrategy),
        DescriptorKind::DatePicker => Box::new(TemporalStrategy::<NaiveDate>::new()),
        DescriptorKind::TimePicker => Box::new(TemporalStrategy::<NaiveTime>::new()),
        DescriptorKind::DateTimePicker => Box::new(TemporalStrategy::<NaiveDateTime>::new()),
        DescriptorKind::Select
        | DescriptorKind::ComboBox
        | DescriptorKind::ListBox
        | DescriptorKind::RadioButtonGroup
        | DescriptorKind::MultiSelectComboBox
        | DescriptorKind::CheckboxGroup
        | DescriptorKind::MultiSelectListBox => Box::new(ChoiceStrategy::new(kind)),
    }
}
