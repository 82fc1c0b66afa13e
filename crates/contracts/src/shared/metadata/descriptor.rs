//! Widget descriptors attached to entity fields
//!
//! A descriptor names the widget kind and carries its configuration. All texts
//! (labels, helper texts, temporal literals) are raw and pass through the text
//! resolver when the widget is created; a blank text means "not set".

use serde::{Deserialize, Serialize};

// ============================================================================
// Descriptor kinds
// ============================================================================

/// Closed set of widget kinds a field can be described with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptorKind {
    TextField,
    TextArea,
    PasswordField,
    NumberField,
    Checkbox,
    DatePicker,
    TimePicker,
    DateTimePicker,
    Select,
    ComboBox,
    ListBox,
    RadioButtonGroup,
    MultiSelectComboBox,
    CheckboxGroup,
    MultiSelectListBox,
}

impl DescriptorKind {
    /// All kinds in strategy registration order
    pub const ALL: [DescriptorKind; 15] = [
        Self::TextField,
        Self::TextArea,
        Self::PasswordField,
        Self::NumberField,
        Self::Checkbox,
        Self::DatePicker,
        Self::TimePicker,
        Self::DateTimePicker,
        Self::Select,
        Self::ComboBox,
        Self::ListBox,
        Self::RadioButtonGroup,
        Self::MultiSelectComboBox,
        Self::CheckboxGroup,
        Self::MultiSelectListBox,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextField => "text_field",
            Self::TextArea => "text_area",
            Self::PasswordField => "password_field",
            Self::NumberField => "number_field",
            Self::Checkbox => "checkbox",
            Self::DatePicker => "date_picker",
            Self::TimePicker => "time_picker",
            Self::DateTimePicker => "date_time_picker",
            Self::Select => "select",
            Self::ComboBox => "combo_box",
            Self::ListBox => "list_box",
            Self::RadioButtonGroup => "radio_button_group",
            Self::MultiSelectComboBox => "multi_select_combo_box",
            Self::CheckboxGroup => "checkbox_group",
            Self::MultiSelectListBox => "multi_select_list_box",
        }
    }

    pub fn is_multi_select(&self) -> bool {
        matches!(
            self,
            Self::MultiSelectComboBox | Self::CheckboxGroup | Self::MultiSelectListBox
        )
    }
}

// ============================================================================
// Common widget options
// ============================================================================

/// Size hints; explicit sizes override the `*_full` flags
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeHints {
    pub width_full: bool,
    pub height_full: bool,
    pub size_full: bool,
    pub width: String,
    pub min_width: String,
    pub max_width: String,
    pub height: String,
    pub min_height: String,
    pub max_height: String,
}

/// Options shared by every widget kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetOptions {
    /// Widget id; blank means `field-<lowercased field name>`
    pub id: String,
    /// Label; blank means generated from the field name
    pub label: String,
    pub helper_text: String,
    pub placeholder: String,
    pub tooltip: String,
    pub prefix_text: String,
    pub suffix_text: String,
    pub visible: bool,
    pub enabled: bool,
    pub read_only: bool,
    pub required: bool,
    pub required_indicator_visible: bool,
    pub clear_button_visible: bool,
    pub auto_open: bool,
    pub size: SizeHints,
}

impl Default for WidgetOptions {
    fn default() -> Self {
        Self {
            id: String::new(),
            label: String::new(),
            helper_text: String::new(),
            placeholder: String::new(),
            tooltip: String::new(),
            prefix_text: String::new(),
            suffix_text: String::new(),
            visible: true,
            enabled: true,
            read_only: false,
            required: false,
            required_indicator_visible: false,
            clear_button_visible: false,
            auto_open: true,
            size: SizeHints::default(),
        }
    }
}

impl WidgetOptions {
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = text.into();
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    pub fn tooltip(mut self, text: impl Into<String>) -> Self {
        self.tooltip = text.into();
        self
    }

    pub fn prefix(mut self, text: impl Into<String>) -> Self {
        self.prefix_text = text.into();
        self
    }

    pub fn suffix(mut self, text: impl Into<String>) -> Self {
        self.suffix_text = text.into();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn required_indicator(mut self) -> Self {
        self.required_indicator_visible = true;
        self
    }

    pub fn clear_button(mut self) -> Self {
        self.clear_button_visible = true;
        self
    }

    pub fn no_auto_open(mut self) -> Self {
        self.auto_open = false;
        self
    }

    pub fn width_full(mut self) -> Self {
        self.size.width_full = true;
        self
    }

    pub fn height_full(mut self) -> Self {
        self.size.height_full = true;
        self
    }

    pub fn size_full(mut self) -> Self {
        self.size.size_full = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.size.width = width.into();
        self
    }

    pub fn min_width(mut self, width: impl Into<String>) -> Self {
        self.size.min_width = width.into();
        self
    }

    pub fn max_width(mut self, width: impl Into<String>) -> Self {
        self.size.max_width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<String>) -> Self {
        self.size.height = height.into();
        self
    }

    pub fn min_height(mut self, height: impl Into<String>) -> Self {
        self.size.min_height = height.into();
        self
    }

    pub fn max_height(mut self, height: impl Into<String>) -> Self {
        self.size.max_height = height.into();
        self
    }
}

// ============================================================================
// Kind-specific configurations
// ============================================================================

/// Text field, text area and password field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextConfig {
    pub options: WidgetOptions,
    pub default_value: String,
    pub min_length: Option<u32>,
    pub max_length: Option<u32>,
}

impl TextConfig {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn length(mut self, min: u32, max: u32) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub fn max_length(mut self, max: u32) -> Self {
        self.max_length = Some(max);
        self
    }
}

/// Number field; the effective range is derived from the field's numeric width
#[derive(Debug, Clone, PartialEq)]
pub struct NumberConfig {
    pub options: WidgetOptions,
    pub default_value: Option<f64>,
    pub min: f64,
    pub max: f64,
    /// Non-positive step means "the width's default step"
    pub step: f64,
    pub step_buttons_visible: bool,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            options: WidgetOptions::default(),
            default_value: None,
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            step: 0.0,
            step_buttons_visible: false,
        }
    }
}

impl NumberConfig {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.min = min;
        self.max = max;
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn step_buttons(mut self) -> Self {
        self.step_buttons_visible = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckboxConfig {
    pub options: WidgetOptions,
    pub default_value: bool,
}

impl CheckboxConfig {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            options,
            default_value: false,
        }
    }

    pub fn checked(mut self) -> Self {
        self.default_value = true;
        self
    }
}

/// Date, time and date-time pickers; literals are parsed after text resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemporalConfig {
    pub options: WidgetOptions,
    pub default_value: String,
    pub min: String,
    pub max: String,
    /// Placeholder of the time half of a date-time picker
    pub time_placeholder: String,
}

impl TemporalConfig {
    pub fn new(options: WidgetOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn default_value(mut self, literal: impl Into<String>) -> Self {
        self.default_value = literal.into();
        self
    }

    pub fn min(mut self, literal: impl Into<String>) -> Self {
        self.min = literal.into();
        self
    }

    pub fn max(mut self, literal: impl Into<String>) -> Self {
        self.max = literal.into();
        self
    }

    pub fn time_placeholder(mut self, text: impl Into<String>) -> Self {
        self.time_placeholder = text.into();
        self
    }
}

/// Reference to a default-value supplier registered in the provider registry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SupplierRef {
    /// No supplier; the widget starts empty
    #[default]
    None,
    Named(String),
}

impl SupplierRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::Named(name) => Some(name),
        }
    }
}

/// Single- and multi-choice widgets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceConfig {
    pub options: WidgetOptions,
    /// Registered data source name (mandatory)
    pub data_source: String,
    pub default_value: SupplierRef,
    /// Registered filter converter name; used by the combo box only
    pub filter_converter: Option<String>,
}

impl ChoiceConfig {
    pub fn new(options: WidgetOptions, data_source: impl Into<String>) -> Self {
        Self {
            options,
            data_source: data_source.into(),
            default_value: SupplierRef::None,
            filter_converter: None,
        }
    }

    pub fn default_value(mut self, supplier: impl Into<String>) -> Self {
        self.default_value = SupplierRef::Named(supplier.into());
        self
    }

    pub fn filter_converter(mut self, converter: impl Into<String>) -> Self {
        self.filter_converter = Some(converter.into());
        self
    }
}

// ============================================================================
// Descriptor
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum FieldDescriptor {
    TextField(TextConfig),
    TextArea(TextConfig),
    PasswordField(TextConfig),
    NumberField(NumberConfig),
    Checkbox(CheckboxConfig),
    DatePicker(TemporalConfig),
    TimePicker(TemporalConfig),
    DateTimePicker(TemporalConfig),
    Select(ChoiceConfig),
    ComboBox(ChoiceConfig),
    ListBox(ChoiceConfig),
    RadioButtonGroup(ChoiceConfig),
    MultiSelectComboBox(ChoiceConfig),
    CheckboxGroup(ChoiceConfig),
    MultiSelectListBox(ChoiceConfig),
}

impl FieldDescriptor {
    pub fn kind(&self) -> DescriptorKind {
        match self {
            Self::TextField(_) => DescriptorKind::TextField,
            Self::TextArea(_) => DescriptorKind::TextArea,
            Self::PasswordField(_) => DescriptorKind::PasswordField,
            Self::NumberField(_) => DescriptorKind::NumberField,
            Self::Checkbox(_) => DescriptorKind::Checkbox,
            Self::DatePicker(_) => DescriptorKind::DatePicker,
            Self::TimePicker(_) => DescriptorKind::TimePicker,
            Self::DateTimePicker(_) => DescriptorKind::DateTimePicker,
            Self::Select(_) => DescriptorKind::Select,
            Self::ComboBox(_) => DescriptorKind::ComboBox,
            Self::ListBox(_) => DescriptorKind::ListBox,
            Self::RadioButtonGroup(_) => DescriptorKind::RadioButtonGroup,
            Self::MultiSelectComboBox(_) => DescriptorKind::MultiSelectComboBox,
            Self::CheckboxGroup(_) => DescriptorKind::CheckboxGroup,
            Self::MultiSelectListBox(_) => DescriptorKind::MultiSelectListBox,
        }
    }

    pub fn options(&self) -> &WidgetOptions {
        match self {
            Self::TextField(c) | Self::TextArea(c) | Self::PasswordField(c) => &c.options,
            Self::NumberField(c) => &c.options,
            Self::Checkbox(c) => &c.options,
            Self::DatePicker(c) | Self::TimePicker(c) | Self::DateTimePicker(c) => &c.options,
            Self::Select(c)
            | Self::ComboBox(c)
            | Self::ListBox(c)
            | Self::RadioButtonGroup(c)
            | Self::MultiSelectComboBox(c)
            | Self::CheckboxGroup(c)
            | Self::MultiSelectListBox(c) => &c.options,
        }
    }
}
