use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a001_client::{providers, Client};
use contracts::domain::common::Entity;
use contracts::shared::metadata::{
    ChoiceConfig, DescriptorKind, EntityField, FieldDescriptor, FieldValue, FieldValueType,
    NumberConfig, NumericWidth, ProviderError, TemporalConfig, WidgetOptions,
};
use frontend::app::widget_registry;
use frontend::shared::fields::{Constraints, Widget, WidgetConfigurationError};
use frontend::shared::form::EntityForm;
use frontend::shared::grid::EntityGrid;

fn client_widgets() -> Vec<Widget> {
    widget_registry()
        .create_fields(Client::fields(), None)
        .unwrap()
}

fn widget<'a>(widgets: &'a [Widget], field: &str) -> &'a Widget {
    widgets
        .iter()
        .find(|w| w.field == field)
        .unwrap_or_else(|| panic!("no widget for {}", field))
}

#[test]
fn widgets_cover_described_fields_in_display_order() {
    let widgets = client_widgets();

    let described: Vec<&str> = Client::fields()
        .iter()
        .filter(|f| !f.descriptors.is_empty())
        .map(|f| f.name)
        .collect();
    let mut produced: Vec<&str> = widgets.iter().map(|w| w.field).collect();
    assert_eq!(produced.len(), described.len());
    produced.sort();
    let mut expected = described.clone();
    expected.sort();
    assert_eq!(produced, expected);

    let orders: Vec<i32> = widgets
        .iter()
        .map(|w| {
            Client::fields()
                .iter()
                .find(|f| f.name == w.field)
                .map(EntityField::display_order)
                .unwrap()
        })
        .collect();
    assert!(orders.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(widgets.iter().all(|w| w.field != "external_ref"));
}

#[test]
fn first_registered_strategy_wins() {
    let widgets = client_widgets();
    assert_eq!(widget(&widgets, "surname").kind, DescriptorKind::TextField);
    assert_eq!(widget(&widgets, "comment").kind, DescriptorKind::TextArea);
    assert_eq!(widgets.iter().filter(|w| w.field == "surname").count(), 1);
}

#[test]
fn common_options_are_applied() {
    let widgets = client_widgets();

    let id = widget(&widgets, "id");
    assert!(id.read_only);
    assert_eq!(id.id, "field-id");

    let name = widget(&widgets, "name");
    assert!(name.required && name.required_indicator_visible && name.clear_button_visible);
    assert!(matches!(
        name.constraints,
        Constraints::Text {
            min_length: Some(1),
            max_length: Some(100)
        }
    ));

    let title = widget(&widgets, "title");
    assert_eq!(title.size.width.as_deref(), Some("100%"));

    assert_eq!(widget(&widgets, "call_time").label, "Call time");
    assert_eq!(
        widget(&widgets, "districts").size.height.as_deref(),
        Some("12em")
    );
}

#[test]
fn numeric_ranges_follow_field_width() {
    let widgets = client_widgets();

    let rating = widget(&widgets, "rating");
    let Constraints::Number { width, min, max, step, .. } = rating.constraints else {
        panic!("rating is not a number widget");
    };
    assert_eq!(width, NumericWidth::I8);
    assert_eq!((min, max, step), (-128.0, 127.0, 1.0));
    assert_eq!(rating.value, Some(FieldValue::Integer(0)));

    let salary = widget(&widgets, "salary");
    let Constraints::Number { min, max, step, step_buttons_visible, .. } = salary.constraints else {
        panic!("salary is not a number widget");
    };
    assert_eq!(min, 0.0);
    assert_eq!(max, i64::MAX as f64);
    assert_eq!(step, 1000.0);
    assert!(step_buttons_visible);
    assert_eq!(salary.suffix_text.as_deref(), Some("RUB"));

    let discount = widget(&widgets, "discount");
    assert!(matches!(
        discount.constraints,
        Constraints::Number { width: NumericWidth::F32, step, .. } if step == 0.5
    ));
}

#[test]
fn temporal_literals_are_parsed() {
    let widgets = client_widgets();

    let birth = widget(&widgets, "birth_date");
    assert_eq!(
        birth.value,
        NaiveDate::from_ymd_opt(1991, 1, 23).map(FieldValue::Date)
    );
    assert!(matches!(
        birth.constraints,
        Constraints::Date { min: Some(_), max: None }
    ));

    let call = widget(&widgets, "call_time");
    assert_eq!(call.value, NaiveTime::from_hms_opt(12, 23, 0).map(FieldValue::Time));

    let contact = widget(&widgets, "last_contact");
    assert!(matches!(contact.value, Some(FieldValue::DateTime(_))));
    let Constraints::DateTime { time_placeholder, .. } = &contact.constraints else {
        panic!("last_contact is not a date-time widget");
    };
    assert_eq!(time_placeholder.as_deref(), Some("time"));
}

#[test]
fn temporal_literals_go_through_the_text_resolver() {
    let field = EntityField::new("hired_on", FieldValueType::Date).with_descriptor(
        FieldDescriptor::DatePicker(TemporalConfig::new(WidgetOptions::default()).default_value("${defaults.hired_on}")),
    );
    let resolve = |raw: &str| {
        if raw == "${defaults.hired_on}" {
            "2000-02-29".to_string()
        } else {
            raw.to_string()
        }
    };
    let widget = widget_registry()
        .create_field(&field, Some(&resolve))
        .unwrap()
        .unwrap();
    assert_eq!(widget.value, NaiveDate::from_ymd_opt(2000, 2, 29).map(FieldValue::Date));
}

#[test]
fn bad_literals_are_configuration_errors() {
    let date = EntityField::new("hired_on", FieldValueType::Date).with_descriptor(
        FieldDescriptor::DatePicker(TemporalConfig::new(WidgetOptions::default()).min("not a date")),
    );
    assert!(matches!(
        widget_registry().create_field(&date, None),
        Err(WidgetConfigurationError::InvalidLiteral { expected: "date", .. })
    ));

    let number = EntityField::new("level", FieldValueType::Number(NumericWidth::I8)).with_descriptor(
        FieldDescriptor::NumberField(NumberConfig::default().default_value(500.0)),
    );
    assert!(matches!(
        widget_registry().create_field(&number, None),
        Err(WidgetConfigurationError::InvalidLiteral { .. })
    ));
}

#[test]
fn choice_widgets_bind_items_and_defaults() {
    let widgets = client_widgets();

    let satisfaction = widget(&widgets, "satisfaction");
    assert_eq!(satisfaction.value, Some(FieldValue::text("Good")));
    assert_eq!(satisfaction.choice().map(|c| c.items.len()), Some(5));

    let tags = widget(&widgets, "tags");
    assert_eq!(tags.value, Some(FieldValue::texts(["Buyer"])));
    assert!(tags.choice().unwrap().multiple);

    let language = widget(&widgets, "language");
    assert_eq!(language.value, None);

    // префиксный фильтр против фильтра по подстроке
    let region = widget(&widgets, "region").choice().unwrap();
    assert_eq!(region.filter_items("s"), vec![&FieldValue::text("South"), &FieldValue::text("Siberia")]);
    let interests = widget(&widgets, "interests").choice().unwrap();
    assert_eq!(interests.filter_items("ER").len(), 3);
}

#[test]
fn unresolvable_providers_are_configuration_errors() {
    let unknown = EntityField::new("grade", FieldValueType::Text).with_descriptor(
        FieldDescriptor::Select(ChoiceConfig::new(WidgetOptions::default(), "missing.source")),
    );
    assert!(matches!(
        widget_registry().create_field(&unknown, None),
        Err(WidgetConfigurationError::Provider {
            source: ProviderError::Unknown { .. },
            ..
        })
    ));

    let wrong_kind = EntityField::new("grade", FieldValueType::Text).with_descriptor(
        FieldDescriptor::Select(
            ChoiceConfig::new(WidgetOptions::default(), providers::SATISFACTION)
                .default_value(providers::SATISFACTION),
        ),
    );
    assert!(matches!(
        widget_registry().create_field(&wrong_kind, None),
        Err(WidgetConfigurationError::Provider {
            source: ProviderError::CapabilityMismatch { .. },
            ..
        })
    ));

    let no_source = EntityField::new("grade", FieldValueType::Text).with_descriptor(
        FieldDescriptor::ListBox(ChoiceConfig::new(WidgetOptions::default(), " ")),
    );
    assert!(matches!(
        widget_registry().create_field(&no_source, None),
        Err(WidgetConfigurationError::MissingDataSource { .. })
    ));
}

#[test]
fn form_reads_and_writes_the_entity() {
    let mut client = Client::new("CLT-001", "Anna", "Petrova");
    client.set_id(Some(7));
    client.salary = Some(100_000);

    let mut form: EntityForm<Client> = EntityForm::build(widget_registry(), None).unwrap();
    form.read_bean(&client);
    assert_eq!(form.widget("id").unwrap().value, Some(FieldValue::text("7")));
    assert_eq!(form.widget("salary").unwrap().value, Some(FieldValue::Integer(100_000)));
    assert_eq!(form.widget("birth_date").unwrap().value, None);

    form.widget_mut("salary").unwrap().set_value(Some(FieldValue::Number(1500.7)));
    form.widget_mut("name").unwrap().set_value(Some(FieldValue::text("Anne")));
    form.widget_mut("id").unwrap().set_value(Some(FieldValue::text("99")));

    let mut edited = client.clone();
    form.write_bean(&mut edited).unwrap();
    assert_eq!(edited.salary, Some(1500));
    assert_eq!(edited.name, "Anne");
    assert_eq!(edited.id(), Some(&7));

    form.widget_mut("rating").unwrap().set_value(Some(FieldValue::Integer(1000)));
    let err = form.write_bean(&mut edited).unwrap_err();
    assert_eq!(err.field, "rating");
}

#[test]
fn grid_columns_follow_list_placement() {
    let messages = |raw: &str| match raw {
        "${field.title.salary}" => "Salary".to_string(),
        other => other.trim_start_matches("${").trim_end_matches('}').to_string(),
    };
    let grid: EntityGrid<Client> = EntityGrid::build(Some(&messages));

    let fields: Vec<&str> = grid.columns().iter().map(|c| c.field).collect();
    assert_eq!(
        fields,
        vec!["id", "code", "title", "name", "surname", "salary", "vip", "birth_date", "region"]
    );

    let salary = grid.column("salary").unwrap();
    assert_eq!(salary.header, "Salary");
    assert_eq!(salary.footer.as_deref(), Some("RUB"));
    assert_eq!(salary.id, "column-salary");
    assert_eq!(grid.column("title").unwrap().flex_grow, Some(1));
    assert!(grid.column("id").unwrap().frozen);
    assert_eq!(grid.column("vip").unwrap().header, "field.title.vip");

    let mut client = Client::new("CLT-001", "Anna", "Petrova");
    client.vip = true;
    client.birth_date = NaiveDate::from_ymd_opt(1991, 1, 23);
    let rows = grid.rows(&[client]);
    assert_eq!(rows[0].id, None);
    assert_eq!(rows[0].cells[1], "CLT-001");
    assert_eq!(rows[0].cells[6], "✓");
    assert_eq!(rows[0].cells[7], "23.01.1991");
}
