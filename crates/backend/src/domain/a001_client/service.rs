use super::repository::ClientRepository;
use crate::shared::data::Repository;
use crate::shared::service::{CatalogServiceBase, CrudService, Service};
use chrono::{NaiveDate, NaiveTime};
use contracts::domain::a001_client::Client;
use contracts::shared::type_witness::{TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver};

/// Сервис клиентов
pub type ClientService = CrudService<Client, ClientRepository>;

/// `ClientService`: сервис справочника `<Client, i64>`
pub fn declare_types(resolver: &mut TypeResolver) -> Result<(), TypeResolutionError> {
    resolver.declare(TypeDeclaration::new::<ClientService, CatalogServiceBase>(vec![
        TypeArg::of::<Client>(),
        TypeArg::of::<i64>(),
    ]))
}

/// Вставка тестовых данных
pub async fn insert_test_data(service: &ClientService) -> anyhow::Result<()> {
    if service.repository().count().await? > 0 {
        tracing::debug!("Clients already present, skip test data");
        return Ok(());
    }

    let mut anna = Client::new("CLT-001", "Anna", "Petrova");
    anna.salary = Some(120_000);
    anna.vip = true;
    anna.region = Some("Central".into());
    anna.satisfaction = Some("Great".into());
    anna.birth_date = NaiveDate::from_ymd_opt(1991, 1, 23);
    anna.call_time = NaiveTime::from_hms_opt(12, 23, 0);
    anna.tags = vec!["Buyer".into(), "Investor".into()];

    let mut oleg = Client::new("CLT-002", "Oleg", "Ivanov");
    oleg.salary = Some(85_000);
    oleg.region = Some("Ural".into());
    oleg.channel = Some("Phone".into());

    let mut maria = Client::new("CLT-003", "Maria", "Sidorova");
    maria.language = Some("English".into());
    maria.tags = vec!["Tenant".into()];

    let boris = Client::new("CLT-004", "Boris", "Smirnov");

    for client in [anna, oleg, maria, boris] {
        service.create(client).await?;
    }

    tracing::info!("Inserted test clients");
    Ok(())
}
