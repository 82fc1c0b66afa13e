use super::repository::RealtorRepository;
use crate::shared::data::Repository;
use crate::shared::service::{CatalogServiceBase, CrudService, Service};
use chrono::NaiveDate;
use contracts::domain::a002_realtor::Realtor;
use contracts::shared::type_witness::{TypeArg, TypeDeclaration, TypeResolutionError, TypeResolver};
use uuid::Uuid;

/// Сервис риелторов
pub type RealtorService = CrudService<Realtor, RealtorRepository>;

/// `RealtorService`: сервис справочника `<Realtor, Uuid>`
pub fn declare_types(resolver: &mut TypeResolver) -> Result<(), TypeResolutionError> {
    resolver.declare(TypeDeclaration::new::<RealtorService, CatalogServiceBase>(vec![
        TypeArg::of::<Realtor>(),
        TypeArg::of::<Uuid>(),
    ]))
}

/// Вставка тестовых данных
pub async fn insert_test_data(service: &RealtorService) -> anyhow::Result<()> {
    if service.repository().count().await? > 0 {
        tracing::debug!("Realtors already present, skip test data");
        return Ok(());
    }

    let mut ivan = Realtor::new("RLT-001", "Ivan Kuznetsov", "+7 900 111-22-33");
    ivan.experience_years = Some(12);
    ivan.commission = Some(3.5);
    ivan.licensed = true;
    ivan.hired_on = NaiveDate::from_ymd_opt(2012, 3, 1);

    let mut elena = Realtor::new("RLT-002", "Elena Volkova", "+7 900 444-55-66");
    elena.experience_years = Some(4);
    elena.commission = Some(2.75);
    elena.hired_on = NaiveDate::from_ymd_opt(2021, 9, 15);

    for realtor in [ivan, elena] {
        service.create(realtor).await?;
    }

    tracing::info!("Inserted test realtors");
    Ok(())
}
