use super::*;

fn service_param(salon_user_id: i32, name: &str) -> CreateServiceParam {
    CreateServiceParam {
        salon_user_id,
        name: name.to_string(),
        price: 40.0,
        duration: 90,
    }
}

/// Tests adding a service for a staff member.
///
/// Expected: Ok with the staff member's salon and a readable duration
#[tokio::test]
async fn creates_service_for_staff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salon = factory::create_salon(db).await?;
    let staff = factory::create_salon_user(db, salon.id).await?;

    let catalog = CatalogService::new(db);
    let service = catalog.create(service_param(staff.id, "Balayage")).await?;

    assert_eq!(service.salon_id, salon.id);
    assert_eq!(service.into_dto().duration_text, "1 hr and 30 min");

    Ok(())
}

/// Tests the staff and name checks.
///
/// Expected: NotFound for an unknown staff member, BadRequest for a duplicate name
#[tokio::test]
async fn rejects_unknown_staff_and_duplicate_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, staff, existing) = factory::helpers::create_salon_with_service(db).await?;

    let catalog = CatalogService::new(db);

    let unknown = catalog.create(service_param(999, "Balayage")).await;
    assert!(matches!(unknown, Err(AppError::NotFound(_))));

    let duplicate = catalog.create(service_param(staff.id, &existing.name)).await;
    assert!(matches!(duplicate, Err(AppError::BadRequest(_))));

    Ok(())
}
