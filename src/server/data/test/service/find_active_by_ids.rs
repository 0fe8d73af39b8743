use super::*;

/// Tests resolving a mix of active, deleted and unknown IDs.
///
/// Verifies that soft-deleted and unknown services are left out and that each
/// returned service carries the salon of its staff member.
///
/// Expected: Ok with only the active service
#[tokio::test]
async fn returns_only_active_services() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, staff, active) = factory::helpers::create_salon_with_service(db).await?;
    let deleted = factory::service::ServiceFactory::new(db, staff.id)
        .name("Retired")
        .deleted_at(at(8, 0))
        .build()
        .await?;

    let repo = ServiceRepository::new(db);
    let found = repo
        .find_active_by_ids(&[active.id, deleted.id, 999])
        .await?;

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, active.id);
    assert_eq!(found[0].salon_id, salon.id);

    Ok(())
}

/// Tests that an empty ID list short-circuits.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn empty_ids_return_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_salon_with_service(db).await?;

    let repo = ServiceRepository::new(db);
    assert!(repo.find_active_by_ids(&[]).await?.is_empty());

    Ok(())
}
