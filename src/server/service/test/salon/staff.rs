use super::*;

/// Tests that a staff member is created for an existing salon and can be read back.
///
/// Expected: Ok with the stored salon, name and role
#[tokio::test]
async fn creates_and_gets_staff() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salon = factory::create_salon(db).await?;
    let staff = StaffService::new(db)
        .create(CreateStaffParam {
            salon_id: salon.id,
            name: "Meera".to_string(),
            role: StaffRole::Manager,
        })
        .await?;

    let found = StaffService::new(db).get(staff.id).await?;
    assert_eq!(found.salon_id, salon.id);
    assert_eq!(found.name, "Meera");
    assert_eq!(found.role, StaffRole::Manager);

    Ok(())
}

/// Tests that staff cannot be added to a salon that does not exist.
///
/// Expected: Err(NotFound) and no staff row
#[tokio::test]
async fn rejects_unknown_salon() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StaffService::new(db)
        .create(CreateStaffParam {
            salon_id: 404,
            name: "Meera".to_string(),
            role: StaffRole::Staff,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "Salon not found."));

    Ok(())
}

/// Tests that an unknown staff ID is reported as not found.
///
/// Expected: Err(NotFound("User not found."))
#[tokio::test]
async fn get_unknown_staff_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = StaffService::new(db).get(1).await;

    assert!(matches!(result, Err(AppError::NotFound(msg)) if msg == "User not found."));

    Ok(())
}

/// Tests renaming a staff member and changing their role.
///
/// Expected: Ok with the new name and role, the salon unchanged
#[tokio::test]
async fn updates_name_and_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salon = factory::create_salon(db).await?;
    let member = factory::create_salon_user(db, salon.id).await?;

    let updated = StaffService::new(db)
        .update(
            member.id,
            UpdateStaffParam {
                name: Some("Meera K".to_string()),
                role: Some(StaffRole::Owner),
            },
        )
        .await?;

    assert_eq!(updated.name, "Meera K");
    assert_eq!(updated.role, StaffRole::Owner);
    assert_eq!(updated.salon_id, salon.id);

    Ok(())
}

/// Tests that a staff member offering services cannot be deleted.
///
/// Expected: Err(BadRequest) while a service is active; Ok once it is deleted,
/// after which the member is hidden from get and list
#[tokio::test]
async fn delete_requires_no_active_services() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, member, service) = factory::helpers::create_salon_with_service(db).await?;
    let colleague = factory::create_salon_user(db, salon.id).await?;

    let staff = StaffService::new(db);
    assert!(matches!(
        staff.delete(member.id, now()).await,
        Err(AppError::BadRequest(msg))
            if msg == "Cannot delete user because they still offer active services."
    ));

    CatalogService::new(db).delete(service.id, now()).await?;
    staff.delete(member.id, now()).await?;

    assert!(matches!(
        staff.get(member.id).await,
        Err(AppError::NotFound(msg)) if msg == "User not found."
    ));

    let listed = staff
        .list(StaffFilter {
            salon_id: Some(salon.id),
            page: 1,
            limit: 10,
        })
        .await?;
    assert_eq!(listed.total, 1);
    assert_eq!(listed.items[0].id, colleague.id);

    Ok(())
}

/// Tests listing staff filtered by salon.
///
/// Expected: Ok with only the named salon's staff
#[tokio::test]
async fn lists_staff_of_one_salon() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let north = factory::create_salon(db).await?;
    let south = factory::create_salon(db).await?;
    factory::create_salon_user(db, north.id).await?;
    factory::create_salon_user(db, north.id).await?;
    factory::create_salon_user(db, south.id).await?;

    let staff = StaffService::new(db);
    let filter = |salon_id| StaffFilter {
        salon_id,
        page: 1,
        limit: 10,
    };

    let northern = staff.list(filter(Some(north.id))).await?;
    assert_eq!(northern.total, 2);
    assert!(northern.items.iter().all(|member| member.salon_id == north.id));

    assert_eq!(staff.list(filter(None)).await?.total, 3);

    Ok(())
}
