use super::*;

/// Tests that new salon hours apply to the next slot listing.
///
/// Expected: Ok with slots only between the new opening and closing time
#[tokio::test]
async fn updated_hours_change_slots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let salons = SalonService::new(db);
    let salon = salons
        .create(CreateSalonParam {
            name: "Corner Studio".to_string(),
            open_time: Some(time(9, 0)),
            close_time: Some(time(18, 0)),
            timezone: None,
        })
        .await?;
    let staff = StaffService::new(db)
        .create(CreateStaffParam {
            salon_id: salon.id,
            name: "Ravi".to_string(),
            role: StaffRole::Owner,
        })
        .await?;
    factory::create_service(db, staff.id).await?;

    salons
        .update(
            salon.id,
            UpdateSalonParam {
                open_time: Some(time(14, 0)),
                close_time: Some(time(16, 0)),
                ..Default::default()
            },
        )
        .await?;

    let day = AvailabilityService::new(db, chrono_tz::UTC)
        .get_slots(
            SlotQuery {
                date: Some("2030-01-10".to_string()),
                salon_id: Some(salon.id),
            },
            now(),
        )
        .await?;

    assert_eq!(day.slots.len(), 4);
    assert_eq!(day.slots[0].start, at(14, 0));

    Ok(())
}

/// Tests the salon lookups.
///
/// Expected: NotFound for updating a missing salon and for staff of a missing salon
#[tokio::test]
async fn missing_salon_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let update = SalonService::new(db)
        .update(7, UpdateSalonParam::default())
        .await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let staff = StaffService::new(db)
        .create(CreateStaffParam {
            salon_id: 7,
            name: "Ravi".to_string(),
            role: StaffRole::Staff,
        })
        .await;
    assert!(matches!(staff, Err(AppError::NotFound(_))));

    Ok(())
}
