use super::*;

/// Tests moving an appointment and replacing its services.
///
/// Expected: Ok(Some) with the new window and only the new service linked
#[tokio::test]
async fn replaces_window_and_services() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, staff, cut) = factory::helpers::create_salon_with_service(db).await?;
    let colour = factory::service::ServiceFactory::new(db, staff.id)
        .name("Colour")
        .duration(60)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;
    let existing = factory::appointment::AppointmentFactory::new(db, salon.id, customer.id)
        .window(at(10, 0), at(10, 30))
        .services(vec![cut.id])
        .build()
        .await?;

    let next_day = test_date() + Duration::days(1);
    let start = at(14, 0) + Duration::days(1);
    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            AppointmentChanges {
                salon_id: salon.id,
                customer_id: customer.id,
                date: next_day,
                window: Interval::starting_at(start, Duration::minutes(60)),
                notes: Some("Moved".to_string()),
                service_ids: Some(vec![colour.id]),
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.date, next_day);
    assert_eq!(updated.start_time, start);
    assert_eq!(updated.end_time, start + Duration::minutes(60));
    assert_eq!(updated.service_ids, vec![colour.id]);
    assert_eq!(updated.status, AppointmentStatus::Pending);

    Ok(())
}

/// Tests that omitting service IDs keeps the stored associations.
///
/// Expected: Ok(Some) with the previously linked service kept
#[tokio::test]
async fn keeps_services_when_not_supplied() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let existing = factory::appointment::AppointmentFactory::new(db, salon.id, customer.id)
        .window(at(10, 0), at(10, 30))
        .services(vec![service.id])
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            existing.id,
            AppointmentChanges {
                salon_id: salon.id,
                customer_id: customer.id,
                date: test_date(),
                window: Interval::new(at(10, 0), at(10, 30)),
                notes: Some("Window seat".to_string()),
                service_ids: None,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.service_ids, vec![service.id]);
    assert_eq!(updated.notes.as_deref(), Some("Window seat"));

    Ok(())
}

/// Tests updating and changing the status of a missing appointment.
///
/// Expected: Ok(None) from both update and update_status
#[tokio::test]
async fn returns_none_for_missing_appointment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, _, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update(
            42,
            AppointmentChanges {
                salon_id: salon.id,
                customer_id: customer.id,
                date: test_date(),
                window: Interval::new(at(10, 0), at(10, 30)),
                notes: None,
                service_ids: None,
            },
        )
        .await?;
    assert!(updated.is_none());

    let status = repo.update_status(42, AppointmentStatus::Confirmed).await?;
    assert!(status.is_none());

    Ok(())
}

/// Tests that a status can be set to any value regardless of the current one.
///
/// Expected: Ok(Some) with CONFIRMED after a PENDING appointment is confirmed
#[tokio::test]
async fn sets_status_unconditionally() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, _, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let existing =
        factory::create_appointment(db, salon.id, customer.id, at(10, 0), at(10, 30)).await?;

    let repo = AppointmentRepository::new(db);
    let updated = repo
        .update_status(existing.id, AppointmentStatus::Confirmed)
        .await?
        .unwrap();
    assert_eq!(updated.status, AppointmentStatus::Confirmed);

    let reverted = repo
        .update_status(existing.id, AppointmentStatus::Pending)
        .await?
        .unwrap();
    assert_eq!(reverted.status, AppointmentStatus::Pending);

    Ok(())
}

/// Tests deleting an appointment together with its service links.
///
/// Expected: Ok(Some) on the first delete, Ok(None) on the second, no links left
#[tokio::test]
async fn delete_removes_service_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let existing = factory::appointment::AppointmentFactory::new(db, salon.id, customer.id)
        .window(at(10, 0), at(10, 30))
        .services(vec![service.id])
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    assert!(repo.delete(existing.id).await?.is_some());
    assert!(repo.delete(existing.id).await?.is_none());

    let links = entity::prelude::AppointmentService::find().count(db).await?;
    assert_eq!(links, 0);

    Ok(())
}
