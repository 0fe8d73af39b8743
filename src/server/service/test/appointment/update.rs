use super::*;

/// Tests updating an appointment that does not exist.
///
/// Expected: Err(NotFound) with "Appointment not found." for update and status change
#[tokio::test]
async fn missing_appointment_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    let update = appointments
        .update(5, UpdateAppointmentParam::default(), now())
        .await;
    match update {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Appointment not found."),
        other => panic!("expected not found, got {:?}", other),
    }

    let status = appointments
        .update_status(5, AppointmentStatus::Cancelled)
        .await;
    assert!(matches!(status, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that changing only the notes leaves the schedule alone.
///
/// The appointment lies in the past relative to `now`, which would fail the
/// booking checks if they ran.
///
/// Expected: Ok with new notes and the booked window unchanged
#[tokio::test]
async fn notes_only_update_skips_booking_checks() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (salon, _, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let existing =
        factory::create_appointment(db, salon.id, customer.id, at(10, 0), at(10, 30)).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let updated = appointments
        .update(
            existing.id,
            UpdateAppointmentParam {
                notes: Some("Bring reference photo".to_string()),
                ..Default::default()
            },
            at(12, 0),
        )
        .await?;

    assert_eq!(updated.notes.as_deref(), Some("Bring reference photo"));
    assert_eq!(updated.start_time, at(10, 0));
    assert_eq!(updated.end_time, at(10, 30));

    Ok(())
}

/// Tests moving an appointment to another date without a new start time.
///
/// Expected: Ok with the same local start and length on the new date
#[tokio::test]
async fn date_change_keeps_start_clock_and_length() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, staff, _) = factory::helpers::create_salon_with_service(db).await?;
    let colour = factory::service::ServiceFactory::new(db, staff.id)
        .duration(90)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let existing = appointments
        .create(booking(customer.id, vec![colour.id], "10:00 AM"), now())
        .await?;

    let next_day = test_date() + Duration::days(1);
    let moved = appointments
        .update(
            existing.id,
            UpdateAppointmentParam {
                date: Some(next_day),
                ..Default::default()
            },
            now(),
        )
        .await?;

    assert_eq!(moved.date, next_day);
    assert_eq!(moved.start_time, at(10, 0) + Duration::days(1));
    assert_eq!(moved.end_time, at(11, 30) + Duration::days(1));
    assert_eq!(moved.service_ids, vec![colour.id]);

    Ok(())
}

/// Tests that an appointment does not conflict with its own old window.
///
/// Expected: Ok when shifting 10:00-10:30 to 10:15-10:45
#[tokio::test]
async fn reschedule_ignores_own_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let existing = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    let moved = appointments
        .update(
            existing.id,
            UpdateAppointmentParam {
                start_time: Some("10:15 AM".to_string()),
                ..Default::default()
            },
            now(),
        )
        .await?;

    assert_eq!(moved.start_time, at(10, 15));
    assert_eq!(moved.end_time, at(10, 45));

    Ok(())
}

/// Tests moving an appointment onto another pending appointment.
///
/// Expected: Err(BookingErr(SlotTaken)) and the stored appointment unchanged
#[tokio::test]
async fn reschedule_onto_other_booking_conflicts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    appointments
        .create(booking(customer.id, vec![service.id], "11:00 AM"), now())
        .await?;
    let existing = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    let result = appointments
        .update(
            existing.id,
            UpdateAppointmentParam {
                start_time: Some("10:45 AM".to_string()),
                ..Default::default()
            },
            now(),
        )
        .await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::SlotTaken { .. }))
    ));

    let stored = appointments.get(existing.id).await?;
    assert_eq!(stored.start_time, at(10, 0));

    Ok(())
}

/// Tests replacing the services of an appointment.
///
/// Expected: Ok with the new service set and a window of the new total length
#[tokio::test]
async fn service_change_recomputes_length() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, staff, cut) = factory::helpers::create_salon_with_service(db).await?;
    let beard = factory::service::ServiceFactory::new(db, staff.id)
        .duration(15)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let existing = appointments
        .create(booking(customer.id, vec![cut.id], "10:00 AM"), now())
        .await?;

    let updated = appointments
        .update(
            existing.id,
            UpdateAppointmentParam {
                service_ids: Some(vec![cut.id, beard.id]),
                ..Default::default()
            },
            now(),
        )
        .await?;

    let mut service_ids = updated.service_ids.clone();
    service_ids.sort();
    assert_eq!(service_ids, vec![cut.id, beard.id]);
    assert_eq!(updated.end_time, at(10, 45));

    Ok(())
}

/// Tests rescheduling into the past.
///
/// Expected: Err(BookingErr(PastStartTime))
#[tokio::test]
async fn reschedule_into_past_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let existing = appointments
        .create(booking(customer.id, vec![service.id], "03:00 PM"), now())
        .await?;

    let result = appointments
        .update(
            existing.id,
            UpdateAppointmentParam {
                start_time: Some("09:00 AM".to_string()),
                ..Default::default()
            },
            at(12, 0),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::PastStartTime))
    ));

    Ok(())
}

/// Tests changing the status without transition rules.
///
/// Expected: Ok with CANCELLED, after which the window is bookable again
#[tokio::test]
async fn cancelled_appointment_frees_its_window() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let existing = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    let cancelled = appointments
        .update_status(existing.id, AppointmentStatus::Cancelled)
        .await?;
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);

    appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    Ok(())
}
