use super::*;

/// Tests booking a free slot.
///
/// Expected: Ok with a PENDING appointment of the service's length at the salon
#[tokio::test]
async fn books_free_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (salon, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let appointment = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    assert_eq!(appointment.salon_id, salon.id);
    assert_eq!(appointment.status, AppointmentStatus::Pending);
    assert_eq!(appointment.start_time, at(10, 0));
    assert_eq!(appointment.end_time, at(10, 30));
    assert_eq!(appointment.service_ids, vec![service.id]);

    Ok(())
}

/// Tests that a missing or blank start label is rejected first.
///
/// Expected: Err(BookingErr(MissingStartTime)) even though the services are invalid
#[tokio::test]
async fn requires_start_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    let mut missing = booking(1, vec![999], "10:00 AM");
    missing.start_time = None;
    let result = appointments.create(missing, now()).await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::MissingStartTime))
    ));

    let blank = booking(1, vec![999], "  ");
    let result = appointments.create(blank, now()).await;
    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::MissingStartTime))
    ));

    Ok(())
}

/// Tests that a label outside `hh:mm AM/PM` is a bad request.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_malformed_start_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    for label in ["14:00", "10:00AM", "13:00 PM", "10:60 AM"] {
        let result = appointments
            .create(booking(customer.id, vec![service.id], label), now())
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "{}", label);
    }

    Ok(())
}

/// Tests that a start at or before the current instant is rejected.
///
/// Expected: Err(BookingErr(PastStartTime)) for an earlier start and for a start equal to now
#[tokio::test]
async fn rejects_start_not_after_now() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    let earlier = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), at(12, 0))
        .await;
    assert!(matches!(
        earlier,
        Err(AppError::BookingErr(BookingError::PastStartTime))
    ));

    let exactly_now = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), at(10, 0))
        .await;
    assert!(matches!(
        exactly_now,
        Err(AppError::BookingErr(BookingError::PastStartTime))
    ));

    Ok(())
}

/// Tests that unknown and soft-deleted services are reported by ID.
///
/// Expected: Err(BookingErr(InvalidServices)) listing the deleted and unknown IDs
#[tokio::test]
async fn reports_invalid_service_ids() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, staff, service) = factory::helpers::create_salon_with_service(db).await?;
    let retired = factory::service::ServiceFactory::new(db, staff.id)
        .deleted_at(at(7, 0))
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let result = appointments
        .create(
            booking(customer.id, vec![service.id, retired.id, 999], "10:00 AM"),
            now(),
        )
        .await;

    match result {
        Err(AppError::BookingErr(BookingError::InvalidServices(ids))) => {
            assert_eq!(ids, vec![retired.id, 999]);
        }
        other => panic!("expected invalid services, got {:?}", other),
    }

    Ok(())
}

/// Tests booking for a customer that does not exist.
///
/// Expected: Err(NotFound) naming the customer ID
#[tokio::test]
async fn rejects_unknown_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, _, service) = factory::helpers::create_salon_with_service(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let result = appointments
        .create(booking(77, vec![service.id], "10:00 AM"), now())
        .await;

    match result {
        Err(AppError::NotFound(message)) => assert_eq!(message, "Customer with ID 77 not found"),
        other => panic!("expected not found, got {:?}", other),
    }

    Ok(())
}

/// Tests combining services from two salons in one booking.
///
/// Expected: Err(BookingErr(MultipleSalons))
#[tokio::test]
async fn rejects_services_of_two_salons() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, _, first) = factory::helpers::create_salon_with_service(db).await?;
    let (_, _, second) = factory::helpers::create_salon_with_service(db).await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let result = appointments
        .create(booking(customer.id, vec![first.id, second.id], "10:00 AM"), now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::MultipleSalons))
    ));

    Ok(())
}

/// Tests a booking that would run past closing time.
///
/// A 45 minute service at 11:00 in a salon closing at 11:30 is rejected with a
/// message naming the closing time, as is a start exactly at closing.
///
/// Expected: Err(BookingErr(AfterClosing)) naming "11:30 am"
#[tokio::test]
async fn rejects_booking_past_closing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let salon = factory::salon::SalonFactory::new(db)
        .hours(time(9, 0), time(11, 30))
        .build()
        .await?;
    let staff = factory::create_salon_user(db, salon.id).await?;
    let service = factory::service::ServiceFactory::new(db, staff.id)
        .duration(45)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    for label in ["11:00 AM", "11:30 AM"] {
        let result = appointments
            .create(booking(customer.id, vec![service.id], label), now())
            .await;
        match result {
            Err(AppError::BookingErr(err @ BookingError::AfterClosing { .. })) => {
                assert_eq!(
                    err.to_string(),
                    "Salon closes at 11:30 am. Appointment not allowed after that."
                );
            }
            other => panic!("expected closing rejection for {}, got {:?}", label, other),
        }
    }

    let fits = appointments
        .create(booking(customer.id, vec![service.id], "10:45 AM"), now())
        .await?;
    assert_eq!(fits.end_time, at(11, 30));

    Ok(())
}

/// Tests that a booking cannot start before the salon opens.
///
/// Expected: Err(BookingErr(BeforeOpening)) naming "09:00 am" for 08:30, Ok at 09:00
#[tokio::test]
async fn rejects_booking_before_opening() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    let early = appointments
        .create(booking(customer.id, vec![service.id], "08:30 AM"), at(6, 0))
        .await;
    match early {
        Err(AppError::BookingErr(err @ BookingError::BeforeOpening { .. })) => {
            assert_eq!(
                err.to_string(),
                "Salon opens at 09:00 am. Appointment not allowed before that."
            );
        }
        other => panic!("expected opening rejection, got {:?}", other),
    }

    let first = appointments
        .create(booking(customer.id, vec![service.id], "09:00 AM"), at(6, 0))
        .await?;
    assert_eq!(first.start_time, at(9, 0));

    Ok(())
}

/// Tests a salon closing at midnight.
///
/// A booking ending exactly at midnight fits; a "12:00 AM" label means the start
/// of the next day, which is the closing instant itself.
///
/// Expected: Ok for 11:30 PM, Err(BookingErr(AfterClosing)) for 12:00 AM
#[tokio::test]
async fn midnight_close_allows_last_slot_of_day() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let salon = factory::salon::SalonFactory::new(db)
        .hours(time(18, 0), time(0, 0))
        .build()
        .await?;
    let staff = factory::create_salon_user(db, salon.id).await?;
    let service = factory::create_service(db, staff.id).await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    let late = appointments
        .create(booking(customer.id, vec![service.id], "11:30 PM"), now())
        .await?;
    assert_eq!(late.end_time, at(0, 0) + Duration::days(1));

    let midnight = appointments
        .create(booking(customer.id, vec![service.id], "12:00 AM"), now())
        .await;
    assert!(matches!(
        midnight,
        Err(AppError::BookingErr(BookingError::AfterClosing { .. }))
    ));

    Ok(())
}

/// Tests a salon without a closing time.
///
/// Expected: Err(BookingErr(ClosingTimeNotConfigured))
#[tokio::test]
async fn rejects_salon_without_closing_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let salon = factory::salon::SalonFactory::new(db)
        .without_hours()
        .build()
        .await?;
    let staff = factory::create_salon_user(db, salon.id).await?;
    let service = factory::create_service(db, staff.id).await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let result = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await;

    assert!(matches!(
        result,
        Err(AppError::BookingErr(BookingError::ClosingTimeNotConfigured))
    ));

    Ok(())
}

/// Tests two bookings whose services sum to 30 minutes at 14:00 then 14:15.
///
/// Expected: Err(BookingErr(SlotTaken)) for the second, naming "until 02:30 pm"
#[tokio::test]
async fn rejects_overlapping_booking() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, staff, _) = factory::helpers::create_salon_with_service(db).await?;
    let wash = factory::service::ServiceFactory::new(db, staff.id)
        .duration(20)
        .build()
        .await?;
    let dry = factory::service::ServiceFactory::new(db, staff.id)
        .duration(10)
        .build()
        .await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let first = appointments
        .create(booking(customer.id, vec![wash.id, dry.id], "02:00 PM"), now())
        .await?;
    assert_eq!(first.end_time, at(14, 30));

    let second = appointments
        .create(booking(customer.id, vec![wash.id, dry.id], "02:15 PM"), now())
        .await;

    match second {
        Err(AppError::BookingErr(err @ BookingError::SlotTaken { .. })) => {
            assert_eq!(err.status_code(), axum::http::StatusCode::CONFLICT);
            assert!(err.to_string().contains("until 02:30 pm"));
        }
        other => panic!("expected conflict, got {:?}", other),
    }

    Ok(())
}

/// Tests that back-to-back bookings and bookings over cancelled ones are allowed.
///
/// Expected: Ok for 14:30 after 14:00-14:30 and for a slot held only by a CANCELLED appointment
#[tokio::test]
async fn allows_adjacent_and_cancelled_windows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (salon, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    factory::appointment::AppointmentFactory::new(db, salon.id, customer.id)
        .window(at(16, 0), at(16, 30))
        .status("CANCELLED")
        .build()
        .await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    appointments
        .create(booking(customer.id, vec![service.id], "02:00 PM"), now())
        .await?;
    appointments
        .create(booking(customer.id, vec![service.id], "02:30 PM"), now())
        .await?;
    appointments
        .create(booking(customer.id, vec![service.id], "04:00 PM"), now())
        .await?;

    Ok(())
}

/// Tests bookings against DAY and HOURS leaves.
///
/// Expected: Err(ClosedForLeave) on a DAY leave, Err(DuringLeave) inside an HOURS leave
#[tokio::test]
async fn rejects_bookings_during_leave() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (salon, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    factory::create_hours_leave(db, salon.id, test_date(), time(13, 0), time(14, 0)).await?;
    let next_day = test_date() + Duration::days(1);
    factory::create_day_leave(db, salon.id, next_day).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);

    let during = appointments
        .create(booking(customer.id, vec![service.id], "12:45 PM"), now())
        .await;
    assert!(matches!(
        during,
        Err(AppError::BookingErr(BookingError::DuringLeave { .. }))
    ));

    let closed = appointments
        .create(
            CreateAppointmentParam {
                date: next_day,
                ..booking(customer.id, vec![service.id], "10:00 AM")
            },
            now(),
        )
        .await;
    assert!(matches!(
        closed,
        Err(AppError::BookingErr(BookingError::ClosedForLeave))
    ));

    appointments
        .create(booking(customer.id, vec![service.id], "02:00 PM"), now())
        .await?;

    Ok(())
}

/// Tests that an offered slot can be booked and is gone afterwards.
///
/// Expected: Ok booking of the first slot, which the next slot listing no longer offers
#[tokio::test]
async fn offered_slot_can_be_booked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (salon, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    let query = SlotQuery {
        date: Some("2030-01-10".to_string()),
        salon_id: Some(salon.id),
    };

    let availability = AvailabilityService::new(db, chrono_tz::UTC);
    let before = availability.get_slots(query.clone(), now()).await?;
    let offered = before.slots[3];
    let label = offered.start.format("%I:%M %p").to_string();

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let appointment = appointments
        .create(booking(customer.id, vec![service.id], &label), now())
        .await?;
    assert_eq!(appointment.window(), offered);

    let after = availability.get_slots(query, now()).await?;
    assert_eq!(after.slots.len(), before.slots.len() - 1);
    assert!(!after.slots.contains(&offered));

    Ok(())
}

/// Tests that the label is read in the salon's own timezone.
///
/// Expected: Ok with 10:00 AM in Asia/Kolkata stored as 04:30 UTC
#[tokio::test]
async fn reads_label_in_salon_timezone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let salon = factory::salon::SalonFactory::new(db)
        .timezone("Asia/Kolkata")
        .build()
        .await?;
    let staff = factory::create_salon_user(db, salon.id).await?;
    let service = factory::create_service(db, staff.id).await?;
    let customer = factory::create_customer(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let appointment = appointments
        .create(booking(customer.id, vec![service.id], "10:00 am"), at(0, 0))
        .await?;

    assert_eq!(appointment.start_time, at(4, 30));
    assert_eq!(appointment.date, test_date());

    Ok(())
}
