use super::*;

/// Tests two overlapping bookings submitted at the same time.
///
/// Both requests pass the lock-free checks; the per-(salon, date) lock makes
/// the second wait until the first has committed, so its overlap check sees
/// the new appointment.
///
/// Expected: exactly one Ok and one Err(BookingErr(SlotTaken)), one stored appointment
#[tokio::test]
async fn concurrent_overlapping_bookings_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let (first, second) = tokio::join!(
        appointments.create(booking(customer.id, vec![service.id], "10:00 AM"), now()),
        appointments.create(booking(customer.id, vec![service.id], "10:15 AM"), now()),
    );

    let outcomes = [first, second];
    let admitted = outcomes.iter().filter(|result| result.is_ok()).count();
    let conflicts = outcomes
        .iter()
        .filter(|result| {
            matches!(
                result,
                Err(AppError::BookingErr(BookingError::SlotTaken { .. }))
            )
        })
        .count();

    assert_eq!(admitted, 1);
    assert_eq!(conflicts, 1);

    let stored = appointments
        .list(crate::server::model::appointment::AppointmentFilter {
            status: None,
            customer_id: None,
            page: 1,
            limit: 10,
        })
        .await?;
    assert_eq!(stored.total, 1);

    Ok(())
}

/// Tests concurrent bookings on different salons.
///
/// Expected: both Ok
#[tokio::test]
async fn concurrent_bookings_on_different_salons_both_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, first_service, customer) =
        factory::helpers::create_booking_dependencies(db).await?;
    let (_, _, second_service) = factory::helpers::create_salon_with_service(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let (first, second) = tokio::join!(
        appointments.create(
            booking(customer.id, vec![first_service.id], "10:00 AM"),
            now()
        ),
        appointments.create(
            booking(customer.id, vec![second_service.id], "10:00 AM"),
            now()
        ),
    );

    assert!(first.is_ok());
    assert!(second.is_ok());

    Ok(())
}
