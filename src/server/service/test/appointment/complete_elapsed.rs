use super::*;

/// Tests the completion sweep through the service.
///
/// Expected: Ok(1) for the elapsed booking, the running booking stays PENDING
#[tokio::test]
async fn completes_elapsed_appointments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let morning = appointments
        .create(booking(customer.id, vec![service.id], "09:00 AM"), now())
        .await?;
    let noon = appointments
        .create(booking(customer.id, vec![service.id], "12:00 PM"), now())
        .await?;

    assert_eq!(appointments.complete_elapsed(at(12, 10)).await?, 1);

    assert_eq!(
        appointments.get(morning.id).await?.status,
        AppointmentStatus::Completed
    );
    assert_eq!(
        appointments.get(noon.id).await?.status,
        AppointmentStatus::Pending
    );

    Ok(())
}
