use super::*;

/// Tests counting pending appointments that reference a service.
///
/// Expected: Ok(1) for the service with one PENDING and one COMPLETED booking
#[tokio::test]
async fn counts_only_pending_references() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (salon, staff, service) = factory::helpers::create_salon_with_service(db).await?;
    let unused = factory::create_service(db, staff.id).await?;
    let customer = factory::create_customer(db).await?;

    factory::appointment::AppointmentFactory::new(db, salon.id, customer.id)
        .window(at(10, 0), at(10, 30))
        .services(vec![service.id])
        .build()
        .await?;
    factory::appointment::AppointmentFactory::new(db, salon.id, customer.id)
        .window(at(11, 0), at(11, 30))
        .status("COMPLETED")
        .services(vec![service.id])
        .build()
        .await?;

    let repo = AppointmentRepository::new(db);
    assert_eq!(repo.count_pending_with_service(service.id).await?, 1);
    assert_eq!(repo.count_pending_with_service(unused.id).await?, 0);

    Ok(())
}
