use super::*;
use crate::server::{
    data::service::ServiceRepository, service::appointment::ensure_services_active,
};
use sea_orm::TransactionTrait;

/// Tests that a service used by a pending appointment cannot be deleted.
///
/// Expected: Err(BadRequest) while pending, Ok once the appointment is completed
#[tokio::test]
async fn blocks_delete_while_pending() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let appointment = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    let catalog = CatalogService::new(db);
    let blocked = catalog.delete(service.id, now()).await;
    match blocked {
        Err(AppError::BadRequest(message)) => assert_eq!(
            message,
            "Cannot delete service because it is associated with a pending appointment."
        ),
        other => panic!("expected bad request, got {:?}", other),
    }

    appointments
        .update_status(appointment.id, AppointmentStatus::Completed)
        .await?;
    catalog.delete(service.id, now()).await?;

    assert!(matches!(
        catalog.get(service.id).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        catalog.delete(service.id, now()).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Tests that a deleted service can no longer be booked.
///
/// Expected: Err(BookingErr(InvalidServices)) naming the deleted service
#[tokio::test]
async fn deleted_service_cannot_be_booked() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let locks = BookingLocks::new();

    let (_, service, customer) = factory::helpers::create_booking_dependencies(db).await?;
    CatalogService::new(db).delete(service.id, now()).await?;

    let appointments = AppointmentService::new(db, &locks, chrono_tz::UTC);
    let result = appointments
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await;

    match result {
        Err(AppError::BookingErr(BookingError::InvalidServices(ids))) => {
            assert_eq!(ids, vec![service.id])
        }
        other => panic!("expected invalid services, got {:?}", other),
    }

    Ok(())
}

/// Tests that a refused delete is rolled back.
///
/// Expected: Err(BadRequest), and the service stays active and bookable
#[tokio::test]
async fn refused_delete_keeps_service_active() -> Result<(), AppError> {
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
        .create(booking(customer.id, vec![service.id], "10:00 AM"), now())
        .await?;

    let catalog = CatalogService::new(db);
    assert!(matches!(
        catalog.delete(service.id, now()).await,
        Err(AppError::BadRequest(_))
    ));

    assert_eq!(catalog.get(service.id).await?.id, service.id);
    appointments
        .create(booking(customer.id, vec![service.id], "11:00 AM"), now())
        .await?;

    Ok(())
}

/// Tests the booking-side re-check against a delete written on the same transaction.
///
/// Expected: Err(BookingErr(InvalidServices)) naming only the deleted service
#[tokio::test]
async fn booking_recheck_sees_delete_in_transaction() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, staff, deleted) = factory::helpers::create_salon_with_service(db).await?;
    let kept = factory::create_service(db, staff.id).await?;

    let txn = db.begin().await?;
    ensure_services_active(&txn, &[deleted.id, kept.id]).await?;

    ServiceRepository::new(&txn)
        .soft_delete(deleted.id, now())
        .await?;
    let result = ensure_services_active(&txn, &[deleted.id, kept.id]).await;
    match result {
        Err(AppError::BookingErr(BookingError::InvalidServices(ids))) => {
            assert_eq!(ids, vec![deleted.id])
        }
        other => panic!("expected invalid services, got {:?}", other),
    }
    txn.rollback().await?;

    Ok(())
}
