use super::*;

/// Tests changing a customer's mobile to one used by another customer.
///
/// Expected: Err(BadRequest) for the other customer's number, Ok for a fresh one
/// or the customer's own number
#[tokio::test]
async fn update_rejects_mobile_of_other_customer() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_booking_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::customer::CustomerFactory::new(db)
        .mobile("9000000101")
        .build()
        .await?;
    let second = factory::customer::CustomerFactory::new(db)
        .mobile("9000000102")
        .build()
        .await?;

    let customers = CustomerService::new(db);
    let clash = customers
        .update(
            second.id,
            UpdateCustomerParam {
                mobile: Some("9000000101".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(
        clash,
        Err(AppError::BadRequest(msg)) if msg == "Mobile number already in use by another user"
    ));

    let own = customers
        .update(
            first.id,
            UpdateCustomerParam {
                mobile: Some("9000000101".to_string()),
                first_name: Some("Asha".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(own.first_name, "Asha");

    let moved = customers
        .update(
            second.id,
            UpdateCustomerParam {
                mobile: Some("9000000199".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(moved.mobile, "9000000199");

    Ok(())
}
