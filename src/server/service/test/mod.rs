use crate::server::{
    error::{booking::BookingError, AppError},
    model::{
        appointment::{AppointmentStatus, CreateAppointmentParam, UpdateAppointmentParam},
        availability::SlotQuery,
        customer::{CreateCustomerParam, CustomerFilter, UpdateCustomerParam},
        leave::{CreateLeaveParam, LeaveKind, UpdateLeaveParam},
        salon::{CreateSalonParam, UpdateSalonParam},
        service::{CreateServiceParam, ServiceFilter, UpdateServiceParam},
        staff::{CreateStaffParam, StaffFilter, StaffRole, UpdateStaffParam},
    },
    service::{
        appointment::AppointmentService, availability::AvailabilityService,
        booking_lock::BookingLocks, catalog::CatalogService, customer::CustomerService,
        leave::LeaveService, salon::SalonService, salon::StaffService,
    },
};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory, factory::helpers::time};

mod appointment;
mod catalog;
mod customer;
mod salon;

/// Calendar date every service test books on.
fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 1, 10).unwrap()
}

/// UTC instant on the test date.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2030, 1, 10, hour, minute, 0).unwrap()
}

/// Current instant used by the tests unless a test moves the clock.
fn now() -> DateTime<Utc> {
    at(8, 0)
}

/// Booking request on the test date.
fn booking(customer_id: i32, service_ids: Vec<i32>, start_time: &str) -> CreateAppointmentParam {
    CreateAppointmentParam {
        customer_id,
        service_ids,
        date: test_date(),
        start_time: Some(start_time.to_string()),
        notes: None,
    }
}
