pub use super::appointment::Entity as Appointment;
pub use super::appointment_service::Entity as AppointmentService;
pub use super::customer::Entity as Customer;
pub use super::leave::Entity as Leave;
pub use super::salon::Entity as Salon;
pub use super::salon_user::Entity as SalonUser;
pub use super::service::Entity as Service;
