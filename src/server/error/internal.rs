use thiserror::Error;

/// Internal issues with stored data indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value outside its known set
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' in column {column}")]
    UnknownEnumValue {
        /// Column holding the value, e.g. `appointment.status`
        column: &'static str,
        /// The stored value that failed to parse
        value: String,
    },

    /// An HOURS leave row is missing its start or end time
    #[error("Leave {id} of type HOURS has no start or end time")]
    IncompleteHoursLeave { id: i32 },

    /// A salon row carries a timezone that is not a known IANA zone
    #[error("Salon {salon_id} has invalid timezone '{value}'")]
    InvalidSalonTimezone { salon_id: i32, value: String },
}
