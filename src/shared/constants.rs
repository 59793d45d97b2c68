/// Status every appointment is created with
pub const APPOINTMENT_STATUS_PENDING: &str = "pending";

/// Required length of an appointment phone number
pub const PHONE_LENGTH: usize = 11;

/// Accepted `preferred_date` layout
pub const PREFERRED_DATE_FORMAT: &str = "%Y-%m-%d";
