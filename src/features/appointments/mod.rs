//! Appointment intake and listing.
//!
//! Submissions are validated (required fields, then phone format, then column
//! limits), stamped with the injected clock and written in a single
//! transaction. Every appointment starts out `pending`; nothing in this
//! service changes the status afterwards.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/appointments` | Submit an appointment request |
//! | GET | `/api/appointments` | List appointments, newest first |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgAppointmentRepository;
pub use services::AppointmentService;
