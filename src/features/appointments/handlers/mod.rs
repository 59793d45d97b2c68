pub mod appointment_handler;

pub use appointment_handler::{
    __path_create_appointment, __path_list_appointments, create_appointment, list_appointments,
};
