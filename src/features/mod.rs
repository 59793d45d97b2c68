pub mod appointments;
pub mod case_studies;
pub mod health;
pub mod products;
pub mod site;
