//! Liveness check.
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/health` | Round-trips `SELECT 1` against the database |

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use services::HealthService;
