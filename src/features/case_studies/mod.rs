//! Case study portfolio listing.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/cases?category=` | List case studies, optionally by exact category |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCaseStudyRepository;
pub use services::CaseStudyService;
