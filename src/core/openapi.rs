use utoipa::{Modify, OpenApi};

use crate::features::appointments::{dtos as appointments_dtos, handlers as appointments_handlers};
use crate::features::case_studies::{dtos as case_studies_dtos, handlers as case_studies_handlers};
use crate::features::health::{dtos as health_dtos, handlers as health_handlers};
use crate::features::products::{dtos as products_dtos, handlers as products_handlers};
use crate::shared::types::Meta;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Products
        products_handlers::list_products,
        // Case studies
        case_studies_handlers::list_case_studies,
        // Appointments
        appointments_handlers::create_appointment,
        appointments_handlers::list_appointments,
        // Health
        health_handlers::health_check,
    ),
    components(
        schemas(
            // Shared
            Meta,
            // Products
            products_dtos::ProductResponseDto,
            // Case studies
            case_studies_dtos::CaseStudyResponseDto,
            // Appointments
            appointments_dtos::CreateAppointmentDto,
            appointments_dtos::AppointmentResponseDto,
            // Health
            health_dtos::HealthResponseDto,
        )
    ),
    tags(
        (name = "products", description = "Product catalog (public)"),
        (name = "cases", description = "Case studies (public)"),
        (name = "appointments", description = "Appointment requests"),
        (name = "health", description = "Liveness check"),
    ),
    info(
        title = "Servicedesk API",
        version = "0.1.0",
        description = "Products, case studies and appointment bookings",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
