//! In-memory stand-ins for the store and the clock, used by unit and router tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::core::clock::Clock;
use crate::core::database::DatabaseCheck;
use crate::features::appointments::models::{Appointment, NewAppointment};
use crate::features::appointments::repositories::AppointmentRepository;
use crate::features::case_studies::models::CaseStudy;
use crate::features::case_studies::repositories::CaseStudyRepository;
use crate::features::products::models::Product;
use crate::features::products::repositories::ProductRepository;

fn store_down() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

fn seeded_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
}

// =============================================================================
// CLOCK
// =============================================================================

/// Clock that only moves when told to
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

// =============================================================================
// APPOINTMENTS
// =============================================================================

#[derive(Default)]
pub struct InMemoryAppointmentRepository {
    rows: Mutex<Vec<Appointment>>,
    next_id: AtomicI64,
    fail_writes: bool,
}

impl InMemoryAppointmentRepository {
    /// Repository whose inserts always fail, as if the transaction aborted
    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl AppointmentRepository for InMemoryAppointmentRepository {
    async fn insert(&self, appointment: &NewAppointment) -> Result<Appointment, sqlx::Error> {
        if self.fail_writes {
            return Err(store_down());
        }

        let row = Appointment {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            name: appointment.name.clone(),
            phone: appointment.phone.clone(),
            service_type: appointment.service_type.clone(),
            preferred_date: appointment.preferred_date,
            preferred_time: appointment.preferred_time.clone(),
            description: appointment.description.clone(),
            address: appointment.address.clone(),
            status: appointment.status.clone(),
            created_at: appointment.created_at,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list_newest_first(&self) -> Result<Vec<Appointment>, sqlx::Error> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });
        Ok(rows)
    }
}

// =============================================================================
// CATALOG
// =============================================================================

pub fn product(id: i64, name: &str, category: Option<&str>) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: Some(format!("{} description", name)),
        category: category.map(str::to_string),
        price: Some(Decimal::new(2500, 2)),
        image_url: Some(format!("/images/products/{}.jpg", id)),
        created_at: seeded_at(),
    }
}

pub fn case_study(id: i64, title: &str, category: Option<&str>) -> CaseStudy {
    CaseStudy {
        id,
        title: title.to_string(),
        description: None,
        client: Some("Acme Ltd".to_string()),
        category: category.map(str::to_string),
        image_url: None,
        created_at: seeded_at(),
    }
}

fn matches_category(row_category: Option<&str>, filter: Option<&str>) -> bool {
    match filter {
        Some(wanted) => row_category == Some(wanted),
        None => true,
    }
}

#[derive(Default)]
pub struct InMemoryProductRepository {
    rows: Vec<Product>,
    fail: bool,
}

impl InMemoryProductRepository {
    pub fn new(rows: Vec<Product>) -> Self {
        Self { rows, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self, category: Option<&str>) -> Result<Vec<Product>, sqlx::Error> {
        if self.fail {
            return Err(store_down());
        }
        Ok(self
            .rows
            .iter()
            .filter(|p| matches_category(p.category.as_deref(), category))
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryCaseStudyRepository {
    rows: Vec<CaseStudy>,
    fail: bool,
}

impl InMemoryCaseStudyRepository {
    pub fn new(rows: Vec<CaseStudy>) -> Self {
        Self { rows, fail: false }
    }

    pub fn failing() -> Self {
        Self {
            rows: Vec::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl CaseStudyRepository for InMemoryCaseStudyRepository {
    async fn list(&self, category: Option<&str>) -> Result<Vec<CaseStudy>, sqlx::Error> {
        if self.fail {
            return Err(store_down());
        }
        Ok(self
            .rows
            .iter()
            .filter(|c| matches_category(c.category.as_deref(), category))
            .cloned()
            .collect())
    }
}

// =============================================================================
// HEALTH
// =============================================================================

pub struct StubDatabase {
    healthy: bool,
}

impl StubDatabase {
    pub fn up() -> Self {
        Self { healthy: true }
    }

    pub fn down() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl DatabaseCheck for StubDatabase {
    async fn ping(&self) -> Result<(), sqlx::Error> {
        if self.healthy {
            Ok(())
        } else {
            Err(store_down())
        }
    }
}
