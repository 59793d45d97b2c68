mod case_study_repository;

pub use case_study_repository::{CaseStudyRepository, PgCaseStudyRepository};
