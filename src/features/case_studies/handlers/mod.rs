pub mod case_study_handler;

pub use case_study_handler::{__path_list_case_studies, list_case_studies};
