mod case_study;

pub use case_study::CaseStudy;
