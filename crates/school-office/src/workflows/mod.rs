pub mod admissions;
pub mod backoffice;
