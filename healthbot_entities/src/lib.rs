//! `SeaORM` entities for the healthbot MySQL schema.

pub mod diseases;
pub mod precautions;
pub mod unknown_queries;
