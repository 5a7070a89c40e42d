//! Application pages

pub mod dashboard;
pub mod roadmap;
