//! Plan store: repository abstraction plus the service handlers call into.

pub mod repository;
pub mod service;

pub use service::PlanService;
