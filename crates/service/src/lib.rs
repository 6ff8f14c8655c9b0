//! Service layer providing the plan store on top of models.
//! - `db` holds the SeaORM queries and decodes rows at the store boundary.
//! - `plan` exposes the repository abstraction and the `PlanService` used by handlers.

pub mod errors;
pub mod db;
pub mod plan;
#[cfg(test)]
pub mod test_support;
