pub mod plan_store;
