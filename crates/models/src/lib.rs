pub mod errors;
pub mod db;
pub mod document;
pub mod plan;

#[cfg(test)]
mod tests;
