pub mod context;
pub mod strategy;
