pub mod reorder;
pub mod strategy;
