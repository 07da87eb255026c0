pub mod table;
pub mod theme;
pub mod views;
