pub mod catalog;
pub mod chart;
pub mod models;
pub mod persistence;
pub mod pipeline;
pub mod price;
pub mod sqlite;
