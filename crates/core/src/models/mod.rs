pub mod balance;
pub mod geometry;
pub mod project;
pub mod series;
pub mod settings;
