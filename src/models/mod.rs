pub mod config;
pub mod product;
