pub mod api;
pub mod products;
