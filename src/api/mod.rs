pub mod handlers;
pub mod models;
pub mod orakel_client;
pub mod parsers;
pub mod routes;

pub use orakel_client::{FetchOutcome, OrakelClient};
