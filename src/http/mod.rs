pub mod client;

pub use client::{HttpClient, HttpResponse, Transport};
