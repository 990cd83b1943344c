pub mod client;
pub mod models;
pub mod parsers;

pub use client::BittrexClient;
pub use parsers::BittrexParser;
