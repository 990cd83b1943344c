pub mod coinmarketcap;
pub mod exchange;
