use anyhow::{anyhow, Result};
use std::fmt;

/// Side of the order book
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Bid,
    Ask,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bid => write!(f, "bid"),
            Side::Ask => write!(f, "ask"),
        }
    }
}

/// Exchanges the depth report can pull order books from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Exchange {
    Bittrex,
}

impl Exchange {
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bittrex" => Ok(Exchange::Bittrex),
            _ => Err(anyhow!("Unknown exchange: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Exchange::Bittrex => "bittrex",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
