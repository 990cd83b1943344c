pub mod coin;
pub mod depth;
pub mod order_book;
pub mod ticker;
