pub mod add;
pub mod dispatch;
pub mod filter;
pub mod lexicon;
pub mod parse;
pub mod query;
pub mod schema;
pub mod shared;
