pub mod edit;
pub mod open;
pub mod parse;
