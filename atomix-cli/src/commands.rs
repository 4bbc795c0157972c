pub mod calendar;
pub mod parse;
pub mod tokens;
