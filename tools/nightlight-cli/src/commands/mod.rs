pub mod compose;
pub mod demo;
