pub mod dog;
pub mod input;
