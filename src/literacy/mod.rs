pub mod chat;
pub mod intro;
pub mod quiz;
pub mod tools;
