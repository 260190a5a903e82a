pub mod config;
pub mod login;
pub mod register;
pub mod token;
