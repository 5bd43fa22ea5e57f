pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod fetch;
pub mod rules;
pub mod services;
pub mod storage;
