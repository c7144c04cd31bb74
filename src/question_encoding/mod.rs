pub mod config;
pub mod data;
pub mod tokenize;
pub mod vectorize;
