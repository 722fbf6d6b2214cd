pub mod config;
pub mod criterion;
pub mod scoring;
