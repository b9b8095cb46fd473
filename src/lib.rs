pub mod cli;
pub mod clock;
pub mod config;
pub mod errors;
pub mod generator;
pub mod logging;
pub mod store;
pub mod table;
