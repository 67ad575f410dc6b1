pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod runner;
pub mod scanner;
pub mod workbook;
