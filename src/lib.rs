pub mod app;
pub mod cli;
pub mod config;
pub mod currency;
pub mod dashboard;
pub mod error;
pub mod flash;
pub mod form;
pub mod logging;
pub mod mask;
pub mod nav;
pub mod ui;
pub mod validation;
