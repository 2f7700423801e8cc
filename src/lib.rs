pub mod batch;
pub mod config;
pub mod error;
pub mod particle;
pub mod simulation;

pub mod app;
