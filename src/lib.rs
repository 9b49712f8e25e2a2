pub mod app;
pub mod charts;
pub mod components;
pub mod dashboard;
pub mod error;
pub mod event;
pub mod metrics;
pub mod scoring;
pub mod telemetry;
pub mod theme;
pub mod tui;
