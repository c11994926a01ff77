//! Infrastructure layer (adapters/implementations).
//!
//! Version service clients, notification sinks and on-disk configuration.

pub mod app_config;
pub mod notify;
pub mod version_service;
