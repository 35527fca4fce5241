//! Core library for the HomeQuest residential property marketplace: the
//! property search engine, listing catalog and lifecycle, the authentication
//! boundary, and the service's configuration and telemetry plumbing.

pub mod config;
pub mod error;
pub mod marketplace;
pub mod telemetry;
