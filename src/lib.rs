//! Cloudinary Connectivity Probe
//!
//! A console smoke test for the hosted media-storage integration: checks that
//! credentials are present, that the provider answers a ping, and that a
//! sample image can be uploaded and deleted again.

pub mod config;
pub mod models;
pub mod probe;
pub mod report;
pub mod services;
