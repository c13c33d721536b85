//! themecheck - Static checks for Chromium theme extension manifests

pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod locator;
pub mod models;
pub mod validation;
