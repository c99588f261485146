//! Colorbook - printable line art with matched color palettes
//!
//! Command-line front end for the `lineart` crate: decodes photos, writes
//! line-art PNGs, and reports dominant colors matched against a reference
//! palette. This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
