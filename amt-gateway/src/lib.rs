//! AMT Genova gateway.
//!
//! Scrapes the Genoa transit operator's stop arrival boards and line
//! timetables and serves them as JSON.

pub mod config;
pub mod domain;
pub mod extract;
pub mod upstream;
pub mod web;
