// src/lib.rs

//! City facts scraper library
//!
//! Fetches city pages from Wikipedia and extracts population and
//! coordinates into [`models::CityRecord`]s.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod services;
pub mod storage;
pub mod utils;
