//! portfolio-term library
//!
//! The levkany.com terminal: a small command interpreter over a fixed
//! command table and two entity catalogs. The binary is in src/main.rs.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod effects;
pub mod error;
