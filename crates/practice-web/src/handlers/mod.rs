//! HTTP handlers for the web interface

pub mod health;
pub mod pages;
