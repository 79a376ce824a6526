//! HTTP request handlers organized by resource

pub mod embed;
pub mod health;
pub mod portfolio;
