pub mod assets;
pub mod catalog;
pub mod config;
pub mod embed;
pub mod errors;
pub mod models;
pub mod normalizer;
pub mod player;
pub mod sources;
pub mod utils;
pub mod web;
