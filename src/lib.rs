//! jsonstub - static JSON over HTTP-shaped TCP
//!
//! Core library: properties mapping, request classification, resource
//! resolution and response construction.

pub mod config;
pub mod error;
pub mod http;
pub mod properties;
pub mod resource;
pub mod server;
