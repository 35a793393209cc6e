//! The Infosweb CLI client library.
//!
//! A thin client for the Infosweb user management API: it acquires OAuth2
//! client-credentials tokens and activates or deactivates user accounts.
//!
//! # Modules
//!
//! - `infosweb_api`: The API client and its error type
//! - `auth`: Client credentials and the token endpoint
//! - `configuration`: Layered settings resolution and the optional config file
//! - `http_utils`: Shared HTTP client wrapper
//! - `model`: Tokens, operations and response payloads
//! - `format`: JSON and CSV output
//! - `commands`, `actions`, `cli`: The command-line surface

pub mod actions;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod configuration;
pub mod error;
pub mod exit_codes;
pub mod format;
pub mod http_utils;
pub mod infosweb_api;
pub mod model;
