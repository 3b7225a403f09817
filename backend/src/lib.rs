//! Server side of the Foodbook search: API client, server functions and extra routes.

pub mod config;
pub mod auth;
pub mod foodbook_utils;
pub mod api;
pub mod server_extra;
