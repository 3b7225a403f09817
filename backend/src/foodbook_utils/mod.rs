//! Foodbook API access and response validation.

pub mod foodbook_client;
pub mod contract_checks;
