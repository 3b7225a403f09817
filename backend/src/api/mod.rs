//! Entry points called by the frontend server functions.

pub mod search;
