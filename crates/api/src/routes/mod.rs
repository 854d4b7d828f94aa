//! Route Handlers

pub mod classify;
pub mod quote;
