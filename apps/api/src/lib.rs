//! Customers API Library
//!
//! This library provides the customer CRUD service: the customer domain,
//! its in-memory and MySQL stores, the HTTP handlers and their wiring.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
