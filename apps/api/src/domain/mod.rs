// Domain layer module exports
// Domain types and the ports implemented by infrastructure

pub mod balance;
pub mod customer;
pub mod repositories;
