// HTTP handlers, one module per resource

pub mod balances;
pub mod customers;
pub mod health;
pub mod welcome;
