use std::sync::Arc;

use crate::domain::balance::BalanceLookup;
use crate::domain::repositories::CustomerRepository;
use crate::infrastructure::templates::WelcomeTemplate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Customer store, in-memory or MySQL
    pub customers: Arc<dyn CustomerRepository>,
    /// External balance API
    pub balances: Arc<dyn BalanceLookup>,
    pub welcome: Arc<WelcomeTemplate>,
}

impl AppState {
    pub fn new(
        customers: Arc<dyn CustomerRepository>,
        balances: Arc<dyn BalanceLookup>,
        welcome: WelcomeTemplate,
    ) -> Self {
        Self {
            customers,
            balances,
            welcome: Arc::new(welcome),
        }
    }
}
