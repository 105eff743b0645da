use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize};

/// Upper bound (exclusive) for generated customer IDs
pub const MAX_GENERATED_ID: u32 = 1_000_000;

/// Customer entity
///
/// Serialized with the keys `ID`, `Name`, `Phone` and `Email`.
///
/// # Invariants
/// - ID is assigned once at creation and never changes
/// - Updates replace name, phone and email only
///
/// # Known gap
/// IDs are random decimal strings in `[0, 1_000_000)` with no collision
/// check. The in-memory store keeps duplicates side by side, the MySQL store
/// rejects the second insert.
///
/// # Example
/// ```
/// use customers_api::domain::customer::{Customer, CustomerFields};
///
/// let customer = Customer::new(CustomerFields {
///     name: "Ada".to_string(),
///     phone: "555-0100".to_string(),
///     email: "ada@example.com".to_string(),
/// });
///
/// assert!(!customer.id.is_empty());
/// assert_eq!(customer.name, "Ada");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Customer {
    #[serde(rename = "ID")]
    pub id: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Mutable customer fields, as sent to create and update
///
/// Decoded from a flat JSON object. Unknown keys are ignored; missing keys
/// and `null` values default to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CustomerFields {
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
}

impl Customer {
    /// Creates a customer with a freshly generated ID
    pub fn new(fields: CustomerFields) -> Self {
        Self::with_id(generate_id(), fields)
    }

    /// Creates a customer with a caller-supplied ID
    pub fn with_id(id: impl Into<String>, fields: CustomerFields) -> Self {
        Self {
            id: id.into(),
            name: fields.name,
            phone: fields.phone,
            email: fields.email,
        }
    }

    /// Replaces name, phone and email, keeping the ID
    pub fn apply(&mut self, fields: CustomerFields) {
        self.name = fields.name;
        self.phone = fields.phone;
        self.email = fields.email;
    }
}

/// Deserializes a string field, treating `null` as an empty string
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Generates a random decimal customer ID in `[0, MAX_GENERATED_ID)`
pub fn generate_id() -> String {
    rand::thread_rng().gen_range(0..MAX_GENERATED_ID).to_string()
}
