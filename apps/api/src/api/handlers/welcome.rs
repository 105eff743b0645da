use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};

use crate::api::state::AppState;
use crate::infrastructure::templates::Welcome;

/// Name shown when the caller does not give one
pub const DEFAULT_NAME: &str = "Anonymous";

/// Raw `key=value` pairs, repeated keys allowed
pub type FormPairs = Vec<(String, String)>;

/// Render the welcome page
///
/// GET /?name=<name>
/// POST / (form body `name=<name>`)
///
/// A form body takes precedence over the query string. When `name` is
/// repeated the first value is used.
pub async fn welcome(
    State(state): State<AppState>,
    Query(query): Query<FormPairs>,
    form: Option<Form<FormPairs>>,
) -> Html<String> {
    let body = form.map(|Form(pairs)| pairs).unwrap_or_default();

    let welcome = Welcome {
        name: name_param(body.iter().chain(query.iter())),
        time: chrono::Local::now().format("%b %e %H:%M:%S").to_string(),
    };

    Html(state.welcome.render(&welcome))
}

/// First `name` value, or the default when it is absent or empty
fn name_param<'a>(mut pairs: impl Iterator<Item = &'a (String, String)>) -> String {
    pairs
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}
