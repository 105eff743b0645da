// Welcome page rendering
// Minimal placeholder substitution; values are HTML-escaped

use std::io;
use std::path::Path;

const BUILTIN_WELCOME: &str = include_str!("../../templates/welcome-template.html");

const NAME_PLACEHOLDER: &str = "{{ name }}";
const TIME_PLACEHOLDER: &str = "{{ time }}";

/// Values shown on the welcome page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub name: String,
    pub time: String,
}

/// Welcome page template with `{{ name }}` and `{{ time }}` placeholders
#[derive(Debug, Clone)]
pub struct WelcomeTemplate {
    source: String,
}

impl WelcomeTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Template compiled into the binary
    pub fn builtin() -> Self {
        Self::new(BUILTIN_WELCOME)
    }

    /// Loads the template from `path`, falling back to the built-in copy
    /// when the file does not exist
    pub fn load(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(source) => Ok(Self::new(source)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Welcome template not found, using built-in");
                Ok(Self::builtin())
            }
            Err(e) => Err(e),
        }
    }

    pub fn render(&self, welcome: &Welcome) -> String {
        self.source
            .replace(NAME_PLACEHOLDER, &escape_html(&welcome.name))
            .replace(TIME_PLACEHOLDER, &escape_html(&welcome.time))
    }
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&#34;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn welcome(name: &str) -> Welcome {
        Welcome {
            name: name.to_string(),
            time: "Jan  2 15:04:05".to_string(),
        }
    }

    #[test]
    fn render_substitutes_placeholders() {
        let template = WelcomeTemplate::new("Hi {{ name }} at {{ time }}");

        assert_eq!(template.render(&welcome("Ada")), "Hi Ada at Jan  2 15:04:05");
    }

    #[test]
    fn render_escapes_html() {
        let template = WelcomeTemplate::new("{{ name }}");

        let html = template.render(&welcome("<script>alert('x')</script>"));

        assert_eq!(html, "&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;");
    }

    #[test]
    fn builtin_template_has_placeholders() {
        let html = WelcomeTemplate::builtin().render(&welcome("Anonymous"));

        assert!(html.contains("Welcome Anonymous"));
        assert!(!html.contains(NAME_PLACEHOLDER));
        assert!(!html.contains(TIME_PLACEHOLDER));
    }

    #[test]
    fn load_missing_file_falls_back_to_builtin() {
        let template = WelcomeTemplate::load("does/not/exist.html").unwrap();

        assert!(template.render(&welcome("Ada")).contains("Welcome Ada"));
    }
}
