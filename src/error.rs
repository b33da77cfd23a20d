// ============================================================================
// ERRORES DE API - Taxonomía única para todas las llamadas HTTP
// ============================================================================
// Se capturan en el borde de la acción (handler del gesto del usuario) y se
// convierten en UN toast. Nunca se propagan más allá.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// La petición no pudo completarse (red caída, CORS, DNS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Status no-2xx, con mensaje del servidor si el cuerpo lo traía
    #[error("{}", http_display(.status, .message))]
    Http { status: u16, message: Option<String> },

    /// Cuerpo que no es JSON o no tiene la forma esperada
    #[error("Invalid response: {0}")]
    Parse(String),

    /// Rechazado en el cliente antes de enviar nada
    #[error("{0}")]
    Validation(String),
}

fn http_display(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("HTTP {}", status),
    }
}

impl ApiError {
    /// Construye un `Http` extrayendo `message` (o `error`) de un cuerpo JSON
    pub fn from_status(status: u16, body: &str) -> Self {
        ApiError::Http {
            status,
            message: extract_error_message(body),
        }
    }

    /// Mensaje para el usuario; `fallback` sustituye al "HTTP nnn" genérico
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: None, .. } => fallback.to_string(),
            other => other.to_string(),
        }
    }
}

/// Extracción best-effort del mensaje de error de un cuerpo JSON
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|field| value.get(*field).and_then(|v| v.as_str()))
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_wins_over_error_field() {
        let body = r#"{"error":"Business Rule Violation","message":"Maximum 5 keyboards per customer."}"#;
        assert_eq!(
            extract_error_message(body).as_deref(),
            Some("Maximum 5 keyboards per customer.")
        );
    }

    #[test]
    fn error_field_used_when_message_missing() {
        assert_eq!(
            extract_error_message(r#"{"error":"Empty Cart"}"#).as_deref(),
            Some("Empty Cart")
        );
    }

    #[test]
    fn non_json_body_has_no_message() {
        assert_eq!(extract_error_message("<html>502</html>"), None);
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message(r#"{"message":"  "}"#), None);
    }

    #[test]
    fn user_message_uses_fallback_for_bare_status() {
        let bare = ApiError::from_status(500, "");
        assert_eq!(bare.user_message("Failed to add to cart"), "Failed to add to cart");

        let with_body = ApiError::from_status(400, r#"{"message":"Nope"}"#);
        assert_eq!(with_body.user_message("Failed to add to cart"), "Nope");
        assert_eq!(with_body.to_string(), "Nope");
    }

    #[test]
    fn display_of_bare_http_error_names_status() {
        let err = ApiError::Http { status: 503, message: None };
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
