// Client-side error taxonomy and user-facing translation
use serde::Serialize;
use thiserror::Error;

/// Error raised by the HTTP layer and propagated through every service.
///
/// Three shapes exist: the server answered with a non-success status, the
/// request never got a response, or something unexpected broke locally
/// (body decode, bad URL).
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server responded with an error status. `message` carries the
    /// server-supplied `message` body field when one was present.
    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("(no message)"))]
    Status { status: u16, message: Option<String> },

    /// Request was made but no response arrived (refused, timed out).
    #[error("server unreachable: {0}")]
    Unreachable(String),

    /// Anything else: malformed response body, invalid request URL.
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl ApiError {
    /// Status code of the response, when there was one.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Translate into the stable user-facing shape.
    pub fn user_facing(&self) -> UserFacingError {
        UserFacingError::from_api_error(self)
    }
}

/// Stable `{ status, message }` shape handed to display code. The message
/// is short, localized, and never carries raw error detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserFacingError {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    pub message: String,
}

pub const MSG_UNREACHABLE: &str =
    "Le serveur n'a pas répondu. Veuillez vérifier votre connexion internet.";
pub const MSG_UNEXPECTED: &str = "Une erreur inattendue s'est produite. Veuillez réessayer.";

impl UserFacingError {
    /// Maps an [`ApiError`] to display text. A server-supplied message is
    /// preferred; otherwise statuses 400/401/403/404/409/500 get a fixed
    /// default, and any other status a templated generic.
    pub fn from_api_error(err: &ApiError) -> Self {
        match err {
            ApiError::Status { status, message } => {
                let text = match message {
                    Some(m) if !m.is_empty() => m.clone(),
                    _ => default_status_message(*status),
                };
                Self {
                    status: Some(*status),
                    message: text,
                }
            }
            ApiError::Unreachable(_) => Self {
                status: None,
                message: MSG_UNREACHABLE.to_string(),
            },
            ApiError::Unexpected(_) => Self {
                status: None,
                message: MSG_UNEXPECTED.to_string(),
            },
        }
    }
}

impl std::fmt::Display for UserFacingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn default_status_message(status: u16) -> String {
    match status {
        400 => "Requête invalide. Veuillez vérifier les données saisies".to_string(),
        401 => "Non autorisé. Veuillez vérifier vos identifiants".to_string(),
        403 => "Accès refusé. Vous n'avez pas les permissions nécessaires".to_string(),
        404 => "Ressource introuvable. Veuillez réessayer".to_string(),
        409 => "Conflit détecté. L'action ne peut pas être effectuée".to_string(),
        500 => "Erreur interne du serveur. Veuillez réessayer plus tard".to_string(),
        other => format!("Erreur {}. Veuillez contacter le support", other),
    }
}
