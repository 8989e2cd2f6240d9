use thiserror::Error;

/// Crate-wide error type.
///
/// Network-level failures (DNS, timeout, connection refusal) all surface as
/// `ApiError`; the service does not let us tell them apart and the caller
/// handles them the same way. Variants carry rendered messages rather than
/// source errors so the enum stays `Clone` and can live inside the published
/// view state.
#[derive(Error, Debug, Clone)]
pub enum SondeoError {
    #[error("Validation error: missing {field}")]
    MissingField { field: String },

    #[error("Inference service returned status {status}")]
    ServiceError { status: u16 },

    #[error("Inference request failed: {message}")]
    ApiError { message: String },

    #[error("Configuration error: {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration parsing error: {message}")]
    ConfigParseError { message: String },

    #[error("IO error: {message}")]
    IoError { message: String },
}

pub type Result<T> = std::result::Result<T, SondeoError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Transport,
    Configuration,
    Io,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SondeoError {
    pub fn missing_field(field: &str) -> Self {
        SondeoError::MissingField {
            field: field.to_string(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SondeoError::MissingField { .. } => ErrorCategory::Validation,
            SondeoError::ServiceError { .. } | SondeoError::ApiError { .. } => {
                ErrorCategory::Transport
            }
            SondeoError::InvalidConfigValueError { .. }
            | SondeoError::MissingConfigError { .. }
            | SondeoError::ConfigParseError { .. } => ErrorCategory::Configuration,
            SondeoError::IoError { .. } => ErrorCategory::Io,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Validation => ErrorSeverity::Low,
            ErrorCategory::Transport => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// HTTP status carried by the error, when the exchange completed at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SondeoError::ServiceError { status } => Some(*status),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SondeoError::MissingField { field } if field == "question" => {
                "Escribe una pregunta antes de enviar.".to_string()
            }
            SondeoError::MissingField { .. } => {
                "Selecciona un perfil de encuestado antes de enviar.".to_string()
            }
            SondeoError::ServiceError { status } => format!(
                "El servicio de inferencia respondió con un error (HTTP {}).",
                status
            ),
            SondeoError::ApiError { .. } => {
                "No se pudo contactar al servicio de inferencia.".to_string()
            }
            SondeoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuración inválida en '{}': {}", field, reason)
            }
            SondeoError::MissingConfigError { field } => {
                format!("Falta la configuración requerida '{}'.", field)
            }
            SondeoError::ConfigParseError { .. } => {
                "No se pudo leer el archivo de configuración.".to_string()
            }
            SondeoError::IoError { message } => format!("Error de E/S: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self.category() {
            ErrorCategory::Validation => {
                "Completa el campo faltante y vuelve a enviar la pregunta.".to_string()
            }
            ErrorCategory::Transport => {
                "Verifica que el endpoint esté activo y vuelve a intentarlo.".to_string()
            }
            ErrorCategory::Configuration => {
                "Revisa el endpoint configurado (bandera --endpoint, variable SONDEO_ENDPOINT o archivo TOML).".to_string()
            }
            ErrorCategory::Io => {
                "Verifica que el archivo exista y tenga permisos de lectura.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SondeoError {
    fn from(err: reqwest::Error) -> Self {
        SondeoError::ApiError {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for SondeoError {
    fn from(err: std::io::Error) -> Self {
        SondeoError::IoError {
            message: err.to_string(),
        }
    }
}
