use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistroError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML serialization error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("XML serialization error: {message}")]
    XmlError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: {source}")]
    ValidationError {
        field: String,
        #[source]
        source: FieldError,
    },

    #[error("Terminal I/O error: {0}")]
    TerminalError(#[source] std::io::Error),

    #[error("input closed before the record was complete")]
    InputClosed,

    #[error("interrupted by user")]
    Interrupted,

    #[error("background task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),
}

/// Reason a single field was rejected at entry time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("{}", .0.empty_message())]
    Empty(Field),

    #[error("Debe ingresar un número válido")]
    NotANumber,

    #[error("El número de empleado debe ser positivo")]
    NotPositive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Specialty,
    EmployeeNumber,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "nombre",
            Field::Specialty => "especialidad",
            Field::EmployeeNumber => "numero_empleado",
        }
    }

    fn empty_message(&self) -> &'static str {
        match self {
            Field::Name => "El nombre no puede estar vacío",
            Field::Specialty => "La especialidad no puede estar vacía",
            Field::EmployeeNumber => "El número de empleado no puede estar vacío",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Export,
    Cancellation,
    Unexpected,
}

impl RegistroError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistroError::ValidationError { .. } | RegistroError::ConfigError { .. } => {
                ErrorCategory::Validation
            }
            RegistroError::IoError(_)
            | RegistroError::JsonError(_)
            | RegistroError::YamlError(_)
            | RegistroError::XmlError { .. } => ErrorCategory::Export,
            RegistroError::Interrupted => ErrorCategory::Cancellation,
            RegistroError::TerminalError(_)
            | RegistroError::InputClosed
            | RegistroError::TaskError(_) => ErrorCategory::Unexpected,
        }
    }

    pub fn is_cancellation(&self) -> bool {
        self.category() == ErrorCategory::Cancellation
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistroError::IoError(e) => format!("No se pudo escribir el archivo: {}", e),
            RegistroError::TerminalError(e) => format!("Error de entrada/salida en la terminal: {}", e),
            RegistroError::ConfigError { message } => format!("Configuración inválida: {}", message),
            RegistroError::ValidationError { source, .. } => source.to_string(),
            RegistroError::InputClosed => {
                "La entrada se cerró antes de completar el registro".to_string()
            }
            RegistroError::Interrupted => "Programa interrumpido por el usuario.".to_string(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RegistroError>;
