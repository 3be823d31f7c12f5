pub mod diagnostics;
pub use diagnostics::DiagnosticMessage;

use std::error::Error as StdError;
use thiserror::Error;

/// Top-level pipeline error, tagged by the phase that failed.
#[derive(Debug, Error)]
pub enum EtlError {
    #[error("configuration failed: {context}")]
    Config {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("extraction failed: {context}")]
    Extract {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("transformation failed: {context}")]
    Transform {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
    #[error("load failed: {context}")]
    Load {
        context: DiagnosticMessage,
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },
}

impl EtlError {
    #[track_caller]
    pub fn config<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = err.to_string();
        EtlError::Config {
            context: DiagnosticMessage::new(message),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn config_msg(message: impl Into<String>) -> Self {
        EtlError::Config {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    #[track_caller]
    pub fn extract<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = err.to_string();
        EtlError::Extract {
            context: DiagnosticMessage::new(message),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn extract_msg(message: impl Into<String>) -> Self {
        EtlError::Extract {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    #[track_caller]
    pub fn transform<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = err.to_string();
        EtlError::Transform {
            context: DiagnosticMessage::new(message),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn transform_msg(message: impl Into<String>) -> Self {
        EtlError::Transform {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }

    #[track_caller]
    pub fn load<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = err.to_string();
        EtlError::Load {
            context: DiagnosticMessage::new(message),
            source: Some(Box::new(err)),
        }
    }

    #[track_caller]
    pub fn load_msg(message: impl Into<String>) -> Self {
        EtlError::Load {
            context: DiagnosticMessage::new(message.into()),
            source: None,
        }
    }
}
