//! Error types for errtax operations.
//!
//! This module provides the main error type [`ErrtaxError`] which wraps the
//! error conditions of every stage: loading, compiling and emitting. The
//! compilation stage reports a [`CompileError`], each variant of which
//! carries a stable [`ErrorCode`] for documentation and searchability.

mod compile_error;
mod error_code;

pub use compile_error::CompileError;
pub use error_code::ErrorCode;

use thiserror::Error;

use errtax_loader::LoadError;

use crate::emit::EmitError;

/// The main error type for errtax operations.
#[derive(Debug, Error)]
pub enum ErrtaxError {
    #[error("{0}")]
    Load(#[from] LoadError),

    #[error("Fragment source error: {0}")]
    Source(Box<dyn std::error::Error + Send + Sync>),

    #[error("{0}")]
    Compile(#[from] CompileError),

    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),
}

impl ErrtaxError {
    /// Create a new `Source` error from any fragment source error.
    pub fn new_source_error(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Box::new(err))
    }
}
