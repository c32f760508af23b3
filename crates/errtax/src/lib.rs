//! errtax - A compiler for declarative error taxonomies.
//!
//! Error definitions are spread across per-interface fragments, each holding
//! error declarations and their metadata records. The compiler validates the
//! cross references between them, resolves single-parent inheritance, orders
//! the errors so that every parent precedes its children and resolves each
//! metadata field to a concrete emission type. The result is an immutable
//! [`TaxonomyModel`] that an [`Emitter`] renders for code generators.

pub mod config;

mod compile;
mod emit;
mod error;
mod graph;
mod model;
mod order;
mod validate;

pub use errtax_core::{definition, fragment, level, types};

pub use emit::{EmitError, Emitter, JsonEmitter};
pub use error::{CompileError, ErrorCode, ErrtaxError};
pub use model::{Ancestors, TaxonomyModel};
pub use order::OrderingStrategy;

use std::path::Path;

use log::{debug, info, trace};

use errtax_core::fragment::{Fragment, FragmentSource};
use errtax_loader::DirectoryLoader;

use config::AppConfig;

/// Compiler for error taxonomies.
///
/// This provides an API for processing definition fragments through
/// loading, compilation and emission.
///
/// # Examples
///
/// ```rust,no_run
/// use errtax::{TaxonomyCompiler, config::AppConfig};
///
/// let compiler = TaxonomyCompiler::new(AppConfig::default());
///
/// // Load and compile a directory of definitions
/// let model = compiler.compile_dir("errors/")
///     .expect("Failed to compile");
///
/// // Render the model as JSON
/// let json = compiler.render_json(&model)
///     .expect("Failed to render");
///
/// // Or use default config
/// let compiler = TaxonomyCompiler::default();
/// ```
#[derive(Debug, Default)]
pub struct TaxonomyCompiler {
    config: AppConfig,
}

impl TaxonomyCompiler {
    /// Create a new compiler with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including ordering and loader settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of this compiler.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Compile fragments into a taxonomy model.
    ///
    /// Fragments are processed in the given order, which defines the
    /// encounter order used to break ordering ties.
    ///
    /// # Errors
    ///
    /// Returns the first [`CompileError`] found: missing metadata, duplicate
    /// names or fields, unknown levels, undefined parents, inheritance cycles
    /// or unknown metadata types.
    ///
    /// # Examples
    ///
    /// ```
    /// use errtax::{CompileError, TaxonomyCompiler};
    /// use errtax::fragment::{ErrorDeclaration, Fragment, MetadataDeclaration};
    ///
    /// let fragment = Fragment::new(
    ///     vec![
    ///         ErrorDeclaration::new("X", "x"),
    ///         ErrorDeclaration::new("Y", "y").inheriting("ns.Z"),
    ///     ],
    ///     vec![
    ///         MetadataDeclaration::new("X", "ERR"),
    ///         MetadataDeclaration::new("Y", "ERR"),
    ///     ],
    /// );
    ///
    /// let err = TaxonomyCompiler::default().compile(&[fragment]).unwrap_err();
    /// assert!(matches!(err, CompileError::UnknownParent { .. }));
    /// ```
    pub fn compile(&self, fragments: &[Fragment]) -> Result<TaxonomyModel, CompileError> {
        compile::compile(fragments, self.config.compiler().ordering())
    }

    /// Collect fragments from a source and compile them.
    ///
    /// # Errors
    ///
    /// Returns [`ErrtaxError::Source`] if the source fails, or
    /// [`ErrtaxError::Compile`] for compilation errors.
    pub fn compile_source<S>(&self, source: &S) -> Result<TaxonomyModel, ErrtaxError>
    where
        S: FragmentSource,
    {
        let fragments = source.fragments().map_err(ErrtaxError::new_source_error)?;
        debug!(fragments = fragments.len(); "Fragments collected");
        trace!(fragments:?; "Collected fragments");

        Ok(self.compile(&fragments)?)
    }

    /// Load a directory of definition files and compile it.
    ///
    /// File names are matched with the configured loader suffixes.
    ///
    /// # Errors
    ///
    /// Returns [`ErrtaxError::Load`] if the directory cannot be loaded, or
    /// [`ErrtaxError::Compile`] for compilation errors.
    pub fn compile_dir(&self, dir: impl AsRef<Path>) -> Result<TaxonomyModel, ErrtaxError> {
        let dir = dir.as_ref();
        info!(dir = dir.display().to_string(); "Compiling definition directory");

        let loader = DirectoryLoader::new(dir, self.config.loader().loader_config());
        let fragments = loader.fragments()?;

        Ok(self.compile(&fragments)?)
    }

    /// Render a compiled model as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ErrtaxError::Emit`] if serialization fails.
    pub fn render_json(&self, model: &TaxonomyModel) -> Result<String, ErrtaxError> {
        self.render(model, &JsonEmitter::new())
    }

    /// Render a compiled model with the given emitter.
    ///
    /// # Errors
    ///
    /// Returns [`ErrtaxError::Emit`] if the emitter fails.
    pub fn render<E>(&self, model: &TaxonomyModel, emitter: &E) -> Result<String, ErrtaxError>
    where
        E: Emitter + ?Sized,
    {
        info!(errors = model.len(); "Rendering taxonomy");
        let output = emitter.emit(model)?;
        info!("Taxonomy rendered successfully");
        Ok(output)
    }
}
