//! # Errtax Loader
//!
//! Fragment loader for errtax error taxonomies. This crate reads the YAML
//! definition files of one interface directory and turns them into raw
//! [`Fragment`]s for the compiler.
//!
//! ## Usage
//!
//! ```no_run
//! # use errtax_loader::{load_dir, LoaderConfig, LoadError};
//!
//! fn main() -> Result<(), LoadError> {
//!     let fragments = load_dir("yaml/xyz/openbmc_project", LoaderConfig::default())?;
//!     println!("loaded {} fragments", fragments.len());
//!     Ok(())
//! }
//! ```

mod directory;
mod error;
mod yaml;

pub use directory::{DirectoryLoader, LoaderConfig};
pub use error::LoadError;
pub use yaml::{parse_errors, parse_metadata};

use std::path::Path;

use errtax_core::fragment::{Fragment, FragmentSource};

/// Load every fragment of a definition directory.
///
/// This is a shorthand for building a [`DirectoryLoader`] and asking it for
/// its fragments.
///
/// # Arguments
///
/// * `dir` - Directory containing `*.errors.yaml` / `*.metadata.yaml` pairs
/// * `config` - File naming configuration
///
/// # Errors
///
/// Returns a [`LoadError`] if the directory cannot be read, a metadata file
/// is missing, or a file is not valid YAML.
pub fn load_dir(dir: impl AsRef<Path>, config: LoaderConfig) -> Result<Vec<Fragment>, LoadError> {
    DirectoryLoader::new(dir.as_ref(), config).fragments()
}
