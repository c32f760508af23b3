//! Loading fragments from a directory of definition files.
//!
//! Every `<Interface>.errors.yaml` file in the directory is paired with the
//! `<Interface>.metadata.yaml` file next to it. Files are processed in sorted
//! name order so that repeated loads of the same directory yield the same
//! encounter order.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info, warn};

use errtax_core::fragment::{Fragment, FragmentSource};

use crate::{error::LoadError, yaml};

/// File naming configuration for the directory loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Suffix identifying errors files.
    pub errors_suffix: String,
    /// Suffix of the metadata file paired with each errors file.
    pub metadata_suffix: String,
}

impl LoaderConfig {
    /// Create a new LoaderConfig with the given file suffixes
    pub fn new(errors_suffix: impl Into<String>, metadata_suffix: impl Into<String>) -> Self {
        Self {
            errors_suffix: errors_suffix.into(),
            metadata_suffix: metadata_suffix.into(),
        }
    }
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self::new(".errors.yaml", ".metadata.yaml")
    }
}

/// A [`FragmentSource`] reading one directory of YAML definition files.
#[derive(Debug, Clone)]
pub struct DirectoryLoader {
    dir: PathBuf,
    config: LoaderConfig,
}

impl DirectoryLoader {
    pub fn new(dir: impl Into<PathBuf>, config: LoaderConfig) -> Self {
        Self {
            dir: dir.into(),
            config,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lists the errors files of the directory, sorted by file name.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Io`] if the directory cannot be read.
    pub fn errors_files(&self) -> Result<Vec<PathBuf>, LoadError> {
        let entries = fs::read_dir(&self.dir).map_err(|err| LoadError::io(&self.dir, err))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| LoadError::io(&self.dir, err))?.path();
            let is_errors_file = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.ends_with(&self.config.errors_suffix));
            if is_errors_file && path.is_file() {
                files.push(path);
            }
        }
        files.sort();

        Ok(files)
    }

    /// Returns the interface name of an errors file: its file name without
    /// the errors suffix.
    fn interface_name(&self, errors_path: &Path) -> Option<String> {
        errors_path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.strip_suffix(&self.config.errors_suffix))
            .filter(|name| !name.is_empty())
            .map(str::to_string)
    }

    /// Returns the metadata file paired with an errors file.
    fn metadata_path(&self, errors_path: &Path, interface: Option<&str>) -> PathBuf {
        let file_name = format!("{}{}", interface.unwrap_or(""), self.config.metadata_suffix);
        errors_path.with_file_name(file_name)
    }

    /// Loads the fragment of a single errors file and its metadata file.
    ///
    /// # Errors
    ///
    /// Returns an error if the metadata file is missing, or either file
    /// cannot be read or decoded.
    pub fn load_file(&self, errors_path: &Path) -> Result<Fragment, LoadError> {
        let interface = self.interface_name(errors_path);
        let metadata_path = self.metadata_path(errors_path, interface.as_deref());

        if !metadata_path.is_file() {
            return Err(LoadError::MissingMetadataFile(metadata_path));
        }

        let errors_source =
            fs::read_to_string(errors_path).map_err(|err| LoadError::io(errors_path, err))?;
        let metadata_source =
            fs::read_to_string(&metadata_path).map_err(|err| LoadError::io(&metadata_path, err))?;

        let errors = yaml::parse_errors(&errors_source, errors_path)?;
        let metadata = yaml::parse_metadata(&metadata_source, &metadata_path)?;

        debug!(
            interface:? = interface,
            errors = errors.len(),
            metadata = metadata.len();
            "Loaded fragment"
        );

        let fragment = Fragment::new(errors, metadata);
        Ok(match interface {
            Some(interface) => fragment.with_interface(interface),
            None => fragment,
        })
    }
}

impl FragmentSource for DirectoryLoader {
    type Error = LoadError;

    fn fragments(&self) -> Result<Vec<Fragment>, Self::Error> {
        info!(dir = self.dir.display().to_string(); "Loading definition fragments");

        let files = self.errors_files()?;
        if files.is_empty() {
            warn!(
                dir = self.dir.display().to_string(),
                suffix = self.config.errors_suffix;
                "No errors files found"
            );
        }

        files.iter().map(|path| self.load_file(path)).collect()
    }
}
