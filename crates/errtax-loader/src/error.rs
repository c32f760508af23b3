//! Errors raised while loading definition fragments.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Error type for fragment loading.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid YAML in `{}`: {message}", path.display())]
    Yaml {
        path: PathBuf,
        message: String,
        /// 1-based line of the error, when the YAML parser reports one.
        line: Option<usize>,
        /// 1-based column of the error, when the YAML parser reports one.
        column: Option<usize>,
    },

    #[error("missing metadata file `{}`", .0.display())]
    MissingMetadataFile(PathBuf),
}

impl LoadError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn yaml(path: impl Into<PathBuf>, err: &serde_yaml::Error) -> Self {
        let location = err.location();
        Self::Yaml {
            path: path.into(),
            message: err.to_string(),
            line: location.as_ref().map(|loc| loc.line()),
            column: location.as_ref().map(|loc| loc.column()),
        }
    }

    /// Returns the file the error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::Yaml { path, .. } | Self::MissingMetadataFile(path) => {
                path
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_metadata_display() {
        let err = LoadError::MissingMetadataFile(PathBuf::from("dir/Foo.metadata.yaml"));
        assert_eq!(
            err.to_string(),
            "missing metadata file `dir/Foo.metadata.yaml`"
        );
        assert_eq!(err.path(), std::path::Path::new("dir/Foo.metadata.yaml"));
    }

    #[test]
    fn test_yaml_error_keeps_location() {
        let yaml_err = serde_yaml::from_str::<Vec<String>>("- a\n- [b\n").unwrap_err();
        let err = LoadError::yaml("bad.yaml", &yaml_err);

        match err {
            LoadError::Yaml { line, .. } => assert!(line.is_some()),
            other => panic!("Expected Yaml error, got {other:?}"),
        }
    }
}
