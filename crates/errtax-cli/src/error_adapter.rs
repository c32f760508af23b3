//! Error adapter for converting CLI errors to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Compilation errors
//! carry their [`ErrorCode`](errtax::ErrorCode) and a help text; every other
//! error is reported under a stage code such as `errtax::load`.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use errtax::{CompileError, ErrtaxError};
use errtax_loader::LoadError;

use crate::{CliError, ConfigError};

/// Adapter for a single [`CompileError`].
pub struct CompileAdapter<'a>(pub &'a CompileError);

impl fmt::Debug for CompileAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for CompileAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for CompileAdapter<'_> {}

impl MietteDiagnostic for CompileAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.0.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = self.0.code();
        Some(Box::new(format!("{}: {}", code.description(), self.0.help())))
    }
}

/// Adapter for errors raised outside compilation.
///
/// This adapter handles configuration, loading, fragment source, emission and
/// output errors, none of which carry an error code of their own.
pub struct ErrorAdapter<'a>(pub &'a CliError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            CliError::Config(_) => "errtax::config",
            CliError::Output { .. } => "errtax::output",
            CliError::Errtax(err) => match err {
                ErrtaxError::Load(_) => "errtax::load",
                ErrtaxError::Source(_) => "errtax::source",
                ErrtaxError::Compile(_) => return None,
                ErrtaxError::Emit(_) => "errtax::emit",
            },
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            CliError::Config(ConfigError::MissingFile(_)) => {
                "pass an existing file to --config or omit the flag to use defaults"
            }
            CliError::Config(ConfigError::Parse { .. }) => {
                "valid sections are [compiler] (ordering) and [loader] (errors_suffix, metadata_suffix)"
            }
            CliError::Errtax(ErrtaxError::Load(LoadError::MissingMetadataFile(_))) => {
                "every errors file needs a metadata file for the same interface next to it"
            }
            CliError::Errtax(ErrtaxError::Load(LoadError::Yaml { .. })) => {
                "definition files hold a YAML sequence of records"
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
///
/// This enum wraps either a compilation error or any other CLI error,
/// providing a uniform interface for error rendering.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A compilation error with code and help.
    Compile(CompileAdapter<'a>),
    /// Any other error.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Compile(c) => fmt::Display::fmt(c, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Compile(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Compile(c) => c.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Compile(c) => c.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Compile(c) => c.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert a [`CliError`] into a reportable error.
pub fn to_reportable(err: &CliError) -> Reportable<'_> {
    match err {
        CliError::Errtax(ErrtaxError::Compile(compile_err)) => {
            Reportable::Compile(CompileAdapter(compile_err))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn code(reportable: &Reportable<'_>) -> Option<String> {
        reportable.code().map(|c| c.to_string())
    }

    fn help(reportable: &Reportable<'_>) -> Option<String> {
        reportable.help().map(|h| h.to_string())
    }

    #[test]
    fn test_compile_error_reports_code_and_help() {
        let err = CliError::from(ErrtaxError::from(CompileError::UnknownParent {
            child: "Y".to_string(),
            parent: "Z".to_string(),
        }));

        let reportable = to_reportable(&err);

        assert!(matches!(reportable, Reportable::Compile(_)));
        assert_eq!(
            reportable.to_string(),
            "error `Y` inherits from undefined error `Z`"
        );
        assert_eq!(code(&reportable).as_deref(), Some("E200"));
        let help = help(&reportable).unwrap();
        assert!(help.starts_with("undefined parent: "));
        assert!(help.contains("`Z`"));
    }

    #[test]
    fn test_source_error_reports_stage_code() {
        let err = CliError::from(ErrtaxError::new_source_error(std::io::Error::other(
            "registry offline",
        )));

        let reportable = to_reportable(&err);

        assert_eq!(code(&reportable).as_deref(), Some("errtax::source"));
        assert_eq!(
            reportable.to_string(),
            "Fragment source error: registry offline"
        );
        assert!(help(&reportable).is_none());
    }

    #[test]
    fn test_load_error_reports_stage_code() {
        let path = PathBuf::from("defs/Foo.metadata.yaml");
        let err = CliError::from(ErrtaxError::from(LoadError::MissingMetadataFile(path)));

        let reportable = to_reportable(&err);

        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(
            reportable.to_string(),
            "missing metadata file `defs/Foo.metadata.yaml`"
        );
        assert_eq!(code(&reportable).as_deref(), Some("errtax::load"));
        assert!(help(&reportable).is_some());
    }

    #[test]
    fn test_config_error_reports_stage_code() {
        let err = CliError::from(ConfigError::MissingFile(PathBuf::from("absent.toml")));

        let reportable = to_reportable(&err);

        assert_eq!(code(&reportable).as_deref(), Some("errtax::config"));
        assert_eq!(
            reportable.to_string(),
            "Missing configuration file: absent.toml"
        );
    }

    #[test]
    fn test_output_error_has_no_help() {
        let err = CliError::Output {
            path: PathBuf::from("out/taxonomy.json"),
            source: std::io::Error::other("disk full"),
        };

        let reportable = to_reportable(&err);

        assert_eq!(code(&reportable).as_deref(), Some("errtax::output"));
        assert!(help(&reportable).is_none());
        assert!(std::error::Error::source(&reportable).is_some());
    }

    #[test]
    fn test_render_report() {
        let err = CliError::from(ErrtaxError::from(CompileError::InheritanceCycle {
            cycle: vec!["A".to_string(), "B".to_string(), "A".to_string()],
        }));
        let reportable = to_reportable(&err);

        let mut rendered = String::new();
        miette::GraphicalReportHandler::new_themed(miette::GraphicalTheme::unicode_nocolor())
            .render_report(&mut rendered, &reportable)
            .unwrap();

        assert!(rendered.contains("E201"));
        assert!(rendered.contains("A -> B -> A"));
    }
}
