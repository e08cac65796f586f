//! Error adapter for converting RoseError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's graphical report formatting used in the CLI. Each error gets a
//! stable code and, where the user can act on it, a help line.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use windrose::{GeometryError, RoseError};

const CONFIG_HELP: &str = "[rose] accepts base_radius, num_primary_divisions and triangle_ratio; \
[style] accepts accent_color, line_color, background_color, label_color and font_family, \
with colors in CSS syntax such as \"#b13136\" or \"navy\"";

/// Adapter that renders a [`RoseError`] as a miette diagnostic.
pub struct ErrorAdapter<'a>(pub &'a RoseError);

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
        Some(Box::new(error_code(self.0)))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            RoseError::Geometry(GeometryError::InvalidParameter { name, .. }) => format!(
                "set `{name}` in the [rose] section of the configuration file or pass it on the command line"
            ),
            RoseError::Config(_) => CONFIG_HELP.to_string(),
            RoseError::Io(_) | RoseError::Export(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// The diagnostic code shown for each error kind.
pub fn error_code(err: &RoseError) -> &'static str {
    match err {
        RoseError::Io(_) => "windrose::io",
        RoseError::Geometry(_) => "windrose::geometry",
        RoseError::Config(_) => "windrose::config",
        RoseError::Export(_) => "windrose::export",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry_error() -> RoseError {
        GeometryError::InvalidParameter {
            name: "num_primary_divisions",
            reason: "must be between 1 and 90, got 0".to_string(),
        }
        .into()
    }

    #[test]
    fn test_codes() {
        assert_eq!(error_code(&geometry_error()), "windrose::geometry");
        assert_eq!(
            error_code(&RoseError::Config("bad".to_string())),
            "windrose::config"
        );
        assert_eq!(
            error_code(&RoseError::Io(std::io::Error::other("disk"))),
            "windrose::io"
        );
    }

    #[test]
    fn test_geometry_help_names_parameter() {
        let err = geometry_error();
        let adapter = ErrorAdapter(&err);

        let help = adapter.help().expect("geometry errors carry help").to_string();
        assert!(help.contains("num_primary_divisions"), "{help}");
        assert_eq!(
            adapter.to_string(),
            "invalid parameter `num_primary_divisions`: must be between 1 and 90, got 0"
        );
    }

    #[test]
    fn test_config_help_lists_both_tables() {
        let err = RoseError::Config("invalid [rose] or [style] table".to_string());
        let help = ErrorAdapter(&err).help().expect("config errors carry help").to_string();

        assert!(help.contains("[rose] accepts base_radius"), "{help}");
        assert!(help.contains("[style] accepts accent_color"), "{help}");
        assert!(help.contains("font_family"), "{help}");
    }

    #[test]
    fn test_io_error_has_no_help() {
        let err = RoseError::Io(std::io::Error::other("disk full"));
        let adapter = ErrorAdapter(&err);

        assert!(adapter.help().is_none());
        assert_eq!(adapter.to_string(), "I/O error: disk full");
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let err = geometry_error();
        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(&err))
            .expect("render to string");

        assert!(out.contains("windrose::geometry"), "{out}");
        assert!(out.contains("num_primary_divisions"), "{out}");
    }
}
