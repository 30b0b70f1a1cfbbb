//! Hand-off of graph descriptions to an external renderer.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::debug;

/// Errors raised while rendering a graph description.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The renderer process could not be started.
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked.
        program: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },

    /// The renderer ran but reported failure.
    #[error("{program} failed with {status}")]
    Failed {
        /// Program that was invoked.
        program: String,
        /// Its exit status.
        status: ExitStatus,
    },
}

/// Something that turns a graph description file into an image.
///
/// Only success or failure is observed.
pub trait Renderer {
    /// Renders `dot_file`, writing the image next to it.
    fn render(&self, dot_file: &Path) -> Result<(), RenderError>;
}

/// Runs Graphviz as `dot -T<format> <file> -O`.
///
/// `-O` makes Graphviz derive the output name by appending the format
/// extension, so `graph.dot` becomes `graph.dot.svg`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graphviz {
    program: String,
    format: String,
}

impl Graphviz {
    /// Renders SVG with the `dot` program found on `PATH`.
    pub fn new() -> Self {
        Graphviz {
            program: "dot".to_owned(),
            format: "svg".to_owned(),
        }
    }

    /// Uses a different Graphviz executable.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Uses a different output format, e.g. `png`.
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Returns the path the image for `dot_file` is written to.
    pub fn output_path(&self, dot_file: &Path) -> PathBuf {
        let mut name = OsString::from(dot_file.as_os_str());
        name.push(".");
        name.push(&self.format);
        PathBuf::from(name)
    }

    fn command(&self, dot_file: &Path) -> Command {
        let mut command = Command::new(&self.program);
        command
            .arg(format!("-T{}", self.format))
            .arg(dot_file)
            .arg("-O");
        command
    }
}

impl Default for Graphviz {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Graphviz {
    fn render(&self, dot_file: &Path) -> Result<(), RenderError> {
        let mut command = self.command(dot_file);
        debug!(?command, "running renderer");

        let status = command.status().map_err(|source| RenderError::Spawn {
            program: self.program.clone(),
            source,
        })?;
        if status.success() {
            Ok(())
        } else {
            Err(RenderError::Failed {
                program: self.program.clone(),
                status,
            })
        }
    }
}
