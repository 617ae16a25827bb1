use std::{path::PathBuf, process::ExitStatus};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse presets: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{tool} not found in path")]
    ToolNotFound { tool: String },

    #[error("preset {name} not found")]
    PresetNotFound { name: String },

    #[error("no preset selected")]
    NoPreset,

    #[error("preset {name} has no sources")]
    EmptyPreset { name: String },

    #[error("compiling {} failed with status: {status}", file.display())]
    CompileFailed { file: PathBuf, status: ExitStatus },

    #[error("object {} would be produced by more than one source", object.display())]
    DuplicateObject { object: PathBuf },

    #[error("archiving {name} failed with status: {status}")]
    ArchiveFailed { name: String, status: ExitStatus },
}

pub type Result<T> = std::result::Result<T, Error>;
