//! # ffi-sample
//!
//! A tiny program that announces its bootstrap, then brackets a single call
//! into a native C library (see the `bridge` crate) with a start and a finish
//! line.
//!
//! The bootstrap hook is an ordinary function: [`initialize`] has to be the
//! first statement of `main`. Nothing runs it implicitly.

use std::io::{self, Write};

pub mod logger;

pub const BOOTSTRAP_MESSAGE: &str = "main package の init 関数が実行されました";
pub const START_MESSAGE: &str = "main 関数が開始されました";
pub const FINISH_MESSAGE: &str = "main 関数が終了しました";

/// The external call made between the start and finish lines.
///
/// Whatever it returns is ignored and a panic inside it is not caught.
pub type Collaborator = fn();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Started,
    Delegating,
    Finished,
}

/// Writes the bootstrap line. Call exactly once, before [`run`].
pub fn initialize<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", BOOTSTRAP_MESSAGE)?;
    out.flush()
}

/// Writes the start line, invokes `collaborator` once, then writes the finish line.
pub fn run<W: Write>(out: &mut W, collaborator: Collaborator) -> io::Result<()> {
    tracing::debug!(stage = ?Stage::Started);
    writeln!(out, "{}", START_MESSAGE)?;
    // the collaborator may write to the process stdout behind our back
    out.flush()?;

    tracing::debug!(stage = ?Stage::Delegating);
    collaborator();

    tracing::debug!(stage = ?Stage::Finished);
    writeln!(out, "{}", FINISH_MESSAGE)?;
    out.flush()
}
