//! # cbuild
//!
//! A small library for compiling C sources into a static library from a
//! Cargo build script.
//!
//! `cbuild` provides a builder-pattern API. It reads library presets from a
//! `BuildPresets.json` file in the source directory, compiles every listed
//! source with the system C compiler, and archives the objects with `ar`.
//! Builds can run synchronously or on a worker thread.
//!
//! ## Quick Start
//!
//! ```no_run
//! use cbuild::Cmd;
//!
//! // Synchronous build
//! let archive = Cmd::default()
//!     .set_path("./csrc")
//!     .set_preset("default")
//!     .set_binary_path("./build")
//!     .set_output_path("./lib")
//!     .add_define("NDEBUG")
//!     .build()
//!     .unwrap();
//!
//! assert!(archive.ends_with("libdefault.a"));
//! ```
//!
//! ```no_run
//! use cbuild::Cmd;
//!
//! // Asynchronous build
//! let rx = Cmd::default()
//!     .set_path("./csrc")
//!     .set_preset("default")
//!     .spawn();
//!
//! let result = rx.recv().unwrap();
//! assert!(result.is_ok());
//! ```

pub mod cmd;
pub mod error;
pub mod presets;

pub use cmd::Cmd;
pub use error::{Error, Result};
