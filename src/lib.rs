//! Password and Passphrase Generation Library
//!
//! Turns cryptographically secure random bytes into passwords (fixed
//! length strings over a character alphabet) and passphrases (fixed
//! length word sequences over a word list).
//!
//! # Architecture
//!
//! Both artifact types share one pipeline:
//!
//! ```text
//! universe → bit plan → source → extraction → assembly
//! ```
//!
//! - **universe**: deduplicated symbols (characters, or words after casing)
//! - **bit plan**: ceil(log2(universe size)) bits per symbol
//! - **source**: one freshly filled random buffer per artifact
//! - **extraction**: big-endian bit slicing, modulo universe size
//! - **assembly**: symbols joined into the final string
//!
//! # Design Principles
//!
//! - **All-or-nothing**: any failure discards every artifact of the call
//! - **No retries**: a failing random source is fatal
//! - **Injected randomness**: the source is owned by the [`Generator`],
//!   never a process-wide handle
//! - **No strength claims**: bit counting only, no entropy estimation
//!
//! # Example
//!
//! ```no_run
//! use passgen::{Casing, Generator, PassphraseRequest, PasswordRequest};
//!
//! let mut generator = Generator::new();
//!
//! let passwords = generator
//!     .passwords(&PasswordRequest::new(3, 20, "abcdefghijklmnopqrstuvwxyz0123456789"))
//!     .unwrap();
//!
//! let passphrases = generator
//!     .passphrases(&PassphraseRequest::new(
//!         1,
//!         4,
//!         '-',
//!         Casing::Title,
//!         ["alfa", "bravo", "charlie", "delta", "echo"],
//!     ))
//!     .unwrap();
//!
//! for secret in passwords.iter().chain(&passphrases) {
//!     println!("{secret}");
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod charset;
pub mod config;
pub mod error;
pub mod extraction;
pub mod generate;
pub mod source;
pub mod universe;

// Re-export commonly used types at crate root
pub use config::{Bounds, ConfigError, FileConfig, Limits};
pub use error::{Error, Parameter, Result, UniverseKind};
pub use extraction::BitPlan;
pub use generate::{
    generate_passphrases, generate_passwords, Generator, PassphraseRequest, PasswordRequest,
};
pub use source::{ByteSource, FixedSource, OsSource, ReaderSource, SourceError};
pub use universe::{Alphabet, Casing, SymbolUniverse, WordList};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
