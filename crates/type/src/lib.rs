// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod dialect;
pub mod error;
pub mod fragment;
pub mod value;

pub use dialect::DialectMode;
pub use error::{Error, diagnostic::Diagnostic};
pub use fragment::Fragment;
pub use value::{Type, Value};

pub type Result<T> = std::result::Result<T, Error>;
