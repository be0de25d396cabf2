// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Positional text operations. Positions and lengths count characters, not
//! bytes, and no collation is applied.

pub mod insert;
pub mod locate;
pub mod pad;
pub mod replace;
pub mod translate;

pub use insert::insert;
pub use locate::locate;
pub use pad::{PadSide, pad};
pub use replace::replace;
pub use translate::translate;
