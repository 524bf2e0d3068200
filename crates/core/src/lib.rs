// -------------------------------------------------------------------------------------------------
//  Copyright (C) 2025 TradeLab Developers. All rights reserved.
//
//  Licensed under the GNU Lesser General Public License Version 3.0 (the "License");
//  You may not use this file except in compliance with the License.
//  You may obtain a copy of the License at https://www.gnu.org/licenses/lgpl-3.0.en.html
//
//  Unless required by applicable law or agreed to in writing, software
//  distributed under the License is distributed on an "AS IS" BASIS,
//  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//  See the License for the specific language governing permissions and
//  limitations under the License.
// -------------------------------------------------------------------------------------------------

//! Core path resolution for the TradeLab backtesting environment.
//!
//! The `tradelab-core` crate provides a single point of access to the host
//! project's directory layout. All code obtains project paths through this
//! crate rather than hardcoding locations, including:
//!
//! - Project root discovery from an arbitrary working directory.
//! - Well-known subpaths for market data and strategy definitions.
//! - Price-adjustment cache file locations.
//! - Cross-platform environment utilities.
//!
//! Paths are recomputed on every access rather than resolved once at startup,
//! so the crate reacts correctly when the host process changes its working
//! directory between calls.

#![warn(rustc::all)]
#![deny(unsafe_code)]
#![deny(nonstandard_style)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod consts;
pub mod env;
pub mod paths;

// Re-exports
pub use crate::paths::{
    get_data_path, get_project_root, get_strategies_path, is_project_dir, path_for,
};
