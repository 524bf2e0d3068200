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

//! Utility functions for resolving project directory paths.
//!
//! All paths are recomputed from the current working directory and filesystem
//! state on every call, never cached at load time, so results stay correct
//! when the host process changes directories between calls.

use std::path::{Path, PathBuf};

use crate::consts::{
    ADJ_POST_CACHE_FILE, ADJ_PRE_CACHE_FILE, DATA_DIR, MANIFEST_FILE, PYPROJECT_FILE,
    STRATEGIES_DIR, TEST_DATA_ROOT_VAR,
};

/// Returns true if `path` is a valid project root directory.
///
/// A valid project root contains a `data` subdirectory which either holds a
/// `manifest.json` file or sits alongside a `strategies` subdirectory.
/// Nonexistent paths are simply not project directories; this never errors.
#[must_use]
pub fn is_project_dir(path: &Path) -> bool {
    let data_dir = path.join(DATA_DIR);
    if !data_dir.is_dir() {
        return false;
    }
    data_dir.join(MANIFEST_FILE).exists() || path.join(STRATEGIES_DIR).is_dir()
}

/// Resolves the project root from an explicit working directory and anchor.
///
/// Strategies are tried in strict order, returning the first success:
/// 1. `cwd`, then its direct parent, tested with [`is_project_dir`].
/// 2. Upward walk from `anchor` (inclusive), first ancestor passing
///    [`is_project_dir`].
/// 3. Upward walk from `anchor` (inclusive), first ancestor containing a
///    `pyproject.toml` file.
/// 4. A fixed structural fallback two parents above `anchor`.
///
/// Total: always returns some path, degrading through increasingly weak
/// heuristics. Performs filesystem metadata reads only.
#[must_use]
pub fn resolve_project_root(cwd: &Path, anchor: &Path) -> PathBuf {
    // Strategy 1: check the working directory and its direct parent
    // (supports running from a subdirectory such as notebooks/).
    for candidate in std::iter::once(cwd).chain(cwd.parent()) {
        if is_project_dir(candidate) {
            log::debug!(
                "Resolved project root from working directory: {}",
                candidate.display()
            );
            return candidate.to_path_buf();
        }
    }

    // Strategy 2: walk upward from the anchor looking for a project marker.
    for ancestor in anchor.ancestors() {
        if is_project_dir(ancestor) {
            log::debug!("Resolved project root from anchor: {}", ancestor.display());
            return ancestor.to_path_buf();
        }
    }

    // Strategy 3: walk upward looking for the host lab's build manifest.
    for ancestor in anchor.ancestors() {
        if ancestor.join(PYPROJECT_FILE).exists() {
            log::debug!(
                "Resolved project root from {PYPROJECT_FILE}: {}",
                ancestor.display()
            );
            return ancestor.to_path_buf();
        }
    }

    // Strategy 4: fixed structural fallback. This crate lives at
    // `crates/core` under the project root, so the root sits two parents
    // above the anchor. Relocating the crate silently invalidates this.
    let fallback = anchor
        .parent()
        .and_then(Path::parent)
        .unwrap_or(anchor)
        .to_path_buf();
    log::warn!(
        "No project marker found, falling back to fixed ancestor: {}",
        fallback.display()
    );
    fallback
}

/// Returns the project root directory path.
///
/// Callable from any working directory. Search order: CWD, CWD parent,
/// upward walk from this crate's location for a project marker, upward walk
/// for `pyproject.toml`, then a fixed structural fallback.
#[must_use]
pub fn get_project_root() -> PathBuf {
    let anchor = crate_anchor();
    match std::env::current_dir() {
        Ok(cwd) => resolve_project_root(&cwd, &anchor),
        // CWD unobtainable (e.g. deleted); the anchor walk still applies
        Err(_) => resolve_project_root(&anchor, &anchor),
    }
}

/// Returns the market data directory path.
#[must_use]
pub fn get_data_path() -> PathBuf {
    get_project_root().join(DATA_DIR)
}

/// Returns the strategies directory path.
#[must_use]
pub fn get_strategies_path() -> PathBuf {
    get_project_root().join(STRATEGIES_DIR)
}

/// Returns the pre-adjusted price cache file path.
#[must_use]
pub fn get_adj_pre_cache_path() -> PathBuf {
    get_data_path().join(ADJ_PRE_CACHE_FILE)
}

/// Returns the post-adjusted price cache file path.
#[must_use]
pub fn get_adj_post_cache_path() -> PathBuf {
    get_data_path().join(ADJ_POST_CACHE_FILE)
}

/// Returns the test data directory path.
///
/// Defaults to `tests/test_data` under the project root; the directory
/// holding `test_data` can be redirected with the `TRADELAB_TEST_DATA_ROOT`
/// environment variable (relative to the project root).
#[must_use]
pub fn get_test_data_path() -> PathBuf {
    let override_root = crate::env::get_env_var(TEST_DATA_ROOT_VAR).ok();
    test_data_path_from(&get_project_root(), override_root.as_deref())
}

fn test_data_path_from(root: &Path, override_root: Option<&str>) -> PathBuf {
    match override_root {
        Some(dir) => root.join(dir).join("test_data"),
        None => root.join("tests").join("test_data"),
    }
}

/// Returns the project path registered under the given `name`.
///
/// Recognized names are `PROJECT_ROOT`, `DATA_PATH`, `STRATEGIES_PATH`,
/// `ADJ_PRE_CACHE_PATH` and `ADJ_POST_CACHE_PATH`. Values are computed on
/// access, never cached.
///
/// # Errors
///
/// Returns an error naming the requested identifier if `name` is not a
/// recognized path attribute.
pub fn path_for(name: &str) -> anyhow::Result<PathBuf> {
    match name {
        "PROJECT_ROOT" => Ok(get_project_root()),
        "DATA_PATH" => Ok(get_data_path()),
        "STRATEGIES_PATH" => Ok(get_strategies_path()),
        "ADJ_PRE_CACHE_PATH" => Ok(get_adj_pre_cache_path()),
        "ADJ_POST_CACHE_PATH" => Ok(get_adj_post_cache_path()),
        _ => anyhow::bail!("unknown path attribute '{name}'"),
    }
}

fn crate_anchor() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
