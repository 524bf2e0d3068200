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

//! Well-known directory and file names within a TradeLab project.

/// The name of the market data directory under the project root.
pub const DATA_DIR: &str = "data";

/// The name of the strategies directory under the project root.
pub const STRATEGIES_DIR: &str = "strategies";

/// The data manifest file name, used as the strong project root marker.
pub const MANIFEST_FILE: &str = "manifest.json";

/// The host lab's build manifest file name, used as the weak root marker.
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// The pre-adjusted price cache file name under the data directory.
pub const ADJ_PRE_CACHE_FILE: &str = "ptrade_adj_pre.parquet";

/// The post-adjusted price cache file name under the data directory.
pub const ADJ_POST_CACHE_FILE: &str = "ptrade_adj_post.parquet";

/// Environment variable overriding the test data root, relative to the
/// project root.
pub const TEST_DATA_ROOT_VAR: &str = "TRADELAB_TEST_DATA_ROOT";
