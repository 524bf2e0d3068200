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

//! Environment variable access for TradeLab tooling.

/// Returns the value of the environment variable `key`.
///
/// # Errors
///
/// Returns an error if the variable is unset or not valid unicode.
pub fn get_env_var(key: &str) -> anyhow::Result<String> {
    std::env::var(key)
        .map_err(|_| anyhow::anyhow!("required environment variable '{key}' is not set"))
}
