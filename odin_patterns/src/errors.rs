/*
 * Copyright © 2025, United States Government, as represented by the Administrator of 
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License"); 
 * you may not use this file except in compliance with the License. You may obtain a copy 
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */

use thiserror::Error;

pub type Result<T> = std::result::Result<T,OdinPatternsError>;

#[derive(Error,Debug)]
pub enum OdinPatternsError {

    /// the only error the detection engine itself signals: not enough data for a hard-minimum operation
    #[error("invalid input {0}")]
    InvalidInput(String),

    #[error("config error {0}")]
    ConfigError(String),

    #[error("IO error {0}")]
    IOError( #[from] std::io::Error),

    #[error("JSON error {0}")]
    JsonError( #[from] serde_json::Error),

    #[error("task error {0}")]
    TaskError( #[from] tokio::task::JoinError),
}

impl From<ron::error::SpannedError> for OdinPatternsError {
    fn from (e: ron::error::SpannedError)->Self {
        OdinPatternsError::ConfigError( e.to_string())
    }
}

macro_rules! invalid_input {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::OdinPatternsError::InvalidInput( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use invalid_input;
