// Copyright 2025 Horizen Labs, Inc.
// SPDX-License-Identifier: Apache-2.0 or MIT

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// 	http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::constants::{COMMITMENT_SIZE, EVM_WORD_SIZE};

/// A 32-byte big-endian word, as laid out in the engine's calldata.
pub type EVMWord = [u8; EVM_WORD_SIZE];

/// A fixed-width identifier binding a proof to a specific program.
pub type Commitment = [u8; COMMITMENT_SIZE];
