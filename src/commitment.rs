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

use crate::constants::COMMITMENT_SIZE;
use crate::types::Commitment;

/// The ordered commitments embedded in an envelope.
///
/// Deployed configurations bind a proof either to the app executable alone
/// or to the executable followed by the leaf VM, so the set holds one or two
/// words. Storage is inline; no allocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CommitmentSet {
    words: [Commitment; 2],
    len: usize,
}

impl CommitmentSet {
    /// A single app-executable commitment.
    pub const fn exe(app_exe: Commitment) -> Self {
        Self {
            words: [app_exe, [0u8; COMMITMENT_SIZE]],
            len: 1,
        }
    }

    /// The app-executable commitment followed by the leaf VM commitment.
    pub const fn exe_and_vm(app_exe: Commitment, app_vm: Commitment) -> Self {
        Self {
            words: [app_exe, app_vm],
            len: 2,
        }
    }

    /// The commitments in their declared embedding order.
    pub fn as_slice(&self) -> &[Commitment] {
        &self.words[..self.len]
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}
