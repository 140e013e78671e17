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

use crate::constants::{
    ACCUMULATOR_SIZE, COMMITMENT_SIZE, EVM_WORD_SIZE, PROOF_SUFFIX_SIZE, PUBLIC_VALUES_SIZE,
};

/// Byte lengths of the envelope segments for one deployed configuration.
///
/// All envelope offsets are derived from these three lengths. The number of
/// commitments is not part of the layout: it is taken from the
/// [`CommitmentSet`](crate::CommitmentSet) supplied at build time, so layout
/// and commitment count can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnvelopeLayout {
    /// Length of the accumulator segment at the head of the partial proof.
    pub accumulator_size: usize,
    /// Length of the suffix segment at the tail of the partial proof.
    pub suffix_size: usize,
    /// Length of the revealed public values digest, before expansion.
    pub public_values_size: usize,
}

impl EnvelopeLayout {
    /// The canonical configuration: 12-word accumulator, 43-word suffix and
    /// 32 revealed bytes.
    pub const V1: Self = Self {
        accumulator_size: ACCUMULATOR_SIZE,
        suffix_size: PROOF_SUFFIX_SIZE,
        public_values_size: PUBLIC_VALUES_SIZE,
    };

    /// Expected length of the caller-supplied partial proof.
    pub const fn partial_proof_size(&self) -> usize {
        self.accumulator_size + self.suffix_size
    }

    /// Offset of the first commitment, right after the accumulator.
    pub const fn commitments_start(&self) -> usize {
        self.accumulator_size
    }

    /// Offset of the expanded public values region.
    pub const fn public_values_start(&self, num_commitments: usize) -> usize {
        self.commitments_start() + num_commitments * COMMITMENT_SIZE
    }

    /// Offset of the suffix segment.
    pub const fn suffix_start(&self, num_commitments: usize) -> usize {
        self.public_values_start(num_commitments) + self.public_values_size * EVM_WORD_SIZE
    }

    /// Total envelope length for the given number of commitments.
    pub const fn full_size(&self, num_commitments: usize) -> usize {
        self.suffix_start(num_commitments) + self.suffix_size
    }
}
