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

// EVM words are 32 bytes long
pub const EVM_WORD_SIZE: usize = 32;
// Commitments are one EVM word each
pub const COMMITMENT_SIZE: usize = EVM_WORD_SIZE;

// The KZG accumulator at the head of the partial proof
pub const ACCUMULATOR_WORDS: usize = 12;
pub const ACCUMULATOR_SIZE: usize = ACCUMULATOR_WORDS * EVM_WORD_SIZE;

// The proof suffix at the tail of the partial proof
pub const PROOF_SUFFIX_WORDS: usize = 43;
pub const PROOF_SUFFIX_SIZE: usize = PROOF_SUFFIX_WORDS * EVM_WORD_SIZE;

// Caller-supplied proof bytes: accumulator followed by suffix
pub const PARTIAL_PROOF_SIZE: usize = ACCUMULATOR_SIZE + PROOF_SUFFIX_SIZE;

// Revealed guest output digest, expanded to one EVM word per byte
pub const PUBLIC_VALUES_SIZE: usize = 32;

// App executable commitment + app VM commitment
pub const NUM_COMMITMENTS: usize = 2;

// Total length of the assembled envelope in the canonical configuration
pub const FULL_PROOF_SIZE: usize = ACCUMULATOR_SIZE
    + NUM_COMMITMENTS * COMMITMENT_SIZE
    + PUBLIC_VALUES_SIZE * EVM_WORD_SIZE
    + PROOF_SUFFIX_SIZE;
