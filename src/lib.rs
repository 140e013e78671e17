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

#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

extern crate alloc;

mod commitment;
mod constants;
pub mod engine;
pub mod envelope;
pub mod errors;
pub mod layout;
mod types;

pub use commitment::CommitmentSet;
pub use constants::{
    ACCUMULATOR_SIZE, COMMITMENT_SIZE, EVM_WORD_SIZE, FULL_PROOF_SIZE, PARTIAL_PROOF_SIZE,
    PROOF_SUFFIX_SIZE, PUBLIC_VALUES_SIZE,
};
pub use engine::{dispatch, VerificationEngine};
pub use envelope::Envelope;
pub use errors::VerifyError;
pub use layout::EnvelopeLayout;
pub use types::*;

/// Verify a proof against the canonical envelope layout.
///
/// Mirrors the original adapter contract: the caller supplies the revealed
/// public values, the partial proof (`accumulator || suffix`) and the
/// app-executable and app-VM commitments, in that order. The envelope is
/// built once, dispatched once and discarded; nothing outlives the call.
pub fn verify<E: VerificationEngine>(
    engine: &E,
    public_values: &[u8],
    partial_proof: &[u8],
    app_exe_commit: &Commitment,
    app_vm_commit: &Commitment,
) -> Result<(), VerifyError> {
    Verifier::new(EnvelopeLayout::V1).verify(
        engine,
        public_values,
        partial_proof,
        &CommitmentSet::exe_and_vm(*app_exe_commit, *app_vm_commit),
    )
}

/// Adapter configured with one envelope layout.
///
/// Deployments that redefine the accumulator, suffix or public-values
/// lengths, or that embed a single commitment, run the same algorithm under
/// different constants; only the [`EnvelopeLayout`] and the
/// [`CommitmentSet`] change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verifier {
    layout: EnvelopeLayout,
}

impl Verifier {
    pub const fn new(layout: EnvelopeLayout) -> Self {
        Self { layout }
    }

    pub const fn layout(&self) -> EnvelopeLayout {
        self.layout
    }

    /// Build the envelope and submit it to the engine.
    pub fn verify<E: VerificationEngine>(
        &self,
        engine: &E,
        public_values: &[u8],
        partial_proof: &[u8],
        commitments: &CommitmentSet,
    ) -> Result<(), VerifyError> {
        let envelope = Envelope::build(self.layout, public_values, partial_proof, commitments)?;
        dispatch(&envelope, engine)
    }
}
