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

use alloc::vec;
use alloc::vec::Vec;

use crate::commitment::CommitmentSet;
use crate::constants::{COMMITMENT_SIZE, EVM_WORD_SIZE};
use crate::errors::VerifyError;
use crate::layout::EnvelopeLayout;
use crate::types::{Commitment, EVMWord};

/// The fully assembled, fixed-layout buffer submitted to the verification
/// engine:
///
/// ```text
/// | accumulator | commitments | expanded public values | suffix |
/// ```
///
/// The accumulator and suffix are spliced verbatim from the partial proof,
/// commitments are embedded in declared order, and each revealed byte
/// occupies the most-significant byte of its own big-endian EVM word. The
/// buffer is allocated once at its exact final length and exclusively owned;
/// it aliases no caller memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Envelope {
    layout: EnvelopeLayout,
    num_commitments: usize,
    bytes: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from the caller-supplied fragments.
    ///
    /// Both length preconditions are checked before the buffer is
    /// allocated, so an error leaves no observable side effect.
    pub fn build(
        layout: EnvelopeLayout,
        public_values: &[u8],
        partial_proof: &[u8],
        commitments: &CommitmentSet,
    ) -> Result<Self, VerifyError> {
        if public_values.len() != layout.public_values_size {
            return Err(VerifyError::InvalidPublicValuesLength {
                expected: layout.public_values_size,
                actual: public_values.len(),
            });
        }
        if partial_proof.len() != layout.partial_proof_size() {
            return Err(VerifyError::InvalidProofDataLength {
                expected: layout.partial_proof_size(),
                actual: partial_proof.len(),
            });
        }

        let num_commitments = commitments.len();
        let full_size = layout.full_size(num_commitments);
        let mut bytes = vec![0u8; full_size];

        bytes[..layout.accumulator_size]
            .copy_from_slice(&partial_proof[..layout.accumulator_size]);

        let mut offset = layout.commitments_start();
        for commitment in commitments.as_slice() {
            bytes[offset..offset + COMMITMENT_SIZE].copy_from_slice(commitment);
            offset += COMMITMENT_SIZE;
        }

        // Each revealed byte becomes the most-significant byte of its own
        // big-endian word; the other 31 bytes stay zero.
        let pv_start = layout.public_values_start(num_commitments);
        for (i, byte) in public_values.iter().enumerate() {
            bytes[pv_start + i * EVM_WORD_SIZE] = *byte;
        }

        bytes[full_size - layout.suffix_size..]
            .copy_from_slice(&partial_proof[layout.accumulator_size..]);

        Ok(Self {
            layout,
            num_commitments,
            bytes,
        })
    }

    /// The accumulator segment, spliced from the head of the partial proof.
    pub fn accumulator(&self) -> &[u8] {
        &self.bytes[..self.layout.accumulator_size]
    }

    /// All embedded commitments, concatenated in declared order.
    pub fn commitments(&self) -> &[u8] {
        &self.bytes
            [self.layout.commitments_start()..self.layout.public_values_start(self.num_commitments)]
    }

    /// The `index`-th embedded commitment.
    pub fn commitment(&self, index: usize) -> Option<&Commitment> {
        if index >= self.num_commitments {
            return None;
        }
        let start = self.layout.commitments_start() + index * COMMITMENT_SIZE;
        <&Commitment>::try_from(&self.bytes[start..start + COMMITMENT_SIZE]).ok()
    }

    /// The expanded public values region, one word per revealed byte.
    pub fn public_values(&self) -> &[u8] {
        &self.bytes[self.layout.public_values_start(self.num_commitments)
            ..self.layout.suffix_start(self.num_commitments)]
    }

    /// The word holding the `index`-th revealed byte.
    pub fn public_values_word(&self, index: usize) -> Option<&EVMWord> {
        if index >= self.layout.public_values_size {
            return None;
        }
        let start = self.layout.public_values_start(self.num_commitments) + index * EVM_WORD_SIZE;
        <&EVMWord>::try_from(&self.bytes[start..start + EVM_WORD_SIZE]).ok()
    }

    /// The suffix segment, spliced from the tail of the partial proof.
    pub fn suffix(&self) -> &[u8] {
        &self.bytes[self.bytes.len() - self.layout.suffix_size..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub const fn layout(&self) -> EnvelopeLayout {
        self.layout
    }

    pub const fn num_commitments(&self) -> usize {
        self.num_commitments
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::constants::{FULL_PROOF_SIZE, PARTIAL_PROOF_SIZE, PUBLIC_VALUES_SIZE};
    use rstest::{fixture, rstest};

    #[fixture]
    fn public_values() -> Vec<u8> {
        (0..PUBLIC_VALUES_SIZE as u8).map(|i| i.wrapping_mul(7).wrapping_add(1)).collect()
    }

    // 55 words, word `i` filled with the byte value `i`.
    #[fixture]
    fn partial_proof() -> Vec<u8> {
        let mut proof = vec![0u8; PARTIAL_PROOF_SIZE];
        for (i, word) in proof.chunks_exact_mut(EVM_WORD_SIZE).enumerate() {
            word.fill(i as u8);
        }
        proof
    }

    #[fixture]
    fn commitments() -> CommitmentSet {
        CommitmentSet::exe_and_vm([0xff; 32], [0xee; 32])
    }

    #[fixture]
    fn envelope(
        public_values: Vec<u8>,
        partial_proof: Vec<u8>,
        commitments: CommitmentSet,
    ) -> Envelope {
        Envelope::build(EnvelopeLayout::V1, &public_values, &partial_proof, &commitments)
            .expect("valid inputs")
    }

    #[rstest]
    fn allocate_the_exact_total_length(envelope: Envelope) {
        assert_eq!(envelope.len(), FULL_PROOF_SIZE);
        assert_eq!(envelope.as_bytes().len(), FULL_PROOF_SIZE);
    }

    #[rstest]
    fn splice_the_accumulator_verbatim(envelope: Envelope, partial_proof: Vec<u8>) {
        let accumulator_size = EnvelopeLayout::V1.accumulator_size;
        assert_eq!(envelope.accumulator(), &partial_proof[..accumulator_size]);
        assert_eq!(&envelope.as_bytes()[..accumulator_size], &partial_proof[..accumulator_size]);
    }

    #[rstest]
    fn splice_the_suffix_verbatim(envelope: Envelope, partial_proof: Vec<u8>) {
        let accumulator_size = EnvelopeLayout::V1.accumulator_size;
        assert_eq!(envelope.suffix(), &partial_proof[accumulator_size..]);
        let tail = envelope.len() - EnvelopeLayout::V1.suffix_size;
        assert_eq!(&envelope.as_bytes()[tail..], &partial_proof[accumulator_size..]);
    }

    #[rstest]
    fn embed_commitments_at_their_fixed_offsets(envelope: Envelope) {
        assert_eq!(envelope.commitment(0), Some(&[0xff; 32]));
        assert_eq!(envelope.commitment(1), Some(&[0xee; 32]));
        assert_eq!(envelope.commitment(2), None);

        let start = EnvelopeLayout::V1.commitments_start();
        assert_eq!(&envelope.as_bytes()[start..start + 32], &[0xff; 32]);
        assert_eq!(&envelope.as_bytes()[start + 32..start + 64], &[0xee; 32]);
    }

    #[rstest]
    fn expand_each_revealed_byte_into_a_word(envelope: Envelope, public_values: Vec<u8>) {
        for (i, byte) in public_values.iter().enumerate() {
            let word = envelope.public_values_word(i).unwrap();
            assert_eq!(word[0], *byte);
            assert_eq!(&word[1..], &[0u8; 31]);
        }
        assert_eq!(envelope.public_values_word(PUBLIC_VALUES_SIZE), None);
    }

    #[rstest]
    fn tile_the_buffer_with_its_segment_views(envelope: Envelope) {
        let rebuilt: Vec<u8> = envelope
            .accumulator()
            .iter()
            .chain(envelope.commitments())
            .chain(envelope.public_values())
            .chain(envelope.suffix())
            .copied()
            .collect();
        assert_eq!(rebuilt, envelope.as_bytes());
    }

    #[rstest]
    fn build_with_a_single_commitment(public_values: Vec<u8>, partial_proof: Vec<u8>) {
        let set = CommitmentSet::exe([0xab; 32]);
        let envelope =
            Envelope::build(EnvelopeLayout::V1, &public_values, &partial_proof, &set).unwrap();
        assert_eq!(envelope.len(), EnvelopeLayout::V1.full_size(1));
        assert_eq!(envelope.num_commitments(), 1);
        assert_eq!(envelope.commitment(0), Some(&[0xab; 32]));
        assert_eq!(envelope.commitment(1), None);
    }

    #[rstest]
    fn build_with_zero_length_public_values(partial_proof: Vec<u8>, commitments: CommitmentSet) {
        let layout = EnvelopeLayout {
            public_values_size: 0,
            ..EnvelopeLayout::V1
        };
        let envelope = Envelope::build(layout, &[], &partial_proof, &commitments).unwrap();
        assert_eq!(envelope.public_values(), &[] as &[u8]);
        assert_eq!(envelope.public_values_word(0), None);
        assert_eq!(envelope.len(), layout.full_size(2));
        assert_eq!(envelope.suffix(), &partial_proof[layout.accumulator_size..]);
    }

    mod reject {
        use super::*;

        #[rstest]
        #[case::one_byte_short(PUBLIC_VALUES_SIZE - 1)]
        #[case::one_byte_long(PUBLIC_VALUES_SIZE + 1)]
        #[case::empty(0)]
        fn public_values_of_the_wrong_length(
            partial_proof: Vec<u8>,
            commitments: CommitmentSet,
            #[case] len: usize,
        ) {
            let public_values = vec![0u8; len];
            assert_eq!(
                Envelope::build(EnvelopeLayout::V1, &public_values, &partial_proof, &commitments),
                Err(VerifyError::InvalidPublicValuesLength {
                    expected: PUBLIC_VALUES_SIZE,
                    actual: len,
                })
            );
        }

        #[rstest]
        #[case::one_byte_short(PARTIAL_PROOF_SIZE - 1)]
        #[case::one_byte_long(PARTIAL_PROOF_SIZE + 1)]
        #[case::empty(0)]
        fn a_partial_proof_of_the_wrong_length(
            public_values: Vec<u8>,
            commitments: CommitmentSet,
            #[case] len: usize,
        ) {
            let partial_proof = vec![0u8; len];
            assert_eq!(
                Envelope::build(EnvelopeLayout::V1, &public_values, &partial_proof, &commitments),
                Err(VerifyError::InvalidProofDataLength {
                    expected: PARTIAL_PROOF_SIZE,
                    actual: len,
                })
            );
        }

        #[rstest]
        fn public_values_before_the_proof(commitments: CommitmentSet) {
            // Both inputs are wrong; the public values check comes first.
            assert_eq!(
                Envelope::build(EnvelopeLayout::V1, &[0u8; 7], &[0u8; 7], &commitments),
                Err(VerifyError::InvalidPublicValuesLength {
                    expected: PUBLIC_VALUES_SIZE,
                    actual: 7,
                })
            );
        }
    }
}
