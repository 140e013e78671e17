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

use snafu::Snafu;

/// The verification error type.
///
/// All variants are non-retryable and surface directly to the caller.
/// Length preconditions are checked before any buffer is touched, so a
/// failed call never exposes a partially built envelope.
#[derive(Debug, PartialEq, Eq, Snafu)]
pub enum VerifyError {
    /// The revealed public values do not have the configured length.
    #[snafu(display("Invalid public values length. Expected: {expected}; Got: {actual}"))]
    InvalidPublicValuesLength { expected: usize, actual: usize },
    /// The partial proof does not have the configured length.
    #[snafu(display("Invalid proof data length. Expected: {expected}; Got: {actual}"))]
    InvalidProofDataLength { expected: usize, actual: usize },
    /// The engine rejected the assembled envelope. Carries no further
    /// detail: the engine is opaque and untrusted for diagnostics.
    #[snafu(display("Proof verification failed"))]
    ProofVerificationFailed,
}
