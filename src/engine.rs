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

use crate::envelope::Envelope;
use crate::errors::VerifyError;

/// Opaque capability that checks a fully assembled envelope.
///
/// The engine receives the envelope bytes as its sole input and reports
/// nothing beyond acceptance. Any outcome other than acceptance is treated
/// as a verification failure.
pub trait VerificationEngine {
    fn verify(&self, envelope: &[u8]) -> bool;
}

/// Any plain predicate over the envelope bytes acts as an engine.
impl<F> VerificationEngine for F
where
    F: Fn(&[u8]) -> bool,
{
    fn verify(&self, envelope: &[u8]) -> bool {
        self(envelope)
    }
}

/// Submit the envelope to the engine.
///
/// Read-only from the adapter's perspective: the envelope is borrowed, the
/// adapter holds no state across the call, and engine rejection maps to the
/// single opaque [`VerifyError::ProofVerificationFailed`] with no engine
/// diagnostics forwarded.
pub fn dispatch<E: VerificationEngine>(envelope: &Envelope, engine: &E) -> Result<(), VerifyError> {
    if engine.verify(envelope.as_bytes()) {
        Ok(())
    } else {
        Err(VerifyError::ProofVerificationFailed)
    }
}
