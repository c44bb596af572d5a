//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Seed Module
//!
//! Per-instance seeding. Every evaluation instance gets its own random source
//! derived from its identifier, so perturbing the same instance twice yields
//! the same text regardless of the order instances are processed in.

use rand::rngs::SmallRng;
use rand::SeedableRng;
use xxhash_rust::xxh3::xxh3_64;

/// Derives a deterministic seed from an instance identifier.
///
/// Identifiers of the form `id1234` seed with their numeric suffix (`1234`).
/// Any other identifier is hashed with xxh3.
pub fn derive_seed(instance_id: &str) -> u64 {
    let suffix = instance_id.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    match suffix.parse::<u64>() {
        Ok(seed) if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) => seed,
        _ => xxh3_64(instance_id.as_bytes()),
    }
}

/// Builds a fresh random source for one instance.
pub fn seeded_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}
