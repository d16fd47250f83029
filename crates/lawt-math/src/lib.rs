// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Math
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Local matrix-algebra engine for LAWT Core.
//!
//! Used as the fallback whenever the remote model service is unreachable.

pub mod accuracy;
pub mod eigen;
pub mod elementary;
pub mod inverse;
pub mod random;
