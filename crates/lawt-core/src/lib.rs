// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Compute facade
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Compute facade for LAWT.
//!
//! Remote model first, local engine on any failure, every success recorded
//! in a bounded persisted history.

pub mod facade;
pub mod format;
pub mod history;
pub mod local;
pub mod model_info;
pub mod remote;
pub mod session;
pub mod status;
pub mod store;
