// ─────────────────────────────────────────────────────────────────────
// LAWT Core — Compute facade
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Orchestration: validated request, remote attempt, local fallback,
//! history record.
//!
//! The facade is the single writer of its history. Every mutating call
//! takes `&mut self`; wrap it in a `Mutex` to share across threads.

use lawt_math::accuracy::estimate;
use lawt_math::random::random_matrix;
use lawt_types::config::EngineConfig;
use lawt_types::error::LawtResult;
use lawt_types::matrix::Matrix;
use lawt_types::operation::{
    ComputationRequest, ComputationResult, ComputeMethod, OperationKind, Source,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::history::{Computation, HistoryEntry, HistoryStore};
use crate::local::compute_local_with_rng;
use crate::remote::{interpret, RemoteCompute, RemoteRequest};
use crate::session::SessionId;
use crate::status::{check_status, ModelStatus};
use crate::store::{open_store, KeyValueStore};

pub struct ComputeFacade<R: RemoteCompute, S: KeyValueStore> {
    remote: R,
    history: HistoryStore<S>,
    method: ComputeMethod,
    session: SessionId,
    rng: StdRng,
}

impl<R: RemoteCompute> ComputeFacade<R, Box<dyn KeyValueStore>> {
    /// Facade over the store `config` selects (file-backed when
    /// `storage_dir` is set).
    pub fn from_config(remote: R, config: &EngineConfig) -> LawtResult<Self> {
        let storage = open_store(config)?;
        Self::new(remote, storage, config)
    }
}

impl<R: RemoteCompute, S: KeyValueStore> ComputeFacade<R, S> {
    /// Validate `config`, load or create the session identity, then load
    /// the history. A corrupt history fails here.
    pub fn new(remote: R, mut storage: S, config: &EngineConfig) -> LawtResult<Self> {
        config.validate()?;
        let mut rng = StdRng::from_entropy();
        let session = SessionId::load_or_create(&mut storage, &config.session_slot, &mut rng)?;
        let history = HistoryStore::load(storage, &config.history_slot, config.history_capacity)?;
        info!(
            session = %session,
            method = %config.method,
            history = history.len(),
            "compute facade ready"
        );
        Ok(ComputeFacade {
            remote,
            history,
            method: config.method,
            session,
            rng,
        })
    }

    /// Reseed the RNG behind the 3x3 eigen placeholder and random operands.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Compute `request` and record it.
    ///
    /// Any remote failure (transport, rejection, malformed payload) falls
    /// through to the local engine once, without retry. Errors from the
    /// local engine are returned and nothing is recorded.
    pub fn compute(&mut self, request: ComputationRequest) -> LawtResult<&HistoryEntry> {
        let operation = request.operation();
        let started = Instant::now();

        let wire = RemoteRequest::from_request(&request, self.method);
        let remote = self
            .remote
            .compute(&wire)
            .and_then(|response| interpret(&request, response));
        let (result, source) = match remote {
            Ok(result) => (result, Source::Remote),
            Err(e) => {
                warn!(%operation, error = %e, "remote compute failed, using local engine");
                let result = compute_local_with_rng(&request, &mut self.rng).map_err(|e| {
                    debug!(%operation, error = %e, "local compute failed");
                    e
                })?;
                (result, Source::LocalFallback)
            }
        };
        let elapsed_seconds = started.elapsed().as_secs_f64();

        let accuracy = match self.method {
            ComputeMethod::Model => Some(estimate(operation, request.operand_a())),
            ComputeMethod::Reference => None,
        };
        debug!(%operation, %source, elapsed_seconds, "computed");

        self.history.record(Computation {
            request,
            result,
            source,
            method: self.method,
            elapsed_seconds,
            accuracy,
        })
    }

    /// Validate raw operand rows, then [`compute`](Self::compute).
    pub fn compute_rows(
        &mut self,
        operation: OperationKind,
        matrix_a: Vec<Vec<f64>>,
        matrix_b: Option<Vec<Vec<f64>>>,
    ) -> LawtResult<&HistoryEntry> {
        let request = ComputationRequest::from_rows(operation, matrix_a, matrix_b)?;
        self.compute(request)
    }

    /// Random operand drawn from the facade's RNG.
    pub fn random_operand(&mut self, rows: usize, cols: usize) -> LawtResult<Matrix> {
        Ok(random_matrix(rows, cols, &mut self.rng)?)
    }

    pub fn history(&self) -> &HistoryStore<S> {
        &self.history
    }

    pub fn clear_history(&mut self) -> LawtResult<()> {
        self.history.clear()
    }

    pub fn restore(&self, id: u64) -> Option<(ComputationRequest, ComputationResult)> {
        self.history.restore(id)
    }

    pub fn status(&self) -> ModelStatus {
        check_status(&self.remote)
    }

    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn method(&self) -> ComputeMethod {
        self.method
    }

    pub fn set_method(&mut self, method: ComputeMethod) {
        self.method = method;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::remote::OfflineRemote;
    use crate::store::MemoryStore;

    fn offline() -> ComputeFacade<OfflineRemote, MemoryStore> {
        ComputeFacade::new(OfflineRemote, MemoryStore::new(), &EngineConfig::default())
            .unwrap()
            .with_seed(11)
    }

    #[test]
    fn test_offline_falls_back_and_records() {
        let mut f = offline();
        let entry = f
            .compute_rows(OperationKind::Transpose, vec![vec![1.0, 2.0]], None)
            .unwrap();
        assert_eq!(entry.computation.source, Source::LocalFallback);
        assert!(entry.computation.accuracy.is_some());
        assert_eq!(f.history().len(), 1);
    }

    #[test]
    fn test_reference_method_has_no_accuracy() {
        let mut f = offline();
        f.set_method(ComputeMethod::Reference);
        let entry = f
            .compute_rows(OperationKind::Inverse, vec![vec![2.0]], None)
            .unwrap();
        assert_eq!(entry.computation.accuracy, None);
        assert_eq!(entry.computation.method, ComputeMethod::Reference);
    }

    #[test]
    fn test_invalid_input_never_recorded() {
        let mut f = offline();
        assert!(f
            .compute_rows(OperationKind::Transpose, vec![vec![1.0], vec![]], None)
            .is_err());
        assert!(f
            .compute_rows(OperationKind::Inverse, vec![vec![0.0]], None)
            .is_err());
        assert!(f.history().is_empty());
    }

    #[test]
    fn test_session_is_persisted_alongside_history() {
        let f = offline();
        let slot = EngineConfig::default().session_slot;
        assert_eq!(
            f.history().storage().read(&slot).unwrap().as_deref(),
            Some(f.session().as_str())
        );
    }

    #[test]
    fn test_random_operand_shape() {
        let mut f = offline();
        let m = f.random_operand(2, 3).unwrap();
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert!(f.random_operand(0, 3).is_err());
    }
}
