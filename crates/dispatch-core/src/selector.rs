//! Best-technician selection over a scored prediction batch.

use std::collections::HashMap;

use crate::domain::{Assignment, PredictionRecord, TaskSignature};

/// Reduce `predictions` to the best-scoring candidate per task signature.
///
/// Records are visited in input order. The first candidate seen for a
/// signature is installed as its winner; a later candidate displaces it
/// only when its probability is strictly greater, so equal scores keep
/// the earliest candidate.
///
/// Probabilities are compared as-is, with no range validation or clamping.
/// Empty input yields an empty map.
pub fn select_best(predictions: &[PredictionRecord]) -> HashMap<TaskSignature, Assignment> {
    let mut best: HashMap<TaskSignature, (f64, Assignment)> = HashMap::new();

    for record in predictions {
        let signature = record.signature();
        let replace = match best.get(&signature) {
            None => true,
            Some((score, _)) => record.probability > *score,
        };
        if replace {
            best.insert(signature, (record.probability, Assignment::from(record)));
        }
    }

    best.into_iter()
        .map(|(signature, (_, assignment))| (signature, assignment))
        .collect()
}
