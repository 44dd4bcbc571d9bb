use std::ops::ControlFlow;

use birads_findings::Observation;
use log::{debug, trace};

use crate::result::{Assessment, ClassificationResult};
use crate::rules::{Accumulator, CASCADE};

/// Classifies a validated observation.
///
/// Total and deterministic: every valid observation yields exactly one
/// result, and identical observations yield identical results.
pub fn classify(obs: &Observation) -> ClassificationResult {
    classify_traced(obs).result
}

/// Like [`classify`], but also returns which rules wrote to the result.
pub fn classify_traced(obs: &Observation) -> Assessment {
    trace!("classifying {obs:?}");
    let outcome = CASCADE.iter().try_fold(Accumulator::default(), |acc, rule| {
        let step = (rule.apply)(acc, obs);
        match &step {
            ControlFlow::Break(_) => debug!("cascade stopped at {}", rule.id),
            ControlFlow::Continue(acc) => trace!("after {}: {:?}", rule.id, acc.category()),
        }
        step
    });
    let acc = match outcome {
        ControlFlow::Continue(acc) | ControlFlow::Break(acc) => acc,
    };
    match acc.finish() {
        Some(assessment) => {
            debug!("classified as {}", assessment.result.category);
            assessment
        }
        // Every path through the cascade sets a category.
        None => unreachable!("rule cascade produced no category for {obs:?}"),
    }
}
