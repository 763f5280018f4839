//! Request boundary: turns loosely-typed user input into a sort call.
//!
//! Normalization lives here so the sorters only ever see a valid algorithm,
//! a valid direction and a bounded array.

use crate::{trace, Action, Algorithm, SortDirection, TraceError};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

pub const MIN_ARRAY_SIZE: usize = 5;
pub const MAX_ARRAY_SIZE: usize = 100;
pub const DEFAULT_ARRAY_SIZE: usize = 50;

/// Generated values lie in `MIN_VALUE..=MAX_VALUE`
pub const MIN_VALUE: i64 = 1;
pub const MAX_VALUE: i64 = 100;

/// Clamp a requested array size into the accepted range
pub fn clamp_size(size: usize) -> usize {
    let clamped = size.clamp(MIN_ARRAY_SIZE, MAX_ARRAY_SIZE);
    if clamped != size {
        tracing::warn!(requested = size, clamped, "array size out of range");
    }
    clamped
}

/// Random array of `size` values in `MIN_VALUE..=MAX_VALUE`
pub fn random_array<R: Rng>(rng: &mut R, size: usize) -> Vec<i64> {
    (0..size).map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE)).collect()
}

fn parse_value(part: &str) -> Result<i64, TraceError> {
    match part.parse::<i64>() {
        Ok(value) => Ok(value),
        Err(e) => Err(TraceError::InvalidArray(format!("{part:?}: {e}"))),
    }
}

/// Parse a comma separated list such as `3,1,2`
pub fn parse_array(raw: &str) -> Result<Vec<i64>, TraceError> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_value)
        .collect()
}

/// One trace request as it arrives from a client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceRequest {
    pub algorithm: String,
    pub size: Option<usize>,
    pub direction: Option<String>,
    pub seed: Option<u64>,
    pub array: Option<Vec<i64>>,
}

/// What a client gets back: the input, the steps, and the result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceResponse {
    pub algorithm_name: Algorithm,
    pub sort_direction: SortDirection,
    pub input_array: Vec<i64>,
    pub size: usize,
    pub actions: Vec<Action<i64>>,
    pub total_steps: usize,
    pub final_array: Vec<i64>,
}

impl TraceRequest {
    pub fn new(algorithm: impl Into<String>) -> Self {
        Self {
            algorithm: algorithm.into(),
            ..Default::default()
        }
    }

    pub fn from_json(body: &str) -> Result<Self, TraceError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Resolve the input array: the caller's own, or a generated one
    fn input_array(&self) -> Vec<i64> {
        match &self.array {
            Some(array) if array.len() > MAX_ARRAY_SIZE => {
                tracing::warn!(
                    len = array.len(),
                    max = MAX_ARRAY_SIZE,
                    "truncating supplied array"
                );
                array[..MAX_ARRAY_SIZE].to_vec()
            }
            Some(array) => array.clone(),
            None => {
                let size = clamp_size(self.size.unwrap_or(DEFAULT_ARRAY_SIZE));
                match self.seed {
                    Some(seed) => {
                        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
                        random_array(&mut rng, size)
                    }
                    None => random_array(&mut rand::thread_rng(), size),
                }
            }
        }
    }

    pub fn run(&self) -> Result<TraceResponse, TraceError> {
        let algorithm: Algorithm = self.algorithm.parse()?;
        let direction = self
            .direction
            .as_deref()
            .map(SortDirection::from_param)
            .unwrap_or_default();
        let input_array = self.input_array();

        let result = trace(algorithm, &input_array, direction);
        tracing::info!(
            algorithm = algorithm.name(),
            %direction,
            size = input_array.len(),
            total_steps = result.total_steps,
            "trace request served"
        );

        Ok(TraceResponse {
            algorithm_name: algorithm,
            sort_direction: direction,
            size: input_array.len(),
            input_array,
            actions: result.actions.into_vec(),
            total_steps: result.total_steps,
            final_array: result.final_array,
        })
    }
}
