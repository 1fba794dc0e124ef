use crate::samples::errors::SamplesError;
use crate::samples::models::Sample;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// The fixed, non-empty, cyclically indexable sequence of samples played in rounds.
#[derive(Clone, Debug)]
pub struct SampleDeck {
    samples: Arc<[Sample]>,
    model_name: Arc<str>,
}

impl SampleDeck {
    pub fn new(samples: Vec<Sample>, model_name: &str) -> Result<Self, SamplesError> {
        if samples.is_empty() {
            return Err(SamplesError::Empty);
        }
        Ok(Self {
            samples: samples.into(),
            model_name: model_name.into(),
        })
    }

    pub fn count(&self) -> NonZeroUsize {
        NonZeroUsize::new(self.samples.len()).unwrap_or(NonZeroUsize::MIN)
    }

    /// The sample at `index`, wrapping around the end of the deck.
    pub fn get(&self, index: usize) -> &Sample {
        &self.samples[index % self.samples.len()]
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}
