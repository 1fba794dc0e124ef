use crate::cli::Args;
use deck::SampleDeck;
use errors::SamplesError;
use models::Sample;
use std::fs::File;
use std::io::{BufRead, BufReader};

pub mod consts;
pub mod deck;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod responses;

pub fn init(args: &Args) -> Result<SampleDeck, SamplesError> {
    let samples_file = File::open(&args.samples).map_err(|source| SamplesError::Open {
        path: args.samples.clone(),
        source,
    })?;
    let samples = parse(BufReader::new(samples_file))?;
    let deck = SampleDeck::new(samples, &args.model_name)?;
    tracing::info!(
        "Loaded {} samples from `{}`.",
        deck.count(),
        args.samples.display()
    );
    Ok(deck)
}

/// Reads newline-delimited JSON samples, skipping blank lines.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Sample>, SamplesError> {
    let mut samples = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| SamplesError::Read {
            line: line_number,
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let sample: Sample =
            serde_json::from_str(&line).map_err(|source| SamplesError::Malformed {
                line: line_number,
                source,
            })?;
        sample
            .validate()
            .map_err(|reason| SamplesError::Invalid {
                line: line_number,
                reason,
            })?;
        samples.push(sample);
    }
    Ok(samples)
}
