//! Run parameters and the plain-text input file that carries them.
//!
//! The file holds three whitespace-separated tokens: the vertex count `n`,
//! the integer seed and the edge probability `p`. Anything after the third
//! token is ignored.

use thiserror::Error;

/// Rejected run parameters.
///
/// The messages are shown to the user verbatim.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// `n` or the seed is missing or not an integer.
    #[error("n and seed must be integers")]
    NotIntegers,
    /// `p` is missing or not a number.
    #[error("p must be a real number")]
    NotReal,
    /// `n` is below two.
    #[error("n must be greater than 1")]
    TooFewVertices,
    /// `p` lies outside `[0, 1]`.
    #[error("p must be between 0 and 1")]
    ProbabilityOutOfRange,
}

/// Validated inputs for one comparison.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parameters {
    vertex_count: usize,
    seed: u64,
    edge_probability: f64,
}

impl Parameters {
    /// Validates and bundles the three run parameters.
    ///
    /// # Errors
    /// Returns [`InputError::TooFewVertices`] when `vertex_count < 2` and
    /// [`InputError::ProbabilityOutOfRange`] when `edge_probability` is not in
    /// `[0, 1]`.
    pub fn new(vertex_count: usize, seed: u64, edge_probability: f64) -> Result<Self, InputError> {
        if vertex_count < 2 {
            return Err(InputError::TooFewVertices);
        }
        if !(0.0..=1.0).contains(&edge_probability) {
            return Err(InputError::ProbabilityOutOfRange);
        }
        Ok(Self {
            vertex_count,
            seed,
            edge_probability,
        })
    }

    /// Returns `n`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the generator seed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> u64 { self.seed }

    /// Returns `p`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_probability(&self) -> f64 { self.edge_probability }
}

/// Parses the contents of an input file.
///
/// Every token is parsed before any range check, so a file with a bad `p`
/// reports the parse failure even when `n` is also too small. Negative seeds
/// are accepted and reinterpreted as unsigned.
///
/// # Errors
/// Returns the [`InputError`] describing the first problem found.
///
/// # Examples
/// ```
/// use tsunagi_cli::cli::{InputError, parse_parameters};
///
/// let params = parse_parameters("6 42\n0.5\n")?;
/// assert_eq!(params.vertex_count(), 6);
/// assert_eq!(parse_parameters("6 x 0.5"), Err(InputError::NotIntegers));
/// # Ok::<(), InputError>(())
/// ```
pub fn parse_parameters(contents: &str) -> Result<Parameters, InputError> {
    let mut tokens = contents.split_whitespace();
    let raw_count: i64 = next_parsed(&mut tokens).ok_or(InputError::NotIntegers)?;
    let seed: i64 = next_parsed(&mut tokens).ok_or(InputError::NotIntegers)?;
    let edge_probability: f64 = next_parsed(&mut tokens).ok_or(InputError::NotReal)?;

    let vertex_count = usize::try_from(raw_count).map_err(|_| InputError::TooFewVertices)?;
    Parameters::new(vertex_count, seed.cast_unsigned(), edge_probability)
}

fn next_parsed<'a, T: std::str::FromStr>(tokens: &mut impl Iterator<Item = &'a str>) -> Option<T> {
    tokens.next()?.parse().ok()
}
