//! Batch executor for independent parses
//!
//! Uses Rayon for work-stealing parallelism with a configurable thread count.

use crate::error::{Error, Result};
use crate::parser::{parse, Expression};
use rayon::prelude::*;

/// Configuration for batch parsing
#[derive(Debug, Clone)]
pub struct ParallelConfig {
    /// Maximum number of worker threads (default: num_cpus)
    pub max_parallelism: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            max_parallelism: num_cpus::get(),
        }
    }
}

/// Parse every buffer in `sources` on a thread pool
///
/// # Returns
/// * `Ok(results)` - one parse outcome per source, in input order. A failing
///   source does not affect the others.
/// * `Err(Error::ThreadPool)` - the pool could not be built
///
/// # Example
/// ```
/// use sexpr_reader::{parse_batch, ParallelConfig};
///
/// let results = parse_batch(&["(a b)", ")"], &ParallelConfig::default()).unwrap();
/// assert_eq!(results[0].as_ref().unwrap().len(), 1);
/// assert!(results[1].is_err());
/// ```
pub fn parse_batch<S>(
    sources: &[S],
    config: &ParallelConfig,
) -> Result<Vec<Result<Vec<Expression>>>>
where
    S: AsRef<[u8]> + Sync,
{
    // Empty batch fast path
    if sources.is_empty() {
        return Ok(Vec::new());
    }

    // Single source - no pool needed
    if sources.len() == 1 {
        return Ok(vec![parse(&sources[0])]);
    }

    let threads = config.max_parallelism.clamp(1, sources.len());
    tracing::debug!(sources = sources.len(), threads, "parsing batch");

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|e| Error::ThreadPool(e.to_string()))?;

    Ok(pool.install(|| sources.par_iter().map(|source| parse(source)).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_batch_basic() {
        let sources = vec!["(+ 1 2)", "a b c", "\"s\""];
        let results = parse_batch(&sources, &ParallelConfig::default()).unwrap();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap()[0].to_string(), "(+ 1 2)");
        assert_eq!(results[1].as_ref().unwrap().len(), 3);
        assert_eq!(results[2].as_ref().unwrap()[0], Expression::string("s"));
    }

    #[test]
    fn test_parse_batch_empty() {
        let sources: Vec<&str> = vec![];
        let results = parse_batch(&sources, &ParallelConfig::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_parse_batch_errors_stay_isolated() {
        let sources = vec!["(ok)", "((()", "1.2.3", "fine"];
        let config = ParallelConfig { max_parallelism: 2 };
        let results = parse_batch(&sources, &config).unwrap();

        assert!(results[0].is_ok());
        assert_eq!(
            results[1].as_ref().unwrap_err().to_string(),
            "unterminated list"
        );
        assert!(matches!(results[2], Err(Error::InvalidNumber { .. })));
        assert_eq!(
            results[3].as_ref().unwrap(),
            &vec![Expression::symbol("fine")]
        );
    }

    #[test]
    fn test_parse_batch_zero_parallelism_is_clamped() {
        let sources = vec![b"x".to_vec(), b"(y)".to_vec()];
        let config = ParallelConfig { max_parallelism: 0 };
        let results = parse_batch(&sources, &config).unwrap();
        assert!(results.iter().all(|r| r.is_ok()));
    }

    #[test]
    fn test_parse_batch_matches_sequential() {
        let sources: Vec<String> = (0..32).map(|i| format!("(n {} \"{}\")", i, i)).collect();
        let batch = parse_batch(&sources, &ParallelConfig::default()).unwrap();
        for (source, result) in sources.iter().zip(batch) {
            assert_eq!(result, parse(source));
        }
    }
}
