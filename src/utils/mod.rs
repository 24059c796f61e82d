//! Utility functions for boring-algebra

use crate::protocols::Algebra;
use crate::{element::Element, Result};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

/// Save object to JSON file
pub fn save_json<T: Serialize, P: AsRef<Path>>(obj: &T, path: P) -> Result<()> {
    let json = serde_json::to_string_pretty(obj)?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Load object from JSON file
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    let obj = serde_json::from_str(&contents)?;
    Ok(obj)
}

/// Save the representations of every element an algebra has seen, in
/// order of first encounter
pub fn save_representations<A, P>(algebra: &A, path: P) -> Result<()>
where
    A: Algebra,
    A::Rep: Serialize,
    P: AsRef<Path>,
{
    save_json(&algebra.representations(), path)
}

/// Load representations from a JSON file and add them to an algebra.
///
/// The representations are narrowed on the way in, so loading into a
/// different concrete algebra canonicalizes them there.
pub fn load_representations<A, P>(algebra: &A, path: P) -> Result<Vec<Element<A>>>
where
    A: Algebra,
    A::Rep: DeserializeOwned,
    P: AsRef<Path>,
{
    let reps: Vec<A::Rep> = load_json(path)?;
    Ok(reps.into_iter().map(|rep| algebra.element(rep)).collect())
}

/// Draw up to `size` distinct positions of `pool` at random.
///
/// With a seed the draw is reproducible.
pub fn sample_reps<H: Clone>(pool: &[H], size: usize, seed: Option<u64>) -> Vec<H> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    pool.choose_multiple(&mut rng, size).cloned().collect()
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Simple timer, logs its elapsed time when dropped
    pub struct Timer {
        start: Instant,
        name: &'static str,
    }

    impl Timer {
        /// Start new timer
        pub fn new(name: &'static str) -> Self {
            Timer {
                start: Instant::now(),
                name,
            }
        }

        /// Get elapsed time in seconds
        pub fn elapsed(&self) -> f32 {
            self.start.elapsed().as_secs_f32()
        }
    }

    impl Drop for Timer {
        fn drop(&mut self) {
            tracing::debug!(timer = self.name, seconds = self.elapsed(), "finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebras::{BaseSet, Monoid};

    #[test]
    fn test_sample_reps_seeded() {
        let pool: Vec<i64> = (0..100).collect();
        let first = sample_reps(&pool, 10, Some(42));
        let second = sample_reps(&pool, 10, Some(42));
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);

        let mut distinct = first.clone();
        distinct.sort();
        distinct.dedup();
        assert_eq!(distinct.len(), 10);
    }

    #[test]
    fn test_sample_larger_than_pool() {
        let pool = vec!['a', 'b', 'c'];
        assert_eq!(sample_reps(&pool, 10, Some(1)).len(), 3);
    }

    #[test]
    fn test_json_serialization() {
        let words = Monoid::new(|a: &String, b: &String| format!("{a}{b}"), String::new());
        let _ = words.element("bar".to_string());
        let _ = words.element("foo".to_string());
        let path = std::env::temp_dir().join("boring_algebra_test_reps.json");

        save_representations(&words, &path).unwrap();
        let loaded: Vec<String> = load_json(&path).unwrap();
        assert_eq!(loaded, vec!["bar".to_string(), "foo".to_string()]);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_into_narrowed_algebra() {
        let path = std::env::temp_dir().join("boring_algebra_test_narrow.json");
        save_json(&vec![3_i64, 10, 17], &path).unwrap();

        let mod7 = BaseSet::with_narrow(|n: i64| n.rem_euclid(7));
        let elements = load_representations(&mod7, &path).unwrap();
        assert_eq!(elements.len(), 3);
        assert!(elements[0].is(&elements[1]));
        assert!(elements[1].is(&elements[2]));
        assert_eq!(mod7.len(), 1);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result: Result<Vec<i64>> = load_json("/nonexistent/boring_algebra.json");
        assert!(matches!(result, Err(crate::AlgebraError::Io(_))));
    }
}
