// src/generators/password.rs
use std::fmt;

use log::{debug, trace};

use crate::crypto::{OsSource, RandomSource, RandomnessError};
use crate::generators::alphabet::CharClass;
use crate::generators::error::{DrawStep, GenerationError, Result};
use crate::generators::policy::Policy;

/// Produces passwords satisfying a [`Policy`].
///
/// The generator holds nothing but its randomness source, so one instance can
/// serve any number of calls. It is `Sync` whenever the source is, which every
/// [`RandomSource`] must be.
pub struct Generator {
    source: Option<Box<dyn RandomSource>>,
}

impl Generator {
    /// A generator backed by the operating system CSPRNG.
    pub fn new() -> Self {
        Self::with_source(OsSource)
    }

    pub fn with_source<S: RandomSource + 'static>(source: S) -> Self {
        Self {
            source: Some(Box::new(source)),
        }
    }

    /// A generator with no source. Every call to [`Generator::generate`]
    /// fails until one is set.
    pub fn unbound() -> Self {
        Self { source: None }
    }

    pub fn set_randomness_source<S: RandomSource + 'static>(&mut self, source: S) {
        self.source = Some(Box::new(source));
    }

    /// Removes the bound source, leaving the generator unbound.
    pub fn take_randomness_source(&mut self) -> Option<Box<dyn RandomSource>> {
        self.source.take()
    }

    pub fn is_bound(&self) -> bool {
        self.source.is_some()
    }

    pub fn generate(&self, policy: &Policy) -> Result<String> {
        let source = self.source.as_deref().ok_or(GenerationError::Configuration)?;

        policy.validate()?;

        let length = pick_length(source, policy)?;
        debug!(
            "Generating password of length {} ({} required classes)",
            length,
            policy.required_class_count()
        );

        let full_alphabet = policy.full_alphabet();
        let mut buffer = Vec::with_capacity(length);
        for index in 0..length {
            buffer.push(random_element(source, &full_alphabet, DrawStep::Fill { index })?);
        }

        let mut used = vec![false; length];
        let mut used_count = 0;

        for required in policy.required_alphabets() {
            let c = random_element(source, required.alphabet, DrawStep::ClassCharacter(required.class))?;
            let position = free_position(source, &used, used_count, required.class)?;
            trace!("Placed {} character at position {}", required.class, position);

            buffer[position] = c;
            used[position] = true;
            used_count += 1;
        }

        // every alphabet is ASCII, so each byte is one char
        Ok(buffer.into_iter().map(char::from).collect())
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Generator")
            .field("bound", &self.is_bound())
            .finish()
    }
}

// Inverted bounds collapse to min_length.
fn pick_length(source: &dyn RandomSource, policy: &Policy) -> Result<usize> {
    let min = policy.min_length();
    let span = policy.max_length().saturating_sub(min);

    if span == 0 {
        return Ok(min);
    }

    let offset = source
        .below(span + 1)
        .map_err(|source| GenerationError::Randomness { step: DrawStep::Length, source })?;

    Ok(min + offset)
}

fn random_element(source: &dyn RandomSource, alphabet: &[u8], step: DrawStep) -> Result<u8> {
    let index = source
        .below(alphabet.len())
        .map_err(|source| GenerationError::Randomness { step, source })?;

    alphabet
        .get(index)
        .copied()
        .ok_or_else(|| GenerationError::Randomness {
            step,
            source: RandomnessError::SourceUnavailable(format!(
                "index {} out of range for alphabet of {}",
                index,
                alphabet.len()
            )),
        })
}

/// Picks a position uniformly among those not yet used by earlier required
/// classes. Drawing an index into the free positions needs exactly one draw,
/// so the step always terminates.
fn free_position(
    source: &dyn RandomSource,
    used: &[bool],
    used_count: usize,
    class: CharClass,
) -> Result<usize> {
    let free = used.len().saturating_sub(used_count);
    let exhausted = GenerationError::NoFreePosition {
        class,
        length: used.len(),
        used: used_count,
    };

    if free == 0 {
        return Err(exhausted);
    }

    let nth = source.below(free).map_err(|source| GenerationError::Randomness {
        step: DrawStep::ClassPosition(class),
        source,
    })?;

    used.iter()
        .enumerate()
        .filter(|(_, taken)| !**taken)
        .nth(nth)
        .map(|(position, _)| position)
        .ok_or(exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SeededSource;
    use crate::generators::error::PolicyError;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    // Replays a fixed list of draws and records how many were taken.
    struct ScriptedSource {
        draws: Mutex<VecDeque<usize>>,
        taken: Arc<AtomicUsize>,
    }

    impl ScriptedSource {
        fn new(draws: &[usize]) -> (Self, Arc<AtomicUsize>) {
            let taken = Arc::new(AtomicUsize::new(0));
            let source = Self {
                draws: Mutex::new(draws.iter().copied().collect()),
                taken: Arc::clone(&taken),
            };
            (source, taken)
        }
    }

    impl RandomSource for ScriptedSource {
        fn below(&self, n: usize) -> crate::crypto::Result<usize> {
            let next = self.draws.lock().unwrap().pop_front();
            match next {
                Some(value) => {
                    assert!(value < n, "scripted draw {} is not below {}", value, n);
                    self.taken.fetch_add(1, Ordering::SeqCst);
                    Ok(value)
                }
                None => Err(RandomnessError::SourceUnavailable("script exhausted".into())),
            }
        }
    }

    fn count_in(password: &str, class: CharClass) -> usize {
        password.chars().filter(|c| class.contains(*c)).count()
    }

    #[test]
    fn test_unbound_generator_fails_with_configuration_error() {
        let generator = Generator::unbound();
        let result = generator.generate(&Policy::strong(8, 8));
        assert!(matches!(result, Err(GenerationError::Configuration)));
    }

    #[test]
    fn test_taking_source_unbinds() {
        let mut generator = Generator::new();
        assert!(generator.is_bound());
        assert!(generator.take_randomness_source().is_some());
        assert!(matches!(
            generator.generate(&Policy::strong(8, 8)),
            Err(GenerationError::Configuration)
        ));

        generator.set_randomness_source(SeededSource::new(1));
        assert!(generator.generate(&Policy::strong(8, 8)).is_ok());
    }

    #[test]
    fn test_invalid_policy_consumes_no_randomness() {
        let (source, taken) = ScriptedSource::new(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let generator = Generator::with_source(source);

        let result = generator.generate(&Policy::strong(3, 3));

        assert!(matches!(
            result,
            Err(GenerationError::InvalidPolicy(PolicyError::TooShort { min_length: 3, required: 4 }))
        ));
        assert_eq!(taken.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_scripted_draws_produce_exact_output() {
        // fill: 'a' 'A' '0', lowercase char 'z', placed at free position 1
        let (source, taken) = ScriptedSource::new(&[0, 26, 52, 25, 1]);
        let generator = Generator::with_source(source);
        let policy = Policy::new(3, 3, true, false, false, false);

        assert_eq!(generator.generate(&policy).unwrap(), "az0");
        assert_eq!(taken.load(Ordering::SeqCst), 5);
    }

    #[test]
    fn test_required_positions_never_collide() {
        // both position draws are 0, the second must land on the remaining free slot
        let (source, _) = ScriptedSource::new(&[62, 63, 0, 0, 0, 0]);
        let generator = Generator::with_source(source);
        let policy = Policy::new(2, 2, true, true, false, false);

        assert_eq!(generator.generate(&policy).unwrap(), "aA");
    }

    #[test]
    fn test_length_is_drawn_from_inclusive_range() {
        let (source, _) = ScriptedSource::new(&[2, 0, 0, 0, 0, 0, 0]);
        let generator = Generator::with_source(source);
        let policy = Policy::new(4, 6, false, false, false, false);

        assert_eq!(generator.generate(&policy).unwrap(), "aaaaaa");
    }

    #[test]
    fn test_randomness_failure_aborts_with_step() {
        let (source, _) = ScriptedSource::new(&[0]);
        let generator = Generator::with_source(source);

        let result = generator.generate(&Policy::new(4, 4, false, false, false, false));

        assert!(matches!(
            result,
            Err(GenerationError::Randomness { step: DrawStep::Fill { index: 1 }, .. })
        ));
    }

    #[test]
    fn test_exact_length_strong_has_one_of_each() {
        let generator = Generator::new();
        let policy = Policy::strong(4, 4);

        for _ in 0..200 {
            let password = generator.generate(&policy).unwrap();
            assert_eq!(password.len(), 4);
            for class in CharClass::ALL {
                assert_eq!(count_in(&password, class), 1, "{} in {:?}", class, password);
            }
        }
    }

    #[test]
    fn test_generated_passwords_satisfy_policy() {
        let generator = Generator::with_source(SeededSource::new(2024));
        let policies = [
            Policy::strong(8, 16),
            Policy::strong(12, 12),
            Policy::new(1, 5, false, false, true, false),
            Policy::new(2, 30, true, false, false, true),
            Policy::new(0, 3, false, false, false, false),
        ];

        for policy in &policies {
            for _ in 0..100 {
                let password = generator.generate(policy).unwrap();
                let length = password.len();
                assert!(length >= policy.min_length() && length <= policy.max_length());
                assert_eq!(policy.validate_password(&password), Ok(()));
            }
        }
    }

    #[test]
    fn test_filler_comes_from_full_alphabet() {
        let generator = Generator::new();
        let policy = Policy::new(32, 64, false, false, false, false);
        let full = policy.full_alphabet();

        for _ in 0..50 {
            let password = generator.generate(&policy).unwrap();
            assert!(password.bytes().all(|b| full.contains(&b)));
        }
    }

    #[test]
    fn test_same_seed_same_output() {
        let policy = Policy::strong(10, 20);
        let a = Generator::with_source(SeededSource::new(99));
        let b = Generator::with_source(SeededSource::new(99));

        for _ in 0..10 {
            assert_eq!(a.generate(&policy).unwrap(), b.generate(&policy).unwrap());
        }
    }

    #[test]
    fn test_inverted_bounds_use_min_length() {
        let generator = Generator::new();
        let password = generator.generate(&Policy::strong(10, 6)).unwrap();
        assert_eq!(password.len(), 10);
    }

    #[test]
    fn test_free_position_reports_exhaustion() {
        let (source, _) = ScriptedSource::new(&[]);
        let result = free_position(&source, &[true, true], 2, CharClass::Digit);
        assert!(matches!(
            result,
            Err(GenerationError::NoFreePosition { class: CharClass::Digit, length: 2, used: 2 })
        ));
    }

    #[test]
    fn test_generator_is_shareable_across_threads() {
        let generator = Arc::new(Generator::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let generator = Arc::clone(&generator);
                std::thread::spawn(move || generator.generate(&Policy::strong(16, 16)).unwrap())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().len(), 16);
        }
    }
}
