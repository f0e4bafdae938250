//! Antithetic variate adapter over a uniform stream.

use risk_core::RandomSource;

/// Records the uniforms behind one draw sequence and replays their
/// mirrors `1 - u` for the paired sequence.
///
/// Antithetic variates halve sampling variance by pairing every
/// simulated path with a mirrored path. The mirroring has to happen on
/// the underlying uniforms, not on the model output: a Box-Muller
/// normal consumes two uniforms per variate, and negating the output
/// would break the pairing of the second uniform. Wrapping the stream
/// keeps the models unaware of the scheme.
///
/// Usage follows a strict protocol per pair: call
/// [`begin_primary`](AntitheticRng::begin_primary), run the first draw
/// sequence, call [`begin_mirror`](AntitheticRng::begin_mirror), run
/// the second. Any uniforms the mirror sequence needs beyond what the
/// primary recorded fall through to fresh draws.
///
/// ```
/// use risk_core::RandomSource;
/// use risk_engine::rng::{AntitheticRng, MonteCarloRng};
///
/// let mut rng = MonteCarloRng::from_seed(9);
/// let mut paired = AntitheticRng::new(&mut rng);
///
/// paired.begin_primary();
/// let u = paired.next_uniform();
/// paired.begin_mirror();
/// assert_eq!(paired.next_uniform(), 1.0 - u);
/// ```
#[derive(Debug)]
pub struct AntitheticRng<'a, R> {
    inner: &'a mut R,
    tape: Vec<f64>,
    mirroring: bool,
    cursor: usize,
}

impl<'a, R: RandomSource> AntitheticRng<'a, R> {
    /// Wrap a uniform stream.
    pub fn new(inner: &'a mut R) -> Self {
        Self {
            inner,
            tape: Vec::new(),
            mirroring: false,
            cursor: 0,
        }
    }

    /// Start a primary draw sequence, discarding the previous tape.
    pub fn begin_primary(&mut self) {
        self.tape.clear();
        self.mirroring = false;
    }

    /// Start replaying the mirror of the recorded sequence.
    pub fn begin_mirror(&mut self) {
        self.mirroring = true;
        self.cursor = 0;
    }
}

impl<R: RandomSource> RandomSource for AntitheticRng<'_, R> {
    fn next_uniform(&mut self) -> f64 {
        if self.mirroring {
            match self.tape.get(self.cursor) {
                Some(&u) => {
                    self.cursor += 1;
                    1.0 - u
                }
                None => self.inner.next_uniform(),
            }
        } else {
            let u = self.inner.next_uniform();
            self.tape.push(u);
            u
        }
    }
}
