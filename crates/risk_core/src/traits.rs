//! Foundational traits shared across the stack.

/// A stream of uniform variates on `[0, 1)`.
///
/// Every sampler in the stack draws its randomness through this trait, so
/// deterministic generators, antithetic adapters, and recorded streams can
/// be swapped in underneath any distribution model without touching the
/// model code.
///
/// Implementations are stateful and advance on every draw; a generator
/// must never be shared between concurrently running simulations.
///
/// # Examples
/// ```
/// use risk_core::traits::RandomSource;
///
/// struct Counter(u64);
///
/// impl RandomSource for Counter {
///     fn next_uniform(&mut self) -> f64 {
///         self.0 += 1;
///         (self.0 % 10) as f64 / 10.0
///     }
/// }
///
/// let mut source = Counter(0);
/// let mut buf = [0.0; 4];
/// source.fill_uniform(&mut buf);
/// assert_eq!(buf, [0.1, 0.2, 0.3, 0.4]);
/// ```
pub trait RandomSource {
    /// Draw the next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Fill `out` with uniform variates in `[0, 1)`.
    fn fill_uniform(&mut self, out: &mut [f64]) {
        for slot in out.iter_mut() {
            *slot = self.next_uniform();
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_uniform(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_fill_uniform_default_impl() {
        let mut source = Fixed(0.25);
        let mut buf = [0.0; 8];
        source.fill_uniform(&mut buf);
        assert!(buf.iter().all(|&u| u == 0.25));
    }

    #[test]
    fn test_mut_ref_forwarding() {
        fn draw<R: RandomSource>(mut rng: R) -> f64 {
            rng.next_uniform()
        }

        let mut source = Fixed(0.5);
        assert_eq!(draw(&mut source), 0.5);
        assert_eq!(source.next_uniform(), 0.5);
    }
}
