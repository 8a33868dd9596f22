use std::cmp::Ordering;
use std::fmt;

/// Complex number ordered by magnitude, then real part, then imaginary
/// part. The chained `total_cmp` keeps the order total, so `Complex` can be
/// sorted by every algorithm; callers are expected to construct it from
/// finite components.
#[derive(Debug, Clone, Copy)]
pub struct Complex {
    pub real: f64,
    pub imag: f64,
}

impl Complex {
    pub fn new(real: f64, imag: f64) -> Self {
        Complex { real, imag }
    }

    pub fn magnitude(&self) -> f64 {
        self.real.hypot(self.imag)
    }
}

impl Ord for Complex {
    fn cmp(&self, other: &Self) -> Ordering {
        self.magnitude()
            .total_cmp(&other.magnitude())
            .then_with(|| self.real.total_cmp(&other.real))
            .then_with(|| self.imag.total_cmp(&other.imag))
    }
}

impl PartialOrd for Complex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// equality derived from the total order keeps Eq consistent with Ord
impl PartialEq for Complex {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Complex {}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}i", self.real, self.imag)
    }
}
