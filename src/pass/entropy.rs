//! Entropy estimate for a uniformly drawn password.

use std::fmt;

/// `length * log2(pool_size)`; zero for an empty pool.
pub fn bits(length: usize, pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl Strength {
    pub fn of(bits: f64) -> Self {
        match bits as u32 {
            0..=35 => Strength::Weak,
            36..=59 => Strength::Fair,
            60..=127 => Strength::Strong,
            _ => Strength::VeryStrong,
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Strength::Weak => "Weak",
            Strength::Fair => "Fair",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        })
    }
}
