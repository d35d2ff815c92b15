//! Password generation settings.

use crate::pass::{ClassSet, charset, entropy};

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Signed so that a negative answer reaches the generator and is
    /// rejected there, not at parse time.
    pub length: i64,
    pub classes: ClassSet,
    pub to_clipboard: bool,
    pub quiet: bool,
}

impl Settings {
    pub fn pool_size(&self) -> usize {
        charset::size(self.classes)
    }

    pub fn entropy_bits(&self) -> f64 {
        let length = usize::try_from(self.length).unwrap_or(0);
        entropy::bits(length, self.pool_size())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            classes: ClassSet::ALL,
            to_clipboard: false,
            quiet: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert_eq!(s.length, 16);
        assert_eq!(s.classes, ClassSet::ALL);
        assert_eq!(s.pool_size(), 88);
        assert!(!s.to_clipboard);
    }

    #[test]
    fn negative_length_has_no_entropy() {
        let s = Settings {
            length: -4,
            ..Default::default()
        };
        assert_eq!(s.entropy_bits(), 0.0);
    }
}
