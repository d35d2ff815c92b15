//! Character classes and pool building.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!@#$%^&*()-_=+[]{}|;:,.<>?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Special,
}

impl CharClass {
    /// Pool order.
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Special,
    ];

    pub const fn chars(self) -> &'static [u8] {
        match self {
            CharClass::Upper => UPPERCASE,
            CharClass::Lower => LOWERCASE,
            CharClass::Digits => DIGITS,
            CharClass::Special => SPECIAL,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "uppercase letters",
            CharClass::Lower => "lowercase letters",
            CharClass::Digits => "digits",
            CharClass::Special => "special characters",
        }
    }
}

/// Which classes go into the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassSet {
    pub upper: bool,
    pub lower: bool,
    pub digits: bool,
    pub special: bool,
}

impl ClassSet {
    pub const ALL: ClassSet = ClassSet {
        upper: true,
        lower: true,
        digits: true,
        special: true,
    };

    pub const NONE: ClassSet = ClassSet {
        upper: false,
        lower: false,
        digits: false,
        special: false,
    };

    pub fn only(class: CharClass) -> Self {
        let mut set = Self::NONE;
        set.set(class, true);
        set
    }

    pub fn enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.upper,
            CharClass::Lower => self.lower,
            CharClass::Digits => self.digits,
            CharClass::Special => self.special,
        }
    }

    pub fn set(&mut self, class: CharClass, on: bool) {
        match class {
            CharClass::Upper => self.upper = on,
            CharClass::Lower => self.lower = on,
            CharClass::Digits => self.digits = on,
            CharClass::Special => self.special = on,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.upper || self.lower || self.digits || self.special)
    }

    /// Enabled classes in pool order.
    pub fn iter(&self) -> impl Iterator<Item = CharClass> + '_ {
        CharClass::ALL.into_iter().filter(|c| self.enabled(*c))
    }
}

impl Default for ClassSet {
    fn default() -> Self {
        Self::ALL
    }
}

/// Build the character pool: enabled classes concatenated in pool order.
pub fn build(classes: ClassSet) -> Vec<u8> {
    let mut chars = Vec::with_capacity(size(classes));
    for class in classes.iter() {
        chars.extend_from_slice(class.chars());
    }
    chars
}

/// Pool size without building it.
pub fn size(classes: ClassSet) -> usize {
    classes.iter().map(|c| c.chars().len()).sum()
}

/// Whether `c` could appear in a password drawn from `classes`.
pub fn contains(classes: ClassSet, c: char) -> bool {
    c.is_ascii() && classes.iter().any(|class| class.chars().contains(&(c as u8)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_sizes() {
        assert_eq!(CharClass::Upper.chars().len(), 26);
        assert_eq!(CharClass::Lower.chars().len(), 26);
        assert_eq!(CharClass::Digits.chars().len(), 10);
        assert_eq!(CharClass::Special.chars().len(), 26);
    }

    #[test]
    fn classes_are_disjoint() {
        for (i, a) in CharClass::ALL.iter().enumerate() {
            for b in &CharClass::ALL[i + 1..] {
                assert!(a.chars().iter().all(|c| !b.chars().contains(c)), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn pool_follows_fixed_order() {
        let pool = build(ClassSet::ALL);
        assert_eq!(pool.len(), 88);
        assert_eq!(&pool[..26], UPPERCASE);
        assert_eq!(&pool[26..52], LOWERCASE);
        assert_eq!(&pool[52..62], DIGITS);
        assert_eq!(&pool[62..], SPECIAL);
    }

    #[test]
    fn order_ignores_how_the_set_was_built() {
        let mut set = ClassSet::NONE;
        set.set(CharClass::Special, true);
        set.set(CharClass::Upper, true);
        let pool = build(set);
        assert_eq!(&pool[..26], UPPERCASE);
        assert_eq!(&pool[26..], SPECIAL);
    }

    #[test]
    fn empty_set_empty_pool() {
        assert!(ClassSet::NONE.is_empty());
        assert!(build(ClassSet::NONE).is_empty());
        assert_eq!(size(ClassSet::NONE), 0);
    }

    #[test]
    fn size_matches_build() {
        for bits in 0u8..16 {
            let set = ClassSet {
                upper: bits & 1 != 0,
                lower: bits & 2 != 0,
                digits: bits & 4 != 0,
                special: bits & 8 != 0,
            };
            assert_eq!(size(set), build(set).len());
            assert_eq!(set.is_empty(), bits == 0);
        }
    }

    #[test]
    fn membership() {
        let digits = ClassSet::only(CharClass::Digits);
        assert!(contains(digits, '7'));
        assert!(!contains(digits, 'a'));
        assert!(!contains(digits, 'é'));
        assert!(contains(ClassSet::ALL, '?'));
        assert!(!contains(ClassSet::ALL, ' '));
    }
}
