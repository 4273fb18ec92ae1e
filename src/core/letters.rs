//! Compact letter sets and letter multisets
//!
//! Letters are ASCII uppercase bytes `b'A'..=b'Z'`. A [`LetterSet`] packs
//! the admissible letters of one cell into 26 bits, and [`LetterCounts`]
//! tracks how often each letter occurs.

use std::fmt;

const ALPHABET_LEN: usize = 26;

#[inline]
const fn letter_index(letter: u8) -> usize {
    debug_assert!(letter.is_ascii_uppercase());
    (letter - b'A') as usize
}

/// Set of uppercase letters stored as a 26-bit mask
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// Every letter A-Z
    pub const ALL: Self = Self((1 << ALPHABET_LEN) - 1);

    /// Set holding exactly one letter
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        Self(1 << letter_index(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_uppercase() && self.0 & (1 << letter_index(letter)) != 0
    }

    #[inline]
    pub const fn insert(&mut self, letter: u8) {
        self.0 |= 1 << letter_index(letter);
    }

    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        self.0 &= !(1 << letter_index(letter));
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate the letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'A'..=b'Z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == Self::ALL {
            return f.write_str("{*}");
        }
        f.write_str("{")?;
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        f.write_str("}")
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// Multiset of uppercase letters
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterCounts([u8; ALPHABET_LEN]);

impl LetterCounts {
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> u8 {
        self.0[letter_index(letter)]
    }

    #[inline]
    pub const fn add(&mut self, letter: u8) {
        self.0[letter_index(letter)] += 1;
    }

    /// Remove one occurrence, saturating at zero
    #[inline]
    pub const fn remove(&mut self, letter: u8) {
        let slot = &mut self.0[letter_index(letter)];
        *slot = slot.saturating_sub(1);
    }

    /// Total number of letters counted
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.iter().map(|&n| usize::from(n)).sum()
    }

    /// True if no letter occurs more often here than in `ceiling`
    #[must_use]
    pub fn fits_within(&self, ceiling: &Self) -> bool {
        self.0.iter().zip(&ceiling.0).all(|(used, max)| used <= max)
    }
}

impl fmt::Debug for LetterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                (b'A'..=b'Z')
                    .filter(|&letter| self.get(letter) > 0)
                    .map(|letter| (letter as char, self.get(letter))),
            )
            .finish()
    }
}

impl FromIterator<u8> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}
