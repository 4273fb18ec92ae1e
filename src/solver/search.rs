//! Backtracking over the six word slots
//!
//! Shared by the grid builder and the constraint solver. A single
//! [`Assignment`] buffer is mutated in place: placing a word writes its
//! letters into the cells it covers, and backtracking undoes exactly the
//! cells that no other placed slot still owns.

use crate::core::topology::SLOTS;
use crate::core::{CELL_COUNT, Grid, LetterCounts, SLOT_COUNT, WORD_LEN, Waffle, Word};

const ALPHABET_LEN: usize = 26;

/// Candidate words for one slot, indexed by letter at each offset
pub(crate) struct SlotCandidates<'w> {
    words: Vec<&'w Word>,
    // Ascending positions into `words`, per offset and letter
    by_letter: [[Vec<u32>; ALPHABET_LEN]; WORD_LEN],
}

impl<'w> SlotCandidates<'w> {
    pub(crate) fn new(words: Vec<&'w Word>) -> Self {
        let mut by_letter: [[Vec<u32>; ALPHABET_LEN]; WORD_LEN] =
            std::array::from_fn(|_| std::array::from_fn(|_| Vec::new()));

        for (position, word) in words.iter().enumerate() {
            for (offset, &letter) in word.letters().iter().enumerate() {
                by_letter[offset][usize::from(letter - b'A')].push(position as u32);
            }
        }

        Self { words, by_letter }
    }

    pub(crate) fn len(&self) -> usize {
        self.words.len()
    }

    /// Shortest posting list among the offsets already fixed by crossings
    fn shortlist(&self, fixed: &[Option<u8>; WORD_LEN]) -> Option<&[u32]> {
        fixed
            .iter()
            .enumerate()
            .filter_map(|(offset, letter)| {
                letter.map(|l| self.by_letter[offset][usize::from(l - b'A')].as_slice())
            })
            .min_by_key(|list| list.len())
    }
}

/// Mutable slot assignment with undo
struct Assignment<'w> {
    // 0 marks an empty cell
    letters: [u8; CELL_COUNT],
    // Number of placed slots covering each cell
    owners: [u8; CELL_COUNT],
    chosen: [Option<&'w Word>; SLOT_COUNT],
    usage: LetterCounts,
    nodes: u64,
}

impl<'w> Assignment<'w> {
    fn new() -> Self {
        Self {
            letters: [0; CELL_COUNT],
            owners: [0; CELL_COUNT],
            chosen: [None; SLOT_COUNT],
            usage: LetterCounts::default(),
            nodes: 0,
        }
    }

    fn fixed_letters(&self, slot: usize) -> [Option<u8>; WORD_LEN] {
        SLOTS[slot].map(|cell| (self.owners[cell] > 0).then_some(self.letters[cell]))
    }

    /// Place `word` in `slot` if it is unused, agrees with every crossing
    /// and keeps letter usage under `ceiling`
    fn try_place(&mut self, slot: usize, word: &'w Word, ceiling: Option<&LetterCounts>) -> bool {
        if self.chosen.iter().flatten().any(|&placed| placed == word) {
            return false;
        }

        let mut usage = self.usage;
        for (offset, &cell) in SLOTS[slot].iter().enumerate() {
            let letter = word.letter_at(offset);
            if self.owners[cell] == 0 {
                usage.add(letter);
            } else if self.letters[cell] != letter {
                return false;
            }
        }

        if let Some(ceiling) = ceiling
            && !usage.fits_within(ceiling)
        {
            return false;
        }

        for (offset, &cell) in SLOTS[slot].iter().enumerate() {
            self.letters[cell] = word.letter_at(offset);
            self.owners[cell] += 1;
        }
        self.usage = usage;
        self.chosen[slot] = Some(word);
        true
    }

    fn undo(&mut self, slot: usize) {
        let Some(word) = self.chosen[slot].take() else {
            return;
        };
        for (offset, &cell) in SLOTS[slot].iter().enumerate() {
            self.owners[cell] -= 1;
            if self.owners[cell] == 0 {
                self.letters[cell] = 0;
                self.usage.remove(word.letter_at(offset));
            }
        }
    }

    /// Grid of a complete assignment; every cell is covered by some slot
    fn grid(&self) -> Grid {
        Grid::from_letters_unchecked(self.letters)
    }

    fn waffle(&self) -> Waffle {
        let grid = self.grid();
        Waffle::from_parts(grid.words(), grid)
    }
}

/// Outcome of one search run
pub(crate) struct SearchOutcome {
    pub waffle: Option<Waffle>,
    pub nodes: u64,
}

/// Depth-first search over slots 0..6 in order
pub(crate) struct SlotSearch<'w> {
    slots: [SlotCandidates<'w>; SLOT_COUNT],
    ceiling: Option<LetterCounts>,
}

impl<'w> SlotSearch<'w> {
    pub(crate) fn new(slots: [Vec<&'w Word>; SLOT_COUNT]) -> Self {
        Self {
            slots: slots.map(SlotCandidates::new),
            ceiling: None,
        }
    }

    /// Reject any partial assignment using a letter more often than allowed
    pub(crate) const fn with_ceiling(mut self, ceiling: LetterCounts) -> Self {
        self.ceiling = Some(ceiling);
        self
    }

    /// Number of candidates per slot
    pub(crate) fn candidate_counts(&self) -> [usize; SLOT_COUNT] {
        std::array::from_fn(|slot| self.slots[slot].len())
    }

    /// Run the search, returning the first full assignment `accept` approves
    pub(crate) fn run(&self, mut accept: impl FnMut(&Grid) -> bool) -> SearchOutcome {
        let mut state = Assignment::new();
        let found = self.descend(0, &mut state, &mut accept);
        SearchOutcome {
            waffle: found.then(|| state.waffle()),
            nodes: state.nodes,
        }
    }

    fn descend(
        &self,
        slot: usize,
        state: &mut Assignment<'w>,
        accept: &mut dyn FnMut(&Grid) -> bool,
    ) -> bool {
        state.nodes += 1;
        if slot == SLOT_COUNT {
            return accept(&state.grid());
        }

        let candidates = &self.slots[slot];
        let fixed = state.fixed_letters(slot);
        match candidates.shortlist(&fixed) {
            Some(positions) => positions
                .iter()
                .any(|&position| self.attempt(slot, candidates.words[position as usize], state, accept)),
            None => candidates
                .words
                .iter()
                .any(|&word| self.attempt(slot, word, state, accept)),
        }
    }

    fn attempt(
        &self,
        slot: usize,
        word: &'w Word,
        state: &mut Assignment<'w>,
        accept: &mut dyn FnMut(&Grid) -> bool,
    ) -> bool {
        if !state.try_place(slot, word, self.ceiling.as_ref()) {
            return false;
        }
        if self.descend(slot + 1, state, accept) {
            return true;
        }
        state.undo(slot);
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn all_slots(words: &[Word]) -> [Vec<&Word>; SLOT_COUNT] {
        std::array::from_fn(|_| words.iter().collect())
    }

    #[test]
    fn shortlist_picks_smallest_posting_list() {
        let list = words(&["ABCDE", "AXCDE", "QBCDE"]);
        let candidates = SlotCandidates::new(list.iter().collect());

        assert!(candidates.shortlist(&[None; WORD_LEN]).is_none());

        let fixed = [Some(b'A'), Some(b'X'), None, None, None];
        assert_eq!(candidates.shortlist(&fixed), Some(&[1u32][..]));
    }

    #[test]
    fn place_and_undo_restore_state() {
        let list = words(&["OAKEN", "ASKEW"]);
        let mut state = Assignment::new();

        assert!(state.try_place(0, &list[0], None));
        assert!(state.try_place(1, &list[1], None));
        // Shared cell 10 holds K once
        assert_eq!(state.usage.get(b'K'), 1);
        assert_eq!(state.usage.total(), 9);

        state.undo(1);
        assert_eq!(state.letters[10], b'K');
        assert_eq!(state.usage.total(), 5);

        state.undo(0);
        assert_eq!(state.letters, [0; CELL_COUNT]);
        assert_eq!(state.usage, LetterCounts::default());
    }

    #[test]
    fn crossing_mismatch_is_rejected() {
        let list = words(&["OAKEN", "ABCDE"]);
        let mut state = Assignment::new();
        assert!(state.try_place(0, &list[0], None));
        // Slot 1 offset 2 must be K
        assert!(!state.try_place(1, &list[1], None));
        assert_eq!(state.usage.total(), 5);
    }

    #[test]
    fn duplicate_word_is_rejected() {
        let list = words(&["AAAAA"]);
        let mut state = Assignment::new();
        assert!(state.try_place(0, &list[0], None));
        assert!(!state.try_place(1, &list[0], None));
    }

    #[test]
    fn ceiling_limits_usage() {
        let list = words(&["OAKEN"]);
        let ceiling: LetterCounts = b"OAKE".iter().copied().collect();
        let mut state = Assignment::new();
        assert!(!state.try_place(0, &list[0], Some(&ceiling)));
    }

    #[test]
    fn search_finds_the_only_waffle() {
        let list = words(&["BOARD", "LOWER", "OAKEN", "DINER", "ASKEW", "BROIL"]);
        let search = SlotSearch::new(all_slots(&list));
        let outcome = search.run(|_| true);

        let waffle = outcome.waffle.unwrap();
        assert_eq!(waffle.grid().to_string(), "BROILOAOASKEWREEDINER");
        assert!(outcome.nodes >= 7);
    }

    #[test]
    fn accept_can_veto_solutions() {
        let list = words(&["BOARD", "LOWER", "OAKEN", "DINER", "ASKEW", "BROIL"]);
        let search = SlotSearch::new(all_slots(&list));
        let mut seen = 0;
        let outcome = search.run(|_| {
            seen += 1;
            false
        });
        assert!(outcome.waffle.is_none());
        assert!(seen >= 1);
    }
}
