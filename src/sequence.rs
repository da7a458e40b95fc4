use crate::prelude::*;

use smallvec::SmallVec;

/// One candidate attack sequence. Depths stay small, so candidates live
/// inline without touching the heap.
pub type Sequence = SmallVec<[Attack; 8]>;

/// Lazily enumerates the full Cartesian power: every length-`depth` sequence
/// over `attacks`, in lexicographic order of the supplied attack list. The
/// space is never materialized; deep depths with astronomically many
/// candidates cost no memory up front.
pub struct Sequences<'a> {
    attacks: &'a [Attack],
    digits: Vec<usize>,
    done: bool,
}

impl<'a> Sequences<'a> {
    pub fn with_depth(attacks: &'a [Attack], depth: usize) -> Self {
        Sequences {
            attacks,
            digits: vec![0; depth],
            done: attacks.is_empty() && depth > 0,
        }
    }

    pub fn chunks(self, size: usize) -> Chunks<'a> {
        assert!(size > 0, "chunks must hold at least one candidate");
        Chunks {
            sequences: self,
            size,
        }
    }
}

impl Iterator for Sequences<'_> {
    type Item = Sequence;

    fn next(&mut self) -> Option<Sequence> {
        if self.done {
            return None;
        }

        let sequence = self.digits.iter().map(|&d| self.attacks[d]).collect();

        // Odometer increment, least significant digit last.
        self.done = true;
        for digit in self.digits.iter_mut().rev() {
            *digit += 1;
            if *digit < self.attacks.len() {
                self.done = false;
                break;
            }
            *digit = 0;
        }

        Some(sequence)
    }
}

/// Fixed-size batches of candidates, sized for handing to one worker at a
/// time.
pub struct Chunks<'a> {
    sequences: Sequences<'a>,
    size: usize,
}

impl Iterator for Chunks<'_> {
    type Item = Vec<Sequence>;

    fn next(&mut self) -> Option<Vec<Sequence>> {
        let chunk: Vec<Sequence> = self.sequences.by_ref().take(self.size).collect();
        if chunk.is_empty() {
            None
        } else {
            Some(chunk)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    fn collect(attacks: &[Attack], depth: usize) -> Vec<Vec<Attack>> {
        Sequences::with_depth(attacks, depth)
            .map(|s| s.to_vec())
            .collect()
    }

    #[test]
    fn covers_the_cartesian_power() {
        let sequences = collect(&[1, 2, 3], 2);
        assert_eq!(sequences.len(), 9);
        assert_eq!(sequences.first(), Some(&vec![1, 1]));
        assert_eq!(sequences.last(), Some(&vec![3, 3]));
    }

    #[test]
    fn orders_by_the_supplied_attack_list() {
        assert_eq!(
            collect(&[4, 2], 2),
            vec![vec![4, 4], vec![4, 2], vec![2, 4], vec![2, 2]],
        );
    }

    #[test]
    fn depth_zero_is_exactly_the_empty_sequence() {
        assert_eq!(collect(&[1, 2], 0), vec![Vec::new()]);
    }

    #[test]
    fn no_attacks_means_no_candidates() {
        assert_eq!(collect(&[], 1), Vec::<Vec<Attack>>::new());
    }

    #[test]
    fn every_candidate_is_distinct() {
        let sequences = collect(&[1, 2, 3], 3);
        let distinct = sequences
            .iter()
            .collect::<std::collections::HashSet<_>>()
            .len();
        assert_eq!(distinct, sequences.len());
    }

    #[quickcheck]
    fn count_is_attacks_to_the_depth(attacks: u8, depth: u8) -> bool {
        let attacks: Vec<Attack> = (1..=(attacks % 4 + 1) as Attack).collect();
        let depth = (depth % 5) as usize;
        let count = Sequences::with_depth(&attacks, depth).count();
        count == attacks.len().pow(depth as u32)
    }

    #[cfg(test)]
    mod chunks {
        use super::*;

        #[test]
        fn batches_cover_every_candidate_in_order() {
            let attacks = [1, 2, 3];
            let rechunked: Vec<Vec<Attack>> = Sequences::with_depth(&attacks, 3)
                .chunks(7)
                .flatten()
                .map(|s| s.to_vec())
                .collect();
            assert_eq!(rechunked, collect(&attacks, 3));
        }

        #[test]
        fn batches_are_bounded_and_the_last_may_be_partial() {
            let attacks = [1, 2, 3];
            let sizes: Vec<usize> = Sequences::with_depth(&attacks, 2)
                .chunks(4)
                .map(|chunk| chunk.len())
                .collect();
            assert_eq!(sizes, vec![4, 4, 1]);
        }
    }
}
