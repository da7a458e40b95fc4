use crate::prelude::*;

/// Identifier of one available attack.
pub type Attack = u32;

/// Which cube positions each attack rotates. Positions are 1-based, exactly
/// as callers supply them; `SearchRequest` checks them against the state
/// length. Entry order is preserved and fixes the enumeration order of
/// candidate sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackMap {
    entries: Vec<(Attack, Vec<usize>)>,
}

impl AttackMap {
    pub fn new(
        entries: impl IntoIterator<Item = (Attack, Vec<usize>)>,
    ) -> Result<Self, ConfigError> {
        let entries: Vec<_> = entries.into_iter().collect();
        for (i, (attack, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(seen, _)| seen == attack) {
                return Err(ConfigError::DuplicateAttack(*attack));
            }
        }
        Ok(AttackMap { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attack ids in the order they were supplied.
    pub fn ids(&self) -> Vec<Attack> {
        self.entries.iter().map(|(attack, _)| *attack).collect()
    }

    pub fn targets(&self, attack: Attack) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|(id, _)| *id == attack)
            .map(|(_, targets)| targets.as_slice())
    }

    pub fn entries(&self) -> impl Iterator<Item = (Attack, &[usize])> {
        self.entries
            .iter()
            .map(|(attack, targets)| (*attack, targets.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_the_supplied_order() {
        let map = AttackMap::new([(4, vec![1]), (1, vec![2]), (3, vec![1])]).unwrap();
        assert_eq!(map.ids(), vec![4, 1, 3]);
    }

    #[test]
    fn looks_up_targets_by_id() {
        let map = standard_attacks();
        assert_eq!(map.targets(2), Some(&[2, 3, 1][..]));
        assert_eq!(map.targets(9), None);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = AttackMap::new([(1, vec![1]), (2, vec![2]), (1, vec![3])]);
        assert_eq!(result, Err(ConfigError::DuplicateAttack(1)));
    }
}
