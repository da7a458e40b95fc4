use crate::prelude::*;

/// One search invocation: where the cubes start, what each attack does, and
/// how many attacks the caller is willing to spend. Validated here, read-only
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    initial: CubeState,
    attacks: AttackMap,
    max_steps: u32,
}

impl SearchRequest {
    pub const DEFAULT_MAX_STEPS: u32 = 10;

    pub fn new(
        initial: CubeState,
        attacks: AttackMap,
        max_steps: u32,
    ) -> Result<Self, ConfigError> {
        if initial.is_empty() {
            return Err(ConfigError::EmptyState);
        }

        let alphabet = initial.alphabet();
        for &value in initial.values() {
            if !alphabet.contains(value) {
                return Err(ConfigError::ValueOutsideAlphabet {
                    value,
                    size: alphabet.size(),
                });
            }
        }

        for (attack, targets) in attacks.entries() {
            for &position in targets {
                if position == 0 || position > initial.len() {
                    return Err(ConfigError::TargetOutOfRange {
                        attack,
                        position,
                        cubes: initial.len(),
                    });
                }
            }
        }

        Ok(SearchRequest {
            initial,
            attacks,
            max_steps,
        })
    }

    pub fn initial(&self) -> &CubeState {
        &self.initial
    }

    pub fn attacks(&self) -> &AttackMap {
        &self.attacks
    }

    pub fn max_steps(&self) -> u32 {
        self.max_steps
    }
}
