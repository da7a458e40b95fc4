use crate::prelude::*;

use core::fmt;
use smallvec::SmallVec;

/// The fixed cycle of values a cube can hold, 1..=K.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alphabet(u8);

impl Alphabet {
    pub fn new(size: u8) -> Self {
        assert!(size > 0, "alphabet must hold at least one value");
        Alphabet(size)
    }

    pub fn size(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, value: u8) -> bool {
        (1..=self.0).contains(&value)
    }

    /// Next value in cyclic order. Callers only pass alphabet members;
    /// `SearchRequest` enforces that for every search.
    pub fn rotate(&self, value: u8) -> u8 {
        debug_assert!(self.contains(value));
        value % self.0 + 1
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet(3)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeState {
    cubes: SmallVec<[u8; 16]>,
    alphabet: Alphabet,
}

impl CubeState {
    pub fn new(cubes: impl IntoIterator<Item = u8>) -> Self {
        Self::with_alphabet(cubes, Alphabet::default())
    }

    pub fn with_alphabet(cubes: impl IntoIterator<Item = u8>, alphabet: Alphabet) -> Self {
        CubeState {
            cubes: cubes.into_iter().collect(),
            alphabet,
        }
    }

    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }

    pub fn values(&self) -> &[u8] {
        &self.cubes
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Every cube holds the same value. A single cube is trivially uniform.
    pub fn is_uniform(&self) -> bool {
        match self.cubes.split_first() {
            Some((first, rest)) => rest.iter().all(|v| v == first),
            None => true,
        }
    }

    /// Rotates every cube the attack targets, leaving the rest untouched.
    pub fn apply(mut self, attacks: &AttackMap, attack: Attack) -> Self {
        let alphabet = self.alphabet;
        // Candidate sequences only ever draw ids present in the map.
        let targets = attacks.targets(attack).unwrap_or(&[]);
        for &position in targets {
            let cube = &mut self.cubes[position - 1];
            *cube = alphabet.rotate(*cube);
        }
        self
    }

    pub fn apply_all(self, attacks: &AttackMap, sequence: impl IntoIterator<Item = Attack>) -> Self {
        sequence
            .into_iter()
            .fold(self, |state, attack| state.apply(attacks, attack))
    }
}

impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.cubes.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

impl core::str::FromStr for CubeState {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<CubeState, ConfigError> {
        let cubes = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|token| !token.is_empty())
            .map(|token| {
                token
                    .parse::<u8>()
                    .map_err(|_| ConfigError::BadValue(token.to_string()))
            })
            .collect::<Result<_, _>>()?;

        Ok(CubeState {
            cubes,
            alphabet: Alphabet::default(),
        })
    }
}
