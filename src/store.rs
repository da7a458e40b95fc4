use crate::prelude::*;

use std::collections::HashMap;

/// Owned store of named solver configurations and their cached outcomes.
/// Callers construct and pass it around; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct SolverStore {
    configs: HashMap<String, SearchRequest>,
    solutions: HashMap<String, Outcome>,
}

impl SolverStore {
    pub fn new() -> Self {
        SolverStore::default()
    }

    /// Registers a configuration under `name`, discarding any outcome cached
    /// for a previous configuration of the same name.
    pub fn insert(&mut self, name: impl Into<String>, request: SearchRequest) {
        let name = name.into();
        self.solutions.remove(&name);
        self.configs.insert(name, request);
    }

    pub fn config(&self, name: &str) -> Option<&SearchRequest> {
        self.configs.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<SearchRequest> {
        self.solutions.remove(name);
        self.configs.remove(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn solution(&self, name: &str) -> Option<&Outcome> {
        self.solutions.get(name)
    }

    /// Solves the named configuration and caches the outcome; later calls
    /// return the cache. `None` means the name was never registered.
    pub fn solve(&mut self, name: &str, solver: &Solver) -> Result<Option<Outcome>, SolveError> {
        if let Some(cached) = self.solutions.get(name) {
            return Ok(Some(cached.clone()));
        }
        let Some(request) = self.configs.get(name) else {
            return Ok(None);
        };

        let outcome = solver.solve(request)?;
        self.solutions.insert(name.to_string(), outcome.clone());
        Ok(Some(outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registered_configs_can_be_read_back() {
        let mut store = SolverStore::new();
        store.insert("lab", request_with_state("2 1 1 3", 10));

        assert_eq!(store.config("lab"), Some(&request_with_state("2 1 1 3", 10)));
        assert_eq!(store.names().collect::<Vec<_>>(), vec!["lab"]);
        assert_eq!(store.config("ruins"), None);
    }

    #[test]
    fn solving_caches_the_outcome() {
        let mut store = SolverStore::new();
        store.insert("lab", request_with_state("2 1 1 3", 10));
        let solver = Solver::new(Strategy::Serial);

        assert_eq!(store.solution("lab"), None);
        let solved = store.solve("lab", &solver).unwrap().unwrap();
        assert!(solved.is_solved());
        assert_eq!(store.solution("lab"), Some(&solved));
        assert_eq!(store.solve("lab", &solver).unwrap(), Some(solved));
    }

    #[test]
    fn unknown_names_are_distinguishable_from_failures() {
        let mut store = SolverStore::new();
        let solver = Solver::new(Strategy::Serial);
        assert_eq!(store.solve("ruins", &solver).unwrap(), None);
    }

    #[test]
    fn removing_a_config_drops_its_solution() {
        let mut store = SolverStore::new();
        store.insert("lab", request_with_state("1 1 1 1", 10));
        let solver = Solver::new(Strategy::Serial);
        store.solve("lab", &solver).unwrap();

        assert!(store.remove("lab").is_some());
        assert_eq!(store.config("lab"), None);
        assert_eq!(store.solution("lab"), None);
    }

    #[test]
    fn reinserting_a_name_invalidates_the_cache() {
        let mut store = SolverStore::new();
        store.insert("lab", request_with_state("1 1 1 1", 10));
        let solver = Solver::new(Strategy::Serial);
        store.solve("lab", &solver).unwrap();

        store.insert("lab", request_with_state("2 1 1 3", 10));
        assert_eq!(store.solution("lab"), None);
    }
}
