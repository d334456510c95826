use super::discretizer::{StateKey, NUM_STATES};
use crate::game::Action;

/// Dense table of action-value estimates
///
/// One row per discretized state, one column per action, stored as a single
/// flat buffer with computed offsets (`state * 3 + action`). Values start at
/// zero and are only ever changed through [`QTable::nudge`], which also
/// records the cell as visited for diagnostics. The table lives for the
/// agent's lifetime and accumulates across episodes.
#[derive(Debug, Clone)]
pub struct QTable {
    values: Vec<f32>,
    visited: Vec<bool>,
}

impl QTable {
    /// Create a zero-initialized table covering every (state, action) pair
    pub fn new() -> Self {
        Self {
            values: vec![0.0; NUM_STATES * Action::COUNT],
            visited: vec![false; NUM_STATES * Action::COUNT],
        }
    }

    fn offset(state: StateKey, action: Action) -> usize {
        state.index() * Action::COUNT + action.index()
    }

    /// Current estimate for a (state, action) cell
    pub fn get(&self, state: StateKey, action: Action) -> f32 {
        self.values[Self::offset(state, action)]
    }

    /// The three action values for a state, in action-index order
    pub fn row(&self, state: StateKey) -> &[f32] {
        let start = state.index() * Action::COUNT;
        &self.values[start..start + Action::COUNT]
    }

    /// Greedy action for a state
    ///
    /// First maximum wins, so ties break toward the lowest action index
    /// (Forward before Left before Right).
    pub fn greedy_action(&self, state: StateKey) -> Action {
        let row = self.row(state);
        let mut best = 0;
        for i in 1..Action::COUNT {
            if row[i] > row[best] {
                best = i;
            }
        }
        Action::from_index(best)
    }

    /// Maximum action value for a state
    pub fn max_value(&self, state: StateKey) -> f32 {
        self.get(state, self.greedy_action(state))
    }

    /// Add `delta` to a single cell and mark it visited
    ///
    /// This is the only mutation path; the TD update must touch exactly the
    /// cell that was visited, never the whole table.
    pub fn nudge(&mut self, state: StateKey, action: Action, delta: f32) {
        let i = Self::offset(state, action);
        self.values[i] += delta;
        self.visited[i] = true;
    }

    /// Mean value over all cells
    pub fn mean(&self) -> f32 {
        self.values.iter().sum::<f32>() / self.values.len() as f32
    }

    /// Number of (state, action) cells never touched by an update
    pub fn unvisited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| !v).count()
    }

    /// Location and value of the current table maximum
    pub fn max_entry(&self) -> (StateKey, Action, f32) {
        let mut best = 0;
        for i in 1..self.values.len() {
            if self.values[i] > self.values[best] {
                best = i;
            }
        }
        (
            StateKey::from_index(best / Action::COUNT),
            Action::from_index(best % Action::COUNT),
            self.values[best],
        )
    }
}

impl Default for QTable {
    fn default() -> Self {
        Self::new()
    }
}
