use super::observation::Observation;

/// Number of distinct discretized states: 8 binary features
pub const NUM_STATES: usize = 1 << 8;

/// Index of a discretized state in the Q-table
///
/// The key packs the 8 observation features into one integer so the table
/// can be a flat array with computed offsets instead of a hashed map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey(usize);

impl StateKey {
    /// Raw index, always in `[0, NUM_STATES)`
    pub fn index(&self) -> usize {
        self.0
    }

    /// Build a key directly from a raw index; panics if out of range.
    /// Mostly useful in tests and diagnostics.
    pub fn from_index(index: usize) -> Self {
        assert!(index < NUM_STATES, "state index {index} out of range");
        Self(index)
    }
}

/// Discretize an observation into a table key
///
/// Binary features are packed positionally. The distance feature is a
/// 2-valued trend bucket rather than an absolute binning: 0 when the head
/// moved closer to the food than it was on the previous tick, 1 otherwise.
/// `prev_distance` is the older slot of the engine's two-slot history; right
/// after a reset it is 0.0, so the first decision of an episode always reads
/// "not closer".
pub fn discretize(obs: &Observation, prev_distance: f32) -> StateKey {
    let food_farther = obs.food_distance >= prev_distance;

    let bits = [
        obs.danger_ahead,
        obs.danger_left,
        obs.danger_right,
        food_farther,
        obs.food_left,
        obs.food_right,
        obs.food_ahead,
        obs.food_behind,
    ];

    let index = bits
        .iter()
        .fold(0usize, |acc, &bit| (acc << 1) | bit as usize);

    StateKey(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_observation() -> Observation {
        Observation {
            danger_ahead: false,
            danger_left: false,
            danger_right: false,
            food_distance: 5.0,
            food_left: false,
            food_right: false,
            food_ahead: false,
            food_behind: false,
        }
    }

    #[test]
    fn test_all_clear_is_key_one() {
        // No dangers, no food flags, distance not closer: only the trend bit set
        let key = discretize(&base_observation(), 0.0);
        assert_eq!(key.index(), 0b0001_0000);
    }

    #[test]
    fn test_moving_closer_clears_trend_bit() {
        let key = discretize(&base_observation(), 6.0);
        assert_eq!(key.index(), 0);
    }

    #[test]
    fn test_keys_stay_in_range() {
        let obs = Observation {
            danger_ahead: true,
            danger_left: true,
            danger_right: true,
            food_distance: 1.0,
            food_left: true,
            food_right: true,
            food_ahead: true,
            food_behind: true,
        };
        let key = discretize(&obs, 0.0);
        assert_eq!(key.index(), NUM_STATES - 1);
        assert!(key.index() < NUM_STATES);
    }

    #[test]
    fn test_each_feature_has_its_own_bit() {
        let base = discretize(&base_observation(), 6.0).index();
        assert_eq!(base, 0);

        let mut obs = base_observation();
        obs.danger_ahead = true;
        let a = discretize(&obs, 6.0).index();

        let mut obs = base_observation();
        obs.food_behind = true;
        let b = discretize(&obs, 6.0).index();

        let mut obs = base_observation();
        obs.danger_ahead = true;
        obs.food_behind = true;
        let ab = discretize(&obs, 6.0).index();

        assert_ne!(a, b);
        assert_eq!(ab, a | b);
    }

    #[test]
    #[should_panic]
    fn test_from_index_rejects_out_of_range() {
        StateKey::from_index(NUM_STATES);
    }
}
