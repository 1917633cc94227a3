use serde::Deserialize;

/// Application settings read from `Rocket.toml` and `ROCKET_*` variables,
/// next to Rocket's own keys.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TriviaConfig {
    pub cors_origin: String,
    pub quiz_seed: Option<u64>
}

impl Default for TriviaConfig {
    fn default() -> Self {
        TriviaConfig {
            cors_origin: "*".into(),
            quiz_seed: None
        }
    }
}
