use crate::error::{read_input, SfResult};
use crate::scorer::Objective;
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Args, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Maximise total preferences (sum), people with >= 1 preference (count), or both (hybrid)
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Objective::Hybrid)]
    pub objective: Objective,

    /// Base temperature of the coldest annealer (annealer i runs at base * 2^i)
    #[arg(short = 'b', long, default_value_t = 1.0)]
    pub base_temperature: f64,

    /// Stop once the base temperature falls to this value
    #[arg(short = 'e', long, default_value_t = 0.00001)]
    pub final_temperature: f64,

    /// Geometric cooling factor per round, strictly between 0 and 1
    #[arg(short = 'c', long, default_value_t = 0.9)]
    pub cooling_rate: f64,

    /// Metropolis iterations per annealer per round
    #[arg(short = 'i', long, default_value_t = 1000)]
    pub iterations: usize,

    /// Seat swaps per neighbour
    #[arg(short = 's', long, default_value_t = 1)]
    pub swaps: usize,

    /// Number of concurrent annealers on the temperature ladder
    #[arg(short = 'a', long, default_value_t = 6)]
    pub annealers: usize,

    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            objective: Objective::Hybrid,
            base_temperature: 1.0,
            final_temperature: 0.00001,
            cooling_rate: 0.9,
            iterations: 1000,
            swaps: 1,
            annealers: 6,
            seed: None,
        }
    }
}

impl SearchParams {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        Ok(serde_json::from_str(&read_input(path)?)?)
    }

    /// Overlays only the flags the user actually typed onto `self`.
    pub fn merge_from_cli(&mut self, cli: &SearchParams, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$field = cli.$field.clone();
                }
            };
        }

        update_if_present!(objective);
        update_if_present!(base_temperature);
        update_if_present!(final_temperature);
        update_if_present!(cooling_rate);
        update_if_present!(iterations);
        update_if_present!(swaps);
        update_if_present!(annealers);
        update_if_present!(seed);
    }
}
