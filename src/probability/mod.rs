pub mod montecarlo;
pub mod utils;

pub use montecarlo::{normal_draws_with, MonteCarloEngine};
pub use utils::{normal_quantile, standard_normal_cdf, standard_normal_pdf};
