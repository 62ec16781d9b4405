pub mod efficiency;
pub mod pipeline;

pub use efficiency::{EfficiencyEngine, EfficiencyRules};
pub use pipeline::DerivePipeline;
