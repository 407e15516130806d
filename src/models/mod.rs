pub mod loaders;
pub mod material;
pub mod policy;
pub mod quiz;
pub mod snapshot;
pub mod topic;

pub use loaders::load_scoring_policy;
pub use material::Material;
pub use policy::ScoringPolicy;
pub use quiz::{Difficulty, Question, Quiz};
pub use snapshot::{SessionSnapshot, ToolOutcome};
pub use topic::Topic;
