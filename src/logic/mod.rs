pub mod advisor;
pub mod catalogue;
pub mod plans;
pub mod rules;
pub mod soil;

pub use advisor::CropAdvisor;
pub use catalogue::CropCatalogue;
pub use rules::RiskEngine;
pub use soil::SoilAnalyzer;
