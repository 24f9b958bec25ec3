pub mod ai_contract;
pub mod analyzer;
pub mod programs;
pub mod recommendations;
pub mod risk;
pub mod scoring;

pub use analyzer::HealthAnalyzer;
