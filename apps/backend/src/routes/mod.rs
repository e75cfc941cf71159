pub mod answers;
pub mod cards;
pub mod comparisons;
pub mod settings;
