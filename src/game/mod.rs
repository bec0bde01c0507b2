// Game rules engine: pure functions over the 9-cell board

pub mod rules;
