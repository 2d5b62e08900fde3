mod interval_combination;

pub use interval_combination::IntervalCombination;
