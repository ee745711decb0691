// Domain layer - statistics models and the rules that shape them
pub mod meal;
pub mod overview;
pub mod reading;
pub mod report;
pub mod samples;
pub mod series;
pub mod time_range;
