pub mod clock;
pub mod duration;
pub mod stopping_criterion;
