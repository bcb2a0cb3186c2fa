pub mod dates;
pub mod rng;
pub mod validation;
