pub mod directions;
pub mod separation;
