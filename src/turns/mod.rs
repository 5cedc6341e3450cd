pub mod generator;
pub mod mirrored;
pub mod tuple;
