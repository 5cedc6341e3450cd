pub mod model;
pub mod prop;
