pub mod model;
pub mod stage;
