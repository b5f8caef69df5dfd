pub mod ai;
pub mod entity;
pub mod maze;
pub mod rng;
pub mod tile;
