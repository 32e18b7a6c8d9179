pub mod analytical;
pub mod condition;
pub mod config;
pub mod grid;
pub mod initial;
pub mod mesh;
pub mod norm;
