pub mod orientation;
pub mod panel;
pub mod power;
pub mod simulation;
pub mod sunlight;
pub mod view;
