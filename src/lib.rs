//! Twisting sphere animation: three nested rings, twisted and spun every
//! frame, stroked in two depth passes onto a drawing surface.

pub mod config;
pub mod error;
pub mod frame;
pub mod graphics;
pub mod logging;
pub mod math;
pub mod point;
pub mod renderer;
pub mod ring;
pub mod scheduler;
pub mod state;
pub mod surface;
pub mod terminal;
pub mod time;
pub mod widget;
