pub mod audio;
pub mod canvas;
pub mod color;
pub mod config;
pub mod constants;
pub mod layer;
pub mod orbs;
pub mod oscillator;
pub mod particles;
pub mod scheduler;
pub mod shapes;
pub mod stars;
pub mod surface;

pub use audio::*;
pub use canvas::*;
pub use color::*;
pub use config::*;
pub use layer::{Simulation, StepContext};
pub use scheduler::*;
pub use surface::*;
