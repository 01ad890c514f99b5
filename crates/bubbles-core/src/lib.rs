pub mod background;
pub mod bubble;
pub mod clock;
pub mod config;
pub mod constants;
pub mod dice;
pub mod driver;
pub mod error;
pub mod interp;
pub mod memory;
pub mod scheduler;
pub mod sound;
pub mod surface;

pub use background::*;
pub use bubble::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use dice::*;
pub use driver::*;
pub use error::*;
pub use interp::*;
pub use memory::*;
pub use scheduler::*;
pub use sound::*;
pub use surface::*;
