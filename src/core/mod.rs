pub mod constants;
pub mod cursor;
pub mod nav;
pub mod particles;
pub mod profile;
pub mod scheduler;
pub mod scroll;
pub mod sections;
pub mod startup;

pub use cursor::CursorFollower;
pub use nav::{NavController, NavInput, NavOutcome};
pub use particles::{Particle, ParticleField};
pub use profile::{DeviceProfile, Tuning};
pub use scheduler::{AnimationLoop, FrameGate, FrameHandle, FrameScheduler, LoopState};
pub use startup::{setup_plan, SetupStep};
