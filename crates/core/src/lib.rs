pub mod content;
pub mod menu;
pub mod nav;
pub mod particles;
pub mod section;

pub use content::ContentStore;
pub use menu::MenuController;
pub use nav::NavCoordinator;
pub use particles::{Particle, ParticleKind};
pub use section::Section;
