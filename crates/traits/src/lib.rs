pub mod store;
pub mod surface;

pub use store::{InMemoryStore, KeyValueStore, StoreError};
pub use surface::{InMemorySurface, PageSurface, ScrollMode, SurfaceError};
