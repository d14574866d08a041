//! Persistence module - player progression saved to a RON file.

mod error;
mod plugin;
mod save;

pub use error::PersistenceError;
pub use plugin::PersistencePlugin;
pub use save::{read_save, write_save, SaveData, SavePath};
