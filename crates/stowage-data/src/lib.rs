pub mod loader;
pub mod schema;

pub use loader::{DataLoadError, RoomData, load_room_data};
