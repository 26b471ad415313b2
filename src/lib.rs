pub mod editor;
pub mod errors;
pub mod fetch;
pub mod profile;
pub mod state;

pub use editor::EditSession;
pub use errors::{DirectoryError, FieldError, Result};
pub use fetch::{avatar_url, DirectoryClient, ProfileSource, DEFAULT_ENDPOINT};
pub use profile::{Address, Company, Profile, ProfileId};
pub use state::{DeleteRequest, DirectoryState};
