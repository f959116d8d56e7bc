pub mod prefs;
pub mod session;

pub use prefs::{FilePreferences, MemoryPreferences, Preferences, StoreError};
pub use session::{SessionStore, UserPrefs};
