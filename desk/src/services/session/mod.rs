//! # Session Services
//!
//! Client-held authentication state and the gate that enforces it.
//!
//! ```text
//! session/
//! ├── storage.rs      - KeyValueStore trait, JSON FileStore, MemoryStore
//! ├── clock.rs        - Clock trait (system / manual)
//! ├── store.rs        - SessionStore: token + expiry + cached user
//! ├── preferences.rs  - ThemePreference (outlives the session)
//! └── guard.rs        - SessionGuard and the 1s ExpiryWatcher
//! ```

pub mod clock;
pub mod guard;
pub mod preferences;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use guard::{ExpiryWatcher, GuardState, SessionGuard};
pub use preferences::{ThemeMode, ThemePreference};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
pub use store::SessionStore;
