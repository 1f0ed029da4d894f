pub mod domain;
pub mod flags;
pub mod ingest;
pub mod navigator;
pub mod ports;
pub mod render;
pub mod session;

pub use domain::{Category, Paper, RawAuthor, RawEntry, RawTag, ERROR_ENTRY_TITLE};
pub use flags::match_flags;
pub use ingest::build_category;
pub use navigator::{Command, Cursor, Navigator, Selection, SessionEnd, Step};
pub use ports::{FeedSource, PortError, PortResult, Terminal};
pub use render::{Frame, Line, LineKind, PaperFrame};
pub use session::BrowseSession;
