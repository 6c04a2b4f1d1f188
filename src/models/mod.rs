pub mod item;
pub mod process;
pub mod query;
pub mod record;

pub use item::{add_tag, is_copied_marker, remove_tag, Item, TagUpdate};
pub use process::{ProcessAction, ProcessFlags};
pub use query::{RecordQuery, SearchRequest};
pub use record::{AuthMeta, Record, RecordMeta};
