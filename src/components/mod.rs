mod add_tags;
mod data_rows;
mod data_table;
mod navigation;
mod paginate;
mod status_banner;

pub use add_tags::DataTableAddTags;
pub use data_rows::DataTableData;
pub use data_table::DataTable;
pub use navigation::DataTableNav;
pub use paginate::Paginate;
pub use status_banner::{StatusBanner, StatusMessage};
