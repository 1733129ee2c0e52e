//! Value Objects - immutable values describing how the catalog is queried

pub mod articles;
pub mod search_query;
pub mod sort_spec;
pub mod view;

pub use articles::Articles;
pub use search_query::SearchQuery;
pub use sort_spec::SortSpec;
pub use view::{Group, ViewKind};
