//! 찬송가/교독문 카탈로그

mod model;
mod store;

pub use model::{Hymn, Reading};
pub use store::{Catalog, CatalogError};
