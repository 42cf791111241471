//! Masthead Core - Author, magazine and article relationship model
//!
//! Authors and magazines are linked through articles. Every article is
//! appended to an [`ArticleRegistry`], and all relationship queries are
//! answered by scanning that registry.

pub mod article;
pub mod author;
pub mod error;
pub mod limits;
pub mod magazine;
pub mod registry;
pub mod sync;

pub use article::{Article, ArticleId, ArticleRecord};
pub use author::{Author, AuthorId, AuthorRecord};
pub use error::{Error, ErrorKind, Result};
pub use limits::ValidationError;
pub use magazine::{Magazine, MagazineId, MagazineRecord, CONTRIBUTING_AUTHOR_THRESHOLD};
pub use registry::{ArticleRegistry, RegistrySnapshot};
