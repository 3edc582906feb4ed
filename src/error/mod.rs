mod catalog;
mod io;
mod lookup;

pub use catalog::CatalogError;
pub use io::IoError;
pub use lookup::LookupError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Lookup(#[from] LookupError),
}

pub type Result<T> = std::result::Result<T, Error>;
