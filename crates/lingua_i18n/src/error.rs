use thiserror::Error;

use crate::catalog::CatalogParseError;

#[derive(Debug, Error)]
pub enum I18nError {
    #[error(transparent)]
    CatalogParse(#[from] CatalogParseError),
}
