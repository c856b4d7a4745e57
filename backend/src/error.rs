use thiserror::Error;

use crate::catalog::CatalogError;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("failed to build GPX document: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
}
