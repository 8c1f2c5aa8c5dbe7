use std::path::PathBuf;

use oxigraph::sparql::EvaluationError;
use oxigraph::store::{LoaderError, SerializerError, StorageError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CineError {
    #[error("RDF file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid IRI '{iri}': {message}")]
    InvalidIri { iri: String, message: String },

    #[error("Only SELECT queries are supported")]
    UnsupportedQuery,

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("SPARQL query error: {0}")]
    Query(#[from] EvaluationError),

    #[error("Failed to read RDF file: {0}")]
    Load(#[from] LoaderError),

    #[error("Failed to write RDF file: {0}")]
    Save(#[from] SerializerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CineError>;
