//! Erros do banco léxico.
//!
//! O algoritmo de Lesk em si nunca falha: "nenhum sentido encontrado" é
//! representado como `None`. Os erros abaixo vêm apenas do colaborador
//! léxico (idioma não suportado, arquivo ausente, WordNet malformado) e são
//! repassados sem alteração a quem chamou.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexiconError>;

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Idioma não suportado pelo léxico: {0}")]
    UnsupportedLanguage(String),

    #[error("Falha de E/S em {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON de léxico inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Falha ao ler o WordNet em {path}: {message}")]
    WordNet { path: PathBuf, message: String },
}

impl LexiconError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LexiconError::Io {
            path: path.into(),
            source,
        }
    }

    /// `{:#}` mantém a cadeia de contexto dos erros do `wordnet-db`.
    pub(crate) fn wordnet(path: impl Into<PathBuf>, cause: impl std::fmt::Display) -> Self {
        LexiconError::WordNet {
            path: path.into(),
            message: format!("{cause:#}"),
        }
    }
}
