//! # Tokenizador de contexto
//!
//! Divide a sentença em tokens para formar o contexto do Lesk. Usa as
//! fronteiras de palavra do Unicode (UAX #29): palavras e pontuação viram
//! tokens, espaços são descartados.
//!
//! Nenhuma normalização é feita (sem minúsculas, sem stemming): o Lesk compara
//! os tokens literalmente com as palavras das definições.
//!
//! ```rust
//! use wsd_core::tokenizer::context_words;
//!
//! let words = context_words("I went to the bank to deposit money.");
//! assert_eq!(words.last().map(String::as_str), Some("."));
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// Um token extraído do texto original.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "bank", ".").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token na lista (0, 1, 2...).
    pub index: usize,
}

/// Tokeniza um texto preservando offsets.
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .enumerate()
        .map(|(index, (start, segment))| Token {
            text: segment.to_string(),
            start,
            end: start + segment.len(),
            index,
        })
        .collect()
}

/// Apenas os textos dos tokens, prontos para servir de contexto.
pub fn context_words(text: &str) -> Vec<String> {
    tokenize(text).into_iter().map(|t| t.text).collect()
}
