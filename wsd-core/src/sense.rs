//! # Sentidos (Synsets)
//!
//! O seletor de Lesk não depende de nenhum tipo concreto de sentido: ele só
//! precisa ler a **classe gramatical** e a **definição** de cada candidato.
//! Essas duas capacidades são expressas pelos traits [`PartOfSpeechTagged`] e
//! [`Definable`]; qualquer tipo que os implemente pode ser desambiguado.
//!
//! [`Synset`] é a implementação concreta usada pelo [`Lexicon`](crate::lexicon::Lexicon),
//! no estilo do WordNet: `bank.n.01`, `bank.n.02`, ...

use std::fmt;

use serde::{Deserialize, Serialize};

/// Substantivo
pub const NOUN: &str = "n";
/// Verbo
pub const VERB: &str = "v";
/// Adjetivo
pub const ADJ: &str = "a";
/// Adjetivo satélite (agrupado com os adjetivos no WordNet)
pub const ADJ_SAT: &str = "s";
/// Advérbio
pub const ADV: &str = "r";

/// Ordem em que as classes são consultadas quando nenhuma é informada.
/// Satélites vivem nos mesmos arquivos que os adjetivos.
pub const LOOKUP_ORDER: [&str; 4] = [NOUN, VERB, ADJ, ADV];

/// Algo que possui uma definição textual (glosa).
pub trait Definable {
    fn definition(&self) -> &str;
}

/// Algo que carrega uma etiqueta de classe gramatical (`n`, `v`, `a`, `s`, `r`).
pub trait PartOfSpeechTagged {
    fn part_of_speech(&self) -> &str;
}

impl<T: Definable + ?Sized> Definable for &T {
    fn definition(&self) -> &str {
        (**self).definition()
    }
}

impl<T: PartOfSpeechTagged + ?Sized> PartOfSpeechTagged for &T {
    fn part_of_speech(&self) -> &str {
        (**self).part_of_speech()
    }
}

/// Um conjunto de sinônimos com uma definição comum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Synset {
    /// Identificador no formato `lema.pos.NN` (ex: "bank.n.01").
    pub name: String,
    /// Classe gramatical: "n", "v", "a", "s" ou "r".
    pub pos: String,
    /// Glosa sem os exemplos.
    pub definition: String,
    /// Frases de exemplo extraídas da glosa.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Lemas do synset, com `_` no lugar de espaços. Vazio = usa o lema do nome.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lemmas: Vec<String>,
    /// Offset no arquivo `data.*` do WordNet (0 quando não se aplica).
    #[serde(default)]
    pub offset: u64,
}

impl Synset {
    pub fn new(name: &str, pos: &str, definition: &str) -> Self {
        Self {
            name: name.to_string(),
            pos: pos.to_string(),
            definition: definition.to_string(),
            examples: vec![],
            lemmas: vec![],
            offset: 0,
        }
    }

    pub fn with_lemmas(mut self, lemmas: &[&str]) -> Self {
        self.lemmas = lemmas.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_examples(mut self, examples: &[&str]) -> Self {
        self.examples = examples.iter().map(|e| e.to_string()).collect();
        self
    }

    /// Lema principal, extraído do nome (`bank.n.01` → `bank`).
    pub fn head_lemma(&self) -> &str {
        let mut parts = self.name.rsplitn(3, '.');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(_), Some(_), Some(lemma)) => lemma,
            _ => &self.name,
        }
    }

    /// Lemas sob os quais o synset é indexado.
    pub fn lemma_names(&self) -> Vec<&str> {
        if self.lemmas.is_empty() {
            vec![self.head_lemma()]
        } else {
            self.lemmas.iter().map(String::as_str).collect()
        }
    }
}

impl Definable for Synset {
    fn definition(&self) -> &str {
        &self.definition
    }
}

impl PartOfSpeechTagged for Synset {
    fn part_of_speech(&self) -> &str {
        &self.pos
    }
}

impl fmt::Display for Synset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Synset('{}')", self.name)
    }
}
