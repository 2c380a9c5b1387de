//! # wsd-core — Desambiguação de Sentido de Palavras (WSD) com Lesk
//!
//! Dada uma sentença e uma palavra ambígua, escolhe o sentido (synset) cuja
//! definição de dicionário mais se sobrepõe ao contexto. É o algoritmo de Lesk
//! original (1986): uma única passada, sem etiquetagem gramatical e sem
//! aprendizado.
//!
//! ## Arquitetura
//!
//! 1.  **Entrada**: sentença bruta e palavra ambígua.
//! 2.  **Tokenização** ([`tokenizer`]): a sentença vira o contexto.
//! 3.  **Candidatos** ([`lexicon`]): sentidos da palavra vindos de um banco
//!     léxico ([`LexicalDatabase`]), com formas base via [`morphy`].
//! 4.  **Pontuação e escolha** ([`lesk`]): sobreposição entre contexto e definição.
//! 5.  **Saída**: o [`Synset`] escolhido, ou `None`.
//!
//! O banco léxico pode vir do excerto embutido ([`corpus`]), de um arquivo
//! JSON ([`Lexicon::from_json_file`]) ou da distribuição do WordNet ([`wordnet`]).
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use wsd_core::{corpus::builtin_lexicon, lesk, DEFAULT_LANG};
//!
//! let lexicon = builtin_lexicon();
//! let context = ["I", "went", "to", "the", "bank", "to", "deposit", "money", "."];
//!
//! let sense = lesk(&lexicon, context, "bank", Some("n"), DEFAULT_LANG).unwrap();
//! assert_eq!(
//!     sense.map(|s| s.name.as_str()),
//!     Some("depository_financial_institution.n.01")
//! );
//! ```

pub mod corpus;
pub mod error;
pub mod lesk;
pub mod lexicon;
pub mod morphy;
pub mod pipeline;
pub mod sense;
pub mod tokenizer;
pub mod wordnet;

pub use error::LexiconError;
pub use lesk::{lesk, lesk_with_senses};
pub use lexicon::{LexicalDatabase, Lexicon, DEFAULT_LANG};
pub use pipeline::{Disambiguation, DisambiguationRequest, PipelineEvent, WsdPipeline};
pub use sense::{Definable, PartOfSpeechTagged, Synset};
pub use tokenizer::Token;
