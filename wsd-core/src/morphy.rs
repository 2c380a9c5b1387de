//! # Morphy — formas base no estilo WordNet
//!
//! Antes de consultar o índice de lemas, a palavra pedida passa pelo morphy
//! do WordNet ([`wordnet_morphy`]): regras de destacamento de sufixos
//! ("banks" → "bank", "deposited" → "deposit") e listas de formas
//! irregulares lidas dos arquivos `{noun,verb,adj,adv}.exc` ("went" → "go").
//!
//! Só sobrevivem as formas que existem no índice do léxico para a classe
//! consultada. Quando a forma é irregular, as regras de sufixo são ignoradas.
//!
//! Os léxicos que não vêm de um `dict/` (JSON, excerto embutido) usam as
//! listas de exceções de `wsd-core/dict/`. Sem esse diretório, restam as
//! regras de sufixo.

use std::path::Path;
use std::sync::{Arc, OnceLock};

use tracing::warn;
use wordnet_morphy::{CandidateSource, Morphy};
use wordnet_types::Pos;

use crate::error::{LexiconError, Result};
use crate::sense::{ADJ, ADJ_SAT, ADV, NOUN, VERB};

/// Exceções do morphy que acompanham o crate.
const BUNDLED_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/dict");

/// Regras de sufixo mais listas de exceções de um diretório `dict/`.
pub struct Morphology {
    morphy: Morphy,
}

impl Morphology {
    /// Lê os arquivos `*.exc` de `dir`. Arquivos ausentes contam como vazios.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let morphy = Morphy::load(dir).map_err(|e| LexiconError::wordnet(dir, e))?;
        Ok(Self { morphy })
    }

    /// Exceções de `wsd-core/dict/`, carregadas uma única vez por processo.
    pub fn bundled() -> Option<Arc<Morphology>> {
        static BUNDLED: OnceLock<Option<Arc<Morphology>>> = OnceLock::new();
        BUNDLED
            .get_or_init(|| match Morphology::load(BUNDLED_DIR) {
                Ok(morphology) => Some(Arc::new(morphology)),
                Err(e) => {
                    warn!("Exceções do morphy indisponíveis: {}", e);
                    None
                }
            })
            .clone()
    }

    /// Formas base de `form` na classe `pos` que passam em `exists`.
    ///
    /// A própria forma vem primeiro (se existir). Se ela for irregular, seguem
    /// as bases da lista de exceções; caso contrário, as saídas das regras de
    /// sufixo, na ordem das regras. Sem repetições.
    pub fn base_forms(
        &self,
        form: &str,
        pos: &str,
        exists: impl Fn(&str) -> bool,
    ) -> Vec<String> {
        let Some(pos) = pos_of(pos) else {
            return if exists(form) { vec![form.to_string()] } else { Vec::new() };
        };

        let candidates = self.morphy.lemmas_for(pos, form, |_, lemma| exists(lemma));
        let irregular = candidates
            .iter()
            .any(|c| c.source == CandidateSource::Exception);

        candidates
            .into_iter()
            .filter(|c| !(irregular && matches!(c.source, CandidateSource::Rule { .. })))
            .map(|c| c.lemma.into_owned())
            .collect()
    }
}

/// Classe do WordNet para uma etiqueta (`"s"` conta como adjetivo).
pub(crate) fn pos_of(tag: &str) -> Option<Pos> {
    match tag {
        NOUN => Some(Pos::Noun),
        VERB => Some(Pos::Verb),
        ADJ | ADJ_SAT => Some(Pos::Adj),
        ADV => Some(Pos::Adv),
        _ => None,
    }
}

/// Etiqueta usada no índice do léxico para uma classe do WordNet.
pub(crate) fn tag_of(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => NOUN,
        Pos::Verb => VERB,
        Pos::Adj => ADJ,
        Pos::Adv => ADV,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn known<'a>(lemmas: &'a [&'a str]) -> impl Fn(&str) -> bool + 'a {
        move |lemma: &str| lemmas.iter().any(|known| *known == lemma)
    }

    fn bundled() -> Arc<Morphology> {
        Morphology::bundled().expect("wsd-core/dict deve existir nos testes")
    }

    #[test]
    fn test_noun_plural() {
        let forms = bundled().base_forms("banks", NOUN, known(&["bank"]));
        assert_eq!(forms, vec!["bank"]);
    }

    #[test]
    fn test_noun_ies() {
        let forms = bundled().base_forms("cities", NOUN, known(&["city"]));
        assert_eq!(forms, vec!["city"]);
    }

    #[test]
    fn test_surface_form_first() {
        let forms = bundled().base_forms("deposits", NOUN, known(&["deposits", "deposit"]));
        assert_eq!(forms, vec!["deposits", "deposit"]);
    }

    #[test]
    fn test_verb_rules_in_order() {
        // "ed" → "e" vem antes de "ed" → ""
        let forms = bundled().base_forms("deposited", VERB, known(&["deposit", "deposite"]));
        assert_eq!(forms, vec!["deposite", "deposit"]);
    }

    #[test]
    fn test_exception_skips_rules() {
        let morphology = bundled();
        // "is" → "i" pela regra "s" → "", mas "is" é irregular
        assert_eq!(morphology.base_forms("is", VERB, known(&["be", "i"])), vec!["be"]);
        assert_eq!(
            morphology.base_forms("better", ADJ, known(&["good", "well", "bet"])),
            vec!["good", "well"]
        );
        assert_eq!(morphology.base_forms("went", VERB, known(&["go"])), vec!["go"]);
    }

    #[test]
    fn test_satellite_uses_adjective_rules() {
        let forms = bundled().base_forms("deeper", ADJ_SAT, known(&["deep"]));
        assert_eq!(forms, vec!["deep"]);
    }

    #[test]
    fn test_unknown_tag_keeps_form() {
        let morphology = bundled();
        assert_eq!(morphology.base_forms("banks", "x", known(&["banks"])), vec!["banks"]);
        assert!(morphology.base_forms("banks", "x", known(&["bank"])).is_empty());
    }

    #[test]
    fn test_load_reads_exc_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("noun.exc"), "oxen ox\n").unwrap();

        let morphology = Morphology::load(dir.path()).unwrap();
        assert_eq!(morphology.base_forms("oxen", NOUN, known(&["ox"])), vec!["ox"]);
        // sem verb.exc: só regras
        assert!(morphology.base_forms("went", VERB, known(&["go"])).is_empty());
    }

    #[test]
    fn test_pos_tags() {
        assert_eq!(pos_of("s"), Some(Pos::Adj));
        assert_eq!(pos_of(""), None);
        assert_eq!(tag_of(Pos::Adv), ADV);
    }
}
