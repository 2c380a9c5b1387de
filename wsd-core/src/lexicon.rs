//! # Banco Léxico
//!
//! O algoritmo de Lesk consulta um colaborador externo para obter os sentidos
//! candidatos de uma palavra. Esse colaborador é descrito pelo trait
//! [`LexicalDatabase`]; o [`Lexicon`] é a implementação em memória deste crate,
//! preenchida a partir de JSON, dos arquivos do WordNet ([`crate::wordnet`])
//! ou do excerto embutido ([`crate::corpus`]).
//!
//! ## Índice
//!
//! ```text
//! idioma → classe → lema → [synsets, na ordem de sentido]
//! ```
//!
//! Satélites (`s`) são indexados junto com os adjetivos (`a`), como nos
//! arquivos `index.adj` do WordNet.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{LexiconError, Result};
use crate::morphy::Morphology;
use crate::sense::{Definable, PartOfSpeechTagged, Synset, ADJ, ADJ_SAT, LOOKUP_ORDER};

/// Idioma padrão das consultas.
pub const DEFAULT_LANG: &str = "eng";

/// Fonte de sentidos candidatos para uma palavra.
///
/// Os sentidos são emprestados do banco (`Sense<'a>`): o seletor apenas os lê
/// durante a pontuação.
pub trait LexicalDatabase {
    type Sense<'a>: Definable + PartOfSpeechTagged
    where
        Self: 'a;
    type Error;

    /// Todos os sentidos conhecidos de `word` no idioma `lang`.
    ///
    /// Palavra desconhecida → lista vazia. Idioma não suportado → erro.
    fn lookup_senses<'a>(
        &'a self,
        word: &str,
        lang: &str,
    ) -> std::result::Result<Vec<Self::Sense<'a>>, Self::Error>;
}

/// Formato do arquivo JSON de léxico.
///
/// ```json
/// { "languages": { "eng": [ { "name": "bank.n.01", "pos": "n", "definition": "..." } ] } }
/// ```
///
/// Um synset que reaparece em outro idioma (mesmo `name`) não é duplicado:
/// apenas seus `lemmas` passam a ser indexados também naquele idioma.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LexiconFile {
    pub languages: BTreeMap<String, Vec<Synset>>,
}

type LemmaIndex = HashMap<String, HashMap<String, Vec<usize>>>;

/// Banco léxico em memória, imutável depois de carregado.
#[derive(Clone)]
pub struct Lexicon {
    synsets: Vec<Synset>,
    by_name: HashMap<String, usize>,
    index: HashMap<String, LemmaIndex>,
    morphology: Option<Arc<Morphology>>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexicon")
            .field("synsets", &self.synsets.len())
            .field("languages", &self.languages())
            .field("morphology", &self.morphology.is_some())
            .finish()
    }
}

/// Forma usada como chave do índice: minúsculas, `_` no lugar de espaços.
fn normalize(word: &str) -> String {
    word.to_lowercase().replace(' ', "_")
}

/// Ordem de ids em que cada lista `lema → [ids]` aparece como subsequência.
///
/// Vizinhos numa lista impõem "a antes de b"; empates saem pelo menor id.
/// Um ciclo entre listas é quebrado liberando o menor id ainda pendente.
fn sense_preserving_order<'a>(lists: impl Iterator<Item = &'a [usize]>) -> Vec<usize> {
    let mut before: BTreeMap<usize, usize> = BTreeMap::new();
    let mut after: HashMap<usize, Vec<usize>> = HashMap::new();
    for ids in lists {
        for &id in ids {
            before.entry(id).or_insert(0);
        }
        for pair in ids.windows(2) {
            after.entry(pair[0]).or_default().push(pair[1]);
            *before.entry(pair[1]).or_insert(0) += 1;
        }
    }

    let all: Vec<usize> = before.keys().copied().collect();
    let mut ready: BTreeSet<usize> = before
        .iter()
        .filter(|(_, &n)| n == 0)
        .map(|(&id, _)| id)
        .collect();
    let mut placed = HashSet::with_capacity(all.len());
    let mut order = Vec::with_capacity(all.len());
    let mut cursor = 0;

    while order.len() < all.len() {
        let next = ready.pop_first().or_else(|| {
            while cursor < all.len() && placed.contains(&all[cursor]) {
                cursor += 1;
            }
            all.get(cursor).copied()
        });
        let Some(id) = next else { break };
        if !placed.insert(id) {
            continue;
        }
        order.push(id);
        for &succ in after.get(&id).into_iter().flatten() {
            if let Some(n) = before.get_mut(&succ) {
                *n = n.saturating_sub(1);
                if *n == 0 && !placed.contains(&succ) {
                    ready.insert(succ);
                }
            }
        }
    }
    order
}

fn index_pos(pos: &str) -> &str {
    if pos == ADJ_SAT {
        ADJ
    } else {
        pos
    }
}

impl Lexicon {
    /// Léxico vazio, com as exceções do morphy embutidas no crate.
    pub fn new() -> Self {
        Self {
            synsets: Vec::new(),
            by_name: HashMap::new(),
            index: HashMap::new(),
            morphology: Morphology::bundled(),
        }
    }

    /// Troca as regras de formas base usadas nas consultas em inglês.
    pub fn with_morphology(mut self, morphology: Morphology) -> Self {
        self.morphology = Some(Arc::new(morphology));
        self
    }

    /// Declara um idioma (mesmo que ainda sem lemas), para que consultas nele
    /// retornem lista vazia em vez de erro.
    pub fn register_language(&mut self, lang: &str) {
        self.index.entry(lang.to_string()).or_default();
    }

    /// Adiciona um synset e o indexa sob cada um dos seus lemas em `lang`.
    ///
    /// A ordem de inserção define a ordem dos sentidos de cada lema. Se um
    /// synset de mesmo nome já existe, só os lemas são indexados.
    pub fn add_synset(&mut self, lang: &str, synset: Synset) -> usize {
        let lemmas: Vec<String> = synset
            .lemma_names()
            .into_iter()
            .map(normalize)
            .collect();
        let pos = index_pos(&synset.pos).to_string();

        let id = match self.by_name.get(&synset.name) {
            Some(&id) => id,
            None => {
                let id = self.synsets.len();
                self.by_name.insert(synset.name.clone(), id);
                self.synsets.push(synset);
                id
            }
        };

        for lemma in lemmas {
            self.index_lemma(lang, &pos, lemma, id);
        }
        id
    }

    /// Indexa um synset já existente sob outros lemas (ex: traduções).
    /// Retorna `false` se o synset não existe.
    pub fn add_lemmas(&mut self, lang: &str, name: &str, lemmas: &[&str]) -> bool {
        let Some(&id) = self.by_name.get(name) else {
            return false;
        };
        let pos = index_pos(&self.synsets[id].pos).to_string();
        for lemma in lemmas {
            self.index_lemma(lang, &pos, normalize(lemma), id);
        }
        true
    }

    pub(crate) fn index_lemma(&mut self, lang: &str, pos: &str, lemma: String, id: usize) {
        let ids = self
            .index
            .entry(lang.to_string())
            .or_default()
            .entry(pos.to_string())
            .or_default()
            .entry(lemma)
            .or_default();
        if !ids.contains(&id) {
            ids.push(id);
        }
    }

    pub(crate) fn push_unindexed(&mut self, synset: Synset) -> usize {
        let id = self.synsets.len();
        self.by_name.insert(synset.name.clone(), id);
        self.synsets.push(synset);
        id
    }

    pub(crate) fn synset_at(&self, id: usize) -> &Synset {
        &self.synsets[id]
    }

    pub(crate) fn rename(&mut self, id: usize, name: String) {
        let old = std::mem::replace(&mut self.synsets[id].name, name.clone());
        self.by_name.remove(&old);
        self.by_name.insert(name, id);
    }

    pub fn get(&self, name: &str) -> Option<&Synset> {
        self.by_name.get(name).map(|&id| &self.synsets[id])
    }

    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    pub fn synsets(&self) -> impl Iterator<Item = &Synset> {
        self.synsets.iter()
    }

    /// Idiomas disponíveis, em ordem alfabética.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.index.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.index.contains_key(lang)
    }

    /// Lê um léxico no formato [`LexiconFile`].
    pub fn from_json<R: Read>(reader: R) -> Result<Self> {
        let file: LexiconFile = serde_json::from_reader(reader)?;
        let mut lexicon = Lexicon::new();
        for (lang, synsets) in file.languages {
            lexicon.register_language(&lang);
            for synset in synsets {
                lexicon.add_synset(&lang, synset);
            }
        }
        Ok(lexicon)
    }

    /// Grava o léxico no formato [`LexiconFile`], lido de volta por
    /// [`Lexicon::from_json`].
    ///
    /// Cada idioma lista os synsets que ele indexa, com os lemas daquele
    /// idioma, numa ordem que preserva a ordem de sentidos de cada lema.
    /// Idiomas sem lemas aparecem com lista vazia.
    pub fn to_json<W: Write>(&self, writer: W) -> Result<()> {
        let mut file = LexiconFile::default();
        for (lang, by_pos) in &self.index {
            let mut lemmas: HashMap<usize, Vec<&str>> = HashMap::new();
            for ids_by_lemma in by_pos.values() {
                for (lemma, ids) in ids_by_lemma {
                    for &id in ids {
                        lemmas.entry(id).or_default().push(lemma);
                    }
                }
            }
            let order = sense_preserving_order(
                by_pos
                    .values()
                    .flat_map(|ids_by_lemma| ids_by_lemma.values().map(Vec::as_slice)),
            );
            let synsets = order
                .into_iter()
                .map(|id| {
                    let synset = &self.synsets[id];
                    let mut names = lemmas.remove(&id).unwrap_or_default();
                    // lemas do próprio synset na ordem original, traduções depois
                    let own: Vec<String> =
                        synset.lemma_names().into_iter().map(normalize).collect();
                    names.sort_unstable_by_key(|l| {
                        (
                            own.iter().position(|o| o.as_str() == *l).unwrap_or(own.len()),
                            *l,
                        )
                    });
                    let mut synset = synset.clone();
                    synset.lemmas = names.into_iter().map(str::to_string).collect();
                    synset
                })
                .collect();
            file.languages.insert(lang.clone(), synsets);
        }
        serde_json::to_writer_pretty(writer, &file)?;
        Ok(())
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| LexiconError::io(path, e))?;
        let lexicon = Self::from_json(BufReader::new(file))?;
        info!(
            "Léxico carregado de {}: {} synsets, idiomas {:?}",
            path.display(),
            lexicon.len(),
            lexicon.languages()
        );
        Ok(lexicon)
    }
}

impl LexicalDatabase for Lexicon {
    type Sense<'a> = &'a Synset;
    type Error = LexiconError;

    /// A palavra é normalizada para minúsculas (espaços viram `_`). Em inglês,
    /// cada classe é consultada com as formas do [`morphy`](crate::morphy);
    /// nos demais idiomas só a forma exata é procurada.
    fn lookup_senses<'a>(&'a self, word: &str, lang: &str) -> Result<Vec<&'a Synset>> {
        let by_pos = self
            .index
            .get(lang)
            .ok_or_else(|| LexiconError::UnsupportedLanguage(lang.to_string()))?;

        let lemma = normalize(word);
        let mut seen = HashSet::new();
        let mut senses = Vec::new();

        for pos in LOOKUP_ORDER {
            let Some(lemmas) = by_pos.get(pos) else {
                continue;
            };
            let forms = match &self.morphology {
                Some(morphology) if lang == DEFAULT_LANG => {
                    morphology.base_forms(&lemma, pos, |form| lemmas.contains_key(form))
                }
                _ => vec![lemma.clone()],
            };
            for form in forms {
                if let Some(ids) = lemmas.get(&form) {
                    for &id in ids {
                        if seen.insert(id) {
                            senses.push(&self.synsets[id]);
                        }
                    }
                }
            }
        }

        debug!("lookup '{}' [{}]: {} sentidos", word, lang, senses.len());
        Ok(senses)
    }
}
