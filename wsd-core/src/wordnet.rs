//! # Leitor dos arquivos do WordNet (`dict/`)
//!
//! Preenche um [`Lexicon`] com o banco completo do WordNet 3.x a partir dos
//! arquivos de texto da distribuição oficial, lidos pelo [`wordnet_db`]:
//!
//! - `data.{noun,verb,adj,adv}`: um synset por linha, com lemas e glosa.
//! - `index.{noun,verb,adj,adv}`: para cada lema, a lista de offsets dos seus
//!   synsets **na ordem de sentido** (mais frequente primeiro).
//! - `{noun,verb,adj,adv}.exc`: formas irregulares, usadas pelo
//!   [`morphy`](crate::morphy) nas consultas.
//!
//! A glosa é dividida em `;`: partes entre aspas são exemplos, o resto forma
//! a definição. O nome de cada synset (`bank.n.01`) usa o primeiro lema e a
//! posição do synset na lista daquele lema no `index.*`.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use tracing::{debug, info};
use wordnet_db::{LoadMode, WordNet};
use wordnet_types::{Pos, SynsetId, SynsetType};

use crate::error::{LexiconError, Result};
use crate::lexicon::{Lexicon, DEFAULT_LANG};
use crate::morphy::{tag_of, Morphology};
use crate::sense::{Synset, ADJ, ADJ_SAT, ADV, NOUN, VERB};

const POS_ORDER: [Pos; 4] = [Pos::Noun, Pos::Verb, Pos::Adj, Pos::Adv];

/// Carrega o diretório `dict/` de uma instalação do WordNet.
pub fn load_dict(dir: impl AsRef<Path>) -> Result<Lexicon> {
    let dir = dir.as_ref();
    let wn = WordNet::load_with_mode(dir, LoadMode::Owned)
        .map_err(|e| LexiconError::wordnet(dir, e))?;
    let mut lexicon = Lexicon::new().with_morphology(Morphology::load(dir)?);
    lexicon.register_language(DEFAULT_LANG);

    // data.* em ordem de arquivo: classe, depois offset
    let mut views: Vec<_> = wn.iter_synsets().collect();
    views.sort_by_key(|s| (pos_rank(s.id.pos), s.id.offset));

    let mut by_id: HashMap<SynsetId, usize> = HashMap::with_capacity(views.len());
    let mut heads: HashMap<usize, String> = HashMap::with_capacity(views.len());
    let mut lemmas: BTreeSet<(usize, String)> = BTreeSet::new();

    for view in &views {
        let synset = convert(view);
        let head = synset.head_lemma().to_string();
        for lemma in &synset.lemmas {
            lemmas.insert((pos_rank(view.id.pos), lemma.to_lowercase()));
        }
        let id = lexicon.push_unindexed(synset);
        by_id.insert(view.id, id);
        heads.insert(id, head);
    }
    debug!("data.*: {} synsets", by_id.len());

    for (rank, lemma) in lemmas {
        let pos = POS_ORDER[rank];
        for (position, sid) in wn.synsets_for_lemma(pos, &lemma).iter().enumerate() {
            let Some(&id) = by_id.get(sid) else {
                return Err(LexiconError::wordnet(
                    dir,
                    format!(
                        "index.{}: '{}' aponta para o offset {:08}, ausente em data.{}",
                        file_suffix(pos),
                        lemma,
                        sid.offset,
                        file_suffix(sid.pos)
                    ),
                ));
            };
            lexicon.index_lemma(DEFAULT_LANG, tag_of(pos), lemma.clone(), id);

            if heads.get(&id) == Some(&lemma) {
                let name = format!("{}.{}.{:02}", lemma, lexicon.synset_at(id).pos, position + 1);
                lexicon.rename(id, name);
            }
        }
    }

    info!("WordNet carregado de {}: {} synsets", dir.display(), lexicon.len());
    Ok(lexicon)
}

/// Converte um synset do `wordnet-db` num [`Synset`] ainda sem nome definitivo.
fn convert(view: &wordnet_types::Synset<'_>) -> Synset {
    let pos = match view.synset_type {
        SynsetType::Noun => NOUN,
        SynsetType::Verb => VERB,
        SynsetType::Adj => ADJ,
        SynsetType::AdjSatellite => ADJ_SAT,
        SynsetType::Adv => ADV,
    };
    // adjetivos podem trazer marcadores sintáticos: "galore(ip)"
    let lemmas: Vec<String> = view
        .words
        .iter()
        .map(|w| w.text.split_once('(').map(|(word, _)| word).unwrap_or(w.text).to_string())
        .collect();
    let head = lemmas.first().map(|l| l.to_lowercase()).unwrap_or_default();

    let (definition, examples) = split_gloss(view.gloss.raw);
    Synset {
        name: format!("{}.{}.{:08}", head, pos, view.id.offset),
        pos: pos.to_string(),
        definition,
        examples,
        lemmas,
        offset: u64::from(view.id.offset),
    }
}

/// Divide a glosa em `;`: partes entre aspas são exemplos, o resto é a definição.
fn split_gloss(raw: &str) -> (String, Vec<String>) {
    let mut definitions = Vec::new();
    let mut examples = Vec::new();
    for part in raw.split(';').map(str::trim).filter(|p| !p.is_empty()) {
        if part.starts_with('"') {
            examples.push(part.trim_matches('"').to_string());
        } else {
            definitions.push(part);
        }
    }
    (definitions.join("; "), examples)
}

fn pos_rank(pos: Pos) -> usize {
    match pos {
        Pos::Noun => 0,
        Pos::Verb => 1,
        Pos::Adj => 2,
        Pos::Adv => 3,
    }
}

fn file_suffix(pos: Pos) -> &'static str {
    match pos {
        Pos::Noun => "noun",
        Pos::Verb => "verb",
        Pos::Adj => "adj",
        Pos::Adv => "adv",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexicalDatabase;
    use std::fs;

    const HEADER: &str = "  1 This software and database is being provided to you, the LICENSEE, by\n";

    /// Escreve um `dict/` mínimo; classes não informadas ficam só com o cabeçalho.
    fn write_dict(dir: &Path, files: &[(&str, &str)]) {
        for suffix in ["noun", "verb", "adj", "adv"] {
            for kind in ["data", "index"] {
                let name = format!("{kind}.{suffix}");
                let body = files
                    .iter()
                    .find(|(file, _)| *file == name)
                    .map(|(_, body)| *body)
                    .unwrap_or("");
                fs::write(dir.join(&name), format!("{HEADER}{body}")).unwrap();
            }
        }
        for (file, body) in files.iter().filter(|(file, _)| file.ends_with(".exc")) {
            fs::write(dir.join(file), body).unwrap();
        }
    }

    const NOUN_DATA: &str = "\
08420278 14 n 03 depository_financial_institution 0 bank 0 banking_concern 0 000 | a financial institution that accepts deposits and channels the money into lending activities; \"he cashed a check at the bank\"; \"that bank holds the mortgage on my home\"
09213565 17 n 02 bank 0 side 1 000 | sloping land (especially the slope beside a body of water); \"they pulled the canoe up on the bank\"
";

    const NOUN_INDEX: &str = "\
bank n 2 1 @ 2 1 09213565 08420278
banking_concern n 1 0 1 0 08420278
depository_financial_institution n 1 0 1 0 08420278
side n 1 0 1 0 09213565
";

    const VERB_DATA: &str = "\
00941990 32 v 01 speak 0 000 00 | express in speech; \"She talks a lot of nonsense\"
";

    const VERB_INDEX: &str = "\
speak v 1 0 1 0 00941990
";

    #[test]
    fn test_split_gloss() {
        let (definition, examples) = split_gloss(
            "a slope in the turn of a road or track; the outside is higher than the inside in order to reduce the effects of centrifugal force",
        );
        assert!(definition.contains("; the outside is higher"));
        assert!(examples.is_empty());

        let (definition, examples) = split_gloss("tip laterally; \"the pilot had to bank the aircraft\"");
        assert_eq!(definition, "tip laterally");
        assert_eq!(examples, vec!["the pilot had to bank the aircraft"]);
    }

    #[test]
    fn test_load_dict_names_and_order() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path(), &[("data.noun", NOUN_DATA), ("index.noun", NOUN_INDEX)]);

        let lex = load_dict(dir.path()).unwrap();
        assert_eq!(lex.len(), 2);
        assert!(lex.get("bank.n.01").is_some());

        let dfi = lex.get("depository_financial_institution.n.01").unwrap();
        assert_eq!(dfi.offset, 8420278);
        assert_eq!(dfi.lemmas, vec!["depository_financial_institution", "bank", "banking_concern"]);
        assert_eq!(
            dfi.definition,
            "a financial institution that accepts deposits and channels the money into lending activities"
        );
        assert_eq!(dfi.examples.len(), 2);
        assert_eq!(dfi.examples[0], "he cashed a check at the bank");

        let senses = lex.lookup_senses("bank", "eng").unwrap();
        let names: Vec<&str> = senses.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["bank.n.01", "depository_financial_institution.n.01"]);
    }

    #[test]
    fn test_load_dict_adjective_marker_and_satellite() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(
            dir.path(),
            &[
                ("data.adj", "00003939 00 s 01 galore(ip) 0 000 | in great numbers\n"),
                ("index.adj", "galore a 1 0 1 0 00003939\n"),
            ],
        );

        let lex = load_dict(dir.path()).unwrap();
        let galore = lex.get("galore.s.01").unwrap();
        assert_eq!(galore.lemmas, vec!["galore"]);
        assert_eq!(lex.lookup_senses("galore", "eng").unwrap().len(), 1);
    }

    #[test]
    fn test_load_dict_reads_exceptions() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(
            dir.path(),
            &[
                ("data.verb", VERB_DATA),
                ("index.verb", VERB_INDEX),
                ("verb.exc", "spoke speak\nspoken speak\n"),
            ],
        );

        let lex = load_dict(dir.path()).unwrap();
        let senses = lex.lookup_senses("spoke", "eng").unwrap();
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].name, "speak.v.01");
        assert_eq!(lex.lookup_senses("Speaking", "eng").unwrap().len(), 1);
    }

    #[test]
    fn test_load_dict_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_dict(dir.path()).unwrap_err();
        assert!(matches!(err, LexiconError::WordNet { .. }));
        assert!(err.to_string().contains("data.noun"));
    }

    #[test]
    fn test_load_dict_malformed_line() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path(), &[("data.noun", "abc 14 n 01 x 0 000 | y\n")]);
        let err = load_dict(dir.path()).unwrap_err();
        assert!(matches!(err, LexiconError::WordNet { .. }));
    }

    #[test]
    fn test_load_dict_dangling_offset() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(
            dir.path(),
            &[
                ("data.noun", NOUN_DATA),
                ("index.noun", "bank n 3 1 @ 3 1 09213565 08420278 00000042\n"),
            ],
        );
        let err = load_dict(dir.path()).unwrap_err();
        match err {
            LexiconError::WordNet { message, .. } => {
                assert!(message.contains("index.noun"));
                assert!(message.contains("00000042"));
            }
            other => panic!("erro inesperado: {other:?}"),
        }
    }
}
