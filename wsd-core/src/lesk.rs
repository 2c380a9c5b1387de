//! # Algoritmo de Lesk (1986)
//!
//! Escolhe, entre os sentidos de uma palavra ambígua, aquele cuja definição
//! compartilha mais palavras com o contexto da sentença.
//!
//! ## Passo a passo
//!
//! 1. O contexto vira um **conjunto** de tokens (ordem e repetições não importam).
//! 2. Os candidatos vêm do banco léxico ([`lesk`]) ou de quem chama ([`lesk_with_senses`]).
//! 3. Com `pos`, ficam apenas os candidatos daquela classe (igualdade exata de string).
//! 4. Sem candidatos → `None`. Nunca é erro.
//! 5. Pontuação = quantas palavras **distintas** da definição (split por espaço,
//!    sem normalização) aparecem no contexto.
//! 6. Vence a maior pontuação; no empate, o primeiro candidato da lista.
//!
//! ## Exemplo
//!
//! ```text
//! contexto: I went to the bank to deposit money .
//! bank.n.01                              "sloping land (especially the slope ...)"  → 1 (the)
//! depository_financial_institution.n.01  "a financial institution that accepts ..." → 2 (the, money)
//! ```
//!
//! Referência: Lesk, Michael. "Automatic sense disambiguation using machine
//! readable dictionaries: how to tell a pine cone from an ice cream cone." SIGDOC 1986.

use std::collections::HashSet;

use crate::lexicon::LexicalDatabase;
use crate::sense::{Definable, PartOfSpeechTagged};

/// Um candidato com a sua pontuação de sobreposição.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredSense<S> {
    pub sense: S,
    pub score: usize,
}

/// Conjunto de tokens únicos do contexto.
pub fn signature<I, T>(context: I) -> HashSet<String>
where
    I: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    context.into_iter().map(|t| t.as_ref().to_string()).collect()
}

/// Número de palavras distintas da definição presentes no contexto.
pub fn overlap(signature: &HashSet<String>, definition: &str) -> usize {
    definition
        .split_whitespace()
        .collect::<HashSet<&str>>()
        .into_iter()
        .filter(|word| signature.contains(*word))
        .count()
}

/// As palavras que produzem a pontuação de [`overlap`], na ordem em que
/// aparecem na definição e sem repetições.
pub fn overlap_words<'d>(signature: &HashSet<String>, definition: &'d str) -> Vec<&'d str> {
    let mut seen = HashSet::new();
    definition
        .split_whitespace()
        .filter(|word| signature.contains(*word) && seen.insert(*word))
        .collect()
}

/// Mantém os candidatos da classe `pos`. `None` ou `""` não filtram nada.
pub fn filter_by_pos<S, I>(senses: I, pos: Option<&str>) -> Vec<S>
where
    S: PartOfSpeechTagged,
    I: IntoIterator<Item = S>,
{
    let pos = pos.filter(|p| !p.is_empty());
    senses
        .into_iter()
        .filter(|sense| pos.map_or(true, |p| sense.part_of_speech() == p))
        .collect()
}

/// Candidato de maior sobreposição; no empate, o primeiro encontrado.
///
/// Varredura linear que só troca o melhor em pontuação estritamente maior.
pub fn best_sense<S, I>(signature: &HashSet<String>, candidates: I) -> Option<S>
where
    S: Definable,
    I: IntoIterator<Item = S>,
{
    let mut best: Option<(S, usize)> = None;
    for sense in candidates {
        let score = overlap(signature, sense.definition());
        let better = match &best {
            Some((_, best_score)) => score > *best_score,
            None => true,
        };
        if better {
            best = Some((sense, score));
        }
    }
    best.map(|(sense, _)| sense)
}

/// Pontua todos os candidatos, preservando a ordem.
pub fn score_senses<S, I>(signature: &HashSet<String>, candidates: I) -> Vec<ScoredSense<S>>
where
    S: Definable,
    I: IntoIterator<Item = S>,
{
    candidates
        .into_iter()
        .map(|sense| {
            let score = overlap(signature, sense.definition());
            ScoredSense { sense, score }
        })
        .collect()
}

/// Lesk sobre uma lista de candidatos fornecida por quem chama.
///
/// Nenhum banco léxico é consultado; o resultado, se houver, é um dos
/// elementos de `senses`.
pub fn lesk_with_senses<S, I, C, T>(context: C, senses: I, pos: Option<&str>) -> Option<S>
where
    S: Definable + PartOfSpeechTagged,
    I: IntoIterator<Item = S>,
    C: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let signature = signature(context);
    best_sense(&signature, filter_by_pos(senses, pos))
}

/// Lesk com candidatos obtidos de `db` para a palavra `word` no idioma `lang`.
///
/// Palavra desconhecida ou nenhum candidato da classe `pos` → `Ok(None)`.
/// Falhas do banco (ex: idioma não suportado) são devolvidas sem alteração.
pub fn lesk<'a, D, C, T>(
    db: &'a D,
    context: C,
    word: &str,
    pos: Option<&str>,
    lang: &str,
) -> Result<Option<D::Sense<'a>>, D::Error>
where
    D: LexicalDatabase + ?Sized,
    C: IntoIterator<Item = T>,
    T: AsRef<str>,
{
    let senses = db.lookup_senses(word, lang)?;
    Ok(lesk_with_senses(context, senses, pos))
}
