//! # Pipeline WSD — Orquestrador com Eventos Observáveis
//!
//! Conecta tokenizador, banco léxico e Lesk, e emite um evento a cada passo
//! via canal (`mpsc`), permitindo que o servidor WebSocket mostre o
//! "raciocínio" do algoritmo: quais candidatos existem, quanto cada um pontuou
//! e quais palavras da definição coincidiram com o contexto.

use std::sync::mpsc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::corpus::builtin_lexicon;
use crate::error::{LexiconError, Result};
use crate::lesk::{best_sense, filter_by_pos, overlap_words, signature};
use crate::lexicon::{LexicalDatabase, Lexicon, DEFAULT_LANG};
use crate::sense::Synset;
use crate::tokenizer::{tokenize, Token};

fn default_lang() -> String {
    DEFAULT_LANG.to_string()
}

/// Pedido de desambiguação: sentença, palavra ambígua e filtros opcionais.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisambiguationRequest {
    pub text: String,
    pub word: String,
    #[serde(default)]
    pub pos: Option<String>,
    #[serde(default = "default_lang")]
    pub lang: String,
}

impl DisambiguationRequest {
    pub fn new(text: &str, word: &str) -> Self {
        Self {
            text: text.to_string(),
            word: word.to_string(),
            pos: None,
            lang: default_lang(),
        }
    }

    pub fn with_pos(mut self, pos: &str) -> Self {
        self.pos = Some(pos.to_string());
        self
    }

    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = lang.to_string();
        self
    }
}

/// Um candidato pontuado, com as palavras que coincidiram.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    /// Posição na lista de candidatos (já filtrada por classe).
    pub index: usize,
    pub sense: Synset,
    pub score: usize,
    pub overlap: Vec<String>,
}

/// Resultado completo de uma desambiguação.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Disambiguation {
    pub tokens: Vec<Token>,
    pub candidates: Vec<CandidateScore>,
    /// Sentido escolhido; `None` quando não há candidatos.
    pub sense: Option<Synset>,
    pub processing_ms: u64,
}

/// Eventos emitidos pelo pipeline durante o processamento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PipelineEvent {
    /// **Passo 1**: Tokenização concluída.
    TokenizationDone { tokens: Vec<Token>, total: usize },
    /// **Passo 2**: Candidatos obtidos do léxico.
    /// `total` conta todos os sentidos da palavra; `filtered`, os que restaram após o filtro de classe.
    CandidatesFetched {
        word: String,
        lang: String,
        total: usize,
        filtered: usize,
    },
    /// **Passo 3**: Um candidato foi pontuado.
    /// `leading` indica se ele é o melhor até aqui.
    CandidateScored { candidate: CandidateScore, leading: bool },
    /// **Conclusão**: sentido escolhido (ou nenhum).
    Done { result: Disambiguation },
    /// **Falha**: o léxico recusou a consulta.
    Error { message: String },
}

/// O pipeline de desambiguação, dono do léxico.
pub struct WsdPipeline {
    pub lexicon: Lexicon,
}

impl WsdPipeline {
    /// Pipeline com o léxico embutido.
    pub fn new() -> Self {
        Self::with_lexicon(builtin_lexicon())
    }

    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    /// Processa o pedido de forma síncrona.
    pub fn analyze(&self, request: &DisambiguationRequest) -> Result<Disambiguation> {
        self.run(request, |_| {})
    }

    /// Executa o pipeline enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos
    /// 1. `TokenizationDone`
    /// 2. `CandidatesFetched` (ou `Error` se o léxico falhar)
    /// 3. `CandidateScored` (um por candidato)
    /// 4. `Done`
    pub fn analyze_streaming(&self, request: &DisambiguationRequest, tx: mpsc::Sender<PipelineEvent>) {
        let result = self.run(request, |event| {
            let _ = tx.send(event);
        });
        if let Err(err) = result {
            warn!("Falha na desambiguação de '{}': {}", request.word, err);
            let _ = tx.send(PipelineEvent::from(&err));
        }
    }

    fn run(
        &self,
        request: &DisambiguationRequest,
        mut emit: impl FnMut(PipelineEvent),
    ) -> Result<Disambiguation> {
        let start = Instant::now();

        // === Passo 1: Tokenização ===
        let tokens = tokenize(&request.text);
        emit(PipelineEvent::TokenizationDone {
            tokens: tokens.clone(),
            total: tokens.len(),
        });
        let signature = signature(tokens.iter().map(|t| t.text.as_str()));

        // === Passo 2: Candidatos ===
        let senses = self.lexicon.lookup_senses(&request.word, &request.lang)?;
        let total = senses.len();
        let candidates = filter_by_pos(senses, request.pos.as_deref());
        emit(PipelineEvent::CandidatesFetched {
            word: request.word.clone(),
            lang: request.lang.clone(),
            total,
            filtered: candidates.len(),
        });

        // === Passo 3: Pontuação ===
        let mut scores = Vec::with_capacity(candidates.len());
        let mut best_score = None;
        for (index, sense) in candidates.iter().enumerate() {
            let overlap: Vec<String> = overlap_words(&signature, &sense.definition)
                .into_iter()
                .map(str::to_string)
                .collect();
            let score = overlap.len();
            let leading = best_score.map_or(true, |best| score > best);
            if leading {
                best_score = Some(score);
            }
            let candidate = CandidateScore {
                index,
                sense: (*sense).clone(),
                score,
                overlap,
            };
            emit(PipelineEvent::CandidateScored {
                candidate: candidate.clone(),
                leading,
            });
            scores.push(candidate);
        }

        // === Passo 4: Decisão ===
        let sense = best_sense(&signature, candidates).cloned();
        debug!(
            "'{}' → {:?} ({} candidatos)",
            request.word,
            sense.as_ref().map(|s| s.name.as_str()),
            scores.len()
        );

        let result = Disambiguation {
            tokens,
            candidates: scores,
            sense,
            processing_ms: start.elapsed().as_millis() as u64,
        };
        emit(PipelineEvent::Done {
            result: result.clone(),
        });
        Ok(result)
    }
}

impl Default for WsdPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&LexiconError> for PipelineEvent {
    fn from(err: &LexiconError) -> Self {
        PipelineEvent::Error {
            message: err.to_string(),
        }
    }
}
