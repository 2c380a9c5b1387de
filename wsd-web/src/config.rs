//! Configuração do servidor, lida das variáveis de ambiente na inicialização.
//!
//! | Variável          | Padrão         | Uso                                   |
//! |-------------------|----------------|---------------------------------------|
//! | `WSD_ADDR`        | `0.0.0.0:3000` | endereço de escuta                    |
//! | `WSD_WORDNET_DIR` | —              | diretório `dict/` do WordNet          |
//! | `WSD_LEXICON`     | —              | léxico em JSON                        |
//!
//! Sem `WSD_WORDNET_DIR` nem `WSD_LEXICON`, usa o léxico embutido.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{info, warn};
use wsd_core::{corpus::builtin_lexicon, wordnet, Lexicon};

const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub wordnet_dir: Option<PathBuf>,
    pub lexicon_json: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let addr_text = get("WSD_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_text
            .parse()
            .with_context(|| format!("WSD_ADDR inválido: {addr_text}"))?;

        let path = |key: &str| get(key).filter(|v| !v.trim().is_empty()).map(PathBuf::from);

        Ok(Self {
            addr,
            wordnet_dir: path("WSD_WORDNET_DIR"),
            lexicon_json: path("WSD_LEXICON"),
        })
    }

    /// Carrega o léxico da fonte configurada. O WordNet tem prioridade sobre o JSON.
    pub fn load_lexicon(&self) -> wsd_core::error::Result<Lexicon> {
        match (&self.wordnet_dir, &self.lexicon_json) {
            (Some(dir), json) => {
                if json.is_some() {
                    warn!("WSD_WORDNET_DIR e WSD_LEXICON definidos; usando o WordNet");
                }
                wordnet::load_dict(dir)
            }
            (None, Some(path)) => Lexicon::from_json_file(path),
            (None, None) => {
                info!("Usando o léxico embutido");
                Ok(builtin_lexicon())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr.port(), 3000);
        assert!(config.wordnet_dir.is_none());
        assert!(config.lexicon_json.is_none());
        assert!(!config.load_lexicon().unwrap().is_empty());
    }

    #[test]
    fn test_custom_values() {
        let config = Config::from_lookup(lookup(&[
            ("WSD_ADDR", "127.0.0.1:8080"),
            ("WSD_WORDNET_DIR", "/usr/share/wordnet"),
            ("WSD_LEXICON", "  "),
        ]))
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.wordnet_dir, Some(PathBuf::from("/usr/share/wordnet")));
        assert!(config.lexicon_json.is_none());
    }

    #[test]
    fn test_invalid_addr() {
        assert!(Config::from_lookup(lookup(&[("WSD_ADDR", "não-é-endereço")])).is_err());
    }

    #[test]
    fn test_missing_json_lexicon_fails() {
        let config = Config::from_lookup(lookup(&[("WSD_LEXICON", "/nao/existe.json")])).unwrap();
        assert!(config.load_lexicon().is_err());
    }
}
