//! # Léxico embutido e sentenças de demonstração
//!
//! Um excerto do WordNet 3.0 (glosas e ordem de sentidos) para algumas palavras
//! clássicas de desambiguação, suficiente para usar o sistema sem baixar o
//! banco completo. Para o WordNet inteiro, veja [`crate::wordnet::load_dict`].
//!
//! Alguns synsets também recebem lemas em português (idioma `por`), no estilo
//! dos wordnets multilíngues: as definições continuam em inglês, só os lemas
//! mudam.

use serde::Serialize;

use crate::lexicon::{Lexicon, DEFAULT_LANG};
use crate::sense::Synset;

struct Entry {
    name: &'static str,
    pos: &'static str,
    lemmas: &'static [&'static str],
    definition: &'static str,
    examples: &'static [&'static str],
}

/// Na ordem de sentido do WordNet para cada lema.
const ENGLISH: &[Entry] = &[
    // ===== BANK (substantivo) =====
    Entry {
        name: "bank.n.01",
        pos: "n",
        lemmas: &["bank"],
        definition: "sloping land (especially the slope beside a body of water)",
        examples: &["they pulled the canoe up on the bank", "he sat on the bank of the river and watched the currents"],
    },
    Entry {
        name: "depository_financial_institution.n.01",
        pos: "n",
        lemmas: &["depository_financial_institution", "bank", "banking_concern", "banking_company"],
        definition: "a financial institution that accepts deposits and channels the money into lending activities",
        examples: &["he cashed a check at the bank", "that bank holds the mortgage on my home"],
    },
    Entry {
        name: "bank.n.03",
        pos: "n",
        lemmas: &["bank"],
        definition: "a long ridge or pile",
        examples: &["a huge bank of earth"],
    },
    Entry {
        name: "bank.n.04",
        pos: "n",
        lemmas: &["bank"],
        definition: "an arrangement of similar objects in a row or in tiers",
        examples: &["he operated a bank of switches"],
    },
    Entry {
        name: "bank.n.05",
        pos: "n",
        lemmas: &["bank"],
        definition: "a supply or stock held in reserve for future use (especially in emergencies)",
        examples: &[],
    },
    Entry {
        name: "bank.n.06",
        pos: "n",
        lemmas: &["bank"],
        definition: "the funds held by a gambling house or the dealer in some gambling games",
        examples: &["he tried to break the bank at Monte Carlo"],
    },
    Entry {
        name: "bank.n.07",
        pos: "n",
        lemmas: &["bank", "cant", "camber"],
        definition: "a slope in the turn of a road or track; the outside is higher than the inside in order to reduce the effects of centrifugal force",
        examples: &[],
    },
    Entry {
        name: "savings_bank.n.02",
        pos: "n",
        lemmas: &["savings_bank", "coin_bank", "money_box", "bank"],
        definition: "a container (usually with a slot in the top) for keeping money at home",
        examples: &["the coin bank was empty"],
    },
    Entry {
        name: "bank.n.09",
        pos: "n",
        lemmas: &["bank", "bank_building"],
        definition: "a building in which the business of banking transacted",
        examples: &["the bank is on the corner of Nassau and Witherspoon"],
    },
    Entry {
        name: "bank.n.10",
        pos: "n",
        lemmas: &["bank"],
        definition: "a flight maneuver; aircraft tips laterally about its longitudinal axis (especially in turning)",
        examples: &["the plane went into a steep bank"],
    },
    // ===== BANK (verbo) =====
    Entry {
        name: "bank.v.01",
        pos: "v",
        lemmas: &["bank"],
        definition: "tip laterally",
        examples: &["the pilot had to bank the aircraft"],
    },
    Entry {
        name: "bank.v.02",
        pos: "v",
        lemmas: &["bank"],
        definition: "enclose with a bank",
        examples: &["bank roads"],
    },
    Entry {
        name: "bank.v.03",
        pos: "v",
        lemmas: &["bank"],
        definition: "do business with a bank or keep an account at a bank",
        examples: &["Where do you bank in this town?"],
    },
    Entry {
        name: "bank.v.04",
        pos: "v",
        lemmas: &["bank"],
        definition: "act as the banker in a game or in gambling",
        examples: &[],
    },
    Entry {
        name: "bank.v.05",
        pos: "v",
        lemmas: &["bank"],
        definition: "be in the banking business",
        examples: &[],
    },
    Entry {
        name: "deposit.v.02",
        pos: "v",
        lemmas: &["deposit", "bank"],
        definition: "put into a bank account",
        examples: &["She deposits her paycheck every month"],
    },
    Entry {
        name: "bank.v.07",
        pos: "v",
        lemmas: &["bank"],
        definition: "cover with ashes so to control the rate of burning",
        examples: &["bank a fire"],
    },
    Entry {
        name: "trust.v.01",
        pos: "v",
        lemmas: &["trust", "swear", "rely", "bank"],
        definition: "have confidence or faith in",
        examples: &["We can trust in God", "Rely on your friends", "bank on your good education"],
    },
    // ===== BASS =====
    Entry {
        name: "bass.n.01",
        pos: "n",
        lemmas: &["bass"],
        definition: "the lowest part of the musical range",
        examples: &[],
    },
    Entry {
        name: "bass.n.02",
        pos: "n",
        lemmas: &["bass", "bass_part"],
        definition: "the lowest part in polyphonic music",
        examples: &[],
    },
    Entry {
        name: "bass.n.03",
        pos: "n",
        lemmas: &["bass", "basso"],
        definition: "an adult male singer with the lowest voice",
        examples: &[],
    },
    Entry {
        name: "sea_bass.n.01",
        pos: "n",
        lemmas: &["sea_bass", "bass"],
        definition: "the lean flesh of a saltwater fish of the family Serranidae",
        examples: &[],
    },
    Entry {
        name: "freshwater_bass.n.01",
        pos: "n",
        lemmas: &["freshwater_bass", "bass"],
        definition: "any of various North American freshwater fish with lean flesh (especially of the genus Micropterus)",
        examples: &[],
    },
    Entry {
        name: "bass.n.06",
        pos: "n",
        lemmas: &["bass", "bass_voice", "basso"],
        definition: "the lowest adult male singing voice",
        examples: &[],
    },
    Entry {
        name: "bass.n.07",
        pos: "n",
        lemmas: &["bass"],
        definition: "the member with the lowest range of a family of musical instruments",
        examples: &[],
    },
    Entry {
        name: "bass.n.08",
        pos: "n",
        lemmas: &["bass"],
        definition: "nontechnical name for any of numerous edible marine and freshwater spiny-finned fishes",
        examples: &[],
    },
    Entry {
        name: "bass.s.01",
        pos: "s",
        lemmas: &["bass", "deep"],
        definition: "having or denoting a low vocal or instrumental range",
        examples: &["a deep voice", "a bass voice is lower than a baritone voice"],
    },
    // ===== PINE =====
    Entry {
        name: "pine.n.01",
        pos: "n",
        lemmas: &["pine", "pine_tree", "true_pine"],
        definition: "a coniferous tree",
        examples: &[],
    },
    Entry {
        name: "pine.n.02",
        pos: "n",
        lemmas: &["pine"],
        definition: "straight-grained white to yellowish tree",
        examples: &[],
    },
    Entry {
        name: "pine.v.01",
        pos: "v",
        lemmas: &["pine", "ache", "yearn", "yen", "languish"],
        definition: "have a desire for something or someone who is not present",
        examples: &["She ached for a cigarette", "I am pining for my lover"],
    },
    Entry {
        name: "pine.v.02",
        pos: "v",
        lemmas: &["pine", "pine_away", "waste", "languish"],
        definition: "lose vigor, health, or flesh, as through grief",
        examples: &["After her husband died, she just pined away"],
    },
    // ===== PLANT =====
    Entry {
        name: "plant.n.01",
        pos: "n",
        lemmas: &["plant", "works", "industrial_plant"],
        definition: "buildings for carrying on industrial labor",
        examples: &["they built a large plant to manufacture automobiles"],
    },
    Entry {
        name: "plant.n.02",
        pos: "n",
        lemmas: &["plant", "flora", "plant_life"],
        definition: "(botany) a living organism lacking the power of locomotion",
        examples: &[],
    },
    Entry {
        name: "plant.n.03",
        pos: "n",
        lemmas: &["plant"],
        definition: "an actor situated in the audience whose acting is rehearsed but seems spontaneous to the audience",
        examples: &[],
    },
    Entry {
        name: "plant.n.04",
        pos: "n",
        lemmas: &["plant"],
        definition: "something planted secretly for discovery by another",
        examples: &["the police used a plant to trick the thieves"],
    },
    Entry {
        name: "plant.v.01",
        pos: "v",
        lemmas: &["plant", "set"],
        definition: "put or set (seeds, seedlings, or plants) into the ground",
        examples: &["Let's plant flowers in the garden"],
    },
    Entry {
        name: "plant.v.02",
        pos: "v",
        lemmas: &["plant"],
        definition: "fix or set securely or deeply",
        examples: &["He planted a knee in the back of his opponent"],
    },
    Entry {
        name: "plant.v.03",
        pos: "v",
        lemmas: &["plant", "implant", "engraft", "embed", "imbed"],
        definition: "set up or lay the groundwork for",
        examples: &["embed the stone in the wall"],
    },
    Entry {
        name: "plant.v.04",
        pos: "v",
        lemmas: &["plant"],
        definition: "place into a river",
        examples: &["plant fish"],
    },
    // ===== MONEY =====
    Entry {
        name: "money.n.01",
        pos: "n",
        lemmas: &["money"],
        definition: "the most common medium of exchange; functions as legal tender",
        examples: &["we tried to collect the money he owed us"],
    },
    Entry {
        name: "money.n.02",
        pos: "n",
        lemmas: &["money"],
        definition: "wealth reckoned in terms of money",
        examples: &["all his money is in real estate"],
    },
    Entry {
        name: "money.n.03",
        pos: "n",
        lemmas: &["money"],
        definition: "the official currency issued by a government or national bank",
        examples: &["he changed his money into francs"],
    },
];

/// (synset, lemas em português)
const PORTUGUESE: &[(&str, &[&str])] = &[
    ("bank.n.01", &["margem", "ribanceira"]),
    ("depository_financial_institution.n.01", &["banco"]),
    ("bank.n.09", &["banco", "agência bancária"]),
    ("bass.n.07", &["contrabaixo", "baixo"]),
    ("sea_bass.n.01", &["robalo"]),
    ("pine.n.01", &["pinheiro"]),
    ("plant.n.01", &["fábrica", "usina"]),
    ("plant.n.02", &["planta"]),
    ("plant.v.01", &["plantar"]),
    ("money.n.01", &["dinheiro"]),
];

/// Monta o léxico embutido (`eng` + `por`).
pub fn builtin_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();
    for entry in ENGLISH {
        let synset = Synset::new(entry.name, entry.pos, entry.definition)
            .with_lemmas(entry.lemmas)
            .with_examples(entry.examples);
        lexicon.add_synset(DEFAULT_LANG, synset);
    }
    lexicon.register_language("por");
    for (name, lemmas) in PORTUGUESE {
        lexicon.add_lemmas("por", name, lemmas);
    }
    lexicon
}

/// Uma sentença de demonstração com a palavra a desambiguar.
#[derive(Debug, Clone, Serialize)]
pub struct DemoSentence {
    pub label: &'static str,
    pub text: &'static str,
    pub word: &'static str,
    pub pos: Option<&'static str>,
    pub lang: &'static str,
}

/// Sentenças de demonstração para a interface web
pub fn demo_sentences() -> Vec<DemoSentence> {
    let demo = |label: &'static str, text: &'static str, word: &'static str, pos: Option<&'static str>| DemoSentence {
        label,
        text,
        word,
        pos,
        lang: DEFAULT_LANG,
    };
    vec![
        demo("Finanças", "I went to the bank to deposit money.", "bank", Some("n")),
        demo("Rio", "They pulled the canoe up on the bank of the river.", "bank", None),
        demo("Música", "He plays the bass in a jazz band.", "bass", None),
        demo("Pesca", "I caught a bass while fishing in the lake.", "bass", Some("n")),
        demo("Indústria", "The plant employs workers in industrial labor.", "plant", Some("n")),
        demo("Jardim", "She decided to plant tomato seeds into the ground.", "plant", Some("v")),
        DemoSentence {
            label: "Português",
            text: "Fui ao banco depositar dinheiro na conta.",
            word: "banco",
            pos: Some("n"),
            lang: "por",
        },
    ]
}
