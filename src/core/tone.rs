//! # Tones
//!
//! The fixed set of reply styles the webhook understands. The ids are what
//! travels over the wire, so they stay exactly as the upstream workflow
//! expects them (some are Portuguese).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Tone {
    #[default]
    #[serde(rename = "formal")]
    #[value(name = "formal")]
    Formal,
    #[serde(rename = "informal")]
    #[value(name = "informal")]
    Informal,
    #[serde(rename = "humor")]
    #[value(name = "humor")]
    Humor,
    #[serde(rename = "exagerado")]
    #[value(name = "exagerado")]
    Exaggerated,
    #[serde(rename = "sarcastico")]
    #[value(name = "sarcastico")]
    Sarcastic,
    #[serde(rename = "diplomatico")]
    #[value(name = "diplomatico")]
    Diplomatic,
}

impl Tone {
    /// All tones in display order.
    pub const ALL: [Tone; 6] = [
        Tone::Formal,
        Tone::Informal,
        Tone::Humor,
        Tone::Exaggerated,
        Tone::Sarcastic,
        Tone::Diplomatic,
    ];

    /// Wire identifier sent in the `tone` field of the payload.
    pub fn id(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Informal => "informal",
            Tone::Humor => "humor",
            Tone::Exaggerated => "exagerado",
            Tone::Sarcastic => "sarcastico",
            Tone::Diplomatic => "diplomatico",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tone::Formal => "Formal",
            Tone::Informal => "Informal",
            Tone::Humor => "Humorous",
            Tone::Exaggerated => "Exaggerated",
            Tone::Sarcastic => "Sarcastic",
            Tone::Diplomatic => "Diplomatic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tone::Formal => "Professional and polite reply",
            Tone::Informal => "Casual and relaxed reply",
            Tone::Humor => "Funny and playful reply",
            Tone::Exaggerated => "Dramatic and intense reply",
            Tone::Sarcastic => "Ironic and witty reply",
            Tone::Diplomatic => "Balanced and careful reply",
        }
    }

    /// Looks up a tone by its wire id. Exact match only.
    pub fn from_id(id: &str) -> Option<Tone> {
        Tone::ALL.into_iter().find(|tone| tone.id() == id)
    }

    fn index(self) -> usize {
        Tone::ALL
            .iter()
            .position(|&tone| tone == self)
            .unwrap_or(0)
    }

    /// Next tone in display order (wraps around)
    pub fn next(self) -> Tone {
        Tone::ALL[(self.index() + 1) % Tone::ALL.len()]
    }

    /// Previous tone in display order (wraps around)
    pub fn prev(self) -> Tone {
        let len = Tone::ALL.len();
        Tone::ALL[(self.index() + len - 1) % len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_formal() {
        assert_eq!(Tone::default(), Tone::Formal);
    }

    #[test]
    fn test_ids_are_unique_and_resolvable() {
        for tone in Tone::ALL {
            assert_eq!(Tone::from_id(tone.id()), Some(tone));
        }
        let mut ids: Vec<_> = Tone::ALL.iter().map(|t| t.id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_from_id_rejects_labels_and_case() {
        assert_eq!(Tone::from_id("Sarcastic"), None);
        assert_eq!(Tone::from_id("FORMAL"), None);
        assert_eq!(Tone::from_id(""), None);
    }

    #[test]
    fn test_serializes_as_wire_id() {
        let json = serde_json::to_string(&Tone::Exaggerated).unwrap();
        assert_eq!(json, "\"exagerado\"");
        let tone: Tone = serde_json::from_str("\"diplomatico\"").unwrap();
        assert_eq!(tone, Tone::Diplomatic);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        assert_eq!(Tone::Formal.next(), Tone::Informal);
        assert_eq!(Tone::Diplomatic.next(), Tone::Formal);
        assert_eq!(Tone::Formal.prev(), Tone::Diplomatic);
        assert_eq!(Tone::Humor.prev(), Tone::Informal);
    }
}
