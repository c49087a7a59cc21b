//! Static level table: ten puzzles in unlock order.

use serde::{Deserialize, Serialize};
use std::fmt;

pub type LevelId = u8;

pub const FIRST_LEVEL: LevelId = 1;
pub const LEVEL_COUNT: LevelId = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Academic,
    Cyberpunk,
    Terminal,
    Egyptian,
    Tokyo,
    Medieval,
    Noir,
    Alien,
    Steampunk,
    Firewall,
}

impl Theme {
    /// CSS class suffix used by the front end.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Cyberpunk => "cyberpunk",
            Self::Terminal => "terminal",
            Self::Egyptian => "egyptian",
            Self::Tokyo => "tokyo",
            Self::Medieval => "medieval",
            Self::Noir => "noir",
            Self::Alien => "alien",
            Self::Steampunk => "steampunk",
            Self::Firewall => "firewall",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Caesar,
    Atbash,
    MultiPart,
    HieroglyphSubstitution,
    Xor,
    Vigenere,
    Book,
    AlienSubstitution,
    TimeCaesar,
    MultiLayer,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Caesar => "Caesar Cipher",
            Self::Atbash => "Atbash Cipher",
            Self::MultiPart => "Multi-part Puzzle",
            Self::HieroglyphSubstitution => "Hieroglyphic Substitution",
            Self::Xor => "XOR Cipher",
            Self::Vigenere => "Vigenère Cipher",
            Self::Book => "Book Cipher",
            Self::AlienSubstitution => "Alien Substitution",
            Self::TimeCaesar => "Time-based Caesar",
            Self::MultiLayer => "Multi-layer",
        };
        f.write_str(label)
    }
}

/// One puzzle. `score_floor` and `hint_penalty` shape the completion score:
/// `max(score_floor, max_score - hints * hint_penalty)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    pub id: LevelId,
    pub title: &'static str,
    pub theme: Theme,
    pub cipher: CipherKind,
    pub description: &'static str,
    pub solution: &'static str,
    pub hints: &'static [&'static str],
    pub max_score: u32,
    pub score_floor: u32,
    pub hint_penalty: u32,
}

impl Level {
    #[must_use]
    pub fn hint(&self, index: usize) -> Option<&'static str> {
        self.hints.get(index).copied()
    }

    #[must_use]
    pub fn score_with_hints(&self, hints_used: u32) -> u32 {
        self.max_score
            .saturating_sub(hints_used.saturating_mul(self.hint_penalty))
            .max(self.score_floor)
    }
}

pub static LEVELS: [Level; LEVEL_COUNT as usize] = [
    Level {
        id: 1,
        title: "Simple Cryptology",
        theme: Theme::Academic,
        cipher: CipherKind::Caesar,
        description: "Welcome to the world of cryptography. Decode this simple message using a Caesar cipher.",
        solution: "HELLO WORLD",
        hints: &[
            "Try shifting each letter by a fixed number of positions in the alphabet",
            "The shift value is between 1 and 25",
            "The shift value is 13 (ROT13)",
        ],
        max_score: 100,
        score_floor: 50,
        hint_penalty: 20,
    },
    Level {
        id: 2,
        title: "Arcane & Jinx",
        theme: Theme::Cyberpunk,
        cipher: CipherKind::Atbash,
        description: "In the depths of Zaun, decode this alchemical formula using HexTech power.",
        solution: "HEXTECH CRYSTAL",
        hints: &[
            "This cipher reverses the alphabet: A becomes Z, B becomes Y, etc.",
            "Each letter maps to its opposite position in the alphabet",
            "A=Z, B=Y, C=X, and so on...",
        ],
        max_score: 150,
        score_floor: 75,
        hint_penalty: 25,
    },
    Level {
        id: 3,
        title: "Silo Security Terminal",
        theme: Theme::Terminal,
        cipher: CipherKind::MultiPart,
        description: "Uncover the truth hidden in the silo's security system. Access all nodes to reveal the complete message.",
        solution: "If you've gotten this far, you already know. The game is rigged. We think we're the chosen ones but we're only one of many. The founders didn't build a single silo. They built fifty. And they created the safeguard. We have been lied to.",
        hints: &[
            "Use 'access [1-5]' to enter each security node",
            "Type 'help' when inside a node to get specific guidance",
            "Each node requires a specific phrase to unlock",
        ],
        max_score: 200,
        score_floor: 100,
        hint_penalty: 30,
    },
    Level {
        id: 4,
        title: "Egyptian Tomb of Codes",
        theme: Theme::Egyptian,
        cipher: CipherKind::HieroglyphSubstitution,
        description: "Ancient secrets await. Match the hieroglyphs to reveal the pharaoh's message.",
        solution: "ANCIENT WISDOM",
        hints: &[
            "Each hieroglyph represents a letter of the alphabet",
            "Look for patterns in the symbols",
            "The eye symbol represents 'A', the water ripple represents 'N'",
        ],
        max_score: 250,
        score_floor: 125,
        hint_penalty: 35,
    },
    Level {
        id: 5,
        title: "Cyber Tokyo Street",
        theme: Theme::Tokyo,
        cipher: CipherKind::Xor,
        description: "Neon lights flicker with hidden messages. Decode using logical operations.",
        solution: "NEON DREAMS",
        hints: &[
            "XOR cipher uses exclusive OR operations",
            "You need a key to XOR with each character",
            "The key is 'TOKYO'",
        ],
        max_score: 300,
        score_floor: 150,
        hint_penalty: 40,
    },
    Level {
        id: 6,
        title: "Medieval Wizard Lab",
        theme: Theme::Medieval,
        cipher: CipherKind::Vigenere,
        description: "Ancient magic requires the right incantation. Use the keyword to unlock the spell.",
        solution: "MAGIC SPELL",
        hints: &[
            "This is a Vigenère cipher - it uses a keyword",
            "The keyword repeats to match the message length",
            "The keyword is 'MERLIN'",
        ],
        max_score: 350,
        score_floor: 175,
        hint_penalty: 45,
    },
    Level {
        id: 7,
        title: "Noir Detective Case",
        theme: Theme::Noir,
        cipher: CipherKind::Book,
        description: "The evidence is in the details. Use the newspaper clues to crack the case.",
        solution: "CASE CLOSED",
        hints: &[
            "Look for numbers that might reference page, line, and word",
            "The newspaper contains the key to decoding",
            "Format: page-line-word references",
        ],
        max_score: 400,
        score_floor: 200,
        hint_penalty: 50,
    },
    Level {
        id: 8,
        title: "Alien Language Interface",
        theme: Theme::Alien,
        cipher: CipherKind::AlienSubstitution,
        description: "First contact protocol initiated. Decode their message to establish communication.",
        solution: "GREETINGS HUMAN",
        hints: &[
            "Each alien symbol represents a letter",
            "Look for repeated patterns",
            "The diamond symbol means 'G', the triangle means 'R'",
        ],
        max_score: 450,
        score_floor: 225,
        hint_penalty: 55,
    },
    Level {
        id: 9,
        title: "Time Traveler's Dashboard",
        theme: Theme::Steampunk,
        cipher: CipherKind::TimeCaesar,
        description: "Set the temporal coordinates correctly to decode the chronometer's message.",
        solution: "TIME PARADOX",
        hints: &[
            "The shift value changes based on time",
            "Use the year 1885 as your key",
            "Apply the last two digits as the Caesar shift",
        ],
        max_score: 500,
        score_floor: 250,
        hint_penalty: 60,
    },
    Level {
        id: 10,
        title: "The Final Firewall",
        theme: Theme::Firewall,
        cipher: CipherKind::MultiLayer,
        description: "The ultimate challenge. Break through multiple encryption layers to escape.",
        solution: "FREEDOM ACHIEVED",
        hints: &[
            "This message has multiple layers of encryption",
            "First decode the Base64, then apply Caesar shift",
            "Finally, reverse the Atbash cipher",
        ],
        max_score: 1000,
        score_floor: 500,
        hint_penalty: 65,
    },
];

#[must_use]
pub fn level(id: LevelId) -> Option<&'static Level> {
    LEVELS.iter().find(|level| level.id == id)
}

#[must_use]
pub const fn is_valid_level(id: LevelId) -> bool {
    id >= FIRST_LEVEL && id <= LEVEL_COUNT
}
