//! The level-3 security terminal: a tiny command interpreter over five
//! locked access nodes.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::challenge::{answers_match, normalize_answer};

pub const NODE_COUNT: u8 = 5;
pub const OUTPUT_LIMIT: usize = 25;
pub const SYSTEM_NAME: &str = "SILO_SECURITY_TERMINAL_v3.7.1";

pub const BOOT_LINES: &[&str] = &[
    "SILO SECURITY SYSTEM v3.7.1",
    "Initializing access nodes...",
    "5 NODES DETECTED - ALL LOCKED",
    "Authentication required for each node",
    "Type \"help\" for available commands",
    "",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AccessNode {
    pub id: u8,
    pub name: &'static str,
    pub riddle: &'static [&'static str],
    pub phrase: &'static str,
    pub help: &'static [&'static str],
}

pub static ACCESS_NODES: [AccessNode; NODE_COUNT as usize] = [
    AccessNode {
        id: 1,
        name: "MEM-TRACE.001",
        riddle: &[
            "I am found when the forbidden is accessed.",
            "I speak only when the seeker dares decode history.",
            "I am the whisper of an erased memory.",
        ],
        phrase: "If you've gotten this far, you already know.",
        help: &[
            "Recovered from: LEGACY_DATA.bin > memTrace[Juliette]",
            "Hint: This phrase acknowledges the seeker's journey into forbidden knowledge.",
        ],
    },
    AccessNode {
        id: 2,
        name: "SYSLOG.002",
        riddle: &[
            "They said you had a choice.",
            "They said the system was fair.",
            "They lied.",
        ],
        phrase: "The game is rigged.",
        help: &[
            "SYSLOG: Root entry = G***e *** R****D",
            "Hint: The system was never meant to be fair. It was designed with predetermined outcomes.",
        ],
    },
    AccessNode {
        id: 3,
        name: "ECHO_CORE.003",
        riddle: &[
            "You think you're special.",
            "But zoom out...",
            "You're just one dot in a circle of 50.",
        ],
        phrase: "We think we're the chosen ones but we're only one of many.",
        help: &[
            "Visual detected: [● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ● ●]",
            "Hint: Each dot represents a silo. You are not unique.",
        ],
    },
    AccessNode {
        id: 4,
        name: "GEN_ARCHIVE.004",
        riddle: &[
            "They engineered the lie.",
            "Not one cage, but fifty.",
            "Each wired with a silent trigger.",
        ],
        phrase: "The founders didn't build a single silo. They built fifty. And they created the safeguard.",
        help: &[
            "Blueprint_Schema: SILO_NETWORK.blueprint",
            "├── Primary_Silo_01",
            "├── Backup_Silo_02-50",
            "└── Safeguard_Protocol.exe",
            "Hint: The founders planned for redundancy and control.",
        ],
    },
    AccessNode {
        id: 5,
        name: "CONCLUSION.005",
        riddle: &[
            "From the start.",
            "By the ones who made it.",
            "And the ones who kept it.",
        ],
        phrase: "We have been lied to.",
        help: &[
            "Truth_Status: DECEPTION_CONFIRMED",
            "Source: [FOUNDERS] + [MAINTAINERS]",
            "Duration: FROM_INCEPTION",
            "Hint: The deception was systematic and complete.",
        ],
    },
];

/// The five unlock phrases joined with single spaces.
#[must_use]
pub fn full_phrase() -> String {
    ACCESS_NODES
        .iter()
        .map(|node| node.phrase)
        .collect::<Vec<_>>()
        .join(" ")
}

#[must_use]
pub fn node(id: u8) -> Option<&'static AccessNode> {
    ACCESS_NODES.iter().find(|node| node.id == id)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Help,
    Access(Option<u8>),
    Status,
    Final,
    Exit,
    Clear,
    Other,
}

/// The node number is the argument's leading digits; `access 2x` enters node 2.
static ACCESS: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^access\s+(\d*)").ok());

impl Command {
    fn parse(raw: &str) -> Self {
        let cmd = raw.trim().to_lowercase();
        match cmd.as_str() {
            "help" => return Self::Help,
            "status" => return Self::Status,
            "final" => return Self::Final,
            "exit" => return Self::Exit,
            "clear" => return Self::Clear,
            _ => {}
        }
        ACCESS
            .as_ref()
            .and_then(|re| re.captures(&cmd))
            .and_then(|caps| caps.get(1))
            .map_or(Self::Other, |arg| {
                Self::Access(arg.as_str().parse::<u8>().ok())
            })
    }
}

/// What a command did, for callers that react beyond the printed log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalEvent {
    Printed,
    Entered(u8),
    Unlocked(u8),
    Denied,
    FinalOpened,
    Exited,
    Cleared,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityTerminal {
    output: Vec<String>,
    current_node: Option<u8>,
    unlocked: [bool; NODE_COUNT as usize],
    final_open: bool,
    solved: bool,
}

impl Default for SecurityTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl SecurityTerminal {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: BOOT_LINES.iter().map(ToString::to_string).collect(),
            current_node: None,
            unlocked: [false; NODE_COUNT as usize],
            final_open: false,
            solved: false,
        }
    }

    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    #[must_use]
    pub const fn current_node(&self) -> Option<u8> {
        self.current_node
    }

    #[must_use]
    pub fn is_unlocked(&self, id: u8) -> bool {
        usize::from(id)
            .checked_sub(1)
            .and_then(|index| self.unlocked.get(index))
            .copied()
            .unwrap_or(false)
    }

    #[must_use]
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.iter().filter(|open| **open).count()
    }

    #[must_use]
    pub fn all_unlocked(&self) -> bool {
        self.unlocked.iter().all(|open| *open)
    }

    #[must_use]
    pub const fn final_open(&self) -> bool {
        self.final_open
    }

    #[must_use]
    pub const fn solved(&self) -> bool {
        self.solved
    }

    fn push(&mut self, line: impl Into<String>) {
        self.output.push(line.into());
    }

    fn push_all(&mut self, lines: &[&str]) {
        self.output.extend(lines.iter().map(ToString::to_string));
    }

    fn trim_output(&mut self) {
        let excess = self.output.len().saturating_sub(OUTPUT_LIMIT);
        self.output.drain(..excess);
    }

    fn status_tag(&self, id: u8) -> &'static str {
        if self.is_unlocked(id) {
            "[UNLOCKED]"
        } else {
            "[LOCKED]"
        }
    }

    /// Run one command line and append its output.
    pub fn execute(&mut self, command: &str) -> TerminalEvent {
        let parsed = Command::parse(command);
        if parsed == Command::Clear {
            self.output = vec!["Terminal cleared".to_string()];
            return TerminalEvent::Cleared;
        }
        self.push(format!("> {command}"));
        let event = match parsed {
            Command::Help => self.help(),
            Command::Access(id) => self.access(id),
            Command::Status => self.status(),
            Command::Final => self.open_final(),
            Command::Exit => {
                self.current_node = None;
                self.push("Exited node access mode.");
                TerminalEvent::Exited
            }
            Command::Clear => TerminalEvent::Cleared,
            Command::Other => self.attempt_phrase(command),
        };
        self.trim_output();
        event
    }

    fn help(&mut self) -> TerminalEvent {
        self.push("");
        match self.current_node.and_then(node) {
            Some(current) => {
                self.push("=== HELP SYSTEM ===");
                self.push_all(current.help);
                self.push("");
                self.push("Enter the correct phrase to unlock this node.");
            }
            None => self.push_all(&[
                "=== AVAILABLE COMMANDS ===",
                "access [1-5] - Access specific node",
                "status - Show node status",
                "help - Show this help (or node-specific help when in a node)",
                "clear - Clear terminal",
                "exit - Exit current node",
            ]),
        }
        TerminalEvent::Printed
    }

    fn access(&mut self, id: Option<u8>) -> TerminalEvent {
        let Some(target) = id.and_then(node) else {
            self.push("ERROR: Invalid node number. Use 1-5.");
            return TerminalEvent::Denied;
        };
        self.current_node = Some(target.id);
        self.push("");
        self.push(format!("=== ACCESSING {} ===", target.name));
        self.push(self.status_tag(target.id));
        self.push("");
        self.push("RIDDLE:");
        self.push_all(target.riddle);
        self.push("");
        self.push("Enter the command \"help\" for assistance.");
        TerminalEvent::Entered(target.id)
    }

    fn status(&mut self) -> TerminalEvent {
        self.push("");
        self.push("=== NODE STATUS ===");
        for entry in &ACCESS_NODES {
            let line = format!("{}: {}", entry.name, self.status_tag(entry.id));
            self.push(line);
        }
        self.push("");
        self.push(format!(
            "Progress: {}/{NODE_COUNT} nodes unlocked",
            self.unlocked_count()
        ));
        if self.all_unlocked() {
            self.push("All nodes unlocked! Use \"final\" to access final terminal.");
        }
        TerminalEvent::Printed
    }

    fn open_final(&mut self) -> TerminalEvent {
        if !self.all_unlocked() {
            self.push("ERROR: Not all nodes are unlocked yet.");
            return TerminalEvent::Denied;
        }
        self.final_open = true;
        self.push_all(&[
            "",
            "=== FINAL ACCESS TERMINAL ===",
            "All nodes have been unlocked.",
            "Enter the complete decryption string to proceed.",
        ]);
        TerminalEvent::FinalOpened
    }

    fn attempt_phrase(&mut self, input: &str) -> TerminalEvent {
        let Some(current) = self.current_node.and_then(node) else {
            self.push("Command not recognized. Type \"help\" for available commands.");
            return TerminalEvent::Unknown;
        };
        if !answers_match(input, current.phrase) {
            self.push("ACCESS DENIED - Incorrect phrase");
            return TerminalEvent::Denied;
        }
        if let Some(slot) = self.unlocked.get_mut(usize::from(current.id) - 1) {
            *slot = true;
        }
        log::debug!("terminal node {} unlocked", current.name);
        self.current_node = None;
        self.push("");
        self.push("✓ PHRASE ACCEPTED");
        self.push(format!("{} UNLOCKED", current.name));
        self.push("");
        if self.all_unlocked() {
            self.push("ALL NODES UNLOCKED!");
            self.push("Use \"final\" command to access the final terminal.");
        }
        TerminalEvent::Unlocked(current.id)
    }

    /// Check the complete decryption string. Only accepted once the final
    /// prompt has been opened.
    pub fn submit_final(&mut self, input: &str) -> bool {
        if self.final_open && normalize_answer(input) == normalize_answer(&full_phrase()) {
            self.solved = true;
            return true;
        }
        self.push("ACCESS DENIED - Fragment mismatch.");
        self.push("Try again with the complete phrase.");
        self.trim_output();
        false
    }
}
