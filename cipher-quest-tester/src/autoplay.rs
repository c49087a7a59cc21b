use chrono::Utc;
use cipher_quest_game::terminal::{ACCESS_NODES, full_phrase};
use cipher_quest_game::{
    CipherKind, DecoderSetting, GameEngine, Grade, LEVEL_COUNT, Level, LevelId, MemoryStorage,
    SecurityTerminal, TerminalEvent, View, grade_for, level, preview,
};
use colored::Colorize;
use serde::Serialize;
use std::time::{Duration, Instant};

/// Outcome of auto-solving one level.
#[derive(Debug, Clone, Serialize)]
pub struct LevelResult {
    pub level: LevelId,
    pub title: String,
    pub cipher: CipherKind,
    pub passed: bool,
    pub hints_used: u32,
    pub score: u32,
    pub expected_score: u32,
    pub answer: String,
    pub failure: Option<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

/// One run over the selected levels.
#[derive(Debug, Clone, Serialize)]
pub struct CampaignReport {
    pub started_at: String,
    pub finished_at: String,
    pub results: Vec<LevelResult>,
    pub total_score: u32,
    pub grade: Grade,
    pub completed: bool,
}

impl CampaignReport {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }
}

/// Parse `--levels`: `all` or a comma-separated list of level numbers.
///
/// # Errors
/// Returns an error for a token that is not a level between 1 and 10.
pub fn parse_levels(raw: &str) -> anyhow::Result<Vec<LevelId>> {
    let mut levels = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if token.eq_ignore_ascii_case("all") {
            levels.extend(1..=LEVEL_COUNT);
            continue;
        }
        let id: LevelId = token
            .parse()
            .map_err(|_| anyhow::anyhow!("'{token}' is not a level number"))?;
        anyhow::ensure!(level(id).is_some(), "level {id} does not exist (1-{LEVEL_COUNT})");
        levels.push(id);
    }
    levels.sort_unstable();
    levels.dedup();
    anyhow::ensure!(!levels.is_empty(), "no levels selected");
    Ok(levels)
}

/// Plays the campaign against an in-memory save, solving each level with
/// the decoder setting its challenge calls for.
pub struct AutoPlayer {
    hints: u32,
    verbose: bool,
}

impl AutoPlayer {
    #[must_use]
    pub const fn new(hints: u32, verbose: bool) -> Self {
        Self { hints, verbose }
    }

    /// Play every level up to the highest one requested. Levels before it
    /// are solved to unlock it but only requested levels are reported.
    #[must_use]
    pub fn run(&self, levels: &[LevelId]) -> CampaignReport {
        let started_at = Utc::now();
        let now_ms = u64::try_from(started_at.timestamp_millis()).unwrap_or(0);
        let mut engine = GameEngine::new(MemoryStorage::new(), now_ms);
        let last = levels.iter().copied().max().unwrap_or(0);

        let mut results = Vec::new();
        for id in 1..=last {
            let Some(found) = level(id) else {
                continue;
            };
            let requested = levels.contains(&id);
            let hints = if requested { self.hints } else { 0 };
            let result = self.play_level(&mut engine, found, hints);
            if !result.passed {
                log::warn!(
                    "level {id} failed: {}",
                    result.failure.as_deref().unwrap_or("unknown")
                );
            }
            let stop = !result.passed;
            if requested || stop {
                results.push(result);
            }
            if stop {
                break;
            }
        }

        let total_score = engine.state().total_score;
        CampaignReport {
            started_at: started_at.to_rfc3339(),
            finished_at: Utc::now().to_rfc3339(),
            results,
            total_score,
            grade: grade_for(total_score),
            completed: engine.view() == View::Complete,
        }
    }

    fn play_level(
        &self,
        engine: &mut GameEngine<MemoryStorage>,
        found: &'static Level,
        hints: u32,
    ) -> LevelResult {
        let start = Instant::now();
        let id = found.id;
        let mut result = blank_result(found);

        if let Err(err) = engine.select_level(id) {
            result.failure = Some(err.to_string());
            return result;
        }
        for _ in 0..hints {
            if let Some(hint) = engine.use_hint() {
                result.hints_used += 1;
                if self.verbose {
                    println!("   💡 {hint}");
                }
            }
        }

        let answer = match solve(engine) {
            Ok(answer) => answer,
            Err(reason) => {
                result.failure = Some(reason);
                return result;
            }
        };
        result.answer.clone_from(&answer);

        match engine.submit_answer(&answer) {
            Ok(Some(score)) => {
                result.score = score;
                result.expected_score = found.score_with_hints(result.hints_used);
                if score == result.expected_score {
                    result.passed = true;
                } else {
                    result.failure = Some(format!(
                        "scored {score}, expected {}",
                        result.expected_score
                    ));
                }
            }
            Ok(None) => result.failure = Some(format!("answer rejected: {answer}")),
            Err(err) => result.failure = Some(err.to_string()),
        }
        result.duration = start.elapsed();

        if self.verbose {
            let status = if result.passed { "✅".green() } else { "❌".red() };
            println!(
                "{status} Level {id} {} -> {} ({} pts, {:?})",
                result.title.bold(),
                result.answer,
                result.score,
                result.duration
            );
        }
        result
    }
}

fn blank_result(found: &Level) -> LevelResult {
    LevelResult {
        level: found.id,
        title: found.title.to_string(),
        cipher: found.cipher,
        passed: false,
        hints_used: 0,
        score: 0,
        expected_score: 0,
        answer: String::new(),
        failure: None,
        duration: Duration::ZERO,
    }
}

/// Produce the answer for the open level by decoding its challenge.
fn solve(engine: &GameEngine<MemoryStorage>) -> Result<String, String> {
    let current = engine
        .current_level()
        .ok_or_else(|| "no level open".to_string())?;
    if current.cipher == CipherKind::MultiPart {
        return solve_terminal();
    }
    let challenge = engine
        .challenge()
        .ok_or_else(|| "no challenge generated".to_string())?;
    let setting = DecoderSetting::solving(current.cipher, &challenge);
    log::debug!("level {} decoder setting {setting:?}", current.id);
    Ok(preview(current, &challenge, &setting))
}

/// Walk the security terminal: unlock each node, open the final prompt and
/// enter the joined phrase.
fn solve_terminal() -> Result<String, String> {
    let mut terminal = SecurityTerminal::new();
    for node in &ACCESS_NODES {
        let entered = terminal.execute(&format!("access {}", node.id));
        if entered != TerminalEvent::Entered(node.id) {
            return Err(format!("could not enter {}: {entered:?}", node.name));
        }
        let unlocked = terminal.execute(node.phrase);
        if unlocked != TerminalEvent::Unlocked(node.id) {
            return Err(format!("{} rejected its phrase: {unlocked:?}", node.name));
        }
    }
    if terminal.execute("final") != TerminalEvent::FinalOpened {
        return Err("final terminal stayed locked".to_string());
    }
    let phrase = full_phrase();
    if terminal.submit_final(&phrase) {
        Ok(phrase)
    } else {
        Err("final phrase rejected".to_string())
    }
}

mod duration_serde {
    use serde::{Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_level_lists() {
        assert_eq!(parse_levels("all").unwrap(), (1..=10).collect::<Vec<_>>());
        assert_eq!(parse_levels("3, 1,3").unwrap(), vec![1, 3]);
        assert!(parse_levels("11").is_err());
        assert!(parse_levels("x").is_err());
        assert!(parse_levels(" , ").is_err());
    }

    #[test]
    fn solves_the_whole_campaign() {
        let report = AutoPlayer::new(0, false).run(&parse_levels("all").unwrap());
        assert!(report.passed(), "{:?}", report.results);
        assert_eq!(report.results.len(), 10);
        assert_eq!(report.total_score, 3700);
        assert_eq!(report.grade, Grade::S);
        assert!(report.completed);
    }

    #[test]
    fn hints_lower_the_score() {
        let report = AutoPlayer::new(2, false).run(&[1]);
        assert!(report.passed());
        let first = &report.results[0];
        assert_eq!(first.hints_used, 2);
        assert_eq!(first.score, 60);
    }

    #[test]
    fn later_levels_unlock_through_earlier_ones() {
        let report = AutoPlayer::new(0, false).run(&[4]);
        assert_eq!(report.results.len(), 1);
        assert_eq!(report.results[0].level, 4);
        assert!(report.results[0].answer.eq_ignore_ascii_case("ancient wisdom"));
        assert!(!report.completed);
    }

    #[test]
    fn terminal_route_yields_full_phrase() {
        assert_eq!(solve_terminal(), Ok(full_phrase()));
    }
}
