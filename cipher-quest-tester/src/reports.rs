use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use std::time::Duration;

use crate::autoplay::CampaignReport;

fn pass_counts(report: &CampaignReport) -> (usize, usize) {
    let passed = report.results.iter().filter(|r| r.passed).count();
    (passed, report.results.len() - passed)
}

pub fn generate_console_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CampaignReport,
    total_duration: Duration,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "📊 Cipher Quest Play-through".bright_cyan().bold())?;
    writeln!(out, "{}", "============================".cyan())?;

    let (passed, failed) = pass_counts(report);
    writeln!(out, "Levels played: {}", report.results.len())?;
    writeln!(out, "Solved: {}", passed.to_string().green())?;
    writeln!(out, "Failed: {}", failed.to_string().red())?;
    writeln!(out, "Total time: {total_duration:?}")?;
    writeln!(out)?;

    for result in &report.results {
        let status = if result.passed {
            "✅ PASS".green()
        } else {
            "❌ FAIL".red()
        };
        writeln!(
            out,
            "{} Level {:>2} {} ({})",
            status,
            result.level,
            result.title.bold(),
            result.cipher
        )?;
        writeln!(
            out,
            "   Score: {} | Hints: {} | Time: {:?}",
            result.score, result.hints_used, result.duration
        )?;
        if let Some(failure) = &result.failure {
            writeln!(out, "   Failure: {}", failure.red())?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "Total score: {} | Grade: {} ({})",
        report.total_score.to_string().bright_white().bold(),
        report.grade.label().bright_yellow(),
        report.grade.remark()
    )?;
    if report.completed {
        writeln!(out, "{}", "🎉 All levels complete".bright_green())?;
    }
    Ok(())
}

pub fn generate_json_report<W: Write + ?Sized>(out: &mut W, report: &CampaignReport) -> Result<()> {
    let json_output = serde_json::to_string_pretty(report)?;
    writeln!(out, "{json_output}")?;
    Ok(())
}

pub fn generate_markdown_report<W: Write + ?Sized>(
    out: &mut W,
    report: &CampaignReport,
) -> Result<()> {
    writeln!(out, "# Cipher Quest Play-through\n")?;

    let (passed, failed) = pass_counts(report);
    writeln!(out, "## Summary\n")?;
    writeln!(out, "- **Started**: {}", report.started_at)?;
    writeln!(out, "- **Levels played**: {}", report.results.len())?;
    writeln!(out, "- **Solved**: {passed}")?;
    writeln!(out, "- **Failed**: {failed}")?;
    writeln!(
        out,
        "- **Total score**: {} (grade {})\n",
        report.total_score,
        report.grade.label()
    )?;

    writeln!(out, "## Levels\n")?;
    writeln!(out, "| Level | Title | Cipher | Hints | Score | Result |")?;
    writeln!(out, "|------:|-------|--------|------:|------:|--------|")?;
    for result in &report.results {
        let status = if result.passed { "✅" } else { "❌" };
        writeln!(
            out,
            "| {} | {} | {} | {} | {} | {} |",
            result.level, result.title, result.cipher, result.hints_used, result.score, status
        )?;
    }

    let failures: Vec<_> = report
        .results
        .iter()
        .filter_map(|r| r.failure.as_ref().map(|f| (r.level, f)))
        .collect();
    if !failures.is_empty() {
        writeln!(out, "\n## Failures\n")?;
        for (level, failure) in failures {
            writeln!(out, "- Level {level}: {failure}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autoplay::AutoPlayer;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn json_report_lists_levels() {
        let report = AutoPlayer::new(0, false).run(&[1, 2]);
        let text = render(|out| generate_json_report(out, &report));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["total_score"], 250);
        assert_eq!(value["results"][0]["cipher"], "caesar");
    }

    #[test]
    fn markdown_report_has_table() {
        let report = AutoPlayer::new(1, false).run(&[1]);
        let text = render(|out| generate_markdown_report(out, &report));
        assert!(text.starts_with("# Cipher Quest Play-through"));
        assert!(text.contains("| 1 | Simple Cryptology |"));
        assert!(!text.contains("## Failures"));
    }

    #[test]
    fn console_report_names_grade() {
        colored::control::set_override(false);
        let report = AutoPlayer::new(0, false).run(&[1]);
        let text = render(|out| generate_console_report(out, &report, Duration::from_millis(5)));
        assert!(text.contains("Simple Cryptology"));
        assert!(text.contains("Total score: 100"));
    }
}
