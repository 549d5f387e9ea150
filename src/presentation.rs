//! Terminal rendering: header, sample questions, data summary, raw previews
//! and the two answer styles.

use crate::dataset::{AgriDataset, Table};
use crate::error::Result;
use clap::ValueEnum;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "🌾 Agriculture & Climate Q&A System";
pub const TAGLINE: &str =
    "Ask natural language questions about crops, rainfall, and temperature across Indian states";

pub const SAMPLE_QUESTIONS: [&str; 4] = [
    "Compare rainfall in Karnataka and Tamil Nadu",
    "Show top crops in Maharashtra and Punjab",
    "Analyze temperature in Uttar Pradesh and Bihar",
    "Compare everything for Karnataka and West Bengal with Rice and Wheat",
];

pub const QUESTION_TIPS: [&str; 4] = [
    "Mention **state names** for location",
    "Specify **years** for time period",
    "Include **crop names** for agriculture data",
    "Use words like *compare, analyze, show*",
];

pub const FOOTER: &str = "🌱 Agriculture & Climate Q&A System | Data Sources: Ministry of Agriculture & India Meteorological Department";

pub const DEFAULT_PREVIEW_ROWS: usize = 10;

const PLAIN_HEADING: &str = "🔍 Answer";
const CARD_HEADING: &str = "🔍 Analysis Results";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum AnswerStyle {
    /// Markdown under a plain divider
    #[default]
    Plain,
    /// Bordered answer card with question tips, data overview and footer
    Card,
}

/// Resolve a `#N` shortcut (1-based) to its sample question.
pub fn sample_question(selector: &str) -> Option<&'static str> {
    let index: usize = selector.trim().strip_prefix('#')?.trim().parse().ok()?;
    index.checked_sub(1).and_then(|i| SAMPLE_QUESTIONS.get(i).copied())
}

pub fn render_header(style: AnswerStyle) -> String {
    match style {
        AnswerStyle::Plain => format!("{}\n{}\n", TITLE, TAGLINE),
        AnswerStyle::Card => {
            let width = TAGLINE.width();
            let rule = "═".repeat(width);
            let mut out = format!("{}\n{}\n{}\n{}\n", rule, centered(TITLE, width), TAGLINE, rule);
            out.push_str("\n💡 Question Tips\n");
            for tip in QUESTION_TIPS {
                out.push_str(&format!("- {}\n", tip));
            }
            out
        }
    }
}

/// Record counts per table, shown alongside the card header.
pub fn render_overview(dataset: &AgriDataset) -> String {
    format!(
        "📈 Data Overview\n🌧️ Rainfall: {} Records\n🌾 Crops: {} Records\n🌡️ Temperature: {} Records\n",
        dataset.record_count(Table::Rainfall),
        dataset.record_count(Table::Crop),
        dataset.record_count(Table::Temperature)
    )
}

pub fn render_samples() -> String {
    let mut out = String::from("💡 Sample Questions\n");
    for (i, question) in SAMPLE_QUESTIONS.iter().enumerate() {
        out.push_str(&format!("#{}: {}\n", i + 1, question));
    }
    out
}

pub fn render_answer(markdown: &str, style: AnswerStyle) -> String {
    match style {
        AnswerStyle::Plain => format!("---\n{}\n\n{}\n", PLAIN_HEADING, markdown),
        AnswerStyle::Card => {
            let width = markdown
                .lines()
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0)
                .max(CARD_HEADING.width());

            let mut out = format!("┌{}┐\n", "─".repeat(width + 2));
            out.push_str(&boxed_line(CARD_HEADING, width));
            out.push_str(&format!("├{}┤\n", "─".repeat(width + 2)));
            for line in markdown.lines() {
                out.push_str(&boxed_line(line, width));
            }
            out.push_str(&format!("└{}┘\n", "─".repeat(width + 2)));
            out.push_str(&format!("{}\n", FOOTER));
            out
        }
    }
}

/// States, crops and the year span the loaded tables cover.
pub fn render_summary(dataset: &AgriDataset) -> Result<String> {
    let vocabulary = dataset.vocabulary();
    let years = match dataset.year_span()? {
        Some((first, last)) => format!("{}-{}", first, last),
        None => "none".to_string(),
    };
    Ok(format!(
        "📁 Available Data\n**States**: {}\n**Crops**: {}\n**Years**: {}\n",
        vocabulary.states().join(", "),
        vocabulary.crops().join(", "),
        years
    ))
}

/// Record count and the first `rows` rows of every table.
pub fn render_preview(dataset: &AgriDataset, rows: usize) -> String {
    let mut out = String::from("📊 Raw Data\n");
    for table in Table::ALL {
        let frame = dataset.table(table);
        out.push_str(&format!("\n{} Records: {}\n", table.label(), frame.height()));
        out.push_str(&format!("{}\n", frame.head(Some(rows))));
    }
    out
}

fn boxed_line(line: &str, width: usize) -> String {
    let pad = width.saturating_sub(line.width());
    format!("│ {}{} │\n", line, " ".repeat(pad))
}

fn centered(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.width()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::*;

    #[test]
    fn test_sample_question_shortcuts() {
        assert_eq!(sample_question("#1"), Some(SAMPLE_QUESTIONS[0]));
        assert_eq!(sample_question(" #4 "), Some(SAMPLE_QUESTIONS[3]));
        assert_eq!(sample_question("#0"), None);
        assert_eq!(sample_question("#5"), None);
        assert_eq!(sample_question("1"), None);
        assert_eq!(sample_question("#x"), None);
    }

    #[test]
    fn test_render_samples_numbers_questions() {
        let samples = render_samples();
        assert!(samples.contains("#1: Compare rainfall in Karnataka and Tamil Nadu"));
        assert!(samples.contains("#4: Compare everything"));
    }

    #[test]
    fn test_plain_answer_keeps_markdown() {
        let rendered = render_answer("## Heading\n\nbody", AnswerStyle::Plain);
        assert_eq!(rendered, "---\n🔍 Answer\n\n## Heading\n\nbody\n");
    }

    #[test]
    fn test_card_answer_aligns_emoji_lines() {
        let rendered = render_answer(
            "## 🌾 Crop Production Analysis\nplain line",
            AnswerStyle::Card,
        );
        let lines: Vec<&str> = rendered.lines().collect();
        let bottom = lines.iter().position(|l| l.starts_with('└')).unwrap();
        let card = &lines[..=bottom];

        assert!(card[0].starts_with('┌') && card[0].ends_with('┐'));
        assert!(card[1].contains("🔍 Analysis Results"));
        assert!(card.iter().any(|l| l.contains("## 🌾 Crop Production Analysis")));
        assert!(card.iter().any(|l| l.contains("plain line")));

        let expected = UnicodeWidthStr::width(card[0]);
        for line in card {
            assert_eq!(UnicodeWidthStr::width(*line), expected, "misaligned: {}", line);
        }
        assert_eq!(lines[bottom + 1], FOOTER);
    }

    #[test]
    fn test_card_header_lists_question_tips() {
        let header = render_header(AnswerStyle::Card);
        assert!(header.contains(TITLE));
        assert!(header.contains("💡 Question Tips"));
        for tip in QUESTION_TIPS {
            assert!(header.contains(&format!("- {}", tip)));
        }
        assert!(!render_header(AnswerStyle::Plain).contains("Question Tips"));
    }

    #[test]
    fn test_summary_and_preview() {
        let crop = df![
            "State" => ["Punjab"],
            "Year" => [2015],
            "Crop_Type" => ["Wheat"],
            "Production_Volume" => [10.0],
        ]
        .unwrap();
        let rainfall = df![
            "State" => ["Bihar"],
            "Year" => [2024],
            "Rainfall_mm" => [1000.0],
        ]
        .unwrap();
        let temperature = df![
            "State" => ["Bihar"],
            "Year" => [2020],
            "Avg_Temperature" => [26.0],
        ]
        .unwrap();
        let dataset = AgriDataset::from_frames(crop, rainfall, temperature).unwrap();

        let summary = render_summary(&dataset).unwrap();
        assert!(summary.contains("**States**: Bihar, Punjab"));
        assert!(summary.contains("**Crops**: Wheat"));
        assert!(summary.contains("**Years**: 2015-2024"));

        let preview = render_preview(&dataset, DEFAULT_PREVIEW_ROWS);
        assert!(preview.contains("Crop Records: 1"));
        assert!(preview.contains("Rainfall Records: 1"));
        assert!(preview.contains("Temperature Records: 1"));

        let overview = render_overview(&dataset);
        assert!(overview.starts_with("📈 Data Overview\n"));
        assert!(overview.contains("🌧️ Rainfall: 1 Records"));
        assert!(overview.contains("🌾 Crops: 1 Records"));
        assert!(overview.contains("🌡️ Temperature: 1 Records"));
    }
}
