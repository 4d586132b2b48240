//! Body content: the trust strip followed by the result region.
//!
//! The result region shows exactly one of idle hint, loading indicator,
//! error panel or verification report, chosen by matching on the state.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::analysis::{
    AnalysisReport, Authenticity, FactCheckReport, MediaScanReport, Preview, VerdictEntry,
};
use crate::ui::submission::SubmissionState;
use crate::ui::theme::{
    ACCENT, ERROR_TEXT, FOREGROUND, LINK, TEXT_MUTED, TEXT_SECONDARY, VERDICT_FAKE, VERDICT_REAL,
};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const PLATFORMS: &[&str] = &["Instagram", "X", "Facebook", "YouTube", "TikTok", "Any URL"];

fn intro_lines() -> Vec<Line<'static>> {
    let secondary = Style::default().fg(TEXT_SECONDARY);
    let muted = Style::default().fg(TEXT_MUTED);

    let mut chips = vec![Span::styled("  Works with: ", muted)];
    for (idx, platform) in PLATFORMS.iter().enumerate() {
        if idx > 0 {
            chips.push(Span::styled(" · ", muted));
        }
        chips.push(Span::styled(*platform, secondary));
    }

    vec![
        Line::from(Span::styled(
            "  Paste any link from Instagram, X, or any website.",
            secondary,
        )),
        Line::from(Span::styled(
            "  Buster runs forensic-grade AI analysis in seconds.",
            secondary,
        )),
        Line::from(chips),
        Line::from(""),
    ]
}

/// First screen row of the result region when the body is `width` columns
/// wide; scrolling here brings it into view.
pub fn result_anchor(width: u16) -> u16 {
    let rows = Paragraph::new(intro_lines())
        .wrap(Wrap { trim: false })
        .line_count(width);
    u16::try_from(rows).unwrap_or(u16::MAX)
}

/// Everything the body shows, top to bottom.
pub fn body_lines(state: &SubmissionState, spinner_tick: u8) -> Vec<Line<'static>> {
    let mut lines = intro_lines();
    lines.extend(result_lines(state, spinner_tick));
    lines
}

/// The body as drawn, wrapped and without its frame.
pub fn body_paragraph(state: &SubmissionState, spinner_tick: u8) -> Paragraph<'static> {
    Paragraph::new(body_lines(state, spinner_tick)).wrap(Wrap { trim: false })
}

/// Screen rows the body occupies once wrapped at `width` columns. Long URLs
/// and explanations take more than one row each.
pub fn body_rows(state: &SubmissionState, spinner_tick: u8, width: u16) -> usize {
    body_paragraph(state, spinner_tick).line_count(width)
}

pub fn result_lines(state: &SubmissionState, spinner_tick: u8) -> Vec<Line<'static>> {
    match state {
        SubmissionState::Idle => vec![Line::from(Span::styled(
            "  Paste a link above and press Enter to verify it.",
            Style::default().fg(TEXT_MUTED),
        ))],

        SubmissionState::Pending { url, .. } => {
            let spinner = SPINNER_FRAMES[(spinner_tick as usize) % SPINNER_FRAMES.len()];
            vec![Line::from(vec![
                Span::styled(format!("  {} ", spinner), Style::default().fg(ACCENT)),
                Span::styled("Analyzing ", Style::default().fg(FOREGROUND)),
                Span::styled(url.clone(), Style::default().fg(LINK)),
                Span::styled("...", Style::default().fg(FOREGROUND)),
            ])]
        }

        SubmissionState::Failure { message, .. } => vec![
            Line::from(Span::styled(
                "  Analysis Failed",
                Style::default().fg(VERDICT_FAKE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("  {}", message),
                Style::default().fg(ERROR_TEXT),
            )),
        ],

        SubmissionState::Success { url, report, .. } => report_lines(url, report),
    }
}

fn report_lines(url: &str, report: &AnalysisReport) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                "  VERIFICATION REPORT",
                Style::default().fg(TEXT_MUTED).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  ", Style::default()),
            Span::styled(url.to_string(), Style::default().fg(LINK)),
        ]),
        Line::from(""),
    ];

    match report {
        AnalysisReport::MediaScan(report) => lines.extend(media_scan_lines(report)),
        AnalysisReport::FactCheck(report) => lines.extend(fact_check_lines(report)),
    }
    lines
}

fn verdict_badge(label: &str) -> Span<'static> {
    let color = match Authenticity::classify(label) {
        Authenticity::Fake => VERDICT_FAKE,
        Authenticity::Real => VERDICT_REAL,
    };
    Span::styled(
        format!(" {} ", label),
        Style::default()
            .fg(FOREGROUND)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

fn media_scan_lines(report: &MediaScanReport) -> Vec<Line<'static>> {
    let total = report.results.len();
    let mut lines = Vec::new();
    for (idx, entry) in report.results.iter().enumerate() {
        lines.extend(entry_lines(idx + 1, total, entry));
    }
    lines
}

fn entry_lines(position: usize, total: usize, entry: &VerdictEntry) -> Vec<Line<'static>> {
    let muted = Style::default().fg(TEXT_MUTED);
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("  Image {}/{}  ", position, total), muted),
        verdict_badge(&entry.result),
        Span::styled("  ", muted),
        Span::styled(
            entry.confidence.to_string(),
            Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" confidence", muted),
    ])];

    if let Some(model) = &entry.model_used {
        lines.push(Line::from(vec![
            Span::styled("    Model: ", muted),
            Span::styled(model.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]));
    }
    if let Some(preview) = Preview::for_entry(entry) {
        lines.push(Line::from(vec![
            Span::styled("    Image: ", muted),
            Span::styled(preview.label(), Style::default().fg(TEXT_SECONDARY)),
        ]));
    }
    lines.push(Line::from(""));
    lines
}

fn fact_check_lines(report: &FactCheckReport) -> Vec<Line<'static>> {
    let muted = Style::default().fg(TEXT_MUTED);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("  ", muted),
            verdict_badge(&report.verdict),
            Span::styled("  ", muted),
            Span::styled(
                report.confidence.to_string(),
                Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" confidence", muted),
        ]),
        Line::from(""),
    ];

    for text in report.explanation.lines() {
        lines.push(Line::from(Span::styled(
            format!("  {}", text),
            Style::default().fg(TEXT_SECONDARY),
        )));
    }

    if !report.key_sources.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Sources",
            Style::default().fg(FOREGROUND).add_modifier(Modifier::BOLD),
        )));
        for source in &report.key_sources {
            lines.push(Line::from(Span::styled(
                format!("  {}", source),
                Style::default().fg(LINK),
            )));
        }
    }
    lines
}
