//! Drawing: die face pips, result, history list and distribution bars.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use pipdice_core::{DistributionStats, Face, KeyValueStore, Outcome, Theme};

use crate::app::TuiApp;

/// Bars never render narrower than this share, so rare faces stay visible.
pub const MIN_BAR_PERCENT: u32 = 4;

/// Number of history entries listed.
const HISTORY_ROWS: usize = 12;

/// Pip layout for a face on a 3x3 grid, row-major.
pub fn pip_grid(face: Face) -> [[bool; 3]; 3] {
    const O: bool = false;
    const X: bool = true;
    match face.value() {
        1 => [[O, O, O], [O, X, O], [O, O, O]],
        2 => [[X, O, O], [O, O, O], [O, O, X]],
        3 => [[X, O, O], [O, X, O], [O, O, X]],
        4 => [[X, O, X], [O, O, O], [X, O, X]],
        5 => [[X, O, X], [O, X, O], [X, O, X]],
        _ => [[X, O, X], [X, O, X], [X, O, X]],
    }
}

/// Bar width in cells for `percentage` of `width`, with the display floor.
pub fn bar_cells(percentage: u32, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let shown = percentage.clamp(MIN_BAR_PERCENT, 100);
    let cells = u32::from(width) * shown / 100;
    cells.clamp(1, u32::from(width)) as u16
}

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Background.
    pub bg: Color,
    /// Regular text.
    pub fg: Color,
    /// Secondary text.
    pub muted: Color,
    /// Highlights: pips, bars, latest result.
    pub accent: Color,
    /// Die body while rolling.
    pub rolling: Color,
}

impl Palette {
    /// Palette for `theme`.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::White,
                fg: Color::Black,
                muted: Color::DarkGray,
                accent: Color::Blue,
                rolling: Color::Magenta,
            },
            Theme::Dark => Self {
                bg: Color::Black,
                fg: Color::White,
                muted: Color::Gray,
                accent: Color::Yellow,
                rolling: Color::Magenta,
            },
        }
    }
}

/// Draw the whole screen.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &TuiApp<S>) {
    let palette = Palette::for_theme(app.dice.theme());
    let base = Style::default().fg(palette.fg).bg(palette.bg);
    frame.render_widget(Block::default().style(base), frame.area());

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_top_bar(frame, app, palette, rows[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(0)])
        .split(columns[0]);

    draw_die(frame, app.dice.face(), app.dice.is_rolling(), palette, left[0]);
    draw_result(frame, app.dice.history().first(), app.dice.is_rolling(), palette, left[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(8)])
        .split(columns[1]);
    draw_history(frame, app.dice.history(), palette, right[0]);
    draw_distribution(frame, &app.dice.stats(), palette, right[1]);

    let status = Paragraph::new(app.status_hint())
        .style(Style::default().fg(palette.bg).bg(palette.fg));
    frame.render_widget(status, rows[2]);

    if app.show_help {
        draw_help_popup(frame, palette);
    }
}

fn draw_top_bar<S: KeyValueStore>(
    frame: &mut Frame,
    app: &TuiApp<S>,
    palette: Palette,
    area: Rect,
) {
    let line = Line::from(vec![
        Span::styled(" pipdice ", Style::default().fg(palette.accent).bold()),
        Span::styled(
            format!(" theme: {} ", app.dice.theme()),
            Style::default().fg(palette.muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_die(frame: &mut Frame, face: Face, rolling: bool, palette: Palette, area: Rect) {
    let border = if rolling { palette.rolling } else { palette.accent };
    let block = Block::default()
        .title(" Die ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let pip = Style::default().fg(palette.accent).bold();
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    for row in pip_grid(face) {
        let spans: Vec<Span<'static>> = row
            .iter()
            .map(|&on| Span::styled(if on { " \u{25cf} " } else { "   " }, pip))
            .collect();
        lines.push(Line::from(spans));
    }
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn draw_result(
    frame: &mut Frame,
    latest: Option<&Outcome>,
    rolling: bool,
    palette: Palette,
    area: Rect,
) {
    let block = Block::default().title(" Result ").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if rolling {
        Line::from(Span::styled("Rolling...", Style::default().fg(palette.rolling)))
    } else if let Some(outcome) = latest {
        Line::from(vec![
            Span::styled("You rolled ", Style::default().fg(palette.muted)),
            Span::styled(
                outcome.value().to_string(),
                Style::default().fg(palette.accent).bold(),
            ),
        ])
    } else {
        Line::from(Span::styled(
            "Press Enter or Space to roll!",
            Style::default().fg(palette.muted),
        ))
    };
    frame.render_widget(Paragraph::new(line).wrap(Wrap { trim: true }), inner);
}

fn draw_history(frame: &mut Frame, history: &[Outcome], palette: Palette, area: Rect) {
    let block = Block::default()
        .title(format!(" History ({}) ", history.len()))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if history.is_empty() {
        let empty = Paragraph::new(Span::styled("No rolls yet", Style::default().fg(palette.muted)));
        frame.render_widget(empty, inner);
        return;
    }

    let lines: Vec<Line<'static>> = history
        .iter()
        .take(HISTORY_ROWS)
        .enumerate()
        .map(|(i, outcome)| {
            let value_style = if i == 0 {
                Style::default().fg(palette.accent).bold()
            } else {
                Style::default().fg(palette.fg)
            };
            Line::from(vec![
                Span::styled(format!(" [{}] ", outcome.value()), value_style),
                Span::styled(
                    outcome.at().format("%H:%M:%S").to_string(),
                    Style::default().fg(palette.muted),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_distribution(frame: &mut Frame, stats: &DistributionStats, palette: Palette, area: Rect) {
    let block = Block::default()
        .title(distribution_title(stats))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // "6 " label plus " 100%" suffix.
    let bar_width = inner.width.saturating_sub(8);
    let lines: Vec<Line<'static>> = stats
        .faces()
        .iter()
        .map(|s| {
            let cells = if stats.total() == 0 {
                0
            } else {
                bar_cells(s.percentage, bar_width)
            };
            Line::from(vec![
                Span::styled(format!("{} ", s.face), Style::default().fg(palette.fg)),
                Span::styled(
                    "\u{2588}".repeat(usize::from(cells)),
                    Style::default().fg(palette.accent),
                ),
                Span::styled(
                    format!(" {:>3}%", s.percentage),
                    Style::default().fg(palette.muted),
                ),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), inner);
}

/// Panel title, with mean and most common face once there is history.
fn distribution_title(stats: &DistributionStats) -> String {
    match (stats.mean(), stats.most_common()) {
        (Some(mean), Some(top)) => format!(" Distribution  mean {mean:.2}  most {top} "),
        _ => " Distribution ".to_string(),
    }
}

fn draw_help_popup(frame: &mut Frame, palette: Palette) {
    let area = centered_rect(50, 50, frame.area());
    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("  Enter / Space / r   Roll the die"),
        Line::from("  t                   Toggle light/dark theme"),
        Line::from("  c                   Clear history"),
        Line::from("  ?                   Toggle this help"),
        Line::from("  q / Esc / Ctrl+C    Quit"),
    ];
    let popup = Paragraph::new(help_text)
        .style(Style::default().fg(palette.fg).bg(palette.bg))
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        );
    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

/// Create a centered rectangle as a percentage of the given area.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pipdice_core::{MemoryStore, compute_stats};
    use ratatui::backend::TestBackend;

    fn pips(face: u8) -> usize {
        pip_grid(Face::new(face).unwrap())
            .iter()
            .flatten()
            .filter(|&&on| on)
            .count()
    }

    fn screen_text(app: &TuiApp<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn pip_count_matches_face() {
        for face in 1..=6 {
            assert_eq!(pips(face), usize::from(face));
        }
    }

    #[test]
    fn bar_floor_applies_to_small_shares() {
        assert_eq!(bar_cells(0, 100), 4);
        assert_eq!(bar_cells(2, 100), 4);
        assert_eq!(bar_cells(4, 100), 4);
        assert_eq!(bar_cells(50, 100), 50);
    }

    #[test]
    fn bar_never_exceeds_width() {
        assert_eq!(bar_cells(100, 20), 20);
        assert_eq!(bar_cells(250, 20), 20);
        assert_eq!(bar_cells(10, 0), 0);
    }

    #[test]
    fn empty_screen_prompts_to_roll() {
        let app = TuiApp::new(MemoryStore::new(), Some(1));
        let text = screen_text(&app);
        assert!(text.contains("No rolls yet"));
        assert!(text.contains("Distribution"));
        assert!(text.contains("theme: light"));
    }

    #[test]
    fn distribution_title_summarises_history() {
        assert_eq!(distribution_title(&compute_stats(&[])), " Distribution ");

        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let history: Vec<Outcome> = [2u8, 4, 4, 6]
            .iter()
            .enumerate()
            .map(|(i, &v)| Outcome::new(Face::new(v).unwrap(), at, i as u64 + 1))
            .collect();
        assert_eq!(
            distribution_title(&compute_stats(&history)),
            " Distribution  mean 4.00  most 4 "
        );
    }

    #[test]
    fn help_popup_renders() {
        let mut app = TuiApp::new(MemoryStore::new(), Some(1));
        app.show_help = true;
        assert!(screen_text(&app).contains("Keyboard Shortcuts"));
    }
}
