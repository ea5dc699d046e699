//! Interactive terminal chart of the borrow and supply curves.

use crate::error::Result;
use crate::series::{format_rate, RateSeries, BORROW_LABEL, SUPPLY_LABEL, X_AXIS_TITLE, Y_AXIS_TITLE};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    symbols,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};
use rate_model::RateCurve;
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::debug;

/// Full-screen terminal viewer, restores the terminal on drop.
pub struct CurveViewer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl CurveViewer {
    /// Switch the terminal to raw mode on the alternate screen.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self { terminal })
    }

    /// Draw the chart until `q` or `Esc` is pressed.
    pub fn show(&mut self, curve: &RateCurve<f64>, title: &str) -> Result<()> {
        let series = RateSeries::from(curve);
        debug!(y_max = series.y_bounds[1], "Opening rate chart");

        loop {
            self.terminal.draw(|frame| {
                let area = frame.size();
                draw(frame, area, &series, title);
            })?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press
                        && matches!(key.code, KeyCode::Char('q') | KeyCode::Esc)
                    {
                        break;
                    }
                }
            }
        }

        Ok(())
    }
}

impl Drop for CurveViewer {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Draw the rate chart and a key hint into `area`.
pub fn draw(frame: &mut Frame, area: Rect, series: &RateSeries, title: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let datasets = vec![
        Dataset::default()
            .name(BORROW_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Red))
            .data(&series.borrow),
        Dataset::default()
            .name(SUPPLY_LABEL)
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Green))
            .data(&series.supply),
    ];

    let x_labels: Vec<Span> = (0..=4)
        .map(|i| Span::raw(format!("{}", i * 25)))
        .collect();

    let [y_min, y_max] = series.y_bounds;
    let y_labels: Vec<Span> = vec![
        Span::raw(format_rate(y_min)),
        Span::raw(format_rate((y_min + y_max) / 2.0)),
        Span::raw(format_rate(y_max)),
    ];

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", title))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title(X_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(series.x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Y_AXIS_TITLE)
                .style(Style::default().fg(Color::Gray))
                .bounds(series.y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, chunks[0]);

    let footer = Paragraph::new(" [q/Esc] Close and save ")
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[1]);
}
