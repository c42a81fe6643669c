use crate::rows::COLUMNS;
use crate::ui::app::App;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

const LOGO: [&str; 6] = [
    " ██████  ███████ ██████  ███    ██  █████  ██",
    "██    ██ ██      ██   ██ ████   ██ ██   ██ ██",
    "██    ██ █████   ██████  ██ ██  ██ ███████ ██",
    "██ ▄▄ ██ ██      ██   ██ ██  ██ ██ ██   ██ ██",
    " ██████  ███████ ██   ██ ██   ████ ██   ██ ███████",
    "    ▀▀",
];

pub const HELP: &str = "↑/k up • ↓/j down • enter select • esc focus • q quit";

/// Table chrome: outer top/bottom border plus the header line and its separator.
const TABLE_CHROME: u16 = 4;

/// Terminal lines needed to draw the whole view for this app.
pub fn viewport_height(app: &App) -> u16 {
    let body = u16::try_from(app.height).unwrap_or(u16::MAX);
    (LOGO.len() as u16)
        .saturating_add(TABLE_CHROME)
        .saturating_add(body)
        .saturating_add(1)
}

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default_theme();
    let table_height = TABLE_CHROME.saturating_add(u16::try_from(app.height).unwrap_or(u16::MAX));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(LOGO.len() as u16), // Logo
            Constraint::Length(table_height),      // Table
            Constraint::Length(1),                 // Help
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_logo(frame, theme, chunks[0]);
    render_table(frame, app, theme, chunks[1]);
    render_help(frame, theme, chunks[2]);
}

fn render_logo(frame: &mut Frame, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = LOGO.iter().map(|l| Line::from(*l)).collect();
    let logo = Paragraph::new(lines).style(Style::default().fg(theme.logo));
    frame.render_widget(logo, area);
}

fn render_table(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let text_style = if app.is_focused() {
        Style::default().fg(theme.fg)
    } else {
        Style::default().fg(theme.fg_dim)
    };

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    let widths: Vec<Constraint> = COLUMNS.iter().map(|(_, w)| Constraint::Length(*w)).collect();

    let header = Table::new(Vec::<Row>::new(), widths.clone())
        .header(Row::new(COLUMNS.iter().map(|(title, _)| *title)).style(text_style))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(header, parts[0]);

    if app.rows.is_empty() {
        let empty = Paragraph::new("No functions in this project").style(text_style);
        frame.render_widget(empty, parts[1]);
        return;
    }

    let selected_style = Style::default()
        .fg(theme.selected_fg)
        .bg(theme.selected_bg)
        .add_modifier(Modifier::BOLD);

    let rows: Vec<Row> = app
        .visible_rows()
        .map(|(i, row)| {
            let style = if app.is_focused() && i == app.selected_index {
                selected_style
            } else {
                text_style
            };
            Row::new(row.cells()).style(style)
        })
        .collect();

    frame.render_widget(Table::new(rows, widths), parts[1]);
}

fn render_help(frame: &mut Frame, theme: &Theme, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::raw("  "),
        Span::styled(HELP, Style::default().fg(theme.fg_dim)),
    ]));
    frame.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rows::DisplayRow;
    use crate::ui::app::DEFAULT_HEIGHT;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn row(name: &str) -> DisplayRow {
        DisplayRow {
            name: name.to_string(),
            kind: "http".to_string(),
            providers: "aws".to_string(),
            regions: "US".to_string(),
            cpu: "256".to_string(),
            memory: "512".to_string(),
        }
    }

    fn draw(app: &App) -> Buffer {
        let backend = TestBackend::new(80, viewport_height(app));
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn line(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    fn text(buffer: &Buffer) -> String {
        (0..buffer.area.height)
            .map(|y| line(buffer, y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_viewport_height() {
        let app = App::new(vec![], DEFAULT_HEIGHT);
        assert_eq!(viewport_height(&app), 6 + 4 + 7 + 1);
    }

    #[test]
    fn test_renders_header_rows_and_help() {
        let app = App::new(vec![row("checkout-api"), row("billing")], DEFAULT_HEIGHT);
        let rendered = text(&draw(&app));

        assert!(rendered.contains("Function"));
        assert!(rendered.contains("Providers"));
        assert!(rendered.contains("checkout-api"));
        assert!(rendered.contains("billing"));
        assert!(rendered.contains(HELP));
    }

    #[test]
    fn test_cursor_row_highlighted_only_when_focused() {
        let theme = Theme::default_theme();
        let mut app = App::new(vec![row("checkout-api"), row("billing")], DEFAULT_HEIGHT);

        // Logo, top border, header, separator, then the first row.
        let first_row_y = LOGO.len() as u16 + 3;

        let buffer = draw(&app);
        assert_eq!(buffer[(1, first_row_y)].bg, theme.selected_bg);
        assert_ne!(buffer[(1, first_row_y + 1)].bg, theme.selected_bg);

        app.toggle_focus();
        let buffer = draw(&app);
        assert_ne!(buffer[(1, first_row_y)].bg, theme.selected_bg);
        assert_eq!(buffer[(1, first_row_y)].fg, theme.fg_dim);
    }

    #[test]
    fn test_only_window_rows_drawn() {
        let rows = (0..10).map(|i| row(&format!("function-{i:02}"))).collect();
        let mut app = App::new(rows, 3);
        app.selected_index = 6;
        let rendered = text(&draw(&app));

        assert!(!rendered.contains("function-03"));
        assert!(rendered.contains("function-04"));
        assert!(rendered.contains("function-06"));
        assert!(!rendered.contains("function-07"));
    }

    #[test]
    fn test_empty_table_message() {
        let app = App::new(vec![], DEFAULT_HEIGHT);
        assert!(text(&draw(&app)).contains("No functions in this project"));
    }
}
