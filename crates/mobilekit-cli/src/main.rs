use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use mobilekit_config::Config;
use mobilekit_engine::{LinkToken, ParsedText, Theme, parse_links};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    path::PathBuf,
    process,
};

/// Previews a text file the way the text view widget shows it: links
/// reduced to their labels and styled, with their targets out of band.
struct App {
    path: PathBuf,
    theme: Theme,
    lines: Vec<ParsedText>,
    /// Every link as `(line, index within line)`, in reading order.
    links: Vec<(usize, usize)>,
    selected: Option<usize>,
}

impl App {
    fn new(path: PathBuf, content: &str, theme: Theme) -> Self {
        let lines: Vec<ParsedText> = content.lines().map(parse_links).collect();
        let links: Vec<(usize, usize)> = lines
            .iter()
            .enumerate()
            .flat_map(|(line, parsed)| (0..parsed.links.len()).map(move |i| (line, i)))
            .collect();
        let selected = if links.is_empty() { None } else { Some(0) };

        log::info!(
            "Parsed {} lines with {} links from {}",
            lines.len(),
            links.len(),
            path.display()
        );

        Self {
            path,
            theme,
            lines,
            links,
            selected,
        }
    }

    fn next_link(&mut self) {
        if self.links.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(i) => (i + 1) % self.links.len(),
            None => 0,
        };
        self.selected = Some(i);
    }

    fn previous_link(&mut self) {
        if self.links.is_empty() {
            return;
        }
        let i = match self.selected {
            Some(0) | None => self.links.len() - 1,
            Some(i) => i - 1,
        };
        self.selected = Some(i);
    }

    fn selected_position(&self) -> Option<(usize, usize)> {
        self.selected.and_then(|i| self.links.get(i).copied())
    }

    fn selected_link(&self) -> Option<&LinkToken> {
        let (line, index) = self.selected_position()?;
        self.lines.get(line)?.links.get(index)
    }

    fn link_style(&self, selected: bool) -> Style {
        let link = self.theme.link;
        let style = Style::default()
            .fg(Color::Rgb(link.red(), link.green(), link.blue()))
            .add_modifier(Modifier::UNDERLINED);
        if selected {
            style.add_modifier(Modifier::REVERSED)
        } else {
            style
        }
    }

    /// Splits one parsed line into plain and link-styled spans.
    fn render_line(&self, line_index: usize) -> Line<'_> {
        let Some(parsed) = self.lines.get(line_index) else {
            return Line::default();
        };
        let text = parsed.display_text.as_str();
        let selected = self.selected_position();

        let mut spans = Vec::new();
        let mut copied = 0;
        for (i, link) in parsed.links.iter().enumerate() {
            let label = link.label_span;
            if let Some(before) = text.get(copied..label.start)
                && !before.is_empty()
            {
                spans.push(Span::raw(before));
            }
            if let Some(shown) = label.slice(text) {
                let is_selected = selected == Some((line_index, i));
                spans.push(Span::styled(shown, self.link_style(is_selected)));
            }
            copied = label.end;
        }
        if let Some(rest) = text.get(copied..)
            && !rest.is_empty()
        {
            spans.push(Span::raw(rest));
        }

        Line::from(spans)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <text-file>", args[0]);
        process::exit(1);
    }
    let path = PathBuf::from(&args[1]);

    let theme = match Config::load() {
        Ok(Some(config)) => config.theme(),
        Ok(None) => Theme::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut app = App::new(path, &content, theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => app.next_link(),
                KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => app.previous_link(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3), Constraint::Length(1)])
        .split(f.area());

    let content: Vec<Line> = (0..app.lines.len()).map(|i| app.render_line(i)).collect();
    let text = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.path.display().to_string()),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(text, chunks[0]);

    let target_line = match app.selected_link() {
        Some(link) if link.target.is_empty() => Line::from(vec![
            Span::raw(format!("{} → ", link.label)),
            Span::styled("(no target)", Style::default().add_modifier(Modifier::ITALIC)),
        ]),
        Some(link) => Line::from(format!("{} → {}", link.label, link.target)),
        None => Line::from("No links in this file"),
    };
    let target = Paragraph::new(target_line)
        .block(Block::default().borders(Borders::ALL).title("Link target"));
    f.render_widget(target, chunks[1]);

    let help = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab/↓/j: Next link | "),
        Span::raw("Shift-Tab/↑/k: Previous link"),
    ]);
    f.render_widget(Paragraph::new(help), chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app(content: &str) -> App {
        App::new(PathBuf::from("test.txt"), content, Theme::default())
    }

    #[test]
    fn collects_links_across_lines() {
        let app = app("one [a](1)\nnone here\n[b](2) and [c](3)");
        assert_eq!(app.links, vec![(0, 0), (2, 0), (2, 1)]);
        assert_eq!(app.selected, Some(0));
        assert_eq!(app.selected_link().map(|l| l.target.as_str()), Some("1"));
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut app = app("[a](1) [b](2)");
        app.next_link();
        assert_eq!(app.selected_link().map(|l| l.label.as_str()), Some("b"));
        app.next_link();
        assert_eq!(app.selected_link().map(|l| l.label.as_str()), Some("a"));
        app.previous_link();
        assert_eq!(app.selected_link().map(|l| l.label.as_str()), Some("b"));
    }

    #[test]
    fn no_links_means_no_selection() {
        let mut app = app("plain [text] only");
        app.next_link();
        app.previous_link();
        assert_eq!(app.selected, None);
        assert!(app.selected_link().is_none());
    }

    #[test]
    fn render_line_styles_only_labels() {
        let app = app("see [docs](d) now");
        let line = app.render_line(0);
        let parts: Vec<_> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["see ", "docs", " now"]);

        assert!(line.spans[1].style.add_modifier.contains(Modifier::UNDERLINED));
        assert!(line.spans[1].style.add_modifier.contains(Modifier::REVERSED));
        assert!(!line.spans[0].style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn link_colour_comes_from_theme() {
        let theme = Theme {
            link: mobilekit_engine::Color::from_hex(0x026DCE),
            ..Theme::default()
        };
        let app = App::new(PathBuf::from("t"), "[x](y)", theme);
        let line = app.render_line(0);
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(0x02, 0x6D, 0xCE)));
    }
}
