use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::app::{App, TaskEdit};
use crate::mirror::Mirror;
use crate::task::{Task, TaskStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Description,
    Status,
}

impl FormField {
    fn next(self) -> Self {
        match self {
            FormField::Title => FormField::Description,
            FormField::Description => FormField::Status,
            FormField::Status => FormField::Title,
        }
    }

    fn prev(self) -> Self {
        match self {
            FormField::Title => FormField::Status,
            FormField::Description => FormField::Title,
            FormField::Status => FormField::Description,
        }
    }
}

enum FormAction {
    Continue,
    Cancel,
    Submit,
}

/// Add/edit modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskForm {
    /// `None` when creating a task.
    pub editing: Option<String>,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub field: FormField,
    pub error: Option<String>,
}

impl TaskForm {
    fn create(status: TaskStatus) -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            status,
            field: FormField::Title,
            error: None,
        }
    }

    fn edit(task: &Task) -> Self {
        Self {
            editing: Some(task.id.clone()),
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status,
            field: FormField::Title,
            error: None,
        }
    }

    fn handle(&mut self, key: KeyEvent) -> FormAction {
        match key.code {
            KeyCode::Esc => return FormAction::Cancel,
            KeyCode::Enter => return FormAction::Submit,
            KeyCode::Tab | KeyCode::Down => self.field = self.field.next(),
            KeyCode::BackTab | KeyCode::Up => self.field = self.field.prev(),
            KeyCode::Left if self.field == FormField::Status => {
                self.status = self.status.prev().unwrap_or(TaskStatus::Done);
            }
            KeyCode::Right if self.field == FormField::Status => {
                self.status = self.status.next().unwrap_or(TaskStatus::Todo);
            }
            KeyCode::Backspace => {
                if let Some(text) = self.text_mut() {
                    text.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(text) = self.text_mut() {
                    text.push(c);
                }
            }
            _ => {}
        }
        FormAction::Continue
    }

    fn text_mut(&mut self) -> Option<&mut String> {
        match self.field {
            FormField::Title => Some(&mut self.title),
            FormField::Description => Some(&mut self.description),
            FormField::Status => None,
        }
    }
}

#[derive(Debug, Default)]
enum Mode {
    #[default]
    Board,
    Dashboard,
    Search,
    Form(TaskForm),
    ConfirmDelete {
        id: String,
        title: String,
    },
}

/// Selection, search text and modal state for the terminal board.
#[derive(Debug, Default)]
pub struct BoardView {
    pub selected_status: usize,
    pub selected_task: usize,
    pub query: String,
    pub message: Option<String>,
    mode: Mode,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_status(&self) -> TaskStatus {
        TaskStatus::ALL[self.selected_status.min(TaskStatus::ALL.len() - 1)]
    }

    pub fn form(&self) -> Option<&TaskForm> {
        match &self.mode {
            Mode::Form(form) => Some(form),
            _ => None,
        }
    }

    pub fn is_dashboard(&self) -> bool {
        matches!(self.mode, Mode::Dashboard)
    }

    /// Column contents after the search filter.
    fn visible<'a, M: Mirror>(&self, app: &'a App<M>, status: TaskStatus) -> Vec<&'a Task> {
        let needle = self.query.trim().to_lowercase();
        app.board()
            .list_by_status(status)
            .into_iter()
            .filter(|t| t.matches(&needle))
            .collect()
    }

    fn selected<'a, M: Mirror>(&self, app: &'a App<M>) -> Option<&'a Task> {
        self.visible(app, self.current_status())
            .get(self.selected_task)
            .copied()
    }

    fn clamp_selection<M: Mirror>(&mut self, app: &App<M>) {
        let len = self.visible(app, self.current_status()).len();
        self.selected_task = self.selected_task.min(len.saturating_sub(1));
    }

    fn select_task<M: Mirror>(&mut self, app: &App<M>, id: &str, status: TaskStatus) {
        self.selected_status = status.index();
        self.selected_task = self
            .visible(app, status)
            .iter()
            .position(|t| t.id == id)
            .unwrap_or(0);
    }

    pub fn handle_key<M: Mirror>(&mut self, app: &mut App<M>, key: KeyEvent) -> Flow {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Flow::Quit;
        }
        match std::mem::take(&mut self.mode) {
            Mode::Board => self.on_board_key(app, key),
            Mode::Dashboard => self.on_dashboard_key(key),
            Mode::Search => {
                self.on_search_key(app, key);
                Flow::Continue
            }
            Mode::Form(form) => {
                self.on_form_key(app, form, key);
                Flow::Continue
            }
            Mode::ConfirmDelete { id, title } => {
                self.on_confirm_key(app, id, title, key);
                Flow::Continue
            }
        }
    }

    fn on_board_key<M: Mirror>(&mut self, app: &mut App<M>, key: KeyEvent) -> Flow {
        self.message = None;
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') => return Flow::Quit,
            KeyCode::Tab => self.mode = Mode::Dashboard,
            KeyCode::Char('/') => self.mode = Mode::Search,
            KeyCode::Char('a') => self.mode = Mode::Form(TaskForm::create(self.current_status())),
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(task) = self.selected(app) {
                    self.mode = Mode::Form(TaskForm::edit(task));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(task) = self.selected(app) {
                    self.mode = Mode::ConfirmDelete {
                        id: task.id.clone(),
                        title: task.title.clone(),
                    };
                }
            }
            KeyCode::Left | KeyCode::Char('H') if shift => self.move_across(app, false),
            KeyCode::Right | KeyCode::Char('L') if shift => self.move_across(app, true),
            KeyCode::Up | KeyCode::Char('K') if shift => self.move_within(app, false),
            KeyCode::Down | KeyCode::Char('J') if shift => self.move_within(app, true),
            KeyCode::Left | KeyCode::Char('h') => {
                if self.selected_status > 0 {
                    self.selected_status -= 1;
                    self.clamp_selection(app);
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.selected_status < TaskStatus::ALL.len() - 1 {
                    self.selected_status += 1;
                    self.clamp_selection(app);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_task = self.selected_task.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_task += 1;
                self.clamp_selection(app);
            }
            _ => {}
        }
        Flow::Continue
    }

    fn on_dashboard_key(&mut self, key: KeyEvent) -> Flow {
        match key.code {
            KeyCode::Char('q') => Flow::Quit,
            KeyCode::Tab | KeyCode::Esc => Flow::Continue,
            _ => {
                self.mode = Mode::Dashboard;
                Flow::Continue
            }
        }
    }

    fn on_search_key<M: Mirror>(&mut self, app: &App<M>, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => return,
            KeyCode::Esc => self.query.clear(),
            KeyCode::Backspace => {
                self.query.pop();
                self.mode = Mode::Search;
            }
            KeyCode::Char(c) => {
                self.query.push(c);
                self.mode = Mode::Search;
            }
            _ => self.mode = Mode::Search,
        }
        self.selected_task = 0;
        self.clamp_selection(app);
    }

    fn on_form_key<M: Mirror>(&mut self, app: &mut App<M>, mut form: TaskForm, key: KeyEvent) {
        match form.handle(key) {
            FormAction::Continue => self.mode = Mode::Form(form),
            FormAction::Cancel => {}
            FormAction::Submit => {
                if form.title.trim().is_empty() {
                    form.error = Some("Title is required".to_string());
                    self.mode = Mode::Form(form);
                    return;
                }
                let result = match &form.editing {
                    Some(id) => app
                        .edit_task(
                            id,
                            TaskEdit {
                                title: Some(form.title.clone()),
                                description: Some(form.description.clone()),
                                status: Some(form.status),
                            },
                        )
                        .map(|()| id.clone()),
                    None => app.add_task(&form.title, &form.description, form.status),
                };
                match result {
                    Ok(id) => self.select_task(app, &id, form.status),
                    Err(err) => {
                        form.error = Some(err.to_string());
                        self.mode = Mode::Form(form);
                    }
                }
            }
        }
    }

    fn on_confirm_key<M: Mirror>(&mut self, app: &mut App<M>, id: String, title: String, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => {
                if let Err(err) = app.delete_task(&id) {
                    self.message = Some(err.to_string());
                } else {
                    self.message = Some(format!("Deleted \"{title}\""));
                }
                self.clamp_selection(app);
            }
            KeyCode::Char('n') | KeyCode::Esc => {}
            _ => self.mode = Mode::ConfirmDelete { id, title },
        }
    }

    /// Drop the selected card into the neighbouring column at the same row.
    fn move_across<M: Mirror>(&mut self, app: &mut App<M>, forward: bool) {
        let from = self.current_status();
        let target = if forward { from.next() } else { from.prev() };
        let Some(target) = target else { return };
        self.reorder_selected(app, target, self.selected_task);
    }

    fn move_within<M: Mirror>(&mut self, app: &mut App<M>, down: bool) {
        let index = if down {
            self.selected_task + 1
        } else {
            match self.selected_task.checked_sub(1) {
                Some(i) => i,
                None => return,
            }
        };
        if down && index >= self.visible(app, self.current_status()).len() {
            return;
        }
        self.reorder_selected(app, self.current_status(), index);
    }

    fn reorder_selected<M: Mirror>(&mut self, app: &mut App<M>, target: TaskStatus, index: usize) {
        if !self.query.trim().is_empty() {
            self.message = Some("Clear the search to move tasks".to_string());
            return;
        }
        let Some(id) = self.selected(app).map(|t| t.id.clone()) else {
            return;
        };
        match app.move_task(&id, target, index) {
            Ok(_) => self.select_task(app, &id, target),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn draw<M: Mirror>(&self, f: &mut Frame, app: &App<M>) {
        let [header, body, footer] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(f.area());

        self.draw_header(f, header);
        if self.is_dashboard() {
            draw_dashboard(f, body, app);
        } else {
            self.draw_columns(f, body, app);
        }
        self.draw_footer(f, footer);

        match &self.mode {
            Mode::Form(form) => draw_form(f, form),
            Mode::ConfirmDelete { title, .. } => draw_confirm(f, title),
            _ => {}
        }
    }

    fn draw_header(&self, f: &mut Frame, area: Rect) {
        let searching = matches!(self.mode, Mode::Search);
        let cursor = if searching { "_" } else { "" };
        let line = Line::from(vec![
            Span::styled("TaskCraft  ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("Search: {}{}", self.query, cursor)),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(if searching {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            });
        f.render_widget(Paragraph::new(line).block(block), area);
    }

    fn draw_columns<M: Mirror>(&self, f: &mut Frame, area: Rect, app: &App<M>) {
        let chunks = Layout::horizontal([Constraint::Percentage(25); 4]).split(area);

        for (i, status) in TaskStatus::ALL.iter().enumerate() {
            let tasks = self.visible(app, *status);
            let items: Vec<ListItem> = tasks
                .iter()
                .map(|t| {
                    let mut lines = vec![Line::from(Span::styled(
                        t.title.clone(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ))];
                    if !t.description.is_empty() {
                        lines.push(Line::from(Span::styled(
                            t.description.clone(),
                            Style::default().fg(Color::DarkGray),
                        )));
                    }
                    ListItem::new(lines)
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .title(format!("{} ({})", status.label(), tasks.len()))
                        .borders(Borders::ALL)
                        .border_style(if self.selected_status == i {
                            Style::default().fg(Color::Cyan)
                        } else {
                            Style::default()
                        }),
                )
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            let mut state = ListState::default();
            if self.selected_status == i && !tasks.is_empty() {
                state.select(Some(self.selected_task));
            }
            f.render_stateful_widget(list, chunks[i], &mut state);
        }
    }

    fn draw_footer(&self, f: &mut Frame, area: Rect) {
        let text = match (&self.message, &self.mode) {
            (Some(message), _) => message.clone(),
            (None, Mode::Dashboard) => "Tab: board  q: quit".to_string(),
            (None, Mode::Search) => "type to filter  Enter: keep  Esc: clear".to_string(),
            (None, Mode::Form(_)) => {
                "Tab: next field  ←/→: status  Enter: save  Esc: cancel".to_string()
            }
            (None, Mode::ConfirmDelete { .. }) => "y: delete  n: keep".to_string(),
            (None, Mode::Board) => {
                "a: add  e: edit  d: delete  Shift+arrows: move  /: search  Tab: dashboard  q: quit"
                    .to_string()
            }
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::Gray)),
            area,
        );
    }
}

fn draw_dashboard<M: Mirror>(f: &mut Frame, area: Rect, app: &App<M>) {
    let stats = app.stats();
    let [cards, progress, bottom] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(0),
    ])
    .areas(area);

    let card_areas = Layout::horizontal([Constraint::Ratio(1, 5); 5]).split(cards);
    let mut values = vec![("Total Tasks", stats.total)];
    values.extend(TaskStatus::ALL.iter().map(|s| (s.label(), stats.count(*s))));
    for (rect, (label, value)) in card_areas.iter().zip(values) {
        let card = Paragraph::new(Line::from(Span::styled(
            value.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().title(label).borders(Borders::ALL));
        f.render_widget(card, *rect);
    }

    let gauge = Gauge::default()
        .block(Block::default().title("Completed").borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(stats.completion_ratio());
    f.render_widget(gauge, progress);

    let [chart_area, log_area] =
        Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).areas(bottom);

    let bars = stats.bars();
    let chart = BarChart::default()
        .block(
            Block::default()
                .title("Task Status Overview")
                .borders(Borders::ALL),
        )
        .data(bars.as_slice())
        .bar_width(11)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Blue))
        .value_style(Style::default().fg(Color::White).bg(Color::Blue));
    f.render_widget(chart, chart_area);

    let items: Vec<ListItem> = app
        .activity()
        .recent(log_area.height.saturating_sub(2) as usize)
        .iter()
        .map(|a| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", a.timestamp.format("%b %d %H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(a.message.clone()),
            ]))
        })
        .collect();
    let log = List::new(items).block(Block::default().title("Activity Log").borders(Borders::ALL));
    f.render_widget(log, log_area);
}

fn draw_form(f: &mut Frame, form: &TaskForm) {
    let area = centered_rect(60, 14, f.area());
    f.render_widget(Clear, area);
    let title = if form.editing.is_some() {
        "Edit task"
    } else {
        "New task"
    };
    let outer = Block::default().title(title).borders(Borders::ALL);
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let [title_area, desc_area, status_area, error_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(4),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(inner);

    let field_block = |name: &'static str, field: FormField| {
        Block::default()
            .title(name)
            .borders(Borders::ALL)
            .border_style(if form.field == field {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            })
    };

    f.render_widget(
        Paragraph::new(form.title.as_str()).block(field_block("Title", FormField::Title)),
        title_area,
    );
    f.render_widget(
        Paragraph::new(form.description.as_str())
            .wrap(Wrap { trim: false })
            .block(field_block("Description", FormField::Description)),
        desc_area,
    );
    f.render_widget(
        Paragraph::new(format!("< {} >", form.status.label()))
            .block(field_block("Status", FormField::Status)),
        status_area,
    );
    if let Some(error) = &form.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            error_area,
        );
    }
}

fn draw_confirm(f: &mut Frame, title: &str) {
    let area = centered_rect(50, 5, f.area());
    f.render_widget(Clear, area);
    let text = Paragraph::new(format!("Delete \"{title}\"? (y/n)"))
        .wrap(Wrap { trim: true })
        .block(Block::default().title("Delete task").borders(Borders::ALL));
    f.render_widget(text, area);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn run_app<B: Backend, M: Mirror>(terminal: &mut Terminal<B>, app: &mut App<M>) -> io::Result<()> {
    let mut view = BoardView::new();
    loop {
        terminal.draw(|f| view.draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if view.handle_key(app, key) == Flow::Quit {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::ActivityLog;
    use crate::kanban_board::KanbanBoard;
    use crate::mirror::MemoryMirror;
    use ratatui::backend::TestBackend;

    fn app() -> App<MemoryMirror> {
        let blob = r#"[
            {"id":"1","title":"Alpha","description":"","status":"todo"},
            {"id":"2","title":"Beta","description":"login bug","status":"todo"},
            {"id":"3","title":"Gamma","description":"","status":"done"}
        ]"#;
        App::new(
            KanbanBoard::load(MemoryMirror::with_blob(blob)),
            ActivityLog::in_memory(10),
        )
    }

    fn press(view: &mut BoardView, app: &mut App<MemoryMirror>, code: KeyCode) -> Flow {
        view.handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn shift(view: &mut BoardView, app: &mut App<MemoryMirror>, code: KeyCode) {
        view.handle_key(app, KeyEvent::new(code, KeyModifiers::SHIFT));
    }

    fn type_text(view: &mut BoardView, app: &mut App<MemoryMirror>, text: &str) {
        for c in text.chars() {
            press(view, app, KeyCode::Char(c));
        }
    }

    fn column(app: &App<MemoryMirror>, status: TaskStatus) -> Vec<String> {
        app.board()
            .list_by_status(status)
            .into_iter()
            .map(|t| t.id.clone())
            .collect()
    }

    #[test]
    fn test_quit() {
        let mut app = app();
        let mut view = BoardView::new();
        assert_eq!(press(&mut view, &mut app, KeyCode::Char('q')), Flow::Quit);
    }

    #[test]
    fn test_add_through_form() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Right);
        press(&mut view, &mut app, KeyCode::Char('a'));
        assert_eq!(view.form().unwrap().status, TaskStatus::InProgress);
        type_text(&mut view, &mut app, "Delta");
        press(&mut view, &mut app, KeyCode::Tab);
        type_text(&mut view, &mut app, "notes");
        press(&mut view, &mut app, KeyCode::Enter);

        assert!(view.form().is_none());
        let added = app.board().list_by_status(TaskStatus::InProgress);
        assert_eq!(added.len(), 1);
        assert_eq!(added[0].title, "Delta");
        assert_eq!(added[0].description, "notes");
        assert_eq!(view.current_status(), TaskStatus::InProgress);
    }

    #[test]
    fn test_form_requires_title() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Char('a'));
        press(&mut view, &mut app, KeyCode::Enter);
        assert_eq!(
            view.form().unwrap().error.as_deref(),
            Some("Title is required")
        );
        assert_eq!(app.board().len(), 3);
        press(&mut view, &mut app, KeyCode::Esc);
        assert!(view.form().is_none());
    }

    #[test]
    fn test_edit_changes_status_from_form() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Char('e'));
        press(&mut view, &mut app, KeyCode::BackTab);
        press(&mut view, &mut app, KeyCode::Right);
        press(&mut view, &mut app, KeyCode::Enter);
        assert_eq!(app.board().get("1").unwrap().status, TaskStatus::InProgress);
        assert_eq!(view.current_status(), TaskStatus::InProgress);
    }

    #[test]
    fn test_delete_needs_confirmation() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Char('d'));
        press(&mut view, &mut app, KeyCode::Char('n'));
        assert_eq!(app.board().len(), 3);
        press(&mut view, &mut app, KeyCode::Char('d'));
        press(&mut view, &mut app, KeyCode::Char('y'));
        assert!(app.board().get("1").is_none());
    }

    #[test]
    fn test_shift_arrows_move_cards() {
        let mut app = app();
        let mut view = BoardView::new();
        shift(&mut view, &mut app, KeyCode::Right);
        assert_eq!(column(&app, TaskStatus::InProgress), vec!["1"]);
        assert_eq!(view.current_status(), TaskStatus::InProgress);

        press(&mut view, &mut app, KeyCode::Left);
        shift(&mut view, &mut app, KeyCode::Down);
        assert_eq!(column(&app, TaskStatus::Todo), vec!["2"]);
        shift(&mut view, &mut app, KeyCode::Up);
        assert_eq!(column(&app, TaskStatus::Todo), vec!["2"]);
    }

    #[test]
    fn test_shift_down_reorders_within_column() {
        let mut app = app();
        let mut view = BoardView::new();
        shift(&mut view, &mut app, KeyCode::Down);
        assert_eq!(column(&app, TaskStatus::Todo), vec!["2", "1"]);
        assert_eq!(view.selected_task, 1);
        shift(&mut view, &mut app, KeyCode::Up);
        assert_eq!(column(&app, TaskStatus::Todo), vec!["1", "2"]);
    }

    #[test]
    fn test_search_filters_and_blocks_moves() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Char('/'));
        type_text(&mut view, &mut app, "LOGIN");
        press(&mut view, &mut app, KeyCode::Enter);
        assert_eq!(view.query, "LOGIN");
        press(&mut view, &mut app, KeyCode::Char('e'));
        assert_eq!(view.form().unwrap().title, "Beta");
        press(&mut view, &mut app, KeyCode::Esc);

        shift(&mut view, &mut app, KeyCode::Right);
        assert_eq!(column(&app, TaskStatus::Todo), vec!["1", "2"]);
        assert!(view.message.is_some());

        press(&mut view, &mut app, KeyCode::Char('/'));
        press(&mut view, &mut app, KeyCode::Esc);
        assert!(view.query.is_empty());
    }

    #[test]
    fn test_dashboard_toggle() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Tab);
        assert!(view.is_dashboard());
        press(&mut view, &mut app, KeyCode::Char('x'));
        assert!(view.is_dashboard());
        press(&mut view, &mut app, KeyCode::Tab);
        assert!(!view.is_dashboard());
    }

    fn render(view: &BoardView, app: &App<MemoryMirror>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| view.draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_board_renders_columns() {
        let app = app();
        let view = BoardView::new();
        let screen = render(&view, &app);
        assert!(screen.contains("To Do (2)"));
        assert!(screen.contains("Need Review (0)"));
        assert!(screen.contains("Gamma"));
    }

    #[test]
    fn test_dashboard_renders_counts() {
        let mut app = app();
        let mut view = BoardView::new();
        press(&mut view, &mut app, KeyCode::Tab);
        let screen = render(&view, &app);
        assert!(screen.contains("Total Tasks"));
        assert!(screen.contains("Task Status Overview"));
        assert!(screen.contains("Activity Log"));
    }
}
