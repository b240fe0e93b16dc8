use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{
    io,
    time::{Duration, Instant},
};
use tui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Span, Spans},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};

use crate::api::ReviewRepository;
use crate::config::Role;
use crate::error::Error;
use crate::moderation::{available_actions, AdminAction, OwnerAction, TenantAction};
use crate::review::{Review, ReviewDraft, ReviewStatus, BODY_MAX_CHARS, TITLE_MAX_CHARS};
use crate::workflow::{CreateForm, Outcome, ReviewWorkflow};

#[derive(Debug, Clone, PartialEq)]
enum AppState {
    Browsing,
    EditingForm,
    /// Owner is composing a public reply to the review with this id.
    WritingReply(String),
    Confirming(PendingAction),
}

#[derive(Debug, Clone, PartialEq)]
enum PendingAction {
    SaveEdit,
    Delete(String),
    SendReply(String),
}

#[derive(Debug, Clone, PartialEq)]
enum FormMode {
    Create,
    /// Editing the review with this id.
    Edit(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormField {
    Stay,
    Rating,
    Title,
    Body,
}

/// Create/edit form buffers. The stay selector indexes into the tenant's
/// write options and fills both propertyId and rentalAgreementId at once.
#[derive(Debug, Clone)]
struct ReviewForm {
    mode: FormMode,
    option_index: usize,
    rating: i32,
    title: String,
    body: String,
    focus: FormField,
    cursor: usize,
}

impl ReviewForm {
    fn create() -> Self {
        Self {
            mode: FormMode::Create,
            option_index: 0,
            rating: 5,
            title: String::new(),
            body: String::new(),
            focus: FormField::Stay,
            cursor: 0,
        }
    }

    fn edit(review: &Review) -> Self {
        Self {
            mode: FormMode::Edit(review.id.clone()),
            option_index: 0,
            rating: review.rating.clamp(1, 5),
            title: review.title.clone(),
            body: review.body.clone(),
            focus: FormField::Rating,
            cursor: 0,
        }
    }

    fn draft(&self) -> ReviewDraft {
        ReviewDraft {
            rating: self.rating,
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }

    fn fields(&self) -> &'static [FormField] {
        match self.mode {
            FormMode::Create => &[
                FormField::Stay,
                FormField::Rating,
                FormField::Title,
                FormField::Body,
            ],
            FormMode::Edit(_) => &[FormField::Rating, FormField::Title, FormField::Body],
        }
    }

    fn focus_next(&mut self) {
        let fields = self.fields();
        let at = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(at + 1) % fields.len()];
        self.reset_cursor();
    }

    fn focus_prev(&mut self) {
        let fields = self.fields();
        let at = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[(at + fields.len() - 1) % fields.len()];
        self.reset_cursor();
    }

    fn reset_cursor(&mut self) {
        self.cursor = match self.focus {
            FormField::Title => self.title.chars().count(),
            FormField::Body => self.body.chars().count(),
            _ => 0,
        };
    }
}

pub struct ReviewUI<R: ReviewRepository> {
    workflow: ReviewWorkflow<R>,
    state: AppState,
    form: ReviewForm,
    reply_text: String,
    reply_cursor: usize,
    selected: Option<usize>,
    list_state: ListState,
    loading: bool,
    message: Option<String>,
}

impl<R: ReviewRepository> ReviewUI<R> {
    pub fn new(workflow: ReviewWorkflow<R>) -> Self {
        Self {
            workflow,
            state: AppState::Browsing,
            form: ReviewForm::create(),
            reply_text: String::new(),
            reply_cursor: 0,
            selected: None,
            list_state: ListState::default(),
            loading: false,
            message: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.run_app(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;

        result
    }

    async fn run_app<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        self.refresh().await;

        let mut last_tick = Instant::now();
        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|f| self.ui(f))?;

            let timeout = tick_rate
                .checked_sub(last_tick.elapsed())
                .unwrap_or_else(|| Duration::from_secs(0));

            if crossterm::event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if self.handle_input(key).await? {
                        break;
                    }
                }
            }

            if last_tick.elapsed() >= tick_rate {
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    async fn refresh(&mut self) {
        self.loading = true;
        self.workflow.load().await;
        self.loading = false;
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.workflow.reviews().len();
        self.selected = if len == 0 {
            None
        } else {
            Some(self.selected.unwrap_or(0).min(len - 1))
        };
        self.list_state.select(self.selected);
    }

    fn selected_review(&self) -> Option<&Review> {
        self.selected.and_then(|i| self.workflow.reviews().get(i))
    }

    fn after_mutation(&mut self, result: Result<Outcome, Error>, success: &str) {
        match result {
            Ok(Outcome::Completed) => {
                self.message = Some(success.to_string());
                self.clamp_selection();
            }
            Ok(Outcome::Skipped) => {}
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Returns `true` when the app should quit.
    async fn handle_input(&mut self, key: KeyEvent) -> Result<bool> {
        match self.state.clone() {
            AppState::Browsing => return self.handle_browsing(key).await,
            AppState::EditingForm => self.handle_form(key).await,
            AppState::WritingReply(review_id) => self.handle_reply(key, review_id),
            AppState::Confirming(pending) => self.handle_confirmation(key, pending).await,
        }
        Ok(false)
    }

    async fn handle_browsing(&mut self, key: KeyEvent) -> Result<bool> {
        match key.code {
            KeyCode::Char('q') => return Ok(true),
            KeyCode::Char('r') => self.refresh().await,
            KeyCode::Char('1') => self.switch_role(Role::Tenant).await,
            KeyCode::Char('2') => self.switch_role(Role::Owner).await,
            KeyCode::Char('3') => self.switch_role(Role::Admin).await,
            KeyCode::Up => {
                if let Some(selected) = self.selected {
                    if selected > 0 {
                        self.selected = Some(selected - 1);
                        self.list_state.select(self.selected);
                    }
                }
            }
            KeyCode::Down => {
                if let Some(selected) = self.selected {
                    if selected + 1 < self.workflow.reviews().len() {
                        self.selected = Some(selected + 1);
                        self.list_state.select(self.selected);
                    }
                }
            }
            _ => {
                if !self.workflow.is_acting() && !self.loading {
                    self.handle_role_action(key).await;
                }
            }
        }
        Ok(false)
    }

    async fn handle_role_action(&mut self, key: KeyEvent) {
        match self.workflow.role() {
            Role::Tenant => match key.code {
                KeyCode::Char('n') => {
                    if self.workflow.write_options().is_empty() {
                        self.message =
                            Some("No eligible verified stays available right now".to_string());
                    } else {
                        self.form = ReviewForm::create();
                        self.state = AppState::EditingForm;
                    }
                }
                KeyCode::Char('e') => {
                    if let Some(review) = self.selected_review().cloned() {
                        if TenantAction::Edit.permitted(review.status) {
                            self.form = ReviewForm::edit(&review);
                            self.state = AppState::EditingForm;
                        }
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(review) = self.selected_review().cloned() {
                        if TenantAction::Delete.permitted(review.status) {
                            self.state = AppState::Confirming(PendingAction::Delete(review.id));
                        }
                    }
                }
                _ => {}
            },
            Role::Owner => match key.code {
                KeyCode::Char('h') => {
                    if let Some(review) = self.selected_review().cloned() {
                        if let Some(action) = OwnerAction::toggle_for(review.status) {
                            let success = match action {
                                OwnerAction::Hide => "Review hidden",
                                OwnerAction::Unhide => "Review is visible again",
                            };
                            let result = self.workflow.owner_act(&review.id, action).await;
                            self.after_mutation(result, success);
                        }
                    }
                }
                KeyCode::Char('p') => {
                    if let Some(review) = self.selected_review().cloned() {
                        self.reply_text.clear();
                        self.reply_cursor = 0;
                        self.state = AppState::WritingReply(review.id);
                    }
                }
                _ => {}
            },
            Role::Admin => {
                let action = match key.code {
                    KeyCode::Char('h') => Some(AdminAction::Hide),
                    KeyCode::Char('u') => Some(AdminAction::Unhide),
                    KeyCode::Char('x') => Some(AdminAction::Remove),
                    KeyCode::Char('s') => Some(AdminAction::Restore),
                    _ => None,
                };
                if let Some(action) = action {
                    if let Some(review) = self.selected_review().cloned() {
                        if action.permitted(review.status) {
                            let result = self.workflow.admin_act(&review.id, action).await;
                            self.after_mutation(result, "Action completed");
                        }
                    }
                }
            }
        }
    }

    async fn switch_role(&mut self, role: Role) {
        if role == self.workflow.role() {
            return;
        }
        self.workflow.switch_role(role);
        self.selected = None;
        self.list_state.select(None);
        self.refresh().await;
    }

    async fn handle_form(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.state = AppState::Browsing;
            }
            KeyCode::Tab => self.form.focus_next(),
            KeyCode::BackTab => self.form.focus_prev(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                match self.form.mode.clone() {
                    FormMode::Create => {
                        let form = self.build_create_form();
                        let result = self.workflow.create_review(&form).await;
                        if matches!(result, Ok(Outcome::Completed)) {
                            self.state = AppState::Browsing;
                        }
                        self.after_mutation(result, "Review created");
                    }
                    // Edits need an explicit confirmation step.
                    FormMode::Edit(_) => {
                        self.state = AppState::Confirming(PendingAction::SaveEdit);
                    }
                }
            }
            _ => self.handle_form_field(key),
        }
    }

    fn handle_form_field(&mut self, key: KeyEvent) {
        match self.form.focus {
            FormField::Stay => match key.code {
                KeyCode::Left => {
                    let len = self.workflow.write_options().len();
                    if len > 0 {
                        self.form.option_index =
                            (self.form.option_index + len - 1) % len;
                    }
                }
                KeyCode::Right => {
                    let len = self.workflow.write_options().len();
                    if len > 0 {
                        self.form.option_index = (self.form.option_index + 1) % len;
                    }
                }
                _ => {}
            },
            FormField::Rating => match key.code {
                KeyCode::Left => self.form.rating = (self.form.rating - 1).max(1),
                KeyCode::Right => self.form.rating = (self.form.rating + 1).min(5),
                KeyCode::Char(c @ '1'..='5') => {
                    self.form.rating = c.to_digit(10).unwrap_or(5) as i32;
                }
                _ => {}
            },
            FormField::Title => {
                if key.code == KeyCode::Enter {
                    self.form.focus = FormField::Body;
                    self.form.reset_cursor();
                } else {
                    edit_text(
                        &mut self.form.title,
                        &mut self.form.cursor,
                        key,
                        Some(TITLE_MAX_CHARS),
                        false,
                    );
                }
            }
            FormField::Body => {
                edit_text(
                    &mut self.form.body,
                    &mut self.form.cursor,
                    key,
                    Some(BODY_MAX_CHARS),
                    true,
                );
            }
        }
    }

    fn build_create_form(&self) -> CreateForm {
        let option = self.workflow.write_options().get(self.form.option_index);
        CreateForm {
            property_id: option.map(|o| o.property_id.clone()).unwrap_or_default(),
            rental_agreement_id: option
                .map(|o| o.rental_agreement_id.clone())
                .unwrap_or_default(),
            draft: self.form.draft(),
        }
    }

    fn handle_reply(&mut self, key: KeyEvent, review_id: String) {
        match key.code {
            KeyCode::Esc => {
                self.state = AppState::Browsing;
                self.reply_text.clear();
                self.reply_cursor = 0;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if !self.reply_text.trim().is_empty() {
                    self.state = AppState::Confirming(PendingAction::SendReply(review_id));
                }
            }
            _ => {
                edit_text(&mut self.reply_text, &mut self.reply_cursor, key, None, true);
            }
        }
    }

    async fn handle_confirmation(&mut self, key: KeyEvent, pending: PendingAction) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                match pending {
                    PendingAction::SaveEdit => {
                        if let FormMode::Edit(review_id) = self.form.mode.clone() {
                            let draft = self.form.draft();
                            let result = self.workflow.edit_review(&review_id, &draft).await;
                            if matches!(result, Err(Error::Validation(_))) {
                                // Let the tenant fix the field instead of
                                // dropping their input.
                                self.state = AppState::EditingForm;
                            } else {
                                self.state = AppState::Browsing;
                            }
                            self.after_mutation(result, "Review updated");
                        } else {
                            self.state = AppState::Browsing;
                        }
                    }
                    PendingAction::Delete(review_id) => {
                        let result = self.workflow.delete_review(&review_id).await;
                        self.state = AppState::Browsing;
                        self.after_mutation(result, "Review removed");
                    }
                    PendingAction::SendReply(review_id) => {
                        let text = self.reply_text.clone();
                        let result = self.workflow.owner_reply(&review_id, &text).await;
                        self.state = AppState::Browsing;
                        self.reply_text.clear();
                        self.reply_cursor = 0;
                        self.after_mutation(result, "Reply sent");
                    }
                }
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                self.state = match pending {
                    PendingAction::SaveEdit => AppState::EditingForm,
                    PendingAction::Delete(_) => AppState::Browsing,
                    PendingAction::SendReply(review_id) => AppState::WritingReply(review_id),
                };
            }
            _ => {}
        }
    }

    fn ui<B: Backend>(&mut self, f: &mut Frame<B>) {
        let size = f.size();

        match self.state.clone() {
            AppState::Browsing => self.draw_browse_view(f, size),
            AppState::EditingForm => self.draw_form_view(f, size),
            AppState::WritingReply(review_id) => self.draw_reply_view(f, size, &review_id),
            AppState::Confirming(pending) => {
                self.draw_browse_view(f, size);
                self.draw_confirmation_view(f, size, &pending);
            }
        }

        // Transient message popup, cleared after one frame.
        if let Some(message) = self.message.take() {
            let popup_area = centered_rect(60, 20, size);
            f.render_widget(Clear, popup_area);
            let paragraph = Paragraph::new(message)
                .block(Block::default().borders(Borders::ALL).title("Message"))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, popup_area);
        }
    }

    fn draw_browse_view<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let banner_height = if self.workflow.load_error().is_some() {
            3
        } else {
            0
        };
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(banner_height),
                Constraint::Min(10),
                Constraint::Length(8),
            ])
            .split(area);

        if let Some(error) = self.workflow.load_error() {
            let banner = Paragraph::new(error)
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL).title("Load failed"));
            f.render_widget(banner, main_chunks[0]);
        }

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[1]);

        let role = self.workflow.role();
        let items: Vec<ListItem> = self
            .workflow
            .reviews()
            .iter()
            .map(|review| {
                let flag = if role == Role::Admin && review.reports_count > 0 {
                    "⚠ "
                } else {
                    ""
                };
                let content = format!(
                    "{}[{}] {} {} — {}",
                    flag,
                    review.status.as_str(),
                    "⭐".repeat(review.rating.clamp(0, 5) as usize),
                    review.title,
                    self.workflow.property_name(&review.property_id),
                );
                ListItem::new(content).style(Style::default().fg(status_color(review.status)))
            })
            .collect();

        let title = if self.loading {
            format!("Reviews — {} (loading...)", role)
        } else {
            format!(
                "Reviews — {} as {}",
                role,
                self.workflow.session().user_id()
            )
        };
        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol(">> ");

        f.render_stateful_widget(list, content_chunks[0], &mut self.list_state);

        if let Some(review) = self.selected_review() {
            let mut text = vec![
                Spans::from(vec![Span::styled(
                    review.title.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )]),
                Spans::from(vec![Span::raw(format!(
                    "{} • {}",
                    self.workflow.property_name(&review.property_id),
                    review.created_at.format("%Y-%m-%d")
                ))]),
                Spans::from(vec![
                    Span::styled(
                        format!("Rating: {}", "⭐".repeat(review.rating.clamp(0, 5) as usize)),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw("  "),
                    Span::styled(
                        review.status.as_str(),
                        Style::default().fg(status_color(review.status)),
                    ),
                ]),
            ];

            if role == Role::Admin {
                text.push(Spans::from(vec![Span::raw(format!(
                    "Reports: {}",
                    review.reports_count
                ))]));
            }

            if !review.tags.is_empty() {
                text.push(Spans::from(vec![Span::raw(format!(
                    "Tags: {}",
                    review.tags.join(", ")
                ))]));
            }

            text.push(Spans::from(vec![Span::raw("")]));
            text.push(Spans::from(vec![Span::raw(review.body.clone())]));
            text.push(Spans::from(vec![Span::raw("")]));

            let actions = available_actions(role, review.status);
            let actions_line = if actions.is_empty() {
                "No actions available for this review".to_string()
            } else {
                format!(
                    "Actions: {}",
                    actions
                        .iter()
                        .map(|a| a.label())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            };
            text.push(Spans::from(vec![Span::styled(
                actions_line,
                Style::default().fg(Color::Yellow),
            )]));

            let detail = Paragraph::new(text)
                .block(Block::default().borders(Borders::ALL).title("Review"))
                .wrap(Wrap { trim: true });
            f.render_widget(detail, content_chunks[1]);
        } else {
            let empty = if self.loading {
                "Loading reviews..."
            } else {
                "No reviews found."
            };
            let placeholder = Paragraph::new(empty)
                .block(Block::default().borders(Borders::ALL).title("Review"))
                .style(Style::default().fg(Color::Gray));
            f.render_widget(placeholder, content_chunks[1]);
        }

        let role_help = match role {
            Role::Tenant => "'n' - Write review  'e' - Edit  'd' - Delete",
            Role::Owner => "'h' - Hide/unhide  'p' - Reply",
            Role::Admin => "'h' - Hide  'u' - Unhide  'x' - Remove  's' - Restore",
        };
        let help_text = vec![
            Spans::from("Controls:"),
            Spans::from("↑/↓ - Navigate reviews"),
            Spans::from(role_help),
            Spans::from("'1'/'2'/'3' - Act as tenant/owner/admin"),
            Spans::from("'r' - Refresh"),
            Spans::from("'q' - Quit"),
        ];
        let help = Paragraph::new(help_text)
            .block(Block::default().borders(Borders::ALL).title("Help"))
            .style(Style::default().fg(Color::Gray))
            .wrap(Wrap { trim: true });
        f.render_widget(help, main_chunks[2]);
    }

    fn draw_form_view<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect) {
        let is_create = self.form.mode == FormMode::Create;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // stay selector (create) or header
                Constraint::Length(3), // rating
                Constraint::Length(3), // title
                Constraint::Min(6),    // body
                Constraint::Length(3), // hints
            ])
            .split(area);

        let focus_style = Style::default().fg(Color::Yellow);
        let block = |title: String, focused: bool| {
            let block = Block::default().borders(Borders::ALL).title(title);
            if focused {
                block.border_style(focus_style)
            } else {
                block
            }
        };

        if is_create {
            let stay = self
                .workflow
                .write_options()
                .get(self.form.option_index)
                .map(|option| {
                    format!(
                        "{} — {} ({})",
                        option.property_label(),
                        option.rental_agreement_id,
                        option.agreement_status
                    )
                })
                .unwrap_or_else(|| "No eligible verified stays".to_string());
            let selector = Paragraph::new(format!("◀ {} ▶", stay)).block(block(
                "Verified stay".to_string(),
                self.form.focus == FormField::Stay,
            ));
            f.render_widget(selector, chunks[0]);
        } else {
            let header = Paragraph::new("Editing your review")
                .block(Block::default().borders(Borders::ALL))
                .style(Style::default().add_modifier(Modifier::BOLD));
            f.render_widget(header, chunks[0]);
        }

        let rating = Paragraph::new(format!(
            "{} ({}/5)",
            "⭐".repeat(self.form.rating.clamp(0, 5) as usize),
            self.form.rating
        ))
        .block(block(
            "Rating".to_string(),
            self.form.focus == FormField::Rating,
        ));
        f.render_widget(rating, chunks[1]);

        let title_focused = self.form.focus == FormField::Title;
        let title_text = if title_focused {
            text_with_cursor(&self.form.title, self.form.cursor)
        } else {
            self.form.title.clone()
        };
        let title = Paragraph::new(title_text).block(block(
            format!(
                "Title ({}/{})",
                self.form.title.chars().count(),
                TITLE_MAX_CHARS
            ),
            title_focused,
        ));
        f.render_widget(title, chunks[2]);

        let body_focused = self.form.focus == FormField::Body;
        let body_text = if body_focused {
            text_with_cursor(&self.form.body, self.form.cursor)
        } else {
            self.form.body.clone()
        };
        let body = Paragraph::new(body_text)
            .block(block(
                format!(
                    "Review ({}/{})",
                    self.form.body.chars().count(),
                    BODY_MAX_CHARS
                ),
                body_focused,
            ))
            .wrap(Wrap { trim: false });
        f.render_widget(body, chunks[3]);

        let hint = if is_create {
            "Tab - Next field  ◀/▶ - Change stay/rating  Ctrl+S - Submit  Esc - Cancel"
        } else {
            "Tab - Next field  ◀/▶ - Change rating  Ctrl+S - Save (asks to confirm)  Esc - Cancel"
        };
        let hints = Paragraph::new(hint)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(hints, chunks[4]);
    }

    fn draw_reply_view<B: Backend>(&mut self, f: &mut Frame<B>, area: Rect, review_id: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(8), Constraint::Min(8)])
            .split(area);

        let review = self
            .workflow
            .reviews()
            .iter()
            .find(|review| review.id == review_id);
        if let Some(review) = review {
            let review_text = vec![
                Spans::from(vec![Span::styled(
                    format!(
                        "Replying to: {} {}",
                        "⭐".repeat(review.rating.clamp(0, 5) as usize),
                        review.title
                    ),
                    Style::default().add_modifier(Modifier::BOLD),
                )]),
                Spans::from(vec![Span::raw("")]),
                Spans::from(vec![Span::raw(review.body.clone())]),
            ];
            let paragraph = Paragraph::new(review_text)
                .block(Block::default().borders(Borders::ALL).title("Review"))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, chunks[0]);
        }

        let input = Paragraph::new(text_with_cursor(&self.reply_text, self.reply_cursor))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Write Reply (Ctrl+S to submit, Esc to cancel)"),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(input, chunks[1]);
    }

    fn draw_confirmation_view<B: Backend>(
        &mut self,
        f: &mut Frame<B>,
        area: Rect,
        pending: &PendingAction,
    ) {
        let popup_area = centered_rect(70, 50, area);
        f.render_widget(Clear, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(4),
                Constraint::Length(3),
            ])
            .split(popup_area);

        let (question, preview) = match pending {
            PendingAction::SaveEdit => (
                "Are you sure you want to update this review? (y/n)",
                format!("{}\n\n{}", self.form.title, self.form.body),
            ),
            PendingAction::Delete(review_id) => {
                let title = self
                    .workflow
                    .reviews()
                    .iter()
                    .find(|review| &review.id == review_id)
                    .map(|review| review.title.clone())
                    .unwrap_or_default();
                (
                    "Are you sure you want to delete this review? (y/n)",
                    title,
                )
            }
            PendingAction::SendReply(_) => {
                ("Send this reply? (y/n)", self.reply_text.clone())
            }
        };

        let confirmation = Paragraph::new(question)
            .block(Block::default().borders(Borders::ALL).title("Confirm"))
            .style(Style::default().add_modifier(Modifier::BOLD));
        f.render_widget(confirmation, chunks[0]);

        let preview = Paragraph::new(preview)
            .block(Block::default().borders(Borders::ALL).title("Preview"))
            .wrap(Wrap { trim: true });
        f.render_widget(preview, chunks[1]);

        let instructions = Paragraph::new("Press 'y' to confirm, 'n' or Esc to go back")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Gray));
        f.render_widget(instructions, chunks[2]);
    }
}

fn status_color(status: ReviewStatus) -> Color {
    match status {
        ReviewStatus::Published => Color::Green,
        ReviewStatus::Hidden => Color::Yellow,
        ReviewStatus::Removed | ReviewStatus::RemovedByTenant => Color::Red,
    }
}

/// Shared text-editing for the title/body/reply buffers. `cursor` counts
/// characters, not bytes.
fn edit_text(
    text: &mut String,
    cursor: &mut usize,
    key: KeyEvent,
    limit: Option<usize>,
    multiline: bool,
) {
    match key.code {
        KeyCode::Enter if multiline => {
            insert_char(text, cursor, '\n', limit);
        }
        KeyCode::Char(c) => match c {
            'b' if key.modifiers.contains(KeyModifiers::ALT) => {
                *cursor = prev_word_boundary(text, *cursor);
            }
            'f' if key.modifiers.contains(KeyModifiers::ALT) => {
                *cursor = next_word_boundary(text, *cursor);
            }
            'w' if key.modifiers.contains(KeyModifiers::CONTROL)
                || key.modifiers.contains(KeyModifiers::ALT) =>
            {
                delete_prev_word(text, cursor);
            }
            'd' if key.modifiers.contains(KeyModifiers::ALT) => {
                let word_end = next_word_boundary(text, *cursor);
                if *cursor < word_end {
                    drain_chars(text, *cursor, word_end);
                }
            }
            _ => insert_char(text, cursor, c, limit),
        },
        KeyCode::Left => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                *cursor = prev_word_boundary(text, *cursor);
            } else if *cursor > 0 {
                *cursor -= 1;
            }
        }
        KeyCode::Right => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                *cursor = next_word_boundary(text, *cursor);
            } else if *cursor < text.chars().count() {
                *cursor += 1;
            }
        }
        KeyCode::Home => *cursor = 0,
        KeyCode::End => *cursor = text.chars().count(),
        KeyCode::Backspace => {
            if key.modifiers.contains(KeyModifiers::ALT) {
                delete_prev_word(text, cursor);
            } else if *cursor > 0 {
                *cursor -= 1;
                remove_char(text, *cursor);
            }
        }
        KeyCode::Delete => {
            if *cursor < text.chars().count() {
                remove_char(text, *cursor);
            }
        }
        _ => {}
    }
}

fn byte_index(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

fn insert_char(text: &mut String, cursor: &mut usize, c: char, limit: Option<usize>) {
    if let Some(limit) = limit {
        if text.chars().count() >= limit {
            return;
        }
    }
    let at = byte_index(text, *cursor);
    text.insert(at, c);
    *cursor += 1;
}

fn remove_char(text: &mut String, char_pos: usize) {
    let at = byte_index(text, char_pos);
    text.remove(at);
}

fn drain_chars(text: &mut String, from: usize, to: usize) {
    let start = byte_index(text, from);
    let end = byte_index(text, to);
    text.drain(start..end);
}

fn delete_prev_word(text: &mut String, cursor: &mut usize) {
    let word_start = prev_word_boundary(text, *cursor);
    if word_start < *cursor {
        drain_chars(text, word_start, *cursor);
        *cursor = word_start;
    }
}

fn next_word_boundary(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    let mut pos = cursor;

    while pos < chars.len() && !chars[pos].is_whitespace() {
        pos += 1;
    }
    while pos < chars.len() && chars[pos].is_whitespace() {
        pos += 1;
    }

    pos
}

fn prev_word_boundary(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().collect();
    if cursor == 0 {
        return 0;
    }

    let mut pos = cursor - 1;

    while pos > 0 && chars[pos].is_whitespace() {
        pos -= 1;
    }
    while pos > 0 && !chars[pos - 1].is_whitespace() {
        pos -= 1;
    }

    pos
}

fn text_with_cursor(text: &str, cursor: usize) -> String {
    let mut display = text.to_string();
    let at = byte_index(text, cursor);
    display.insert(at, '█');
    display
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
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
        .split(popup_layout[1])[1]
}
