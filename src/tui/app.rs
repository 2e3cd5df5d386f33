use crate::libs::manager::TaskManager;
use crate::libs::messages::{Message, Notice};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Table,
    Form,
    Search,
}

/// Window state on top of [`TaskManager`]: keyboard focus, the search box and
/// the last notice shown in the status line.
pub struct App<'a> {
    pub manager: &'a mut TaskManager,
    pub focus: Focus,
    pub search_input: String,
    pub notice: Option<Notice>,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    pub fn new(manager: &'a mut TaskManager) -> Self {
        let notice = Some(Notice::Info(Message::TasksLoaded(manager.table().len())));
        Self {
            manager,
            focus: Focus::Table,
            search_input: String::new(),
            notice,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Ctrl+S in the form is the only chord; other chords are dropped.
        let save_chord = self.focus == Focus::Form && key.code == KeyCode::Char('s');
        if key.modifiers.contains(KeyModifiers::CONTROL) && !save_chord {
            return;
        }

        match self.focus {
            Focus::Table => self.handle_table_key(key),
            Focus::Form => self.handle_form_key(key),
            Focus::Search => self.handle_search_key(key),
        }
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(row) = self.manager.table().next_visible() {
                    let notice = self.manager.on_row_selected(row);
                    self.show(notice);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(row) = self.manager.table().previous_visible() {
                    let notice = self.manager.on_row_selected(row);
                    self.show(notice);
                }
            }
            KeyCode::Char('n') => {
                let notice = self.manager.on_new();
                self.after_open(notice);
            }
            KeyCode::Char('e') => {
                let notice = self.manager.on_edit();
                self.after_open(notice);
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let notice = self.manager.on_delete();
                self.show(notice);
            }
            KeyCode::Char('/') => {
                self.search_input = self.manager.table().query().to_string();
                self.focus = Focus::Search;
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let field = self.manager.form().current_field();
        match key.code {
            KeyCode::Esc => {
                let notice = self.manager.on_cancel();
                self.show(notice);
                self.focus = Focus::Table;
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let notice = self.manager.on_save();
                self.show(notice);
                if !self.manager.form().fields_enabled() {
                    self.focus = Focus::Table;
                }
            }
            KeyCode::Tab | KeyCode::Down | KeyCode::Enter => self.manager.form_mut().focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.manager.form_mut().focus_previous(),
            KeyCode::Left if field.is_choice() => {
                self.manager.form_mut().cycle_choice(field, false);
            }
            KeyCode::Right | KeyCode::Char(' ') if field.is_choice() => {
                self.manager.form_mut().cycle_choice(field, true);
            }
            KeyCode::Backspace => {
                if let Some(input) = self.manager.form_mut().input_mut(field) {
                    input.pop();
                }
            }
            KeyCode::Char(c) => {
                if let Some(input) = self.manager.form_mut().input_mut(field) {
                    input.push(c);
                }
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                let notice = self.manager.on_search(&self.search_input);
                self.show(notice);
                self.focus = Focus::Table;
            }
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Backspace => {
                self.search_input.pop();
            }
            KeyCode::Char(c) => self.search_input.push(c),
            _ => {}
        }
    }

    /// Moves focus into the form when New/Edit actually opened it.
    fn after_open(&mut self, notice: Option<Notice>) {
        if self.manager.form().fields_enabled() {
            self.focus = Focus::Form;
        }
        self.show(notice);
    }

    fn show(&mut self, notice: Option<Notice>) {
        if notice.is_some() {
            self.notice = notice;
        }
    }
}
