//! Application shell
//!
//! `App` owns the store and the form, turns key presses into state
//! changes or requests, and feeds request outcomes back into the store.
//! Requests run on spawned tasks; their `Action`s come back through an
//! unbounded channel that the UI loop drains between frames.

use std::sync::Arc;

use catalog_client::ProductApi;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::TableState;
use shared::Product;
use tokio::sync::mpsc::UnboundedSender;
use tui_logger::{TuiWidgetEvent, TuiWidgetState};

use crate::core::{Action, AppError, Effect, ProductForm, Store, ViewMode, action};

/// Which admin panel receives keys
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Table,
    Form,
}

pub struct App {
    pub store: Store,
    pub form: ProductForm,
    pub focus: Focus,
    pub table_state: TableState,
    pub logger_state: TuiWidgetState,
    api: Arc<dyn ProductApi>,
    tx: UnboundedSender<Action>,
    should_quit: bool,
}

impl App {
    pub fn new(api: Arc<dyn ProductApi>, tx: UnboundedSender<Action>) -> Self {
        Self {
            store: Store::new(),
            form: ProductForm::new(),
            focus: Focus::Table,
            table_state: TableState::default(),
            logger_state: TuiWidgetState::new(),
            api,
            tx,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Product under the admin table cursor
    pub fn selected_product(&self) -> Option<&Product> {
        self.table_state
            .selected()
            .and_then(|i| self.store.products().get(i))
    }

    // ========== Requests ==========

    /// Fetch the full list in the background
    pub fn spawn_load(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = action::load_products(api.as_ref()).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("UI closed before products loaded");
            }
        });
    }

    fn spawn_submit(&self) {
        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                AppError::from(e).log();
                return;
            }
        };
        let mode = self.store.form_mode();
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = action::submit_product(api.as_ref(), mode, payload).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("UI closed before submit finished");
            }
        });
    }

    fn spawn_delete(&self, id: i64) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = action::delete_product(api.as_ref(), id).await;
            if tx.send(outcome).is_err() {
                tracing::debug!("UI closed before delete finished");
            }
        });
    }

    /// Apply a finished request and run whatever it asks for next
    pub fn handle_action(&mut self, outcome: Action) {
        if let Some(Effect::Reload) = self.store.apply(outcome, &mut self.form) {
            self.spawn_load();
        }
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.store.products().len();
        match self.table_state.selected() {
            _ if len == 0 => self.table_state.select(None),
            Some(i) if i >= len => self.table_state.select(Some(len - 1)),
            None => self.table_state.select(Some(0)),
            Some(_) => {}
        }
    }

    // ========== Input ==========

    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.store.view_mode() == ViewMode::Admin && self.focus == Focus::Form {
            self.handle_form_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('1') => self.show(ViewMode::Catalog),
            KeyCode::Char('2') => self.show(ViewMode::Admin),
            KeyCode::PageUp => self.logger_state.transition(TuiWidgetEvent::PrevPageKey),
            KeyCode::PageDown => self.logger_state.transition(TuiWidgetEvent::NextPageKey),
            _ if self.store.view_mode() == ViewMode::Admin => self.handle_table_key(key),
            _ => {}
        }
    }

    fn show(&mut self, mode: ViewMode) {
        self.store.set_view_mode(mode);
        self.focus = Focus::Table;
    }

    fn handle_table_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.table_state.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.table_state.select_next(),
            KeyCode::Tab => self.focus = Focus::Form,
            KeyCode::Char('e') => {
                if let Some(product) = self.selected_product().cloned() {
                    self.store.begin_edit(product, &mut self.form);
                    self.focus = Focus::Form;
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_product().map(|p| p.id) {
                    self.spawn_delete(id);
                }
            }
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.store.cancel_edit(&mut self.form);
            }
            _ => {}
        }
        self.clamp_selection();
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.focus = Focus::Table,
            KeyCode::Tab | KeyCode::Down => self.form.focus_next(),
            KeyCode::BackTab | KeyCode::Up => self.form.focus_prev(),
            KeyCode::Enter => self.spawn_submit(),
            KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.store.editing().is_some() {
                    self.store.cancel_edit(&mut self.form);
                }
            }
            _ => self.form.handle_event(&Event::Key(key)),
        }
    }
}
