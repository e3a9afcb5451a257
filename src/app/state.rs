use crate::app::modal::{option_rows, FilterModal};
use crate::config::AppConfig;
use crate::filter::{FilterItem, FilterStore};
use crate::i18n::Translator;
use std::time::{Duration, Instant};

/// Load state of the filter catalog. `Failed` is terminal for the session.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    Loading,
    Ready(Vec<FilterItem>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub set_at: Instant,
}

pub struct AppState {
    pub config: AppConfig,
    pub tr: Translator,
    pub store: FilterStore,
    pub catalog: CatalogState,
    pub modal: FilterModal,
    /// Highlighted entry in the committed filter list.
    pub page_cursor: usize,
    pub json_scroll: u16,
    pub show_debug: bool,
    pub last_changed: Option<String>,
    pub status_message: Option<StatusMessage>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig, store: FilterStore) -> Self {
        let tr = Translator::new(config.strings.clone());
        let show_debug = config.ui.show_debug;
        Self {
            config,
            tr,
            store,
            catalog: CatalogState::Loading,
            modal: FilterModal::new(),
            page_cursor: 0,
            json_scroll: 0,
            show_debug,
            last_changed: None,
            status_message: None,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn catalog_items(&self) -> Option<&[FilterItem]> {
        match &self.catalog {
            CatalogState::Ready(items) => Some(items),
            _ => None,
        }
    }

    pub fn option_row_count(&self) -> usize {
        self.catalog_items().map(|c| option_rows(c).len()).unwrap_or(0)
    }

    pub fn set_status(&mut self, text: impl Into<String>, kind: StatusKind) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            kind,
            set_at: Instant::now(),
        });
        self.dirty = true;
    }

    /// Drop the status message once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        let timeout = Duration::from_secs(self.config.ui.status_timeout_secs);
        if let Some(ref msg) = self.status_message {
            if now.duration_since(msg.set_at) >= timeout {
                self.status_message = None;
                self.dirty = true;
            }
        }
    }

    /// Keep the page cursor on an existing committed entry.
    pub fn clamp_page_cursor(&mut self) {
        let len = self.store.with_filters(|f| f.len());
        self.page_cursor = self.page_cursor.min(len.saturating_sub(1));
    }

    /// Last line the JSON panel may scroll to.
    pub fn max_json_scroll(&self) -> u16 {
        let lines = self
            .store
            .with_filters(|f| f.to_pretty_json().map(|json| json.lines().count()))
            .unwrap_or(0);
        u16::try_from(lines.saturating_sub(1)).unwrap_or(u16::MAX)
    }

    pub fn clamp_json_scroll(&mut self) {
        self.json_scroll = self.json_scroll.min(self.max_json_scroll());
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.text.clone();
        }
        let (entries, options) = self
            .store
            .with_filters(|f| (f.len(), f.total_options()));
        format!(
            "{} {} | {} {}",
            self.tr.t("Number of selected filters:"),
            entries,
            self.tr.t("Total selected options:"),
            options
        )
    }
}
