use serde::Serialize;

use crate::filter::{filter_orders, order_suggestions};
use crate::fuzzy::fuzzy_match;
use crate::models::{CodeRecord, OrderRecord};
use crate::query::is_numeric_query;


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPhase {
    Idle,
    Searching,
    Selected,
}

/// Search state for the MK/SAP crosswalk lookup. Owns its dataset; nothing
/// is shared with the order flow.
#[derive(Debug, Clone)]
pub struct CodeSearchFlow {
    dataset: Vec<CodeRecord>,
    query: String,
    suggestions: Vec<CodeRecord>,
    selected: Option<CodeRecord>,
}

impl CodeSearchFlow {
    #[must_use]
    pub fn new(dataset: Vec<CodeRecord>) -> Self {
        Self {
            dataset,
            query: String::new(),
            suggestions: Vec::new(),
            selected: None,
        }
    }

    /// Every edit discards the current selection and recomputes suggestions
    /// from scratch.
    pub fn edit_query(&mut self, value: &str) {
        self.query = value.to_string();
        self.selected = None;
        if value.trim().is_empty() {
            self.suggestions.clear();
            return;
        }
        self.suggestions = fuzzy_match(&self.dataset, value);
    }

    /// Picking a suggestion clears the dropdown and repopulates the search
    /// box from the chosen record's `descMK`.
    pub fn pick_suggestion(&mut self, index: usize) -> Option<&CodeRecord> {
        let item = self.suggestions.get(index)?.clone();
        self.query = item.desc_mk.clone();
        self.suggestions.clear();
        self.selected = Some(item);
        self.selected.as_ref()
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.selected = None;
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.selected.is_some() {
            return SearchPhase::Selected;
        }
        if self.query.trim().is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Searching
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn suggestions(&self) -> &[CodeRecord] {
        &self.suggestions
    }

    #[must_use]
    pub fn selected(&self) -> Option<&CodeRecord> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

/// Search state for the purchase-order lookup. Besides the dropdown it keeps
/// the full filtered view, plus a detail selection that only an explicit
/// dismissal clears.
#[derive(Debug, Clone)]
pub struct OrderSearchFlow {
    dataset: Vec<OrderRecord>,
    query: String,
    suggestions: Vec<OrderRecord>,
    filtered: Vec<OrderRecord>,
    selected: Option<OrderRecord>,
    detail: Option<OrderRecord>,
}

impl OrderSearchFlow {
    #[must_use]
    pub fn new(dataset: Vec<OrderRecord>) -> Self {
        let filtered = dataset.clone();
        Self {
            dataset,
            query: String::new(),
            suggestions: Vec::new(),
            filtered,
            selected: None,
            detail: None,
        }
    }

    /// Refilters the full view on every edit. Unlike the code flow, an edit
    /// does not discard the search selection, and the detail selection is
    /// never touched here.
    pub fn edit_query(&mut self, value: &str) {
        self.query = value.to_string();
        self.filtered = filter_orders(&self.dataset, value);
        self.suggestions = order_suggestions(&self.filtered, value);
    }

    /// The echoed field depends on how the query looked when typed, not on
    /// the record: numeric-looking queries keep the document number, text
    /// keeps the short description. The view is refiltered with the echo.
    pub fn pick_suggestion(&mut self, index: usize) -> Option<String> {
        let item = self.suggestions.get(index)?.clone();
        let echoed = if is_numeric_query(&self.query) {
            item.documento_compras.clone()
        } else {
            item.texto_breve.clone()
        };
        self.query = echoed.clone();
        self.filtered = filter_orders(&self.dataset, &echoed);
        self.suggestions.clear();
        self.selected = Some(item);
        Some(echoed)
    }

    /// Resets the search: query and dropdown empty, full dataset visible.
    /// The detail selection survives; only `dismiss_detail` closes it.
    pub fn clear(&mut self) {
        self.query.clear();
        self.suggestions.clear();
        self.filtered = self.dataset.clone();
        self.selected = None;
    }

    /// Opens row `index` of the filtered view as the detail selection.
    pub fn select_row(&mut self, index: usize) -> Option<&OrderRecord> {
        self.detail = self.filtered.get(index).cloned();
        self.detail.as_ref()
    }

    pub fn dismiss_detail(&mut self) {
        self.detail = None;
    }

    /// Whether the current query drives numeric-mode rendering (document
    /// number leads in the dropdown).
    #[must_use]
    pub fn numeric_mode(&self) -> bool {
        is_numeric_query(&self.query)
    }

    #[must_use]
    pub fn phase(&self) -> SearchPhase {
        if self.selected.is_some() {
            return SearchPhase::Selected;
        }
        if self.query.trim().is_empty() {
            SearchPhase::Idle
        } else {
            SearchPhase::Searching
        }
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn suggestions(&self) -> &[OrderRecord] {
        &self.suggestions
    }

    #[must_use]
    pub fn filtered(&self) -> &[OrderRecord] {
        &self.filtered
    }

    #[must_use]
    pub fn detail(&self) -> Option<&OrderRecord> {
        self.detail.as_ref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}
