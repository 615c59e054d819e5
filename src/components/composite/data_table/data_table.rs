//! DataTable Component
//!
//! A data table for lazily loaded pages, with optional checkbox row
//! selection. The table owns the checked set (which may span pages the
//! way the selection was produced) and reports the complete new selection
//! on every toggle; the application layer replaces its state verbatim.

use std::collections::HashSet;

use gpui::{
    div, prelude::*, px, App, Context, IntoElement, ParentElement, Render, SharedString, Styled,
    Window,
};

use super::column::{Column, ColumnWidth};
use crate::components::primitives::checkbox::Checkbox;
use crate::theme::colors::UiColors;

const SELECT_COLUMN_WIDTH: f32 = 44.0;

/// DataTable component
pub struct DataTable<R: Clone + Send + Sync + 'static> {
    columns: Vec<Column<R>>,
    rows: Vec<R>,
    row_id: Box<dyn Fn(&R) -> i64 + Send + Sync>,
    selectable: bool,
    /// Rows currently checked, in selection order
    selection: Vec<R>,
    row_height: f32,
    header_height: f32,
    loading: bool,
    empty_message: SharedString,
    on_selection_change: Option<Box<dyn Fn(Vec<R>, &mut App) + 'static>>,
}

impl<R: Clone + Send + Sync + 'static> DataTable<R> {
    /// Create a new data table. `row_id` extracts the stable identifier
    /// that selection membership is keyed by.
    pub fn new(row_id: impl Fn(&R) -> i64 + Send + Sync + 'static, _cx: &mut Context<Self>) -> Self {
        Self {
            columns: Vec::new(),
            rows: Vec::new(),
            row_id: Box::new(row_id),
            selectable: false,
            selection: Vec::new(),
            row_height: 38.0,
            header_height: 40.0,
            loading: false,
            empty_message: "No data".into(),
            on_selection_change: None,
        }
    }

    /// Set the columns
    pub fn set_columns(&mut self, columns: Vec<Column<R>>) {
        self.columns = columns;
    }

    /// Set the rows
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
    }

    /// Set loading state
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Set the empty message
    pub fn set_empty_message(&mut self, message: impl Into<SharedString>) {
        self.empty_message = message.into();
    }

    /// Enable the checkbox selection column
    pub fn set_selectable(&mut self, selectable: bool) {
        self.selectable = selectable;
    }

    /// Replace the checked set (app state -> widget sync)
    pub fn set_selection(&mut self, selection: Vec<R>) {
        self.selection = selection;
    }

    /// Set the handler called with the complete new selection on every
    /// checkbox toggle
    pub fn on_selection_change(&mut self, handler: impl Fn(Vec<R>, &mut App) + 'static) {
        self.on_selection_change = Some(Box::new(handler));
    }

    fn selected_ids(&self) -> HashSet<i64> {
        self.selection.iter().map(|r| (self.row_id)(r)).collect()
    }

    fn toggle_row(&mut self, row: R, checked: bool, cx: &mut Context<Self>) {
        let id = (self.row_id)(&row);
        if checked {
            if !self.selection.iter().any(|r| (self.row_id)(r) == id) {
                self.selection.push(row);
            }
        } else {
            self.selection.retain(|r| (self.row_id)(r) != id);
        }

        let snapshot = self.selection.clone();
        if let Some(ref handler) = self.on_selection_change {
            handler(snapshot, cx);
        }
        cx.notify();
    }

    fn column_width_style(&self, width: &ColumnWidth) -> f32 {
        match width {
            ColumnWidth::Fixed(w) => *w,
            ColumnWidth::Flex { min } => *min,
        }
    }

    /// Render the header row
    fn render_header(&self) -> impl IntoElement {
        let mut header = div()
            .h(px(self.header_height))
            .w_full()
            .flex()
            .items_center()
            .bg(UiColors::table_header_bg())
            .border_b_1()
            .border_color(UiColors::border());

        if self.selectable {
            header = header.child(div().w(px(SELECT_COLUMN_WIDTH)).px_3());
        }

        header.children(self.columns.iter().map(|col| {
            let width = self.column_width_style(&col.width);
            div()
                .w(px(width))
                .px_3()
                .text_sm()
                .font_weight(gpui::FontWeight::MEDIUM)
                .text_color(UiColors::text_primary())
                .child(col.label.clone())
        }))
    }

    /// Render a data row
    fn render_row(
        &self,
        row: &R,
        index: usize,
        selected_ids: &HashSet<i64>,
        cx: &mut Context<Self>,
    ) -> impl IntoElement + use<R> {
        let bg = if index % 2 == 0 {
            UiColors::content_bg()
        } else {
            UiColors::table_row_alt()
        };

        let mut element = div()
            .h(px(self.row_height))
            .w_full()
            .flex()
            .items_center()
            .bg(bg)
            .hover(|s| s.bg(UiColors::table_row_hover()))
            .border_b_1()
            .border_color(UiColors::border());

        if self.selectable {
            let id = (self.row_id)(row);
            let checked = selected_ids.contains(&id);
            let this = cx.entity().downgrade();
            let row_clone = row.clone();

            element = element.child(
                div().w(px(SELECT_COLUMN_WIDTH)).px_3().child(
                    Checkbox::new(("row-select", index))
                        .checked(checked)
                        .on_change(move |checked, _window, cx| {
                            let row = row_clone.clone();
                            let _ = this.update(cx, |table, cx| {
                                table.toggle_row(row, checked, cx);
                            });
                        }),
                ),
            );
        }

        element.children(self.columns.iter().map(|col| {
            let width = self.column_width_style(&col.width);
            let cell_content = col.render_cell(row);
            div()
                .w(px(width))
                .px_3()
                .text_sm()
                .text_color(UiColors::text_primary())
                .overflow_hidden()
                .child(cell_content)
        }))
    }

    /// Render empty state
    fn render_empty(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(UiColors::text_muted())
            .child(self.empty_message.clone())
    }

    /// Render loading state
    fn render_loading(&self) -> impl IntoElement {
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .text_color(UiColors::text_muted())
            .child("Loading...")
    }
}

impl<R: Clone + Send + Sync + 'static> Render for DataTable<R> {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let mut table = div()
            .size_full()
            .flex()
            .flex_col()
            .bg(UiColors::content_bg())
            .border_1()
            .border_color(UiColors::border())
            .rounded_md()
            .overflow_hidden();

        table = table.child(self.render_header());

        if self.loading {
            table = table.child(self.render_loading());
        } else if self.rows.is_empty() {
            table = table.child(self.render_empty());
        } else {
            let rows = self.rows.clone();
            let selected_ids = self.selected_ids();
            let rows_content = div()
                .id("data-table-rows")
                .flex_1()
                .overflow_y_scroll()
                .children(
                    rows.iter()
                        .enumerate()
                        .map(|(i, row)| self.render_row(row, i, &selected_ids, cx)),
                );
            table = table.child(rows_content);
        }

        table
    }
}
