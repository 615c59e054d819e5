//! Artworks Page
//!
//! The single page of the application: a paginated table of artworks with
//! checkbox selection and an overlay for selecting the first N rows across
//! pages.

use gpui::{
    div, prelude::*, px, AnyElement, ClickEvent, Context, Entity, IntoElement, ParentElement,
    Render, SharedString, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::data_table::{Column, DataTable, Pagination};
use crate::components::composite::overlay_panel::OverlayPanel;
use crate::components::primitives::button::{Button, ButtonVariant};
use crate::components::primitives::number_input::NumberInput;
use crate::domain::artwork::Artwork;
use crate::features::artworks::controller::ArtworksController;
use crate::theme::colors::UiColors;
use crate::utils::format::truncate;

/// The artworks browser page
pub struct ArtworksPage {
    entities: AppEntities,
    controller: ArtworksController,
    table: Entity<DataTable<Artwork>>,
    count_input: Entity<NumberInput>,
}

impl ArtworksPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = ArtworksController::new(entities.clone());

        let table = cx.new(|cx| {
            let mut table = DataTable::new(|artwork: &Artwork| artwork.id, cx);
            table.set_columns(Self::columns());
            table.set_selectable(true);
            table.set_empty_message("No artworks");
            let controller = controller.clone();
            table.on_selection_change(move |rows, cx| {
                controller.set_manual_selection(rows, cx);
            });
            table
        });

        let count_input = cx.new(|cx| {
            let mut input = NumberInput::new("row-count-input", cx);
            input.set_placeholder("Number of rows");
            let controller = controller.clone();
            input.on_change(move |value, cx| {
                controller.set_count_input(value, cx);
            });
            input
        });

        // Push catalog changes into the table
        let table_sync = table.clone();
        cx.observe(&entities.catalog, move |_this, catalog, cx| {
            let (rows, loading) = {
                let catalog = catalog.read(cx);
                (catalog.rows().to_vec(), catalog.loading())
            };
            table_sync.update(cx, |table, cx| {
                table.set_rows(rows);
                table.set_loading(loading);
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        // Push selection changes into the table and the count input
        let table_sync = table.clone();
        let input_sync = count_input.clone();
        cx.observe(&entities.selection, move |_this, selection, cx| {
            let selection = selection.read(cx);
            let selected = selection.artworks();
            let count_text = selection.count_input().to_string();

            table_sync.update(cx, |table, cx| {
                table.set_selection(selected);
                cx.notify();
            });
            input_sync.update(cx, |input, cx| {
                if input.value() != count_text {
                    input.set_value(count_text);
                }
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        // Load the first page
        controller.load_offset(0, cx);

        Self {
            entities,
            controller,
            table,
            count_input,
        }
    }

    fn columns() -> Vec<Column<Artwork>> {
        fn cell(text: impl Into<SharedString>) -> AnyElement {
            let text: SharedString = text.into();
            div().child(text).into_any_element()
        }

        fn optional(value: Option<&str>) -> AnyElement {
            cell(value.unwrap_or("—").to_string())
        }

        fn year(value: Option<i32>) -> AnyElement {
            cell(value.map_or_else(|| "—".to_string(), |y| y.to_string()))
        }

        vec![
            Column::new("title", "Title", |a: &Artwork| {
                cell(a.display_title().to_string())
            })
            .flex_width(220.0),
            Column::new("place_of_origin", "Place of Origin", |a: &Artwork| {
                optional(a.place_of_origin.as_deref())
            })
            .fixed_width(140.0),
            Column::new("artist_display", "Artist", |a: &Artwork| {
                optional(a.artist_display.as_deref())
            })
            .flex_width(200.0),
            Column::new("inscriptions", "Inscriptions", |a: &Artwork| {
                cell(a
                    .inscriptions
                    .as_deref()
                    .map_or_else(|| "—".to_string(), |i| truncate(i, 60)))
            })
            .flex_width(180.0),
            Column::new("date_start", "Start", |a: &Artwork| year(a.date_start))
                .fixed_width(70.0),
            Column::new("date_end", "End", |a: &Artwork| year(a.date_end)).fixed_width(70.0),
        ]
    }

    fn render_toolbar(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let catalog = self.entities.catalog.read(cx);
        let selection = self.entities.selection.read(cx);
        let panel_open = selection.panel_open();
        let selecting = selection.selecting();
        let error = catalog.error().map(str::to_string);

        let status: AnyElement = if let Some(message) = error {
            div()
                .text_sm()
                .text_color(UiColors::danger())
                .child(message)
                .into_any_element()
        } else {
            div()
                .text_sm()
                .text_color(UiColors::text_secondary())
                .child(format!(
                    "Page {} of {}",
                    catalog.page_number(),
                    catalog.total_pages()
                ))
                .into_any_element()
        };

        let toggle = self.controller.clone();
        let submit = self.controller.clone();

        let mut panel_anchor = div()
            .relative()
            .child(
                Button::new("toggle-select-panel", "Select rows ▾")
                    .variant(ButtonVariant::Secondary)
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        toggle.toggle_panel(cx);
                    }),
            );

        if panel_open {
            panel_anchor = panel_anchor.child(
                OverlayPanel::new()
                    .width(240.0)
                    .child(
                        div()
                            .text_sm()
                            .text_color(UiColors::text_secondary())
                            .child("Select the first N rows"),
                    )
                    .child(self.count_input.clone())
                    .child(
                        Button::primary("submit-auto-select", "Submit")
                            .loading(selecting)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                submit.request_auto_select(cx);
                            }),
                    ),
            );
        }

        div()
            .w_full()
            .flex()
            .items_center()
            .justify_between()
            .child(status)
            .child(panel_anchor)
    }
}

impl Render for ArtworksPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let (current_page, total_pages, total) = {
            let catalog = self.entities.catalog.read(cx);
            (catalog.page_number(), catalog.total_pages(), catalog.total())
        };

        let pager = self.controller.clone();

        div()
            .size_full()
            .flex()
            .flex_col()
            .gap_3()
            .p_4()
            .bg(UiColors::background())
            .child(self.render_toolbar(cx))
            .child(div().flex_1().min_h(px(0.0)).child(self.table.clone()))
            .child(
                Pagination::new(current_page, total_pages, total)
                    .items_label("artworks")
                    .on_page_change(move |page, cx| {
                        pager.goto_page(page, cx);
                    }),
            )
    }
}
