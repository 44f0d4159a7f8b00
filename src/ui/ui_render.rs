use eframe::egui::{
    Button, CentralPanel, ComboBox, Context, Frame, Grid, Key, Margin, RichText, ScrollArea,
    SidePanel, TextEdit, TopBottomPanel, Ui,
};
use std::time::Duration;
use strum::IntoEnumIterator;
use web_time::Instant;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;
use crate::ui::article_list::show_article_list;
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::html::article_list_html;
use crate::ui::styles::UiStyleExt;
use crate::ui::ui_plot_view::ChartMode;
use crate::ui::utils::{section_heading, spaced_separator};
use crate::utils::{format_published, html_to_color32};

use super::app::SentimentDashboardApp;

const COPY_NOTICE: Duration = Duration::from_secs(2);

impl SentimentDashboardApp {
    pub(super) fn render_input_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));

        TopBottomPanel::top("input_panel").frame(frame).show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label_header(UI_TEXT.app_title);
                ui.add_space(20.0);

                let response = ui.add(
                    TextEdit::singleline(&mut self.symbol_input)
                        .hint_text(UI_TEXT.symbol_hint)
                        .desired_width(UI_CONFIG.symbol_input_width),
                );
                if self.focus_pending {
                    response.request_focus();
                    self.focus_pending = false;
                }
                let enter_pressed =
                    response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));

                let loading = self.phase.is_loading();
                let button_text = if loading {
                    UI_TEXT.analyzing_button
                } else {
                    UI_TEXT.analyze_button
                };
                let clicked = ui.add_enabled(!loading, Button::new(button_text)).clicked();

                if clicked || enter_pressed {
                    #[cfg(debug_assertions)]
                    if DEBUG_FLAGS.print_ui_interactions {
                        log::info!(
                            "Submit '{}' ({})",
                            self.symbol_input,
                            if clicked { "button" } else { "enter" }
                        );
                    }
                    self.start_analysis();
                }

                ui.separator();
                ui.label_subdued(UI_TEXT.chart_mode_label);
                let mut mode = self.chart_mode;
                ComboBox::from_id_salt("chart_mode")
                    .selected_text(mode.to_string())
                    .show_ui(ui, |ui| {
                        for option in ChartMode::iter() {
                            ui.selectable_value(&mut mode, option, option.to_string());
                        }
                    });
                self.set_chart_mode(mode);
            });
        });
    }

    pub(super) fn render_article_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.side_panel)
            .inner_margin(Margin::same(8));

        SidePanel::right("articles_panel")
            .default_width(UI_CONFIG.article_panel_default_width)
            .min_width(UI_CONFIG.article_panel_min_width)
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label_header(UI_TEXT.articles_heading);
                    if ui.small_button(UI_TEXT.copy_html_button).clicked() {
                        ui.ctx().copy_text(article_list_html(self.view.list().items()));
                        self.copied_at = Some(Instant::now());

                        #[cfg(debug_assertions)]
                        if DEBUG_FLAGS.print_ui_interactions {
                            log::info!("Copied article list as HTML");
                        }
                    }
                });

                if let Some(copied_at) = self.copied_at {
                    let shown_for = copied_at.elapsed();
                    if shown_for < COPY_NOTICE {
                        ui.label_subdued(UI_TEXT.copy_html_done);
                        ui.ctx().request_repaint_after(COPY_NOTICE - shown_for);
                    } else {
                        self.copied_at = None;
                    }
                }

                ui.add_space(6.0);
                ScrollArea::vertical()
                    .id_salt("articles_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        show_article_list(ui, self.view.list());
                    });
            });
    }

    pub(super) fn render_central_panel(&mut self, ctx: &Context) {
        let frame = Frame::new()
            .fill(UI_CONFIG.colors.central_panel)
            .inner_margin(Margin::same(12));

        CentralPanel::default().frame(frame).show(ctx, |ui| {
            let regions = self.phase.regions();

            if let Some(message) = &regions.error {
                render_error_banner(ui, message);
                ui.add_space(8.0);
            }

            if regions.loading {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label_subdued(UI_TEXT.loading);
                });
                return;
            }

            if regions.results {
                self.render_summary(ui);
                spaced_separator(ui);
                ScrollArea::vertical().id_salt("chart_scroll").show(ui, |ui| {
                    self.view.chart().show(ui);
                });
            } else if regions.error.is_none() {
                ui.label_subdued(UI_TEXT.idle_hint);
            }
        });
    }

    fn render_summary(&self, ui: &mut Ui) {
        let Some(analysis) = self.view.analysis() else {
            return;
        };
        let result = &analysis.result;

        section_heading(ui, UI_TEXT.summary_heading);
        Grid::new("summary_grid")
            .num_columns(2)
            .spacing([20.0, 4.0])
            .show(ui, |ui| {
                ui.label_subdued(UI_TEXT.summary_symbol);
                ui.label(RichText::new(&result.symbol).strong());
                ui.end_row();

                ui.label_subdued(UI_TEXT.summary_overall);
                ui.label(
                    RichText::new(result.overall_sentiment.to_string())
                        .strong()
                        .color(html_to_color32(result.overall_sentiment.hex_color())),
                );
                ui.end_row();

                ui.label_subdued(UI_TEXT.summary_score);
                ui.label(format!("{:.3}", result.overall_score));
                ui.end_row();

                ui.label_subdued(UI_TEXT.summary_total);
                ui.label(result.total_articles.to_string());
                ui.end_row();

                if let Some(timestamp) = result.timestamp.as_deref() {
                    ui.label_subdued(UI_TEXT.summary_generated);
                    ui.label(format_published(Some(timestamp)));
                    ui.end_row();
                }
            });
    }
}

fn render_error_banner(ui: &mut Ui, message: &str) {
    Frame::new()
        .fill(UI_CONFIG.colors.error_fill)
        .inner_margin(Margin::same(8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label_error(format!("{} {}", UI_TEXT.error_prefix, message));
        });
}
