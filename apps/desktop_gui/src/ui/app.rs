use std::time::Duration;

use client_core::{messages, EstimateView, ScoreSummary, Workflow, WorkflowView};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::ComparisonChoice;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::{request_comparison, request_estimate};
use crate::controller::reducer::apply_ui_event;
use crate::ui::chart::difficulty_chart;

const BUSY_REPAINT: Duration = Duration::from_millis(50);
const IDLE_REPAINT: Duration = Duration::from_millis(250);

fn choice_label(choice: ComparisonChoice) -> &'static str {
    match choice {
        ComparisonChoice::Harder => messages::CHOICE_HARDER,
        ComparisonChoice::Easier => messages::CHOICE_EASIER,
        ComparisonChoice::Between => messages::CHOICE_BETWEEN,
        ComparisonChoice::NeitherOrTie => messages::CHOICE_NEITHER,
    }
}

pub struct EstimatorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,
    workflow: Workflow,
    experience: String,
    status: String,
}

impl EstimatorApp {
    pub fn bootstrap(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            workflow: Workflow::new(),
            experience: String::new(),
            status: "Backend worker starting...".to_string(),
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            apply_ui_event(&mut self.workflow, &mut self.status, event);
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui, view: &WorkflowView) {
        ui.add(
            egui::TextEdit::multiline(&mut self.experience)
                .hint_text(messages::INPUT_PLACEHOLDER)
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        );
        ui.horizontal(|ui| {
            if ui
                .add_enabled(!view.busy, egui::Button::new(view.submit_label))
                .clicked()
            {
                request_estimate(
                    &mut self.workflow,
                    &self.cmd_tx,
                    &self.experience,
                    &mut self.status,
                );
            }
            let has_result = view.estimate.is_some() || view.error.is_some();
            if ui
                .add_enabled(!view.busy && has_result, egui::Button::new(messages::START_OVER))
                .clicked()
                && self.workflow.reset().is_ok()
            {
                self.experience.clear();
                self.status = "Started a new session".to_string();
            }
        });
    }

    fn show_estimate(&mut self, ui: &mut egui::Ui, estimate: &EstimateView, comparison_enabled: bool) {
        ui.heading(messages::ESTIMATE_HEADING);
        show_summary(
            ui,
            &estimate.summary,
            messages::SCORE_LABEL,
            messages::PERCENTILE_LABEL,
        );
        ui.label(format!("{}: {}", messages::CORPUS_LABEL, estimate.corpus_size));

        ui.add_space(12.0);
        ui.heading(messages::COMPARE_HEADING);
        ui.label(format!(
            "{} {}",
            messages::LOWER_PROMPT,
            estimate.prompts.lower_text
        ));
        ui.label(format!(
            "{} {}",
            messages::HIGHER_PROMPT,
            estimate.prompts.higher_text
        ));

        ui.horizontal(|ui| {
            for choice in ComparisonChoice::ALL {
                if ui
                    .add_enabled(comparison_enabled, egui::Button::new(choice_label(choice)))
                    .clicked()
                {
                    request_comparison(&mut self.workflow, &self.cmd_tx, choice, &mut self.status);
                }
            }
        });

        ui.add_space(12.0);
        ui.heading(messages::CHART_HEADING);
        difficulty_chart(ui, &estimate.series);
    }
}

fn show_summary(ui: &mut egui::Ui, summary: &ScoreSummary, score_label: &str, percentile_label: &str) {
    ui.label(format!("{score_label}: {}", summary.score_text()));
    ui.label(format!("{percentile_label}: {}", summary.percentile_text()));
}

impl eframe::App for EstimatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        let view = WorkflowView::project(&self.workflow);

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(egui::RichText::new(&self.status).small());
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(egui::RichText::new(messages::TITLE).strong());
                ui.add_space(8.0);
                self.show_form(ui, &view);

                if let Some(err) = &view.error {
                    ui.colored_label(ui.visuals().error_fg_color, err);
                }

                if let Some(estimate) = &view.estimate {
                    ui.add_space(16.0);
                    self.show_estimate(ui, estimate, view.comparison_enabled);
                }

                if let Some(refined) = &view.refined {
                    ui.add_space(16.0);
                    ui.heading(messages::REFINED_HEADING);
                    show_summary(
                        ui,
                        refined,
                        messages::REFINED_SCORE_LABEL,
                        messages::REFINED_PERCENTILE_LABEL,
                    );
                }
            });
        });

        ctx.request_repaint_after(if view.busy { BUSY_REPAINT } else { IDLE_REPAINT });
    }
}
