use std::fmt::Write as _;

use client_core::{
    messages,
    projection::{ChartPoint, AXIS_MAX, AXIS_MIN},
    WorkflowView,
};

const BAR_WIDTH: usize = 40;

pub fn render_view(view: &WorkflowView) -> String {
    let mut out = String::new();

    if let Some(err) = &view.error {
        let _ = writeln!(out, "! {err}");
    }

    if let Some(estimate) = &view.estimate {
        let _ = writeln!(out, "== {}", messages::ESTIMATE_HEADING);
        let _ = writeln!(out, "{}: {}", messages::SCORE_LABEL, estimate.summary.score_text());
        let _ = writeln!(
            out,
            "{}: {}",
            messages::PERCENTILE_LABEL,
            estimate.summary.percentile_text()
        );
        let _ = writeln!(out, "{}: {}", messages::CORPUS_LABEL, estimate.corpus_size);

        let _ = writeln!(out, "\n== {}", messages::COMPARE_HEADING);
        let _ = writeln!(out, "{} {}", messages::LOWER_PROMPT, estimate.prompts.lower_text);
        let _ = writeln!(out, "{} {}", messages::HIGHER_PROMPT, estimate.prompts.higher_text);

        let _ = writeln!(
            out,
            "\n== {} ({})",
            messages::CHART_HEADING,
            messages::CHART_AXIS
        );
        for point in &estimate.series {
            let _ = writeln!(out, "{}", chart_row(point));
        }
    }

    if let Some(refined) = &view.refined {
        let _ = writeln!(out, "\n== {}", messages::REFINED_HEADING);
        let _ = writeln!(out, "{}: {}", messages::REFINED_SCORE_LABEL, refined.score_text());
        let _ = writeln!(
            out,
            "{}: {}",
            messages::REFINED_PERCENTILE_LABEL,
            refined.percentile_text()
        );
    }

    out
}

fn chart_row(point: &ChartPoint) -> String {
    let ratio = ((point.value - AXIS_MIN) / (AXIS_MAX - AXIS_MIN)).clamp(0.0, 1.0);
    let filled = (ratio * BAR_WIDTH as f64).round() as usize;
    format!(
        "{:<20} |{}{}| {:>6.2}",
        point.slot.display_name(),
        "#".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        point.value
    )
}

pub fn choice_menu() -> String {
    format!(
        "[h] {}  [e] {}  [b] {}  [n] {}  [r] {}  [q] quit",
        messages::CHOICE_HARDER,
        messages::CHOICE_EASIER,
        messages::CHOICE_BETWEEN,
        messages::CHOICE_NEITHER,
        messages::START_OVER
    )
}

#[cfg(test)]
mod tests {
    use client_core::projection::SeriesSlot;

    use super::*;

    #[test]
    fn chart_rows_scale_to_percentile_axis() {
        let full = chart_row(&ChartPoint {
            slot: SeriesSlot::Next,
            value: 100.0,
        });
        assert!(full.contains(&"#".repeat(BAR_WIDTH)));
        assert!(full.ends_with("100.00"));

        let empty = chart_row(&ChartPoint {
            slot: SeriesSlot::Previous,
            value: 0.0,
        });
        assert!(!empty.contains('#'));
    }

    #[test]
    fn idle_view_renders_nothing() {
        let view = WorkflowView::project(&client_core::Workflow::new());
        assert!(render_view(&view).is_empty());
    }
}
