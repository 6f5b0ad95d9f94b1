//! Three-point relative difficulty line chart on a fixed percentile axis.

use client_core::{
    messages,
    projection::{ChartPoint, AXIS_MAX, AXIS_MIN},
};
use eframe::egui;

pub const CHART_HEIGHT: f32 = 300.0;
const MARGIN_LEFT: f32 = 48.0;
const MARGIN_RIGHT: f32 = 16.0;
const MARGIN_TOP: f32 = 16.0;
const MARGIN_BOTTOM: f32 = 28.0;
const GRID_STEPS: usize = 4;
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(0x88, 0x84, 0xd8);

pub fn plot_rect(frame: egui::Rect) -> egui::Rect {
    egui::Rect::from_min_max(
        egui::pos2(frame.left() + MARGIN_LEFT, frame.top() + MARGIN_TOP),
        egui::pos2(frame.right() - MARGIN_RIGHT, frame.bottom() - MARGIN_BOTTOM),
    )
}

/// Screen position of the `index`-th of `count` points; values outside the axis are clamped.
pub fn point_position(plot: egui::Rect, index: usize, count: usize, value: f64) -> egui::Pos2 {
    let slot = plot.width() / count.max(1) as f32;
    let x = plot.left() + slot * (index as f32 + 0.5);
    let normalized = ((value - AXIS_MIN) / (AXIS_MAX - AXIS_MIN)).clamp(0.0, 1.0) as f32;
    let y = plot.bottom() - plot.height() * normalized;
    egui::pos2(x, y)
}

pub fn difficulty_chart(ui: &mut egui::Ui, series: &[ChartPoint; 3]) -> egui::Response {
    let size = egui::vec2(ui.available_width(), CHART_HEIGHT);
    let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
    let plot = plot_rect(response.rect);

    let text_color = ui.visuals().text_color();
    let grid_stroke = egui::Stroke::new(1.0, ui.visuals().weak_text_color());
    let font = egui::FontId::proportional(12.0);

    for step in 0..=GRID_STEPS {
        let value = AXIS_MIN + (AXIS_MAX - AXIS_MIN) * step as f64 / GRID_STEPS as f64;
        let y = point_position(plot, 0, 1, value).y;
        painter.extend(egui::Shape::dashed_line(
            &[egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            grid_stroke,
            3.0,
            3.0,
        ));
        painter.text(
            egui::pos2(plot.left() - 6.0, y),
            egui::Align2::RIGHT_CENTER,
            format!("{value:.0}"),
            font.clone(),
            text_color,
        );
    }
    painter.text(
        egui::pos2(response.rect.left() + 2.0, plot.top() - 4.0),
        egui::Align2::LEFT_BOTTOM,
        messages::CHART_AXIS,
        font.clone(),
        text_color,
    );

    let points: Vec<egui::Pos2> = series
        .iter()
        .enumerate()
        .map(|(index, point)| point_position(plot, index, series.len(), point.value))
        .collect();
    painter.add(egui::Shape::line(
        points.clone(),
        egui::Stroke::new(2.0, LINE_COLOR),
    ));

    for (pos, point) in points.iter().zip(series) {
        painter.circle_filled(*pos, 4.0, LINE_COLOR);
        painter.text(
            *pos - egui::vec2(0.0, 8.0),
            egui::Align2::CENTER_BOTTOM,
            format!("{:.2}", point.value),
            font.clone(),
            text_color,
        );
        painter.text(
            egui::pos2(pos.x, plot.bottom() + 6.0),
            egui::Align2::CENTER_TOP,
            point.slot.display_name(),
            font.clone(),
            text_color,
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plot() -> egui::Rect {
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(300.0, 100.0))
    }

    #[test]
    fn axis_bounds_map_to_plot_edges() {
        assert_eq!(point_position(plot(), 0, 3, 0.0), egui::pos2(50.0, 100.0));
        assert_eq!(point_position(plot(), 2, 3, 100.0), egui::pos2(250.0, 0.0));
        assert_eq!(point_position(plot(), 1, 3, 50.0), egui::pos2(150.0, 50.0));
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        assert_eq!(point_position(plot(), 0, 3, -5.0).y, 100.0);
        assert_eq!(point_position(plot(), 0, 3, 140.0).y, 0.0);
    }

    #[test]
    fn plot_rect_leaves_room_for_labels() {
        let frame = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(400.0, CHART_HEIGHT));
        let plot = plot_rect(frame);
        assert_eq!(plot.left(), MARGIN_LEFT);
        assert_eq!(plot.bottom(), CHART_HEIGHT - MARGIN_BOTTOM);
    }
}
