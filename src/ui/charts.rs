use std::ops::RangeInclusive;

use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense};
use egui_plot::{Bar, BarChart, GridMark, Line, Plot, Points};

use crate::app::JobScope;
use crate::constants::layout::{CHART_HEIGHT, HEATMAP_CELL_HEIGHT, HEATMAP_CELL_WIDTH, HEATMAP_LABEL_WIDTH};
use crate::error::Severity;
use crate::query::{CategoryCount, Heatmap, Panel, Query, QueryOutput, TrendPoint};

const BAR_COLOR: Color32 = Color32::from_rgb(31, 119, 180);
const TREND_COLOR: Color32 = Color32::from_rgb(255, 127, 14);
const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 0);

/// Rankings read better as horizontal bars
fn is_horizontal(query: &Query) -> bool {
    matches!(
        query,
        Query::TopValues {
            column: crate::constants::columns::JOB_TITLE,
            ..
        } | Query::WordFrequency { .. }
            | Query::SeniorityCounts
    )
}

/// Axis label for an integer grid position; blank between categories
fn category_label(labels: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    labels.get(idx as usize).cloned().unwrap_or_default()
}

fn bar_chart(ui: &mut egui::Ui, id: &str, counts: &[CategoryCount], horizontal: bool) {
    profiling::scope!("bar_chart");

    let n = counts.len();
    // Horizontal charts put the most frequent entry on top
    let position = |i: usize| if horizontal { n - 1 - i } else { i };

    let mut labels = vec![String::new(); n];
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, c)| {
            labels[position(i)] = c.label.clone();
            Bar::new(position(i) as f64, c.count as f64)
                .name(&c.label)
                .width(0.7)
        })
        .collect();

    let mut chart = BarChart::new(id, bars).color(BAR_COLOR);
    if horizontal {
        chart = chart.horizontal();
    }

    let formatter = move |mark: GridMark, _range: &RangeInclusive<f64>| category_label(&labels, mark.value);
    let plot = Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_grid(true);
    let plot = if horizontal {
        plot.y_axis_formatter(formatter)
    } else {
        plot.x_axis_formatter(formatter)
    };

    plot.show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

fn trend_chart(ui: &mut egui::Ui, id: &str, trend: &[TrendPoint]) {
    profiling::scope!("trend_chart");

    let labels: Vec<String> = trend.iter().map(|p| p.period.clone()).collect();
    let points: Vec<[f64; 2]> = trend
        .iter()
        .enumerate()
        .map(|(i, p)| [i as f64, p.count as f64])
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            category_label(&labels, mark.value)
        })
        .show(ui, |plot_ui| {
            plot_ui.line(Line::new("Monthly Job Posting Trend", points.clone()).color(TREND_COLOR));
            plot_ui.points(Points::new("Number of Jobs", points).radius(3.0).color(TREND_COLOR));
        });
}

/// Blend from pale yellow to deep blue as the count approaches the maximum
fn heat_color(count: u64, max: u64) -> Color32 {
    let t = if max == 0 { 0.0 } else { count as f32 / max as f32 };
    let lerp = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color32::from_rgb(lerp(255, 8), lerp(255, 29), lerp(217, 88))
}

fn heatmap_grid(ui: &mut egui::Ui, heatmap: &Heatmap) {
    profiling::scope!("heatmap_grid");

    let max = heatmap.max();
    ui.label(
        RichText::new(format!(
            "{} postings across {} of {} weekday/month cells",
            heatmap.total(),
            heatmap.populated_cells(),
            heatmap.rows.len() * heatmap.columns.len()
        ))
        .weak(),
    );
    egui::Grid::new("weekday_month_heatmap")
        .spacing([2.0, 2.0])
        .min_col_width(HEATMAP_CELL_WIDTH)
        .show(ui, |ui| {
            ui.add_sized([HEATMAP_LABEL_WIDTH, HEATMAP_CELL_HEIGHT], egui::Label::new(""));
            for month in &heatmap.columns {
                let short: String = month.chars().take(3).collect();
                ui.label(RichText::new(short).small());
            }
            ui.end_row();

            for (weekday, row) in heatmap.rows.iter().zip(&heatmap.counts) {
                ui.label(weekday);
                for (month, &count) in heatmap.columns.iter().zip(row) {
                    let (rect, response) = ui.allocate_exact_size(
                        egui::vec2(HEATMAP_CELL_WIDTH, HEATMAP_CELL_HEIGHT),
                        Sense::hover(),
                    );
                    let fill = heat_color(count, max);
                    let text_color = if max > 0 && count * 2 > max {
                        Color32::WHITE
                    } else {
                        Color32::BLACK
                    };
                    let painter = ui.painter();
                    painter.rect_filled(rect, 2.0, fill);
                    painter.text(
                        rect.center(),
                        Align2::CENTER_CENTER,
                        count.to_string(),
                        FontId::proportional(12.0),
                        text_color,
                    );
                    response.on_hover_text(format!("{} in {}: {}", weekday, month, count));
                }
                ui.end_row();
            }
        });
}

fn counts_table(ui: &mut egui::Ui, id: &str, counts: &[CategoryCount]) {
    egui::Grid::new(format!("{}_table", id)).striped(true).show(ui, |ui| {
        ui.strong("Value");
        ui.strong("Count");
        ui.end_row();
        for c in counts {
            ui.label(&c.label);
            ui.label(c.count.to_string());
            ui.end_row();
        }
    });
}

/// Render one panel: its chart, or the notice explaining why it is absent
pub fn render_panel(app: &mut JobScope, ui: &mut egui::Ui, panel: &Panel) {
    ui.horizontal(|ui| {
        ui.heading(&panel.title);
        if let Some(output) = panel.output() {
            if ui.small_button("📋").on_hover_text("Copy as table").clicked() {
                app.copy_output(output);
            }
        }
    });

    match &panel.result {
        Ok(QueryOutput::Counts(counts)) => {
            if counts.is_empty() {
                ui.label(RichText::new("No values to show.").weak());
            } else {
                bar_chart(ui, &panel.title, counts, is_horizontal(&panel.query));
                ui.collapsing(format!("{} (table)", panel.title), |ui| {
                    counts_table(ui, &panel.title, counts);
                });
            }
        }
        Ok(QueryOutput::Heatmap(heatmap)) => heatmap_grid(ui, heatmap),
        Ok(QueryOutput::Trend(trend)) => trend_chart(ui, &panel.title, trend),
        Err(e) => {
            let message = e.user_message();
            match e.severity() {
                Severity::Info => {
                    ui.label(RichText::new(format!("ℹ {}", message)).weak());
                }
                Severity::Warning => {
                    ui.colored_label(WARNING_COLOR, format!("⚠ {}", message));
                }
                Severity::Error => {
                    let color = ui.visuals().error_fg_color;
                    ui.colored_label(color, format!("❌ {}", message));
                }
            }
        }
    }

    ui.add_space(12.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_label() {
        let labels = vec!["January".to_string(), "February".to_string()];
        assert_eq!(category_label(&labels, 0.0), "January");
        assert_eq!(category_label(&labels, 1.0000000001), "February");
        assert_eq!(category_label(&labels, 0.5), "");
        assert_eq!(category_label(&labels, -1.0), "");
        assert_eq!(category_label(&labels, 7.0), "");
    }

    #[test]
    fn test_heat_color_extremes() {
        assert_eq!(heat_color(0, 10), Color32::from_rgb(255, 255, 217));
        assert_eq!(heat_color(10, 10), Color32::from_rgb(8, 29, 88));
        assert_eq!(heat_color(0, 0), Color32::from_rgb(255, 255, 217));
    }

    #[test]
    fn test_rankings_are_horizontal() {
        assert!(is_horizontal(&Query::SeniorityCounts));
        assert!(is_horizontal(&Query::TopValues {
            column: "job_title",
            n: 10
        }));
        assert!(!is_horizontal(&Query::TopValues {
            column: "company_name",
            n: 10
        }));
        assert!(!is_horizontal(&Query::MonthCounts));
    }
}
