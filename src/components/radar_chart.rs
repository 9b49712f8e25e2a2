use crate::app::App;
use crate::charts::{PolarSeries, RadarSeries, axis_direction};
use crate::components::Component;
use crate::theme::{BRAND, Theme};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::symbols::Marker;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Context, Line as CanvasLine};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

const BOUND: f64 = 1.45;
const LABEL_RADIUS: f64 = 1.12;

/// Risk profile of the proposal against the ideal thresholds
pub struct RadarChart;

impl Component for RadarChart {
    fn render(&self, frame: &mut Frame, area: Rect, app: &App) {
        let radar = &app.evaluation().charts.radar;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .style(Theme::border_style())
                    .title(Span::styled(
                        " Risk Profile: Proposal vs. Ideal ",
                        Theme::title_style(),
                    )),
            )
            .marker(Marker::Braille)
            .x_bounds([-BOUND, BOUND])
            .y_bounds([-BOUND, BOUND])
            .paint(|ctx| {
                let n = radar.categories().len();

                // grid: spokes and the outer ring
                for i in 0..n {
                    let (x, y) = axis_direction(i, n);
                    ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, Color::DarkGray));
                }
                draw_ring(ctx, n, 0.5, Color::DarkGray);
                draw_ring(ctx, n, 1.0, Color::DarkGray);
                ctx.layer();

                draw_polygon(ctx, radar, &radar.ideal, Color::Green);
                draw_polygon(ctx, radar, &radar.proposal, BRAND);
                ctx.layer();

                for (i, label) in radar.categories().iter().enumerate() {
                    let (x, y) = axis_direction(i, n);
                    let text_x = x * LABEL_RADIUS - if x < -0.1 { 0.35 } else { 0.0 };
                    ctx.print(
                        text_x,
                        y * LABEL_RADIUS,
                        Span::styled(*label, Style::default().fg(Color::Gray)),
                    );
                }
                ctx.print(
                    -BOUND,
                    -BOUND,
                    Span::styled(radar.proposal.name, Theme::reference_style()),
                );
                ctx.print(
                    BOUND - 0.9,
                    -BOUND,
                    Span::styled(radar.ideal.name, Style::default().fg(Color::Green)),
                );
            });

        frame.render_widget(canvas, area);
    }
}

fn draw_polygon(ctx: &mut Context, radar: &RadarSeries, series: &PolarSeries, color: Color) {
    let points = radar.vertices(series);
    for (i, &(x1, y1)) in points.iter().enumerate() {
        let (x2, y2) = points[(i + 1) % points.len()];
        ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
    }
}

fn draw_ring(ctx: &mut Context, n: usize, radius: f64, color: Color) {
    for i in 0..n {
        let (x1, y1) = axis_direction(i, n);
        let (x2, y2) = axis_direction((i + 1) % n, n);
        ctx.draw(&CanvasLine::new(
            x1 * radius,
            y1 * radius,
            x2 * radius,
            y2 * radius,
            color,
        ));
    }
}
