// src/render/egui_surface.rs

use egui::{Color32, Painter, Pos2, Rect, Vec2};

use crate::render::{Color, RenderSurface};

/// Draws onto an egui [`Painter`], offsetting everything by `origin` (the top
/// left corner of the panel the grid lives in).
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

pub fn to_color32(color: Color) -> Color32 {
    let (r, g, b) = color.rgb();
    Color32::from_rgb(r, g, b)
}

impl RenderSurface for PainterSurface<'_> {
    fn fill_rectangle(&mut self, color: Color, x: f32, y: f32, width: f32, height: f32) {
        let rect = Rect::from_min_size(self.origin + Vec2::new(x, y), Vec2::new(width, height));
        self.painter.rect_filled(rect, 0.0, to_color32(color));
    }

    fn fill_circle(&mut self, color: Color, cx: f32, cy: f32, radius: f32) {
        self.painter
            .circle_filled(self.origin + Vec2::new(cx, cy), radius, to_color32(color));
    }
}
