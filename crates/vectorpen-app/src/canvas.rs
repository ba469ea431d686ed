//! Canvas painting and pointer routing.

use egui::epaint::{CubicBezierShape, QuadraticBezierShape};
use egui::{Color32, Pos2, Stroke};
use kurbo::{BezPath, PathEl, Point};
use vectorpen_core::{Editor, Marker, Modifiers};

const PATH_STROKE_WIDTH: f32 = 2.0;
const ANCHOR_RADIUS: f32 = 5.0;
const CONTROL_SIZE: f32 = 7.0;
const GRID_COLOR: Color32 = Color32::from_gray(230);

/// Lay out the canvas, feed pointer input to the editor, then paint.
pub fn show(ui: &mut egui::Ui, editor: &mut Editor) {
    let (response, painter) =
        ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
    handle_pointer(ui, &response, editor);
    paint(&painter, editor, response.rect);
}

fn handle_pointer(ui: &egui::Ui, response: &egui::Response, editor: &mut Editor) {
    let (pressed, released, down, pos, modifiers) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.interact_pos(),
            to_modifiers(&i.modifiers),
        )
    });
    let Some(pos) = pos else {
        return;
    };
    let origin = response.rect.min;
    let location = to_canvas(pos, origin);

    if response.double_clicked() {
        editor.double_click(location);
    }
    if pressed && response.hovered() {
        editor.pointer_down(location, modifiers);
    }
    if !editor.is_interacting() {
        return;
    }
    if released {
        editor.pointer_up(location, modifiers);
    } else if down && !pressed {
        if response.rect.contains(pos) {
            editor.pointer_drag(location, modifiers);
        } else {
            editor.pointer_cancel();
        }
    }
}

fn paint(painter: &egui::Painter, editor: &Editor, rect: egui::Rect) {
    let origin = rect.min;
    let bounds = kurbo::Rect::new(0.0, 0.0, rect.width() as f64, rect.height() as f64);

    let grid_stroke = Stroke::new(1.0, GRID_COLOR);
    for line in editor.grid_lines(bounds) {
        painter.line_segment([to_screen(line.p0, origin), to_screen(line.p1, origin)], grid_stroke);
    }

    paint_path(
        painter,
        &editor.bez_path(),
        origin,
        Stroke::new(PATH_STROKE_WIDTH, Color32::BLACK),
    );

    for marker in editor.markers() {
        paint_marker(painter, &marker, origin);
    }
}

fn paint_path(painter: &egui::Painter, path: &BezPath, origin: Pos2, stroke: Stroke) {
    let mut current = Point::ZERO;
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => current = p,
            PathEl::LineTo(p) => {
                painter.line_segment([to_screen(current, origin), to_screen(p, origin)], stroke);
                current = p;
            }
            PathEl::QuadTo(c, p) => {
                let points = [current, c, p].map(|q| to_screen(q, origin));
                painter.add(QuadraticBezierShape::from_points_stroke(
                    points,
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                ));
                current = p;
            }
            PathEl::CurveTo(c1, c2, p) => {
                let points = [current, c1, c2, p].map(|q| to_screen(q, origin));
                painter.add(CubicBezierShape::from_points_stroke(
                    points,
                    false,
                    Color32::TRANSPARENT,
                    stroke,
                ));
                current = p;
            }
            PathEl::ClosePath => {}
        }
    }
}

fn paint_marker(painter: &egui::Painter, marker: &Marker, origin: Pos2) {
    if let Some(lines) = marker.guide_lines() {
        for line in lines {
            painter.line_segment(
                [to_screen(line.p0, origin), to_screen(line.p1, origin)],
                Stroke::new(1.0, Color32::GRAY),
            );
        }
    }
    if let Some(cps) = marker.controls {
        for p in [cps.primary, cps.secondary] {
            let rect = egui::Rect::from_center_size(
                to_screen(p, origin),
                egui::vec2(CONTROL_SIZE, CONTROL_SIZE),
            );
            painter.rect(
                rect,
                egui::CornerRadius::same(2),
                Color32::WHITE,
                Stroke::new(1.0, Color32::BLACK),
                egui::StrokeKind::Middle,
            );
        }
    }

    let (width, color) = if marker.selected {
        (2.0, Color32::BLUE)
    } else {
        (1.0, Color32::BLACK)
    };
    painter.circle(
        to_screen(marker.anchor, origin),
        ANCHOR_RADIUS,
        Color32::WHITE,
        Stroke::new(width, color),
    );
}

fn to_modifiers(m: &egui::Modifiers) -> Modifiers {
    Modifiers {
        shift: m.shift,
        ctrl: m.ctrl,
        alt: m.alt,
        meta: m.mac_cmd,
    }
}

/// Screen position to canvas coordinates (origin at the canvas corner).
fn to_canvas(pos: Pos2, origin: Pos2) -> Point {
    Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64)
}

/// Canvas coordinates to a screen position.
fn to_screen(p: Point, origin: Pos2) -> Pos2 {
    egui::pos2(origin.x + p.x as f32, origin.y + p.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_screen_roundtrip() {
        let origin = egui::pos2(20.0, 40.0);
        let p = Point::new(100.0, 50.0);
        let screen = to_screen(p, origin);
        assert_eq!(screen, egui::pos2(120.0, 90.0));
        assert_eq!(to_canvas(screen, origin), p);
    }

    #[test]
    fn test_to_modifiers() {
        let m = egui::Modifiers {
            alt: true,
            shift: true,
            ..Default::default()
        };
        let converted = to_modifiers(&m);
        assert!(converted.alt);
        assert!(converted.shift);
        assert!(!converted.ctrl);
    }
}
