//! Source code generation for draw commands.
//!
//! The output is display text only; nothing here is executed.

use crate::path::DrawCommand;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Target syntax for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeStyle {
    /// SwiftUI `Path { p in ... }` builder.
    #[default]
    SwiftUi,
    /// kurbo `BezPath` builder.
    Kurbo,
}

impl CodeStyle {
    /// Cycle to the next code style.
    pub fn next(self) -> Self {
        match self {
            CodeStyle::SwiftUi => CodeStyle::Kurbo,
            CodeStyle::Kurbo => CodeStyle::SwiftUi,
        }
    }

    /// Human readable name.
    pub fn label(self) -> &'static str {
        match self {
            CodeStyle::SwiftUi => "SwiftUI",
            CodeStyle::Kurbo => "kurbo",
        }
    }
}

/// Render a coordinate in shortest round-trip form, keeping `.0` on whole
/// numbers.
pub fn format_coordinate(value: f64) -> String {
    format!("{value:?}")
}

fn swift_point(p: Point) -> String {
    format!(
        "CGPoint(x: {}, y: {})",
        format_coordinate(p.x),
        format_coordinate(p.y)
    )
}

fn kurbo_point(p: Point) -> String {
    format!("({}, {})", format_coordinate(p.x), format_coordinate(p.y))
}

fn swift_statement(command: &DrawCommand) -> String {
    match *command {
        DrawCommand::MoveTo(to) => format!("p.move(to: {})", swift_point(to)),
        DrawCommand::LineTo(to) => format!("p.addLine(to: {})", swift_point(to)),
        DrawCommand::QuadTo { to, control } => format!(
            "p.addQuadCurve(to: {}, control: {})",
            swift_point(to),
            swift_point(control)
        ),
        DrawCommand::CurveTo {
            to,
            control1,
            control2,
        } => format!(
            "p.addCurve(to: {}, control1: {}, control2: {})",
            swift_point(to),
            swift_point(control1),
            swift_point(control2)
        ),
    }
}

fn kurbo_statement(command: &DrawCommand) -> String {
    match *command {
        DrawCommand::MoveTo(to) => format!("p.move_to({});", kurbo_point(to)),
        DrawCommand::LineTo(to) => format!("p.line_to({});", kurbo_point(to)),
        DrawCommand::QuadTo { to, control } => format!(
            "p.quad_to({}, {});",
            kurbo_point(control),
            kurbo_point(to)
        ),
        DrawCommand::CurveTo {
            to,
            control1,
            control2,
        } => format!(
            "p.curve_to({}, {}, {});",
            kurbo_point(control1),
            kurbo_point(control2),
            kurbo_point(to)
        ),
    }
}

/// One indented line per command.
fn body(commands: &[DrawCommand], statement: fn(&DrawCommand) -> String) -> String {
    commands
        .iter()
        .map(|command| format!("    {}\n", statement(command)))
        .collect()
}

/// Generate source text that rebuilds the path described by `commands`.
pub fn generate(commands: &[DrawCommand], style: CodeStyle) -> String {
    match style {
        CodeStyle::SwiftUi if commands.is_empty() => "Path()".to_string(),
        CodeStyle::SwiftUi => format!("Path {{ p in\n{}}}", body(commands, swift_statement)),
        CodeStyle::Kurbo if commands.is_empty() => "BezPath::new()".to_string(),
        CodeStyle::Kurbo => format!(
            "{{\n    let mut p = BezPath::new();\n{}    p\n}}",
            body(commands, kurbo_statement)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<DrawCommand> {
        vec![
            DrawCommand::MoveTo(Point::new(0.0, 0.0)),
            DrawCommand::LineTo(Point::new(50.0, 0.0)),
            DrawCommand::QuadTo {
                to: Point::new(100.0, 0.0),
                control: Point::new(150.0, -20.0),
            },
            DrawCommand::CurveTo {
                to: Point::new(200.0, 100.0),
                control1: Point::new(50.0, 20.0),
                control2: Point::new(200.0, 100.0),
            },
        ]
    }

    #[test]
    fn test_empty_swift() {
        assert_eq!(generate(&[], CodeStyle::SwiftUi), "Path()");
    }

    #[test]
    fn test_empty_kurbo() {
        assert_eq!(generate(&[], CodeStyle::Kurbo), "BezPath::new()");
    }

    #[test]
    fn test_format_coordinate() {
        assert_eq!(format_coordinate(10.0), "10.0");
        assert_eq!(format_coordinate(-20.0), "-20.0");
        assert_eq!(format_coordinate(0.5), "0.5");
    }

    #[test]
    fn test_swift_output() {
        let expected = "Path { p in\n\
            \x20   p.move(to: CGPoint(x: 0.0, y: 0.0))\n\
            \x20   p.addLine(to: CGPoint(x: 50.0, y: 0.0))\n\
            \x20   p.addQuadCurve(to: CGPoint(x: 100.0, y: 0.0), control: CGPoint(x: 150.0, y: -20.0))\n\
            \x20   p.addCurve(to: CGPoint(x: 200.0, y: 100.0), control1: CGPoint(x: 50.0, y: 20.0), control2: CGPoint(x: 200.0, y: 100.0))\n\
            }";
        assert_eq!(generate(&sample(), CodeStyle::SwiftUi), expected);
    }

    #[test]
    fn test_kurbo_output() {
        let expected = "{\n\
            \x20   let mut p = BezPath::new();\n\
            \x20   p.move_to((0.0, 0.0));\n\
            \x20   p.line_to((50.0, 0.0));\n\
            \x20   p.quad_to((150.0, -20.0), (100.0, 0.0));\n\
            \x20   p.curve_to((50.0, 20.0), (200.0, 100.0), (200.0, 100.0));\n\
            \x20   p\n\
            }";
        assert_eq!(generate(&sample(), CodeStyle::Kurbo), expected);
    }

    #[test]
    fn test_single_command_output() {
        let commands = [DrawCommand::MoveTo(Point::new(10.0, 10.0))];
        assert_eq!(
            generate(&commands, CodeStyle::SwiftUi),
            "Path { p in\n    p.move(to: CGPoint(x: 10.0, y: 10.0))\n}"
        );
        assert_eq!(
            generate(&commands, CodeStyle::Kurbo),
            "{\n    let mut p = BezPath::new();\n    p.move_to((10.0, 10.0));\n    p\n}"
        );
    }

    #[test]
    fn test_one_statement_per_command() {
        let code = generate(&sample(), CodeStyle::SwiftUi);
        assert_eq!(code.lines().count(), sample().len() + 2);
    }

    #[test]
    fn test_code_style_cycle() {
        assert_eq!(CodeStyle::SwiftUi.next(), CodeStyle::Kurbo);
        assert_eq!(CodeStyle::Kurbo.next(), CodeStyle::SwiftUi);
    }
}
