//! Core application state and lifecycle.

use crate::canvas;
use crate::shortcuts::ShortcutRegistry;
use vectorpen_core::{Direction, Editor, EditorConfig};

/// Configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "vectorpen.json";

/// Height of the generated code pane.
const CODE_PANE_HEIGHT: f32 = 150.0;

const ARROW_KEYS: [(egui::Key, Direction); 4] = [
    (egui::Key::ArrowUp, Direction::Up),
    (egui::Key::ArrowDown, Direction::Down),
    (egui::Key::ArrowLeft, Direction::Left),
    (egui::Key::ArrowRight, Direction::Right),
];

/// The VectorPen window: canvas on top, generated code below.
pub struct App {
    editor: Editor,
    show_shortcuts: bool,
}

impl App {
    pub fn new(config: EditorConfig) -> Self {
        log::info!(
            "Editor ready (grid: {:?}, code style: {})",
            config.grid,
            config.code_style.label()
        );
        Self {
            editor: Editor::new(config),
            show_shortcuts: false,
        }
    }

    /// Open the native window and run the event loop.
    pub fn run(config: EditorConfig) -> eframe::Result<()> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([960.0, 720.0])
                .with_title("VectorPen"),
            ..Default::default()
        };

        eframe::run_native(
            "VectorPen",
            options,
            Box::new(move |_cc| Ok(Box::new(App::new(config)))),
        )
    }

    /// Route arrow and delete keys to the editor.
    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        let (directions, amplified, delete) = ctx.input(|i| {
            let directions: Vec<Direction> = ARROW_KEYS
                .iter()
                .filter(|(key, _)| i.key_pressed(*key))
                .map(|(_, direction)| *direction)
                .collect();
            let delete = i.key_pressed(egui::Key::Delete) || i.key_pressed(egui::Key::Backspace);
            (directions, i.modifiers.shift, delete)
        });

        for direction in directions {
            self.editor.key_direction(direction, amplified);
        }
        if delete {
            self.editor.delete_key();
        }
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let drawing = self.editor.drawing();
            ui.label(format!(
                "{} point(s), {} selected",
                drawing.len(),
                drawing.selection().len()
            ));
            ui.separator();

            let style = self.editor.config().code_style;
            if ui.button(format!("Code: {}", style.label())).clicked() {
                self.editor.set_code_style(style.next());
            }
            ui.toggle_value(&mut self.show_shortcuts, "Shortcuts");
        });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| self.toolbar(ui));

        egui::TopBottomPanel::bottom("code")
            .resizable(true)
            .default_height(CODE_PANE_HEIGHT)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let code = egui::RichText::new(self.editor.code()).monospace();
                        ui.add(egui::Label::new(code).selectable(true));
                    });
            });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(egui::Color32::WHITE))
            .show(ctx, |ui| canvas::show(ui, &mut self.editor));

        if self.show_shortcuts {
            egui::Window::new("Shortcuts")
                .open(&mut self.show_shortcuts)
                .resizable(false)
                .show(ctx, |ui| {
                    egui::Grid::new("shortcut_grid").striped(true).show(ui, |ui| {
                        for shortcut in ShortcutRegistry::all() {
                            ui.monospace(shortcut.format());
                            ui.label(shortcut.description);
                            ui.end_row();
                        }
                    });
                });
        }
    }
}
