use anyhow::Context;
use eframe::egui;
use swatch_core::{PaletteConfig, PaletteLibrary, Swatch, generate_palette, parse_hex, stops};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let library_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "palettes.json".to_string());

    let app = PreviewApp::open(library_path);

    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Swatch Preview",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}

struct PreviewApp {
    library_path: String,
    library: PaletteLibrary,

    // UI state
    selected: Option<String>,
    draft: PaletteConfig,
    swatches: Vec<Swatch>,
    last_error: Option<String>,
}

impl PreviewApp {
    /// Opens `library_path`, or starts from the starter palettes if it can't be read.
    fn open(library_path: String) -> Self {
        let library = match PaletteLibrary::load_json_file(&library_path)
            .with_context(|| format!("load library file: {library_path}"))
        {
            Ok(lib) => lib,
            Err(e) => {
                warn!("{e:#}; starting with the default palettes");
                let mut lib = PaletteLibrary::new("Untitled");
                for cfg in swatch_core::default_palettes() {
                    lib.palettes.insert(cfg.id.clone(), cfg);
                }
                lib
            }
        };

        let selected = library.palettes.keys().next().cloned();
        let draft = selected
            .as_ref()
            .and_then(|id| library.palettes.get(id).cloned())
            .unwrap_or_else(|| PaletteConfig::new("new", "#22C55E"));

        let mut app = Self {
            library_path,
            library,
            selected,
            draft,
            swatches: Vec::new(),
            last_error: None,
        };
        app.regenerate();
        app
    }

    fn regenerate(&mut self) {
        match generate_palette(&self.draft) {
            Ok(swatches) => {
                self.swatches = swatches;
                self.last_error = None;
            }
            Err(e) => self.last_error = Some(e.to_string()),
        }
    }

    fn select(&mut self, id: &str) {
        if let Some(cfg) = self.library.palettes.get(id) {
            self.draft = cfg.clone();
            self.regenerate();
        }
    }

    /// Writes the draft back into the library and saves the file.
    fn save(&mut self) {
        let result = self.draft.validate().map_err(anyhow::Error::from).and_then(|()| {
            self.library
                .palettes
                .insert(self.draft.id.clone(), self.draft.clone());
            self.library.save_json_file(&self.library_path)
        });

        match result {
            Ok(()) => self.selected = Some(self.draft.id.clone()),
            Err(e) => self.last_error = Some(format!("{e:#}")),
        }
    }

    fn editor(&mut self, ui: &mut egui::Ui) {
        ui.heading("Config");
        ui.separator();

        let mut changed = false;

        ui.horizontal(|ui| {
            ui.label("Id:");
            ui.text_edit_singleline(&mut self.draft.id);
        });
        ui.horizontal(|ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.draft.name);
        });
        ui.horizontal(|ui| {
            ui.label("Seed:");
            changed |= ui.text_edit_singleline(&mut self.draft.value).changed();
        });

        ui.separator();
        changed |= ui
            .add(egui::Slider::new(&mut self.draft.h, -30.0..=30.0).text("hue spread"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.draft.s, -10.0..=10.0).text("saturation spread"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.draft.l_min, 0.0..=100.0).text("lMin"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.draft.l_max, 0.0..=100.0).text("lMax"))
            .changed();
        changed |= ui
            .checkbox(&mut self.draft.use_lightness, "distribute lightness (off: luminance)")
            .changed();

        if changed {
            self.regenerate();
        }

        ui.separator();
        if ui.button("Save to library").clicked() {
            self.save();
        }
    }
}

fn swatch_color(hex: &str) -> egui::Color32 {
    let rgb = parse_hex(hex).unwrap_or_default();
    egui::Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Swatch Preview");
                ui.separator();
                ui.label(format!("File: {}", self.library_path));
                ui.separator();
                ui.label(format!("Library: {}", self.library.name));
            });

            ui.horizontal(|ui| {
                let ids: Vec<String> = self.library.palettes.keys().cloned().collect();
                let before = self.selected.clone();

                ui.label("Palette:");
                egui::ComboBox::from_id_source("palette_select")
                    .selected_text(self.selected.clone().unwrap_or_else(|| "(none)".to_string()))
                    .show_ui(ui, |ui| {
                        for id in ids {
                            let label = id.clone();
                            ui.selectable_value(&mut self.selected, Some(id), label);
                        }
                    });

                if self.selected != before {
                    if let Some(id) = self.selected.clone() {
                        self.select(&id);
                    }
                }
            });

            if let Some(err) = &self.last_error {
                ui.colored_label(egui::Color32::RED, format!("Error: {err}"));
            }
        });

        egui::SidePanel::left("editor").show(ctx, |ui| self.editor(ui));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Swatches");
            ui.separator();

            if self.swatches.is_empty() {
                ui.label("(nothing generated)");
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("swatch_grid")
                    .striped(true)
                    .num_columns(8)
                    .show(ui, |ui| {
                        ui.strong("");
                        ui.strong("Stop");
                        ui.strong("Hex");
                        ui.strong("H");
                        ui.strong("H tweak");
                        ui.strong("S");
                        ui.strong("S tweak");
                        ui.strong("L");
                        ui.end_row();

                        for sw in &self.swatches {
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(56.0, 20.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 2.0, swatch_color(&sw.hex));

                            if stops::is_sentinel(sw.stop) {
                                ui.weak(format!("{} (sentinel)", sw.stop));
                            } else {
                                ui.label(sw.stop.to_string());
                            }
                            ui.monospace(&sw.hex);
                            ui.label(format!("{:.1}", sw.h));
                            ui.label(format!("{:+.1}", sw.h_scale));
                            ui.label(format!("{:.1}", sw.s));
                            ui.label(format!("{:+.1}", sw.s_scale));
                            ui.label(format!("{:.1}", sw.l));
                            ui.end_row();
                        }
                    });
            });
        });
    }
}
