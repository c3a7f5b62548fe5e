use log::{error, info};

use crate::audio::Music;
use crate::config::AppConfig;
use crate::file_handler::FileHandler;
use crate::input::{InputHandler, route_event};
use crate::renderer::Renderer;
use crate::stamps::StampLibrary;
use crate::state::{AppState, Effect};

/// The eframe application: owns the session state and everything that talks
/// to the outside world on its behalf.
pub struct CastleApp {
    state: AppState,
    input: InputHandler,
    renderer: Renderer,
    music: Music,
    files: FileHandler,
}

impl CastleApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let stamps = StampLibrary::load(&config.stamps_dir, config.max_stamps);
        info!("Loaded {} stamps from {}", stamps.len(), config.stamps_dir.display());

        let mut app = Self {
            input: InputHandler::new(config.clone()),
            renderer: Renderer::new(),
            music: Music::from_config(&config),
            files: FileHandler::new(config.output_dir.clone()),
            state: AppState::new(config, stamps),
        };
        let startup = app.state.startup_effect();
        app.apply_effect(startup);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::PlayTitleMusic => self.music.play_title(),
            Effect::PlayDrawingMusic => self.music.play_random_drawing(),
            Effect::SavePicture => {
                if let Err(err) = self.files.save(self.state.canvas()) {
                    error!("Failed to save picture: {}", err);
                }
            }
        }
    }
}

impl eframe::App for CastleApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
                let origin = response.rect.min;
                self.input.set_origin(origin);

                // Every pending event, in arrival order, before drawing the frame
                for event in self.input.process_input(ctx) {
                    if let Some(effect) = route_event(&event, &mut self.state) {
                        self.apply_effect(effect);
                    }
                }

                let pointer = self.input.pointer_pos();
                self.renderer.render(ctx, &painter, origin, &self.state, pointer);
            });
    }
}
