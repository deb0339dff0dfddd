use eframe::egui::{CentralPanel, Context, Slider, TopBottomPanel};
use eframe::{Frame, Storage};

use crate::Cli;
use crate::app::state::BarGraphAppState;
use crate::config::{DF, MAX_BAR_VALUE, MIN_BAR_VALUE};
use crate::control::BarGraphControl;
use crate::ui::{UI_CONFIG, setup_custom_visuals};

pub struct BarGraphApp {
    state: BarGraphAppState,
    control: BarGraphControl,
}

impl BarGraphApp {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut state: BarGraphAppState = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            BarGraphAppState::default()
        };

        // CLI wins over persisted state
        if let Some(value) = args.value {
            state.bar_value = value;
        }
        if args.animate {
            state.animate = true;
        }

        setup_custom_visuals(&cc.egui_ctx);

        let mut control = BarGraphControl::new();
        let repaint_ctx = cc.egui_ctx.clone();
        control.on_invalidate(move |_| repaint_ctx.request_repaint());
        control.set_bar_value(state.bar_value);
        state.bar_value = control.bar_value();

        log::info!(
            "Bar graph demo started (value {:.1}, animate {})",
            state.bar_value,
            state.animate
        );

        Self { state, control }
    }

    fn tick_animation(&mut self, ctx: &Context) {
        if !self.state.animate {
            return;
        }
        let dt = ctx.input(|i| i.stable_dt) as f64;
        if self.state.advance_sweep(dt) && DF.log_animation {
            log::info!("Sweep wrapped around");
        }
        ctx.request_repaint();
    }

    fn render_toolbar(&mut self, ctx: &Context) {
        TopBottomPanel::top("toolbar")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label("Value");
                    ui.add(
                        Slider::new(&mut self.state.bar_value, MIN_BAR_VALUE..=MAX_BAR_VALUE)
                            .fixed_decimals(1),
                    );
                    ui.checkbox(&mut self.state.animate, "Sweep");
                });
            });
    }
}

impl eframe::App for BarGraphApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.tick_animation(ctx);
        self.render_toolbar(ctx);

        self.control.set_bar_value(self.state.bar_value);

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                ui.add(&mut self.control);
            });
    }

    fn save(&mut self, storage: &mut dyn Storage) {
        self.state.bar_value = self.control.bar_value();
        eframe::set_value(storage, eframe::APP_KEY, &self.state);
    }
}
