// src/main.rs
use nannou::prelude::*;
use rand::Rng;

use curvevis::{
    config::{AnimationConfig, Config, ConfigSource},
    controllers::{OscCommand, OscController, OscSender},
    draw::{curve_draw, grid_draw, DrawParams, Transform2D},
    services::FrameExporter,
    views::{Simulation, SimulationSettings},
    CurvevisError, CurvevisResult,
};

struct Model {
    // Core components:
    sim: Simulation,

    // Comms components:
    osc_controller: OscController,
    osc_sender: OscSender,

    // Rendering components:
    transform: Transform2D,
    background_color: Rgb<f32>,
    grid_params: DrawParams,
    axis_params: DrawParams,
    curve_params: DrawParams,
    random: rand::rngs::ThreadRng,

    // Keyboard control steps
    animation: AnimationConfig,

    // Frame export:
    exporter: FrameExporter,
    export_requested: bool,

    // Message
    debug_flag: bool,
}

fn main() {
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config, then start logging at the configured level
    let loaded = Config::load();
    let level = match &loaded {
        Ok((config, _)) => config.log_level(),
        Err(_) => tracing::Level::INFO,
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match loaded {
        Ok((config, ConfigSource::File(path))) => {
            tracing::info!("loaded configuration from {}", path.display());
            config
        }
        Ok((config, ConfigSource::Unreadable { path, reason })) => {
            tracing::warn!(
                "could not read {} ({}), using default configuration",
                path.display(),
                reason
            );
            config
        }
        Ok((config, ConfigSource::Defaults)) => {
            tracing::warn!("no config.toml found, using default configuration");
            config
        }
        Err(e) => fatal(e),
    };

    build_model(app, config).unwrap_or_else(|e| fatal(e))
}

fn fatal(err: CurvevisError) -> ! {
    tracing::error!("startup failed: {}", err);
    std::process::exit(1);
}

fn build_model(app: &App, config: Config) -> CurvevisResult<Model> {
    // Create OSC controller
    let osc_controller = OscController::new(config.osc.rx_port)?;
    let osc_sender = OscSender::new(config.osc.rx_port)?;

    // Create window
    app.new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .msaa_samples(config.rendering.msaa_samples)
        .view(view)
        .key_pressed(key_pressed)
        .build()
        .map_err(|e| CurvevisError::window(format!("{:?}", e)))?;

    let sim = Simulation::new(SimulationSettings::from_config(&config));
    tracing::info!(
        speed = sim.state().speed,
        size = sim.state().size,
        samples = config.rendering.curve_samples,
        "simulation ready"
    );

    let exporter = FrameExporter::new(config.resolve_output_dir());
    tracing::info!("frame snapshots go to {}", exporter.output_dir().display());

    let style = &config.style;
    let background = style.background_color;

    Ok(Model {
        sim,
        osc_controller,
        osc_sender,

        transform: Transform2D::new(
            config.rendering.pixels_per_unit,
            config.rendering.origin_offset,
        ),
        background_color: rgb(background[0], background[1], background[2]),
        grid_params: DrawParams::from_rgb(style.grid_color, style.grid_stroke_weight),
        axis_params: DrawParams::from_rgb(style.axis_color, style.grid_stroke_weight),
        curve_params: DrawParams::from_rgb(style.curve_color, style.curve_stroke_weight),
        random: rand::thread_rng(),

        animation: config.animation.clone(),

        exporter,
        export_requested: false,

        debug_flag: false,
    })
}

fn key_pressed(_app: &App, model: &mut Model, key: Key) {
    let state = model.sim.state();
    let speed = state.speed;
    let target_size = model.sim.target_size();
    let step = &model.animation;

    match key {
        Key::Right => model.osc_sender.send_speed(speed + step.speed_step),
        Key::Left => model.osc_sender.send_speed(speed - step.speed_step),
        Key::Up => model
            .osc_sender
            .send_size(target_size + step.size_step, step.size_tween_duration),
        Key::Down => model.osc_sender.send_size(
            (target_size - step.size_step).max(0.0),
            step.size_tween_duration,
        ),
        Key::R => model.osc_sender.send_reset(),
        Key::G => model.osc_sender.send_toggle_grid(),
        Key::I => model.osc_sender.send_curve_color(
            model.random.gen(),
            model.random.gen(),
            model.random.gen(),
        ),
        Key::S => model.osc_sender.send_export_frame(),

        /***************** Below functions aren't implemented in OSC ****************** */
        Key::P => {
            // stats overlay, plus a once-a-second info log
            model.debug_flag = !model.debug_flag;
        }
        _ => (),
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    let dt = update.since_last.as_secs_f32();

    // Process OSC messages
    model.osc_controller.process_messages();
    launch_commands(model);

    /*********************  Main update for the curve **********************/
    model.sim.update(dt);
    /***********************************************************************/

    if model.export_requested {
        model.export_requested = false;
        if let Err(e) = model.exporter.export(&model.sim.render_output()) {
            tracing::error!("frame export failed: {}", e);
        }
    }

    if model.debug_flag && model.sim.animator().frame_count() % 60 == 0 {
        tracing::info!(
            fps = model.sim.animator().fps(),
            elapsed = model.sim.animator().elapsed(),
            accumulated = model.sim.state().accumulated_value(),
            "frame stats"
        );
    }
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(model.background_color);

    let output = model.sim.render_output();
    grid_draw::draw_grid(
        &draw,
        &output.grid,
        &model.transform,
        &model.grid_params,
        &model.axis_params,
    );
    curve_draw::draw_curve(&draw, &output.curve, &model.transform, &model.curve_params);

    // Handle FPS display
    if model.debug_flag {
        let win = app.window_rect();
        let size = if model.sim.is_tweening() {
            format!("{:.2} -> {:.2}", output.size, model.sim.target_size())
        } else {
            format!("{:.2}", output.size)
        };
        let text = format!(
            "FPS: {:.1}  time: {:.1}s\nspeed: {:.2}  size: {}\nvalue: {:.2}",
            model.sim.animator().fps(),
            model.sim.animator().elapsed(),
            output.speed,
            size,
            output.accumulated_value
        );
        draw.text(&text)
            .x_y(win.left() + 110.0, win.top() - 40.0)
            .color(RED);
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        tracing::error!("failed to render frame: {:?}", e);
    }
}

// ******************************* OSC Launcher *******************************

fn launch_commands(model: &mut Model) {
    for command in model.osc_controller.take_commands() {
        match command {
            OscCommand::SetSpeed { speed } => {
                model.sim.set_speed(speed);
                tracing::info!("speed set to {}", speed);
            }
            OscCommand::SetSize { size, duration } => {
                model
                    .sim
                    .tween_size(size, duration, model.animation.size_tween_easing);
                tracing::info!("size set to {} over {}s", size, duration);
            }
            OscCommand::Reset => {
                model.sim.reset();
                tracing::info!("simulation reset");
            }
            OscCommand::CurveColor { r, g, b } => {
                model.curve_params.color = rgb(r, g, b);
            }
            OscCommand::ToggleGrid => model.sim.toggle_grid(),
            OscCommand::ExportFrame => model.export_requested = true,
        }
    }
}
