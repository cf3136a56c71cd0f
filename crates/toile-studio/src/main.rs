//! Headless demo driver for the toile engine.
//!
//! Builds a small scene, arms some animations, and runs the tick loop
//! for a few simulated seconds, printing a draw-stream summary at the
//! end. Stands in for the windowed editor front end.

use anyhow::Result;
use log::info;

use toile_engine::coords::{Vec2, Viewport};
use toile_engine::logging::init_logging;
use toile_engine::paint::Rgba;
use toile_engine::render::DrawList;
use toile_engine::scene::{Geometry, ShapeParams, Style};
use toile_engine::time::FrameClock;
use toile_engine::Stage;

const TICKS: u32 = 600;

fn main() -> Result<()> {
    init_logging(None);

    let mut stage = Stage::new(viewport_from_args()?);
    populate(&mut stage)?;

    // Select the circle, arm rotate + color on it, start it running.
    let circle = stage
        .hit_test(Vec2::new(400.0, 170.0))
        .ok_or_else(|| anyhow::anyhow!("demo circle not found under its own center"))?;
    stage.toggle_select_at(Vec2::new(400.0, 170.0));
    stage.cycle_armed_forward(); // rotate
    stage.toggle_armed_animation();
    stage.cycle_armed_forward(); // zoom
    stage.cycle_armed_forward(); // color
    stage.toggle_armed_animation();
    stage.toggle_animation();

    let mut clock = FrameClock::new();
    for _ in 0..TICKS {
        let ft = clock.tick();
        stage.tick(ft.dt);
    }

    let shape = stage
        .store()
        .get(circle)
        .ok_or_else(|| anyhow::anyhow!("demo circle vanished during the run"))?;
    info!(
        "after {TICKS} ticks ({:.2}s simulated): rotation {:.2} deg, color {:?}",
        stage.elapsed(),
        shape.rotation,
        shape.color
    );

    let mut list = DrawList::new();
    stage.record_into(&mut list);
    info!("draw stream: {} commands", list.len());
    for item in list.iter_in_paint_order() {
        info!(
            "  z {:>3}  {:<16} {}",
            item.key.z.0,
            item.cmd.geometry.kind().to_string(),
            describe(&item.cmd.geometry)
        );
    }

    Ok(())
}

/// Viewport from `toile-studio [width height]`, defaulting to 800x600.
fn viewport_from_args() -> Result<Viewport> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let viewport = match args.as_slice() {
        [] => Viewport::new(800.0, 600.0),
        [w, h] => Viewport::new(w.parse()?, h.parse()?),
        _ => anyhow::bail!("usage: toile-studio [width height]"),
    };
    if !viewport.is_valid() {
        anyhow::bail!("viewport dimensions must be positive and finite");
    }
    Ok(viewport)
}

fn populate(stage: &mut Stage) -> Result<()> {
    let red = Rgba::opaque(220, 60, 60);
    let green = Rgba::opaque(60, 200, 90);
    let blue = Rgba::opaque(70, 110, 240);

    stage.create(ShapeParams::Circle { x: 400.0, y: 170.0, radius: 60.0 }, Style::Filled, red)?;
    stage.create(ShapeParams::Rect { x: 80.0, y: 380.0, width: 200.0, height: 50.0 }, Style::Filled, green)?;
    stage.create(
        ShapeParams::Line { x1: 100.0, y1: 100.0, x2: 300.0, y2: 220.0, thickness: 3.0 },
        Style::Filled,
        blue,
    )?;
    stage.create(
        ShapeParams::Polygon { cx: 600.0, cy: 420.0, radius: 70.0, sides: 6 },
        Style::Empty,
        blue,
    )?;
    stage.create(
        ShapeParams::RoundedRect { x1: 480.0, y1: 60.0, x2: 700.0, y2: 150.0, corner_radius: 18.0 },
        Style::Filled,
        green,
    )?;
    Ok(())
}

fn describe(geometry: &Geometry) -> String {
    let c = geometry.center();
    format!("center ({:.0}, {:.0})", c.x, c.y)
}
