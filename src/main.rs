use std::path::PathBuf;

use flatshade::prelude::*;
use log::info;

const DEFAULT_FRAMES: u32 = 60;
const ANGLE_STEP: f32 = 0.05;
const OUTPUT_DIR: &str = "frames";

/// Usage: `flatshade [MODEL.obj] [FRAMES]`
///
/// Renders a spinning model (the unit cube when no OBJ is given) into
/// numbered PNG files under `frames/`.
fn main() -> flatshade::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut args = std::env::args().skip(1);
    let model_path = args.next().map(PathBuf::from);
    let frames = args
        .next()
        .and_then(|n| n.parse().ok())
        .unwrap_or(DEFAULT_FRAMES);

    let (mesh, distance) = match &model_path {
        Some(path) => (Mesh::from_obj(path)?, 8.0),
        None => (Mesh::unit_cube().translated(Vec4::new(-0.5, -0.5, -0.5)), 3.0),
    };

    let config = RenderConfig::default();
    let pipeline = config.pipeline()?;
    let mut framebuffer = FrameBuffer::new(config.width, config.height);

    std::fs::create_dir_all(OUTPUT_DIR)?;
    info!("rendering {frames} frames of {} triangles", mesh.len());

    let mut angle = 0.0f32;
    for n in 0..frames {
        let input = FrameInput::new(config.camera, Transform::spinning(angle, distance));
        let frame = pipeline.render(&mesh, &input);

        framebuffer.clear(flatshade::colors::BACKGROUND);
        draw_frame(&frame, &mut framebuffer);
        framebuffer.save(PathBuf::from(OUTPUT_DIR).join(format!("frame_{n:03}.png")))?;

        angle += ANGLE_STEP;
    }

    info!("wrote {frames} frames to {OUTPUT_DIR}/");
    Ok(())
}
