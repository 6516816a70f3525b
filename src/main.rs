//! Standalone CLI for exercising the starfield animator headlessly
//!
//! Run with: cargo run --features cli --bin fx-cli
//!
//! Env:
//! - `FX_CONFIG`: JSON page config (same shape as the inline `fx-config`)
//! - `FX_SIZE`: surface size as `WIDTHxHEIGHT` (default `800x600`)
//! - `FX_FRAMES`: stop after this many frames (default: run until Ctrl-C)
//! - `FX_REDUCED_MOTION`: set to `1` to render a single static frame

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use portfolio_fx::core::{replace_year, FxConfig, RecordingSurface, Starfield};
    use portfolio_fx::time::{current_year, now_seconds};
    use serde::Serialize;
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    #[derive(Serialize)]
    struct Snapshot {
        frames: u64,
        particles: usize,
        width: f64,
        height: f64,
        circles_last_frame: usize,
        circles_total: usize,
        mean_opacity: f64,
        elapsed_secs: f64,
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,portfolio_fx=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = std::env::var("FX_CONFIG")
        .map(|json| FxConfig::from_json_or_default(&json))
        .unwrap_or_default();

    let (width, height) = match std::env::var("FX_SIZE") {
        Ok(size) => parse_size(&size).unwrap_or_else(|| {
            warn!(size = %size, "Invalid FX_SIZE, using 800x600");
            (800.0, 600.0)
        }),
        Err(_) => (800.0, 600.0),
    };
    let max_frames: Option<u64> = std::env::var("FX_FRAMES").ok().and_then(|f| f.parse().ok());
    let reduced_motion = std::env::var("FX_REDUCED_MOTION").is_ok_and(|v| v == "1");

    info!(
        variant = ?config.variant,
        width,
        height,
        count = config.starfield.count,
        ?max_frames,
        reduced_motion,
        "Starting headless starfield"
    );

    if let Some(text) = replace_year("© 2000 Portfolio", current_year()) {
        info!(text = %text, "Copyright preview");
    }

    let mut field = Starfield::from_entropy(config.starfield.clone());
    let mut surface = RecordingSurface::new();
    field.resize(width, height);

    let mut frames_last_interval = 0u64;
    if !field.start(&mut surface, reduced_motion) {
        info!("Rendered a single static frame");
    }
    let mut frame_interval = tokio::time::interval(Duration::from_micros(16_667));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(5));

    while field.is_running() {
        tokio::select! {
            _ = frame_interval.tick() => {
                field.tick(&mut surface);
                frames_last_interval += 1;
                if max_frames.is_some_and(|max| field.frame_count() >= max) {
                    field.stop();
                }
            }
            _ = stats_interval.tick() => {
                info!(
                    frames = field.frame_count(),
                    circles = surface.circles.len(),
                    "fps" = format!("{:.1}", frames_last_interval as f64 / 5.0),
                    "stats"
                );
                frames_last_interval = 0;
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupted");
                field.stop();
            }
        }
    }

    let (width, height) = field.size();
    let particles = field.particles();
    let mean_opacity = if particles.is_empty() {
        0.0
    } else {
        particles.iter().map(|p| p.opacity).sum::<f64>() / particles.len() as f64
    };
    let snapshot = Snapshot {
        frames: field.frame_count(),
        particles: particles.len(),
        width,
        height,
        circles_last_frame: surface.circles.len(),
        circles_total: surface.total_circles,
        mean_opacity,
        elapsed_secs: now_seconds(),
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}

/// Parse `WIDTHxHEIGHT`
#[cfg(not(target_arch = "wasm32"))]
fn parse_size(s: &str) -> Option<(f64, f64)> {
    let (w, h) = s.split_once(['x', 'X'])?;
    let w: f64 = w.trim().parse().ok()?;
    let h: f64 = h.trim().parse().ok()?;
    (w >= 0.0 && h >= 0.0).then_some((w, h))
}

#[cfg(target_arch = "wasm32")]
fn main() {}
