//! Flappy LIDAR entry point
//!
//! Runs a hovering player through a seeded pipe course and prints one JSON
//! line per tick with the LIDAR distances.

use std::io::{self, Write};

use clap::Parser;
use serde::Serialize;

use flappy_lidar::consts::LIDAR_RAYS;
use flappy_lidar::renderer::{Vertex, shapes, vertex::colors};
use flappy_lidar::{Course, GameConstants, Lidar};

#[derive(Parser, Debug)]
#[command(name = "flappy-lidar", about = "Scan a seeded pipe course with the 180-ray LIDAR")]
struct Args {
    /// Number of simulation ticks to run
    #[arg(default_value_t = 300)]
    ticks: u32,

    /// Seed for the pipe course
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

/// One line of output
#[derive(Serialize)]
struct TickReport<'a> {
    tick: u32,
    pipes: usize,
    nearest: f32,
    nearest_ray: usize,
    ray_vertices: usize,
    obstacle_vertices: usize,
    frame_bytes: usize,
    distances: &'a [f32],
}

fn run(args: &Args, out: &mut impl Write) -> io::Result<()> {
    let constants = GameConstants::load();
    let mut course = Course::new(args.seed, &constants);
    let mut lidar = Lidar::new(&constants);

    // Player hovers at its spawn point
    let player_x = (constants.background_width * 0.2).floor();
    let player_y = ((constants.background_height - constants.player_height) / 2.0).floor();
    let origin = Lidar::origin(&constants, player_x, player_y);

    log::info!(
        "Running {} ticks (seed {}, {LIDAR_RAYS} rays, reach {})",
        args.ticks,
        args.seed,
        lidar.max_distance()
    );

    for tick in 0..args.ticks {
        course.advance(&constants);
        let distances = lidar.scan(
            &constants,
            player_x,
            player_y,
            0.0,
            &course.upper_pipes,
            &course.lower_pipes,
            &course.ground,
        );

        let (nearest_ray, nearest) = distances
            .iter()
            .copied()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .unwrap_or((0, lidar.max_distance()));

        let mut frame = shapes::lidar_rays(origin, lidar.hits(), colors::LIDAR_RAY);
        let ray_vertices = frame.len();
        frame.extend(shapes::obstacles(
            &course.upper_pipes,
            &course.lower_pipes,
            &course.ground,
            &constants,
            colors::PIPE,
            colors::GROUND,
        ));

        let report = TickReport {
            tick,
            pipes: course.upper_pipes.len(),
            nearest,
            nearest_ray,
            ray_vertices,
            obstacle_vertices: frame.len() - ray_vertices,
            frame_bytes: Vertex::as_bytes(&frame).len(),
            distances: &distances,
        };

        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)?;

        if nearest < constants.player_private_zone {
            log::info!("Tick {tick}: obstacle inside private zone (ray {nearest_ray}, {nearest:.1})");
        }
    }

    out.flush()
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match run(&args, &mut out) {
        Ok(()) => log::info!("Done"),
        // Reader went away (e.g. piped into `head`)
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => log::debug!("Output closed: {e}"),
        Err(e) => {
            log::error!("Failed to write scan output: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["flappy-lidar"]).unwrap();
        assert_eq!(args.ticks, 300);
        assert_eq!(args.seed, 12345);
    }

    #[test]
    fn test_args_explicit_values() {
        let args = Args::try_parse_from(["flappy-lidar", "20", "--seed", "7"]).unwrap();
        assert_eq!(args.ticks, 20);
        assert_eq!(args.seed, 7);
    }

    #[test]
    fn test_args_reject_bad_input() {
        assert!(Args::try_parse_from(["flappy-lidar", "many"]).is_err());
        assert!(Args::try_parse_from(["flappy-lidar", "--seed", "-1"]).is_err());
        let help = Args::try_parse_from(["flappy-lidar", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_run_writes_one_json_line_per_tick() {
        let args = Args { ticks: 3, seed: 1 };
        let mut out = Vec::new();
        run(&args, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let report: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(report["tick"], 2);
        assert_eq!(report["distances"].as_array().unwrap().len(), LIDAR_RAYS);
        assert_eq!(report["ray_vertices"], 360);
        assert_eq!(report["obstacle_vertices"], 40);
    }

    /// Writer that behaves like a pipe whose reader has exited
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_reports_closed_output_as_error() {
        let args = Args { ticks: 5, seed: 1 };
        let err = run(&args, &mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
