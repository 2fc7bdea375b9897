use std::path::PathBuf;

use eyre::{Context, Result};
use itertools::Itertools;
use rubik_core::adjacency::ADJACENCY;
use rubik_core::{Face, LayerId, Move, MoveEngine, StickerPos};
use rubik_prefs::Preferences;
use rubik_view::CubeSimulation;
use serde::Serialize;
use web_time::Duration;

/// 3x3x3 Rubik's Cube simulator
///
/// Moves are written as a layer name optionally followed by a direction, such
/// as `up`, `front:ccw`, or `middle:cw`.
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    /// Preferences file to use instead of the default one.
    #[arg(long, global = true)]
    pub prefs: Option<PathBuf>,

    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Apply moves to a solved cube and print the result.
    Apply {
        /// Moves to apply, in order.
        moves: Vec<Move>,
    },
    /// Animate moves frame by frame, committing each one as it finishes.
    Animate {
        /// Moves to request, in order.
        moves: Vec<Move>,
        /// Simulated frames per second.
        #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
        fps: u32,
    },
    /// Print the layer adjacency table as JSON.
    Layers,
    /// Apply moves to a solved cube and report where a sticker came from.
    Trace {
        /// Face of the sticker slot.
        face: Face,
        /// Index of the sticker slot on its face, in row-major order.
        #[arg(value_parser = clap::value_parser!(u8).range(0..9))]
        index: u8,
        /// Moves to apply, in order.
        moves: Vec<Move>,
    },
}

pub(crate) fn exec(args: Args) -> Result<()> {
    match args.subcommand {
        Subcommand::Apply { moves } => {
            let mut engine = MoveEngine::new();
            engine.apply_moves(moves);
            print_engine(&engine);
            Ok(())
        }

        Subcommand::Animate { moves, fps } => {
            let prefs = Preferences::load(args.prefs.as_deref());
            let mut sim = CubeSimulation::new();
            let delta = Duration::from_secs_f32(1.0 / fps as f32);

            let mut frames = 0_u64;
            for mv in moves {
                if sim.request_move(mv, &prefs.interaction).is_err() {
                    log::info!("waiting for animation to finish before {mv}");
                    while sim.step(delta, &prefs.animation) {
                        frames += 1;
                    }
                    sim.request_move(mv, &prefs.interaction)?;
                }
            }
            while sim.step(delta, &prefs.animation) {
                frames += 1;
            }

            println!("{frames} frames at {fps} fps");
            print_engine(sim.engine());
            Ok(())
        }

        Subcommand::Layers => {
            let layers = ADJACENCY
                .iter()
                .map(|(layer, adjacency)| LayerJson {
                    layer,
                    own_face: adjacency.own_face,
                    ring: adjacency
                        .ring
                        .map(|(face, indices)| StripJson { face, indices }),
                })
                .collect_vec();
            write_json_output(&layers)
        }

        Subcommand::Trace { face, index, moves } => {
            let mut engine = MoveEngine::new();
            engine.apply_moves(moves);
            let pos = StickerPos::new(face, index);
            let history = engine.history();
            println!(
                "{pos} holds the {} sticker that started at {}",
                engine.state().sticker(pos),
                history.trace_origin(pos),
            );
            println!(
                "the sticker that started at {pos} is now at {}",
                history.trace_destination(pos),
            );
            Ok(())
        }
    }
}

#[derive(Serialize, Debug)]
struct LayerJson {
    layer: LayerId,
    own_face: Option<Face>,
    ring: [StripJson; 4],
}

#[derive(Serialize, Debug)]
struct StripJson {
    face: Face,
    indices: [u8; 3],
}

fn print_engine(engine: &MoveEngine) {
    println!("{}", engine.state());
    println!("moves: {}", engine.history().moves().iter().join(" "));
    println!("solved: {}", engine.is_solved());
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}
