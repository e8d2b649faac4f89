use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use roomloop::api::report;
use roomloop::builder::WallBuilder;
use roomloop::room::{
    delete_vertex, insert_vertex_on_wall, move_wall, update_vertex_position, Room, WallId,
};
use roomloop::validate::is_point_inside;
use roomloop::Vec2;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod room_io;

use room_io::{load_cfg, load_room, parse_points, write_room};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Draw, check and edit room wall loops")]
struct Cmd {
    /// Optional JSON file overriding drafting tolerances
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Replay clicks through the wall builder and write the closed room
    Draw {
        /// Points as "x,y x,y ..."; the first one starts the loop
        #[arg(long)]
        points: String,
        /// Fixed length applied to every placed wall
        #[arg(long)]
        length: Option<f64>,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the validator report for a room
    Check {
        #[arg(long)]
        room: PathBuf,
    },
    /// Print whether a point lies inside the room
    Contains {
        #[arg(long)]
        room: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Split a wall at a point
    Insert {
        #[arg(long)]
        room: PathBuf,
        #[arg(long)]
        wall: u64,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Remove a vertex by merging its two walls
    Delete {
        #[arg(long)]
        room: PathBuf,
        #[arg(long)]
        vertex: usize,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Move a single vertex
    MoveVertex {
        #[arg(long)]
        room: PathBuf,
        #[arg(long)]
        vertex: usize,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Translate a wall by (dx, dy), dragging its neighbors along
    MoveWall {
        #[arg(long)]
        room: PathBuf,
        #[arg(long)]
        wall: u64,
        #[arg(long, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, allow_hyphen_values = true)]
        dy: f64,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Draw {
            points,
            length,
            out,
        } => draw(&points, length, out, cmd.config),
        Action::Check { room } => check(room),
        Action::Contains { room, x, y } => contains(room, x, y),
        Action::Insert {
            room,
            wall,
            x,
            y,
            out,
        } => {
            tracing::info!(wall, x, y, "insert");
            let r = load_room(&room)?;
            let (edited, index) = insert_vertex_on_wall(&r, WallId(wall), Vec2::new(x, y))?;
            tracing::info!(index, walls = edited.len(), "vertex inserted");
            write_room(&edited, out.as_deref())
        }
        Action::Delete { room, vertex, out } => {
            tracing::info!(vertex, "delete");
            let edited = delete_vertex(&load_room(&room)?, vertex)?;
            write_room(&edited, out.as_deref())
        }
        Action::MoveVertex {
            room,
            vertex,
            x,
            y,
            out,
        } => {
            tracing::info!(vertex, x, y, "move_vertex");
            let edited = update_vertex_position(&load_room(&room)?, vertex, Vec2::new(x, y))?;
            write_room(&edited, out.as_deref())
        }
        Action::MoveWall {
            room,
            wall,
            dx,
            dy,
            out,
        } => move_wall_by(room, WallId(wall), Vec2::new(dx, dy), out),
    }
}

fn draw(
    points: &str,
    length: Option<f64>,
    out: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let cfg = load_cfg(config.as_deref())?;
    let pts = parse_points(points)?;
    tracing::info!(points = pts.len(), manual_length = ?length, "draw");
    let Some((&first, rest)) = pts.split_first() else {
        bail!("no points given");
    };

    let mut builder = WallBuilder::new(cfg);
    builder.start_drawing(first);
    for &p in rest {
        if let Some(len) = length {
            builder.set_manual_length(len);
        }
        let snapped = builder.continue_drawing(p);
        let snap = builder.last_snap().map(|s| s.snap_type);
        match builder.place_vertex(snapped) {
            Ok(wall) => tracing::info!(
                id = %wall.id,
                x = snapped.x,
                y = snapped.y,
                snap = ?snap,
                "wall placed"
            ),
            Err(e) => tracing::warn!(x = p.x, y = p.y, reason = %e, "click skipped"),
        }
    }
    let walls = builder.close_loop().context("closing loop")?;
    let room = Room::from_walls(walls).context("building room")?;
    write_room(&room, out.as_deref())
}

fn check(room: PathBuf) -> Result<()> {
    tracing::info!(room = %room.display(), "check");
    let r = load_room(&room)?;
    println!("{}", serde_json::to_string_pretty(&report(&r))?);
    Ok(())
}

fn contains(room: PathBuf, x: f64, y: f64) -> Result<()> {
    tracing::info!(room = %room.display(), x, y, "contains");
    let r = load_room(&room)?;
    println!("{}", is_point_inside(Vec2::new(x, y), r.walls()));
    Ok(())
}

fn move_wall_by(
    room: PathBuf,
    wall: WallId,
    delta: Vec2<f64>,
    out: Option<PathBuf>,
) -> Result<()> {
    tracing::info!(%wall, dx = delta.x, dy = delta.y, "move_wall");
    let r = load_room(&room)?;
    let Some(w) = r.wall_by_id(wall).copied() else {
        bail!("wall {wall} not found");
    };
    let edited = move_wall(&r, wall, w.start + delta, w.end + delta)?;
    write_room(&edited, out.as_deref())
}
