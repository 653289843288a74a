use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use dubins_cost::prelude::*;
use dubins_cost::tour_edge_lengths;
use serde::Serialize;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod nodes;

use nodes::{load_nodes, parse_configuration, save_nodes, write_json};

#[derive(Parser)]
#[command(name = "dubins-cost")]
#[command(about = "Dubins path lengths and ATSP cost matrices", version)]
struct Cmd {
    /// Log verbosity: -v for debug, -vv for trace (per-pair candidates)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Shortest CSC length between two configurations
    Length {
        /// Start as x,y,heading (heading in radians, 0 = +y, clockwise)
        #[arg(long, allow_hyphen_values = true, value_parser = parse_configuration)]
        from: Configuration,
        /// End as x,y,heading
        #[arg(long, allow_hyphen_values = true, value_parser = parse_configuration)]
        to: Configuration,
        #[arg(long)]
        radius: f64,
    },
    /// All-pairs cost matrix for an ATSP solver
    Matrix {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        radius: f64,
        /// Write the report here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
        /// Evaluate pairs on a single thread
        #[arg(long)]
        sequential: bool,
    },
    /// Cost of visiting the input nodes in file order
    Tour {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        radius: f64,
        /// Include the edge from the last node back to the first
        #[arg(long)]
        close_loop: bool,
        #[arg(long)]
        sequential: bool,
    },
    /// Write a seeded node file with a minimum pairwise separation
    Sample {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
        #[arg(long, default_value_t = 3.0)]
        min_separation: f64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
}

#[derive(Serialize)]
struct LengthReport {
    family: String,
    length: f64,
}

#[derive(Serialize)]
struct MatrixReport {
    radius: f64,
    diagonal_cost: f64,
    asymmetry: f64,
    rows: Vec<Vec<f64>>,
}

#[derive(Serialize)]
struct TourReport {
    close_loop: bool,
    edges: Vec<f64>,
    total: f64,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = match cmd.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Length { from, to, radius } => length(from, to, radius),
        Action::Matrix {
            input,
            radius,
            out,
            sequential,
        } => matrix(input, radius, out, cost_cfg(sequential)),
        Action::Tour {
            input,
            radius,
            close_loop,
            sequential,
        } => tour(input, radius, close_loop, cost_cfg(sequential)),
        Action::Sample {
            count,
            width,
            height,
            min_separation,
            seed,
            out,
        } => sample(
            ScatterCfg {
                count,
                width,
                height,
                min_separation,
                ..ScatterCfg::default()
            },
            seed,
            out,
        ),
    }
}

fn cost_cfg(sequential: bool) -> CostCfg {
    if sequential {
        CostCfg::sequential()
    } else {
        CostCfg::default()
    }
}

fn length(from: Configuration, to: Configuration, radius: f64) -> Result<()> {
    tracing::info!(from = %from, to = %to, radius, "length");
    let best = shortest_path(&from, &to, radius)?;
    let report = LengthReport {
        family: best.family.to_string(),
        length: best.length,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn matrix(input: PathBuf, radius: f64, out: Option<PathBuf>, cfg: CostCfg) -> Result<()> {
    let nodes = load_nodes(&input)?;
    tracing::info!(input = %input.display(), n = nodes.len(), radius, "matrix");
    let m = build_configuration_matrix(&nodes, radius, &cfg)?;
    let report = MatrixReport {
        radius,
        diagonal_cost: m.diagonal_cost(),
        asymmetry: m.asymmetry(),
        rows: m.rows(),
    };
    match out {
        Some(path) => {
            write_json(&path, &report)?;
            tracing::info!(out = %path.display(), "matrix written");
        }
        None => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn tour(input: PathBuf, radius: f64, close_loop: bool, cfg: CostCfg) -> Result<()> {
    let nodes = load_nodes(&input)?;
    tracing::info!(input = %input.display(), n = nodes.len(), radius, close_loop, "tour");
    let ids: Vec<usize> = (0..nodes.len()).collect();
    let edges = tour_edge_lengths(
        &ids,
        nodes.as_slice(),
        |&i: &usize| nodes[i].heading,
        radius,
        close_loop,
        &cfg,
    )?;
    let total = edges.iter().sum();
    let report = TourReport {
        close_loop,
        edges,
        total,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn sample(cfg: ScatterCfg, seed: u64, out: PathBuf) -> Result<()> {
    tracing::info!(count = cfg.count, seed, out = %out.display(), "sample");
    let nodes = scatter_configurations(&cfg, seed)?;
    save_nodes(&out, &nodes)
}
