use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use disks::geom::{Exclusion, Point};
use disks::rand::{draw_points, Layout, RandomCfg, ReplayToken};
use disks::verify::{find_overlap, find_uncovered};
use disks::{solve, SearchCfg, SearchOutcome};
use serde_json::json;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod instance;
mod provenance;
mod record;
mod render;

use instance::Instance;
use provenance::Payload;
use record::SolveRecord;
use render::SvgCfg;

#[derive(Parser)]
#[command(name = "disks-cli")]
#[command(about = "Pick pairwise-disjoint disks by multi-directional greedy sweeps")]
struct Cmd {
    /// Log per-direction progress
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve an instance and optionally write SVG/JSON outputs
    Solve {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out_svg: Option<PathBuf>,
        #[arg(long)]
        out_json: Option<PathBuf>,
        #[arg(long, default_value_t = 8)]
        directions: usize,
        /// Overrides the instance radius; required for CSV/Parquet input
        #[arg(long)]
        radius: Option<f64>,
        /// Grid spacing used to quantize real coordinates
        #[arg(long, default_value_t = 1.0)]
        unit: f64,
        #[arg(long, default_value_t = 1000)]
        image_size: u32,
    },
    /// Write a random JSON instance
    Generate {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 1000)]
        extent: i64,
        #[arg(long)]
        radius: i64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        /// Place points on a jittered lattice with this spacing
        #[arg(long)]
        lattice: Option<i64>,
        #[arg(long, default_value_t = 0)]
        jitter: i64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Verify a JSON result against its instance
    Check {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        solution: PathBuf,
        /// Overrides the instance radius; required for CSV/Parquet input
        #[arg(long)]
        radius: Option<f64>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            input,
            out_svg,
            out_json,
            directions,
            radius,
            unit,
            image_size,
        } => run_solve(SolveArgs {
            input,
            out_svg,
            out_json,
            directions,
            radius,
            unit,
            image_size,
        }),
        Action::Generate {
            count,
            extent,
            radius,
            seed,
            index,
            lattice,
            jitter,
            out,
        } => {
            let layout = match lattice {
                Some(spacing) => Layout::Lattice { spacing, jitter },
                None => Layout::Uniform,
            };
            let cfg = RandomCfg {
                count,
                extent,
                layout,
            };
            generate(cfg, radius, ReplayToken::new(seed, index), &out)
        }
        Action::Check {
            input,
            solution,
            radius,
        } => check(&input, &solution, radius),
        Action::Report => report(),
    }
}

struct SolveArgs {
    input: PathBuf,
    out_svg: Option<PathBuf>,
    out_json: Option<PathBuf>,
    directions: usize,
    radius: Option<f64>,
    unit: f64,
    image_size: u32,
}

fn run_solve(args: SolveArgs) -> Result<()> {
    tracing::info!(input = %args.input.display(), directions = args.directions, "solve");
    let inst = instance::load(&args.input, args.radius, args.unit)?;
    let cfg = SearchCfg::with_directions(args.directions);
    let outcome = solve(&inst.points, inst.radius, cfg)
        .with_context(|| format!("solving {}", args.input.display()))?;
    println!("{}", size_line(&outcome));
    println!("Best: {}", outcome.best_size());

    let params = json!({
        "input": args.input.to_string_lossy(),
        "radius": inst.radius,
        "unit": inst.unit,
        "directions": args.directions,
        "direction_scale": cfg.scale.direction_scale,
    });
    let summary = json!({
        "points": inst.points.len(),
        "best": outcome.best_size(),
        "best_direction": outcome.best_direction,
        "sizes": outcome.sizes,
    });
    if let Some(path) = &args.out_json {
        ensure_parent(path)?;
        SolveRecord::new(&outcome, inst.radius, inst.unit).write(path)?;
        provenance::write_sidecar(path, Payload::new(params.clone()).with_summary(summary.clone()))?;
        tracing::info!(path = %path.display(), "result written");
    }
    if let Some(path) = &args.out_svg {
        ensure_parent(path)?;
        let svg_cfg = SvgCfg {
            image_size: args.image_size,
            ..SvgCfg::default()
        };
        fs::write(path, render::svg(&inst, &outcome.best, svg_cfg))
            .with_context(|| format!("writing {}", path.display()))?;
        provenance::write_sidecar(path, Payload::new(params).with_summary(summary))?;
        tracing::info!(path = %path.display(), "svg written");
    }
    Ok(())
}

/// `Found N independent sets of size: a b* c`, starring each new best.
fn size_line(outcome: &SearchOutcome) -> String {
    let mut line = format!(
        "Found {} independent sets of size:",
        outcome.sizes.len()
    );
    let mut best = 0;
    for &s in &outcome.sizes {
        line.push_str(&format!(" {s}"));
        if s > best {
            best = s;
            line.push('*');
        }
    }
    line
}

fn generate(cfg: RandomCfg, radius: i64, tok: ReplayToken, out: &Path) -> Result<()> {
    if radius < 0 {
        bail!("radius must be non-negative, got {radius}");
    }
    tracing::info!(count = cfg.count, extent = cfg.extent, seed = tok.seed, index = tok.index, "generate");
    let inst = Instance {
        points: draw_points(cfg, tok)?,
        radius,
        unit: 1.0,
    };
    ensure_parent(out)?;
    instance::write_json(out, &inst)?;
    let params = json!({
        "count": cfg.count,
        "extent": cfg.extent,
        "layout": format!("{:?}", cfg.layout),
        "radius": radius,
        "seed": tok.seed,
        "index": tok.index,
    });
    provenance::write_sidecar(out, Payload::new(params))?;
    Ok(())
}

fn check(input: &Path, solution: &Path, radius: Option<f64>) -> Result<()> {
    let rec = SolveRecord::read(solution)?;
    let inst = instance::load(input, radius, rec.unit)?;
    if inst.radius != rec.radius {
        bail!(
            "radius mismatch: instance has {} grid units, result was solved with {}",
            inst.radius,
            rec.radius
        );
    }
    let exclusion = Exclusion::new(inst.radius)?;
    let picked: Vec<Point> = rec.points();
    let known: BTreeSet<Point> = inst.points.iter().copied().collect();
    if let Some(p) = picked.iter().find(|p| !known.contains(p)) {
        bail!("selected point ({}, {}) is not in the instance", p.x, p.y);
    }
    if let Some((a, b)) = find_overlap(&picked, exclusion) {
        bail!(
            "selection overlaps: ({}, {}) and ({}, {}) are within twice the radius",
            a.x,
            a.y,
            b.x,
            b.y
        );
    }
    let witness = find_uncovered(&inst.points, &picked, exclusion);
    println!("independent: true");
    println!("maximal: {}", witness.is_none());
    if let Some(q) = witness {
        println!("addable: ({}, {})", q.x, q.y);
    }
    println!("size: {}", picked.len());
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(json!({}));
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn size_line_stars_improvements() {
        let outcome = SearchOutcome {
            best: vec![],
            sizes: vec![3, 5, 5, 2, 6],
            best_direction: Some(4),
        };
        assert_eq!(
            size_line(&outcome),
            "Found 5 independent sets of size: 3* 5* 5 2 6*"
        );
    }

    #[test]
    fn solve_writes_outputs_and_check_accepts_them() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("inst.json");
        fs::write(
            &input,
            r#"{"points": [{"x":0,"y":0},{"x":1,"y":0},{"x":2,"y":0},{"x":10,"y":10}], "radius": 1}"#,
        )
        .unwrap();
        let out_json = dir.path().join("out/best.json");
        let out_svg = dir.path().join("out/best.svg");
        run_solve(SolveArgs {
            input: input.clone(),
            out_svg: Some(out_svg.clone()),
            out_json: Some(out_json.clone()),
            directions: 8,
            radius: None,
            unit: 1.0,
            image_size: 500,
        })
        .unwrap();
        assert!(out_svg.exists());
        assert!(dir.path().join("out/best.json.provenance.json").exists());
        assert!(dir.path().join("out/best.svg.provenance.json").exists());
        let rec = SolveRecord::read(&out_json).unwrap();
        assert_eq!(rec.sizes, vec![2; 8]);
        assert_eq!(rec.points(), vec![Point::new(0, 0), Point::new(10, 10)]);
        check(&input, &out_json, None).unwrap();
    }

    #[test]
    fn check_rejects_overlapping_selection() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("inst.json");
        fs::write(
            &input,
            r#"{"points": [{"x":0,"y":0},{"x":1,"y":0}], "radius": 1}"#,
        )
        .unwrap();
        let bad = SolveRecord {
            radius: 1,
            unit: 1.0,
            direction_count: 1,
            sizes: vec![2],
            best_direction: Some(0),
            solution: vec![Point::new(0, 0).into(), Point::new(1, 0).into()],
        };
        let path = dir.path().join("bad.json");
        bad.write(&path).unwrap();
        assert!(check(&input, &path, None).is_err());
    }

    #[test]
    fn check_rejects_radius_mismatch() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("inst.json");
        fs::write(
            &input,
            r#"{"points": [{"x":0,"y":0},{"x":3,"y":0}], "radius": 2}"#,
        )
        .unwrap();
        // independent for r=1, overlapping for the instance's r=2
        let rec = SolveRecord {
            radius: 1,
            unit: 1.0,
            direction_count: 1,
            sizes: vec![2],
            best_direction: Some(0),
            solution: vec![Point::new(0, 0).into(), Point::new(3, 0).into()],
        };
        let path = dir.path().join("small.json");
        rec.write(&path).unwrap();
        let err = check(&input, &path, None).unwrap_err();
        assert!(err.to_string().contains("radius mismatch"), "{err}");
        // an explicit override makes the smaller radius deliberate
        check(&input, &path, Some(1.0)).unwrap();
    }

    #[test]
    fn generate_writes_loadable_instance() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("gen.json");
        let cfg = RandomCfg {
            count: 40,
            extent: 50,
            layout: Layout::Uniform,
        };
        generate(cfg, 3, ReplayToken::new(9, 0), &out).unwrap();
        let inst = instance::load(&out, None, 1.0).unwrap();
        assert_eq!(inst.points.len(), 40);
        assert_eq!(inst.radius, 3);
        assert!(generate(cfg, -1, ReplayToken::new(9, 0), &out).is_err());
        let huge = RandomCfg {
            count: 2,
            extent: i64::MAX,
            layout: Layout::Lattice {
                spacing: 1,
                jitter: 1,
            },
        };
        assert!(generate(huge, 0, ReplayToken::new(9, 0), &out).is_err());
    }
}
