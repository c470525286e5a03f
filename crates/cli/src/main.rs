use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use planar::io::{load_obj, load_xyz, save_obj, save_xyz};
use planar::plane::sample::{draw_points_in_disk, ReplayToken, SampleCfg};
use planar::plane::{
    convex_hull, filter_inside, GeomCfg, MembershipRule, DEFAULT_EPS, DEFAULT_OUTSIDE_MARGIN,
};
use planar::Vec2;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Convex hulls and point-in-polygon filtering for planar point sets")]
struct Cmd {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Write <output>.provenance.json next to the primary output
    #[arg(long, global = true)]
    provenance: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Convex hull of an .xyz point list, written as a closed .obj line loop
    Hull(HullArgs),
    /// Keep the points of an .xyz list that lie inside an .obj polygon
    Inside(InsideArgs),
    /// Write a random point cloud as an .xyz list
    Gen(GenArgs),
}

#[derive(Args, Debug, Serialize)]
struct HullArgs {
    /// Input point list (.xyz)
    points: PathBuf,
    /// Output polygon (.obj)
    output: PathBuf,
    /// Absolute closeness tolerance
    #[arg(long, default_value_t = DEFAULT_EPS)]
    eps: f64,
}

#[derive(Args, Debug, Serialize)]
struct InsideArgs {
    /// Query point list (.xyz)
    points: PathBuf,
    /// Polygon (.obj, faces or a closed line loop)
    polygon: PathBuf,
    /// Output point list (.xyz)
    output: PathBuf,
    /// Absolute closeness tolerance
    #[arg(long, default_value_t = DEFAULT_EPS)]
    eps: f64,
    /// Distance of the ray origin from the polygon's bounding box
    #[arg(long, default_value_t = DEFAULT_OUTSIDE_MARGIN)]
    margin: f64,
    /// Membership rule
    #[arg(long, value_enum, default_value_t = Rule::Ray)]
    rule: Rule,
}

#[derive(Args, Debug, Serialize)]
struct GenArgs {
    /// Output point list (.xyz)
    output: PathBuf,
    #[arg(long, default_value_t = 100)]
    count: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Disk radius around the origin
    #[arg(long, default_value_t = 1.0)]
    radius: f64,
    /// Snap coordinates to a grid of this spacing
    #[arg(long)]
    snap: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
enum Rule {
    /// Even-odd ray casting
    Ray,
    /// Non-zero winding number
    Winding,
}

impl From<Rule> for MembershipRule {
    fn from(r: Rule) -> Self {
        match r {
            Rule::Ray => MembershipRule::RayCast,
            Rule::Winding => MembershipRule::Winding,
        }
    }
}

/// Point counts reported in logs and provenance.
#[derive(Debug, Serialize, PartialEq, Eq)]
struct Summary {
    input_points: usize,
    output_points: usize,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    init_logging(cmd.verbose, cmd.quiet);
    let (output, params, summary) = match &cmd.action {
        Action::Hull(args) => (&args.output, serde_json::to_value(args)?, hull(args)?),
        Action::Inside(args) => (&args.output, serde_json::to_value(args)?, inside(args)?),
        Action::Gen(args) => (&args.output, serde_json::to_value(args)?, sample_points(args)?),
    };
    if cmd.provenance {
        let payload = provenance::Payload::new(params, serde_json::to_value(&summary)?);
        let path = provenance::write_sidecar(output, payload)?;
        tracing::info!(path = %path.display(), "provenance");
    }
    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => Level::WARN,
        (false, 0) => Level::INFO,
        (false, 1) => Level::DEBUG,
        (false, _) => Level::TRACE,
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    load_xyz(path).with_context(|| format!("reading points from {}", path.display()))
}

fn hull(args: &HullArgs) -> Result<Summary> {
    let cfg = GeomCfg {
        eps: args.eps,
        ..GeomCfg::default()
    };
    let points = read_points(&args.points)?;
    let poly = convex_hull(&points, cfg);
    if poly.is_degenerate() {
        tracing::warn!(vertices = poly.len(), "hull is degenerate");
    }
    save_obj(&args.output, &poly)
        .with_context(|| format!("writing hull to {}", args.output.display()))?;
    tracing::info!(
        input = points.len(),
        hull = poly.len(),
        output = %args.output.display(),
        "hull"
    );
    Ok(Summary {
        input_points: points.len(),
        output_points: poly.len(),
    })
}

fn inside(args: &InsideArgs) -> Result<Summary> {
    let cfg = GeomCfg {
        eps: args.eps,
        outside_margin: args.margin,
    };
    let points = read_points(&args.points)?;
    let poly = load_obj(&args.polygon)
        .with_context(|| format!("reading polygon from {}", args.polygon.display()))?;
    if poly.is_degenerate() {
        tracing::warn!(vertices = poly.len(), "polygon is degenerate; nothing can be inside");
    }
    let kept = filter_inside(&poly, &points, args.rule.into(), cfg);
    save_xyz(&args.output, &kept)
        .with_context(|| format!("writing points to {}", args.output.display()))?;
    tracing::info!(
        queries = points.len(),
        inside = kept.len(),
        rule = ?args.rule,
        output = %args.output.display(),
        "inside"
    );
    Ok(Summary {
        input_points: points.len(),
        output_points: kept.len(),
    })
}

fn sample_points(args: &GenArgs) -> Result<Summary> {
    let cfg = SampleCfg {
        count: args.count,
        radius: args.radius,
        snap: args.snap,
        ..SampleCfg::default()
    };
    let points = draw_points_in_disk(
        cfg,
        ReplayToken {
            seed: args.seed,
            index: 0,
        },
    );
    save_xyz(&args.output, &points)
        .with_context(|| format!("writing points to {}", args.output.display()))?;
    tracing::info!(count = points.len(), seed = args.seed, output = %args.output.display(), "gen");
    Ok(Summary {
        input_points: 0,
        output_points: points.len(),
    })
}
