use std::path::PathBuf;

use algolab::closest::rand::{draw_points_uniform, BoxCfg, ReplayToken};
use algolab::closest::{closest_pair, Point};
use algolab::turing::Machine;
use algolab::{align, turing};
use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Runners for the algolab kernels")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Closest pair of points in the plane
    Closest(ClosestArgs),
    /// Two-tape Turing machine (binary addition by default)
    Tm(TmArgs),
    /// Needleman-Wunsch global alignment
    Align(AlignArgs),
}

#[derive(Args)]
struct ClosestArgs {
    /// Run the three pinned example sets (n=10 each)
    #[arg(long)]
    examples: bool,
    /// Generate N random points and run
    #[arg(long, value_name = "N")]
    random: Option<usize>,
    /// Seed for --random
    #[arg(long, default_value_t = 42)]
    seed: u64,
    /// Explicit points as 'x,y', e.g. --points 0,0 1,2 2,2
    #[arg(long, num_args = 1..)]
    points: Vec<String>,
    /// Emit one JSON object per batch instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct TmArgs {
    /// First operand, big-endian binary
    #[arg(long)]
    a: String,
    /// Second operand, big-endian binary
    #[arg(long)]
    b: String,
    /// YAML transition table overriding the built-in adder
    #[arg(long)]
    machine: Option<PathBuf>,
    /// Abort if the machine has not halted after this many steps
    #[arg(long, default_value_t = 200_000)]
    max_steps: u64,
    /// If > 0, also print a tape window of this radius around each head
    #[arg(long, default_value_t = 0)]
    window: i64,
}

#[derive(Args)]
struct AlignArgs {
    /// First sequence, e.g. GATTACA
    #[arg(long)]
    seq1: Option<String>,
    /// Second sequence, e.g. GCATGCU
    #[arg(long)]
    seq2: Option<String>,
    /// Run the three pinned example pairs
    #[arg(long)]
    examples: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Closest(args) => run_closest(args),
        Action::Tm(args) => run_tm(args),
        Action::Align(args) => run_align(args),
    }
}

fn run_closest(args: ClosestArgs) -> Result<()> {
    let mut batches: Vec<(String, Vec<Point>)> = Vec::new();

    if args.examples {
        for (k, pts) in example_sets().into_iter().enumerate() {
            batches.push((format!("Example {}", k + 1), pts));
        }
    }
    if let Some(n) = args.random {
        let tok = ReplayToken {
            seed: args.seed,
            index: 0,
        };
        batches.push((
            format!("Random n={n} seed={}", args.seed),
            draw_points_uniform(n, BoxCfg::default(), tok),
        ));
    }
    if !args.points.is_empty() {
        let pts = args
            .points
            .iter()
            .map(|s| parse_point(s))
            .collect::<Result<Vec<_>>>()?;
        batches.push(("Manual".to_string(), pts));
    }
    if batches.is_empty() {
        bail!("choose --examples, --random N or --points ...");
    }

    for (name, pts) in batches {
        tracing::info!(batch = %name, n = pts.len(), "closest_pair");
        let best = closest_pair(&pts)?;
        let (p, q) = best.pair;
        if args.json {
            let obj = serde_json::json!({
                "batch": name,
                "n": pts.len(),
                "dist": best.dist,
                "pair": [[p.x, p.y], [q.x, q.y]],
            });
            println!("{}", serde_json::to_string(&obj)?);
        } else {
            println!("\n=== {name} ===");
            let listing: Vec<String> = pts.iter().map(fmt_point).collect();
            println!("Points: {}", listing.join(", "));
            println!("Closest pair: {} and {}", fmt_point(&p), fmt_point(&q));
            println!("Minimum distance: {:.6}", best.dist);
        }
    }
    Ok(())
}

fn run_tm(args: TmArgs) -> Result<()> {
    let a = validate_binary(&args.a)?;
    let b = validate_binary(&args.b)?;

    let machine = match &args.machine {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("reading machine table {}", path.display()))?;
            Machine::from_yaml(&text)?
        }
        None => turing::binary_addition()?,
    };

    let mut run = machine.start(&a, &b);
    run.run(args.max_steps)?;
    tracing::info!(steps = run.steps, "tm_halted");

    println!("============================================================");
    println!("Input A (bin):  {a}");
    println!("Input B (bin):  {b}");
    println!("Result (bin):   {}", run.result());
    println!("Steps:          {}", run.steps);
    println!("Tape 1 (trim):  {}", run.t1.to_string_trimmed());
    println!("Tape 2 (trim):  {}", run.t2.to_string_trimmed());
    if args.window > 0 {
        println!("Tape 1 window:  {}", run.t1.window(run.h1, args.window));
        println!("Tape 2 window:  {}", run.t2.window(run.h2, args.window));
    }
    println!("============================================================");
    Ok(())
}

fn run_align(args: AlignArgs) -> Result<()> {
    let cfg = align::ScoreCfg::default();

    if args.examples {
        for (s1, s2) in [("GATTACA", "GCATGCU"), ("ACGT", "ACCT"), ("ATGCT", "AGCT")] {
            print_alignment(s1, s2, cfg);
        }
        return Ok(());
    }
    match (&args.seq1, &args.seq2) {
        (Some(s1), Some(s2)) => {
            print_alignment(&s1.trim().to_uppercase(), &s2.trim().to_uppercase(), cfg);
            Ok(())
        }
        _ => bail!("use --examples or pass --seq1 and --seq2"),
    }
}

fn print_alignment(s1: &str, s2: &str, cfg: align::ScoreCfg) {
    let (matrix, al) = align::global_align(s1, s2, cfg);
    println!("\n============================================================");
    println!("Sequence 1: {s1}");
    println!("Sequence 2: {s2}");
    println!("\nScore matrix:");
    println!("{}", align::format_matrix(&matrix, s1, s2));
    println!("\nOptimal alignment (global):");
    println!("{}", al.top);
    println!("{}", al.bottom);
    println!("\nTotal score: {}", al.score);
    println!("============================================================");
}

/// Parse an 'x,y' token. Failures surface here, before the kernel runs.
fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .with_context(|| format!("point must be 'x,y', got {s:?}"))?;
    let x: f64 = x
        .trim()
        .parse()
        .with_context(|| format!("bad x coordinate in {s:?}"))?;
    let y: f64 = y
        .trim()
        .parse()
        .with_context(|| format!("bad y coordinate in {s:?}"))?;
    Ok(Point::new(x, y))
}

/// Reject anything but 0/1 digits; strip leading zeros; empty means zero.
fn validate_binary(s: &str) -> Result<String> {
    let s = s.trim();
    if s.chars().any(|c| c != '0' && c != '1') {
        bail!("binary operand may only contain 0/1 digits, got {s:?}");
    }
    let s = s.trim_start_matches('0');
    Ok(if s.is_empty() { "0".to_string() } else { s.to_string() })
}

/// Avoid trailing .0 noise when a coordinate is integer-like.
fn fmt_coord(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.5}")
    }
}

fn fmt_point(p: &Point) -> String {
    format!("({}, {})", fmt_coord(p.x), fmt_coord(p.y))
}

/// The three pinned 10-point example sets.
fn example_sets() -> Vec<Vec<Point>> {
    let raw: [&[(f64, f64)]; 3] = [
        &[
            (0.0, 0.0),
            (2.0, 3.0),
            (3.0, 4.0),
            (5.0, 1.0),
            (1.0, 1.0),
            (4.0, 4.0),
            (7.0, 2.0),
            (6.0, 6.0),
            (8.0, 5.0),
            (9.0, 1.0),
        ],
        &[
            (-5.0, -4.0),
            (-3.0, 2.0),
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (10.0, 10.0),
            (10.0, 11.0),
            (11.0, 10.0),
            (3.0, -1.0),
            (4.0, -2.0),
        ],
        &[
            (0.1, 0.1),
            (0.2, 0.2),
            (0.3, 0.3),
            (5.0, 5.0),
            (6.0, 6.0),
            (7.0, 7.0),
            (8.0, 8.0),
            (9.0, 9.0),
            (1.0, 1.01),
            (1.02, 1.03),
        ],
    ];
    raw.iter()
        .map(|set| set.iter().map(|&(x, y)| Point::new(x, y)).collect())
        .collect()
}
