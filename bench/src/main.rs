use std::time::{Duration, Instant};

use anyhow::Context as _;
use shotframe::{Canvas, FrameStyle, Size, frame_canvas, inner_shadow, outer_shadow};

#[derive(Clone, Debug)]
struct BenchArgs {
    width: u32,
    height: u32,
    warmup: u32,
    repeats: u32,
}

#[derive(Clone, Debug, Default)]
struct RunMetrics {
    inner_shadow: Duration,
    outer_shadow: Duration,
    frame_total: Duration,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = parse_args()?;
    if args.repeats == 0 {
        anyhow::bail!("--repeats must be > 0");
    }

    let size = Size::new(args.width, args.height).context("--width/--height")?;
    let style = FrameStyle::default();
    let source = Canvas::filled(size, [220, 224, 230, 255]);

    if args.warmup > 0 {
        eprintln!("warmup: {} run(s)", args.warmup);
        for _ in 0..args.warmup {
            run_once(&source, &style)?;
        }
    }

    eprintln!(
        "bench: {repeats} run(s) ({profile} build), {w}x{h} source",
        repeats = args.repeats,
        profile = if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        },
        w = args.width,
        h = args.height,
    );

    let mut runs = Vec::with_capacity(args.repeats as usize);
    for _ in 0..args.repeats {
        runs.push(run_once(&source, &style)?);
    }
    report_percentiles(&runs);
    Ok(())
}

fn run_once(source: &Canvas, style: &FrameStyle) -> anyhow::Result<RunMetrics> {
    let size = source.size();

    let t0 = Instant::now();
    inner_shadow(size, style.corner_radius, style.inner_band, style.inner_alpha)?;
    let inner = t0.elapsed();

    let t1 = Instant::now();
    outer_shadow(
        size,
        style.corner_radius,
        style.outer_expansion,
        style.outer_blur,
        style.outer_alpha,
    )?;
    let outer = t1.elapsed();

    let t2 = Instant::now();
    let framed = frame_canvas(source.clone(), style)?;
    let total = t2.elapsed();
    std::hint::black_box(framed);

    Ok(RunMetrics {
        inner_shadow: inner,
        outer_shadow: outer,
        frame_total: total,
    })
}

fn parse_args() -> anyhow::Result<BenchArgs> {
    let mut out = BenchArgs {
        width: 1920,
        height: 1080,
        warmup: 1,
        repeats: 10,
    };

    let mut args = std::env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--width" => out.width = parse_u32(args.next(), "--width")?,
            "--height" => out.height = parse_u32(args.next(), "--height")?,
            "--warmup" => out.warmup = parse_u32(args.next(), "--warmup")?,
            "--repeats" => out.repeats = parse_u32(args.next(), "--repeats")?,
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => anyhow::bail!("unknown arg '{a}' (try --help)"),
        }
    }

    Ok(out)
}

fn parse_u32(v: Option<String>, flag: &str) -> anyhow::Result<u32> {
    let v = v.ok_or_else(|| anyhow::anyhow!("missing value for {flag}"))?;
    v.parse::<u32>()
        .with_context(|| format!("parse {flag} value '{v}'"))
}

fn print_help() {
    eprintln!(
        r#"shotframe-bench

Frames a synthetic screenshot repeatedly and reports p50/p90/p99 per stage.

Usage:
  cargo run -q --release
  cargo run -q --release -- --width 3840 --height 2160 --repeats 5

Args:
  --width N     (default 1920)
  --height N    (default 1080)
  --warmup N    (default 1)
  --repeats N   (default 10)
"#
    );
}

fn report_percentiles(runs: &[RunMetrics]) {
    type Getter = fn(&RunMetrics) -> Duration;

    fn p(v: &[Duration], p: f64) -> Duration {
        if v.is_empty() {
            return Duration::ZERO;
        }
        let n = v.len();
        let rank = (p * (n as f64)).ceil().clamp(1.0, n as f64) as usize;
        v[rank - 1]
    }

    fn fmt_ms(d: Duration) -> String {
        format!("{:.3}ms", d.as_secs_f64() * 1000.0)
    }

    let fields: &[(&str, Getter)] = &[
        ("inner_shadow", |m| m.inner_shadow),
        ("outer_shadow", |m| m.outer_shadow),
        ("frame_total", |m| m.frame_total),
    ];

    eprintln!("\npercentiles across runs (p50/p90/p99):");
    for (name, getter) in fields {
        let mut v = runs.iter().map(getter).collect::<Vec<_>>();
        v.sort();
        eprintln!(
            "  {name:14} p50={p50:>10}  p90={p90:>10}  p99={p99:>10}",
            p50 = fmt_ms(p(&v, 0.50)),
            p90 = fmt_ms(p(&v, 0.90)),
            p99 = fmt_ms(p(&v, 0.99)),
        );
    }
}
