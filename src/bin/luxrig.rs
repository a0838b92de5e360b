use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use glam::Mat4;
use luxrig::{FixtureModel, FixtureSpec};

#[derive(Parser, Debug)]
#[command(name = "luxrig", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute fixture point positions as JSON.
    Points(PointsArgs),
    /// Print a fixture's export metadata as JSON.
    Meta(SpecArgs),
}

#[derive(Parser, Debug)]
struct PointsArgs {
    #[command(flatten)]
    spec: SpecArgs,

    /// Output path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SpecArgs {
    /// Fixture width in inches.
    #[arg(long, default_value_t = 15.0)]
    width: f32,

    /// Fixture height in inches.
    #[arg(long, default_value_t = 5.0)]
    height: f32,

    /// Number of points in the fixture.
    #[arg(long, default_value_t = 30)]
    points: usize,
}

impl SpecArgs {
    fn to_spec(&self) -> FixtureSpec {
        FixtureSpec::new(self.width, self.height, self.points)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Points(args) => cmd_points(args),
        Command::Meta(args) => cmd_meta(args),
    }
}

fn cmd_points(args: PointsArgs) -> anyhow::Result<()> {
    let spec = args.spec.to_spec();
    let model = FixtureModel::build(&spec, Mat4::IDENTITY)
        .with_context(|| "compute fixture points")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };

    match args.out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("write points '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_meta(args: SpecArgs) -> anyhow::Result<()> {
    let spec = args.to_spec();
    spec.validate()?;
    println!("{}", serde_json::to_string_pretty(&spec.metadata())?);
    Ok(())
}
