use pokedex_combat::CliOptions;
use std::env;
use std::path::PathBuf;

fn usage() -> ! {
    eprintln!(
        "Usage: pokedex-combat [--teams teams.json] [--output matrix.csv] [--fight A_INDEX B_INDEX]"
    );
    std::process::exit(1);
}

fn parse_args() -> anyhow::Result<CliOptions> {
    let mut teams_path = PathBuf::from("teams.json");
    let mut output_path = PathBuf::from("matrix.csv");
    let mut fight = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--teams" => {
                teams_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--teams requires a path (e.g. --teams teams.json)")
                })?;
            }
            "--output" => {
                output_path = args.next().map(PathBuf::from).ok_or_else(|| {
                    anyhow::anyhow!("--output requires a path (e.g. --output matrix.csv)")
                })?;
            }
            "--fight" => {
                let a = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--fight requires two team indexes"))?;
                let b = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--fight requires two team indexes"))?;
                fight = Some((a.parse()?, b.parse()?));
            }
            "--help" | "-h" => usage(),
            other => return Err(anyhow::anyhow!("Unknown argument {other}")),
        }
    }

    Ok(CliOptions {
        teams_path,
        output_path,
        fight,
    })
}

fn main() -> anyhow::Result<()> {
    let opts = parse_args()?;
    pokedex_combat::run(opts)
}
