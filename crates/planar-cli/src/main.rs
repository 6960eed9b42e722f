use planar::{Graph, PairTable, ParseOptions, Parser, WedgeRecord, index};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Json(serde_json::Error),
    Planar(planar::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Planar(err) => write!(f, "{err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<planar::Error> for CliError {
    fn from(value: planar::Error) -> Self {
        Self::Planar(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Parse,
    Extend,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    out: Option<String>,
    pretty: bool,
    extra_edges: Option<i64>,
    max_distance: Option<usize>,
    validate_base: bool,
}

/// Input document: a sequence, its pair scores, and optionally a base graph and options.
#[derive(Debug, Deserialize)]
struct Problem {
    items: Vec<String>,
    #[serde(default)]
    scores: PairTable,
    #[serde(default)]
    base: Vec<WedgeRecord>,
    #[serde(default)]
    options: ParseOptions,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EdgeOut<'a> {
    left: usize,
    right: usize,
    weight: f64,
    left_item: &'a str,
    right_item: &'a str,
}

#[derive(Serialize)]
struct GraphOut<'a> {
    edges: Vec<EdgeOut<'a>>,
}

impl<'a> GraphOut<'a> {
    fn from_graph(g: &Graph<'a, String>) -> Self {
        Self {
            edges: g
                .iter()
                .map(|w| EdgeOut {
                    left: w.left().ordinal,
                    right: w.right().ordinal,
                    weight: w.weight(),
                    left_item: w.left().item.as_str(),
                    right_item: w.right().item.as_str(),
                })
                .collect(),
        }
    }
}

fn usage() -> &'static str {
    "planar\n\
\n\
USAGE:\n\
  planar [parse] [--pretty] [--extra <n>] [--max-distance <n>] [--out <path>] [<path>|-]\n\
  planar extend [--pretty] [--extra <n>] [--max-distance <n>] [--validate-base] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is JSON: {\"items\": [..], \"scores\": {\"default\": n, \"pairs\": [{\"left\", \"right\", \"score\"}]}, \"base\": [..], \"options\": {..}}.\n\
  - parse builds a projective spanning tree first; extend starts from \"base\" (empty if absent).\n\
  - --extra <n> caps the number of extra edges; a negative value means no cap.\n\
  - Set RUST_LOG=planar=debug to trace candidate generation and insertion on stderr.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "parse" => args.command = Command::Parse,
            "extend" => args.command = Command::Extend,
            "--pretty" => args.pretty = true,
            "--validate-base" => args.validate_base = true,
            "--extra" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.extra_edges = Some(n.parse::<i64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--max-distance" => {
                let Some(n) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.max_distance =
                    Some(n.parse::<usize>().map_err(|_| CliError::Usage(usage()))?);
            }
            "--out" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(path.clone());
            }
            "-" => args.input = Some("-".to_string()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            other => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(other.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool, out: Option<&str>) -> Result<(), CliError> {
    let mut bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    bytes.push(b'\n');
    match out {
        None => std::io::stdout().lock().write_all(&bytes)?,
        Some(path) => std::fs::write(path, bytes)?,
    }
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;
    let problem: Problem = serde_json::from_str(&text)?;

    let mut options = problem.options.clone();
    if let Some(n) = args.extra_edges {
        options.num_extra_edges = n;
    }
    if args.max_distance.is_some() {
        options.max_distance = args.max_distance;
    }
    options.validate_base |= args.validate_base;
    tracing::debug!(items = problem.items.len(), ?options, "parsing sequence");

    let parser = Parser::new(options);
    let graph = match args.command {
        Command::Parse => parser.parse(&problem.items, &problem.scores),
        Command::Extend => {
            let numas = index(&problem.items);
            let base = Graph::from_records(&numas, &problem.base)?;
            parser.extend(&base, &problem.items, &problem.scores)?
        }
    };

    write_json(&GraphOut::from_graph(&graph), args.pretty, args.out.as_deref())
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
