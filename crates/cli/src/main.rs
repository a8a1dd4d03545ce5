use anyhow::{anyhow, Context};
use config::{Config, File};
use hexmap::{
    timed, AxialCoordinates, CubeCoordinates, Direction, GridConfig, HexGrid,
    OffsetCoordinates, TileGrid, Vec2D,
};
use log::{debug, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fmt,
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for poking at hex grid coordinates
#[derive(Debug, StructOpt)]
#[structopt(name = "hexmap")]
struct Opt {
    /// Path to a config file that defines the grid. Only needed for commands
    /// that work on the plane or on a whole grid. Supported formats: JSON,
    /// TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    /// Print output as JSON instead of one value per line
    #[structopt(long)]
    json: bool,

    #[structopt(subcommand)]
    command: Command,
}

// Coordinates are written as keys, e.g. `1,-2,1`. Those usually start with a
// hyphen, so every positional needs to allow that.
#[derive(Debug, StructOpt)]
enum Command {
    /// Print a coordinate in all three integer coordinate systems
    Convert {
        /// The coordinate key, e.g. `1,-2,1` for cube or `3,4` for the others
        #[structopt(allow_hyphen_values = true)]
        key: String,
        /// The coordinate system the key is written in
        #[structopt(long, default_value = "cube")]
        from: CoordinateSystem,
    },

    /// List the six neighbors of a cell, clockwise from east
    Neighbors {
        #[structopt(allow_hyphen_values = true)]
        cube: CubeCoordinates,
    },

    /// List the six diagonals of a cell, clockwise from east-south-east
    Diagonals {
        #[structopt(allow_hyphen_values = true)]
        cube: CubeCoordinates,
    },

    /// Number of steps between two cells
    Distance {
        #[structopt(allow_hyphen_values = true)]
        a: CubeCoordinates,
        #[structopt(allow_hyphen_values = true)]
        b: CubeCoordinates,
    },

    /// List the cells on a straight line between two cells
    Line {
        #[structopt(allow_hyphen_values = true)]
        a: CubeCoordinates,
        #[structopt(allow_hyphen_values = true)]
        b: CubeCoordinates,
    },

    /// List the cells exactly `range` steps from a center
    Ring {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinates,
        #[structopt(allow_hyphen_values = true)]
        range: i32,
        /// Direction of the first cell from the center
        #[structopt(long, default_value = "e")]
        start: Direction,
    },

    /// List the cells within `range` steps of a center, ring by ring
    Spiral {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinates,
        #[structopt(allow_hyphen_values = true)]
        range: i32,
        /// Direction of the first cell in each ring
        #[structopt(long, default_value = "e")]
        start: Direction,
        /// Start from the outermost ring and end at the center
        #[structopt(long)]
        inward: bool,
    },

    /// List the cells within `range` steps of a center, in no particular
    /// order
    Area {
        #[structopt(allow_hyphen_values = true)]
        center: CubeCoordinates,
        #[structopt(allow_hyphen_values = true)]
        range: i32,
    },

    /// Find the cell under a point on the plane, and which side of that cell
    /// the point is closest to
    Locate {
        #[structopt(allow_hyphen_values = true)]
        x: f64,
        #[structopt(allow_hyphen_values = true)]
        y: f64,
    },

    /// Build the configured tile grid and list its tiles
    Grid,

    /// Print the effective config, in TOML format
    Config,
}

/// The integer coordinate systems that keys can be written in
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum CoordinateSystem {
    Cube,
    Axial,
    Offset,
}

impl CoordinateSystem {
    fn parse_key(self, key: &str) -> anyhow::Result<CubeCoordinates> {
        let cube: CubeCoordinates = match self {
            Self::Cube => key.parse()?,
            Self::Axial => key.parse::<AxialCoordinates>()?.to_cubic(),
            Self::Offset => key.parse::<OffsetCoordinates>()?.to_cubic(),
        };
        Ok(cube)
    }
}

/// One cell, in every integer coordinate system
#[derive(Debug, Serialize)]
struct Conversion {
    cube: CubeCoordinates,
    axial: AxialCoordinates,
    offset: OffsetCoordinates,
}

impl From<CubeCoordinates> for Conversion {
    fn from(cube: CubeCoordinates) -> Self {
        Self {
            cube,
            axial: cube.to_axial(),
            offset: cube.to_offset(),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.cube, self.axial, self.offset)
    }
}

/// Where a point on the plane lands
#[derive(Debug, Serialize)]
struct Location {
    point: Vec2D,
    cell: Conversion,
    direction: Direction,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.point, self.cell, self.direction)
    }
}

/// Writes command output to stdout, as either text or JSON
struct Printer {
    json: bool,
}

impl Printer {
    fn print<T: fmt::Display + Serialize>(
        &self,
        value: &T,
    ) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            println!("{}", value);
        }
        Ok(())
    }

    fn print_all<T: fmt::Display + Serialize>(
        &self,
        values: &[T],
    ) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string(values)?);
        } else {
            for value in values {
                println!("{}", value);
            }
        }
        Ok(())
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<GridConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => {
            let config = load_config(config_path)?;
            debug!("Loaded config from {:?}", config_path);
            config
        }
        None => GridConfig::default(),
    };
    let printer = Printer { json: opt.json };

    match opt.command {
        Command::Convert { key, from } => {
            let cube = from
                .parse_key(&key)
                .with_context(|| format!("invalid {} key {:?}", from, key))?;
            printer.print(&Conversion::from(cube))?;
        }
        Command::Neighbors { cube } => printer.print_all(&cube.neighbors())?,
        Command::Diagonals { cube } => printer.print_all(&cube.diagonals())?,
        Command::Distance { a, b } => printer.print(&a.distance_to(b))?,
        Command::Line { a, b } => printer.print_all(&a.line_to(b))?,
        Command::Ring {
            center,
            range,
            start,
        } => printer.print_all(&center.ring_around(range, start)?)?,
        Command::Spiral {
            center,
            range,
            start,
            inward,
        } => {
            let spiral = if inward {
                center.spiral_around_inward(range, start)?
            } else {
                center.spiral_around_outward(range, start)?
            };
            printer.print_all(&spiral)?;
        }
        Command::Area { center, range } => {
            printer.print_all(&center.area_around(range)?)?
        }
        Command::Locate { x, y } => {
            let grid = HexGrid::from_config(&config)?;
            let point = Vec2D::new(x, y);
            let location = Location {
                point,
                cell: grid.point_to_cubic(point).into(),
                direction: grid.point_to_direction_in_hex(point)?,
            };
            printer.print(&location)?;
        }
        Command::Grid => {
            let grid = timed!(
                "Building grid",
                log::Level::Info,
                TileGrid::from_config(&config, Conversion::from)?
            );
            let cells: Vec<Conversion> =
                grid.into_tiles().into_iter().map(|tile| tile.data).collect();
            printer.print_all(&cells)?;
        }
        Command::Config => {
            if opt.json {
                println!("{}", serde_json::to_string(&config)?);
            } else {
                print!("{}", toml::to_string_pretty(&config)?);
            }
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
