use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use inkboard::cursor::cursor_css;
use inkboard::draw::{resolve_hex, resolve_translucent};
use inkboard::util::uuid4;
use inkboard::{BrushState, Config, CursorProvider, DrawingTool, Tool};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("INKBOARD_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "inkboard")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Freehand drawing tools for whiteboard canvases")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Apply a tool to a fresh brush and print the resulting brush state as JSON
    Configure {
        /// Tool to activate (defaults to the configured tool)
        #[arg(long, short = 't', value_enum)]
        tool: Option<Tool>,

        /// Brush width in pixels (defaults to the configured width)
        #[arg(long, short = 'w')]
        width: Option<f64>,

        /// Hex code or color name (defaults to the configured color)
        #[arg(long, short = 'c')]
        color: Option<String>,
    },

    /// Resolve a hex code or color name
    Color {
        /// `#RGB`, `#RRGGBB` or a CSS color name
        descriptor: String,

        /// Print the translucent highlighter form instead of canonical hex
        #[arg(long)]
        translucent: bool,
    },

    /// Print the CSS cursor value for a tool identity (e.g. Pencil)
    Cursor {
        /// Tool identity; unknown identities print the fallback cursor
        #[arg(required_unless_present = "list")]
        identity: Option<String>,

        /// List the identities that have a custom cursor
        #[arg(long, conflicts_with = "identity")]
        list: bool,
    },

    /// Generate random version-4 identifiers
    Uuid {
        #[arg(long, short = 'n', default_value_t = 1)]
        count: usize,
    },

    /// Write the example configuration to ~/.config/inkboard/config.toml
    InitConfig,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Configure { tool, width, color } => {
            let config = Config::load()?;
            let tool = tool.unwrap_or(config.drawing.default_tool);
            let mut tool_config = config.drawing.tool_config();
            if let Some(width) = width {
                tool_config.line_width = width;
            }
            if let Some(color) = color {
                tool_config.line_color = color;
            }

            log::info!("Configuring {} brush", tool);
            let mut brush = BrushState::default();
            tool.configure(&mut brush, &tool_config)
                .with_context(|| format!("Failed to configure {tool}"))?;

            println!("{}", serde_json::to_string_pretty(&brush)?);
        }
        Command::Color {
            descriptor,
            translucent,
        } => {
            let resolved = if translucent {
                resolve_translucent(&descriptor)?
            } else {
                resolve_hex(&descriptor)?
            };
            println!("{resolved}");
        }
        Command::Cursor { identity, list } => {
            if list {
                for identity in CursorProvider::identities() {
                    println!("{identity}");
                }
            } else if let Some(identity) = identity {
                println!("{}", cursor_css(&identity));
            }
        }
        Command::Uuid { count } => {
            for _ in 0..count {
                println!("{}", uuid4());
            }
        }
        Command::InitConfig => {
            let path = Config::create_default_file()?;
            println!("Created {}", path.display());
        }
    }

    Ok(())
}
