use std::fs;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use glass_generator::{export, GlassWidget, ParamPatch};

#[derive(Parser)]
#[command(name = "glass", version)]
#[command(about = "Glassmorphism generator: live preview, CSS and utility classes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the interactive generator page
    Serve {
        /// Address to bind
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,

        /// Server port
        #[arg(long, default_value_t = 3333)]
        port: u16,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Print the generated styles for the given parameters
    Css {
        #[command(flatten)]
        params: ParamArgs,

        /// What to print
        #[arg(long, value_enum, default_value_t = OutputFormat::Css)]
        format: OutputFormat,

        /// Selector used by `--format rule`
        #[arg(long, default_value = export::DEFAULT_SELECTOR)]
        selector: String,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },
}

/// Initial parameter values. Omitted flags keep the defaults.
#[derive(Args)]
struct ParamArgs {
    /// Backdrop blur in px (0-20)
    #[arg(long)]
    blur: Option<u32>,

    /// Background opacity in percent (0-100)
    #[arg(long)]
    opacity: Option<u32>,

    /// Tint as #rrggbb
    #[arg(long)]
    color: Option<String>,

    /// Corner radius in px (0-50)
    #[arg(long)]
    border_radius: Option<u32>,

    /// Shadow offset in px (0-20)
    #[arg(long = "shadow")]
    shadow_intensity: Option<u32>,

    /// Draw a translucent white border
    #[arg(long)]
    outline: bool,
}

impl ParamArgs {
    fn into_widget(self) -> Result<GlassWidget> {
        let patch = ParamPatch {
            blur: self.blur,
            opacity: self.opacity,
            border_radius: self.border_radius,
            shadow_intensity: self.shadow_intensity,
            show_outline: self.outline.then_some(true),
            color: self.color,
        };
        let mut widget = GlassWidget::new();
        widget.apply(&patch).context("invalid parameters")?;
        Ok(widget)
    }
}

/// Output format for the css command.
#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Declaration block (default)
    Css,
    /// Utility-class string
    Tailwind,
    /// Value for an HTML style attribute
    Style,
    /// Declarations wrapped in a selector
    Rule,
    /// React element with className and style
    Jsx,
    /// Parameters and every derived output as JSON
    Json,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port, params } => {
            let widget = params.into_widget()?;
            let rt = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
            rt.block_on(glass_generator::server::run_server(
                widget,
                SocketAddr::new(host, port),
            ))
            .context("server failed")?;
        }

        Commands::Css {
            params,
            format,
            selector,
            o,
        } => {
            let widget = params.into_widget()?;
            let derived = widget.derived();
            let output = match format {
                OutputFormat::Css => derived.style_sheet.clone(),
                OutputFormat::Tailwind => format!("{}\n", derived.utility_classes),
                OutputFormat::Style => format!("{}\n", derived.inline_style.to_style_attr()),
                OutputFormat::Rule => export::css_rule(derived, &selector),
                OutputFormat::Jsx => export::jsx_element(derived),
                OutputFormat::Json => {
                    let mut json = serde_json::to_string_pretty(&widget.snapshot(Duration::ZERO))?;
                    json.push('\n');
                    json
                }
            };

            if let Some(out_path) = o {
                fs::write(&out_path, &output)
                    .with_context(|| format!("cannot write '{}'", out_path.display()))?;
                log::info!("wrote {} ({} bytes)", out_path.display(), output.len());
            } else {
                print!("{output}");
            }
        }
    }
    Ok(())
}
