//! `unidoc` render command implementation.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use unidoc_config::{CliSettings, Config};
use unidoc_renderer::{ItalicStyle, StrongStyle, Styling, convert};

use crate::error::CliError;

/// Text used to preview each style in `--help`.
const SAMPLE: &str = "Sample text";

/// Arguments for rendering a markdown document.
#[derive(Args, Debug)]
pub(crate) struct RenderArgs {
    /// Markdown file to convert (default: stdin, also with `-`).
    file: Option<PathBuf>,

    /// Style for italic text (overrides config).
    #[arg(long, value_name = "STYLE")]
    italic_style: Option<ItalicStyle>,

    /// Style for strong text (overrides config).
    #[arg(long, value_name = "STYLE")]
    strong_style: Option<StrongStyle>,

    /// Path to configuration file (default: auto-discover unidoc.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output (debug logs on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl RenderArgs {
    /// Convert the input and print the result on stdout.
    ///
    /// Nothing is printed for empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the input cannot be read or
    /// is not valid UTF-8, or stdout cannot be written.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            italic_style: self.italic_style,
            strong_style: self.strong_style,
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;
        if let Some(path) = &config.config_path {
            tracing::debug!(path = %path.display(), "Loaded configuration");
        }

        let input = self.read_input()?;
        let text = convert(input.trim_ascii(), &config.render_config())?;
        if !text.is_empty() {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{text}")?;
        }
        Ok(())
    }

    /// Read the whole input from the file argument or stdin.
    fn read_input(&self) -> Result<Vec<u8>, CliError> {
        match self.file.as_deref() {
            Some(path) if path != Path::new("-") => {
                fs::read(path).map_err(|source| CliError::Read {
                    name: path.display().to_string(),
                    source,
                })
            }
            _ => {
                let mut input = Vec::new();
                io::stdin()
                    .lock()
                    .read_to_end(&mut input)
                    .map_err(|source| CliError::Read {
                        name: "stdin".to_owned(),
                        source,
                    })?;
                Ok(input)
            }
        }
    }
}

/// Help section listing every style selector with a rendered sample,
/// followed by usage examples.
pub(crate) fn style_help() -> String {
    let mut help = String::from("Italic styles:\n");
    for style in ItalicStyle::ALL {
        push_style_line(
            &mut help,
            style.as_str(),
            &Styling::Italic(style).apply(SAMPLE),
            style == ItalicStyle::default(),
        );
    }
    help.push_str("\nStrong styles:\n");
    for style in StrongStyle::ALL {
        push_style_line(
            &mut help,
            style.as_str(),
            &Styling::Strong(style).apply(SAMPLE),
            style == StrongStyle::default(),
        );
    }
    help.push_str(USAGE_EXAMPLES);
    help
}

const USAGE_EXAMPLES: &str = "
Examples:
  echo '# Hello World' | unidoc
  unidoc README.md
  unidoc --italic-style script < document.md
";

fn push_style_line(help: &mut String, name: &str, sample: &str, is_default: bool) {
    let default = if is_default { " (default)" } else { "" };
    help.push_str(&format!("  {name:<20}{sample}{default}\n"));
}
