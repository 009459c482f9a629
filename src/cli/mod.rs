use clap::Parser;

pub mod handlers;

/// Markup tags used by `cli.help.template` and the ANSI style each maps to.
const HELP_STYLES: &[(&str, &str)] = &[
    ("title", "\x1b[1;33m"),
    ("hl", "\x1b[1;36m"),
    ("cmd", "\x1b[36m"),
    ("group", "\x1b[1;32m"),
    ("dim", "\x1b[2m"),
];

const ANSI_RESET: &str = "\x1b[0m";

/// Expands the `<tag>...</tag>` markup of a help template. With `colorize`
/// off the markup is removed and the plain text kept.
fn render_help_markup(template: &str, colorize: bool) -> String {
    HELP_STYLES
        .iter()
        .fold(template.to_string(), |text, (tag, style)| {
            let (open, close) = if colorize { (*style, ANSI_RESET) } else { ("", "") };
            text.replace(&format!("<{tag}>"), open)
                .replace(&format!("</{tag}>"), close)
        })
}

fn build_help_string() -> &'static str {
    let colorize = colored::control::SHOULD_COLORIZE.should_colorize();
    // clap wants a 'static template; this runs once per process.
    Box::leak(render_help_markup(t!("cli.help.template"), colorize).into_boxed_str())
}

/// annocmd: annotation-driven command metadata.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    // `help_template` takes full control of the output.
    help_template = { build_help_string() },
)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// The action to run: `tags`, `help`, `describe` or `validate`.
    pub action: Option<String>,

    /// All remaining arguments, passed untouched to the action's handler.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
