use std::ffi::OsString;

use clap::Parser;

/// Command line of both notifiers: `<program> <action> [<message>...]`
///
/// clap's own help and version flags are off. Everything after the program
/// name belongs to the caller, so `send --help` or `send -- x` are message
/// text and `-h` alone is just an action nobody knows.
#[derive(Parser, Debug, PartialEq, Eq)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub(crate) struct Cli {
    /// Set by the detached delivery child, never by a caller
    #[arg(long = "deliver", hide = true)]
    pub deliver: bool,

    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    words: Vec<String>,
}

impl Cli {
    /// `None` means the arguments did not parse, which is treated the same as
    /// an unknown action.
    pub fn parse_args<I, T>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match Cli::try_parse_from(args) {
            Ok(cli) => Some(cli),
            Err(e) => {
                tracing::debug!("ignoring arguments: {e}");
                None
            }
        }
    }

    pub fn action(&self) -> Option<&str> {
        self.words.first().map(String::as_str)
    }

    /// Words after the action, verbatim
    pub fn message(&self) -> &[String] {
        self.words.get(1..).unwrap_or_default()
    }
}
