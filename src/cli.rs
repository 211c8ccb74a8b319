use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rowdb", version, about = "In-memory single-table row store")]
pub struct Cli {
    /// Read commands from this file instead of standard input
    pub script: Option<PathBuf>,

    /// Prompt printed before each command is read
    #[arg(long, default_value = "db > ")]
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_stdin_and_standard_prompt() {
        let cli = Cli::parse_from(["rowdb"]);
        assert_eq!(cli.script, None);
        assert_eq!(cli.prompt, "db > ");
    }

    #[test]
    fn it_accepts_a_script_and_prompt() {
        let cli = Cli::parse_from(["rowdb", "cmds.txt", "--prompt", "> "]);
        assert_eq!(cli.script, Some(PathBuf::from("cmds.txt")));
        assert_eq!(cli.prompt, "> ");
    }
}
