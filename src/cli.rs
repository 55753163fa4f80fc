use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(name = "pomdeploy")]
#[command(author = "Alberto Cavalcante")]
#[command(version)]
#[command(
    about = "Generate mvn deploy-file commands for every artifact in a Maven build output",
    long_about = "Walks a build output tree, stops at every directory holding a file that \
matches --regex, reads the POM next to it and prints one `mvn deploy:deploy-file` command \
per artifact.\n\nWith --compare-to, compares artifact sizes against a second build output \
instead."
)]
pub struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable coloured section headers
    #[arg(long)]
    pub no_color: bool,

    /// Root of the build output to scan [default: current directory]
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<String>,

    /// Second build output to compare artifact sizes against; empty disables
    #[arg(long = "compare-to", visible_alias = "compareTo", value_name = "DIR")]
    pub compare_to: Option<String>,

    /// Pattern of the file name that marks an artifact directory [default: .jar$]
    #[arg(long, value_name = "REGEX")]
    pub regex: Option<String>,

    /// Repository URL passed as -Durl [default: NEXUS_URL]
    #[arg(long, env = "POMDEPLOY_URL")]
    pub url: Option<String>,

    /// Repository id passed as -DrepositoryId [default: REPO_ID]
    #[arg(long = "repo-id", visible_alias = "repoId", env = "POMDEPLOY_REPO_ID")]
    pub repo_id: Option<String>,

    /// Token placed before every command
    #[arg(long, allow_hyphen_values = true)]
    pub prefix: Option<String>,

    /// Token placed after every command [default: -e]
    #[arg(long, allow_hyphen_values = true)]
    pub suffix: Option<String>,

    /// Only generate commands for this packaging [default: jar]
    #[arg(long, value_name = "PACKAGING")]
    pub packing: Option<String>,

    /// File suffix of jar-packaged artifacts [default: .jar]
    #[arg(long, value_name = "SUFFIX")]
    pub artifact_suffix: Option<String>,

    /// Substitute values verbatim instead of shell-quoting them
    #[arg(long)]
    pub no_quote: bool,

    /// Config file [default: pomdeploy.toml in the scan root]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}
