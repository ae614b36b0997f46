use clap::Parser;

pub const DEFAULT_MAX_TOKENS: u32 = 60;

#[derive(Parser, Debug)]
#[command(name = "acommit")]
#[command(about = "Generate a commit message for your staged changes and open it in your git editor")]
#[command(version)]
pub struct Cli {
    /// Maximum number of tokens the model may generate
    #[arg(
        short = 'm',
        long,
        env = "ACOMMIT_MAX_TOKENS",
        default_value_t = DEFAULT_MAX_TOKENS,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub max_tokens: u32,
}
