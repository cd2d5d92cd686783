use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chessvoice", version, about = "Batch speech synthesis for chess personality packs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Generate(GenerateArgs),
    Say(SayArgs),
    Resolve(ResolveArgs),
    Voices(VoicesArgs),
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    #[arg(long, value_name = "DIR", help = "Personality pack root directory")]
    pub personalities_dir: Option<std::path::PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory of personality JSON files")]
    pub input_dir: Option<std::path::PathBuf>,

    #[arg(long, value_name = "DIR", help = "Directory for generated audio")]
    pub output_dir: Option<std::path::PathBuf>,

    #[arg(long, help = "Concurrent synthesis calls per batch")]
    pub batch_size: Option<usize>,

    #[arg(long, help = "Plan the run without calling the speech service")]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct SayArgs {
    #[arg(long, help = "Text to synthesize")]
    pub text: String,

    #[arg(long, help = "Voice identifier")]
    pub voice: String,

    #[arg(long, value_name = "PATH", help = "Save audio to file")]
    pub output: std::path::PathBuf,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[arg(long, help = "Personality name")]
    pub name: String,

    #[arg(long, help = "Personality theme")]
    pub theme: String,

    #[arg(value_name = "RESPONSE_ID", help = "Response identifier")]
    pub response_id: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct VoicesArgs {
    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[arg(long, help = "Show current config as JSON")]
    pub show: bool,

    #[arg(long, help = "Create default config file")]
    pub init: bool,

    #[arg(long, help = "Validate configuration")]
    pub validate: bool,
}
