pub mod cli;
pub mod config;
pub mod generate;
pub mod personality;
pub mod tts;
pub mod voices;

use anyhow::Context;
use cli::{Cli, Commands};
use tts::SpeechService;

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    setup_tracing(cli.verbose);

    match cli.command {
        Commands::Generate(args) => generate_cmd(args).await,
        Commands::Say(args) => say(args).await,
        Commands::Resolve(args) => resolve(args),
        Commands::Voices(args) => voices_cmd(args),
        Commands::Config(args) => config_cmd(args),
    }
}

fn setup_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

async fn generate_cmd(args: cli::GenerateArgs) -> anyhow::Result<()> {
    let mut config = config::Config::load().context("load config")?;
    if let Some(dir) = args.personalities_dir {
        config.personalities_dir = dir;
    }
    if let Some(dir) = args.input_dir {
        config.input_dir = Some(dir);
    }
    if let Some(dir) = args.output_dir {
        config.output_dir = Some(dir);
    }
    if let Some(batch_size) = args.batch_size {
        config.batch_size = batch_size;
    }
    config.validate()?;

    let voices = config.voice_map()?;
    let tasks = generate::plan(&config.input_dir(), &voices)?;

    if args.dry_run {
        for task in &tasks {
            println!("{} -> {}", task.response_id, task.voice);
        }
        println!("{} task(s) planned", tasks.len());
        return Ok(());
    }

    let client = tts::HttpSpeechClient::new(&config.speech)?;
    generate::execute(&tasks, &client, &config.output_dir(), config.batch_size).await?;

    Ok(())
}

async fn say(args: cli::SayArgs) -> anyhow::Result<()> {
    let config = config::Config::load().context("load config")?;
    let client = tts::HttpSpeechClient::new(&config.speech)?;

    let audio = client
        .synthesize(&args.text, &args.voice)
        .await
        .context("synthesize")?;

    std::fs::write(&args.output, &audio).context("write output")?;
    println!("Wrote {}", args.output.display());

    Ok(())
}

fn resolve(args: cli::ResolveArgs) -> anyhow::Result<()> {
    let config = config::Config::load().context("load config")?;
    let map = config.voice_map()?;

    let role = voices::Role::from_response_id(&args.response_id);
    let theme = voices::theme_key(&args.name, &args.theme);
    let voice = map.resolve(&args.name, &args.theme, &args.response_id);

    if args.json {
        #[derive(serde::Serialize)]
        struct ResolveOutput<'a> {
            role: &'static str,
            theme: &'static str,
            voice: &'a str,
        }

        let out = ResolveOutput {
            role: role.as_str(),
            theme,
            voice: &voice,
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("Role: {}", role.as_str());
    println!("Theme: {theme}");
    println!("Voice: {voice}");

    Ok(())
}

fn voices_cmd(args: cli::VoicesArgs) -> anyhow::Result<()> {
    let config = config::Config::load().context("load config")?;
    let map = config.voice_map()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
        return Ok(());
    }

    let mut themes: Vec<_> = map.themes().iter().collect();
    themes.sort_by(|a, b| a.0.cmp(b.0));
    for (theme, table) in themes {
        println!("{theme}:");
        if let Some(default) = &table.default {
            println!("  default: {default}");
        }
        for role in voices::Role::ALL {
            if let Some(voice) = table.roles.get(&role) {
                println!("  {}: {}", role.as_str(), voice);
            }
        }
    }

    Ok(())
}

fn config_cmd(args: cli::ConfigArgs) -> anyhow::Result<()> {
    if args.init {
        let path = config::Config::init_default()?;
        println!("Initialized config at {}", path.display());
        return Ok(());
    }

    if args.show {
        let config = config::Config::load()?;
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.validate {
        let config = config::Config::load()?;
        config.validate()?;
        println!("Config OK");
        return Ok(());
    }

    let path = config::Config::default_path()?;
    println!("{}", path.display());
    Ok(())
}
