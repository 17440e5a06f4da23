//! # SoundTouch CLI Example
//!
//! A small command-line remote for one speaker.
//!
//! ```bash
//! cargo run --example cli_example -- 192.168.1.20 now-playing
//! cargo run --example cli_example -- 192.168.1.20 volume 25
//! SOUNDTOUCH_LOG_MODE=debug cargo run --example cli_example -- 192.168.1.20 key NEXT_TRACK
//! ```
//!
//! Query results are printed as JSON.

use std::process::ExitCode;

use serde::Serialize;
use soundtouch_api::logging::init_logging_from_env;
use soundtouch_api::{ApiError, Endpoint, Key, RepeatMode, SoundTouchClient};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Api(#[from] ApiError),

    #[error("Output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Usage error: {0}")]
    Usage(String),
}

type Result<T> = std::result::Result<T, CliError>;

const USAGE: &str = "usage: cli_example <host> <command> [argument]

queries:  info | capabilities | now-playing | sources | volume | presets
          bass | bass-capabilities | tone | raw <path>
commands: play | pause | stop | toggle | next | previous | power
          volume <0-100> | mute | unmute | bass <-10..10>
          preset <1-6> | source <SOURCE> [account] | name <NAME>
          shuffle <on|off> | repeat <off|one|all> | key <KEY_NAME>";

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = init_logging_from_env() {
        eprintln!("logging disabled: {}", e);
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Usage(message)) => {
            eprintln!("{}\n\n{}", message, USAGE);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &[String]) -> Result<()> {
    let (host, command) = match args {
        [host, command, ..] => (host, command.as_str()),
        _ => return Err(CliError::Usage("missing host or command".to_string())),
    };
    let argument = args.get(2).map(String::as_str);

    let client = SoundTouchClient::new(host.as_str())?;

    match command {
        "info" => print(&client.get_info().await?),
        "capabilities" => print(&client.get_capabilities().await?),
        "now-playing" => print(&client.get_now_playing().await?),
        "sources" => print(&client.get_sources().await?),
        "presets" => print(&client.get_presets().await?),
        "bass-capabilities" => print(&client.get_bass_capabilities().await?),
        "tone" => print(&client.get_tone().await?),
        "raw" => {
            let path = required(argument, "raw needs an endpoint path")?;
            let endpoint = Endpoint::ALL
                .into_iter()
                .find(|e| e.path().trim_start_matches('/') == path.trim_start_matches('/'))
                .ok_or_else(|| CliError::Usage(format!("unknown endpoint '{}'", path)))?;
            print(&client.fetch_raw(endpoint).await?)
        }
        "volume" => match argument {
            None => print(&client.get_volume().await?),
            Some(level) => Ok(client.set_volume(number(level)?).await?),
        },
        "bass" => match argument {
            None => print(&client.get_bass().await?),
            Some(level) => Ok(client.set_bass(number(level)?).await?),
        },
        "play" => Ok(client.play().await?),
        "pause" => Ok(client.pause().await?),
        "stop" => Ok(client.stop().await?),
        "toggle" => Ok(client.play_pause().await?),
        "next" => Ok(client.next_track().await?),
        "previous" => Ok(client.previous_track().await?),
        "power" => Ok(client.power().await?),
        "mute" => Ok(client.mute().await?),
        "unmute" => Ok(client.unmute().await?),
        "preset" => {
            let id = number(required(argument, "preset needs a slot number")?)?;
            Ok(client.select_preset(id).await?)
        }
        "source" => {
            let source = required(argument, "source needs a source name")?;
            Ok(client.select_source(source, args.get(3).map(String::as_str)).await?)
        }
        "name" => Ok(client.set_name(required(argument, "name needs a value")?).await?),
        "shuffle" => match required(argument, "shuffle needs on or off")? {
            "on" => Ok(client.set_shuffle(true).await?),
            "off" => Ok(client.set_shuffle(false).await?),
            other => Err(CliError::Usage(format!("unknown shuffle setting '{}'", other))),
        },
        "repeat" => {
            let mode = match required(argument, "repeat needs off, one or all")? {
                "off" => RepeatMode::Off,
                "one" => RepeatMode::One,
                "all" => RepeatMode::All,
                other => return Err(CliError::Usage(format!("unknown repeat mode '{}'", other))),
            };
            Ok(client.set_repeat(mode).await?)
        }
        "key" => {
            let name = required(argument, "key needs a key name")?;
            // Unknown names are sent as-is so newer firmware keys still work
            match name.parse::<Key>() {
                Ok(key) => Ok(client.press_key(key).await?),
                Err(_) => Ok(client.press_raw_key(name).await?),
            }
        }
        other => Err(CliError::Usage(format!("unknown command '{}'", other))),
    }
}

fn print<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn required<'a>(argument: Option<&'a str>, message: &str) -> Result<&'a str> {
    argument.ok_or_else(|| CliError::Usage(message.to_string()))
}

fn number<T: std::str::FromStr>(raw: &str) -> Result<T> {
    raw.parse()
        .map_err(|_| CliError::Usage(format!("'{}' is not a valid number", raw)))
}
