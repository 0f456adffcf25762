// SPDX-License-Identifier: MPL-2.0
use iced_vplayer::app::{self, Flags};
use log::LevelFilter;
use std::path::PathBuf;

const HELP: &str = "\
iced_vplayer - video player widget demo

USAGE:
  iced_vplayer [OPTIONS]

OPTIONS:
  --config <path>     Read the widget configuration from <path>
  --url <url>         Media URL (overrides the configuration)
  --host <selector>   Host node selector: #id, .class or tag (default: #stage)
  --duration <secs>   Length of the simulated media (default: 60)
  --lang <id>         UI language (e.g. en-US, fr)
  -h, --help          Print this help

Set ICED_VPLAYER_LOG (e.g. debug) to change the log level.
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_path: args.opt_value_from_str::<_, PathBuf>("--config")?,
        media_url: args.opt_value_from_str("--url")?,
        host_selector: args.opt_value_from_str("--host")?,
        duration_secs: args.opt_value_from_str("--duration")?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        log::warn!("Ignoring unexpected arguments: {remaining:?}");
    }
    Ok(flags)
}

fn main() -> iced::Result {
    pretty_env_logger::formatted_builder()
        .filter_level(LevelFilter::Info)
        .parse_env("ICED_VPLAYER_LOG")
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("Error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}
