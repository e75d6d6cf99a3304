// SPDX-License-Identifier: MPL-2.0
use label_desk::app::{self, Flags};
use label_desk::error::{Error, Result};
use label_desk::logging;
use std::process::ExitCode;

const HELP: &str = "\
LabelDesk - printer and label-size selection

USAGE:
  label_desk [OPTIONS] [PRINTER]

ARGS:
  <PRINTER>                    Device of the default printer, e.g. tcp://192.168.0.23:9100
                               (used when no [[printers]] are configured)

OPTIONS:
  -h, --help                   Prints help information
  --lang <LOCALE>              UI language, e.g. en-US or fr
  --config-dir <DIR>           Directory holding settings.toml
  --data-dir <DIR>             Directory holding the saved printer selection
  --loglevel <FILTER>          Log filter, e.g. debug or label_desk=trace
  --model <MODEL>              Model of the default printer
  --default-label-size <SIZE>  Default label size of the default printer
";

/// Parses command-line arguments; `None` means help was requested.
fn parse_args(mut args: pico_args::Arguments) -> Result<Option<Flags>> {
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        loglevel: args.opt_value_from_str("--loglevel")?,
        model: args.opt_value_from_str("--model")?,
        default_label_size: args.opt_value_from_str("--default-label-size")?,
        printer: args.opt_free_from_str()?,
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        return Err(Error::Cli(format!(
            "unexpected arguments: {}",
            remaining
                .iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        )));
    }

    Ok(Some(flags))
}

fn main() -> ExitCode {
    let flags = match parse_args(pico_args::Arguments::from_env()) {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(error) => {
            eprintln!("{error}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    logging::init(flags.loglevel.as_deref());

    let startup = match app::prepare(&flags) {
        Ok(startup) => startup,
        Err(error) => {
            tracing::error!(%error, "startup failed");
            eprintln!("{error}");
            return ExitCode::from(2);
        }
    };

    match app::run(startup) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
