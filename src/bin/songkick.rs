//! Command-line access to the Songkick API.
//!
//! Prints the response status followed by the body (pretty JSON or text).
//!
//! ```sh
//! export SONGKICK_API_KEY='...'
//! cargo run --bin songkick -- artists "Radiohead" --per-page 5
//! cargo run --bin songkick -- events sk:24426 --from 2024-06-01 --to 2024-06-30
//! cargo run --bin songkick -- gigography 253846 --order desc
//! cargo run --bin songkick -- similar 253846
//! cargo run --bin songkick -- event 27989954
//! cargo run --bin songkick -- venue 17522
//! ```

use chrono::NaiveDate;
use songkick_api::{
    Body, EventSearchOptions, GigographyOptions, Location, Order, Response, SearchOptions,
    Songkick,
};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: songkick <command> <argument> [options]

Commands:
  artists <query>           Search artists by name
  events <location>         Upcoming events (sk:<id>, geo:<lat>,<lng>, ip:<ip>, clientip)
  gigography <artist>       Past events of an artist (Songkick id or MusicBrainz id)
  similar <artist>          Artists similar to an artist
  event <id>                Event details
  venue <id>                Venue details

Options:
  --page <n>                Page number (default 1)
  --per-page <n>            Results per page (default 50)
  --order <asc|desc>        Gigography order (default asc)
  --from <YYYY-MM-DD>       Earliest date, requires --to
  --to <YYYY-MM-DD>         Latest date, requires --from

Environment:
  SONGKICK_API_KEY          API key (required)
  RUST_LOG                  Log filter, e.g. songkick_client=debug";

#[derive(Debug, Default)]
struct Flags {
    page: Option<u32>,
    per_page: Option<u32>,
    order: Option<Order>,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, argument, rest) = match args.as_slice() {
        [command, argument, rest @ ..] => (command.as_str(), argument.as_str(), rest),
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };

    let flags = parse_flags(rest).unwrap_or_else(|e| {
        eprintln!("Error: {e}\n\n{USAGE}");
        std::process::exit(2);
    });

    let client = Songkick::from_env().unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        eprintln!();
        eprintln!("  Export your key: export SONGKICK_API_KEY='...'");
        std::process::exit(1);
    });

    match run(&client, command, argument, flags).await {
        Ok(response) => print_response(&response),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(
    client: &Songkick,
    command: &str,
    argument: &str,
    flags: Flags,
) -> Result<Response, Box<dyn std::error::Error>> {
    let search = SearchOptions {
        page: flags.page,
        per_page: flags.per_page,
    };

    let response = match command {
        "artists" => client.find_artists(argument, &search).await?,
        "events" => {
            let location: Location = argument.parse()?;
            let options = EventSearchOptions {
                page: flags.page,
                per_page: flags.per_page,
                min_date: flags.min_date,
                max_date: flags.max_date,
            };
            client.find_events(&location, &options).await?
        }
        "gigography" => {
            let options = GigographyOptions {
                page: flags.page,
                per_page: flags.per_page,
                order: flags.order,
                min_date: flags.min_date,
                max_date: flags.max_date,
            };
            client.find_events_by_artist(argument, &options).await?
        }
        "similar" => client.find_similar_artist(argument, &search).await?,
        "event" => client.get_event(argument.parse()?).await?,
        "venue" => client.get_venue(argument.parse()?).await?,
        other => return Err(format!("unknown command '{other}'").into()),
    };

    Ok(response)
}

fn parse_flags(args: &[String]) -> Result<Flags, String> {
    let mut flags = Flags::default();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;

        match flag.as_str() {
            "--page" => flags.page = Some(parse_number(flag, value)?),
            "--per-page" => flags.per_page = Some(parse_number(flag, value)?),
            "--order" => {
                flags.order = Some(match value.as_str() {
                    "asc" => Order::Asc,
                    "desc" => Order::Desc,
                    _ => return Err(format!("--order must be asc or desc, got '{value}'")),
                })
            }
            "--from" => flags.min_date = Some(parse_date(flag, value)?),
            "--to" => flags.max_date = Some(parse_date(flag, value)?),
            _ => return Err(format!("unknown option {flag}")),
        }
    }

    if flags.min_date.is_some() != flags.max_date.is_some() {
        return Err("--from and --to must be given together".to_string());
    }

    Ok(flags)
}

fn parse_number(flag: &str, value: &str) -> Result<u32, String> {
    match value.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("{flag} expects a number of 1 or more, got '{value}'")),
    }
}

fn parse_date(flag: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("{flag} expects YYYY-MM-DD, got '{value}'"))
}

fn print_response(response: &Response) {
    println!("HTTP {}", response.status());

    match response.body() {
        Some(Body::Json(value)) => match serde_json::to_string_pretty(value) {
            Ok(pretty) => println!("{pretty}"),
            Err(_) => println!("{value}"),
        },
        Some(Body::Text(text)) => println!("{text}"),
        None => {}
    }
}
