// src/session.rs
//
// Line-driven interactive directory: every input change re-renders in full.

use anyhow::{bail, Result};
use std::fmt::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use crate::dashboard::Dashboard;
use crate::filter::options;
use crate::record::fields;
use crate::render::render;

pub const HELP: &str = "\
commands:
  search <text>      free-text search over name, industry and headquarters
  exchange <value>   exact exchange (empty to clear)
  sector <value>     exact sector (empty to clear)
  clear              reset search, exchange and sector
  options            list exchanges and sectors
  help               show this text
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Exchange(String),
    Sector(String),
    Clear,
    Options,
    Help,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.trim_start().split_once(' ') {
            Some((w, r)) => (w, r.trim()),
            None => (line.trim(), ""),
        };
        Ok(match word {
            "search" | "s" => Command::Search(rest.to_string()),
            "exchange" | "e" => Command::Exchange(rest.to_string()),
            "sector" => Command::Sector(rest.to_string()),
            "clear" | "c" => Command::Clear,
            "options" | "o" => Command::Options,
            "help" | "h" | "?" => Command::Help,
            "quit" | "q" | "exit" => Command::Quit,
            other => bail!("unknown command {:?} (try `help`)", other),
        })
    }

    /// Apply to `dashboard` and return what to print, or `None` to stop.
    pub fn apply(self, dashboard: &mut Dashboard) -> Option<String> {
        match self {
            Command::Search(s) => dashboard.set_search(s),
            Command::Exchange(e) => dashboard.set_exchange(e),
            Command::Sector(s) => dashboard.set_sector(s),
            Command::Clear => dashboard.clear_filters(),
            Command::Options => return Some(list_options(dashboard)),
            Command::Help => return Some(HELP.to_string()),
            Command::Quit => return None,
        }
        debug!(filter = ?dashboard.filter(), "filter changed");
        Some(render(dashboard))
    }
}

fn list_options(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    for (title, field) in [("Exchanges", fields::EXCHANGE), ("Sectors", fields::SECTOR)] {
        let _ = writeln!(out, "{}: {}", title, options(dashboard.records(), field).join(", "));
    }
    out
}

/// Read commands from `input` until EOF or `quit`, writing each result to
/// `output`.
pub async fn run<R, W>(dashboard: &mut Dashboard, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(render(dashboard).as_bytes()).await?;
    output.write_all(b"\n> ").await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            output.write_all(b"> ").await?;
            output.flush().await?;
            continue;
        }
        let text = match Command::parse(&line) {
            Ok(cmd) => match cmd.apply(dashboard) {
                Some(text) => text,
                None => break,
            },
            Err(e) => {
                warn!(%line, "bad command");
                e.to_string()
            }
        };
        output.write_all(text.as_bytes()).await?;
        output.write_all(b"\n> ").await?;
        output.flush().await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::render::EMPTY_TITLE;

    fn loaded() -> Dashboard {
        let rows = [
            ("Riot Games", "NASDAQ", "Entertainment"),
            ("Valve", "", "Entertainment"),
            ("Unity", "NYSE", "Technology"),
        ];
        let records = rows
            .iter()
            .map(|(n, e, s)| {
                [
                    (fields::COMPANY_NAME, *n),
                    (fields::EXCHANGE, *e),
                    (fields::SECTOR, *s),
                ]
                .into_iter()
                .collect::<Record>()
            })
            .collect();
        let mut d = Dashboard::new();
        d.finish(Ok(records));
        d
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            Command::parse("search riot games").unwrap(),
            Command::Search("riot games".into())
        );
        assert_eq!(Command::parse("search").unwrap(), Command::Search(String::new()));
        assert_eq!(Command::parse("exchange NASDAQ\n").unwrap(), Command::Exchange("NASDAQ".into()));
        assert_eq!(Command::parse("  clear ").unwrap(), Command::Clear);
        assert_eq!(Command::parse("q").unwrap(), Command::Quit);
        assert!(Command::parse("launch").is_err());
    }

    #[test]
    fn each_change_rerenders() {
        let mut d = loaded();
        let out = Command::Sector("Technology".into()).apply(&mut d).unwrap();
        assert!(out.contains("Unity"));
        assert!(!out.contains("Valve"));

        let out = Command::Search("nothing".into()).apply(&mut d).unwrap();
        assert!(out.contains(EMPTY_TITLE));

        let out = Command::Clear.apply(&mut d).unwrap();
        assert!(out.starts_with("Company Directory (3)"));
    }

    #[test]
    fn options_lists_selector_values() {
        let mut d = loaded();
        let out = Command::Options.apply(&mut d).unwrap();
        assert!(out.contains("Exchanges: NASDAQ, NYSE"));
        assert!(out.contains("Sectors: Entertainment, Technology"));
    }

    #[tokio::test]
    async fn run_stops_at_quit() {
        let mut d = loaded();
        let input: &[u8] = b"exchange NYSE\nunknown\nquit\nsearch valve\n";
        let mut output = Vec::new();
        run(&mut d, input, &mut output).await.unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("┌ Unity"));
        assert!(text.contains("unknown command"));
        assert_eq!(d.filter().exchange, "NYSE");
        assert_eq!(d.filter().search, "");
    }
}
