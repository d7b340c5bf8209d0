// src/render/card.rs

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use crate::record::{fields, Record};

pub const NOT_AVAILABLE: &str = "N/A";
pub const UNNAMED: &str = "Unnamed company";

static SCHEME_AND_WWW: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(www\.)?").expect("website prefix regex should parse"));

/// Display-ready fields for one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub industry: String,
    pub exchange: Option<String>,
    pub headquarters: String,
    pub valuation: String,
    pub website: String,
    pub website_href: Option<String>,
    pub detail_path: String,
}

impl Card {
    pub fn from_record(record: &Record) -> Self {
        let or_na = |field: &str| {
            record
                .non_empty(field)
                .map(|t| t.into_owned())
                .unwrap_or_else(|| NOT_AVAILABLE.to_string())
        };
        let website_href = record.non_empty(fields::WEBSITE).map(|t| t.into_owned());
        let website = website_href
            .as_deref()
            .map(display_website)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());

        Card {
            name: record
                .non_empty(fields::COMPANY_NAME)
                .map(|t| t.into_owned())
                .unwrap_or_else(|| UNNAMED.to_string()),
            industry: or_na(fields::INDUSTRY),
            exchange: record.non_empty(fields::EXCHANGE).map(|t| t.into_owned()),
            headquarters: or_na(fields::HEADQUARTERS),
            valuation: or_na(fields::VALUATION),
            website,
            website_href,
            detail_path: detail_path(record),
        }
    }
}

/// `/<company name>` with the name percent-encoded; `/` when unnamed.
pub fn detail_path(record: &Record) -> String {
    let name = record.text(fields::COMPANY_NAME).unwrap_or_default();
    format!("/{}", urlencoding::encode(&name))
}

/// Drop a leading `http://`, `https://` and `www.`.
pub fn display_website(url: &str) -> String {
    SCHEME_AND_WWW.replace(url, "").into_owned()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "┌ {}", self.name)?;
        if let Some(exchange) = &self.exchange {
            write!(f, "  [{}]", exchange)?;
        }
        writeln!(f)?;
        writeln!(f, "│ Industry      {}", self.industry)?;
        writeln!(f, "│ Headquarters  {}", self.headquarters)?;
        writeln!(f, "│ Valuation     {}", self.valuation)?;
        writeln!(f, "│ Website       {}", self.website)?;
        write!(f, "└ {}", self.detail_path)
    }
}
