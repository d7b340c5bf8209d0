// src/fetch/fixtures.rs
//
// Canned gviz bodies shared by the unit tests.

use std::{collections::HashMap, net::SocketAddr};
use warp::{http::StatusCode, Filter};

use super::envelope::{ENVELOPE_PREFIX, ENVELOPE_SUFFIX};
use crate::config::SheetConfig;

pub(crate) const TWO_COMPANY_JSON: &str = r#"{"version":"0.6","reqId":"0","status":"ok","sig":"1289046570","table":{"cols":[{"id":"A","label":"Company Name","type":"string"},{"id":"B","label":"Industry","type":"string"},{"id":"C","label":"Headquarters","type":"string"},{"id":"D","label":"Exchange","type":"string"},{"id":"E","label":"Sector","type":"string"},{"id":"F","label":"Website","type":"string"},{"id":"G","label":"Company Valuation","type":"string"}],"rows":[{"c":[{"v":"Riot Games"},{"v":"Gaming"},{"v":"Los Angeles"},{"v":"NASDAQ"},{"v":"Entertainment"},{"v":"riotgames.com"},{"v":"$10B"}]},{"c":[{"v":"Valve"},{"v":"Gaming"},{"v":"Bellevue"},null,{"v":"Entertainment"},{"v":"valvesoftware.com"},{"v":"N/A"}]}],"parsedNumHeaders":1}}"#;

pub(crate) fn wrap(json: &str) -> String {
    format!("{}{}{}", ENVELOPE_PREFIX, json, ENVELOPE_SUFFIX)
}

pub(crate) fn two_company_body() -> String {
    wrap(TWO_COMPANY_JSON)
}

/// Serve `body` with `status` at `/d/sheet/gviz/tq?tqx=out:json&gid=42` on an
/// ephemeral local port. Any other query gets a 404.
pub(crate) fn serve(status: u16, body: String) -> SocketAddr {
    let route = warp::path!("d" / "sheet" / "gviz" / "tq")
        .and(warp::query::<HashMap<String, String>>())
        .map(move |q: HashMap<String, String>| {
            let wanted = q.get("tqx").map(String::as_str) == Some("out:json")
                && q.get("gid").map(String::as_str) == Some("42");
            if wanted {
                let code = StatusCode::from_u16(status).expect("valid status");
                warp::reply::with_status(body.clone(), code)
            } else {
                warp::reply::with_status(String::new(), StatusCode::NOT_FOUND)
            }
        });
    let (addr, server) = warp::serve(route).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    addr
}

pub(crate) fn config_for(addr: SocketAddr) -> SheetConfig {
    SheetConfig {
        base_url: format!("http://{}/d", addr),
        sheet_id: "sheet".to_string(),
        tab_id: "42".to_string(),
    }
}
