// src/render/landing.rs
//
// Static marketing copy. No data flows through here.

use std::fmt::Write;

pub const BRAND: &str = "InGame.ai";
pub const TAGLINE: &str = "The Ultimate AI-Powered Gaming Industry Intelligence Platform";

pub const FLOATING_COMPANIES: &[&str] = &[
    "Riot Games",
    "Epic Games",
    "Blizzard",
    "EA",
    "Ubisoft",
    "Valve",
    "Activision",
    "Nintendo",
    "Sony",
    "Microsoft",
];

/// (title, description)
pub const FEATURES: &[(&str, &str)] = &[
    ("AI Analysis", "Deep learning insights on gaming trends"),
    ("Market Data", "Global gaming market intelligence"),
    ("Tech Stack", "Game engine & technology tracking"),
    ("Revenue Analysis", "Monetization & financial metrics"),
];

/// (number, label)
pub const STATS: &[(&str, &str)] = &[
    ("10K+", "Games Analyzed"),
    ("500+", "Companies Tracked"),
    ("24/7", "Real-time Updates"),
];

pub const PREVIEW_ITEMS: &[&str] = &[
    "Game Engine Analytics",
    "Performance Metrics",
    "Technology Stack Data",
    "Success Metrics",
];

/// Shown under the directory.
pub const SMALL_CAP: &[(&str, &str)] = &[
    (
        "Market Analytics",
        "Real-time valuation tracking and market performance metrics to keep you informed of every market movement.",
    ),
    (
        "Growth Score",
        "Proprietary AI-driven growth potential scoring system that predicts future market performance with remarkable accuracy.",
    ),
    (
        "Risk Assessment",
        "Comprehensive risk level evaluation and volatility metrics to help you make informed investment decisions.",
    ),
];

pub fn hero() -> String {
    format!("{}\n{}\n", BRAND, TAGLINE)
}

pub fn landing_page() -> String {
    let mut out = hero();
    let _ = writeln!(out, "  > Access Database");
    let _ = writeln!(out, "\n{}", FLOATING_COMPANIES.join(" · "));

    let _ = writeln!(out, "\nComprehensive Gaming Intelligence");
    for (title, desc) in FEATURES {
        let _ = writeln!(out, "  * {:<18}{}", title, desc);
    }

    let _ = writeln!(out);
    for (number, label) in STATS {
        let _ = writeln!(out, "  {:>6}  {}", number, label);
    }

    let _ = writeln!(out, "\nAccess Comprehensive Gaming Data");
    let _ = writeln!(
        out,
        "Track game development, player analytics, and AI implementation across the industry."
    );
    for item in PREVIEW_ITEMS {
        let _ = writeln!(out, "  - {}", item);
    }
    out
}

pub fn small_cap_section() -> String {
    let mut out = String::from("AI-Powered Analysis\nSmall Cap, Big Data\n");
    let _ = writeln!(
        out,
        "Our proprietary algorithms analyze thousands of data points to identify high-potential small cap companies before they hit the mainstream."
    );
    for (title, desc) in SMALL_CAP {
        let _ = writeln!(out, "\n  {}\n    {}", title, desc);
    }
    out
}
