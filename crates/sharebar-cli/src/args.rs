// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sharebar", version, about = "Inspect share links and simulate share clicks")]
pub struct Cli {
    /// JSON file with built-in defaults (site lists, breakpoint, code panel text).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the icons, links, and code panels a share bar would render.
    Links(PageArgs),
    /// Initialise a share bar and simulate a click on one channel icon.
    Click {
        #[command(flatten)]
        page: PageArgs,

        /// Channel id to activate (e.g. `weibo`, `wechat`).
        #[arg(long)]
        channel: String,
    },
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// JSON file describing the page (location, documentTitle, meta, images).
    #[arg(long)]
    pub page: PathBuf,

    /// JSON file with caller options.
    #[arg(long)]
    pub options: Option<PathBuf>,

    /// Element data attribute, e.g. `data-weibo-title=Hello`. Repeatable.
    #[arg(long = "data", value_parser = parse_attribute)]
    pub data: Vec<(String, String)>,

    /// Viewport width in CSS pixels.
    #[arg(long, default_value_t = 1280)]
    pub width: u32,

    /// Browser user agent string.
    #[arg(long, default_value = "Mozilla/5.0")]
    pub user_agent: String,

    /// Draw code panels as text blocks instead of SVG.
    #[arg(long)]
    pub text_codes: bool,
}

fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim().to_owned(), v.to_owned()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got `{raw}`"))
}
