// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Sharebar — terminal driver for the share-dispatch engine.
//
// Entry point. Initialises logging, loads page metadata and options, and
// either prints the share bar a page would render or simulates a click.

mod args;
mod console_host;
mod input;

use std::process::ExitCode;

use clap::Parser;

use sharebar_bridge::{QrCodeRenderer, platform_bridge};
use sharebar_core::error::Result;
use sharebar_core::notices::humanize_error;
use sharebar_core::types::CodeOutput;
use sharebar_engine::environment::classify_with;
use sharebar_engine::{DispatchTable, Element, RenderedBar, ShareWidget};

use args::{Cli, Command, PageArgs};
use console_host::ConsoleHost;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "sharebar failed");
            eprintln!("{}", humanize_error(&e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = input::load_config(cli.config.as_deref())?;
    let environment_config = config.environment.clone();
    let renderer = QrCodeRenderer;
    let table = DispatchTable::global();

    let (page_args, channel) = match cli.command {
        Command::Links(page) => (page, None),
        Command::Click { page, channel } => (page, Some(channel)),
    };
    let PageArgs {
        page,
        options,
        data,
        width,
        user_agent,
        text_codes,
    } = page_args;

    let page = input::load_page(&page)?;
    let options = input::load_options(options.as_deref())?;
    let element = Element::from_data_attributes(data.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let output = if text_codes { CodeOutput::Text } else { CodeOutput::Image };
    let widget = ShareWidget::new(config, table, &renderer).with_code_output(output);

    let environment = classify_with(&environment_config, width, &user_agent);
    tracing::info!(
        width,
        mobile = environment.is_mobile_viewport,
        in_app = environment.is_in_app_browser,
        "classified environment"
    );

    let bars = widget.initialize(&page, &options, std::slice::from_ref(&element), &environment);

    match channel {
        None => {
            for bar in &bars {
                print_bar(bar);
            }
        }
        Some(channel) => {
            // Reclassify: the viewport may have changed since initialisation.
            let environment = classify_with(&environment_config, width, &user_agent);
            let bridge = platform_bridge();
            let outcome = table.activate(element.id, &channel, &environment, bridge.as_ref(), &ConsoleHost)?;
            println!("outcome {outcome:?}");
        }
    }
    Ok(())
}

fn print_bar(bar: &RenderedBar) {
    println!("element {}", bar.element);
    for icon in &bar.icons {
        let insertion = format!("{:?}", icon.insertion);
        println!("  {:<9} {:<8} {}", icon.channel.as_str(), insertion, icon.url);
    }
    for panel in &bar.panels {
        println!("  panel for {}: {}", panel.channel, panel.title);
        println!("{}", panel.code);
        println!("  {}", panel.helper);
    }
}
