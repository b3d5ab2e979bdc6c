use std::sync::Arc;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

use super::common::Context;
use super::product::render_product;
use super::wishlist::toggle_product;
use crate::cli::args::{SearchArgs, ShopArgs};
use crate::cli::OutputFormat;
use crate::error::Result;
use crate::output::{self, TerminalView};
use crate::search::{DisplayMode, SearchSession, SearchView};

/// One line typed into the shop prompt
#[derive(Debug, PartialEq, Eq)]
enum ShopInput<'a> {
    /// New contents of the search box
    Query(&'a str),
    /// Search the current contents right away
    Focus,
    /// Hide the results panel
    Dismiss,
    Open(&'a str),
    Wish(&'a str),
    Mode(DisplayMode),
    CacheStatus,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_shop_input(line: &str) -> ShopInput<'_> {
    let Some(command) = line.trim().strip_prefix(':') else {
        return ShopInput::Query(line);
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((command, ""));

    match (name, arg) {
        ("q" | "quit" | "exit", _) => ShopInput::Quit,
        ("f" | "focus", _) => ShopInput::Focus,
        ("x" | "dismiss", _) => ShopInput::Dismiss,
        ("o" | "open", id) if !id.is_empty() => ShopInput::Open(id),
        ("w" | "wish", id) if !id.is_empty() => ShopInput::Wish(id),
        ("mobile", _) => ShopInput::Mode(DisplayMode::Mobile),
        ("desktop", _) => ShopInput::Mode(DisplayMode::Desktop),
        ("cache", _) => ShopInput::CacheStatus,
        ("h" | "help", _) => ShopInput::Help,
        _ => ShopInput::Unknown(command),
    }
}

const SHOP_HELP: &str = "\
Type to search; each line replaces the search box contents.
  :focus          search the current text now
  :dismiss        hide the results
  :open <id>      show a product
  :wish <id>      add or remove a product from the wishlist
  :mobile         compact results
  :desktop        full results
  :cache          show search cache status
  :quit           leave";

/// Handle the search command
pub async fn search(ctx: &Context, args: &SearchArgs) -> Result<String> {
    let service = ctx.search_service()?;
    let mode = DisplayMode::from_mobile_flag(args.mobile);
    let view = TerminalView::quiet(ctx.format, ctx.show_progress());

    let query = args.query.trim();
    let outcome = service.run(query, mode, &view).await;
    service.shutdown();

    output::format_outcome(query, mode, &outcome, ctx.format)
}

/// Handle the shop command: an interactive, debounced search session
pub async fn shop(ctx: &Context, args: &ShopArgs) -> Result<String> {
    let service = ctx.search_service()?;
    let view: Arc<dyn SearchView> =
        Arc::new(TerminalView::interactive(ctx.format, ctx.show_progress()));
    let session = SearchSession::init(service, view, &ctx.config.search);

    let mut mode = DisplayMode::from_mobile_flag(args.mobile);
    let mut current = String::new();
    let mut pending: Option<JoinHandle<()>> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    if ctx.format == OutputFormat::Pretty {
        eprintln!("{}", SHOP_HELP.dimmed());
    }

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    // End of input: let the last scheduled search finish
                    if let Some(job) = pending.take() {
                        if let Err(e) = job.await {
                            tracing::debug!(error = %e, "pending search did not finish");
                        }
                    }
                    break;
                };

                match parse_shop_input(&line) {
                    ShopInput::Query(text) => {
                        current = text.to_string();
                        pending = Some(session.schedule(&current, mode));
                    }
                    ShopInput::Focus => {
                        if let Some(outcome) = session.focus(&current, mode).await {
                            tracing::debug!(?outcome, "focus search finished");
                        }
                    }
                    ShopInput::Dismiss => session.dismiss(mode),
                    ShopInput::Open(reference) => {
                        print_result(render_product(ctx, reference, None, 1).map(|(_, out)| out));
                    }
                    ShopInput::Wish(reference) => print_result(toggle_product(ctx, reference)),
                    ShopInput::Mode(next) => {
                        session.dismiss(mode);
                        mode = next;
                    }
                    ShopInput::CacheStatus => {
                        print_result(output::format_cache_status(
                            &session.service().cache_status(),
                            ctx.format,
                        ));
                    }
                    ShopInput::Help => eprintln!("{SHOP_HELP}"),
                    ShopInput::Quit => break,
                    ShopInput::Unknown(command) => {
                        eprintln!("{} unknown command :{} (try :help)", "✗".red(), command);
                    }
                }
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("interrupted");
                break;
            }
        }
    }

    session.teardown().await;
    Ok(String::new())
}

fn print_result(result: Result<String>) {
    match result {
        Ok(output) if !output.is_empty() => println!("{output}"),
        Ok(_) => {}
        Err(e) => eprintln!("{} {}", "error:".red().bold(), e),
    }
}
