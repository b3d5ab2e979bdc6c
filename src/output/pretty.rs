use colored::Colorize;
use terminal_size::{terminal_size, Width};
use url::Url;

use crate::account::AuthOutcome;
use crate::catalog::{Page, StorefrontLinks};
use crate::notify::Toast;
use crate::product::ProductPage;
use crate::search::{CacheStatus, DisplayMode, ResultSource, ResultsView, SearchOutcome};
use crate::wishlist::{Toggle, WishlistEntry};

const DEFAULT_WIDTH: usize = 80;
const MOBILE_WIDTH: usize = 40;

/// Safely truncate a string to n characters, appending "..." if truncated.
/// Works correctly with multi-byte UTF-8 characters.
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{truncated}...")
    } else {
        s.to_string()
    }
}

/// Usable row width for a display mode
fn row_width(mode: DisplayMode) -> usize {
    let terminal = terminal_size()
        .map(|(Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH);
    match mode {
        DisplayMode::Desktop => terminal,
        DisplayMode::Mobile => terminal.min(MOBILE_WIDTH),
    }
}

fn source_label(source: ResultSource) -> colored::ColoredString {
    match source {
        ResultSource::Cache => "cached".cyan(),
        ResultSource::Remote => "live".green(),
        ResultSource::Fallback => "offline".yellow(),
    }
}

/// Format a results panel
pub fn format_results(view: &ResultsView, mode: DisplayMode) -> String {
    let rows = match view {
        ResultsView::Empty { message } => return message.dimmed().to_string(),
        ResultsView::Rows { rows } => rows,
    };

    let width = row_width(mode);
    let mut output = String::new();

    for row in rows {
        match mode {
            DisplayMode::Desktop => {
                // "#id  name  category" then the link underneath
                let name_width = width.saturating_sub(24).max(16);
                output.push_str(&format!(
                    "#{:<4} {:name_width$} {}\n",
                    row.id,
                    truncate_str(&row.name, name_width),
                    row.category.cyan(),
                ));
                output.push_str(&format!("      {}\n", row.href.dimmed()));
            }
            DisplayMode::Mobile => {
                output.push_str(&format!(
                    "#{} {}\n",
                    row.id,
                    truncate_str(&row.name, width.saturating_sub(6))
                ));
            }
        }
    }

    output.trim_end().to_string()
}

/// Format the result of one search invocation
pub fn format_outcome(query: &str, mode: DisplayMode, outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::Hidden => format!(
            "{} Type at least 2 characters to search.",
            "•".blue()
        ),
        SearchOutcome::Skipped => "Search is not available here.".dimmed().to_string(),
        SearchOutcome::Cancelled => "Search cancelled.".dimmed().to_string(),
        SearchOutcome::Stale => String::new(),
        SearchOutcome::Rendered { source, view } => {
            let mut output = String::new();
            let count = view.len();
            output.push_str(&format!(
                "{} \"{}\" [{}] ({} result{})\n",
                "Results for".bold(),
                query,
                source_label(*source),
                count,
                if count == 1 { "" } else { "s" }
            ));
            output.push_str(&"─".repeat(row_width(mode).min(60)));
            output.push('\n');
            output.push_str(&format_results(view, mode));
            output
        }
    }
}

/// Format the wishlist
pub fn format_wishlist(entries: &[WishlistEntry]) -> String {
    if entries.is_empty() {
        return "Your wishlist is empty.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{} ({})\n", "Wishlist".bold(), entries.len()));
    output.push_str(&"─".repeat(50));
    output.push('\n');

    for entry in entries {
        output.push_str(&format!(
            "{} #{:<4} {} {}\n",
            "♥".red(),
            entry.id,
            entry.name,
            entry.detail.dimmed()
        ));
    }

    output.trim_end().to_string()
}

/// Format a wishlist toggle
pub fn format_toggle(id: u64, toggle: Toggle, count: usize) -> String {
    let action = match toggle {
        Toggle::Added => format!("{} Added #{} to your wishlist", "♥".red(), id),
        Toggle::Removed => format!("{} Removed #{} from your wishlist", "♡".dimmed(), id),
    };
    format!("{action} ({count} saved)")
}

/// Format the wishlist badge count
pub fn format_count(count: usize) -> String {
    format!("{} {}", "♥".red(), count)
}

/// Format a product page
pub fn format_product(page: &ProductPage, links: &StorefrontLinks, wishlisted: bool) -> String {
    let mut output = String::new();

    let heart = if wishlisted {
        "♥".red()
    } else {
        "♡".dimmed()
    };

    output.push_str(&format!("{} {}\n", page.item.name.bold(), heart));
    output.push_str(&"─".repeat(50));
    output.push('\n');

    output.push_str(&format!("{} {}\n", "Id:".cyan(), page.item.id));
    output.push_str(&format!("{} {}\n", "Category:".cyan(), page.item.category));
    output.push_str(&format!("{} {}\n", "Quantity:".cyan(), page.quantity.value()));
    output.push_str(&format!(
        "{} {}\n",
        "Image:".cyan(),
        page.gallery.main_image().src.dimmed()
    ));

    output.push_str(&format!("\n{}\n", "Gallery".bold()));
    for (index, (image, active)) in page.gallery.thumbnails().enumerate() {
        let marker = if active {
            "▶".green()
        } else {
            " ".normal()
        };
        output.push_str(&format!("{} {}. {}\n", marker, index + 1, image.alt));
    }

    if let Ok(url) = links.url(Page::Product { id: page.item.id }) {
        output.push_str(&format!("\n{} {}\n", "URL:".cyan(), url));
    }

    output.trim_end().to_string()
}

/// Format the cart count, with the toast of the action that changed it
pub fn format_cart(count: u32, toast: Option<&Toast>) -> String {
    let badge = format!("🛒 {} item{} in cart", count, if count == 1 { "" } else { "s" });
    match toast {
        Some(toast) => format!("{}\n{}", toast.to_line(), badge),
        None => badge,
    }
}

/// Format a checkout link
pub fn format_checkout(url: &Url) -> String {
    format!("{} {}", "Checkout:".cyan(), url)
}

/// Format a login or signup result
pub fn format_auth(outcome: &AuthOutcome) -> String {
    let mut output = outcome.toast.to_line();
    if let Some(ref user) = outcome.user {
        output.push_str(&format!(
            "\n  {} {} <{}>",
            "User:".cyan(),
            user.name,
            user.email
        ));
    }
    output
}

/// Format the search cache status
pub fn format_cache_status(status: &CacheStatus) -> String {
    format!(
        "{} {} entr{}, last cleared {}",
        "Search cache:".cyan(),
        status.entries,
        if status.entries == 1 { "y" } else { "ies" },
        status
            .last_cleared
            .with_timezone(&chrono::Local)
            .format("%H:%M:%S")
    )
}

pub fn format_toast(toast: &Toast) -> String {
    toast.to_line()
}
