use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

/// A terminal storefront client with debounced, cached catalog search
#[derive(Parser)]
#[command(name = "aktara")]
#[command(version, propagate_version = true)]
#[command(about = "A terminal storefront client with debounced, cached catalog search")]
pub struct Cli {
    /// Output format for command results [default: from config, else pretty]
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Also show messages as desktop notifications
    #[arg(long, global = true)]
    pub notify: bool,

    /// Log debug events to the log file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Storefront base URL (overrides config)
    #[arg(long, env = "AKTARA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// API token (overrides config)
    #[arg(long, env = "AKTARA_API_TOKEN", hide_env_values = true, global = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Write shell completions to stdout
    pub fn print_completions(shell: Shell) {
        let mut command = Self::command();
        let name = command.get_name().to_string();
        clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    }
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored, human-readable output
    #[default]
    Pretty,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    /// Parse a configured format name, falling back to pretty
    pub fn from_config(value: &str) -> Self {
        match value {
            "json" => Self::Json,
            _ => Self::Pretty,
        }
    }
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog once
    #[command(alias = "s")]
    Search(SearchArgs),

    /// Interactive search session; each line is the search box contents
    Shop(ShopArgs),

    /// Show a product page
    #[command(alias = "p")]
    Product(ProductArgs),

    /// Print the checkout link for a product
    Buy(BuyArgs),

    /// Cart counter
    Cart(CartArgs),

    /// Manage the wishlist
    #[command(alias = "wish")]
    Wishlist(WishlistArgs),

    /// Sign in
    Login(LoginArgs),

    /// Create an account
    Signup(SignupArgs),

    /// Subscribe to the newsletter
    Subscribe(SubscribeArgs),

    /// Manage configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the search command
#[derive(Args)]
pub struct SearchArgs {
    /// Search query (at least 2 characters)
    pub query: String,

    /// Use the compact mobile results panel
    #[arg(short, long)]
    pub mobile: bool,
}

/// Arguments for the shop command
#[derive(Args)]
pub struct ShopArgs {
    /// Start in the compact mobile results panel
    #[arg(short, long)]
    pub mobile: bool,
}

/// Arguments for the product command
#[derive(Args)]
pub struct ProductArgs {
    /// Product id or product page URL
    pub product: String,

    /// Gallery image to show (1-based)
    #[arg(short, long)]
    pub image: Option<usize>,

    /// Quantity to select (1-10)
    #[arg(short, long, default_value = "1")]
    pub quantity: u32,

    /// Add the selected quantity to the cart
    #[arg(long)]
    pub add_to_cart: bool,
}

/// Arguments for the buy command
#[derive(Args)]
pub struct BuyArgs {
    /// Product id or product page URL
    pub product: String,
}

/// Arguments for the cart command
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommands>,
}

/// Cart subcommands
#[derive(Subcommand)]
pub enum CartCommands {
    /// Add a product to the cart
    Add {
        /// Product id or product page URL
        product: String,
        /// Quantity to add (1-10)
        #[arg(short, long, default_value = "1")]
        quantity: u32,
    },
    /// Show the cart count
    Show,
}

/// Arguments for the wishlist command
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommands>,
}

/// Wishlist subcommands
#[derive(Subcommand)]
pub enum WishlistCommands {
    /// Add a product, or remove it if already saved
    Toggle {
        /// Product id or product page URL
        product: String,
    },
    /// List saved products
    Show,
    /// Show the number of saved products
    Count,
}

/// Arguments for the login command
#[derive(Args)]
pub struct LoginArgs {
    /// Email address (prompted if omitted)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Remember the email for the next login
    #[arg(short, long)]
    pub remember: bool,

    /// Echo the password while typing
    #[arg(long)]
    pub show_password: bool,
}

/// Arguments for the signup command
#[derive(Args)]
pub struct SignupArgs {
    /// Full name (prompted if omitted)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Email address (prompted if omitted)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Accept the terms and conditions
    #[arg(long)]
    pub accept_terms: bool,

    /// Echo the password while typing
    #[arg(long)]
    pub show_password: bool,
}

/// Arguments for the subscribe command
#[derive(Args)]
pub struct SubscribeArgs {
    /// Email address to subscribe
    pub email: String,
}

/// Arguments for the config command
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (e.g., search.debounce_ms)
        key: String,
        /// Value to set
        value: String,
    },
    /// Show configuration file path
    Path,
    /// Initialize configuration interactively
    Init,
}

/// Arguments for the completions command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
