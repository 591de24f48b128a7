use hostfront::api::{self, load_plans, load_plans_from_file, ApiError};
use hostfront::config;
use hostfront::models::{AppState, Location, Plan};
use hostfront::pricing::{quote, BillingCycle, PriceQuote, PurchaseLinks, QuoteCache};
use hostfront::routes::build_router;
use hostfront::services::sort_plans;
use hostfront::utils::{format_money, format_percent, hostname_from_url};

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn build_state_from_env(env_file: Option<&str>) -> AppState {
    config::load_env_file(env_file);

    let client = match reqwest::Client::builder()
        .user_agent(format!("HostFront/{}", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(c) => c,
        Err(e) => fail(format!("Failed to create HTTP client: {}", e)),
    };

    let mut state = AppState::new(client, config::get_api_base_url(), config::get_api_token());
    state.public_base_url = config::get_public_base_url();
    state.purchase_links = PurchaseLinks::new(&config::get_checkout_base_url(), &config::get_configurator_url());
    state
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{}", yansi::Paint::new(msg.to_string()).red());
    process::exit(1);
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match tokio::fs::read_to_string(&path).await {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                fail(format!("Failed to read custom stylesheet at {}: {}", path, e));
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            fail(format!("Invalid host/port format: {}", e));
        }
    };
    let app = build_router(state);
    tracing::info!(%addr, "Starting HostFront server");
    println!(
        "{} {}",
        yansi::Paint::new("Web server running on").green(),
        yansi::Paint::new(format!("http://{}", addr)).cyan()
    );
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                fail(format!("Server error: {}", e));
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            fail(format!(
                "Failed to bind to {}: {}\nStop any process using this port, or start the server with a different --port value.",
                addr, e
            ));
        }
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn money_or(amount: Option<f64>, missing: &str) -> String {
    amount.map(format_money).unwrap_or_else(|| missing.to_string())
}

fn parse_cycle(raw: &str) -> BillingCycle {
    raw.parse().unwrap_or_else(|e| fail(e))
}

fn parse_location(raw: Option<&str>) -> Option<Location> {
    raw.map(|r| r.parse().unwrap_or_else(|e| fail(e)))
}

async fn fetch_plans(state: &AppState, file: Option<&PathBuf>, location: Option<Location>) -> Result<Vec<Plan>, ApiError> {
    let mut plans = match file {
        Some(path) => load_plans_from_file(path, location).await?,
        None => load_plans(&state.client, &state.api_base_url, &state.api_token, location).await?,
    };
    sort_plans(&mut plans);
    Ok(plans)
}

fn print_quote(plan: &Plan, q: &PriceQuote, url: &str) {
    let mut table = new_table();
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec!["Plan".to_string(), plan.name.clone()]);
    table.add_row(vec!["Cycle".to_string(), q.cycle.display_name().to_string()]);
    table.add_row(vec!["Discount".to_string(), format_percent(q.discount_percentage)]);
    table.add_row(vec!["Per month".to_string(), money_or(q.monthly_equivalent, "Custom Pricing")]);
    table.add_row(vec![
        "Billed".to_string(),
        format!("{} {}", money_or(q.total_billed, "-"), q.billing_period_label),
    ]);
    table.add_row(vec!["List total".to_string(), money_or(q.original_total, "-")]);
    table.add_row(vec!["Savings".to_string(), money_or(q.savings, "-")]);
    table.add_row(vec!["Purchase".to_string(), url.to_string()]);
    println!("\n{table}\n");
}

#[derive(Parser)]
#[command(
    name = "hostfront",
    author,
    version,
    about = "HostFront storefront and pricing tool",
    long_about = r#"HostFront serves the VPS pricing pages and answers pricing questions from the command line.

Plans are read from the content API configured with API_BASE_URL (and API_TOKEN), or from a local JSON file with --file.

Examples:
  1) Run the site (dev):
      cargo run -- serve --host 127.0.0.1 --port 8080
  2) Compare every plan billed yearly:
      hostfront plans --location EU --cycle annually
  3) Find the checkout link for a plan:
      hostfront link "Silver USA" --cycle biannually
"#,
    after_help = "Use `hostfront <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long, global = true)]
    silent: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Host to bind to (defaults to HOST or 127.0.0.1)
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to (defaults to PORT or 8080)
        #[arg(long)]
        port: Option<u16>,
        /// Path to .env file
        #[arg(long)]
        env_file: Option<String>,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate configuration (env vars / API connectivity)
    #[command(about = "Validate configuration and ensure API connectivity.", long_about = "Validate the environment used by the server and fetch /plans from the configured content API.")]
    CheckConfig {
        #[arg(long)]
        env_file: Option<String>,
    },
    /// List plans with their price for a billing cycle
    #[command(about = "List plans and prices", long_about = "Show every plan for a location with the monthly-equivalent price, total billed and savings for the chosen billing cycle.")]
    Plans {
        /// USA or EU; all locations when omitted
        #[arg(long)]
        location: Option<String>,
        /// monthly, quarterly, annually or biannually
        #[arg(long, default_value = "monthly")]
        cycle: String,
        /// Read plans from a JSON file instead of the API
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Price a single plan
    #[command(about = "Price a single plan", long_about = "Print the full quote for one plan and billing cycle, including the checkout link.")]
    Quote {
        plan: String,
        #[arg(long, default_value = "monthly")]
        cycle: String,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Print the checkout URL for a plan
    #[command(about = "Resolve a checkout link", long_about = "Print the checkout URL for a plan name and billing cycle without contacting the API. Plans not in the link table get a URL derived from their name.")]
    Link {
        plan: String,
        #[arg(long, default_value = "monthly")]
        cycle: String,
        /// Link to the build-your-own configurator
        #[arg(long, default_value_t = false)]
        custom: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::set_silent(true);
    }

    // With no subcommand, serve the site with environment defaults
    let Some(command) = cli.command else {
        let state = build_state_from_env(None);
        start_server(state, &config::get_host(), config::get_port(), None).await;
        return;
    };

    match command {
        Commands::Serve {
            host,
            port,
            env_file,
            stylesheet,
        } => {
            let state = build_state_from_env(env_file.as_deref());
            let host = host.unwrap_or_else(config::get_host);
            let port = port.unwrap_or_else(config::get_port);
            start_server(state, &host, port, stylesheet).await;
        }
        Commands::CheckConfig { env_file } => {
            let state = build_state_from_env(env_file.as_deref());
            if std::env::var("API_BASE_URL").map(|v| v.trim().is_empty()).unwrap_or(true) {
                eprintln!(
                    "{} {}",
                    yansi::Paint::new("API_BASE_URL is not configured; using").yellow(),
                    state.api_base_url
                );
            }
            match load_plans(&state.client, &state.api_base_url, &state.api_token, None).await {
                Ok(plans) => {
                    let priced = plans.iter().filter(|p| quote(p, BillingCycle::Monthly).is_ok()).count();
                    println!(
                        "{} ({} plans from {}, {} priced cleanly)",
                        yansi::Paint::new("Configuration looks valid").green(),
                        plans.len(),
                        hostname_from_url(&state.api_base_url),
                        priced
                    );
                    if priced < plans.len() {
                        eprintln!("{}", yansi::Paint::new("Some plans have invalid prices or discounts").yellow());
                    }
                }
                Err(e) => fail(format!("Configuration appears invalid: {}", e)),
            }
        }
        Commands::Plans { location, cycle, file } => {
            let state = build_state_from_env(None);
            let cycle = parse_cycle(&cycle);
            let location = parse_location(location.as_deref());
            let plans = fetch_plans(&state, file.as_ref(), location)
                .await
                .unwrap_or_else(|e| fail(e));
            if plans.is_empty() {
                println!("(no plans)");
                return;
            }

            let cache = QuoteCache::new();
            let mut table = new_table();
            table.set_header(vec!["Plan", "Location", "Per month", "Billed", "Savings", "Specs"]);
            for plan in &plans {
                let (per_month, billed, savings) = match cache.quote(plan, cycle) {
                    Ok(q) => (
                        money_or(q.monthly_equivalent, "Custom Pricing"),
                        q.total_billed
                            .map(|t| format!("{} {}", format_money(t), q.billing_period_label))
                            .unwrap_or_default(),
                        q.savings
                            .map(|s| format!("{} ({})", format_money(s), format_percent(q.discount_percentage)))
                            .unwrap_or_default(),
                    ),
                    Err(e) => {
                        tracing::warn!(%e, plan = %plan.name, "Could not price plan");
                        ("Price unavailable".to_string(), String::new(), String::new())
                    }
                };
                let specs = format!(
                    "{} / {} / {} / {}",
                    plan.specs.cpu, plan.specs.ram, plan.specs.storage, plan.specs.bandwidth
                );
                let name = if plan.popular { format!("{} ★", plan.name) } else { plan.name.clone() };
                table.add_row(vec![name, plan.location.to_string(), per_month, billed, savings, specs]);
            }
            println!("\n{table}\n");
        }
        Commands::Quote { plan, cycle, location, file } => {
            let state = build_state_from_env(None);
            let cycle = parse_cycle(&cycle);
            let location = parse_location(location.as_deref());
            let plans = fetch_plans(&state, file.as_ref(), location)
                .await
                .unwrap_or_else(|e| fail(e));
            let Some(found) = plans.iter().find(|p| p.name == plan) else {
                fail(format!("Plan '{}' not found", plan));
            };
            match quote(found, cycle) {
                Ok(q) => print_quote(found, &q, &state.purchase_links.resolve_plan(found, cycle)),
                Err(e) => fail(e),
            }
        }
        Commands::Link { plan, cycle, custom } => {
            let state = build_state_from_env(None);
            let cycle = parse_cycle(&cycle);
            println!("{}", state.purchase_links.resolve(&plan, cycle, custom));
        }
    }
}
