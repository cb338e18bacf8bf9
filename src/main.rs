use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use stockwatch::client::ApiClient;
use stockwatch::services::{alerts_service, auth_service, watchlist_service};
use stockwatch::session::{FileSessionStore, SessionStore};
use stockwatch::{AppState, config, pages, trending};

#[derive(Parser)]
#[command(name = "stockwatch", about = "Terminal dashboard for a StockWatch backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Log in and cache the session locally
    Login { username: String, password: String },

    /// Create an account and log in
    Register {
        username: String,
        email: String,
        password: String,
    },

    /// Drop the cached session (local only, no network call)
    Logout,

    /// Show the cached user
    Whoami,

    /// Watchlist plus unread-alert badge (default command)
    Dashboard,

    /// Manage the watchlist
    Watch {
        #[command(subcommand)]
        action: WatchAction,
    },

    /// List alerts
    Alerts {
        /// Only unread alerts
        #[arg(long)]
        unread: bool,

        #[arg(long, default_value_t = alerts_service::DEFAULT_PAGE)]
        page: u32,

        #[arg(long, default_value_t = alerts_service::DEFAULT_PAGE_SIZE)]
        size: u32,

        /// Mark everything listed as read
        #[arg(long)]
        mark_all_read: bool,
    },

    /// Browse the trending catalog
    Trending {
        #[arg(long, default_value = "all")]
        category: String,

        /// Add a catalog entry to the watchlist
        #[arg(long)]
        watch: Option<String>,
    },
}

#[derive(Subcommand)]
enum WatchAction {
    Add {
        symbol: String,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
    },
    Edit {
        id: i64,
        symbol: String,
        #[arg(long)]
        min: Option<f64>,
        #[arg(long)]
        max: Option<f64>,
    },
    Remove {
        id: i64,
    },
}

fn fail(err: &stockwatch::error::ApiError, fallback: &str) -> ! {
    eprintln!("{}", pages::error_line(err, fallback));
    process::exit(1);
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let settings = config::load();

    let session: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&settings.session_dir));
    let api = ApiClient::new(&settings, session.clone()).expect("failed to build HTTP client");
    let state = AppState {
        settings,
        api,
        session,
    };

    match cli.command.unwrap_or(Command::Dashboard) {
        Command::Login { username, password } => {
            match auth_service::login(&state, &username, &password).await {
                Ok(resp) => println!("Welcome, {}!", resp.username),
                Err(err) => fail(&err, "Login failed"),
            }
        }

        Command::Register {
            username,
            email,
            password,
        } => match auth_service::register(&state, &username, &email, &password).await {
            Ok(resp) => println!("Welcome, {}! Account created.", resp.username),
            Err(err) => fail(&err, "Registration failed"),
        },

        Command::Logout => {
            auth_service::logout(&state);
            println!("Logged out.");
        }

        Command::Whoami => match auth_service::current_user(&state) {
            Some(user) => println!("{} <{}>", user.username, user.email),
            None => println!("Not logged in."),
        },

        Command::Dashboard => {
            let Some(user) = auth_service::current_user(&state) else {
                println!("Not logged in. Use `stockwatch login` or `stockwatch register` first.");
                return;
            };

            println!("Welcome, {}!", user.username);

            // Badge and watchlist are independent fetches; the badge fails
            // soft, so only the watchlist outcome decides success.
            let (stocks, unread) = tokio::join!(
                watchlist_service::list(&state),
                alerts_service::unread_count(&state)
            );

            match stocks {
                Ok(stocks) => print!("{}", pages::watchlist_table(&stocks)),
                Err(err) => fail(&err, "Error loading watchlist"),
            }

            println!("{}", pages::unread_badge(unread));
        }

        Command::Watch { action } => match action {
            WatchAction::Add { symbol, min, max } => {
                match watchlist_service::add(&state, &symbol, min, max).await {
                    Ok(stock) => println!("Stock {} has been added to watchlist!", stock.symbol),
                    Err(err) => fail(&err, "Error saving stock"),
                }
            }
            WatchAction::Edit {
                id,
                symbol,
                min,
                max,
            } => match watchlist_service::update(&state, id, &symbol, min, max).await {
                Ok(stock) => println!("Updated {}.", stock.symbol),
                Err(err) => fail(&err, "Error saving stock"),
            },
            WatchAction::Remove { id } => match watchlist_service::remove(&state, id).await {
                Ok(()) => println!("Removed from watchlist."),
                Err(err) => fail(&err, "Error removing stock"),
            },
        },

        Command::Alerts {
            unread,
            page,
            size,
            mark_all_read,
        } => {
            let result = if unread {
                alerts_service::list_unread(&state).await
            } else {
                alerts_service::list(&state, page, size).await
            };

            let alerts = match result {
                Ok(alerts) => alerts,
                Err(err) => fail(&err, "Error loading alerts"),
            };

            print!("{}", pages::alerts_list(&alerts));

            if mark_all_read {
                match alerts_service::mark_all_as_read(&state, &alerts).await {
                    Ok(0) => {}
                    Ok(n) => println!("Marked {n} alerts as read."),
                    Err(err) => fail(&err, "Error marking alerts as read"),
                }
            }
        }

        Command::Trending { category, watch } => {
            if let Some(symbol) = watch {
                if trending::find(&symbol).is_none() {
                    eprintln!("{symbol} is not in the trending catalog.");
                    process::exit(1);
                }

                match watchlist_service::add(&state, &symbol.to_uppercase(), None, None).await {
                    Ok(stock) => println!("Stock {} has been added to watchlist!", stock.symbol),
                    Err(err) => fail(&err, "Error saving stock"),
                }
                return;
            }

            print!("{}", pages::trending_table(&trending::by_category(&category)));
        }
    }
}
