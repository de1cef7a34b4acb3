use std::io;
use std::path;
use std::process;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::render;
use super::shop;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Modal;
use crate::domain::models::ReviewDraft;
use crate::domain::models::StorageName;
use crate::domain::services::Storefront;
use crate::infrastructure::notifiers::terminal::TerminalNotifier;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        fs::create_dir_all(parent).await?;
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build())?.as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn id_arg(matches: &ArgMatches, name: &str) -> Result<i64> {
    return matches
        .get_one::<i64>(name)
        .copied()
        .ok_or_else(|| return anyhow!("Missing required argument {name}"));
}

/// One-shot commands exit non-zero when the storefront rejected or failed
/// the operation.
fn finish(storefront: &Storefront) {
    if storefront.failed() {
        process::exit(1);
    }
}

async fn open_storefront() -> Result<Storefront> {
    return Storefront::from_config(Box::<TerminalNotifier>::default()).await;
}

async fn run_products(matches: &ArgMatches) -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.filter.search = matches
        .get_one::<String>("search")
        .map(|search| return search.trim().to_string())
        .unwrap_or_default();
    storefront.filter.category = matches.get_one::<i64>("category").copied();

    storefront.fetch_categories().await?;
    storefront.fetch_products().await?;
    println!(
        "{}",
        render::product_list(&storefront.products, &storefront.categories)
    );

    finish(&storefront);
    return Ok(());
}

async fn run_categories() -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.fetch_categories().await?;
    println!("{}", render::category_list(&storefront.categories));

    finish(&storefront);
    return Ok(());
}

async fn run_product(product_id: i64) -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.show_product_details(product_id).await?;
    if let Some(product) = &storefront.selected_product {
        println!("{}", render::product_details(product, &storefront.reviews));
    }

    finish(&storefront);
    return Ok(());
}

async fn run_cart(matches: &ArgMatches) -> Result<()> {
    let mut storefront = open_storefront().await?;

    match matches.subcommand() {
        Some(("add", add_matches)) => {
            storefront
                .add_to_cart(id_arg(add_matches, "product-id")?)
                .await?;
        }
        Some(("id", _)) => {
            match storefront.stored_cart_id().await? {
                Some(cart_id) => println!("{cart_id}"),
                None => println!("No active cart."),
            }
            return Ok(());
        }
        _ => {
            storefront.render_cart_items().await?;
        }
    }

    println!("{}", render::cart(&storefront.cart));
    finish(&storefront);
    return Ok(());
}

async fn run_login() -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.show_login_form();
    storefront.login(&shop::prompt_credentials()?).await?;

    finish(&storefront);
    return Ok(());
}

async fn run_register() -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.show_register_form();
    storefront.register(&shop::prompt_credentials()?).await?;

    finish(&storefront);
    return Ok(());
}

async fn run_logout() -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.logout().await?;
    println!("{}", render::session(&storefront.session));

    finish(&storefront);
    return Ok(());
}

async fn run_whoami() -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.check_login_status().await?;
    println!("{}", render::session(&storefront.session));

    finish(&storefront);
    return Ok(());
}

async fn run_checkout() -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.check_login_status().await?;
    storefront.checkout().await?;

    finish(&storefront);
    return Ok(());
}

async fn run_orders(expanded: bool) -> Result<()> {
    let mut storefront = open_storefront().await?;
    storefront.check_login_status().await?;
    storefront.show_orders().await?;

    if storefront.modal != Modal::Orders {
        finish(&storefront);
        return Ok(());
    }

    if storefront.orders.is_empty() {
        println!("You haven't placed any orders yet.");
    } else {
        println!("{}", storefront.orders.render(expanded));
    }

    finish(&storefront);
    return Ok(());
}

async fn run_review(matches: &ArgMatches) -> Result<()> {
    let product_id = id_arg(matches, "product-id")?;
    let rating = id_arg(matches, "rating")?;
    let comment = matches
        .get_one::<String>("comment")
        .map(|comment| return comment.trim().to_string())
        .unwrap_or_default();

    let mut storefront = open_storefront().await?;
    storefront.check_login_status().await?;
    storefront.show_product_details(product_id).await?;
    storefront.review_draft = ReviewDraft::new(rating, &comment);
    storefront.submit_review().await?;

    if let Some(product) = &storefront.selected_product {
        println!("{}", render::product_details(product, &storefront.reviews));
    }

    finish(&storefront);
    return Ok(());
}

fn arg_product_id() -> Arg {
    return Arg::new("product-id")
        .help("Product ID")
        .value_parser(value_parser!(i64))
        .required(true);
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for Storefront")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running Storefront with environment variable RUST_LOG=storefront")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        )
        .subcommand(
            Command::new("storage-path").about("Output path to the local storage file.")
        );

    return cmd;
}

fn subcommand_products() -> Command {
    return Command::new("products")
        .about("List products, optionally filtered by a search term or category.")
        .arg(
            Arg::new("search")
                .short('s')
                .long("search")
                .help("Only show products matching this text.")
                .num_args(1),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Only show products in this category ID.")
                .value_parser(value_parser!(i64))
                .num_args(1),
        );
}

fn subcommand_cart() -> Command {
    return Command::new("cart")
        .about("Show or change the active cart.")
        .subcommand(Command::new("show").about("Show the items in the active cart."))
        .subcommand(
            Command::new("add")
                .about("Add one of a product to the cart, creating the cart if needed.")
                .arg(arg_product_id()),
        )
        .subcommand(Command::new("id").about("Print the ID of the active cart."));
}

fn arg_username() -> Arg {
    return Arg::new(ConfigKey::Username.to_string())
        .short('u')
        .long(ConfigKey::Username.to_string())
        .env("STOREFRONT_USERNAME")
        .num_args(1)
        .help("Username suggested at the prompt. [default: $USER]");
}

fn subcommand_orders() -> Command {
    return Command::new("orders")
        .about("List the orders you have placed.")
        .arg(
            Arg::new("expand")
                .short('e')
                .long("expand")
                .help("Show the items of every order.")
                .action(ArgAction::SetTrue),
        );
}

fn subcommand_review() -> Command {
    return Command::new("review")
        .about("Leave a review for a product.")
        .arg(arg_product_id())
        .arg(
            Arg::new("rating")
                .short('r')
                .long("rating")
                .help("Rating from 1 to 5.")
                .value_parser(value_parser!(i64))
                .required(true),
        )
        .arg(
            Arg::new("comment")
                .short('m')
                .long("comment")
                .help("Review text.")
                .num_args(1),
        );
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("storefront")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(Command::new("shop").about("Browse the store interactively. This is the default."))
        .subcommand(subcommand_products())
        .subcommand(Command::new("categories").about("List product categories."))
        .subcommand(
            Command::new("product")
                .about("Show a product with its reviews.")
                .arg(arg_product_id()),
        )
        .subcommand(subcommand_cart())
        .subcommand(Command::new("login").about("Log in to the store.").arg(arg_username()))
        .subcommand(Command::new("register").about("Create an account.").arg(arg_username()))
        .subcommand(Command::new("logout").about("Log out and forget the saved session."))
        .subcommand(Command::new("whoami").about("Show whether you are logged in."))
        .subcommand(Command::new("checkout").about("Place an order for the items in the active cart."))
        .subcommand(subcommand_orders())
        .subcommand(subcommand_review())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .arg(
            Arg::new(ConfigKey::ApiURL.to_string())
                .long(ConfigKey::ApiURL.to_string())
                .env("STOREFRONT_API_URL")
                .num_args(1)
                .help(format!("Base URL of the storefront API. [default: {}]", Config::default(ConfigKey::ApiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("STOREFRONT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Storage.to_string())
                .long(ConfigKey::Storage.to_string())
                .env("STOREFRONT_STORAGE")
                .num_args(1)
                .help(format!("Where the cart ID and session are kept between runs. [default: {}]", Config::default(ConfigKey::Storage)))
                .value_parser(PossibleValuesParser::new(StorageName::VARIANTS))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::StorageFile.to_string())
                .long(ConfigKey::StorageFile.to_string())
                .env("STOREFRONT_STORAGE_FILE")
                .num_args(1)
                .help(format!("Path to the local storage file when using file storage. [default: {}]", Config::default(ConfigKey::StorageFile)))
                .global(true),
        );
}

/// Parses the command line and runs one-shot commands. Returns true when the
/// interactive shop should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = Config::log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                Some(("storage-path", subcmd_matches)) => {
                    Config::load(build(), vec![&matches, debug_matches, subcmd_matches]).await?;
                    println!("{}", Config::get(ConfigKey::StorageFile));
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build())?);
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("shop", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(true);
        }
        Some(("cart", subcmd_matches)) => {
            let mut all_matches = vec![&matches, subcmd_matches];
            if let Some((_, cart_matches)) = subcmd_matches.subcommand() {
                all_matches.push(cart_matches);
            }
            Config::load(build(), all_matches).await?;
            run_cart(subcmd_matches).await?;
        }
        Some((name, subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            match name {
                "products" => run_products(subcmd_matches).await?,
                "categories" => run_categories().await?,
                "product" => run_product(id_arg(subcmd_matches, "product-id")?).await?,
                "login" => run_login().await?,
                "register" => run_register().await?,
                "logout" => run_logout().await?,
                "whoami" => run_whoami().await?,
                "checkout" => run_checkout().await?,
                "orders" => run_orders(subcmd_matches.get_flag("expand")).await?,
                "review" => run_review(subcmd_matches).await?,
                _ => bail!("Unknown command {name}"),
            }
        }
        None => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(true);
        }
    }

    return Ok(false);
}
