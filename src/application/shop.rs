use anyhow::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::Input;
use dialoguer::Password;
use dialoguer::Select;
use yansi::Paint;

use super::render;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::AuthForm;
use crate::domain::models::Credentials;
use crate::domain::models::Modal;
use crate::domain::models::ReviewDraft;
use crate::domain::models::RATINGS;
use crate::domain::services::Storefront;
use crate::infrastructure::notifiers::terminal::TerminalNotifier;

/// Prompts for a username and password. The configured username is offered as
/// the default.
pub fn prompt_credentials() -> Result<Credentials> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme).with_prompt("Username");

    let username = Config::get(ConfigKey::Username);
    if !username.is_empty() {
        input = input.default(username);
    }

    let username = input.interact_text()?;
    let password = Password::with_theme(&theme)
        .with_prompt("Password")
        .interact()?;

    return Ok(Credentials::new(username.trim(), &password));
}

fn prompt_review() -> Result<ReviewDraft> {
    let theme = ColorfulTheme::default();
    let ratings = RATINGS.rev().collect::<Vec<i64>>();
    let labels = ratings
        .iter()
        .map(|rating| return render::stars(*rating))
        .collect::<Vec<String>>();

    let idx = Select::with_theme(&theme)
        .with_prompt("Rating")
        .default(0)
        .items(&labels)
        .interact()?;
    let comment = Input::<String>::with_theme(&theme)
        .with_prompt("Comment")
        .allow_empty(true)
        .interact_text()?;

    return Ok(ReviewDraft::new(ratings[idx], comment.trim()));
}

fn choose(prompt: &str, items: &[String]) -> Result<Option<usize>> {
    let idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()?;

    return Ok(idx);
}

fn print_title(title: &str) {
    println!("\n{}", Paint::new(title).bold().underline());
}

/// `None` quits the shop.
fn storefront_menu(storefront: &Storefront) -> Result<Option<Vec<Action>>> {
    let session_item = if storefront.session.logged_in {
        "Log out"
    } else {
        "Log in"
    };
    let items = vec![
        "Browse products".to_string(),
        "Search".to_string(),
        "Filter by category".to_string(),
        "View product".to_string(),
        render::cart_badge(&storefront.cart),
        "Order history".to_string(),
        session_item.to_string(),
        "Refresh".to_string(),
        "Quit".to_string(),
    ];

    print_title(&format!(
        "Storefront - {}",
        render::session(&storefront.session)
    ));
    let Some(idx) = choose("What would you like to do?", &items)? else {
        return Ok(None);
    };

    let actions = match idx {
        0 => {
            println!(
                "{}",
                render::product_list(&storefront.products, &storefront.categories)
            );
            vec![]
        }
        1 => {
            let term = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt("Search")
                .with_initial_text(storefront.filter.search.to_string())
                .allow_empty(true)
                .interact_text()?;
            vec![Action::Search(term.trim().to_string())]
        }
        2 => {
            let mut names = vec!["All categories".to_string()];
            names.extend(
                storefront
                    .categories
                    .iter()
                    .map(|category| return category.name.to_string()),
            );

            match choose("Category", &names)? {
                Some(0) => vec![Action::FilterCategory(None)],
                Some(idx) => vec![Action::FilterCategory(
                    storefront.categories.get(idx - 1).map(|category| return category.id),
                )],
                None => vec![],
            }
        }
        3 => {
            let lines = storefront
                .products
                .iter()
                .map(|product| return render::product_line(product, &storefront.categories))
                .collect::<Vec<String>>();

            if lines.is_empty() {
                println!("{}", render::product_list(&[], &[]));
                vec![]
            } else {
                match choose("Product", &lines)? {
                    Some(idx) => vec![Action::ShowProduct(storefront.products[idx].id)],
                    None => vec![],
                }
            }
        }
        4 => vec![Action::ShowCart()],
        5 => vec![Action::ShowOrders()],
        6 => vec![Action::ToggleLogin()],
        7 => vec![
            Action::FetchProducts(),
            Action::FetchCategories(),
            Action::RefreshCart(),
            Action::CheckLoginStatus(),
        ],
        _ => return Ok(None),
    };

    return Ok(Some(actions));
}

fn product_menu(storefront: &Storefront) -> Result<Vec<Action>> {
    let Some(product) = &storefront.selected_product else {
        return Ok(vec![Action::CloseModal()]);
    };

    print_title(&product.name);
    println!("{}", render::product_details(product, &storefront.reviews));

    let items = vec![
        "Add to cart".to_string(),
        "Write a review".to_string(),
        "Back".to_string(),
    ];
    let actions = match choose("Product", &items)? {
        Some(0) => vec![Action::AddToCart(product.id)],
        Some(1) => vec![
            Action::SetReviewDraft(prompt_review()?),
            Action::SubmitReview(),
        ],
        _ => vec![Action::CloseModal()],
    };

    return Ok(actions);
}

fn cart_menu(storefront: &Storefront) -> Result<Vec<Action>> {
    print_title("Cart");
    println!("{}", render::cart(&storefront.cart));

    let items = vec!["Checkout".to_string(), "Back".to_string()];
    let actions = match choose("Cart", &items)? {
        Some(0) => vec![Action::Checkout()],
        _ => vec![Action::CloseModal()],
    };

    return Ok(actions);
}

fn orders_menu(storefront: &Storefront, expanded: &mut bool) -> Result<Vec<Action>> {
    print_title("Order history");
    if storefront.orders.is_empty() {
        println!("You haven't placed any orders yet.");
    } else {
        println!("{}", storefront.orders.render(*expanded));
    }

    let toggle = if *expanded { "Hide items" } else { "Show items" };
    let items = vec![toggle.to_string(), "Back".to_string()];
    if choose("Orders", &items)? == Some(0) {
        *expanded = !*expanded;
        return Ok(vec![]);
    }

    *expanded = false;
    return Ok(vec![Action::CloseModal()]);
}

fn auth_menu(form: AuthForm) -> Result<Vec<Action>> {
    let (title, switch) = match form {
        AuthForm::Login => ("Log in", "Create an account"),
        AuthForm::Register => ("Register", "I already have an account"),
    };

    print_title(title);
    let items = vec![
        "Enter username and password".to_string(),
        switch.to_string(),
        "Back".to_string(),
    ];
    let actions = match (choose(title, &items)?, form) {
        (Some(0), AuthForm::Login) => vec![Action::Login(prompt_credentials()?)],
        (Some(0), AuthForm::Register) => vec![Action::Register(prompt_credentials()?)],
        (Some(1), AuthForm::Login) => vec![Action::ShowRegisterForm()],
        (Some(1), AuthForm::Register) => vec![Action::ShowLoginForm()],
        _ => vec![Action::CloseModal()],
    };

    return Ok(actions);
}

/// Runs the interactive storefront until the user quits. Each menu choice
/// becomes one or more actions handled by the storefront, and the next menu
/// follows whichever modal is open afterwards.
pub async fn start() -> Result<()> {
    let mut storefront = Storefront::from_config(Box::new(TerminalNotifier::blocking())).await?;
    storefront.init().await?;

    let mut orders_expanded = false;
    loop {
        let actions = match storefront.modal {
            Modal::Closed => match storefront_menu(&storefront)? {
                Some(actions) => actions,
                None => break,
            },
            Modal::Auth(form) => auth_menu(form)?,
            Modal::Cart => cart_menu(&storefront)?,
            Modal::Orders => orders_menu(&storefront, &mut orders_expanded)?,
            Modal::Product => product_menu(&storefront)?,
        };

        for action in actions {
            tracing::debug!(action = ?action, "Handling action");
            storefront.handle(action).await?;
        }
    }

    return Ok(());
}
