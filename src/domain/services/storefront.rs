#[cfg(test)]
#[path = "storefront_test.rs"]
mod tests;

use anyhow::Result;
use chrono::Local;

use super::OrderHistory;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::AuthForm;
use crate::domain::models::CartSummary;
use crate::domain::models::Category;
use crate::domain::models::Credentials;
use crate::domain::models::Modal;
use crate::domain::models::Product;
use crate::domain::models::ProductFilter;
use crate::domain::models::Review;
use crate::domain::models::ReviewDraft;
use crate::domain::models::Session;
use crate::domain::models::StorageName;
use crate::domain::models::CART_ID_KEY;
use crate::domain::models::SESSION_COOKIE_KEY;
use crate::infrastructure::api::ShopClient;
use crate::infrastructure::notifiers::NotifierBox;
use crate::infrastructure::storage::StorageBox;
use crate::infrastructure::storage::StorageManager;

/// Owns everything the storefront shows: catalog, cart, session, review form
/// and which modal is open. Every mutation goes to the backend first and the
/// affected state is re-fetched afterwards. Failures are reported to the user
/// through the notifier; only a failing notifier is returned as an error.
pub struct Storefront {
    client: ShopClient,
    storage: StorageBox,
    notifier: NotifierBox,

    pub cart: CartSummary,
    pub categories: Vec<Category>,
    pub filter: ProductFilter,
    pub modal: Modal,
    pub orders: OrderHistory,
    pub products: Vec<Product>,
    pub review_draft: ReviewDraft,
    pub reviews: Vec<Review>,
    pub selected_product: Option<Product>,
    pub session: Session,

    failed: bool,
}

impl Storefront {
    pub fn new(client: ShopClient, storage: StorageBox, notifier: NotifierBox) -> Storefront {
        return Storefront {
            client,
            storage,
            notifier,
            cart: CartSummary::default(),
            categories: vec![],
            filter: ProductFilter::default(),
            modal: Modal::Closed,
            orders: OrderHistory::default(),
            products: vec![],
            review_draft: ReviewDraft::default(),
            reviews: vec![],
            selected_product: None,
            session: Session::default(),
            failed: false,
        };
    }

    pub async fn from_config(notifier: NotifierBox) -> Result<Storefront> {
        let storage_name =
            StorageName::parse(Config::get(ConfigKey::Storage)).unwrap_or(StorageName::File);
        let storage = StorageManager::get(storage_name)?;
        let storefront = Storefront::new(ShopClient::from_config()?, storage, notifier);
        tracing::debug!(storage = %storefront.storage.name(), "Opened local storage");

        if let Some(cookie) = storefront.storage.get_item(SESSION_COOKIE_KEY).await? {
            storefront.client.restore_session_cookie(&cookie);
        }

        return Ok(storefront);
    }

    fn alert(&self, text: &str) -> Result<()> {
        return self.notifier.alert(text);
    }

    fn report(&mut self, text: &str, err: anyhow::Error) -> Result<()> {
        tracing::error!(error = ?err, text, "Storefront action failed");
        return self.reject(text);
    }

    fn reject(&mut self, text: &str) -> Result<()> {
        self.failed = true;
        return self.alert(text);
    }

    /// True once any operation was rejected or failed.
    pub fn failed(&self) -> bool {
        return self.failed;
    }

    fn require_login(&mut self, text: &str) -> Result<bool> {
        if self.session.logged_in {
            return Ok(true);
        }

        self.reject(text)?;
        self.modal = Modal::Auth(AuthForm::Login);
        return Ok(false);
    }

    /// Loads what the storefront shows on startup.
    pub async fn init(&mut self) -> Result<()> {
        self.fetch_products().await?;
        self.fetch_categories().await?;
        self.render_cart_items().await?;
        self.check_login_status().await?;

        return Ok(());
    }

    pub async fn handle(&mut self, action: Action) -> Result<()> {
        match action {
            Action::AddToCart(product_id) => return self.add_to_cart(product_id).await,
            Action::CheckLoginStatus() => return self.check_login_status().await,
            Action::Checkout() => return self.checkout().await,
            Action::CloseModal() => {
                self.modal = Modal::Closed;
                return Ok(());
            }
            Action::FetchCategories() => return self.fetch_categories().await,
            Action::FetchProducts() => return self.fetch_products().await,
            Action::FilterCategory(category) => return self.set_category(category).await,
            Action::Login(credentials) => return self.login(&credentials).await,
            Action::Logout() => return self.logout().await,
            Action::RefreshCart() => return self.render_cart_items().await,
            Action::Register(credentials) => return self.register(&credentials).await,
            Action::Search(term) => return self.set_search(&term).await,
            Action::SetReviewDraft(draft) => {
                self.review_draft = draft;
                return Ok(());
            }
            Action::ShowCart() => return self.show_cart().await,
            Action::ShowLoginForm() => {
                self.show_login_form();
                return Ok(());
            }
            Action::ShowOrders() => return self.show_orders().await,
            Action::ShowProduct(product_id) => return self.show_product_details(product_id).await,
            Action::ShowRegisterForm() => {
                self.show_register_form();
                return Ok(());
            }
            Action::SubmitReview() => return self.submit_review().await,
            Action::ToggleLogin() => return self.toggle_login().await,
        }
    }

    pub async fn fetch_products(&mut self) -> Result<()> {
        match self.client.products(&self.filter).await {
            Ok(products) => {
                self.products = products;
            }
            Err(err) => return self.report("Failed to load products.", err),
        }

        return Ok(());
    }

    pub async fn fetch_categories(&mut self) -> Result<()> {
        match self.client.categories().await {
            Ok(categories) => {
                self.categories = categories;
            }
            Err(err) => return self.report("Failed to load categories.", err),
        }

        return Ok(());
    }

    pub async fn set_search(&mut self, term: &str) -> Result<()> {
        self.filter.search = term.to_string();
        return self.fetch_products().await;
    }

    pub async fn set_category(&mut self, category: Option<i64>) -> Result<()> {
        self.filter.category = category;
        return self.fetch_products().await;
    }

    pub async fn show_product_details(&mut self, product_id: i64) -> Result<()> {
        let product = match self.client.product(product_id).await {
            Ok(product) => product,
            Err(err) => return self.report("Failed to load product.", err),
        };

        let reviews = match self.client.reviews(product_id).await {
            Ok(reviews) => reviews,
            Err(err) => return self.report("Failed to load reviews.", err),
        };

        self.selected_product = Some(product);
        self.reviews = reviews;
        self.review_draft = ReviewDraft::default();
        self.modal = Modal::Product;

        return Ok(());
    }

    /// Cart id kept in local storage. A value that isn't a cart id is dropped.
    pub async fn stored_cart_id(&self) -> Result<Option<i64>> {
        let Some(value) = self.storage.get_item(CART_ID_KEY).await? else {
            return Ok(None);
        };

        if let Ok(cart_id) = value.trim().parse::<i64>() {
            return Ok(Some(cart_id));
        }

        tracing::warn!(value = value.as_str(), "Dropping unreadable cart id from local storage");
        self.storage.remove_item(CART_ID_KEY).await?;
        return Ok(None);
    }

    /// Returns the stored cart id, asking the backend for a new cart and
    /// storing its id when there is none yet.
    pub async fn get_or_create_cart(&self) -> Result<i64> {
        if let Some(cart_id) = self.stored_cart_id().await? {
            return Ok(cart_id);
        }

        let cart_id = self.client.create_cart().await?;
        self.storage
            .set_item(CART_ID_KEY, &cart_id.to_string())
            .await?;
        tracing::debug!(cart_id, "Created cart");

        return Ok(cart_id);
    }

    async fn add_item(&self, product_id: i64) -> Result<()> {
        let cart_id = self.get_or_create_cart().await?;
        self.client.add_cart_item(cart_id, product_id, 1).await?;

        return Ok(());
    }

    pub async fn add_to_cart(&mut self, product_id: i64) -> Result<()> {
        if let Err(err) = self.add_item(product_id).await {
            return self.report("Failed to add item to cart.", err);
        }

        return self.render_cart_items().await;
    }

    /// Re-fetches the active cart and recomputes count and total. Without a
    /// cart the summary is empty; no cart is created just to be displayed.
    pub async fn render_cart_items(&mut self) -> Result<()> {
        let cart_id = match self.stored_cart_id().await {
            Ok(Some(cart_id)) => cart_id,
            Ok(None) => {
                self.cart = CartSummary::default();
                return Ok(());
            }
            Err(err) => return self.report("Failed to load cart.", err),
        };

        match self.client.cart(cart_id).await {
            Ok(cart) => {
                self.cart = CartSummary::from(cart);
            }
            Err(err) => return self.report("Failed to load cart.", err),
        }

        return Ok(());
    }

    pub async fn show_cart(&mut self) -> Result<()> {
        self.render_cart_items().await?;
        self.modal = Modal::Cart;

        return Ok(());
    }

    async fn save_session(&self) -> Result<()> {
        if let Some(cookie) = self.client.session_cookie() {
            return self.storage.set_item(SESSION_COOKIE_KEY, &cookie).await;
        }

        return self.storage.remove_item(SESSION_COOKIE_KEY).await;
    }

    pub async fn check_login_status(&mut self) -> Result<()> {
        match self.client.login_status().await {
            Ok(session) => {
                tracing::debug!(logged_in = session.logged_in, user_id = ?session.user_id, "Login status");
                self.session = session;
            }
            Err(err) => return self.report("Failed to check login status.", err),
        }

        return Ok(());
    }

    pub async fn login(&mut self, credentials: &Credentials) -> Result<()> {
        if let Err(err) = self.client.login(credentials).await {
            return self.report("Invalid credentials", err);
        }

        if let Err(err) = self.save_session().await {
            tracing::warn!(error = ?err, "Unable to save session cookie");
        }

        self.alert("Login successful!")?;
        self.check_login_status().await?;
        if let Modal::Auth(_) = self.modal {
            self.modal = Modal::Closed;
        }

        return Ok(());
    }

    pub async fn register(&mut self, credentials: &Credentials) -> Result<()> {
        if let Err(err) = self.client.register(credentials).await {
            return self.report("Registration failed.", err);
        }

        self.alert("Registration successful! Please log in.")?;
        self.show_login_form();

        return Ok(());
    }

    /// Logs out on the backend and forgets the local session, even when the
    /// backend request failed.
    pub async fn logout(&mut self) -> Result<()> {
        let res = self.client.logout().await;
        self.session.clear();
        self.client.forget_session();

        if let Err(err) = self.storage.remove_item(SESSION_COOKIE_KEY).await {
            tracing::warn!(error = ?err, "Unable to forget session cookie");
        }

        if let Err(err) = res {
            return self.report("Failed to log out.", err);
        }

        return Ok(());
    }

    pub async fn toggle_login(&mut self) -> Result<()> {
        if self.session.logged_in {
            return self.logout().await;
        }

        self.show_login_form();
        return Ok(());
    }

    pub fn show_login_form(&mut self) {
        self.modal = Modal::Auth(AuthForm::Login);
    }

    pub fn show_register_form(&mut self) {
        self.modal = Modal::Auth(AuthForm::Register);
    }

    /// Places an order for the active cart. Nothing is sent to the backend when
    /// logged out or when the cart is missing or empty.
    pub async fn checkout(&mut self) -> Result<()> {
        if !self.require_login("You must be logged in to checkout.")? {
            return Ok(());
        }

        let cart_id = match self.stored_cart_id().await {
            Ok(Some(cart_id)) => cart_id,
            Ok(None) => return self.reject("Your cart is empty."),
            Err(err) => return self.report("Failed to place order.", err),
        };

        match self.client.cart(cart_id).await {
            Ok(cart) => {
                self.cart = CartSummary::from(cart);
            }
            Err(err) => return self.report("Failed to place order.", err),
        }

        if self.cart.is_empty() {
            return self.reject("Your cart is empty.");
        }

        let order_id = match self.client.create_order(cart_id).await {
            Ok(order_id) => order_id,
            Err(err) => return self.report("Failed to place order.", err),
        };
        tracing::debug!(order_id, cart_id, "Placed order");

        if let Err(err) = self.storage.remove_item(CART_ID_KEY).await {
            tracing::warn!(error = ?err, "Unable to forget cart id");
        }
        self.cart = CartSummary::default();
        if self.modal == Modal::Cart {
            self.modal = Modal::Closed;
        }

        return self.alert("Order placed successfully!");
    }

    pub async fn show_orders(&mut self) -> Result<()> {
        if !self.require_login("You must be logged in to view your orders.")? {
            return Ok(());
        }

        match self.client.orders().await {
            Ok(orders) => {
                self.orders = OrderHistory::new(&orders, &Local);
            }
            Err(err) => return self.report("Failed to load orders.", err),
        }
        self.modal = Modal::Orders;

        return Ok(());
    }

    pub async fn submit_review(&mut self) -> Result<()> {
        if !self.require_login("You must be logged in to leave a review.")? {
            return Ok(());
        }

        let Some(product_id) = self.selected_product.as_ref().map(|product| return product.id)
        else {
            return Ok(());
        };

        if !self.review_draft.has_valid_rating() {
            return self.reject("Rating must be between 1 and 5.");
        }

        if let Err(err) = self
            .client
            .create_review(product_id, &self.review_draft)
            .await
        {
            return self.report("Failed to submit review.", err);
        }

        match self.client.reviews(product_id).await {
            Ok(reviews) => {
                self.reviews = reviews;
            }
            Err(err) => return self.report("Failed to load reviews.", err),
        }
        self.review_draft = ReviewDraft::default();

        return Ok(());
    }
}
