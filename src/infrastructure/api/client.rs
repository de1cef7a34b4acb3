#[cfg(test)]
#[path = "client_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use reqwest::cookie::CookieStore;
use reqwest::cookie::Jar;
use reqwest::Response;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AddCartItem;
use crate::domain::models::Cart;
use crate::domain::models::Category;
use crate::domain::models::CreatedOrder;
use crate::domain::models::Credentials;
use crate::domain::models::LoginStatus;
use crate::domain::models::NewCart;
use crate::domain::models::NewOrder;
use crate::domain::models::Order;
use crate::domain::models::Product;
use crate::domain::models::ProductFilter;
use crate::domain::models::Review;
use crate::domain::models::ReviewDraft;
use crate::domain::models::Session;

/// HTTP client for the storefront REST API. The backend tracks logins with a
/// session cookie, which lives in the client's cookie jar.
pub struct ShopClient {
    url: Url,
    jar: Arc<Jar>,
    client: reqwest::Client,
}

impl ShopClient {
    pub fn new(url: &str) -> Result<ShopClient> {
        let jar = Arc::new(Jar::default());
        let client = reqwest::Client::builder()
            .cookie_provider(jar.clone())
            .build()?;

        return Ok(ShopClient {
            url: Url::parse(url)?,
            jar,
            client,
        });
    }

    pub fn from_config() -> Result<ShopClient> {
        return ShopClient::new(&Config::get(ConfigKey::ApiURL));
    }

    fn endpoint(&self, path: &str) -> String {
        let base = self.url.as_str().trim_end_matches('/');
        return format!("{base}{path}");
    }

    async fn check(res: Response) -> Result<Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }

        let url = res.url().to_string();
        let body = res.text().await.unwrap_or_default();
        tracing::error!(
            status = status.as_u16(),
            url,
            body = body.trim(),
            "Storefront request failed"
        );

        let reason = body.trim();
        if reason.is_empty() {
            bail!("Request to {url} failed with status {status}");
        }
        bail!("Request to {url} failed with status {status}: {reason}");
    }

    async fn decode<T: DeserializeOwned>(res: Response) -> Result<T> {
        let url = res.url().to_string();
        let body = ShopClient::check(res).await?.text().await?;

        return serde_json::from_str::<T>(&body).map_err(|err| {
            tracing::error!(url, body = body.trim(), error = ?err, "Malformed storefront response");
            return anyhow!("Malformed response from {url}: {err}");
        });
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        tracing::debug!(path, "GET");
        let res = self.client.get(self.endpoint(path)).send().await?;

        return ShopClient::decode(res).await;
    }

    async fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        tracing::debug!(path, "POST");
        let res = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;

        return ShopClient::check(res).await;
    }

    async fn post_empty(&self, path: &str) -> Result<Response> {
        tracing::debug!(path, "POST");
        let res = self.client.post(self.endpoint(path)).send().await?;

        return ShopClient::check(res).await;
    }

    pub async fn products(&self, filter: &ProductFilter) -> Result<Vec<Product>> {
        tracing::debug!(
            search = filter.search.as_str(),
            category = ?filter.category,
            "GET /api/products"
        );
        let res = self
            .client
            .get(self.endpoint("/api/products"))
            .query(&filter.query())
            .send()
            .await?;
        let products: Option<Vec<Product>> = ShopClient::decode(res).await?;

        return Ok(products.unwrap_or_default());
    }

    pub async fn product(&self, id: i64) -> Result<Product> {
        return self.get_json(&format!("/api/products/{id}")).await;
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        let categories: Option<Vec<Category>> = self.get_json("/api/categories").await?;
        return Ok(categories.unwrap_or_default());
    }

    pub async fn create_cart(&self) -> Result<i64> {
        let res = self.post_empty("/api/cart").await?;
        let cart: NewCart = ShopClient::decode(res).await?;

        return Ok(cart.id);
    }

    pub async fn cart(&self, id: i64) -> Result<Cart> {
        return self.get_json(&format!("/api/cart/{id}")).await;
    }

    pub async fn add_cart_item(&self, cart_id: i64, product_id: i64, quantity: i64) -> Result<()> {
        let req = AddCartItem {
            product_id,
            quantity,
        };
        self.post_json(&format!("/api/cart/{cart_id}/items"), &req)
            .await?;

        return Ok(());
    }

    pub async fn login_status(&self) -> Result<Session> {
        let status: LoginStatus = self.get_json("/api/me").await?;
        return Ok(Session::from(status));
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<()> {
        self.post_json("/api/login", credentials).await?;
        return Ok(());
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<()> {
        self.post_json("/api/register", credentials).await?;
        return Ok(());
    }

    pub async fn logout(&self) -> Result<()> {
        self.post_empty("/api/logout").await?;
        return Ok(());
    }

    pub async fn orders(&self) -> Result<Vec<Order>> {
        let orders: Option<Vec<Order>> = self.get_json("/api/orders").await?;
        return Ok(orders.unwrap_or_default());
    }

    pub async fn create_order(&self, cart_id: i64) -> Result<i64> {
        let res = self.post_json("/api/orders", &NewOrder { cart_id }).await?;
        let order: CreatedOrder = ShopClient::decode(res).await?;

        return Ok(order.id);
    }

    pub async fn reviews(&self, product_id: i64) -> Result<Vec<Review>> {
        let reviews: Option<Vec<Review>> = self
            .get_json(&format!("/api/products/{product_id}/reviews"))
            .await?;

        return Ok(reviews.unwrap_or_default());
    }

    pub async fn create_review(&self, product_id: i64, draft: &ReviewDraft) -> Result<()> {
        self.post_json(&format!("/api/products/{product_id}/reviews"), draft)
            .await?;

        return Ok(());
    }

    /// Cookies the jar would send to the backend, formatted as a `Cookie`
    /// header value.
    pub fn session_cookie(&self) -> Option<String> {
        let header = self.jar.cookies(&self.url)?;
        let cookie = header.to_str().ok()?;
        if cookie.is_empty() {
            return None;
        }

        return Some(cookie.to_string());
    }

    /// Expires every cookie the jar holds for the backend.
    pub fn forget_session(&self) {
        let Some(cookie) = self.session_cookie() else {
            return;
        };

        for pair in cookie.split(';') {
            let name = pair.split('=').next().unwrap_or_default().trim();
            if name.is_empty() {
                continue;
            }
            self.jar
                .add_cookie_str(&format!("{name}=; Max-Age=0"), &self.url);
        }
    }

    /// Loads cookies previously returned by `session_cookie` back into the jar.
    pub fn restore_session_cookie(&self, cookie: &str) {
        for pair in cookie.split(';') {
            let pair = pair.trim();
            if pair.is_empty() {
                continue;
            }
            self.jar.add_cookie_str(pair, &self.url);
        }
    }
}
