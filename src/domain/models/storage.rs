use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

/// Key holding the id of the active cart.
pub const CART_ID_KEY: &str = "cartId";
/// Key holding the backend session cookie between runs.
pub const SESSION_COOKIE_KEY: &str = "sessionCookie";

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum StorageName {
    File,
    Memory,
}

impl StorageName {
    pub fn parse(text: String) -> Option<StorageName> {
        return StorageName::iter().find(|e| return e.to_string() == text);
    }
}

/// A small string key/value store that outlives a single request, the way a
/// browser's local storage does.
#[async_trait]
pub trait Storage {
    fn name(&self) -> StorageName;

    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<()>;
}
