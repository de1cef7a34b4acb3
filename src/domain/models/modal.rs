/// Which form the authentication modal is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthForm {
    Login,
    Register,
}

/// The one overlay the storefront may have open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Modal {
    #[default]
    Closed,
    Auth(AuthForm),
    Cart,
    Orders,
    Product,
}
