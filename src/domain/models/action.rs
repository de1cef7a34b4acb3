use super::Credentials;
use super::ReviewDraft;

/// Everything a user can trigger on the storefront.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    AddToCart(i64),
    CheckLoginStatus(),
    Checkout(),
    CloseModal(),
    FetchCategories(),
    FetchProducts(),
    FilterCategory(Option<i64>),
    Login(Credentials),
    Logout(),
    RefreshCart(),
    Register(Credentials),
    Search(String),
    SetReviewDraft(ReviewDraft),
    ShowCart(),
    ShowLoginForm(),
    ShowOrders(),
    ShowProduct(i64),
    ShowRegisterForm(),
    SubmitReview(),
    ToggleLogin(),
}
