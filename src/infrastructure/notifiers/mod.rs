pub mod terminal;

use crate::domain::models::Notifier;

pub type NotifierBox = Box<dyn Notifier + Send + Sync>;
