//! One workflow per page. Pages take `&self`; their state sits behind
//! short-lived locks that are never held across a backend call.

pub mod account;
pub mod board;
pub mod boards;
pub mod landing;
pub mod task;

pub use account::{AccountAction, AccountPage};
pub use board::{BoardAction, BoardLookup, BoardPage};
pub use boards::BoardsPage;
pub use landing::{LandingLoad, LandingPage};
pub use task::{StatusOption, TaskPage, TaskView};
