pub mod context;
pub mod feedback;
pub mod in_flight;
pub mod modal;
pub mod outcome;
pub mod pages;
pub mod session;

pub use context::PageContext;
pub use feedback::{BackendMessage, GENERIC_FAILURE, SERVICE_UNAVAILABLE};
pub use in_flight::{InFlight, InFlightToken};
pub use modal::{ModalController, ModalId};
pub use outcome::{PageLoad, Submission};
pub use pages::{
    AccountAction, AccountPage, BoardAction, BoardLookup, BoardPage, BoardsPage, LandingLoad,
    LandingPage, StatusOption, TaskPage, TaskView,
};
pub use session::SessionGuard;
