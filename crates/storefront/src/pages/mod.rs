//! Page controllers for the customer-facing store.
//!
//! Every page follows the same contract: `mount` constructs the
//! controller and starts the initial fetch in the background, `state`
//! and `subscribe` expose the lifecycle, and `refresh` re-runs the fetch
//! (no-op while one is already in flight). Fetch failures surface as
//! canned, user-facing messages; the raw errors are logged.

pub mod home;
pub mod product_info;
pub mod products;

pub use home::HomePage;
pub use product_info::ProductInfoPage;
pub use products::ProductsPage;
