/// Application name
pub const APP_NAME: &str = "gigmarket";

/// Backend root used when no override is configured
pub const DEFAULT_API_BASE: &str = "http://localhost:5000";

/// Chat refresh period in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3_000;

/// Price of a single connect in US dollars
pub const CONNECT_PRICE_USD: f64 = 0.5;

/// Default quantity offered in the purchase dialog
pub const DEFAULT_CONNECTS_QUANTITY: u32 = 10;

/// Image assigned to freshly created profiles
pub const DEFAULT_PROFILE_IMAGE: &str = "/images/bruce.jpg";

/// Location sent with every new job posting
pub const DEFAULT_JOB_LOCATION: &str = "Remote";

/// Budget pre-filled in the post-job form
pub const DEFAULT_JOB_BUDGET: &str = "200";

/// Delivery timelines a freelancer can pick from when bidding.
pub const TIMELINE_OPTIONS: &[&str] = &[
    "5 days", "7 days", "12 days", "2 weeks", "3 weeks", "4 weeks", "1 month", "2 months",
];

/// Ledger transaction types that add connects to the balance.
pub const CREDIT_TRANSACTION_TYPES: &[&str] =
    &["connect_purchase", "monthly_renewal", "job_cancelled"];
