// =============================================================================
// COLLECTION NAMES
// =============================================================================

pub const USERS_COLLECTION: &str = "users";

pub const CONTESTS_COLLECTION: &str = "contests";

/// The promotions entity lives in a collection literally named `promotion`.
pub const PROMOTIONS_COLLECTION: &str = "promotion";

pub const REQUESTS_COLLECTION: &str = "requests";

pub const BOOKINGS_COLLECTION: &str = "bookings";

pub const FAVORITES_COLLECTION: &str = "favorites";

// =============================================================================
// STATUS LITERALS
// =============================================================================

/// Status a contest gets when an administrator approves it
pub const STATUS_APPROVED: &str = "Approved";

/// Status a freshly created contest starts with
pub const STATUS_PENDING: &str = "pending";

/// Result a booking gets when it is picked as the winner
pub const RESULT_WINNER: &str = "winner";

// =============================================================================
// SESSION
// =============================================================================

/// Name of the HTTP-only cookie carrying the session token
pub const SESSION_COOKIE_NAME: &str = "token";

/// Fixed message returned whenever session verification fails
pub const UNAUTHORIZED_MESSAGE: &str = "unauthorized access";

// =============================================================================
// PAYMENTS
// =============================================================================

/// Every payment intent is created in this currency
pub const PAYMENT_CURRENCY: &str = "usd";
