/// Share of every jackpot entry fee (in percent) that is added to the pool.
pub const JACKPOT_CONTRIBUTION_PERCENT: u64 = 80;

/// Number of prizes a user may claim before the daily allowance is exhausted.
pub const DAILY_PRIZE_ALLOWANCE: u32 = 3;

/// Identity used for the signed-in user when none is configured.
pub const DEFAULT_USER_ID: &str = "current-user";

/// Maximum length of a question sent to the assistant.
pub const MAX_MESSAGE_LENGTH: usize = 1_000;

// Default display durations for transient notifications.
pub const SUCCESS_NOTIFICATION_MS: u64 = 5_000;
pub const ERROR_NOTIFICATION_MS: u64 = 8_000;
pub const WARNING_NOTIFICATION_MS: u64 = 6_000;
pub const INFO_NOTIFICATION_MS: u64 = 5_000;

/// Message shown when a backend call fails for reasons outside the request itself.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Reply returned by the scripted assistant for every question.
pub const ASSISTANT_REPLY: &str = "Thanks for your question! I'll help you with that right away. Let me analyze your gaming patterns and provide personalized recommendations.";

/// One day in milliseconds.
pub const DAY_MS: u64 = 24 * 60 * 60 * 1_000;
