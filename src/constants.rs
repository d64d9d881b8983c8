//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 20;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 24;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Username minimum length
pub const MIN_USERNAME_LENGTH: u64 = 3;

/// Username maximum length
pub const MAX_USERNAME_LENGTH: u64 = 32;

// =============================================================================
// BOOKING RULES
// =============================================================================

/// Courts open at this hour (inclusive lower bound for start times)
pub const OPENING_HOUR: u32 = 7;

/// Courts close at this hour (inclusive upper bound for end times)
pub const CLOSING_HOUR: u32 = 20;

/// Bookings snap to this granularity in minutes
pub const SLOT_GRANULARITY_MINUTES: u32 = 30;

/// Maximum booking duration in minutes
pub const MAX_BOOKING_MINUTES: i64 = 60;

/// Minimum age in years to book a court
pub const MIN_BOOKING_AGE_YEARS: i32 = 16;

/// Length of the generated booking confirmation code
pub const CONFIRMATION_CODE_LENGTH: usize = 8;

// =============================================================================
// COURT SETTINGS
// =============================================================================

/// Court surface identifiers
pub mod surfaces {
    pub const CLAY: &str = "clay";
    pub const GRASS: &str = "grass";
    pub const HARD: &str = "hard";
    pub const CARPET: &str = "carpet";

    /// All supported surfaces
    pub const ALL: &[&str] = &[CLAY, GRASS, HARD, CARPET];
}

/// Lowest court number accepted per facility
pub const MIN_COURT_NUMBER: i32 = 1;

/// Highest court number accepted per facility
pub const MAX_COURT_NUMBER: i32 = 99;

// =============================================================================
// USER ROLES
// =============================================================================

/// User role identifiers
pub mod roles {
    pub const ADMIN: &str = "admin";
    pub const MEMBER: &str = "member";
}

// =============================================================================
// API VERSIONING
// =============================================================================

/// Current API version
pub const API_VERSION: &str = "v1";

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";

// =============================================================================
// VALIDATION
// =============================================================================

/// Maximum facility name length
pub const MAX_FACILITY_NAME_LENGTH: u64 = 128;

/// Maximum person name length (first or last)
pub const MAX_PERSON_NAME_LENGTH: u64 = 64;
