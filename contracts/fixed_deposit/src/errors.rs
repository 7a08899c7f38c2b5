use soroban_sdk::contracterror;

/// Groups errors by domain so off-chain consumers can switch on the bucket
/// first and on the specific code second.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Contract setup (codes 1-99).
    Initialization,
    /// Caller identity and permission (codes 100-199).
    Authorization,
    /// Rejected input values (codes 200-299).
    Validation,
    /// Deposit lifecycle conflicts and maturity gating (codes 300-399).
    Deposit,
    /// Token collaborator and reserve failures (codes 400-499).
    Collaborator,
    /// Checked arithmetic (codes 500-599).
    Arithmetic,
}

/// Every failure the ledger can report.
///
/// Codes are wire-stable: never renumber a variant after deployment, only
/// append inside its category block.
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // --- Initialization (1-99) ---
    NotInitialized = 1,
    AlreadyInitialized = 2,

    // --- Authorization (100-199) ---
    /// Caller is not the ledger owner.
    NotOwner = 100,

    // --- Validation (200-299) ---
    /// Amount must be strictly positive.
    InvalidAmount = 200,
    /// Term must be at least one day.
    InvalidDuration = 201,

    // --- Deposit state (300-399) ---
    /// The account already holds a live deposit.
    AlreadyActive = 300,
    /// The account holds no live deposit.
    NoActiveDeposit = 301,
    /// No interest has accrued since the last claim.
    NothingToClaim = 302,
    /// The deposit term has not elapsed yet.
    NotMatured = 303,

    // --- Collaborator (400-499) ---
    /// The token contract rejected a transfer.
    TransferFailed = 400,
    /// The interest reserve cannot cover the payout.
    InsufficientReserve = 401,

    // --- Arithmetic (500-599) ---
    Overflow = 500,
    Underflow = 501,
}

impl Error {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotInitialized | Error::AlreadyInitialized => ErrorCategory::Initialization,
            Error::NotOwner => ErrorCategory::Authorization,
            Error::InvalidAmount | Error::InvalidDuration => ErrorCategory::Validation,
            Error::AlreadyActive
            | Error::NoActiveDeposit
            | Error::NothingToClaim
            | Error::NotMatured => ErrorCategory::Deposit,
            Error::TransferFailed | Error::InsufficientReserve => ErrorCategory::Collaborator,
            Error::Overflow | Error::Underflow => ErrorCategory::Arithmetic,
        }
    }

    /// Static description safe for logging or display.
    pub fn description(&self) -> &'static str {
        match self {
            Error::NotInitialized => "Ledger has not been initialized",
            Error::AlreadyInitialized => "Ledger has already been initialized",
            Error::NotOwner => "Caller is not the ledger owner",
            Error::InvalidAmount => "Amount must be strictly positive",
            Error::InvalidDuration => "Duration must be at least one day",
            Error::AlreadyActive => "Account already holds a live deposit",
            Error::NoActiveDeposit => "Account holds no live deposit",
            Error::NothingToClaim => "No interest is pending for this account",
            Error::NotMatured => "Deposit term has not elapsed yet",
            Error::TransferFailed => "Token transfer was rejected",
            Error::InsufficientReserve => "Interest reserve cannot cover the payout",
            Error::Overflow => "Integer overflow in checked arithmetic",
            Error::Underflow => "Integer underflow in checked arithmetic",
        }
    }
}
