//! Application constants for the transaction processor
//!
//! This module contains the fixed column layouts, encoding priorities,
//! anomaly thresholds and file naming conventions used throughout the
//! application.

// =============================================================================
// Encodings
// =============================================================================

/// Text encodings attempted when reading a raw export, in priority order.
///
/// Bank and card exports in the wild arrive as Windows Shift-JIS (cp932),
/// plain UTF-8 or occasionally EUC-JP. The first encoding that decodes the
/// whole file without errors wins.
pub const ENCODING_PRIORITY: &[&str] = &["cp932", "utf-8", "shift_jis", "euc_jp"];

// =============================================================================
// Column Layouts
// =============================================================================

/// Number of physical columns in a base bank export
pub const BANK_COLUMN_COUNT: usize = 7;

/// Number of physical columns in a card export
pub const CARD_COLUMN_COUNT: usize = 7;

// =============================================================================
// Anomaly Thresholds
// =============================================================================

/// Transactions at or above this magnitude are flagged as large
pub const LARGE_AMOUNT_THRESHOLD: f64 = 1_000_000.0;

/// Bank withdrawals below this value (and above zero) are flagged as small
pub const SMALL_WITHDRAWAL_THRESHOLD: f64 = 100.0;

/// Maximum allowed gap in days between consecutive transactions
pub const DATE_GAP_DAYS: i64 = 30;

/// Tolerance in currency units for the balance continuity check
pub const BALANCE_TOLERANCE: f64 = 1.0;

// =============================================================================
// Duplicate Resolution
// =============================================================================

/// Description substrings that protect a (date, amount) duplicate group from
/// removal, matched case-insensitively.
///
/// The membership fee of the Konami sports club is legitimately charged twice
/// on the same day for a family account; descriptions carrying an "id" token
/// belong to per-identifier charges that legitimately repeat.
pub const DUPLICATE_ALLOWLIST: &[&str] = &["id", "コナミスポーツクラブ（会費）"];

// =============================================================================
// Description Checks
// =============================================================================

/// The Unicode replacement character, a signal of a mis-decoded description
pub const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Special glyphs that indicate formatting noise leaked into a description
pub const SPECIAL_CHARS: &[char] = &['■', '□', '◆', '◇', '※', '●', '○', '▲', '▼'];

// =============================================================================
// File Names and Patterns
// =============================================================================

/// Prefix for cleansed per-file outputs
pub const PROCESSED_PREFIX: &str = "processed_";

/// Ledger of rows excluded by row validation
pub const VALIDATION_ERRORS_FILE: &str = "validation_errors.csv";

/// Ledger of rows removed by duplicate resolution
pub const REMOVED_DUPLICATES_FILE: &str = "removed_duplicates.csv";

/// Glob pattern for raw input files within a domain directory
pub const INPUT_FILE_PATTERN: &str = "*.csv";

/// Glob pattern selecting cleansed bank outputs
pub const BANK_PROCESSED_PATTERN: &str = "*bank*.csv";

/// Glob pattern selecting cleansed card outputs
pub const CARD_PROCESSED_PATTERN: &str = "*card*.csv";

/// Prefix for validation report files
pub const REPORT_FILE_PREFIX: &str = "validation_results_";

/// Glob pattern selecting validation report files
pub const REPORT_FILE_PATTERN: &str = "validation_results_*.json";

/// Timestamp format used in report file names
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
