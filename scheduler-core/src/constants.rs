/// chrono format string for the compact `YYYYMMDD` date form.
pub const COMPACT_DATE_FORMAT: &str = "%Y%m%d";

/// Date format accepted by task search (`DD.MM.YYYY`).
pub const SEARCH_DATE_FORMAT: &str = "%d.%m.%Y";

/// Upper bound for the `d <n>` rule operand.
pub const MAX_DAY_INTERVAL: u32 = 400;

/// Maximum number of rows returned by a task listing.
pub const TASK_LIMIT: u32 = 50;

/// Rule value that the creation path resolves to "today" without consulting the resolver.
pub const DAILY_RULE: &str = "d 1";

pub const DEFAULT_PORT: u16 = 7540;

pub const DEFAULT_DB_FILE: &str = "scheduler.db";

pub const DEFAULT_WEB_DIR: &str = "./web";
