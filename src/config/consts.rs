// src/config/consts.rs

// Source pages
pub const CONFERENCE: &str = "ICRA24";
pub const PROGRAM_BASE_URL: &str = "https://ras.papercept.net/conferences/conferences/ICRA24/program/";
pub const DEFAULT_DAYS: &[(&str, &str)] = &[
    ("day1", "ICRA24_ContentListWeb_1.html"),
    ("day2", "ICRA24_ContentListWeb_2.html"),
    ("day3", "ICRA24_ContentListWeb_3.html"),
];

// Local cache of fetched pages
pub const CACHE_DIR: &str = ".cache";

// Output
pub const DEFAULT_OUT_DIR: &str = "dump";
pub const DAY_FILE_PREFIX: &str = "sessions_";
pub const AGGREGATE_FILE: &str = "aggregate_sessions.json";

// Logging
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const LOG_ENV: &str = "ICRA_LOG";
