//! Torn REST API sections and selection names.

/// Base URL for the Torn REST API.
pub const TORN_BASE_URL: &str = "https://api.torn.com";

/// Top-level API sections.
pub mod section {
    /// Player data.
    pub const USER: &str = "user";
    /// Item, bazaar and points markets.
    pub const MARKET: &str = "market";
    /// Game-wide data.
    pub const TORN: &str = "torn";
    /// Property data.
    pub const PROPERTY: &str = "property";
}

/// Selection names.
pub mod selection {
    /// Selections a section supports. Every section has it.
    pub const LOOKUP: &str = "lookup";
    /// Server time. Every section has it.
    pub const TIMESTAMP: &str = "timestamp";

    // User selections
    pub const AMMO: &str = "ammo";
    pub const BARS: &str = "bars";
    pub const BASIC: &str = "basic";
    pub const MONEY: &str = "money";

    // Market selections
    pub const BAZAAR: &str = "bazaar";
    pub const ITEM_MARKET: &str = "itemmarket";
    pub const POINTS_MARKET: &str = "pointsmarket";

    // Torn selections
    pub const BANK: &str = "bank";

    // Property selections
    pub const PROPERTY: &str = "property";
}
