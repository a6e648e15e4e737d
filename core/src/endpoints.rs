//! Endpoint URLs for every Robinhood REST resource.
//!
//! # Design
//! Each method formats `{base_url}{path}` with its parameters substituted
//! as-is. Optional parameters take `None` for the API's default value:
//! `ach(None)` targets the IAV auth endpoint, while `instruments`, `orders`
//! and `tags` substitute an empty segment. Empty segments are kept literally,
//! so `instruments(None, None)` ends in `/instruments//`.

use chrono::NaiveDate;

/// Production address of the Robinhood REST API.
pub const API_URL: &str = "https://api.robinhood.com";

/// ACH option that selects the IAV auth endpoint rather than `/ach/{option}/`.
const ACH_IAV: &str = "iav";

/// Format used for option expiration dates in query strings.
pub(crate) const EXPIRATION_DATE_FORMAT: &str = "%Y-%m-%d";

/// Stateless builder for Robinhood endpoint URLs.
///
/// Holds only the base URL. Every method is a pure function of its arguments
/// and that base, so a single value can be shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::production()
    }
}

impl Endpoints {
    /// Builder bound to a custom base, such as a sandbox or a local mock server.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Builder bound to [`API_URL`].
    pub fn production() -> Self {
        Self {
            base_url: API_URL.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn login(&self) -> String {
        format!("{}/oauth/token/", self.base_url)
    }

    /// Logout goes through the investment profile resource.
    pub fn logout(&self) -> String {
        format!("{}/user/investment_profile/", self.base_url)
    }

    pub fn accounts(&self) -> String {
        format!("{}/accounts/", self.base_url)
    }

    /// ACH endpoint for `option`, which is usually `"iav"`, `"relationships"`
    /// or `"transfers"`. Any other string is accepted.
    ///
    /// `None` and the exact value `"iav"` give `/ach/iav/auth/`. Everything
    /// else is lowercased into `/ach/{option}/`.
    pub fn ach(&self, option: Option<&str>) -> String {
        match option.unwrap_or(ACH_IAV) {
            ACH_IAV => format!("{}/ach/iav/auth/", self.base_url),
            other => format!("{}/ach/{}/", self.base_url, other.to_lowercase()),
        }
    }

    pub fn applications(&self) -> String {
        format!("{}/applications/", self.base_url)
    }

    pub fn dividends(&self) -> String {
        format!("{}/dividends/", self.base_url)
    }

    /// Instrument lookup by id (or ticker such as `"MSFT"`) with an optional
    /// sub-resource such as `"popularity"`.
    pub fn instruments(&self, instrument_id: Option<&str>, option: Option<&str>) -> String {
        format!(
            "{}/instruments/{}/{}",
            self.base_url,
            instrument_id.unwrap_or_default(),
            option.unwrap_or_default()
        )
    }

    pub fn margin_upgrades(&self) -> String {
        format!("{}/margin/upgrades/", self.base_url)
    }

    pub fn markets(&self) -> String {
        format!("{}/markets/", self.base_url)
    }

    pub fn notifications(&self) -> String {
        format!("{}/notifications/", self.base_url)
    }

    /// All orders, or a single order when `order_id` is given.
    pub fn orders(&self, order_id: Option<&str>) -> String {
        format!("{}/orders/{}", self.base_url, order_id.unwrap_or_default())
    }

    pub fn password_reset(&self) -> String {
        format!("{}/password_reset/request/", self.base_url)
    }

    pub fn portfolios(&self) -> String {
        format!("{}/portfolios/", self.base_url)
    }

    pub fn positions(&self) -> String {
        format!("{}/positions/", self.base_url)
    }

    pub fn quotes(&self) -> String {
        format!("{}/quotes/", self.base_url)
    }

    pub fn historicals(&self) -> String {
        format!("{}/historicals/", self.base_url)
    }

    pub fn document_requests(&self) -> String {
        format!("{}/document_requests/", self.base_url)
    }

    pub fn user(&self) -> String {
        format!("{}/user/", self.base_url)
    }

    pub fn watchlists(&self) -> String {
        format!("{}/watchlists/", self.base_url)
    }

    /// News feed for a ticker symbol.
    pub fn news(&self, stock: &str) -> String {
        format!("{}/midlands/news/{stock}", self.base_url)
    }

    pub fn fundamentals(&self, stock: &str) -> String {
        format!("{}/fundamentals/{stock}", self.base_url)
    }

    pub fn tags(&self, tag: Option<&str>) -> String {
        format!("{}/midlands/tags/tag/{}", self.base_url, tag.unwrap_or_default())
    }

    /// Options chain for an underlying equity instrument.
    pub fn chain(&self, instrument_id: &str) -> String {
        format!(
            "{}/options/chains?equity_instrument_ids={instrument_id}",
            self.base_url
        )
    }

    /// Active, tradable option instruments of one chain expiring on
    /// `expiration_date`. The date is rendered as `YYYY-MM-DD`.
    pub fn options(&self, chain_id: &str, expiration_date: NaiveDate, option_type: &str) -> String {
        format!(
            "{}/options/instruments/?chain_id={chain_id}&expiration_dates={}&state=active&tradability=tradable&type={option_type}",
            self.base_url,
            expiration_date.format(EXPIRATION_DATE_FORMAT)
        )
    }

    /// Market data for a single option instrument.
    pub fn market_data(&self, option_id: &str) -> String {
        format!("{}/marketdata/options/{option_id}/", self.base_url)
    }

    pub fn convert_token(&self) -> String {
        format!("{}/oauth2/migrate_token/", self.base_url)
    }
}
