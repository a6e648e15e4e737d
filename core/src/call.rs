//! Endpoint calls described as plain data.
//!
//! # Design
//! `EndpointCall` names one resource together with its parameters. It is
//! internally tagged on `endpoint`, so a host can request a URL with JSON such
//! as `{"endpoint":"orders","order_id":"abc123"}` instead of binding every
//! builder method. Optional fields may be omitted and fall back to the same
//! defaults as the corresponding `Endpoints` method.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::endpoints::{Endpoints, EXPIRATION_DATE_FORMAT};
use crate::error::EndpointError;

/// Known ACH sub-resources. `Endpoints::ach` also accepts arbitrary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchOption {
    Iav,
    Relationships,
    Transfers,
}

impl AchOption {
    pub fn as_str(self) -> &'static str {
        match self {
            AchOption::Iav => "iav",
            AchOption::Relationships => "relationships",
            AchOption::Transfers => "transfers",
        }
    }
}

/// One endpoint request: the resource plus whatever identifies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "endpoint", rename_all = "snake_case")]
pub enum EndpointCall {
    Login,
    Logout,
    Accounts,
    Ach {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        option: Option<String>,
    },
    Applications,
    Dividends,
    Instruments {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        instrument_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        option: Option<String>,
    },
    MarginUpgrades,
    Markets,
    Notifications,
    Orders {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        order_id: Option<String>,
    },
    PasswordReset,
    Portfolios,
    Positions,
    Quotes,
    Historicals,
    DocumentRequests,
    User,
    Watchlists,
    News {
        stock: String,
    },
    Fundamentals {
        stock: String,
    },
    Tags {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tag: Option<String>,
    },
    Chain {
        instrument_id: String,
    },
    Options {
        chain_id: String,
        expiration_date: NaiveDate,
        option_type: String,
    },
    MarketData {
        option_id: String,
    },
    ConvertToken,
}

impl EndpointCall {
    /// Decode a call from its JSON description.
    pub fn from_json(json: &str) -> Result<Self, EndpointError> {
        serde_json::from_str(json).map_err(|e| EndpointError::InvalidCall(e.to_string()))
    }
}

/// Parse an option expiration date in its canonical `YYYY-MM-DD` form.
pub fn parse_expiration_date(input: &str) -> Result<NaiveDate, EndpointError> {
    NaiveDate::parse_from_str(input, EXPIRATION_DATE_FORMAT).map_err(|e| {
        EndpointError::InvalidDate {
            input: input.to_string(),
            reason: e.to_string(),
        }
    })
}

impl Endpoints {
    /// URL for a call described as data. Same result as calling the matching
    /// method directly.
    pub fn url_for(&self, call: &EndpointCall) -> String {
        match call {
            EndpointCall::Login => self.login(),
            EndpointCall::Logout => self.logout(),
            EndpointCall::Accounts => self.accounts(),
            EndpointCall::Ach { option } => self.ach(option.as_deref()),
            EndpointCall::Applications => self.applications(),
            EndpointCall::Dividends => self.dividends(),
            EndpointCall::Instruments {
                instrument_id,
                option,
            } => self.instruments(instrument_id.as_deref(), option.as_deref()),
            EndpointCall::MarginUpgrades => self.margin_upgrades(),
            EndpointCall::Markets => self.markets(),
            EndpointCall::Notifications => self.notifications(),
            EndpointCall::Orders { order_id } => self.orders(order_id.as_deref()),
            EndpointCall::PasswordReset => self.password_reset(),
            EndpointCall::Portfolios => self.portfolios(),
            EndpointCall::Positions => self.positions(),
            EndpointCall::Quotes => self.quotes(),
            EndpointCall::Historicals => self.historicals(),
            EndpointCall::DocumentRequests => self.document_requests(),
            EndpointCall::User => self.user(),
            EndpointCall::Watchlists => self.watchlists(),
            EndpointCall::News { stock } => self.news(stock),
            EndpointCall::Fundamentals { stock } => self.fundamentals(stock),
            EndpointCall::Tags { tag } => self.tags(tag.as_deref()),
            EndpointCall::Chain { instrument_id } => self.chain(instrument_id),
            EndpointCall::Options {
                chain_id,
                expiration_date,
                option_type,
            } => self.options(chain_id, *expiration_date, option_type),
            EndpointCall::MarketData { option_id } => self.market_data(option_id),
            EndpointCall::ConvertToken => self.convert_token(),
        }
    }
}
